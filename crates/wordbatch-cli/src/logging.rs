use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The effective log level; `default` applies when no `-v` is given.
    pub fn log_level(
        &self,
        default: u8,
    ) -> LogLevelNum {
        let level = if self.verbose > 0 {
            self.verbose
        } else {
            default
        };

        match level {
            0 => LogLevelNum::Off,
            1 => LogLevelNum::Error,
            2 => LogLevelNum::Warn,
            3 => LogLevelNum::Info,
            4 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Initialize the global `stderrlog` logger.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.log_level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let args = LogArgs::default();
        assert!(matches!(args.log_level(3), LogLevelNum::Info));
        assert!(matches!(args.log_level(0), LogLevelNum::Off));

        let args = LogArgs {
            verbose: 2,
            ..Default::default()
        };
        assert!(matches!(args.log_level(3), LogLevelNum::Warn));

        let args = LogArgs {
            verbose: 9,
            ..Default::default()
        };
        assert!(matches!(args.log_level(3), LogLevelNum::Trace));
    }
}
