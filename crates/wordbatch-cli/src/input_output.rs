use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// Map the "-" stdio placeholder to `None`.
fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Input argument group.
#[derive(clap::Args, Debug, Default)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(
            squash_standard_io(&Some("out.txt".to_string())),
            Some("out.txt")
        );
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir::TempDir::new("io_args").unwrap();
        let path = dir.path().join("out.txt").display().to_string();

        let output = OutputArgs {
            output: Some(path.clone()),
        };
        {
            let mut writer = output.open_writer().unwrap();
            writeln!(writer, "hello").unwrap();
        }

        let input = InputArgs { input: Some(path) };
        let mut line = String::new();
        input.open_reader().unwrap().read_line(&mut line).unwrap();
        assert_eq!(line, "hello\n");
    }
}
