//! # Training Batches

use ndarray::{Array1, Array3, Axis};

/// A batch of one-hot encoded sequences and their labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Inputs ``[batch_size, max_seq_len, vocab_len + 1]``.
    pub inputs: Array3<f32>,

    /// Labels ``[batch_size]``.
    pub labels: Array1<f32>,
}

impl Batch {
    /// Create an all-zero batch.
    pub fn zeros(
        batch_size: usize,
        max_seq_len: usize,
        encoding_dim: usize,
    ) -> Self {
        Self {
            inputs: Array3::zeros((batch_size, max_seq_len, encoding_dim)),
            labels: Array1::zeros(batch_size),
        }
    }

    /// The number of slots.
    pub fn batch_size(&self) -> usize {
        self.inputs.len_of(Axis(0))
    }

    /// The sequence length of every slot.
    pub fn max_seq_len(&self) -> usize {
        self.inputs.len_of(Axis(1))
    }

    /// The one-hot width of each timestep.
    pub fn encoding_dim(&self) -> usize {
        self.inputs.len_of(Axis(2))
    }

    /// The active index of each timestep of a slot; `None` for padding.
    ///
    /// ## Panics
    /// Panics if `slot >= batch_size()`.
    pub fn active_indices(
        &self,
        slot: usize,
    ) -> Vec<Option<usize>> {
        self.inputs
            .index_axis(Axis(0), slot)
            .outer_iter()
            .map(|step| step.iter().position(|&v| v != 0.0))
            .collect()
    }

    /// The number of non-padding timesteps of a slot.
    pub fn sequence_len(
        &self,
        slot: usize,
    ) -> usize {
        self.active_indices(slot)
            .iter()
            .filter(|idx| idx.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_accessors() {
        let batch = Batch::zeros(4, 10, 7);
        assert_eq!(batch.batch_size(), 4);
        assert_eq!(batch.max_seq_len(), 10);
        assert_eq!(batch.encoding_dim(), 7);
        assert_eq!(batch.labels.len(), 4);
    }

    #[test]
    fn test_active_indices() {
        let mut batch = Batch::zeros(2, 3, 4);
        batch.inputs[[1, 0, 2]] = 1.0;
        batch.inputs[[1, 1, 0]] = 1.0;

        assert_eq!(batch.active_indices(0), vec![None, None, None]);
        assert_eq!(batch.active_indices(1), vec![Some(2), Some(0), None]);
        assert_eq!(batch.sequence_len(1), 2);
    }
}
