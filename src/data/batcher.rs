// ============================================================
// Layer 4 — Token Batcher
// ============================================================
// Implements Burn's Batcher trait to turn rows of token ids
// into one Int tensor on the target device.
//
//   Input:  Vec of N rows, each with S token ids
//   Output: Tensor<B, 2, Int> of shape [N, S]
//
// Rows are flattened row-major, then reshaped:
//   [r1_t1, ..., r1_tS, r2_t1, ..., rN_tS] → [N, S]
//
// All rows must already have the same length; TokenBatch
// guarantees that before anything reaches this point.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

/// Holds the device so tensors are created on the right GPU/CPU.
#[derive(Clone, Debug)]
pub struct TokenBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> TokenBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<Vec<u32>, Tensor<B, 2, Int>> for TokenBatcher<B> {
    fn batch(&self, items: Vec<Vec<u32>>) -> Tensor<B, 2, Int> {
        let batch_size = items.len();
        let seq_len    = items.first().map_or(0, Vec::len);

        // Burn Int tensors are built from i32 here, like the rest of the crate.
        // Ids above i32::MAX saturate so the range check still rejects them.
        let flat: Vec<i32> = items
            .iter()
            .flat_map(|row| row.iter().map(|&id| i32::try_from(id).unwrap_or(i32::MAX)))
            .collect();

        Tensor::<B, 1, Int>::from_ints(flat.as_slice(), &self.device)
            .reshape([batch_size, seq_len])
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_batch_shape_and_order() {
        let batcher = TokenBatcher::<TestBackend>::new(Default::default());
        let tensor  = batcher.batch(vec![vec![1, 2, 3], vec![4, 5, 6]]);

        assert_eq!(tensor.dims(), [2, 3]);
        let values: Vec<i64> = tensor
            .into_data()
            .convert::<i64>()
            .to_vec()
            .unwrap();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }
}
