// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::Result;
use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::batcher::TokenBatcher;
use crate::domain::token_batch::TokenBatch;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::SequenceStack;

type InferBackend = burn::backend::Wgpu;

/// Output of one forward pass, copied back to the host
#[derive(Debug, Clone)]
pub struct StackOutput {
    /// [batch, seq, d_model]
    pub dims:   [usize; 3],
    /// Row-major values
    pub values: Vec<f32>,
}

impl StackOutput {
    /// The d_model-sized vector at (batch, position)
    pub fn vector(&self, batch: usize, position: usize) -> &[f32] {
        let [_, seq, d] = self.dims;
        let start = (batch * seq + position) * d;
        &self.values[start..start + d]
    }
}

pub struct Inferencer {
    model:  SequenceStack<InferBackend>,
    device: burn::backend::wgpu::WgpuDevice,
}

impl Inferencer {
    pub fn from_checkpoint(ckpt_manager: &CheckpointManager) -> Result<Self> {
        let device = burn::backend::wgpu::WgpuDevice::default();
        let config = ckpt_manager.load_config()?;
        config.validate()?;

        // Non-autodiff backend: dropout is already the identity here
        let model: SequenceStack<InferBackend> = config.init(&device);
        let model = ckpt_manager.load_model(model, &device)?;
        tracing::info!("Model loaded from checkpoint");

        Ok(Self { model, device })
    }

    pub fn forward(&self, batch: &TokenBatch) -> Result<StackOutput> {
        let batcher = TokenBatcher::<InferBackend>::new(self.device.clone());
        let ids     = batcher.batch(batch.rows().to_vec());

        let output = self.model.forward(ids)?;
        let dims   = output.dims();
        let values = output
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read output tensor: {e:?}"))?;

        tracing::debug!("Forward pass output dims {:?}", dims);
        Ok(StackOutput { dims, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_indexing() {
        let out = StackOutput {
            dims:   [2, 2, 3],
            values: (0..12).map(|v| v as f32).collect(),
        };
        assert_eq!(out.vector(0, 1), &[3.0, 4.0, 5.0]);
        assert_eq!(out.vector(1, 0), &[6.0, 7.0, 8.0]);
    }
}
