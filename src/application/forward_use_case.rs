// ============================================================
// Layer 2 — ForwardUseCase
// ============================================================
// Loads a checkpoint and pushes a batch of token ids through
// the stack in inference mode. Range and capacity checks live
// in the ml layer and surface here as ModelError.

use anyhow::Result;

use crate::domain::token_batch::TokenBatch;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::inferencer::{Inferencer, StackOutput};

pub struct ForwardUseCase {
    inferencer: Inferencer,
}

impl ForwardUseCase {
    pub fn new(checkpoint_dir: &str) -> Result<Self> {
        let ckpt       = CheckpointManager::new(checkpoint_dir)?;
        let inferencer = Inferencer::from_checkpoint(&ckpt)?;
        Ok(Self { inferencer })
    }

    pub fn run(&self, batch: &TokenBatch) -> Result<StackOutput> {
        tracing::info!(
            "Running forward on {} sequence(s) of {} token(s)",
            batch.batch_size(), batch.seq_len(),
        );
        self.inferencer.forward(batch)
    }
}
