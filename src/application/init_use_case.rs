// ============================================================
// Layer 2 — InitUseCase
// ============================================================
// Builds a fresh SequenceStack and writes it to disk:
//
//   Step 1: Validate the config      (Layer 5 - ml)
//   Step 2: Initialise the modules   (Layer 5 - ml)
//   Step 3: Save config + weights    (Layer 6 - infra)
//
// This is the state a training loop starts from.

use anyhow::Result;
use burn::module::Module;

use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{ModelConfig, SequenceStack};

type InitBackend = burn::backend::Wgpu;

pub struct InitUseCase {
    config:         ModelConfig,
    checkpoint_dir: String,
}

impl InitUseCase {
    pub fn new(config: ModelConfig, checkpoint_dir: String) -> Self {
        Self { config, checkpoint_dir }
    }

    /// Returns the number of learned parameters written
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;
        cfg.validate()?;

        let device = burn::backend::wgpu::WgpuDevice::default();
        tracing::info!("Using WGPU device: {:?}", device);

        let model: SequenceStack<InitBackend> = cfg.init(&device);
        let num_params = model.num_params();
        tracing::info!(
            "Model ready: vocab={}, d_model={}, seq_len={}, d_ff={}, {} parameters",
            cfg.vocab_size, cfg.d_model, cfg.seq_len, cfg.d_ff, num_params,
        );

        let ckpt = CheckpointManager::new(self.checkpoint_dir.as_str())?;
        ckpt.save_config(cfg)?;
        ckpt.save_model(&model)?;
        tracing::info!("Checkpoint written to '{}'", ckpt.dir().display());

        Ok(num_params)
    }
}
