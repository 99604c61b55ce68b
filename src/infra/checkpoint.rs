// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores SequenceStack weights using Burn's
// named MessagePack + gzip recorder at full precision, so a
// reloaded stack reproduces the saved one bit for bit.
//
// What gets saved:
//   1. Model weights (.mpk.gz file) — all learned parameters
//   2. model_config.json            — architecture config
//
// The config is saved separately because the stack must be
// rebuilt with the exact same shapes before a record can be
// loaded into it. The positional table is a constant tensor,
// so it is regenerated by `init` rather than read back.
//
// File layout:
//   checkpoints/
//     model.mpk.gz        ← learned parameters
//     model_config.json   ← ModelConfig
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{FullPrecisionSettings, NamedMpkGzFileRecorder, Recorder},
};

use crate::ml::model::{ModelConfig, SequenceStack};

const MODEL_FILE:  &str = "model";
const CONFIG_FILE: &str = "model_config.json";

type ModelRecorder = NamedMpkGzFileRecorder<FullPrecisionSettings>;

/// Manages saving and loading of model checkpoints.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create checkpoint dir '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Save the stack's parameters to {dir}/model.mpk.gz
    pub fn save_model<B: Backend>(&self, model: &SequenceStack<B>) -> Result<()> {
        // Recorder appends the extension itself
        let path = self.dir.join(MODEL_FILE);

        ModelRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| {
                format!("Failed to save checkpoint to '{}'", path.display())
            })?;

        tracing::debug!("Saved model weights to '{}'", path.display());
        Ok(())
    }

    /// Load parameters into a freshly initialised stack.
    ///
    /// The model must have been built from the same config
    /// as the checkpoint or loading fails.
    pub fn load_model<B: Backend>(
        &self,
        model:  SequenceStack<B>,
        device: &B::Device,
    ) -> Result<SequenceStack<B>> {
        let path = self.dir.join(MODEL_FILE);

        let record = ModelRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!("Cannot load checkpoint '{}'. Have you run 'init' first?",
                    path.display())
            })?;

        Ok(model.load_record(record))
    }

    pub fn save_config(&self, cfg: &ModelConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| {
                format!("Cannot write config to '{}'", path.display())
            })?;

        tracing::debug!("Saved model config to '{}'", path.display());
        Ok(())
    }

    pub fn load_config(&self) -> Result<ModelConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read config from '{}'. \
                     Make sure you have run 'init' before 'forward'.",
                    path.display()
                )
            })?;

        serde_json::from_str(&json)
            .with_context(|| format!("Malformed config in '{}'", path.display()))
    }
}
