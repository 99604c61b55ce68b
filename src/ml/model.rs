use burn::prelude::*;

use crate::ml::{
    embeddings::{InputEmbeddings, InputEmbeddingsConfig},
    error::ModelError,
    feed_forward::{FeedForwardBlock, FeedForwardBlockConfig},
    norm::{LayerNormalization, LayerNormalizationConfig},
    positional::{PositionalEncoding, PositionalEncodingConfig},
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct ModelConfig {
    pub vocab_size: usize,
    pub d_model:    usize,
    /// Capacity of the positional table
    pub seq_len:    usize,
    pub d_ff:       usize,
    #[config(default = 0.1)]
    pub dropout:    f64,
    #[config(default = 1e-6)]
    pub eps:        f64,
    #[config(default = false)]
    pub unbiased_std: bool,
}

impl ModelConfig {
    pub fn validate(&self) -> Result<(), ModelError> {
        let dims = [
            ("vocab_size", self.vocab_size),
            ("d_model", self.d_model),
            ("seq_len", self.seq_len),
            ("d_ff", self.d_ff),
        ];
        if let Some((name, _)) = dims.iter().find(|(_, v)| *v == 0) {
            return Err(ModelError::InvalidConfig(format!("{name} must be positive")));
        }
        if !(0.0..1.0).contains(&self.dropout) {
            return Err(ModelError::InvalidConfig(format!(
                "dropout must be in [0, 1), got {}", self.dropout
            )));
        }
        if !(self.eps > 0.0) {
            return Err(ModelError::InvalidConfig(format!(
                "eps must be positive, got {}", self.eps
            )));
        }
        Ok(())
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> SequenceStack<B> {
        let embeddings   = InputEmbeddingsConfig::new(self.d_model, self.vocab_size).init(device);
        let positional   = PositionalEncodingConfig::new(self.d_model, self.seq_len, self.dropout)
            .init(device);
        let norm         = LayerNormalizationConfig::new()
            .with_eps(self.eps)
            .with_unbiased(self.unbiased_std)
            .init(device);
        let feed_forward = FeedForwardBlockConfig::new(self.d_model, self.d_ff, self.dropout)
            .init(device);
        SequenceStack { embeddings, positional, norm, feed_forward }
    }
}

/// The four blocks chained in the order a Transformer stage uses them.
#[derive(Module, Debug)]
pub struct SequenceStack<B: Backend> {
    pub embeddings:   InputEmbeddings<B>,
    pub positional:   PositionalEncoding<B>,
    pub norm:         LayerNormalization<B>,
    pub feed_forward: FeedForwardBlock<B>,
}

impl<B: Backend> SequenceStack<B> {
    /// ids: [batch, seq] → [batch, seq, d_model]
    pub fn forward(&self, ids: Tensor<B, 2, Int>) -> Result<Tensor<B, 3>, ModelError> {
        let x = self.embeddings.forward(ids)?;
        let x = self.positional.forward(x)?;
        let x = self.norm.forward(x);
        Ok(self.feed_forward.forward(x))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    fn small_config() -> ModelConfig {
        ModelConfig::new(10, 4, 5, 16)
    }

    #[test]
    fn test_defaults() {
        let cfg = small_config();
        assert_eq!(cfg.dropout, 0.1);
        assert_eq!(cfg.eps, 1e-6);
        assert!(!cfg.unbiased_std);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_dims() {
        let cfg = ModelConfig::new(10, 0, 5, 16);
        assert!(matches!(cfg.validate(), Err(ModelError::InvalidConfig(msg)) if msg.contains("d_model")));
    }

    #[test]
    fn test_validate_rejects_bad_dropout() {
        assert!(small_config().with_dropout(1.0).validate().is_err());
        assert!(small_config().with_dropout(-0.1).validate().is_err());
        assert!(small_config().with_dropout(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_eps() {
        assert!(small_config().with_eps(0.0).validate().is_err());
    }

    #[test]
    fn test_forward_shape() {
        let device = Default::default();
        let model  = small_config().init::<TestBackend>(&device);
        let ids    = Tensor::<TestBackend, 2, Int>::from_ints([[1, 2, 3], [4, 5, 6]], &device);

        assert_eq!(model.forward(ids).unwrap().dims(), [2, 3, 4]);
    }

    #[test]
    fn test_forward_propagates_errors() {
        let device = Default::default();
        let model  = small_config().init::<TestBackend>(&device);

        let bad_id = Tensor::<TestBackend, 2, Int>::from_ints([[1, 12]], &device);
        assert!(matches!(model.forward(bad_id), Err(ModelError::TokenOutOfRange { id: 12, .. })));

        let too_long = Tensor::<TestBackend, 2, Int>::from_ints([[1, 2, 3, 4, 5, 6]], &device);
        assert!(matches!(model.forward(too_long), Err(ModelError::SequenceTooLong { .. })));
    }

    #[test]
    fn test_too_long_batch_reports_capacity() {
        // Same message the forward command prints
        let device = Default::default();
        let model  = small_config().init::<TestBackend>(&device);
        let ids    = Tensor::<TestBackend, 2, Int>::from_ints([[1, 2, 3, 4, 5, 6], [6, 5, 4, 3, 2, 1]], &device);

        let err = model.forward(ids).unwrap_err();
        assert_eq!(err, ModelError::SequenceTooLong { seq_len: 6, capacity: 5 });

        let err: anyhow::Error = err.into();
        assert_eq!(err.to_string(), "sequence length 6 exceeds positional capacity 5");
    }

    #[test]
    fn test_config_json_round_trip() {
        let cfg  = small_config().with_unbiased_std(true);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ModelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.d_ff, 16);
        assert!(back.unbiased_std);
    }
}
