// ============================================================
// Layer 5 — Input Embeddings
// ============================================================
// Maps integer token ids to dense vectors of size d_model.
//
// The lookup result is multiplied by √d_model so the token
// signal keeps a comparable magnitude to the positional
// signal added right after it (Vaswani et al. §3.4).
//
//   ids  [batch, seq]  ──lookup──▶  [batch, seq, d_model]  × √d_model
//
// Ids are range-checked before the lookup.

use burn::{
    nn::{Embedding, EmbeddingConfig},
    prelude::*,
};

use crate::ml::error::ModelError;

#[derive(Config, Debug)]
pub struct InputEmbeddingsConfig {
    /// Size of each embedding vector
    pub d_model:    usize,
    /// Number of rows in the embedding table
    pub vocab_size: usize,
}

impl InputEmbeddingsConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> InputEmbeddings<B> {
        InputEmbeddings {
            embedding:  EmbeddingConfig::new(self.vocab_size, self.d_model).init(device),
            d_model:    self.d_model,
            vocab_size: self.vocab_size,
        }
    }
}

#[derive(Module, Debug)]
pub struct InputEmbeddings<B: Backend> {
    /// Learned table — shape: [vocab_size, d_model]
    pub embedding:  Embedding<B>,
    pub d_model:    usize,
    pub vocab_size: usize,
}

impl<B: Backend> InputEmbeddings<B> {
    /// ids: [batch, seq] → [batch, seq, d_model]
    pub fn forward(&self, ids: Tensor<B, 2, Int>) -> Result<Tensor<B, 3>, ModelError> {
        self.check_ids(&ids)?;
        let scale = (self.d_model as f64).sqrt();
        Ok(self.embedding.forward(ids).mul_scalar(scale))
    }

    fn check_ids(&self, ids: &Tensor<B, 2, Int>) -> Result<(), ModelError> {
        let [batch, seq] = ids.dims();
        if batch * seq == 0 {
            return Ok(());
        }

        let min: i64 = ids.clone().min().into_scalar().elem::<i64>();
        if min < 0 {
            return Err(ModelError::TokenOutOfRange { id: min, vocab_size: self.vocab_size });
        }

        let max: i64 = ids.clone().max().into_scalar().elem::<i64>();
        if max as usize >= self.vocab_size {
            return Err(ModelError::TokenOutOfRange { id: max, vocab_size: self.vocab_size });
        }

        Ok(())
    }
}
