// ============================================================
// Layer 5 — Sinusoidal Positional Encoding
// ============================================================
// Self-attention is permutation-invariant, so order has to be
// injected explicitly. Unlike a learned position embedding this
// table is fixed:
//
//   PE(p, 2i)   = sin(p / 10000^(2i / d_model))
//   PE(p, 2i+1) = cos(p / 10000^(2i / d_model))
//
// The table is built once at construction with shape
// [1, seq_len, d_model] and stored as a constant tensor, not a
// Param — optimisers never see it and it never receives
// gradients. forward() adds the first `seq` rows (broadcast over
// the batch) and then applies dropout.
//
// Reference: Vaswani et al. (2017) §3.5

use burn::{
    nn::{Dropout, DropoutConfig},
    prelude::*,
};

use crate::ml::error::ModelError;

/// Base of the geometric progression of wavelengths
const MAX_TIMESCALE: f64 = 10_000.0;

#[derive(Config, Debug)]
pub struct PositionalEncodingConfig {
    pub d_model: usize,
    /// Longest sequence the table can serve
    pub seq_len: usize,
    /// Dropout probability applied after the addition
    pub dropout: f64,
}

impl PositionalEncodingConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> PositionalEncoding<B> {
        let values = sinusoid_table(self.seq_len, self.d_model);
        let table  = Tensor::<B, 1>::from_floats(values.as_slice(), device)
            .reshape([1, self.seq_len, self.d_model]);

        PositionalEncoding {
            table,
            dropout: DropoutConfig::new(self.dropout).init(),
            d_model: self.d_model,
            seq_len: self.seq_len,
        }
    }
}

#[derive(Module, Debug)]
pub struct PositionalEncoding<B: Backend> {
    /// Precomputed sinusoids — shape: [1, seq_len, d_model]
    table:       Tensor<B, 3>,
    dropout:     Dropout,
    pub d_model: usize,
    pub seq_len: usize,
}

impl<B: Backend> PositionalEncoding<B> {
    /// x: [batch, seq, d_model] → same shape
    pub fn forward(&self, x: Tensor<B, 3>) -> Result<Tensor<B, 3>, ModelError> {
        let [_batch, seq_len, d_model] = x.dims();

        if d_model != self.d_model {
            return Err(ModelError::ShapeMismatch {
                what:     "positional encoding d_model",
                expected: self.d_model,
                actual:   d_model,
            });
        }
        if seq_len > self.seq_len {
            return Err(ModelError::SequenceTooLong { seq_len, capacity: self.seq_len });
        }

        let pe = self.table
            .clone()
            .slice([0..1, 0..seq_len, 0..d_model])
            .detach();

        Ok(self.dropout.forward(x + pe))
    }

    /// The full positional table, [1, seq_len, d_model]
    pub fn table(&self) -> Tensor<B, 3> {
        self.table.clone()
    }
}

/// Row-major [seq_len, d_model] sinusoid values.
///
/// Angles are computed in f64 and narrowed once. An odd d_model is
/// allowed: the trailing even column gets its sine and no cosine.
pub fn sinusoid_table(seq_len: usize, d_model: usize) -> Vec<f32> {
    let mut values = Vec::with_capacity(seq_len * d_model);
    let d = d_model as f64;

    for pos in 0..seq_len {
        let p = pos as f64;
        for j in 0..d_model {
            let two_i = (j - j % 2) as f64;
            let angle = p / MAX_TIMESCALE.powf(two_i / d);
            let value = if j % 2 == 0 { angle.sin() } else { angle.cos() };
            values.push(value as f32);
        }
    }

    values
}
