// ============================================================
// Layer 5 — Model Errors
// ============================================================
// Every way a forward pass can be rejected before the tensor
// backend is asked to do something it cannot do.
//
// None of these are recovered inside the ml layer — they
// propagate up to whoever drives the model (a use case or
// a training loop), which decides whether to fail the batch.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// A token id is outside `[0, vocab_size)`
    #[error("token id {id} is out of range for a vocabulary of {vocab_size}")]
    TokenOutOfRange { id: i64, vocab_size: usize },

    /// The input is longer than the positional table
    #[error("sequence length {seq_len} exceeds positional capacity {capacity}")]
    SequenceTooLong { seq_len: usize, capacity: usize },

    /// A dimension does not match what the module was built for
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what:     &'static str,
        expected: usize,
        actual:   usize,
    },

    #[error("invalid model config: {0}")]
    InvalidConfig(String),
}
