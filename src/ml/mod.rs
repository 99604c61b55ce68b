// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains the Burn modules themselves.
//
// What's in this layer:
//
//   embeddings.rs   — token id → vector lookup, × √d_model
//   positional.rs   — fixed sinusoidal table + dropout
//   norm.rs         — scalar-affine layer normalisation
//   feed_forward.rs — d_model → d_ff → d_model with ReLU
//   model.rs        — ModelConfig and the SequenceStack that
//                     chains the four blocks
//   optim.rs        — the explicit optimizer step, the only
//                     path through which parameters change
//   inferencer.rs   — loads a checkpoint and runs forward
//   error.rs        — ModelError
//
// Every module follows Burn's Config → init(device) → forward
// pattern. Training mode is the Autodiff backend; `.valid()`
// gives the inference-mode module with dropout disabled.
//
// Reference: Burn Book §3 (Building Blocks)
//            Vaswani et al. (2017) Attention Is All You Need

pub mod error;

pub mod embeddings;

pub mod positional;

pub mod norm;

pub mod feed_forward;

/// ModelConfig and the four-block SequenceStack
pub mod model;

pub mod optim;

/// Inference engine — loads checkpoint and runs the stack
pub mod inferencer;
