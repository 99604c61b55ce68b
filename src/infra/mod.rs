// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
//   checkpoint.rs — Saving and loading model weights
//                   with Burn's CompactRecorder, plus the
//                   ModelConfig as JSON so the stack can be
//                   rebuilt before its weights are loaded.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;
