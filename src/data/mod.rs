// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Moves token ids from plain Rust rows onto a Burn device:
//
//   TokenBatch (domain)   → validated, rectangular Vec<Vec<u32>>
//       │
//       ▼
//   TokenBatcher          → Tensor<B, 2, Int> [batch, seq]
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Implements Burn's Batcher trait to create id tensors
pub mod batcher;
