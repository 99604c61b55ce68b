// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal per use case.
//
// Rules for this layer:
//   - No ML math or model code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// Build and checkpoint a fresh model
pub mod init_use_case;

// Load a checkpoint and run a forward pass
pub mod forward_use_case;

// Positional table dump
pub mod inspect_use_case;
