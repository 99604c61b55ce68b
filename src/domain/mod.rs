// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing the inputs of the model.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//
// Reference: Rust Book §5 (Structs), §9 (Error Handling)

// A validated batch of token-id sequences
pub mod token_batch;
