// ============================================================
// Layer 5 — Position-wise Feed-Forward Block
// ============================================================
//   y = W2 · dropout(relu(W1 · x + b1)) + b2
//
// Expands every position from d_model to d_ff, applies ReLU,
// then contracts back. The same weights are applied at every
// position, so the output shape always equals the input shape.

use burn::{
    nn::{Dropout, DropoutConfig, Linear, LinearConfig},
    prelude::*,
    tensor::activation::relu,
};

#[derive(Config, Debug)]
pub struct FeedForwardBlockConfig {
    pub d_model: usize,
    /// Inner (expanded) width, typically 4 × d_model
    pub d_ff:    usize,
    pub dropout: f64,
}

impl FeedForwardBlockConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> FeedForwardBlock<B> {
        FeedForwardBlock {
            linear_1: LinearConfig::new(self.d_model, self.d_ff).init(device),
            dropout:  DropoutConfig::new(self.dropout).init(),
            linear_2: LinearConfig::new(self.d_ff, self.d_model).init(device),
        }
    }
}

#[derive(Module, Debug)]
pub struct FeedForwardBlock<B: Backend> {
    pub linear_1: Linear<B>,
    pub dropout:  Dropout,
    pub linear_2: Linear<B>,
}

impl<B: Backend> FeedForwardBlock<B> {
    pub fn forward<const D: usize>(&self, x: Tensor<B, D>) -> Tensor<B, D> {
        let hidden = relu(self.linear_1.forward(x));
        self.linear_2.forward(self.dropout.forward(hidden))
    }
}
