// ============================================================
// Layer 5 — Layer Normalization
// ============================================================
// Normalises the last axis of every sample independently:
//
//   y = alpha * (x - mean) / (std + eps) + bias
//
// alpha and bias are single learned scalars broadcast over the
// feature axis (not per-feature vectors as in burn's LayerNorm).
// eps is added to the standard deviation, not the variance.
//
// By default std is the population estimator (ddof = 0), which
// gives exactly unit variance before scale/shift. `unbiased`
// switches to the sample estimator (ddof = 1).

use burn::{module::Param, prelude::*};

#[derive(Config, Debug)]
pub struct LayerNormalizationConfig {
    #[config(default = 1e-6)]
    pub eps: f64,

    /// Use the ddof = 1 standard deviation
    #[config(default = false)]
    pub unbiased: bool,
}

impl LayerNormalizationConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> LayerNormalization<B> {
        LayerNormalization {
            alpha:    Param::from_tensor(Tensor::ones([1], device)),
            bias:     Param::from_tensor(Tensor::zeros([1], device)),
            eps:      self.eps,
            unbiased: self.unbiased,
        }
    }
}

#[derive(Module, Debug)]
pub struct LayerNormalization<B: Backend> {
    /// Multiplicative scale — shape: [1]
    pub alpha:    Param<Tensor<B, 1>>,
    /// Additive shift — shape: [1]
    pub bias:     Param<Tensor<B, 1>>,
    pub eps:      f64,
    pub unbiased: bool,
}

impl<B: Backend> LayerNormalization<B> {
    pub fn forward<const D: usize>(&self, x: Tensor<B, D>) -> Tensor<B, D> {
        let (var, mean) = if self.unbiased {
            x.clone().var_mean(D - 1)
        } else {
            x.clone().var_mean_bias(D - 1)
        };
        let std = var.sqrt();

        let alpha = self.alpha.val().unsqueeze::<D>();
        let bias  = self.bias.val().unsqueeze::<D>();

        x.sub(mean)
            .div(std.add_scalar(self.eps))
            .mul(alpha)
            .add(bias)
    }
}
