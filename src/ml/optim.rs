// ============================================================
// Layer 5 — Optimizer Step
// ============================================================
// The one place learned parameters change.
//
// The module is moved in and the updated module is returned,
// so there is never a second live handle to stale weights:
//
//   grads  = loss.backward()
//   grads  = gradients restricted to `module`'s Params
//   module = optim.step(lr, module, grads)
//
// Constant tensors (the positional table) are not Params and
// are carried through the step untouched.
//
// Reference: Burn Book §5 (Custom Training Loop)

use burn::{
    module::AutodiffModule,
    optim::{GradientsParams, Optimizer},
    prelude::*,
    tensor::backend::AutodiffBackend,
};

pub fn optimizer_step<B, M, O>(optim: &mut O, lr: f64, module: M, loss: Tensor<B, 1>) -> M
where
    B: AutodiffBackend,
    M: AutodiffModule<B>,
    O: Optimizer<M, B>,
{
    let grads = loss.backward();
    let grads = GradientsParams::from_grads(grads, &module);
    optim.step(lr, module, grads)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::optim::SgdConfig;

    use crate::ml::model::{ModelConfig, SequenceStack};

    type TrainBackend = burn::backend::Autodiff<burn::backend::NdArray>;

    fn to_vec<const D: usize>(t: Tensor<TrainBackend, D>) -> Vec<f32> {
        t.into_data().to_vec().unwrap()
    }

    #[test]
    fn test_step_updates_params_and_keeps_shapes() {
        let device = Default::default();
        let cfg    = ModelConfig::new(10, 4, 5, 8).with_dropout(0.0);
        let model: SequenceStack<TrainBackend> = cfg.init(&device);
        let mut optim = SgdConfig::new().init::<TrainBackend, SequenceStack<TrainBackend>>();

        let emb_before   = to_vec(model.embeddings.embedding.weight.val());
        let ffn_before   = to_vec(model.feed_forward.linear_1.weight.val());
        let table_before = to_vec(model.positional.table());

        let ids   = Tensor::<TrainBackend, 2, Int>::from_ints([[1, 2, 3]], &device);
        let loss  = model.forward(ids).unwrap().powf_scalar(2.0).mean();
        let model = optimizer_step(&mut optim, 0.1, model, loss);

        assert_eq!(model.embeddings.embedding.weight.val().dims(), [10, 4]);
        assert_eq!(model.feed_forward.linear_1.weight.val().dims(), [4, 8]);
        assert_eq!(model.norm.alpha.val().dims(), [1]);

        assert_ne!(to_vec(model.embeddings.embedding.weight.val()), emb_before);
        assert_ne!(to_vec(model.feed_forward.linear_1.weight.val()), ffn_before);
        assert_eq!(to_vec(model.positional.table()), table_before);
    }

    #[test]
    fn test_unused_embedding_rows_untouched() {
        let device = Default::default();
        let cfg    = ModelConfig::new(6, 4, 3, 8).with_dropout(0.0);
        let model: SequenceStack<TrainBackend> = cfg.init(&device);
        let mut optim = SgdConfig::new().init::<TrainBackend, SequenceStack<TrainBackend>>();

        let before = to_vec(model.embeddings.embedding.weight.val());

        let ids   = Tensor::<TrainBackend, 2, Int>::from_ints([[0, 1]], &device);
        let loss  = model.forward(ids).unwrap().sum();
        let model = optimizer_step(&mut optim, 0.5, model, loss);

        let after = to_vec(model.embeddings.embedding.weight.val());
        // rows 2..6 never looked up → zero gradient
        assert_eq!(&after[8..], &before[8..]);
    }
}
