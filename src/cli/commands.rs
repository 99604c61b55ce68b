// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands `init`, `forward` and `positional`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::ml::model::ModelConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialise a model and write its config and weights
    Init(InitArgs),

    /// Run token ids through a checkpointed model
    Forward(ForwardArgs),

    /// Print the sinusoidal positional table
    Positional(PositionalArgs),
}

/// All arguments for the `init` command.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the config and weights to
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Number of rows in the embedding table
    #[arg(long, default_value_t = 30522)]
    pub vocab_size: usize,

    /// Hidden dimension (d_model in the paper)
    #[arg(long, default_value_t = 512)]
    pub d_model: usize,

    /// Longest sequence the positional table can serve
    #[arg(long, default_value_t = 512)]
    pub seq_len: usize,

    /// Inner dimension of the feed-forward block
    /// Typically 4x d_model
    #[arg(long, default_value_t = 2048)]
    pub d_ff: usize,

    /// Dropout probability — only active during training
    #[arg(long, default_value_t = 0.1)]
    pub dropout: f64,

    /// Added to the standard deviation in layer normalisation
    #[arg(long, default_value_t = 1e-6)]
    pub eps: f64,

    /// Normalise with the sample (n - 1) standard deviation
    #[arg(long)]
    pub unbiased_std: bool,
}

/// The application layer never sees clap types.
impl From<InitArgs> for ModelConfig {
    fn from(a: InitArgs) -> Self {
        ModelConfig::new(a.vocab_size, a.d_model, a.seq_len, a.d_ff)
            .with_dropout(a.dropout)
            .with_eps(a.eps)
            .with_unbiased_std(a.unbiased_std)
    }
}

#[derive(Args, Debug)]
pub struct ForwardArgs {
    /// Token ids: ids separated by ',' and sequences by ';'
    /// e.g. "1,2,3;4,5,6"
    #[arg(long)]
    pub ids: String,

    /// Directory written by `init`
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Print per-position norms instead of full vectors
    #[arg(long)]
    pub summary: bool,
}

#[derive(Args, Debug)]
pub struct PositionalArgs {
    #[arg(long, default_value_t = 8)]
    pub seq_len: usize,

    #[arg(long, default_value_t = 8)]
    pub d_model: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_into_config() {
        let args = InitArgs {
            checkpoint_dir: "ckpt".to_string(),
            vocab_size:     100,
            d_model:        16,
            seq_len:        32,
            d_ff:           64,
            dropout:        0.2,
            eps:            1e-5,
            unbiased_std:   true,
        };
        let cfg: ModelConfig = args.into();
        assert_eq!(cfg.vocab_size, 100);
        assert_eq!(cfg.d_ff, 64);
        assert_eq!(cfg.dropout, 0.2);
        assert_eq!(cfg.eps, 1e-5);
        assert!(cfg.unbiased_std);
    }
}
