// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// `clap` and delegates to Layer 2 (application).
//
//   1. `init`       — build a model, write config + weights
//   2. `forward`    — run token ids through a checkpoint
//   3. `positional` — print the positional table
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ForwardArgs, InitArgs, PositionalArgs};

use crate::domain::token_batch::TokenBatch;

#[derive(Parser, Debug)]
#[command(
    name = "transformer-blocks",
    version = "0.1.0",
    about = "Transformer building blocks: embeddings, positional encoding, layer norm, feed-forward."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route to the matching use case — never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args)       => Self::run_init(args),
            Commands::Forward(args)    => Self::run_forward(args),
            Commands::Positional(args) => Self::run_positional(args),
        }
    }

    fn run_init(args: InitArgs) -> Result<()> {
        use crate::application::init_use_case::InitUseCase;

        let checkpoint_dir = args.checkpoint_dir.clone();
        let use_case       = InitUseCase::new(args.into(), checkpoint_dir.clone());
        let num_params     = use_case.execute()?;

        println!("Initialised {num_params} parameters. Checkpoint saved to '{checkpoint_dir}'.");
        Ok(())
    }

    fn run_forward(args: ForwardArgs) -> Result<()> {
        use crate::application::forward_use_case::ForwardUseCase;

        let batch: TokenBatch = args.ids.parse()?;
        let use_case          = ForwardUseCase::new(&args.checkpoint_dir)?;
        let output            = use_case.run(&batch)?;

        let [batch_size, seq_len, d_model] = output.dims;
        println!("Output shape: [{batch_size}, {seq_len}, {d_model}]");

        for b in 0..batch_size {
            for p in 0..seq_len {
                let v = output.vector(b, p);
                if args.summary {
                    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
                    println!("[{b}, {p}] |x| = {norm:.4}");
                } else {
                    println!("[{b}, {p}] {}", format_row(v));
                }
            }
        }
        Ok(())
    }

    fn run_positional(args: PositionalArgs) -> Result<()> {
        use crate::application::inspect_use_case::positional_rows;

        for (p, row) in positional_rows(args.seq_len, args.d_model)?.iter().enumerate() {
            println!("{p:>4} {}", format_row(row));
        }
        Ok(())
    }
}

fn format_row(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| format!("{v:>9.5}"))
        .collect::<Vec<_>>()
        .join(" ")
}
