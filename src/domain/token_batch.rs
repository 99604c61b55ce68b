// ============================================================
// Layer 3 — TokenBatch Domain Type
// ============================================================
// A batch of token-id sequences as produced by a tokenizer.
// Plain Rust, no Burn types: the data layer converts it to a
// tensor only once it is known to be well-formed.
//
// Text form used on the command line:
//   "1,2,3;4,5,6"  → two sequences of three ids each
//
// Rows are separated by ';' and ids by ','. Whitespace around
// either separator is ignored.

use anyhow::{bail, Context, Result};
use std::str::FromStr;

/// Rectangular batch of token ids — every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBatch {
    rows: Vec<Vec<u32>>,
}

impl TokenBatch {
    /// Build a batch, rejecting empty and ragged input.
    pub fn new(rows: Vec<Vec<u32>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            bail!("token batch must contain at least one sequence");
        };
        let seq_len = first.len();
        if seq_len == 0 {
            bail!("token sequences must not be empty");
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != seq_len) {
            bail!(
                "sequence {} has {} tokens, expected {} like the first sequence",
                i, row.len(), seq_len
            );
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    pub fn batch_size(&self) -> usize {
        self.rows.len()
    }

    pub fn seq_len(&self) -> usize {
        self.rows[0].len()
    }
}

impl FromStr for TokenBatch {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .split(';')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .enumerate()
            .map(|(i, row)| {
                row.split(',')
                    .map(str::trim)
                    .map(|id| {
                        id.parse::<u32>()
                            .with_context(|| format!("invalid token id '{id}' in sequence {i}"))
                    })
                    .collect::<Result<Vec<u32>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(rows)
    }
}
