// ============================================================
// Layer 2 — Positional Table Inspection
// ============================================================
// Produces the sinusoid table as plain rows so it can be
// printed without touching a device.

use anyhow::{ensure, Result};

use crate::ml::positional::sinusoid_table;

pub fn positional_rows(seq_len: usize, d_model: usize) -> Result<Vec<Vec<f32>>> {
    ensure!(seq_len > 0 && d_model > 0, "seq_len and d_model must be positive");

    Ok(sinusoid_table(seq_len, d_model)
        .chunks(d_model)
        .map(<[f32]>::to_vec)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_shape() {
        let rows = positional_rows(5, 4).unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], vec![0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_zero_dims_rejected() {
        assert!(positional_rows(0, 4).is_err());
        assert!(positional_rows(4, 0).is_err());
    }
}
