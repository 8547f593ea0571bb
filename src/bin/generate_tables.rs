//! Writes the three region table files with smooth, deterministic sample
//! data so the evaluator can be exercised without real measurement data.
//!
//! Each file is 41 rows of `x  primary  secondary` covering [-1, 1], the
//! range every lookup argument is folded into by the reciprocal transform.

use std::fs::File;
use std::io::{BufWriter, Write};

/// Per-region curve pair: (primary, secondary) as functions of x.
fn curves(file: &str, x: f64) -> (f64, f64) {
    match file {
        // |x| < 1 region
        "dat_X_1_1.dat" => ((0.5 * x).sin() + 0.2 * x, x * x - 0.3 * x),
        // x < -1 region (argument already 1/x)
        "dat_X00_1.dat" => (0.8 * x - 0.1 * x * x, (1.0 + x * x).ln()),
        // x >= 1 region (argument already 1/x)
        _ => (x / (1.0 + x.abs()), 0.4 * x + 0.25 * x * x * x),
    }
}

fn main() -> std::io::Result<()> {
    let files = ["dat_X_1_1.dat", "dat_X00_1.dat", "dat_X1_00.dat"];

    for file in files {
        let mut out = BufWriter::new(File::create(file)?);
        for i in 0..=40 {
            let x = -1.0 + 0.05 * f64::from(i);
            let (primary, secondary) = curves(file, x);
            writeln!(out, "{x:.4} {primary:.6} {secondary:.6}")?;
        }
        out.flush()?;
        println!("Wrote 41 samples to {file}");
    }

    Ok(())
}
