use log::warn;

use super::lookup::TableDir;
use super::special::rrz;
use crate::error::{EvalError, Result};

// ---------------------------------------------------------------------------
// Top-level composition
// ---------------------------------------------------------------------------

/// `Grs(x, y, z) = 0.1389·Rrz(x, y, y) + 1.8389·Rrz(x−y, z, y)`.
pub fn grs(dir: &TableDir, x: f64, y: f64, z: f64) -> Result<f64> {
    Ok(0.1389 * rrz(dir, x, y, y)? + 1.8389 * rrz(dir, x - y, z, y)?)
}

/// The composite function.
///
/// Attempts `x·Grs(x, y, z) + y·Grs(x, z, y)`. If any table file in the
/// call tree is missing, reports it and returns the closed-form substitute
/// `1.3498·x + 2.2362·y·z − 2.348·x·y` instead. Domain and parse failures
/// are not handled here; they propagate to the entry point.
pub fn fun(dir: &TableDir, x: f64, y: f64, z: f64) -> Result<f64> {
    let attempt = grs(dir, x, y, z).and_then(|a| Ok(x * a + y * grs(dir, x, z, y)?));
    match attempt {
        Err(err @ EvalError::TableUnavailable { .. }) => {
            warn!("table missing, falling back to closed form");
            println!("{err}");
            Ok(1.3498 * x + 2.2362 * y * z - 2.348 * x * y)
        }
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
