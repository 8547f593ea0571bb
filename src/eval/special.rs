use log::debug;

use super::lookup::{t, u, TableDir};
use crate::error::{EvalError, Result};

// ---------------------------------------------------------------------------
// Recursive special-function cluster
// ---------------------------------------------------------------------------
//
// Six mutually referencing approximations built on the T/U table lookups.
// Every function is total over the reals except `srs`, which fails with
// `EvalError::Domain` when neither discriminant admits a square root;
// `rrz` is the one frame that recovers from that failure.

pub fn srz(dir: &TableDir, x: f64, y: f64, z: f64) -> Result<f64> {
    if x > y {
        Ok(t(dir, x)? + u(dir, z)? - t(dir, y)?)
    } else {
        Ok(t(dir, y)? + u(dir, y)? - u(dir, z)?)
    }
}

pub fn rrz_alg2(dir: &TableDir, x: f64, y: f64, z: f64) -> Result<f64> {
    if x > y {
        Ok(x * y * (x * srz(dir, y, z, y)?))
    } else {
        Ok(x * z * (y * srz(dir, x, y, x)?))
    }
}

pub fn rrz_alg3(dir: &TableDir, x: f64, y: f64, z: f64) -> Result<f64> {
    if x > y {
        Ok(x * y * (x * srz(dir, y, z, y)?))
    } else {
        Ok(y * z * (y * srz(dir, x, y, x)?))
    }
}

/// Square-root form. The discriminants are checked before any table
/// lookup happens, so a domain failure never touches the filesystem.
pub fn srs(dir: &TableDir, x: f64, y: f64, z: f64) -> Result<f64> {
    if z > y && z * z + x * y > 0.0 {
        return Ok(srz(dir, x, y, z)? + y * (z * z + x * y).sqrt());
    }
    if z <= y && x * x + z * y > 0.0 {
        return Ok(y + srz(dir, z, x, y)? * (x * x + z * y).sqrt());
    }
    Err(EvalError::Domain)
}

pub fn qrz(dir: &TableDir, x: f64, y: f64) -> Result<f64> {
    if x.abs() < 1.0 {
        Ok(x * srs(dir, x, y, x)?)
    } else {
        Ok(y * srs(dir, y, x, y)?)
    }
}

/// Primary form with a two-algorithm fallback.
///
/// A `Domain` failure from the `qrz` attempt is caught here and replaced
/// by an alternate computation keyed on the sign of `z² + x·y` – the same
/// discriminant that made the square-root form unusable. Table errors are
/// not inspected; they pass through.
pub fn rrz(dir: &TableDir, x: f64, y: f64, z: f64) -> Result<f64> {
    let attempt = if x > y {
        qrz(dir, y, z).map(|q| x * z * q)
    } else {
        qrz(dir, x, y).map(|q| y * x * q)
    };
    match attempt {
        Err(EvalError::Domain) => {
            if z * z + x * y < 0.0 {
                debug!("domain failure in qrz, switching to alg2");
                rrz_alg2(dir, x, y, z)
            } else {
                debug!("domain failure in qrz, switching to alg3");
                rrz_alg3(dir, x, y, z)
            }
        }
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
