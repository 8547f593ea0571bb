use std::path::PathBuf;

use crate::data::interp::interpolate;
use crate::data::loader::load_table;
use crate::data::model::Channel;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Domain regions
// ---------------------------------------------------------------------------

/// The three-way partition of the real line used to pick a table.
///
/// Every real lands in exactly one region. The boundaries fold into the
/// reciprocal branches: `x == -1` and `x == 1` both classify as [`Pos`]
/// (neither satisfies `|x| < 1` nor `x < -1`).
///
/// [`Pos`]: Region::Pos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// `|x| < 1` – argument used as-is.
    Mid,
    /// `x < -1` – argument replaced by `1/x`.
    Neg,
    /// `x >= 1`, plus the `x == -1` boundary – argument replaced by `1/x`.
    Pos,
}

impl Region {
    pub fn classify(x: f64) -> Region {
        if x.abs() < 1.0 {
            Region::Mid
        } else if x < -1.0 {
            Region::Neg
        } else {
            Region::Pos
        }
    }

    /// Table file carrying this region's samples.
    pub fn file_name(self) -> &'static str {
        match self {
            Region::Mid => "dat_X_1_1.dat",
            Region::Neg => "dat_X00_1.dat",
            Region::Pos => "dat_X1_00.dat",
        }
    }

    /// Pre-transform applied to the argument before interpolation.
    pub fn transform(self, x: f64) -> f64 {
        match self {
            Region::Mid => x,
            Region::Neg | Region::Pos => 1.0 / x,
        }
    }
}

// ---------------------------------------------------------------------------
// Table directory
// ---------------------------------------------------------------------------

/// Where the three region tables live. Threaded explicitly through the
/// evaluator so nothing depends on process-wide state.
#[derive(Debug, Clone)]
pub struct TableDir {
    base: PathBuf,
}

impl TableDir {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn path_for(&self, region: Region) -> PathBuf {
        self.base.join(region.file_name())
    }
}

// ---------------------------------------------------------------------------
// Lookup functions
// ---------------------------------------------------------------------------

/// `T(x)`: primary-channel lookup in the region table for `x`.
pub fn t(dir: &TableDir, x: f64) -> Result<f64> {
    lookup(dir, x, Channel::Primary)
}

/// `U(x)`: secondary-channel lookup in the region table for `x`.
pub fn u(dir: &TableDir, x: f64) -> Result<f64> {
    lookup(dir, x, Channel::Secondary)
}

fn lookup(dir: &TableDir, x: f64, channel: Channel) -> Result<f64> {
    let region = Region::classify(x);
    // Reloaded on every call, even back-to-back for the same region.
    let table = load_table(&dir.path_for(region))?;
    Ok(interpolate(&table, region.transform(x), channel))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn classification_is_exhaustive_and_matches_regions() {
        assert_eq!(Region::classify(0.0), Region::Mid);
        assert_eq!(Region::classify(0.999), Region::Mid);
        assert_eq!(Region::classify(-0.999), Region::Mid);
        assert_eq!(Region::classify(-1.5), Region::Neg);
        assert_eq!(Region::classify(2.0), Region::Pos);
    }

    #[test]
    fn boundaries_fold_into_reciprocal_branch() {
        // Both exact boundaries select the positive-reciprocal table.
        assert_eq!(Region::classify(1.0), Region::Pos);
        assert_eq!(Region::classify(-1.0), Region::Pos);
    }

    #[test]
    fn outer_regions_use_reciprocal_argument() {
        assert_eq!(Region::Neg.transform(-2.0), -0.5);
        assert_eq!(Region::Pos.transform(4.0), 0.25);
        assert_eq!(Region::Mid.transform(0.3), 0.3);
    }

    #[test]
    fn t_and_u_read_distinct_channels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Region::Mid.file_name());
        let mut f = std::fs::File::create(path).unwrap();
        f.write_all(b"-1 0 0\n1 10 20\n").unwrap();

        let tables = TableDir::new(dir.path());
        assert_eq!(t(&tables, 0.0).unwrap(), 5.0);
        assert_eq!(u(&tables, 0.0).unwrap(), 10.0);
    }

    #[test]
    fn reciprocal_region_reads_its_own_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(Region::Pos.file_name());
        let mut f = std::fs::File::create(path).unwrap();
        // x = 2 → region Pos, argument 1/2.
        f.write_all(b"0 0 0\n1 4 8\n").unwrap();

        let tables = TableDir::new(dir.path());
        assert_eq!(t(&tables, 2.0).unwrap(), 2.0);
        assert_eq!(u(&tables, 2.0).unwrap(), 4.0);
    }
}
