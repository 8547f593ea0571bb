// ---------------------------------------------------------------------------
// Sample – one row of a table file
// ---------------------------------------------------------------------------

/// A single interpolation node: abscissa plus two value channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Abscissa. Within a table, non-decreasing (invariant assumed by
    /// the interpolator, not checked by the loader).
    pub x: f64,
    /// Primary channel (the `T` column).
    pub primary: f64,
    /// Secondary channel (the `U` column).
    pub secondary: f64,
}

/// Which value column of a [`Sample`] a lookup reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Primary,
    Secondary,
}

impl Sample {
    /// Value of the requested channel.
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Primary => self.primary,
            Channel::Secondary => self.secondary,
        }
    }
}

// ---------------------------------------------------------------------------
// Table – a complete loaded table
// ---------------------------------------------------------------------------

/// An ordered sequence of samples, owned by the call that loaded it.
/// Tables are never cached: every lookup reloads from disk.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub samples: Vec<Sample>,
}
