use super::model::{Channel, Table};

// ---------------------------------------------------------------------------
// Piecewise-linear interpolation
// ---------------------------------------------------------------------------

/// Interpolate one channel of a table at `x`.
///
/// Consecutive sample pairs are scanned in order and the first pair whose
/// inclusive x-range contains the query wins (at a shared boundary the
/// earlier pair is chosen). Inside a pair the channel value is interpolated
/// linearly. A degenerate pair with equal endpoints yields the left
/// sample's value rather than dividing by zero.
///
/// If no pair contains `x` – it lies outside the table's range, or the
/// table has fewer than two samples – the last sample's channel value is
/// returned unchanged. This clamping is silent by contract; an empty table
/// yields NaN.
pub fn interpolate(table: &Table, x: f64, channel: Channel) -> f64 {
    for pair in table.samples.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if lo.x <= x && x <= hi.x {
            let span = hi.x - lo.x;
            if span == 0.0 {
                return lo.channel(channel);
            }
            let y1 = lo.channel(channel);
            let y2 = hi.channel(channel);
            return y1 + (y2 - y1) * (x - lo.x) / span;
        }
    }
    table
        .samples
        .last()
        .map_or(f64::NAN, |s| s.channel(channel))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
