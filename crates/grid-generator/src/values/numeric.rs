//! Numeric measure value generation.
//!
//! Measure values are drawn uniformly from `[lower, upper)`, snapped to the
//! nearest multiple of `precision`, and rendered with a fixed number of
//! fractional digits derived from `precision` (0.001 -> 3 digits). The fixed
//! digit count keeps output text identical across platforms instead of
//! relying on default float-to-string conversion.

use rand::Rng;

/// Snap `value` to the nearest multiple of `precision`.
pub fn snap_to_precision(value: f64, precision: f64) -> f64 {
    (value / precision).round() * precision
}

/// Number of fractional digits needed to render multiples of `precision`
/// exactly (capped at 12).
pub fn scale_for_precision(precision: f64) -> usize {
    for scale in 0..=12u32 {
        let scaled = precision * 10f64.powi(scale as i32);
        if (scaled - scaled.round()).abs() < 1e-9 {
            return scale as usize;
        }
    }
    12
}

/// Draw one measure value and render it to text.
///
/// The snapped value stays within `[lower, upper)`: a draw near the upper
/// bound may round up to `upper`, in which case it is stepped back down by
/// one precision unit. Negative zero is normalized to plain zero.
pub fn generate_measure<R: Rng>(
    rng: &mut R,
    lower: f64,
    upper: f64,
    precision: f64,
    scale: usize,
) -> String {
    let raw = rng.random_range(lower..upper);
    let mut snapped = snap_to_precision(raw, precision);
    if snapped >= upper {
        snapped = snap_to_precision(upper - precision, precision);
    }
    if snapped == 0.0 {
        snapped = 0.0;
    }
    format!("{snapped:.scale$}")
}
