use log::{debug, trace};

use crate::{
    bytes::{options::DisplayOptions, LAST_TIER},
    error::{FormatError, Result},
};

/// An `f64` has at most 1074 fractional decimal digits; everything past this
/// is an exact zero. Also keeps `format!` under its `u16::MAX` precision cap.
const MAX_EXACT_PRECISION: usize = 1100;

/// Formats `size` bytes as a human-readable string, e.g. `1024` with binary
/// units becomes `"1.0 KiB"`.
///
/// Fails with an invalid-argument error if `size` or the precision is
/// negative. Sizes past the peta tier stay on it with a larger value
/// (`1000^6` renders as `"1000.0 PB"`).
pub fn format_size(size: i64, options: &DisplayOptions) -> Result<String> {
    if size < 0 {
        return Err(FormatError::NegativeSize(size));
    }
    if options.precision < 0 {
        return Err(FormatError::NegativePrecision(options.precision));
    }
    let precision = usize::try_from(options.precision).unwrap_or(usize::MAX);

    let labels = options.resolve_labels();
    let factor = options.factor();
    debug!(
        "formatting {size} bytes: family={:?} factor={factor}",
        options.family()
    );

    let (value, tier) = scale_value(size as f64, factor);
    trace!("scaled to {value} at tier {tier} ({})", labels[tier]);

    Ok(render_size(
        value,
        &labels[tier],
        precision,
        &options.suffix,
        options.strip_trailing_zeros,
    ))
}

/// Divides by `factor` until the value drops below it or the last tier is
/// reached. Returns the scaled value and its tier index.
pub fn scale_value(mut value: f64, factor: f64) -> (f64, usize) {
    let mut tier = 0;

    while value >= factor && tier < LAST_TIER {
        value /= factor;
        tier += 1;
    }

    (value, tier)
}

/// Renders `"<value> <label><suffix>"`. Trailing-zero stripping only ever
/// touches the number, never the label or suffix.
pub fn render_size(
    value: f64,
    label: &str,
    precision: usize,
    suffix: &str,
    strip_trailing_zeros: bool,
) -> String {
    let exact = precision.min(MAX_EXACT_PRECISION);
    let mut number = format!("{value:.exact$}");

    if strip_trailing_zeros {
        if number.contains('.') {
            let len = number.trim_end_matches('0').trim_end_matches('.').len();
            number.truncate(len);
        }
    } else {
        number.extend(std::iter::repeat('0').take(precision - exact));
    }

    format!("{number} {label}{suffix}")
}
