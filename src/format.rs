//! Text rendering of picked coordinates.
//!
//! Detected coordinates use general notation with a fixed number of
//! significant digits, the same as C's `%.<n>g`: trailing zeros are dropped,
//! and exponent form is only used when the decimal exponent is below -4 or
//! not smaller than the precision.

/// Render a coordinate for output.
///
/// Non-detected points are masked unconditionally, whatever their value.
pub fn format_coordinate(value: f64, detected: bool, precision: usize, masked: &str) -> String {
    if !detected {
        return masked.to_string();
    }
    format_general(value, precision)
}

/// Shortest general-notation rendering of `value` with `precision` significant digits
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.max(1);

    // Exponent after rounding to the requested significant digits
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
