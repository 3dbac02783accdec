//! Float formatting matching the product's historical text output
//!
//! Titles and diagnostics have always been rendered with Python's float
//! `repr` (`1.0`, `0.25`, `1e-05`) and the `% .2f` matrix cells of rasterio's
//! `Affine`. Rust's `Display` drops the trailing `.0` and never switches to
//! exponent form, so both are reproduced here.

/// Shortest round-trip representation, laid out like Python's `repr(float)`.
///
/// Exponent form is used when the decimal exponent is below -4 or at least
/// 16, with a signed exponent of at least two digits.
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` gives the shortest round-trip digits as `d.ddde<exp>`
    let sci = format!("{:e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exp.abs());
    }

    let plain = format!("{}", value);
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

/// Two-decimal cell with a space in place of the plus sign (`% .2f`)
pub fn space_signed_fixed(value: f64) -> String {
    if value.is_sign_negative() && !value.is_nan() {
        format!("{:.2}", value)
    } else {
        format!(" {:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_keep_decimal_point() {
        assert_eq!(float_repr(1.0), "1.0");
        assert_eq!(float_repr(2.0), "2.0");
        assert_eq!(float_repr(-180.0), "-180.0");
        assert_eq!(float_repr(0.0), "0.0");
        assert_eq!(float_repr(-0.0), "-0.0");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(float_repr(0.25), "0.25");
        assert_eq!(float_repr(0.1), "0.1");
        assert_eq!(float_repr(0.01), "0.01");
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(-0.25), "-0.25");
    }

    #[test]
    fn test_exponent_thresholds() {
        assert_eq!(float_repr(0.00001), "1e-05");
        assert_eq!(float_repr(2.5e-7), "2.5e-07");
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(1e15), "1000000000000000.0");
        assert_eq!(float_repr(1.5e300), "1.5e+300");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(float_repr(f64::NAN), "nan");
        assert_eq!(float_repr(f64::INFINITY), "inf");
        assert_eq!(float_repr(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_space_signed_fixed() {
        assert_eq!(space_signed_fixed(0.25), " 0.25");
        assert_eq!(space_signed_fixed(-180.0), "-180.00");
        assert_eq!(space_signed_fixed(0.0), " 0.00");
        assert_eq!(space_signed_fixed(90.0), " 90.00");
    }
}
