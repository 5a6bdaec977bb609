//! Number formatting for table cells

/// Formats a value with a fixed number of decimals and no thousands separator.
///
/// Values exactly halfway between two results round away from zero, the way
/// the storefront's web client prints prices (`1.125` -> `1.13`).
///
/// ```rust,ignore
/// assert_eq!(format_fixed(1234.5, 2), "1234.50");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let Some(units) = tie_rounded_up(value, decimals) else {
        return format!("{:.prec$}", value, prec = decimals);
    };
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if decimals == 0 {
        return format!("{sign}{units}");
    }
    let scale = 10u128.pow(decimals as u32);
    format!(
        "{sign}{}.{:0width$}",
        units / scale,
        units % scale,
        width = decimals
    )
}

/// Formats a dollar amount with 2 decimals
///
/// ```rust,ignore
/// assert_eq!(format_price(12.5), "$12.50");
/// ```
pub fn format_price(value: f64) -> String {
    format!("${}", format_fixed(value, 2))
}

/// Magnitude of `value` in units of `10^-decimals`, rounded up, when `value`
/// sits exactly on a tie. `None` for every other value.
fn tie_rounded_up(value: f64, decimals: usize) -> Option<u128> {
    if !value.is_finite() || decimals > 20 {
        return None;
    }
    let bits = value.abs().to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mut mantissa, mut exp) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };
    if mantissa == 0 {
        return None;
    }
    let zeros = mantissa.trailing_zeros();
    mantissa >>= zeros;
    exp += zeros as i32;

    // |value| * 10^d == mantissa * 5^d * 2^(exp + d) with an odd mantissa,
    // which ends in exactly .5 only when exp + d == -1
    if exp != -(decimals as i32) - 1 {
        return None;
    }
    let doubled = u128::from(mantissa) * 5u128.pow(decimals as u32);
    Some((doubled + 1) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(1234567.891), "$1234567.89");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(3.0), "$3.00");
    }

    #[test]
    fn test_format_price_ties_round_up() {
        assert_eq!(format_price(1.125), "$1.13");
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(10.375), "$10.38");
        assert_eq!(format_price(-1.125), "$-1.13");
        // Not exact ties in binary, so they round to the nearer side
        assert_eq!(format_price(1.005), "$1.00");
        assert_eq!(format_price(2.675), "$2.67");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(1234.567, 0), "1235");
        assert_eq!(format_fixed(1234.567, 1), "1234.6");
        assert_eq!(format_fixed(1234.567, 3), "1234.567");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(0.5, 0), "1");
        assert_eq!(format_fixed(0.25, 1), "0.3");
    }
}
