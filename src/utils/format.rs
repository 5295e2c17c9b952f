//! Number formatting for embeds

/// Fixed decimals with thousands separators: `1234567.891` -> `1,234,567.8910`
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    let sign = if value.is_sign_negative() && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_integer_part() {
        assert_eq!(format_thousands(1234567.891, 4), "1,234,567.8910");
        assert_eq!(format_thousands(999.5, 4), "999.5000");
        assert_eq!(format_thousands(1000.0, 0), "1,000");
        assert_eq!(format_thousands(0.00012345, 4), "0.0001");
    }

    #[test]
    fn test_negative_values_keep_sign() {
        assert_eq!(format_thousands(-12345.5, 2), "-12,345.50");
        assert_eq!(format_thousands(-0.00001, 4), "0.0000");
    }
}
