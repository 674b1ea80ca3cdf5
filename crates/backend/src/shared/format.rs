/// Groups digits in threes with dots, the Indonesian way (`1.234.567`).
/// Used for byte counts in the access log and for Rupiah amounts.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rupiah amount for log lines, rounded to whole rupiah
///
/// ```
/// use backend::shared::format::format_rupiah;
/// assert_eq!(format_rupiah(65000.0), "Rp 65.000");
/// assert_eq!(format_rupiah(-1500.4), "-Rp 1.500");
/// ```
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format_number(rounded.abs() as usize);
    if rounded < 0.0 {
        format!("-Rp {}", digits)
    } else {
        format!("Rp {}", digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupiah_amounts() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(999.6), "Rp 1.000");
        assert_eq!(format_rupiah(1250000.0), "Rp 1.250.000");
        assert_eq!(format_rupiah(1234567890.0), "Rp 1.234.567.890");
    }

    #[test]
    fn log_sizes() {
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(10_240), "10.240");
    }
}
