//! Форматирование чисел по локали id-ID: точка - разделитель тысяч,
//! запятая - десятичный разделитель.

/// Форматирует целое с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Число с заданным количеством знаков после запятой
fn format_fixed(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };
    let digits = int_part.parse::<u64>().map(format_number).unwrap_or_else(|_| int_part.to_string());
    let sign = if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{}{},{}", sign, digits, f),
        None => format!("{}{}", sign, digits),
    }
}

/// Аналог `toLocaleString('id-ID')`: до трех знаков дробной части,
/// незначащие нули отбрасываются
pub fn format_locale(value: f64) -> String {
    let fixed = format_fixed(value, 3);
    match fixed.split_once(',') {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{},{}", int_part, frac)
            }
        }
        None => fixed,
    }
}

/// Сумма в рупиях: `Rp 1.234.567,00`
pub fn format_idr(value: f64) -> String {
    format!("Rp {}", format_fixed(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_format_locale() {
        assert_eq!(format_locale(1_500_000.0), "1.500.000");
        assert_eq!(format_locale(1234.5), "1.234,5");
        assert_eq!(format_locale(0.1234), "0,123");
        assert_eq!(format_locale(-2500.0), "-2.500");
    }

    #[test]
    fn test_format_idr() {
        assert_eq!(format_idr(750_000_000.0), "Rp 750.000.000,00");
        assert_eq!(format_idr(1234.567), "Rp 1.234,57");
    }
}
