//! Оценка HPS (Harga Perkiraan Sendiri) по дневной ставке актива

use chrono::NaiveDate;

use crate::shared::format::format_idr;

/// Метка для заявок без расчетной суммы
pub const BUDGETARY: &str = "Budgetary";

/// Количество дней аренды включительно; порядок дат не важен
pub fn rental_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().abs() + 1
}

/// Оценка стоимости аренды. `None`, если период не задан полностью
/// или ставка не положительная.
pub fn estimate_hps(from: Option<NaiveDate>, to: Option<NaiveDate>, daily_rate: f64) -> Option<f64> {
    let days = rental_days(from?, to?);
    let total = days as f64 * daily_rate;
    (days > 0 && total > 0.0).then_some(total)
}

pub fn format_hps(estimate: Option<f64>) -> String {
    match estimate {
        Some(value) => format_idr(value),
        None => BUDGETARY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn days_are_inclusive_and_symmetric() {
        assert_eq!(rental_days(date("2026-01-01"), date("2026-01-01")), 1);
        assert_eq!(rental_days(date("2026-01-01"), date("2026-01-10")), 10);
        assert_eq!(rental_days(date("2026-01-10"), date("2026-01-01")), 10);
    }

    #[test]
    fn estimate_multiplies_rate() {
        let hps = estimate_hps(Some(date("2026-02-01")), Some(date("2026-02-03")), 250_000_000.0);
        assert_eq!(hps, Some(750_000_000.0));
        assert_eq!(format_hps(hps), "Rp 750.000.000,00");
    }

    #[test]
    fn incomplete_period_is_budgetary() {
        assert_eq!(estimate_hps(None, Some(date("2026-02-03")), 1.0), None);
        assert_eq!(estimate_hps(Some(date("2026-02-01")), Some(date("2026-02-03")), 0.0), None);
        assert_eq!(format_hps(None), BUDGETARY);
    }
}
