//! Маскировка запечатанных ставок. Только отображение: сумма
//! в данных остается открытой.

use chrono::{DateTime, Utc};

use crate::shared::format::format_locale;

pub const SEALED_MASK: &str = "🔒 **********";

pub fn seal_bid(amount: f64, sealed: bool) -> String {
    if sealed {
        SEALED_MASK.to_string()
    } else {
        format!("IDR {}", format_locale(amount))
    }
}

/// Ставки можно вскрыть, если дата вскрытия не задана или уже наступила
pub fn can_open_bids(opening_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    opening_date.map_or(true, |date| now >= date)
}
