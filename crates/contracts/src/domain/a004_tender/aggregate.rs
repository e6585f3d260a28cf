use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::sealing::{can_open_bids, seal_bid};
use crate::shared::format::format_idr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BidStatus {
    Submitted,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TenderStatus {
    #[default]
    Draft,
    Published,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderBid {
    pub vendor_name: String,
    pub bid_amount: f64,
    pub submitted_date: NaiveDate,
    pub status: BidStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_score: Option<f64>,
}

/// Тендер с запечатанными ставками
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_opening_date: Option<DateTime<Utc>>,
    pub status: TenderStatus,
    pub items: Vec<String>,
    pub total_value: f64,
    #[serde(default)]
    pub bids: Vec<TenderBid>,
}

/// Ставка в виде для показа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidView {
    pub vendor_name: String,
    pub amount: String,
    pub submitted_date: NaiveDate,
    pub status: BidStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_score: Option<f64>,
}

/// Тендер для списка: суммы ставок замаскированы до вскрытия
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: TenderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_opening_date: Option<DateTime<Utc>>,
    pub bids_open: bool,
    pub total_value: String,
    pub bids: Vec<BidView>,
}

impl Tender {
    pub fn bids_open(&self, now: DateTime<Utc>) -> bool {
        can_open_bids(self.bid_opening_date, now)
    }

    /// Суммы ставок для показа: замаскированы до даты вскрытия
    pub fn bid_display(&self, now: DateTime<Utc>) -> Vec<(String, String)> {
        let sealed = !self.bids_open(now);
        self.bids
            .iter()
            .map(|bid| (bid.vendor_name.clone(), seal_bid(bid.bid_amount, sealed)))
            .collect()
    }

    pub fn view(&self, now: DateTime<Utc>) -> TenderView {
        let open = self.bids_open(now);
        TenderView {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            bid_opening_date: self.bid_opening_date,
            bids_open: open,
            total_value: format_idr(self.total_value),
            bids: self
                .bids
                .iter()
                .map(|bid| BidView {
                    vendor_name: bid.vendor_name.clone(),
                    amount: seal_bid(bid.bid_amount, !open),
                    submitted_date: bid.submitted_date,
                    status: bid.status,
                    compliance_score: bid.compliance_score,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tender(opening: Option<DateTime<Utc>>) -> Tender {
        Tender {
            id: "T-2026-01".into(),
            name: "Sewa AHTS".into(),
            description: "Kontrak sewa kapal AHTS 12 bulan".into(),
            created_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            bid_opening_date: opening,
            status: TenderStatus::Published,
            items: vec!["AHTS 5000 BHP".into()],
            total_value: 54_000_000_000.0,
            bids: vec![TenderBid {
                vendor_name: "PT Samudra".into(),
                bid_amount: 150_000_000.0,
                submitted_date: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
                status: BidStatus::Submitted,
                compliance_score: Some(88.0),
            }],
        }
    }

    #[test]
    fn bids_masked_until_opening() {
        let opening = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let t = tender(Some(opening));
        let early = Utc.with_ymd_and_hms(2026, 1, 25, 0, 0, 0).unwrap();
        assert_eq!(t.bid_display(early)[0].1, "🔒 **********");
        assert_eq!(t.bid_display(opening)[0].1, "IDR 150.000.000");
    }

    #[test]
    fn view_masks_every_bid_before_opening() {
        let opening = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let view = tender(Some(opening)).view(Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap());
        assert!(!view.bids_open);
        assert!(view.bids.iter().all(|b| b.amount == "🔒 **********"));
        assert_eq!(view.total_value, "Rp 54.000.000.000,00");
    }

    #[test]
    fn tender_without_opening_date_is_open() {
        assert!(tender(None).bids_open(Utc::now()));
    }
}
