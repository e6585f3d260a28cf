use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use contracts::domain::a004_tender::{BidStatus, Tender, TenderBid, TenderStatus, TenderView};

#[derive(Clone, Default)]
pub struct TenderStore {
    tenders: Arc<RwLock<Vec<Tender>>>,
}

impl TenderStore {
    pub fn with_tenders(tenders: Vec<Tender>) -> Self {
        Self {
            tenders: Arc::new(RwLock::new(tenders)),
        }
    }

    pub fn list_all(&self) -> Vec<Tender> {
        self.tenders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Список тендеров для показа на момент `now`
pub fn list_views(store: &TenderStore, now: DateTime<Utc>) -> Vec<TenderView> {
    store.list_all().iter().map(|t| t.view(now)).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Демо-тендеры: один уже вскрыт, второй запечатан на неделю вперед
pub fn demo_tenders(now: DateTime<Utc>) -> Vec<Tender> {
    vec![
        Tender {
            id: "TND-2024-001".into(),
            name: "Sewa Rig Darat 2000 HP".into(),
            description: "Pengadaan jasa rig darat untuk pengembangan lapangan Minas".into(),
            created_date: date(2024, 1, 20),
            bid_opening_date: Some(now - Duration::days(30)),
            status: TenderStatus::Closed,
            items: vec!["Onshore Rig 2000 HP".into()],
            total_value: 45_000_000_000.0,
            bids: vec![
                TenderBid {
                    vendor_name: "PT Rig Nusantara".into(),
                    bid_amount: 43_500_000_000.0,
                    submitted_date: date(2024, 2, 1),
                    status: BidStatus::Review,
                    compliance_score: Some(92.0),
                },
                TenderBid {
                    vendor_name: "Global Suppliers Ltd.".into(),
                    bid_amount: 44_100_000_000.0,
                    submitted_date: date(2024, 2, 3),
                    status: BidStatus::Submitted,
                    compliance_score: Some(85.0),
                },
            ],
        },
        Tender {
            id: "TND-2024-002".into(),
            name: "Sewa Kapal AHTS 80T BP".into(),
            description: "Dukungan logistik lepas pantai Natuna".into(),
            created_date: date(2024, 2, 10),
            bid_opening_date: Some(now + Duration::days(7)),
            status: TenderStatus::Published,
            items: vec!["AHTS 80 Ton BP".into()],
            total_value: 12_000_000_000.0,
            bids: vec![TenderBid {
                vendor_name: "PT Samudra Marine".into(),
                bid_amount: 11_250_000_000.0,
                submitted_date: date(2024, 2, 20),
                status: BidStatus::Submitted,
                compliance_score: None,
            }],
        },
    ]
}
