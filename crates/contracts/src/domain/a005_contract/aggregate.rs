use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContractStatus {
    #[default]
    Active,
    Completed,
    Disputed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MilestoneStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    #[default]
    Pending,
    Delayed,
}

impl MilestoneStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub label: String,
    pub target_date: NaiveDate,
    pub status: MilestoneStatus,
}

/// Контракт по итогам тендера с графиком вех
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub tender_id: String,
    pub vendor_name: String,
    pub asset_names: Vec<String>,
    pub total_value: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ContractStatus,
    pub blockchain_hash: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Contract {
    pub fn asset_count(&self) -> usize {
        self.asset_names.len()
    }

    /// (завершено, всего)
    pub fn progress(&self) -> (usize, usize) {
        let done = self.milestones.iter().filter(|m| m.status.is_done()).count();
        (done, self.milestones.len())
    }

    /// Первая веха в работе
    pub fn current_milestone(&self) -> Option<&Milestone> {
        self.milestones
            .iter()
            .find(|m| m.status == MilestoneStatus::InProgress)
    }

    /// Незавершенные вехи, срок которых прошел к `today`
    pub fn overdue_milestones(&self, today: NaiveDate) -> Vec<&Milestone> {
        self.milestones
            .iter()
            .filter(|m| !m.status.is_done() && m.target_date < today)
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.vendor_name.trim().is_empty() {
            return Err("Vendor kontrak wajib diisi".into());
        }
        if self.end_date < self.start_date {
            return Err("Tanggal selesai kontrak sebelum tanggal mulai".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn milestone(id: &str, target: NaiveDate, status: MilestoneStatus) -> Milestone {
        Milestone {
            id: id.into(),
            label: id.to_uppercase(),
            target_date: target,
            status,
        }
    }

    fn contract() -> Contract {
        Contract {
            id: "CTR-2024-001".into(),
            tender_id: "TND-2024-001".into(),
            vendor_name: "PT Rig Nusantara".into(),
            asset_names: vec!["Rig Darat 2000 HP".into(), "AHTS Pendukung".into()],
            total_value: 43_500_000_000.0,
            start_date: date(2024, 3, 1),
            end_date: date(2025, 2, 28),
            status: ContractStatus::Active,
            blockchain_hash: "0x9f2c".into(),
            milestones: vec![
                milestone("mobilization", date(2024, 3, 15), MilestoneStatus::Completed),
                milestone("spud", date(2024, 4, 1), MilestoneStatus::InProgress),
                milestone("td", date(2024, 6, 30), MilestoneStatus::Pending),
            ],
        }
    }

    #[test]
    fn progress_and_current_milestone() {
        let c = contract();
        assert_eq!(c.asset_count(), 2);
        assert_eq!(c.progress(), (1, 3));
        assert_eq!(c.current_milestone().map(|m| m.id.as_str()), Some("spud"));
    }

    #[test]
    fn overdue_skips_completed_milestones() {
        let c = contract();
        let overdue: Vec<&str> = c
            .overdue_milestones(date(2024, 5, 1))
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(overdue, vec!["spud"]);
        assert!(c.overdue_milestones(date(2024, 3, 20)).is_empty());
    }

    #[test]
    fn validate_rejects_reversed_period() {
        let mut c = contract();
        assert!(c.validate().is_ok());
        c.end_date = date(2024, 1, 1);
        assert!(c.validate().is_err());
    }

    #[test]
    fn milestone_status_wire_names() {
        let json = serde_json::to_value(&contract().milestones[1]).unwrap();
        assert_eq!(json["status"], "In Progress");
        assert_eq!(json["targetDate"], "2024-04-01");
        let back: MilestoneStatus = serde_json::from_str("\"Delayed\"").unwrap();
        assert_eq!(back, MilestoneStatus::Delayed);
    }
}
