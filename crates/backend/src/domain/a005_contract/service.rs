use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Duration, NaiveDate};
use contracts::domain::a005_contract::{Contract, ContractStatus, Milestone, MilestoneStatus};

#[derive(Clone, Default)]
pub struct ContractStore {
    contracts: Arc<RwLock<Vec<Contract>>>,
}

impl ContractStore {
    /// Записи с ошибками валидации в хранилище не попадают
    pub fn with_contracts(contracts: Vec<Contract>) -> Self {
        let valid = contracts
            .into_iter()
            .filter(|c| match c.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Contract {} skipped: {}", c.id, e);
                    false
                }
            })
            .collect();
        Self {
            contracts: Arc::new(RwLock::new(valid)),
        }
    }

    pub fn list_all(&self) -> Vec<Contract> {
        self.contracts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Contract> {
        self.contracts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }
}

fn milestone(id: &str, label: &str, target_date: NaiveDate, status: MilestoneStatus) -> Milestone {
    Milestone {
        id: id.into(),
        label: label.into(),
        target_date,
        status,
    }
}

/// Демо-контракт по закрытому тендеру TND-2024-001. Вехи отсчитываются
/// от `today`: мобилизация завершена, бурение в работе.
pub fn demo_contracts(today: NaiveDate) -> Vec<Contract> {
    let start = today - Duration::days(45);
    vec![Contract {
        id: "CTR-2024-001".into(),
        tender_id: "TND-2024-001".into(),
        vendor_name: "PT Rig Nusantara".into(),
        asset_names: vec!["Rig Darat 2000 HP".into()],
        total_value: 43_500_000_000.0,
        start_date: start,
        end_date: start + Duration::days(365),
        status: ContractStatus::Active,
        blockchain_hash: "0x7a3f9c2e41d8b605e9a1c4f7d2b8e36a".into(),
        milestones: vec![
            milestone("ms-1", "Mobilisasi Rig", start + Duration::days(14), MilestoneStatus::Completed),
            milestone("ms-2", "Spud-in Sumur Pertama", today + Duration::days(10), MilestoneStatus::InProgress),
            milestone("ms-3", "Mencapai Total Depth", today + Duration::days(90), MilestoneStatus::Pending),
            milestone("ms-4", "Demobilisasi", start + Duration::days(365), MilestoneStatus::Pending),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn demo_contract_is_active_and_on_schedule() {
        let today = Utc::now().date_naive();
        let store = ContractStore::with_contracts(demo_contracts(today));
        let all = store.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].progress(), (1, 4));
        assert!(all[0].overdue_milestones(today).is_empty());
        assert!(store.get_by_id("CTR-2024-001").is_some());
        assert!(store.get_by_id("CTR-404").is_none());
    }

    #[test]
    fn invalid_contracts_are_skipped() {
        let today = Utc::now().date_naive();
        let mut broken = demo_contracts(today).remove(0);
        broken.id = "CTR-BAD".into();
        broken.vendor_name = " ".into();
        let mut contracts = demo_contracts(today);
        contracts.push(broken);
        let store = ContractStore::with_contracts(contracts);
        assert_eq!(store.list_all().len(), 1);
    }
}
