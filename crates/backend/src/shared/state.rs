use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use contracts::shared::master_data::ParameterRegistry;
use contracts::usecases::u501_asset_submission::DocumentPolicy;

use super::config::Config;
use crate::domain::a001_asset::{seed::demo_assets, AssetStore};
use crate::domain::a002_technical_parameter::RegistryService;
use crate::domain::a003_quotation_request::QuotationStore;
use crate::domain::a004_tender::{service::demo_tenders, TenderStore};
use crate::domain::a005_contract::{service::demo_contracts, ContractStore};
use crate::system::auth::sessions::SessionStore;
use crate::usecases::u501_asset_submission::{BkiClient, MockBkiClient};

/// Состояние приложения, передается в handlers через `State`
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: RegistryService,
    pub assets: AssetStore,
    pub quotations: QuotationStore,
    pub tenders: TenderStore,
    pub contracts: ContractStore,
    pub sessions: SessionStore,
    pub bki: Arc<dyn BkiClient>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let assets = if config.seed.demo_assets {
            let seeded = demo_assets();
            tracing::info!("Seeded {} demo assets", seeded.len());
            AssetStore::with_assets(seeded)
        } else {
            AssetStore::new()
        };
        let bki = MockBkiClient::new(Duration::from_millis(config.lookup.delay_ms));
        tracing::info!(
            "BKI lookup provider: {} ({} ms delay)",
            bki.provider_name(),
            config.lookup.delay_ms
        );

        Self {
            registry: RegistryService::new(ParameterRegistry::with_defaults()),
            assets,
            quotations: QuotationStore::new(),
            tenders: TenderStore::with_tenders(demo_tenders(Utc::now())),
            contracts: ContractStore::with_contracts(demo_contracts(Utc::now().date_naive())),
            sessions: SessionStore::new(),
            bki: Arc::new(bki),
            config: Arc::new(config),
        }
    }

    pub fn document_policy(&self) -> DocumentPolicy {
        if self.config.submission.strict_documents {
            DocumentPolicy::Strict
        } else {
            DocumentPolicy::Lenient
        }
    }
}
