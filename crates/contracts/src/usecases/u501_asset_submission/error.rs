use thiserror::Error;

use super::documents::DocumentKind;
use super::wizard::WizardStep;

/// Причина, по которой шаг 1 не пропускает дальше
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step1Issue {
    /// Судно в режиме BKI, а данные реестра еще не найдены
    RegistryLookupRequired,
    /// Поиск в реестре еще выполняется
    LookupPending,
    AssetNameMissing,
}

impl Step1Issue {
    pub fn message(&self) -> &'static str {
        match self {
            Self::RegistryLookupRequired => "Cari data BKI terlebih dahulu",
            Self::LookupPending => "Pencarian data BKI sedang berjalan",
            Self::AssetNameMissing => "Nama aset wajib diisi",
        }
    }
}

/// Ошибки мастера подачи актива
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("step 1 incomplete: {issues:?}")]
    Step1Incomplete { issues: Vec<Step1Issue> },

    #[error("a registry lookup is already in flight")]
    LookupInFlight,

    #[error("registry lookup applies only to vessels in BKI mode")]
    LookupNotApplicable,

    #[error("lookup key is empty")]
    EmptyLookupKey,

    #[error("operation not allowed on step {actual:?}, expected {expected:?}")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("required documents missing: {0:?}")]
    MissingDocuments(Vec<DocumentKind>),

    #[error("wizard already finished")]
    Finished,
}
