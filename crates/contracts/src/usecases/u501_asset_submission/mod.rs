//! Подача нового актива вендором: двухшаговый мастер.
//!
//! Шаг 1 - классификация, поиск в реестре BKI и динамические
//! технические характеристики; шаг 2 - статус владения, приоритет
//! каботажа и чек-лист документов. Завершение создает ровно один `Asset`.

pub mod derived;
pub mod documents;
pub mod error;
pub mod lookup;
pub mod wizard;

pub use documents::{DocumentChecklist, DocumentKind, OwnershipType, PriorityTier, VerificationMode};
pub use error::{Step1Issue, WizardError};
pub use lookup::{BkiRecord, LookupOutcome, LookupTicket};
pub use wizard::{DocumentPolicy, SubmissionContext, SubmissionWizard, WizardStep};
