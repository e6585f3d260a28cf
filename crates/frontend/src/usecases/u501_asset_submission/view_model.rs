use chrono::Utc;
use contracts::domain::a001_asset::Asset;
use contracts::shared::master_data::ParameterRegistry;
use contracts::system::auth::UserInfo;
use contracts::usecases::u501_asset_submission::{
    DocumentPolicy, LookupOutcome, SubmissionContext, SubmissionWizard, WizardError,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::domain::a001_asset::context::AssetStore;

/// Сообщение пользователю по ошибке мастера
pub fn describe(error: &WizardError) -> String {
    match error {
        WizardError::Step1Incomplete { issues } => issues
            .iter()
            .map(|i| i.message())
            .collect::<Vec<_>>()
            .join("; "),
        WizardError::LookupInFlight => "Pencarian data BKI sedang berjalan".into(),
        WizardError::LookupNotApplicable => {
            "Pencarian BKI hanya untuk kapal dengan klasifikasi BKI".into()
        }
        WizardError::EmptyLookupKey => "Masukkan nomor IMO terlebih dahulu".into(),
        WizardError::WrongStep { .. } => "Langkah pengajuan tidak sesuai".into(),
        WizardError::MissingDocuments(kinds) => format!(
            "Dokumen wajib belum lengkap: {}",
            kinds.iter().map(|k| k.label()).collect::<Vec<_>>().join(", ")
        ),
        WizardError::Finished => "Pengajuan sudah selesai atau dibatalkan".into(),
    }
}

/// Сообщение по итогу поиска; `None` - показывать нечего
pub fn lookup_message(outcome: &LookupOutcome) -> Option<(bool, String)> {
    match outcome {
        LookupOutcome::Applied(record) => Some((
            true,
            format!("Data BKI ditemukan: {} ({})", record.name, record.class_notation),
        )),
        LookupOutcome::NotFound { key } => Some((
            false,
            format!(
                "Data BKI tidak ditemukan untuk nomor IMO {}. Silakan periksa kembali atau gunakan mode Non-BKI.",
                key
            ),
        )),
        LookupOutcome::Discarded => None,
    }
}

/// Временный номер `PENDING-n` получает случайное число 0..10000
fn number_seed() -> u32 {
    (js_sys::Math::random() * 10_000.0) as u32
}

/// ViewModel мастера подачи.
///
/// Состояние шагов целиком живет в `SubmissionWizard`; здесь только
/// сигналы для показа и асинхронные команды.
#[derive(Clone, Copy)]
pub struct SubmissionViewModel {
    pub wizard: RwSignal<SubmissionWizard>,
    pub policy_loaded: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
    pub submitted: RwSignal<Option<Asset>>,
}

impl SubmissionViewModel {
    pub fn new() -> Self {
        Self {
            wizard: RwSignal::new(SubmissionWizard::default()),
            policy_loaded: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
            submitted: RwSignal::new(None),
        }
    }

    /// Политика документов задается backend-ом; без ответа - Lenient
    pub fn load_policy(&self) {
        let this = *self;
        spawn_local(async move {
            let policy = match model::fetch_policy().await {
                Ok(policy) => policy,
                Err(e) => {
                    log::warn!("document policy fetch failed, using lenient: {}", e);
                    DocumentPolicy::Lenient
                }
            };
            let _ = this.wizard.try_set(SubmissionWizard::new(policy));
            let _ = this.policy_loaded.try_set(true);
        });
    }

    /// Любая правка формы; ошибка прошлой команды снимается
    pub fn edit(&self, f: impl FnOnce(&mut SubmissionWizard)) {
        self.wizard.update(f);
        self.error.set(None);
    }

    pub fn lookup_command(&self) {
        let ticket = match self.wizard.try_update(|w| w.begin_lookup()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                self.error.set(Some(describe(&e)));
                return;
            }
            None => return,
        };
        self.error.set(None);
        self.notice.set(None);
        log::debug!("BKI lookup #{} for '{}'", ticket.id, ticket.key);

        let this = *self;
        spawn_local(async move {
            let (found, failure) = match model::lookup_bki(&ticket.key).await {
                Ok(found) => (found, None),
                Err(e) => (None, Some(e)),
            };
            // Страница могла быть закрыта: сигнал уже уничтожен
            let Some(outcome) = this.wizard.try_update(|w| w.complete_lookup(&ticket, found)) else {
                log::debug!("BKI lookup #{} finished after page disposal", ticket.id);
                return;
            };
            if let Some(e) = failure {
                if !matches!(outcome, LookupOutcome::Discarded) {
                    let _ = this.error.try_set(Some(format!("Gagal menghubungi BKI: {}", e)));
                }
                return;
            }
            match lookup_message(&outcome) {
                Some((true, message)) => {
                    let _ = this.notice.try_set(Some(message));
                }
                Some((false, message)) => {
                    let _ = this.error.try_set(Some(message));
                }
                None => log::debug!("BKI lookup #{} discarded", ticket.id),
            }
        });
    }

    pub fn next_command(&self) {
        if let Some(Err(e)) = self.wizard.try_update(|w| w.next()) {
            self.error.set(Some(describe(&e)));
        } else {
            self.error.set(None);
        }
    }

    pub fn back_command(&self) {
        if let Some(Err(e)) = self.wizard.try_update(|w| w.back()) {
            self.error.set(Some(describe(&e)));
        }
    }

    pub fn close_command(&self) {
        let _ = self.wizard.try_update(|w| w.close());
    }

    /// Новая подача после успешной
    pub fn restart(&self) {
        let policy = self.wizard.with_untracked(|w| w.policy());
        self.wizard.set(SubmissionWizard::new(policy));
        self.submitted.set(None);
        self.error.set(None);
        self.notice.set(None);
    }

    /// Подача: актив строится на копии мастера и отправляется на backend.
    /// Мастер завершается только после подтверждения, иначе форма
    /// остается как есть и ошибку можно исправить.
    pub fn submit_command(
        &self,
        registry: &ParameterRegistry,
        user: Option<UserInfo>,
        token: Option<String>,
        store: AssetStore,
    ) {
        if self.is_submitting.get_untracked() {
            return;
        }
        let Some(token) = token else {
            self.error.set(Some("Sesi tidak ditemukan".into()));
            return;
        };
        let ctx = SubmissionContext {
            owner_vendor_id: user.map(|u| u.id),
            number_seed: number_seed(),
            now: Utc::now(),
        };
        let mut draft = self.wizard.get_untracked();
        let asset = match draft.submit(registry, &ctx) {
            Ok(asset) => asset,
            Err(e) => {
                self.error.set(Some(describe(&e)));
                return;
            }
        };

        let this = *self;
        this.is_submitting.set(true);
        this.error.set(None);
        spawn_local(async move {
            match model::register_asset(&token, &asset).await {
                Ok(stored) => {
                    log::info!("asset {} registered as {}", stored.name, stored.number);
                    let _ = this.wizard.try_set(draft);
                    store.push(stored.clone());
                    let _ = this.submitted.try_set(Some(stored));
                }
                Err(e) => {
                    let _ = this.error.try_set(Some(format!("Gagal mengirim pengajuan: {}", e)));
                }
            }
            let _ = this.is_submitting.try_set(false);
        });
    }
}

impl Default for SubmissionViewModel {
    fn default() -> Self {
        Self::new()
    }
}
