use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::derived;
use super::documents::{DocumentChecklist, DocumentKind, OwnershipType, PriorityTier, VerificationMode};
use super::error::{Step1Issue, WizardError};
use super::lookup::{BkiRecord, LookupOutcome, LookupTicket};
use crate::domain::a001_asset::{Asset, AssetCategory, AssetId, AssetStatus, Coordinates, SpecValue};
use crate::domain::common::EntityMetadata;
use crate::shared::dynamic_form::{build_layout, parse_year, DynamicSpecValues, FormLayout};
use crate::shared::master_data::ParameterRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    /// Шаг 1: классификация и технические данные
    Classification,
    /// Шаг 2: владение, приоритет и документы
    OwnershipAndDocs,
    /// Актив создан
    Completed,
    /// Мастер закрыт без подачи
    Closed,
}

impl WizardStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Closed)
    }

    /// Номер шага для индикатора прогресса
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Classification => 1,
            Self::OwnershipAndDocs => 2,
            Self::Completed | Self::Closed => 3,
        }
    }
}

/// Строгость проверки документов при подаче.
///
/// `Lenient` повторяет исходное поведение: документы помечены как
/// обязательные, но подача ими не блокируется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentPolicy {
    #[default]
    Lenient,
    Strict,
}

/// Внешние данные для финального действия
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    /// Текущий пользователь-вендор
    pub owner_vendor_id: Option<String>,
    /// Случайное число для временного номера `PENDING-n`
    pub number_seed: u32,
    pub now: DateTime<Utc>,
}

/// Мастер подачи актива: явный конечный автомат со всеми данными шагов
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionWizard {
    step: WizardStep,
    policy: DocumentPolicy,

    // Шаг 1
    category: AssetCategory,
    verification_mode: VerificationMode,
    imo_number: String,
    asset_name: String,
    asset_type: String,
    dynamic_specs: DynamicSpecValues,
    bki_record: Option<BkiRecord>,

    // Шаг 2
    ownership_type: OwnershipType,
    priority_tier: PriorityTier,
    documents: DocumentChecklist,

    pending_lookup: Option<u64>,
    next_ticket: u64,
}

impl Default for SubmissionWizard {
    fn default() -> Self {
        Self::new(DocumentPolicy::default())
    }
}

impl SubmissionWizard {
    pub fn new(policy: DocumentPolicy) -> Self {
        Self {
            step: WizardStep::Classification,
            policy,
            category: AssetCategory::Vessel,
            verification_mode: VerificationMode::RegistryBacked,
            imo_number: String::new(),
            asset_name: String::new(),
            asset_type: String::new(),
            dynamic_specs: DynamicSpecValues::new(),
            bki_record: None,
            ownership_type: OwnershipType::Owner,
            priority_tier: PriorityTier::Tier1,
            documents: DocumentChecklist::default(),
            pending_lookup: None,
            next_ticket: 1,
        }
    }

    // ------------------------------------------------------------------
    // Чтение состояния
    // ------------------------------------------------------------------

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn policy(&self) -> DocumentPolicy {
        self.policy
    }

    pub fn category(&self) -> AssetCategory {
        self.category
    }

    pub fn verification_mode(&self) -> VerificationMode {
        self.verification_mode
    }

    pub fn imo_number(&self) -> &str {
        &self.imo_number
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    pub fn asset_type(&self) -> &str {
        &self.asset_type
    }

    pub fn dynamic_specs(&self) -> &DynamicSpecValues {
        &self.dynamic_specs
    }

    pub fn bki_record(&self) -> Option<&BkiRecord> {
        self.bki_record.as_ref()
    }

    pub fn ownership_type(&self) -> OwnershipType {
        self.ownership_type
    }

    pub fn priority_tier(&self) -> PriorityTier {
        self.priority_tier
    }

    pub fn documents(&self) -> &DocumentChecklist {
        &self.documents
    }

    pub fn is_lookup_pending(&self) -> bool {
        self.pending_lookup.is_some()
    }

    /// Поиск в реестре доступен только для судна в режиме BKI
    pub fn lookup_applicable(&self) -> bool {
        self.category.is_vessel() && self.verification_mode == VerificationMode::RegistryBacked
    }

    /// Раскладка динамических полей для текущей категории
    pub fn layout(&self, registry: &ParameterRegistry) -> FormLayout {
        build_layout(self.category, registry)
    }

    // ------------------------------------------------------------------
    // Шаг 1
    // ------------------------------------------------------------------

    /// Смена категории сбрасывает введенные технические значения,
    /// найденную запись реестра и незавершенный поиск: наборы полей у
    /// категорий разные.
    pub fn set_category(&mut self, category: AssetCategory) {
        if self.step.is_terminal() || category == self.category {
            return;
        }
        self.category = category;
        self.dynamic_specs.clear();
        self.bki_record = None;
        self.pending_lookup = None;
    }

    /// Уход из режима BKI отменяет незавершенный поиск
    pub fn set_verification_mode(&mut self, mode: VerificationMode) {
        if self.step.is_terminal() {
            return;
        }
        self.verification_mode = mode;
        if !self.lookup_applicable() {
            self.pending_lookup = None;
        }
    }

    pub fn set_imo_number(&mut self, value: impl Into<String>) {
        if self.step.is_terminal() {
            return;
        }
        self.imo_number = value.into();
    }

    pub fn set_asset_name(&mut self, value: impl Into<String>) {
        if self.step.is_terminal() {
            return;
        }
        self.asset_name = value.into();
    }

    pub fn set_asset_type(&mut self, value: impl Into<String>) {
        if self.step.is_terminal() {
            return;
        }
        self.asset_type = value.into();
    }

    pub fn set_spec_value(&mut self, field: &str, raw: impl Into<String>) {
        if self.step.is_terminal() {
            return;
        }
        self.dynamic_specs.set(field, raw);
    }

    /// Запуск поиска в реестре. Пока предыдущий поиск не завершен,
    /// новый не принимается.
    pub fn begin_lookup(&mut self) -> Result<LookupTicket, WizardError> {
        if self.step.is_terminal() {
            return Err(WizardError::Finished);
        }
        if self.step != WizardStep::Classification {
            return Err(WizardError::WrongStep {
                expected: WizardStep::Classification,
                actual: self.step,
            });
        }
        if !self.lookup_applicable() {
            return Err(WizardError::LookupNotApplicable);
        }
        if self.pending_lookup.is_some() {
            return Err(WizardError::LookupInFlight);
        }
        let key = self.imo_number.trim().to_string();
        if key.is_empty() {
            return Err(WizardError::EmptyLookupKey);
        }
        let id = self.next_ticket;
        self.next_ticket += 1;
        self.pending_lookup = Some(id);
        Ok(LookupTicket { id, key })
    }

    /// Применение результата поиска.
    ///
    /// Найденная запись вливается в форму: имя и тип перезаписываются,
    /// технические значения сливаются с уже введенными.
    pub fn complete_lookup(&mut self, ticket: &LookupTicket, result: Option<BkiRecord>) -> LookupOutcome {
        if self.step.is_terminal()
            || !self.lookup_applicable()
            || self.pending_lookup != Some(ticket.id)
        {
            return LookupOutcome::Discarded;
        }
        self.pending_lookup = None;
        match result {
            Some(record) => {
                self.asset_name = record.name.clone();
                self.asset_type = record.vessel_type.clone();
                self.dynamic_specs.merge(record.spec_entries());
                self.bki_record = Some(record.clone());
                LookupOutcome::Applied(record)
            }
            None => LookupOutcome::NotFound {
                key: ticket.key.clone(),
            },
        }
    }

    pub fn step1_issues(&self) -> Vec<Step1Issue> {
        let mut issues = Vec::new();
        if self.pending_lookup.is_some() {
            issues.push(Step1Issue::LookupPending);
        }
        if self.lookup_applicable() && self.bki_record.is_none() {
            issues.push(Step1Issue::RegistryLookupRequired);
        }
        if self.asset_name.trim().is_empty() {
            issues.push(Step1Issue::AssetNameMissing);
        }
        issues
    }

    pub fn validate_step1(&self) -> bool {
        self.step1_issues().is_empty()
    }

    /// Шаг 1 -> шаг 2. Все введенные данные сохраняются.
    pub fn next(&mut self) -> Result<(), WizardError> {
        self.expect_step(WizardStep::Classification)?;
        let issues = self.step1_issues();
        if !issues.is_empty() {
            return Err(WizardError::Step1Incomplete { issues });
        }
        self.step = WizardStep::OwnershipAndDocs;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Шаг 2
    // ------------------------------------------------------------------

    /// Шаг 2 -> шаг 1, всегда разрешен и ничего не теряет
    pub fn back(&mut self) -> Result<(), WizardError> {
        self.expect_step(WizardStep::OwnershipAndDocs)?;
        self.step = WizardStep::Classification;
        Ok(())
    }

    pub fn set_ownership_type(&mut self, value: OwnershipType) {
        if self.step.is_terminal() {
            return;
        }
        self.ownership_type = value;
    }

    pub fn set_priority_tier(&mut self, value: PriorityTier) {
        if self.step.is_terminal() {
            return;
        }
        self.priority_tier = value;
    }

    pub fn toggle_document(&mut self, kind: DocumentKind) {
        if self.step.is_terminal() {
            return;
        }
        self.documents.toggle(kind);
    }

    /// Обязательные документы; вычисляются заново при каждом вызове
    pub fn required_documents(&self) -> Vec<DocumentKind> {
        DocumentKind::required_for(self.ownership_type, self.priority_tier, self.verification_mode)
    }

    pub fn missing_documents(&self) -> Vec<DocumentKind> {
        self.documents.missing(&self.required_documents())
    }

    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::OwnershipAndDocs
            && (self.policy == DocumentPolicy::Lenient || self.missing_documents().is_empty())
    }

    /// Финальное действие: создает ровно один актив и завершает мастер
    pub fn submit(
        &mut self,
        registry: &ParameterRegistry,
        ctx: &SubmissionContext,
    ) -> Result<Asset, WizardError> {
        self.expect_step(WizardStep::OwnershipAndDocs)?;
        if self.policy == DocumentPolicy::Strict {
            let missing = self.missing_documents();
            if !missing.is_empty() {
                return Err(WizardError::MissingDocuments(missing));
            }
        }
        let asset = self.build_asset(registry, ctx);
        self.step = WizardStep::Completed;
        self.pending_lookup = None;
        Ok(asset)
    }

    /// Закрытие без подачи; результат незавершенного поиска будет отброшен
    pub fn close(&mut self) {
        if self.step == WizardStep::Completed {
            return;
        }
        self.step = WizardStep::Closed;
        self.pending_lookup = None;
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step.is_terminal() {
            return Err(WizardError::Finished);
        }
        if self.step != expected {
            return Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }

    /// Запись реестра учитывается только для судна в режиме BKI
    fn applicable_record(&self) -> Option<&BkiRecord> {
        self.bki_record.as_ref().filter(|_| self.lookup_applicable())
    }

    fn build_asset(&self, registry: &ParameterRegistry, ctx: &SubmissionContext) -> Asset {
        let record = self.applicable_record();
        let mut specs = self.dynamic_specs.coerce(registry.parameters(self.category));
        if let Some(record) = record {
            for (field, value) in [("dwt", record.dwt), ("loa", record.loa), ("breadth", record.breadth)] {
                specs
                    .entry(field.to_string())
                    .or_insert(SpecValue::Number(value));
            }
        }

        let year_built = parse_year(self.dynamic_specs.get("yearBuilt"))
            .or_else(|| record.map(|r| r.year_built))
            .unwrap_or_else(|| ctx.now.year());

        let typed_flag = self.dynamic_specs.get("flagCountry").trim();
        let flag_country = match record {
            Some(record) => record.flag.clone(),
            None if !typed_flag.is_empty() => typed_flag.to_string(),
            None => derived::default_flag(self.priority_tier).to_string(),
        };

        let imo_number = self.imo_number.trim();
        let asset_type = self.asset_type.trim();

        Asset {
            id: AssetId::new_v4(),
            number: format!("PENDING-{}", ctx.number_seed % 10_000),
            name: self.asset_name.trim().to_string(),
            category: self.category,
            sub_type: (!asset_type.is_empty()).then(|| asset_type.to_string()),
            status: AssetStatus::Registered,
            location: "TBD".into(),
            coordinates: Coordinates::PLACEHOLDER,
            daily_rate: 0.0,
            health: 100.0,
            csms_score: 0.0,
            certification: derived::certification(self.verification_mode).to_string(),
            year_built,
            capacity: derived::capacity_string(self.category, &specs),
            manufacturer: record
                .map(|r| r.manufacturer.clone())
                .unwrap_or_else(|| "Unknown".into()),
            flag_country: Some(flag_country),
            owner_type: Some(derived::owner_type(self.priority_tier)),
            owner_vendor_id: ctx.owner_vendor_id.clone(),
            imo_number: (self.category.is_vessel() && !imo_number.is_empty())
                .then(|| imo_number.to_string()),
            specs,
            metadata: EntityMetadata::new_at(ctx.now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::OwnerType;
    use crate::domain::a002_technical_parameter::TechnicalParameter;
    use crate::usecases::u501_asset_submission::lookup::find_fixture;
    use chrono::TimeZone;

    fn ctx() -> SubmissionContext {
        SubmissionContext {
            owner_vendor_id: Some("v-002".into()),
            number_seed: 4821,
            now: Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap(),
        }
    }

    fn lookup(wizard: &mut SubmissionWizard, imo: &str) -> LookupOutcome {
        wizard.set_imo_number(imo);
        let ticket = wizard.begin_lookup().unwrap();
        let found = find_fixture(&ticket.key);
        wizard.complete_lookup(&ticket, found)
    }

    #[test]
    fn starts_on_classification_with_vessel_in_bki_mode() {
        let wizard = SubmissionWizard::default();
        assert_eq!(wizard.step(), WizardStep::Classification);
        assert_eq!(wizard.category(), AssetCategory::Vessel);
        assert!(wizard.lookup_applicable());
        assert!(!wizard.validate_step1());
    }

    #[test]
    fn bki_vessel_submission_scenario() {
        let registry = ParameterRegistry::with_defaults();
        let mut wizard = SubmissionWizard::default();

        assert!(matches!(lookup(&mut wizard, "9737668"), LookupOutcome::Applied(_)));
        assert_eq!(wizard.asset_name(), "TRITON 501");
        assert_eq!(wizard.asset_type(), "Anchor Handling Tug Supply (AHTS)");
        assert!(wizard.validate_step1());

        wizard.next().unwrap();
        let asset = wizard.submit(&registry, &ctx()).unwrap();

        assert_eq!(asset.certification, "BKI Class");
        assert_eq!(asset.year_built, 2015);
        assert!(asset.capacity.contains("2000 DWT"));
        assert_eq!(asset.status, AssetStatus::Registered);
        assert_eq!(asset.manufacturer, "Batam Shipyard");
        assert_eq!(asset.flag_country.as_deref(), Some("Indonesia"));
        assert_eq!(asset.owner_type, Some(OwnerType::National));
        assert_eq!(asset.owner_vendor_id.as_deref(), Some("v-002"));
        assert_eq!(asset.imo_number.as_deref(), Some("9737668"));
        assert_eq!(asset.number, "PENDING-4821");
        assert_eq!(asset.specs.get("loa"), Some(&SpecValue::Number(70.0)));
        assert_eq!(wizard.step(), WizardStep::Completed);
    }

    #[test]
    fn rig_submission_composes_capacity() {
        let registry = ParameterRegistry::with_defaults();
        let mut wizard = SubmissionWizard::default();
        wizard.set_category(AssetCategory::OnshoreRig);
        wizard.set_asset_name("Rig Darat B");
        wizard.set_spec_value("ratedHP", "3000");
        wizard.set_spec_value("drillingDepth", "25000");
        wizard.next().unwrap();
        let asset = wizard.submit(&registry, &ctx()).unwrap();
        assert_eq!(asset.capacity, "3000 HP / 25000 ft");
        assert_eq!(asset.category, AssetCategory::OnshoreRig);
        assert_eq!(asset.imo_number, None);
        assert_eq!(asset.year_built, 2026);
        assert_eq!(asset.manufacturer, "Unknown");
    }

    #[test]
    fn unknown_lookup_key_keeps_wizard_on_step_one() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_asset_name("Kapal Manual");
        let outcome = lookup(&mut wizard, "1111111");
        assert_eq!(outcome, LookupOutcome::NotFound { key: "1111111".into() });
        assert!(!wizard.validate_step1());
        assert_eq!(wizard.asset_name(), "Kapal Manual");
        assert!(matches!(
            wizard.next(),
            Err(WizardError::Step1Incomplete { ref issues }) if issues == &vec![Step1Issue::RegistryLookupRequired]
        ));
        assert_eq!(wizard.step(), WizardStep::Classification);

        // повтор с другим ключом разрешен
        assert!(matches!(lookup(&mut wizard, "9737668"), LookupOutcome::Applied(_)));
        assert!(wizard.validate_step1());
    }

    #[test]
    fn empty_name_blocks_transition() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_verification_mode(VerificationMode::NonRegistry);
        assert_eq!(wizard.step1_issues(), vec![Step1Issue::AssetNameMissing]);
        wizard.set_asset_name("   ");
        assert!(!wizard.validate_step1());
        wizard.set_asset_name("MV Sinar");
        assert!(wizard.validate_step1());
    }

    #[test]
    fn category_switch_clears_dynamic_specs() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_spec_value("dwt", "500");
        wizard.set_category(AssetCategory::OffshoreRig);
        wizard.set_category(AssetCategory::Vessel);
        assert!(wizard.dynamic_specs().is_empty());
        assert_eq!(wizard.dynamic_specs().get("dwt"), "");
    }

    #[test]
    fn reselecting_same_category_keeps_values() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_spec_value("dwt", "500");
        wizard.set_category(AssetCategory::Vessel);
        assert_eq!(wizard.dynamic_specs().get("dwt"), "500");
    }

    #[test]
    fn back_navigation_preserves_everything() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_verification_mode(VerificationMode::NonRegistry);
        wizard.set_asset_name("MV Sinar");
        wizard.set_spec_value("bollardPull", "65");
        wizard.next().unwrap();
        wizard.set_ownership_type(OwnershipType::Operator);
        wizard.set_priority_tier(PriorityTier::Tier3);
        wizard.toggle_document(DocumentKind::OwnershipProof);
        wizard.toggle_document(DocumentKind::FlagCommitment);
        let snapshot = wizard.clone();

        wizard.back().unwrap();
        assert_eq!(wizard.step(), WizardStep::Classification);
        assert_eq!(wizard.dynamic_specs().get("bollardPull"), "65");
        wizard.next().unwrap();

        assert_eq!(wizard, snapshot);
        assert_eq!(wizard.ownership_type(), OwnershipType::Operator);
        assert_eq!(wizard.priority_tier(), PriorityTier::Tier3);
        assert!(wizard.documents().flag_commitment);
    }

    #[test]
    fn lenient_policy_submits_with_missing_documents() {
        let registry = ParameterRegistry::with_defaults();
        let mut wizard = SubmissionWizard::new(DocumentPolicy::Lenient);
        wizard.set_verification_mode(VerificationMode::NonRegistry);
        wizard.set_asset_name("MV Sinar");
        wizard.next().unwrap();
        assert!(!wizard.missing_documents().is_empty());
        assert!(wizard.can_submit());
        let asset = wizard.submit(&registry, &ctx()).unwrap();
        assert_eq!(asset.certification, "Non-BKI");
        assert_eq!(asset.capacity, "Pending Specs");
    }

    #[test]
    fn strict_policy_blocks_until_documents_checked() {
        let registry = ParameterRegistry::with_defaults();
        let mut wizard = SubmissionWizard::new(DocumentPolicy::Strict);
        wizard.set_verification_mode(VerificationMode::NonRegistry);
        wizard.set_asset_name("MV Sinar");
        wizard.next().unwrap();
        wizard.set_priority_tier(PriorityTier::Tier2);
        assert!(!wizard.can_submit());
        assert_eq!(
            wizard.submit(&registry, &ctx()),
            Err(WizardError::MissingDocuments(vec![
                DocumentKind::OwnershipProof,
                DocumentKind::ShareOwnership,
                DocumentKind::FlagCommitment,
            ]))
        );
        assert_eq!(wizard.step(), WizardStep::OwnershipAndDocs);

        for kind in wizard.required_documents() {
            wizard.toggle_document(kind);
        }
        let asset = wizard.submit(&registry, &ctx()).unwrap();
        assert_eq!(asset.owner_type, Some(OwnerType::Foreign));
        assert_eq!(asset.flag_country.as_deref(), Some("Foreign"));
    }

    #[test]
    fn required_documents_track_prior_step_state() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_verification_mode(VerificationMode::NonRegistry);
        wizard.set_priority_tier(PriorityTier::Tier3);
        assert!(wizard.required_documents().contains(&DocumentKind::LeasingAgreement));
        wizard.set_verification_mode(VerificationMode::RegistryBacked);
        assert_eq!(wizard.required_documents(), vec![DocumentKind::OwnershipProof]);
    }

    #[test]
    fn submit_happens_once() {
        let registry = ParameterRegistry::with_defaults();
        let mut wizard = SubmissionWizard::default();
        wizard.set_category(AssetCategory::OffshoreRig);
        wizard.set_asset_name("Jack-up D");
        wizard.next().unwrap();
        wizard.submit(&registry, &ctx()).unwrap();
        assert_eq!(wizard.submit(&registry, &ctx()), Err(WizardError::Finished));
        assert_eq!(wizard.back(), Err(WizardError::Finished));
    }

    #[test]
    fn submit_requires_step_two() {
        let registry = ParameterRegistry::with_defaults();
        let mut wizard = SubmissionWizard::default();
        assert_eq!(
            wizard.submit(&registry, &ctx()),
            Err(WizardError::WrongStep {
                expected: WizardStep::OwnershipAndDocs,
                actual: WizardStep::Classification,
            })
        );
    }

    #[test]
    fn second_lookup_rejected_while_pending() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_imo_number("9737668");
        let ticket = wizard.begin_lookup().unwrap();
        assert!(wizard.is_lookup_pending());
        assert_eq!(wizard.begin_lookup(), Err(WizardError::LookupInFlight));
        assert_eq!(wizard.step1_issues()[0], Step1Issue::LookupPending);

        wizard.complete_lookup(&ticket, find_fixture("9737668"));
        assert!(!wizard.is_lookup_pending());
        assert!(wizard.begin_lookup().is_ok());
    }

    #[test]
    fn lookup_result_merges_into_existing_specs() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_spec_value("bollardPull", "80");
        wizard.set_spec_value("dwt", "10");
        lookup(&mut wizard, "9737668");
        assert_eq!(wizard.dynamic_specs().get("bollardPull"), "80");
        assert_eq!(wizard.dynamic_specs().get("dwt"), "2000");

        let registry = ParameterRegistry::with_defaults();
        wizard.next().unwrap();
        let asset = wizard.submit(&registry, &ctx()).unwrap();
        assert_eq!(asset.capacity, "80 Ton BP");
    }

    #[test]
    fn result_after_close_is_discarded() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_imo_number("9737668");
        let ticket = wizard.begin_lookup().unwrap();
        wizard.close();
        let outcome = wizard.complete_lookup(&ticket, find_fixture("9737668"));
        assert_eq!(outcome, LookupOutcome::Discarded);
        assert_eq!(wizard.asset_name(), "");
        assert_eq!(wizard.step(), WizardStep::Closed);
    }

    #[test]
    fn category_switch_during_lookup_discards_result() {
        let registry = ParameterRegistry::with_defaults();
        let mut wizard = SubmissionWizard::default();
        wizard.set_imo_number("9737668");
        let ticket = wizard.begin_lookup().unwrap();

        wizard.set_category(AssetCategory::OnshoreRig);
        assert!(!wizard.is_lookup_pending());
        let outcome = wizard.complete_lookup(&ticket, find_fixture("9737668"));
        assert_eq!(outcome, LookupOutcome::Discarded);
        assert_eq!(wizard.bki_record(), None);
        assert_eq!(wizard.asset_name(), "");

        wizard.set_asset_name("Rig Darat C");
        wizard.next().unwrap();
        let asset = wizard.submit(&registry, &ctx()).unwrap();
        assert_eq!(asset.manufacturer, "Unknown");
        for field in ["dwt", "loa", "breadth"] {
            assert!(!asset.specs.contains_key(field));
        }
    }

    #[test]
    fn leaving_bki_mode_during_lookup_discards_result() {
        let mut wizard = SubmissionWizard::default();
        wizard.set_imo_number("9737668");
        let ticket = wizard.begin_lookup().unwrap();
        wizard.set_verification_mode(VerificationMode::NonRegistry);
        assert!(!wizard.is_lookup_pending());
        assert_eq!(
            wizard.complete_lookup(&ticket, find_fixture("9737668")),
            LookupOutcome::Discarded
        );
        assert_eq!(wizard.bki_record(), None);
    }

    #[test]
    fn registry_record_ignored_outside_bki_mode() {
        let registry = ParameterRegistry::with_defaults();
        let mut wizard = SubmissionWizard::default();
        lookup(&mut wizard, "9737668");
        wizard.set_verification_mode(VerificationMode::NonRegistry);
        wizard.next().unwrap();
        let asset = wizard.submit(&registry, &ctx()).unwrap();
        assert_eq!(asset.manufacturer, "Unknown");
        assert_eq!(asset.certification, "Non-BKI");
        assert!(!asset.specs.contains_key("loa"));
    }

    #[test]
    fn lookup_preconditions() {
        let mut wizard = SubmissionWizard::default();
        assert_eq!(wizard.begin_lookup(), Err(WizardError::EmptyLookupKey));
        wizard.set_category(AssetCategory::OnshoreRig);
        wizard.set_imo_number("9737668");
        assert_eq!(wizard.begin_lookup(), Err(WizardError::LookupNotApplicable));
    }

    #[test]
    fn malformed_numbers_do_not_block_submission() {
        let registry = ParameterRegistry::with_defaults();
        let mut wizard = SubmissionWizard::default();
        wizard.set_category(AssetCategory::OffshoreRig);
        wizard.set_asset_name("Semi-sub E");
        wizard.set_spec_value("yearBuilt", "dua ribu");
        wizard.set_spec_value("ratedHP", "3.000 HP");
        wizard.set_spec_value("drillingDepth", "30000");
        wizard.next().unwrap();
        let asset = wizard.submit(&registry, &ctx()).unwrap();
        assert_eq!(asset.year_built, 2026);
        assert_eq!(asset.capacity, "30000 ft");
        assert!(!asset.specs.contains_key("ratedHP"));
    }

    #[test]
    fn specs_follow_registry_at_submission_time() {
        let mut registry = ParameterRegistry::with_defaults();
        registry.set_parameters(
            AssetCategory::OnshoreRig,
            vec![TechnicalParameter::number("x", "Rig Power", "ratedHP", Some("HP"))],
        );
        let mut wizard = SubmissionWizard::default();
        wizard.set_category(AssetCategory::OnshoreRig);
        wizard.set_asset_name("Rig F");
        wizard.set_spec_value("ratedHP", "1500");
        wizard.set_spec_value("drillingDepth", "9000");
        wizard.next().unwrap();
        let asset = wizard.submit(&registry, &ctx()).unwrap();
        assert_eq!(asset.specs.len(), 1);
        assert_eq!(asset.capacity, "1500 HP");
    }
}
