use serde::{Deserialize, Serialize};

/// Режим верификации судна
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VerificationMode {
    /// Класс BKI: технические данные берутся из реестра по номеру IMO
    #[default]
    RegistryBacked,
    /// Non-BKI / IACS / иностранный флаг: данные вводятся вручную
    NonRegistry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OwnershipType {
    #[default]
    Owner,
    Operator,
}

/// Уровень приоритета каботажа (Permenhub 92/2018)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PriorityTier {
    /// Индонезийский флаг, национальный владелец
    #[default]
    #[serde(rename = "1")]
    Tier1,
    /// Индонезийский флаг, СП или иностранный капитал
    #[serde(rename = "2")]
    Tier2,
    /// Иностранный флаг
    #[serde(rename = "3")]
    Tier3,
}

impl PriorityTier {
    pub const ALL: [PriorityTier; 3] = [Self::Tier1, Self::Tier2, Self::Tier3];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tier1 => "Prioritas 1 (Bendera Indo - Pemilik Nasional)",
            Self::Tier2 => "Prioritas 2 (Bendera Indo - JV/Asing)",
            Self::Tier3 => "Prioritas 3 (Bendera Asing)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    OwnershipProof,
    OperatorAppointment,
    ShareOwnership,
    FlagCommitment,
    LeasingAgreement,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 5] = [
        Self::OwnershipProof,
        Self::OperatorAppointment,
        Self::ShareOwnership,
        Self::FlagCommitment,
        Self::LeasingAgreement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OwnershipProof => "Bukti Kepemilikan (Gross Akta)",
            Self::OperatorAppointment => "Dokumen Penunjukan Operator",
            Self::ShareOwnership => "Dokumen Kepemilikan Saham",
            Self::FlagCommitment => "Surat Komitmen Ganti Bendera",
            Self::LeasingAgreement => "Perjanjian Sewa (Leasing)",
        }
    }

    /// Набор обязательных документов для выбранной комбинации.
    ///
    /// Приоритет каботажа влияет только в режиме Non-BKI: только там
    /// он выбирается пользователем.
    pub fn required_for(
        ownership: OwnershipType,
        tier: PriorityTier,
        mode: VerificationMode,
    ) -> Vec<DocumentKind> {
        let manual = mode == VerificationMode::NonRegistry;
        Self::ALL
            .into_iter()
            .filter(|kind| match kind {
                Self::OwnershipProof => true,
                Self::OperatorAppointment => ownership == OwnershipType::Operator,
                Self::ShareOwnership | Self::FlagCommitment => {
                    manual && matches!(tier, PriorityTier::Tier2 | PriorityTier::Tier3)
                }
                Self::LeasingAgreement => manual && tier == PriorityTier::Tier3,
            })
            .collect()
    }
}

/// Отметки о загруженных документах
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentChecklist {
    pub ownership_proof: bool,
    pub operator_appointment: bool,
    pub share_ownership: bool,
    pub flag_commitment: bool,
    pub leasing_agreement: bool,
}

impl DocumentChecklist {
    fn slot(&mut self, kind: DocumentKind) -> &mut bool {
        match kind {
            DocumentKind::OwnershipProof => &mut self.ownership_proof,
            DocumentKind::OperatorAppointment => &mut self.operator_appointment,
            DocumentKind::ShareOwnership => &mut self.share_ownership,
            DocumentKind::FlagCommitment => &mut self.flag_commitment,
            DocumentKind::LeasingAgreement => &mut self.leasing_agreement,
        }
    }

    pub fn is_checked(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::OwnershipProof => self.ownership_proof,
            DocumentKind::OperatorAppointment => self.operator_appointment,
            DocumentKind::ShareOwnership => self.share_ownership,
            DocumentKind::FlagCommitment => self.flag_commitment,
            DocumentKind::LeasingAgreement => self.leasing_agreement,
        }
    }

    pub fn toggle(&mut self, kind: DocumentKind) {
        let slot = self.slot(kind);
        *slot = !*slot;
    }

    pub fn set(&mut self, kind: DocumentKind, checked: bool) {
        *self.slot(kind) = checked;
    }

    /// Обязательные, но не отмеченные документы
    pub fn missing(&self, required: &[DocumentKind]) -> Vec<DocumentKind> {
        required
            .iter()
            .copied()
            .filter(|kind| !self.is_checked(*kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use DocumentKind::*;

    #[test]
    fn owner_in_bki_mode_needs_only_ownership_proof() {
        for tier in PriorityTier::ALL {
            assert_eq!(
                DocumentKind::required_for(OwnershipType::Owner, tier, VerificationMode::RegistryBacked),
                vec![OwnershipProof]
            );
        }
    }

    #[test]
    fn operator_adds_appointment() {
        assert_eq!(
            DocumentKind::required_for(
                OwnershipType::Operator,
                PriorityTier::Tier1,
                VerificationMode::NonRegistry
            ),
            vec![OwnershipProof, OperatorAppointment]
        );
    }

    #[test]
    fn foreign_tiers_in_manual_mode() {
        assert_eq!(
            DocumentKind::required_for(OwnershipType::Owner, PriorityTier::Tier2, VerificationMode::NonRegistry),
            vec![OwnershipProof, ShareOwnership, FlagCommitment]
        );
        assert_eq!(
            DocumentKind::required_for(
                OwnershipType::Operator,
                PriorityTier::Tier3,
                VerificationMode::NonRegistry
            ),
            vec![OwnershipProof, OperatorAppointment, ShareOwnership, FlagCommitment, LeasingAgreement]
        );
    }

    #[test]
    fn checklist_toggle_and_missing() {
        let mut docs = DocumentChecklist::default();
        let required = [OwnershipProof, FlagCommitment];
        assert_eq!(docs.missing(&required), vec![OwnershipProof, FlagCommitment]);
        docs.toggle(OwnershipProof);
        assert!(docs.is_checked(OwnershipProof));
        assert_eq!(docs.missing(&required), vec![FlagCommitment]);
        docs.toggle(OwnershipProof);
        assert!(!docs.is_checked(OwnershipProof));
        docs.set(FlagCommitment, true);
        assert_eq!(docs.missing(&required), vec![OwnershipProof]);
    }

    #[test]
    fn tier_wire_values() {
        assert_eq!(serde_json::to_string(&PriorityTier::Tier2).unwrap(), "\"2\"");
        let docs: DocumentChecklist = serde_json::from_str(
            r#"{"ownershipProof":true,"operatorAppointment":false,"shareOwnership":false,"flagCommitment":false,"leasingAgreement":false}"#,
        )
        .unwrap();
        assert!(docs.ownership_proof);
    }
}
