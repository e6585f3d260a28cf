use serde::{Deserialize, Serialize};

/// Запись реестра классификационного общества BKI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BkiRecord {
    pub imo_number: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vessel_type: String,
    pub gross_tonnage: f64,
    pub dwt: f64,
    pub year_built: i32,
    pub manufacturer: String,
    pub flag: String,
    #[serde(rename = "class")]
    pub class_notation: String,
    pub loa: f64,
    pub breadth: f64,
}

impl BkiRecord {
    /// Технические значения, которые вливаются в динамические поля формы
    pub fn spec_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("yearBuilt", self.year_built.to_string()),
            ("dwt", trim_float(self.dwt)),
            ("grossTonnage", trim_float(self.gross_tonnage)),
            ("loa", trim_float(self.loa)),
            ("breadth", trim_float(self.breadth)),
            ("flagCountry", self.flag.clone()),
        ]
    }
}

fn trim_float(value: f64) -> String {
    crate::domain::a001_asset::SpecValue::Number(value).to_string()
}

/// Фикстуры симулированного реестра BKI
pub fn fixture_records() -> Vec<BkiRecord> {
    vec![BkiRecord {
        imo_number: "9737668".into(),
        name: "TRITON 501".into(),
        vessel_type: "Anchor Handling Tug Supply (AHTS)".into(),
        gross_tonnage: 1558.0,
        dwt: 2000.0,
        year_built: 2015,
        manufacturer: "Batam Shipyard".into(),
        flag: "Indonesia".into(),
        class_notation: "BKI Class A1".into(),
        loa: 70.0,
        breadth: 16.0,
    }]
}

pub fn find_fixture(imo_number: &str) -> Option<BkiRecord> {
    let key = imo_number.trim();
    fixture_records().into_iter().find(|r| r.imo_number == key)
}

/// Квитанция на один запуск поиска.
///
/// Результат применяется только по квитанции текущего запуска; после
/// закрытия мастера результат отбрасывается.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub id: u64,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Запись найдена и применена к состоянию мастера
    Applied(BkiRecord),
    /// Записи нет; состояние не изменилось, можно повторить с другим ключом
    NotFound { key: String },
    /// Мастер закрыт или квитанция устарела
    Discarded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_found_by_trimmed_key() {
        let record = find_fixture(" 9737668 ").unwrap();
        assert_eq!(record.name, "TRITON 501");
        assert_eq!(record.year_built, 2015);
        assert!(find_fixture("1234567").is_none());
    }

    #[test]
    fn spec_entries_render_integral_numbers() {
        let record = find_fixture("9737668").unwrap();
        let entries = record.spec_entries();
        assert!(entries.contains(&("dwt", "2000".to_string())));
        assert!(entries.contains(&("yearBuilt", "2015".to_string())));
        assert!(entries.contains(&("flagCountry", "Indonesia".to_string())));
    }

    #[test]
    fn wire_shape_matches_registry_payload() {
        let json = serde_json::to_value(find_fixture("9737668").unwrap()).unwrap();
        assert_eq!(json["type"], "Anchor Handling Tug Supply (AHTS)");
        assert_eq!(json["class"], "BKI Class A1");
        assert_eq!(json["grossTonnage"], 1558.0);
    }
}
