use contracts::dashboards::d401_asset_comparison::CompareResponse;

use crate::shared::api_utils::get_json;

pub fn compare_path(ids: &[String]) -> String {
    let joined = ids
        .iter()
        .map(|id| urlencoding::encode(id).into_owned())
        .collect::<Vec<_>>()
        .join(",");
    format!("/api/d401/compare?ids={}", joined)
}

/// Сравнение выбранных активов. Пустая выборка отклоняется backend-ом (400).
pub async fn compare(ids: &[String]) -> Result<CompareResponse, String> {
    get_json(&compare_path(ids), None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_joined_with_commas() {
        let ids = vec!["a1".to_string(), "b 2".to_string()];
        assert_eq!(compare_path(&ids), "/api/d401/compare?ids=a1,b%202");
    }
}
