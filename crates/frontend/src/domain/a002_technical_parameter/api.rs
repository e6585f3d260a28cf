use contracts::domain::a001_asset::AssetCategory;
use contracts::domain::a002_technical_parameter::{
    ParameterConfig, TechnicalParameter, UpdateParametersRequest,
};

use crate::shared::api_utils::{get_json, put_json};

fn category_path(category: AssetCategory) -> String {
    format!(
        "/api/a002/technical-parameters/{}",
        urlencoding::encode(category.as_str())
    )
}

pub async fn fetch_config() -> Result<ParameterConfig, String> {
    get_json("/api/a002/technical-parameters", None).await
}

pub async fn fetch_library() -> Result<Vec<TechnicalParameter>, String> {
    get_json("/api/a002/technical-parameters/library", None).await
}

/// Полная замена списка категории; возвращает сохраненный список
pub async fn update_parameters(
    token: &str,
    category: AssetCategory,
    parameters: Vec<TechnicalParameter>,
) -> Result<Vec<TechnicalParameter>, String> {
    let request = UpdateParametersRequest { parameters };
    put_json(&category_path(category), Some(token), &request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_are_escaped_in_path() {
        assert_eq!(
            category_path(AssetCategory::OffshoreRig),
            "/api/a002/technical-parameters/Offshore%20Rig"
        );
        assert_eq!(category_path(AssetCategory::Vessel), "/api/a002/technical-parameters/Kapal");
    }
}
