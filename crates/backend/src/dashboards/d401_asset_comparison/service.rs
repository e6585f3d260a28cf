use contracts::dashboards::d401_asset_comparison::{
    compare_stats, recommend_best, select_by_ids, CompareResponse,
};

use crate::domain::a001_asset::AssetStore;

pub fn parse_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Сравнение выбранных активов; `None`, если ни один id не найден
pub fn compare(store: &AssetStore, ids: &[String]) -> Option<CompareResponse> {
    let assets = store.list_all();
    let selected = select_by_ids(&assets, ids);
    let stats = compare_stats(&selected)?;
    let recommendation = recommend_best(&selected)?;
    Some(CompareResponse {
        assets: selected.into_iter().cloned().collect(),
        stats,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::seed::demo_assets;

    #[test]
    fn compares_selected_subset() {
        let store = AssetStore::with_assets(demo_assets());
        let all = store.list_all();
        let raw = format!("{}, {}", all[0].to_string_id(), all[2].to_string_id());
        let response = compare(&store, &parse_ids(&raw)).unwrap();
        assert_eq!(response.assets.len(), 2);
        assert_eq!(response.stats.min_rate, 250_000_000.0);
        assert_eq!(response.stats.max_year, 2018);
        assert_eq!(response.recommendation.winner, "Rig Darat A (Onshore)");
        assert_eq!(
            response.recommendation.reasoning,
            "Best balance of health (98%) and cost."
        );
    }

    #[test]
    fn empty_subset_has_no_result() {
        let store = AssetStore::with_assets(demo_assets());
        assert!(compare(&store, &parse_ids("")).is_none());
        assert!(compare(&store, &parse_ids("x,y")).is_none());
    }
}
