use contracts::dashboards::d400_verification_board::{
    partition, BoardColumn, VerificationBoardResponse, BUCKETS,
};

use crate::domain::a001_asset::AssetStore;

/// Доска верификации по текущему содержимому хранилища
pub fn build_board(store: &AssetStore) -> VerificationBoardResponse {
    let assets = store.list_all();
    partition(&assets, &BUCKETS)
        .into_iter()
        .map(|column| BoardColumn {
            status: column.status,
            title: column.title,
            items: column.items.into_iter().cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::seed::demo_assets;
    use contracts::domain::a001_asset::AssetStatus;

    #[test]
    fn demo_assets_land_in_active_column() {
        let mut assets = demo_assets();
        assets[1].status = AssetStatus::Registered;
        assets[2].status = AssetStatus::Inactive;
        let board = build_board(&AssetStore::with_assets(assets));
        assert_eq!(board.len(), 4);
        assert_eq!(board[0].items.len(), 1);
        assert_eq!(board[3].items.len(), 1);
        assert_eq!(board.iter().map(|c| c.items.len()).sum::<usize>(), 2);
    }
}
