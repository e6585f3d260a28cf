use serde::{Deserialize, Serialize};

use crate::domain::a001_asset::{Asset, AssetStatus};

/// Колонки доски в порядке жизненного цикла
pub const BUCKETS: [AssetStatus; 4] = [
    AssetStatus::Registered,
    AssetStatus::CatalogFilling,
    AssetStatus::Verification,
    AssetStatus::Active,
];

pub fn bucket_title(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Registered => "Registrasi Baru",
        AssetStatus::CatalogFilling => "Pengisian Katalog",
        AssetStatus::Verification => "Verifikasi Teknis",
        AssetStatus::Active => "Aktif / Operational",
        AssetStatus::Inactive => "Tidak Aktif",
        AssetStatus::Maintenance => "Perawatan",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardColumn<T> {
    pub status: AssetStatus,
    pub title: String,
    pub items: Vec<T>,
}

pub type VerificationBoardResponse = Vec<BoardColumn<Asset>>;

/// Разбиение записей по колонкам статусов.
///
/// Порядок внутри колонки совпадает с входным. Записи со статусом вне
/// `buckets` пропускаются; повторная колонка того же статуса остается пустой,
/// так что запись не попадает в две колонки.
pub fn partition<'a>(assets: &'a [Asset], buckets: &[AssetStatus]) -> Vec<BoardColumn<&'a Asset>> {
    let mut seen = Vec::with_capacity(buckets.len());
    buckets
        .iter()
        .map(|&status| {
            let first = !seen.contains(&status);
            seen.push(status);
            BoardColumn {
                status,
                title: bucket_title(status).to_string(),
                items: if first {
                    assets.iter().filter(|a| a.status == status).collect()
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}
