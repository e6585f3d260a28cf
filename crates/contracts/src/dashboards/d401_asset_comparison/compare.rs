use serde::{Deserialize, Serialize};

use crate::domain::a001_asset::Asset;

/// Сводные показатели выбранных активов для подсветки лучших значений
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareStats {
    pub min_rate: f64,
    pub max_year: i32,
    pub max_health: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub winner: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub assets: Vec<Asset>,
    pub stats: CompareStats,
    pub recommendation: Recommendation,
}

/// `None` для пустого набора: у минимума и максимума нет значения
pub fn compare_stats(assets: &[&Asset]) -> Option<CompareStats> {
    let (first, rest) = assets.split_first()?;
    let init = CompareStats {
        min_rate: first.daily_rate,
        max_year: first.year_built,
        max_health: first.health,
    };
    Some(rest.iter().fold(init, |acc, a| CompareStats {
        min_rate: acc.min_rate.min(a.daily_rate),
        max_year: acc.max_year.max(a.year_built),
        max_health: acc.max_health.max(a.health),
    }))
}

/// Выборка по идентификаторам в порядке хранилища; неизвестные id пропускаются
pub fn select_by_ids<'a>(assets: &'a [Asset], ids: &[String]) -> Vec<&'a Asset> {
    assets
        .iter()
        .filter(|a| ids.iter().any(|id| *id == a.to_string_id()))
        .collect()
}

/// Рекомендация по наибольшему `health`; при равенстве побеждает более поздняя запись
pub fn recommend_best(assets: &[&Asset]) -> Option<Recommendation> {
    let (first, rest) = assets.split_first()?;
    let best = rest
        .iter()
        .fold(*first, |prev, &curr| if prev.health > curr.health { prev } else { curr });
    Some(Recommendation {
        winner: best.name.clone(),
        reasoning: format!("Best balance of health ({}%) and cost.", trim_number(best.health)),
    })
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
