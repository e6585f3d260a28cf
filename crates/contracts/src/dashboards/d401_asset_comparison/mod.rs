pub mod compare;

pub use compare::{compare_stats, recommend_best, select_by_ids, CompareResponse, CompareStats, Recommendation};
