use contracts::domain::a004_tender::TenderView;

use crate::shared::api_utils::get_json;

/// Тендеры приходят уже замаскированными: суммы ставок скрыты до вскрытия
pub async fn fetch_tenders() -> Result<Vec<TenderView>, String> {
    get_json("/api/a004/tender", None).await
}
