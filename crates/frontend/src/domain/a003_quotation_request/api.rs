use contracts::domain::a003_quotation_request::{CreateQuotationRequest, QuotationRequest};

use crate::shared::api_utils::{get_json, post_json};

pub async fn fetch_requests(token: &str) -> Result<Vec<QuotationRequest>, String> {
    get_json("/api/a003/quotation-request", Some(token)).await
}

pub async fn create_request(
    token: &str,
    dto: &CreateQuotationRequest,
) -> Result<QuotationRequest, String> {
    post_json("/api/a003/quotation-request", Some(token), dto).await
}
