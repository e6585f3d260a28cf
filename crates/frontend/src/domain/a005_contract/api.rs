use contracts::domain::a005_contract::Contract;

use crate::shared::api_utils::get_json;

pub async fn fetch_contracts() -> Result<Vec<Contract>, String> {
    get_json("/api/a005/contract", None).await
}
