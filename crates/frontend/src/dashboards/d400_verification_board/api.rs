use contracts::dashboards::d400_verification_board::VerificationBoardResponse;

use crate::shared::api_utils::get_json;

/// Колонки доски, уже разложенные backend-ом
pub async fn get_board() -> Result<VerificationBoardResponse, String> {
    get_json("/api/d400/verification-board", None).await
}
