//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```

use actionhub_shared::HealthResponse;
use axum::Json;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
