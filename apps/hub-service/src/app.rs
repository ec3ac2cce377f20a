//! # ルーター構築
//!
//! `main` と結合テストが同じルーターを使えるよう、組み立てをここに置く。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handler::{IntegrationState, execute_action, get_form, health_check, list_integrations},
    registry::IntegrationRegistry,
};

/// レジストリを共有状態に持つルーターを構築する
pub fn build_router(registry: IntegrationRegistry) -> Router {
    let state = Arc::new(IntegrationState { registry });

    Router::new()
        .route("/health", get(health_check))
        .route("/integrations", get(list_integrations))
        .route("/integrations/{name}/form", post(get_form))
        .route("/integrations/{name}/action", post(execute_action))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
