//! # Hub Service エラー定義
//!
//! Hub Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 配信失敗はここに含まれない。送信の失敗は `ActionResponse { success: false }`
//! として 200 で返る。

use actionhub_domain::ActionError;
use actionhub_shared::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Hub Service で発生するエラー
#[derive(Debug, Error)]
pub enum HubError {
    /// インテグレーションが見つからない
    #[error("インテグレーションが見つかりません: {0}")]
    NotFound(String),

    /// リクエストを解釈できない
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// アクションが構造的なエラーを返した
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        let body = match &self {
            HubError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            HubError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            HubError::Action(e) if e.is_validation() => ErrorResponse::validation_error(e.to_string()),
            HubError::Action(e) => {
                tracing::error!(error = %e, "アクションの実行に失敗しました");
                ErrorResponse::internal_error()
            }
        };

        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::not_found(HubError::NotFound("slack".to_string()), StatusCode::NOT_FOUND)]
    #[case::bad_request(HubError::BadRequest("base64".to_string()), StatusCode::BAD_REQUEST)]
    #[case::添付不足(HubError::Action(ActionError::MissingAttachment), StatusCode::BAD_REQUEST)]
    #[case::アドレス不足(HubError::Action(ActionError::MissingAddress), StatusCode::BAD_REQUEST)]
    #[case::宛先不足(HubError::Action(ActionError::MissingRecipient), StatusCode::BAD_REQUEST)]
    #[case::テンプレート(
        HubError::Action(ActionError::Template("body.txt".to_string())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn エラー種別に応じたステータスを返す(#[case] error: HubError, #[case] expected: StatusCode) {
        let response = error.into_response();

        assert_eq!(response.status(), expected);
    }

    #[tokio::test]
    async fn 検証エラーはメッセージをdetailに含める() {
        let response = HubError::from(ActionError::MissingAddress).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            ErrorResponse::validation_error("有効な SMTP アドレスが必要です")
        );
    }

    #[tokio::test]
    async fn テンプレートエラーは詳細を隠す() {
        let response =
            HubError::from(ActionError::Template("body.html: secret".to_string())).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.detail, "内部エラーが発生しました");
    }
}
