//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! HTTP 層が返すエラーボディ。axum への変換はサービス側の責務とし、
//! このクレートには axum 依存を持ち込まない。

use serde::{Deserialize, Serialize};

const ERROR_TYPE_BASE: &str = "https://actionhub.example.com/errors";

/// エラーレスポンス
///
/// `type` は問題の種類を示す URI。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    pub detail:     String,
}

impl ErrorResponse {
    /// `error_type_suffix` をベース URI に連結して作成する
    pub fn new(
        error_type_suffix: &str,
        title: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            error_type: format!("{ERROR_TYPE_BASE}/{error_type_suffix}"),
            title: title.into(),
            status,
            detail: detail.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new("bad-request", "Bad Request", 400, detail)
    }

    /// 400 Validation Error
    ///
    /// アクションの必須パラメータ不足など、リクエスト内容の検証失敗に使う。
    pub fn validation_error(detail: impl Into<String>) -> Self {
        Self::new("validation-error", "Validation Error", 400, detail)
    }

    /// 404 Not Found
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new("not-found", "Not Found", 404, detail)
    }

    /// 500 Internal Server Error
    ///
    /// detail は固定文言。内部情報はログにのみ出す。
    pub fn internal_error() -> Self {
        Self::new(
            "internal-error",
            "Internal Server Error",
            500,
            "内部エラーが発生しました",
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ErrorResponse::bad_request("x"), 400, "bad-request")]
    #[case(ErrorResponse::validation_error("x"), 400, "validation-error")]
    #[case(ErrorResponse::not_found("x"), 404, "not-found")]
    #[case(ErrorResponse::internal_error(), 500, "internal-error")]
    fn test_便利コンストラクタのstatusとtypeが対応する(
        #[case] error: ErrorResponse,
        #[case] status: u16,
        #[case] suffix: &str,
    ) {
        assert_eq!(error.status, status);
        assert_eq!(error.error_type, format!("{ERROR_TYPE_BASE}/{suffix}"));
    }

    #[test]
    fn test_jsonではerror_typeがtypeとして出力される() {
        let error = ErrorResponse::validation_error("SMTP アドレスが指定されていません");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "https://actionhub.example.com/errors/validation-error",
                "title": "Validation Error",
                "status": 400,
                "detail": "SMTP アドレスが指定されていません",
            })
        );
    }

    #[test]
    fn test_internal_errorのdetailは固定文言() {
        assert_eq!(ErrorResponse::internal_error().detail, "内部エラーが発生しました");
    }
}
