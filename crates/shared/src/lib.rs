//! # ActionHub 共有ユーティリティ
//!
//! ActionHub の全クレートから使われる、ビジネスロジックを含まない部品を集める。
//!
//! - [`observability`] - トレーシング初期化
//! - [`event_log`] - ビジネスイベントの構造化ログ
//! - [`error_response`] - RFC 9457 形式のエラーレスポンス
//! - [`health`] - ヘルスチェックのレスポンス型

pub mod error_response;
pub mod event_log;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
