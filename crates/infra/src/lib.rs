//! # ActionHub インフラ層
//!
//! 外部システム（SMTP サーバー）との通信を担当する。
//!
//! ## 設計方針
//!
//! ドメイン層の [`OutboundMessage`](actionhub_domain::message::OutboundMessage) を
//! 受け取り、実際のプロトコル処理は lettre に委譲する。アクション側は
//! [`mail::TransportFactory`] と [`mail::MailTransport`] の 2 つの trait だけを見る。
//!
//! ## 依存関係
//!
//! ```text
//! hub-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`mail`] - トランスポートの抽象と SMTP 実装
//! - [`error`] - インフラ層エラー定義
//! - `mock` - テスト用のインメモリ実装（`test-utils` feature）

pub mod error;
pub mod mail;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{TransportError, TransportErrorKind};
pub use mail::{MailTransport, SmtpTransportFactory, TransportFactory};
