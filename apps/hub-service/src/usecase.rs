//! # ユースケース層
//!
//! 各インテグレーションの実装を置く。
//!
//! - [`smtp`] - SMTP サーバー経由で添付ファイルをメール送信する

pub mod smtp;

pub use smtp::SmtpIntegration;
