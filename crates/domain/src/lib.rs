//! # ActionHub ドメイン層
//!
//! 統合ハブのアクション（エクスポートしたデータを外部へ配信する処理）を
//! 表現する型を定義する。I/O は一切持たない。
//!
//! ## 依存関係の方向
//!
//! ```text
//! hub-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`action`] - アクションリクエスト・レスポンスと配信結果
//! - [`form`] - ユーザー設定フォームの宣言的定義
//! - [`integration`] - ホストが登録時に読むメタデータ
//! - [`message`] - 送信するメールメッセージ
//! - [`error`] - アクション実行時のエラー
//! - [`clock`] - 時刻プロバイダ
//!
//! ## 使用例
//!
//! ```rust
//! use actionhub_domain::{ActionError, action::ActionRequest};
//!
//! let request = ActionRequest::default();
//! assert!(request.attachment_data().is_none());
//!
//! let error = ActionError::MissingAttachment;
//! assert_eq!(error.to_string(), "添付ファイルのデータを取得できませんでした");
//! ```

pub mod action;
pub mod clock;
pub mod error;
pub mod form;
pub mod integration;
pub mod message;

pub use error::ActionError;
