//! # メール送信
//!
//! アクションが使うトランスポートの抽象と、その SMTP 実装。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: 送信は [`MailTransport`]、生成は [`TransportFactory`]
//! - **リクエストごとに生成**: 接続先と認証情報はリクエストの `address` ごとに異なるため、
//!   トランスポートはキャッシュせず毎回作る
//! - **プロトコルは lettre に委譲**: SMTP / SMTPS の実装はこのクレートに持たない

mod smtp;

use actionhub_domain::message::OutboundMessage;
use async_trait::async_trait;
pub use smtp::{SmtpMailTransport, SmtpTransportFactory};

use crate::error::TransportError;

/// メールトランスポート
///
/// 設定済みの接続先に対してメッセージを 1 通送る。
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// メッセージを送信する
    ///
    /// 再送はしない。失敗はすべて [`TransportError`] として返す。
    async fn send(&self, message: &OutboundMessage) -> Result<(), TransportError>;
}

/// トランスポートファクトリ
///
/// 接続文字列から新しい [`MailTransport`] を作る。
pub trait TransportFactory: Send + Sync {
    /// 接続文字列からトランスポートを作る
    ///
    /// 返したトランスポートは呼び出し元のリクエスト専用で、共有しない。
    fn create(&self, address: &str) -> Result<Box<dyn MailTransport>, TransportError>;
}
