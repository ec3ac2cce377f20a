//! # テスト用モックトランスポート
//!
//! アクションのテストで使うインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! actionhub-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! [`MockTransportFactory`] は生成要求された接続文字列と、各トランスポートが
//! 送ったメッセージを記録する。クローンは記録を共有する。

use std::sync::{Arc, Mutex};

use actionhub_domain::message::OutboundMessage;
use async_trait::async_trait;

use crate::{
    error::TransportError,
    mail::{MailTransport, TransportFactory},
};

/// 送信済みメッセージの記録
#[derive(Debug, Clone)]
pub struct SentMessage {
    /// 送信に使ったトランスポートの接続文字列
    pub address: String,
    pub message: OutboundMessage,
}

#[derive(Default)]
struct MockState {
    created:         Vec<String>,
    sent:            Vec<SentMessage>,
    send_error:      Option<String>,
    rejected_scheme: Option<String>,
}

// ===== MockTransportFactory =====

#[derive(Clone, Default)]
pub struct MockTransportFactory {
    state: Arc<Mutex<MockState>>,
}

impl MockTransportFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以後の送信をすべて失敗させる
    pub fn fail_sends_with(self, message: impl Into<String>) -> Self {
        self.state.lock().unwrap().send_error = Some(message.into());
        self
    }

    /// 指定スキームで始まる接続文字列の生成を失敗させる
    pub fn reject_scheme(self, scheme: impl Into<String>) -> Self {
        self.state.lock().unwrap().rejected_scheme = Some(scheme.into());
        self
    }

    /// `create` に渡された接続文字列（呼び出し順）
    pub fn created_addresses(&self) -> Vec<String> {
        self.state.lock().unwrap().created.clone()
    }

    /// 送信されたメッセージ（送信順）
    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.state.lock().unwrap().sent.clone()
    }
}

impl TransportFactory for MockTransportFactory {
    fn create(&self, address: &str) -> Result<Box<dyn MailTransport>, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.created.push(address.to_string());

        if let Some(scheme) = state
            .rejected_scheme
            .as_deref()
            .filter(|scheme| address.starts_with(scheme))
        {
            return Err(TransportError::unexpected(format!(
                "unsupported scheme: {scheme}"
            )));
        }

        Ok(Box::new(MockMailTransport {
            address: address.to_string(),
            state:   Arc::clone(&self.state),
        }))
    }
}

// ===== MockMailTransport =====

pub struct MockMailTransport {
    address: String,
    state:   Arc<Mutex<MockState>>,
}

#[async_trait]
impl MailTransport for MockMailTransport {
    async fn send(&self, message: &OutboundMessage) -> Result<(), TransportError> {
        // 並行テストで他の呼び出しと交互に進むよう、一度スケジューラに譲る
        tokio::task::yield_now().await;

        let mut state = self.state.lock().unwrap();
        if let Some(error) = &state.send_error {
            return Err(TransportError::unexpected(error.clone()));
        }
        state.sent.push(SentMessage {
            address: self.address.clone(),
            message: message.clone(),
        });
        Ok(())
    }
}
