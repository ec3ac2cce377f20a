//! # インフラ層エラー定義
//!
//! トランスポートの生成とメール送信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターン:
//! - [`TransportError`]: 種別と [`SpanTrace`] を保持するラッパー
//! - [`TransportErrorKind`]: 具体的な種別
//!
//! `From` 実装と convenience constructor はどれも生成時点の SpanTrace を捕捉する。
//!
//! `Display` は種別の接頭辞付きでログ向け。アクションがレスポンスに載せるのは
//! 接頭辞なしの [`TransportError::detail`] で、lettre のエラー文言をそのまま返す。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// トランスポートエラー
#[derive(Display)]
#[display("{kind}")]
pub struct TransportError {
    kind:       TransportErrorKind,
    span_trace: SpanTrace,
}

/// トランスポートエラーの種別
#[derive(Debug, Error)]
pub enum TransportErrorKind {
    /// 接続文字列を解釈できない（スキーム不明、URL 不正、TLS 初期化失敗）
    #[error("SMTP 接続文字列が不正です: {0}")]
    InvalidConnectionUrl(#[source] lettre::transport::smtp::Error),

    /// メールアドレスの形式不正や MIME 組み立ての失敗
    #[error("メッセージを構築できません: {0}")]
    InvalidMessage(String),

    /// SMTP セッション中の失敗（接続拒否、認証失敗、タイムアウト、応答エラー）
    #[error("SMTP 送信に失敗しました: {0}")]
    Smtp(#[source] lettre::transport::smtp::Error),

    /// 上記に分類できないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl TransportErrorKind {
    fn detail(&self) -> String {
        match self {
            Self::InvalidConnectionUrl(source) | Self::Smtp(source) => source.to_string(),
            Self::InvalidMessage(msg) | Self::Unexpected(msg) => msg.clone(),
        }
    }
}

impl TransportError {
    pub fn kind(&self) -> &TransportErrorKind {
        &self.kind
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// 種別の接頭辞を付けない原因のテキスト
    pub fn detail(&self) -> String {
        self.kind.detail()
    }

    fn capture(kind: TransportErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    // ===== Convenience constructors =====

    pub fn invalid_connection_url(source: lettre::transport::smtp::Error) -> Self {
        Self::capture(TransportErrorKind::InvalidConnectionUrl(source))
    }

    pub fn invalid_message(msg: impl Into<String>) -> Self {
        Self::capture(TransportErrorKind::InvalidMessage(msg.into()))
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::capture(TransportErrorKind::Unexpected(msg.into()))
    }
}

impl fmt::Debug for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

impl From<lettre::transport::smtp::Error> for TransportError {
    fn from(source: lettre::transport::smtp::Error) -> Self {
        Self::capture(TransportErrorKind::Smtp(source))
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_invalid_messageでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("build_message");
            let _enter = span.enter();

            let err = TransportError::invalid_message("送信元アドレスが不正です");

            assert!(matches!(err.kind(), TransportErrorKind::InvalidMessage(_)));
            let trace = format!("{}", err.span_trace());
            assert!(
                trace.contains("build_message"),
                "SpanTrace がスパン名を含むこと: {trace}"
            );
        });
    }

    #[test]
    fn test_displayは種別のメッセージを出力する() {
        let err = TransportError::unexpected("boom");

        assert_eq!(err.to_string(), "予期しないエラー: boom");
    }

    #[test]
    fn test_detailは種別の接頭辞を含まない() {
        let err = TransportError::unexpected("Connection refused");

        assert_eq!(err.detail(), "Connection refused");
        assert_eq!(err.to_string(), "予期しないエラー: Connection refused");
    }

    #[test]
    fn test_文字列由来の種別はsourceを持たない() {
        use std::error::Error as _;

        assert!(TransportError::invalid_message("x").source().is_none());
    }
}
