//! # アクション実行エラー
//!
//! アクション呼び出しそのものを失敗させるエラーを定義する。
//!
//! ## 2 段階のエラー方針
//!
//! | 種類 | 表現 | ホストへの伝わり方 |
//! |------|------|--------------------|
//! | 入力不備（添付なし、アドレスなし、宛先なし） | [`ActionError`] | `Err` として即座に返す |
//! | 配信失敗（接続拒否、認証失敗、タイムアウト等） | [`DeliveryOutcome::Failed`](crate::action::DeliveryOutcome::Failed) | `Ok(ActionResponse)` の `success: false` |
//!
//! 配信失敗はこの型に含めない。ユーザーに理由を見せる通常の結果として扱う。

use thiserror::Error;

/// アクション呼び出しを失敗させるエラー
///
/// 入力不備のバリアントはトランスポート生成より前に検出される。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// 添付ファイルがない、またはデータが空
    #[error("添付ファイルのデータを取得できませんでした")]
    MissingAttachment,

    /// `address` パラメータがない、または空
    #[error("有効な SMTP アドレスが必要です")]
    MissingAddress,

    /// `to` パラメータがない、または空
    #[error("送信先メールアドレスが必要です")]
    MissingRecipient,

    /// メール本文テンプレートのレンダリングに失敗
    ///
    /// テンプレートはバイナリに埋め込まれているため、発生した場合は実装不具合。
    #[error("テンプレートレンダリングに失敗: {0}")]
    Template(String),
}

impl ActionError {
    /// 入力不備によるエラーかどうか
    ///
    /// HTTP 層で 400 と 500 を振り分けるのに使う。
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Template(_))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ActionError::MissingAttachment, true)]
    #[case(ActionError::MissingAddress, true)]
    #[case(ActionError::MissingRecipient, true)]
    #[case(ActionError::Template("boom".to_string()), false)]
    fn test_is_validationの判定(#[case] error: ActionError, #[case] expected: bool) {
        assert_eq!(error.is_validation(), expected);
    }

    #[test]
    fn test_アドレス不足と宛先不足は異なるメッセージを持つ() {
        assert_ne!(
            ActionError::MissingAddress.to_string(),
            ActionError::MissingRecipient.to_string()
        );
    }
}
