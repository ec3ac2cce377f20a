//! # 送信メッセージ
//!
//! アクション 1 回ごとに組み立てる送信メール。永続化しない。

/// 送信メッセージ
///
/// トランスポートに渡す中立な表現。MIME への変換はインフラ層が行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// 宛先（RFC 5322 のアドレスリスト。カンマ区切りで複数指定可）
    pub to:          String,
    /// 送信元（`"Name <addr>"` 形式も可）
    pub from:        String,
    pub subject:     String,
    /// プレーンテキスト本文
    pub text_body:   String,
    /// HTML 本文
    pub html_body:   String,
    pub attachments: Vec<MessageAttachment>,
}

/// メッセージの添付ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAttachment {
    pub filename: String,
    /// 添付データ（リクエストのバイト列そのまま）
    pub content:  Vec<u8>,
    /// MIME タイプ。不明なら `application/octet-stream` として送る
    pub mime:     Option<String>,
}
