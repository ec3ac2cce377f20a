//! # メッセージビルダー
//!
//! アクションリクエストから解決済みの値を受け取り、送信メッセージを組み立てる。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: 本文テンプレートはバイナリに埋め込む
//! - **HTML のみ自動エスケープ**: tera はテンプレート名の拡張子で判断する
//! - **I/O なし**: トランスポートには触れないので単体でテストできる
//! - **URL は任意**: スケジュールプランの URL がなければリンクなしの本文にする

use actionhub_domain::{
    ActionError,
    message::{MessageAttachment, OutboundMessage},
};
use tera::{Context, Tera};

const TEXT_TEMPLATE: &str = "body.txt";
const HTML_TEMPLATE: &str = "body.html";

/// 解決済みのメッセージ項目
///
/// フォールバックを適用し終えた値。ビルダーはこれ以上の補完をしない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFields {
    pub to:       String,
    pub from:     String,
    pub subject:  String,
    pub filename: String,
}

/// メッセージビルダー
pub struct MessageBuilder {
    engine: Tera,
}

impl MessageBuilder {
    /// 埋め込みテンプレートを登録したビルダーを作る
    pub fn new() -> Result<Self, ActionError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (TEXT_TEMPLATE, include_str!("../../../templates/smtp/body.txt")),
                (HTML_TEMPLATE, include_str!("../../../templates/smtp/body.html")),
            ])
            .map_err(|e| ActionError::Template(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 送信メッセージを組み立てる
    ///
    /// `content` はコピーするだけで、エンコードの変換やサイズ制限は行わない。
    pub fn build(
        &self,
        fields: MessageFields,
        plan_url: Option<&str>,
        content: &[u8],
        mime: Option<&str>,
    ) -> Result<OutboundMessage, ActionError> {
        let mut context = Context::new();
        context.insert("url", &plan_url);

        let text_body = self.render(TEXT_TEMPLATE, &context)?;
        let html_body = self.render(HTML_TEMPLATE, &context)?;

        Ok(OutboundMessage {
            to: fields.to,
            from: fields.from,
            subject: fields.subject,
            text_body,
            html_body,
            attachments: vec![MessageAttachment {
                filename: fields.filename,
                content:  content.to_vec(),
                mime:     mime.map(str::to_string),
            }],
        })
    }

    /// テンプレートファイル末尾の改行は本文に含めない
    fn render(&self, template: &str, context: &Context) -> Result<String, ActionError> {
        self.engine
            .render(template, context)
            .map(|body| body.trim_end().to_string())
            .map_err(|e| ActionError::Template(format!("{template}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fields() -> MessageFields {
        MessageFields {
            to:       "analyst@example.com".to_string(),
            from:     "reports@example.com".to_string(),
            subject:  "Weekly Sales".to_string(),
            filename: "sales.csv".to_string(),
        }
    }

    #[test]
    fn url付きのテキスト本文はリンクと添付の案内を含む() {
        let builder = MessageBuilder::new().unwrap();

        let message = builder
            .build(fields(), Some("https://hub.example.com/looks/7"), b"x", None)
            .unwrap();

        assert_eq!(
            message.text_body,
            "View this data in Action Hub. https://hub.example.com/looks/7\n Results are attached."
        );
    }

    #[test]
    fn url付きのhtml本文はリンクを持つ() {
        let builder = MessageBuilder::new().unwrap();

        let message = builder
            .build(fields(), Some("https://hub.example.com/looks/7"), b"x", None)
            .unwrap();

        assert!(message.html_body.starts_with("<p><a href=\""));
        assert!(message.html_body.contains("View this data in Action Hub.</a></p>"));
        assert!(message.html_body.ends_with("<p>Results are attached.</p>"));
    }

    #[test]
    fn 本文は改行を余分に含まない() {
        let builder = MessageBuilder::new().unwrap();

        let message = builder
            .build(fields(), Some("https://hub.example.com/looks/7"), b"x", None)
            .unwrap();

        assert!(!message.html_body.contains('\n'), "{:?}", message.html_body);
        assert_eq!(message.text_body.matches('\n').count(), 1);
        assert!(!message.text_body.ends_with('\n'));
    }

    #[test]
    fn html本文のurlはエスケープされる() {
        let builder = MessageBuilder::new().unwrap();

        let message = builder
            .build(fields(), Some("\"><script>alert(1)</script>"), b"x", None)
            .unwrap();

        assert!(!message.html_body.contains("<script>"), "{}", message.html_body);
        assert!(message.html_body.contains("&lt;script&gt;"));
    }

    #[test]
    fn urlがなければリンクなしの本文になる() {
        let builder = MessageBuilder::new().unwrap();

        let message = builder.build(fields(), None, b"x", None).unwrap();

        assert_eq!(message.text_body, "Results are attached.");
        assert_eq!(message.html_body, "<p>Results are attached.</p>");
    }

    #[test]
    fn 解決済みの項目をそのまま使う() {
        let builder = MessageBuilder::new().unwrap();

        let message = builder.build(fields(), None, b"x", None).unwrap();

        assert_eq!(message.to, "analyst@example.com");
        assert_eq!(message.from, "reports@example.com");
        assert_eq!(message.subject, "Weekly Sales");
    }

    #[test]
    fn 添付は1件でバイト列が一致する() {
        let builder = MessageBuilder::new().unwrap();
        let content: Vec<u8> = (0..=255).collect();

        let message = builder
            .build(fields(), None, &content, Some("application/octet-stream"))
            .unwrap();

        assert_eq!(message.attachments.len(), 1);
        assert_eq!(message.attachments[0].filename, "sales.csv");
        assert_eq!(message.attachments[0].content, content);
        assert_eq!(
            message.attachments[0].mime.as_deref(),
            Some("application/octet-stream")
        );
    }
}
