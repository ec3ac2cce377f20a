//! # フォーム定義
//!
//! ホストの UI が描画する設定フォームを宣言的に記述する。実行時の状態は持たない。

use serde::{Deserialize, Serialize};

/// フィールドの入力種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFieldType {
    /// 1 行テキスト
    String,
}

/// フォームフィールド
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionFormField {
    pub name:        String,
    pub label:       String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub field_type:  FormFieldType,
    #[serde(default)]
    pub required:    bool,
}

impl ActionFormField {
    /// 任意入力の 1 行テキストフィールドを作る
    pub fn string(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name:        name.into(),
            label:       label.into(),
            description: None,
            field_type:  FormFieldType::String,
            required:    false,
        }
    }

    /// 入力例などの説明を付ける
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// 必須入力にする
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// アクションフォーム
///
/// フィールドの並び順はそのまま UI の表示順になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionForm {
    pub fields: Vec<ActionFormField>,
}

impl ActionForm {
    pub fn new(fields: Vec<ActionFormField>) -> Self {
        Self { fields }
    }

    /// 名前でフィールドを探す
    pub fn field(&self, name: &str) -> Option<&ActionFormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
