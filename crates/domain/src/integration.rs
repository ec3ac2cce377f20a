//! # インテグレーションのメタデータ
//!
//! ホストがアクションを登録・一覧表示するときに読む情報。

use serde::Serialize;

use crate::action::ActionType;

/// インテグレーションのメタデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationMetadata {
    /// 機械向けの一意な名前（URL パスにも使う）
    pub name:                   String,
    /// 表示名
    pub label:                  String,
    /// アイコンのパス
    pub icon_name:              String,
    pub description:            String,
    /// 対応するエクスポート種別
    pub supported_action_types: Vec<ActionType>,
}

impl IntegrationMetadata {
    pub fn supports(&self, action_type: ActionType) -> bool {
        self.supported_action_types.contains(&action_type)
    }
}
