//! # インテグレーション契約
//!
//! ホストがアクションを呼び出すための入口。個々の配信先（SMTP など）は
//! この trait を実装し、[`IntegrationRegistry`](crate::registry::IntegrationRegistry) に
//! 明示的に登録される。

use actionhub_domain::{
    ActionError,
    action::{ActionRequest, ActionResponse},
    form::ActionForm,
    integration::IntegrationMetadata,
};
use async_trait::async_trait;

/// インテグレーション
///
/// 実装はリクエストをまたいだ可変状態を持たない。同時に複数の `action` が
/// 呼ばれても互いに影響しないこと。
#[async_trait]
pub trait Integration: Send + Sync {
    /// 登録・一覧表示用のメタデータ
    fn metadata(&self) -> &IntegrationMetadata;

    /// ユーザー設定フォーム
    ///
    /// I/O を行わず、常に同じ定義を返す。
    fn form(&self) -> ActionForm;

    /// アクションを 1 回実行する
    ///
    /// 入力不備は `Err(ActionError)`、配信の失敗は
    /// `Ok(ActionResponse { success: false, .. })` として返す。
    async fn action(&self, request: &ActionRequest) -> Result<ActionResponse, ActionError>;
}
