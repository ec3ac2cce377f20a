//! # インテグレーションハンドラ
//!
//! 登録済みインテグレーションの一覧・フォーム取得・アクション実行を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /integrations` - 登録済みインテグレーションのメタデータ一覧
//! - `POST /integrations/{name}/form` - アクションフォームの定義
//! - `POST /integrations/{name}/action` - アクションの実行
//!
//! ## リクエスト例
//!
//! ```json
//! {
//!   "type": "query",
//!   "form_params": { "address": "smtp://mail.example.com", "to": "a@example.com" },
//!   "scheduled_plan": { "title": "Weekly Sales", "url": "https://hub.example.com/looks/7" },
//!   "attachment": { "data": "cmVnaW9uLHRvdGFsCg==", "mime": "text/csv", "file_extension": "csv" }
//! }
//! ```

use std::sync::Arc;

use actionhub_domain::{
    action::{ActionAttachment, ActionRequest, ActionResponse, ActionType, FormParams, ScheduledPlan},
    form::ActionForm,
    integration::IntegrationMetadata,
};
use axum::{
    Json,
    extract::{Path, State},
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::Deserialize;

use crate::{error::HubError, integration::Integration, registry::IntegrationRegistry};

/// インテグレーション API の共有状態
pub struct IntegrationState {
    pub registry: IntegrationRegistry,
}

impl IntegrationState {
    fn integration(&self, name: &str) -> Result<&Arc<dyn Integration>, HubError> {
        self.registry
            .get(name)
            .ok_or_else(|| HubError::NotFound(name.to_string()))
    }
}

// --- リクエスト型 ---

/// アクション実行リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct ActionRequestDto {
    #[serde(rename = "type")]
    pub action_type:    Option<ActionType>,
    #[serde(default)]
    pub form_params:    FormParams,
    pub scheduled_plan: Option<ScheduledPlan>,
    pub attachment:     Option<AttachmentDto>,
}

/// 添付ファイル（データは base64）
#[derive(Debug, Default, Deserialize)]
pub struct AttachmentDto {
    pub data:           Option<String>,
    pub mime:           Option<String>,
    pub file_extension: Option<String>,
}

impl TryFrom<AttachmentDto> for ActionAttachment {
    type Error = HubError;

    fn try_from(dto: AttachmentDto) -> Result<Self, Self::Error> {
        let data_buffer = dto
            .data
            .map(|data| BASE64.decode(data.trim()))
            .transpose()
            .map_err(|e| HubError::BadRequest(format!("添付データの base64 が不正です: {e}")))?;

        Ok(Self {
            data_buffer,
            mime: dto.mime,
            file_extension: dto.file_extension,
        })
    }
}

impl TryFrom<ActionRequestDto> for ActionRequest {
    type Error = HubError;

    fn try_from(dto: ActionRequestDto) -> Result<Self, Self::Error> {
        Ok(Self {
            action_type:    dto.action_type,
            attachment:     dto.attachment.map(ActionAttachment::try_from).transpose()?,
            form_params:    dto.form_params,
            scheduled_plan: dto.scheduled_plan,
        })
    }
}

// --- ハンドラ ---

/// GET /integrations
pub async fn list_integrations(
    State(state): State<Arc<IntegrationState>>,
) -> Json<Vec<IntegrationMetadata>> {
    Json(
        state
            .registry
            .list()
            .map(|integration| integration.metadata().clone())
            .collect(),
    )
}

/// POST /integrations/{name}/form
pub async fn get_form(
    State(state): State<Arc<IntegrationState>>,
    Path(name): Path<String>,
) -> Result<Json<ActionForm>, HubError> {
    let integration = state.integration(&name)?;
    Ok(Json(integration.form()))
}

/// POST /integrations/{name}/action
///
/// 配信の失敗は 200 + `success: false` で返る。
/// 4xx/5xx になるのは、リクエスト自体を処理できない場合だけ。
#[tracing::instrument(skip_all, fields(integration = %name))]
pub async fn execute_action(
    State(state): State<Arc<IntegrationState>>,
    Path(name): Path<String>,
    Json(dto): Json<ActionRequestDto>,
) -> Result<Json<ActionResponse>, HubError> {
    let integration = state.integration(&name)?;
    let request = ActionRequest::try_from(dto)?;

    if let Some(action_type) = request
        .action_type
        .filter(|t| !integration.metadata().supports(*t))
    {
        return Err(HubError::BadRequest(format!(
            "{name} は {action_type} に対応していません"
        )));
    }

    let response = integration.action(&request).await?;
    Ok(Json(response))
}
