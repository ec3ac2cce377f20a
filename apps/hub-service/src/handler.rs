//! # HTTP リクエストハンドラ
//!
//! 各ハンドラはサブモジュールに置き、ここで re-export する。
//! ハンドラは薄く保ち、配信の処理はインテグレーションに委譲する。

pub mod health;
pub mod integration;

pub use health::health_check;
pub use integration::{
    ActionRequestDto,
    AttachmentDto,
    IntegrationState,
    execute_action,
    get_form,
    list_integrations,
};
