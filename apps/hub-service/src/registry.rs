//! # インテグレーションレジストリ
//!
//! 起動時に `main` から明示的に登録し、以後は読み取り専用で共有する。
//! 登録順を保持するので、一覧 API の並びは登録順になる。

use std::sync::Arc;

use thiserror::Error;

use crate::integration::Integration;

/// 登録時のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("インテグレーション名が重複しています: {0}")]
    Duplicate(String),
}

/// 名前でインテグレーションを引くレジストリ
#[derive(Default)]
pub struct IntegrationRegistry {
    integrations: Vec<Arc<dyn Integration>>,
}

impl IntegrationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// インテグレーションを登録する
    ///
    /// 同名のインテグレーションがあれば登録せずにエラーを返す。
    pub fn register(&mut self, integration: Arc<dyn Integration>) -> Result<(), RegistryError> {
        let name = &integration.metadata().name;
        if self.get(name).is_some() {
            return Err(RegistryError::Duplicate(name.clone()));
        }

        tracing::info!(integration = %name, "インテグレーションを登録しました");
        self.integrations.push(integration);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Integration>> {
        self.integrations
            .iter()
            .find(|integration| integration.metadata().name == name)
    }

    /// 登録済みインテグレーション（登録順）
    pub fn list(&self) -> impl Iterator<Item = &Arc<dyn Integration>> {
        self.integrations.iter()
    }
}
