//! # Hub Service 設定
//!
//! 環境変数から Hub Service サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HUB_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `HUB_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `SMTP_TIMEOUT_SECS` | No | SMTP コマンドのタイムアウト秒数（未設定で lettre のデフォルト） |

use std::{env, time::Duration};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} の値が不正です: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Hub Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// SMTP トランスポートのタイムアウト
    pub smtp_timeout: Option<Duration>,
}

impl HubConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HUB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("HUB_PORT") {
            Some(value) => parse_value("HUB_PORT", &value)?,
            None => DEFAULT_PORT,
        };
        let smtp_timeout = lookup("SMTP_TIMEOUT_SECS")
            .map(|value| parse_value::<u64>("SMTP_TIMEOUT_SECS", &value))
            .transpose()?
            .map(Duration::from_secs);

        Ok(Self {
            host,
            port,
            smtp_timeout,
        })
    }
}

fn parse_value<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        })
}
