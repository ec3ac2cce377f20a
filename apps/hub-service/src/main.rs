//! # Hub Service サーバー
//!
//! 登録済みインテグレーションを HTTP で公開し、ホストからの配信要求を処理する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HUB_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `HUB_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `SMTP_TIMEOUT_SECS` | No | SMTP コマンドのタイムアウト秒数 |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,actionhub=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p actionhub-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use actionhub_domain::clock::SystemClock;
use actionhub_infra::SmtpTransportFactory;
use actionhub_service::{IntegrationRegistry, build_router, config::HubConfig, usecase::SmtpIntegration};
use actionhub_shared::observability::{TracingConfig, init_tracing};
use anyhow::Context as _;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::from_env("hub-service"));

    let config = HubConfig::from_env().context("設定の読み込みに失敗しました")?;

    // インテグレーションの登録
    let mut registry = IntegrationRegistry::new();
    let smtp = SmtpIntegration::new(
        Arc::new(SmtpTransportFactory::new(config.smtp_timeout)),
        Arc::new(SystemClock),
    )?;
    registry.register(Arc::new(smtp))?;

    let app = build_router(registry);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Hub Service サーバーを起動します: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
