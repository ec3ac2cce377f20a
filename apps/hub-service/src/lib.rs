//! # Hub Service ライブラリ
//!
//! インテグレーションとハンドラを公開する。結合テストからも利用する。

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod integration;
pub mod registry;
pub mod usecase;

pub use app::build_router;
pub use integration::Integration;
pub use registry::IntegrationRegistry;
