//! 核心模块 - 配置和错误定义
//!
//! - [`Config`] - 目录配置
//! - [`CatalogError`] - 目录错误

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{CatalogError, CatalogResult};
