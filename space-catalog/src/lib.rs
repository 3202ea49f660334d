//! Space Catalog - rentable space catalog engine
//!
//! # 架构概述
//!
//! Loads four normalized tables, joins them into [`SpaceView`]s, searches
//! them and prices rental requests:
//!
//! - **数据源** (`source`): local CSV files or a published sheet export
//! - **规范化** (`normalize`): column mapping into typed rows
//! - **目录** (`catalog`): join-all loading, join engine, search
//! - **定价** (`pricing`): equipment surcharge and price display
//! - **请求** (`request`): request text and messaging link
//!
//! # 模块结构
//!
//! ```text
//! space-catalog/src/
//! ├── core/          # 配置、错误
//! ├── source/        # TableSource, CSV parsing
//! ├── normalize/     # typed ingestion
//! ├── catalog/       # join, search, availability
//! ├── pricing/       # calculator, formatting
//! ├── request/       # request message builder
//! ├── services/      # CatalogService
//! └── utils/         # logging
//! ```
//!
//! [`SpaceView`]: shared::models::SpaceView

pub mod catalog;
pub mod core;
pub mod normalize;
pub mod pricing;
pub mod request;
pub mod services;
pub mod source;
pub mod utils;

// Re-export 公共类型
pub use catalog::{JoinEngine, UnresolvedPolicy, filter, find_by_name, join};
pub use crate::core::{CatalogError, CatalogResult, Config};
pub use pricing::{Quote, compute_price, display_price, format_price, quote};
pub use request::{RentalRequest, build_request_text, build_request_url, prepare_request};
pub use services::CatalogService;
pub use source::{LocalFileSource, RawRow, SheetExportSource, TableName, TableOrigin, TableSource};

pub use utils::logger::{init_logger, init_logger_with_file};
