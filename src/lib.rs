//! # Author Profiles
//!
//! 从 arXiv 获取作者的论文列表，生成包含作者简介和论文摘要的 Markdown 主页
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 论文来源抽象 `PaperSource` 及其 arXiv 实现
//!
//! ### ② 业务能力层（Services）
//! - `AuthorRegistry` - 作者简介注册表（JSON）
//! - `page_composer` - 过滤、截取并排版论文
//! - `page_writer` - 按参数编码的文件名写入主页
//! - `profile_lister` - 从已写入的文件名还原作者列表
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/page_builder` - 单个作者：简介 → 论文 → 排版 → 写入
//! - `orchestrator/batch_processor` - 依次处理多位作者并统计

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::{ArxivClient, FetchOptions, PaperSource};
pub use config::Config;
pub use error::{ProfileError, Result};
pub use models::{Paper, SummaryFormat, SummarySource};
pub use orchestrator::{App, PageBuilder, ProcessingStats};
pub use services::{AuthorRegistry, PageKey, PageOptions};
