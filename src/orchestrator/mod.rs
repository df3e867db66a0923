//! 编排层（Orchestration Layer）
//!
//! ```text
//! batch_processor (处理 Vec<作者>)
//!     ↓
//! page_builder (处理单个作者：简介 → 论文 → 排版 → 写入)
//!     ↓
//! services (注册表 / 排版 / 写入 / 列表)  +  clients (论文来源)
//! ```

pub mod batch_processor;
pub mod page_builder;

pub use batch_processor::{App, ProcessingStats};
pub use page_builder::{fetch_options, PageBuilder};
