//! 批量作者主页处理器 - 编排层
//!
//! 依次为每位作者生成主页（串行，不并发），单个作者失败不影响后续作者，
//! 最后输出统计信息

use crate::clients::ArxivClient;
use crate::config::Config;
use crate::error::Result;
use crate::orchestrator::page_builder::PageBuilder;
use crate::services::PageOptions;
use crate::utils::logging::{log_author_written, log_run_start, print_final_stats};
use std::collections::HashSet;
use tracing::error;

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

/// 应用主结构
pub struct App {
    builder: PageBuilder<ArxivClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let client = ArxivClient::new(&config)?;
        Ok(Self {
            builder: PageBuilder::new(config, client),
        })
    }

    /// 为所有作者生成主页
    ///
    /// # 参数
    /// - `authors`: 作者名列表
    /// - `version`: 主页版本号
    /// - `options`: 排版参数
    pub async fn write_pages(
        &self,
        authors: &[String],
        version: u32,
        options: &PageOptions,
    ) -> ProcessingStats {
        let total = authors.len();
        log_run_start(total, &self.builder.config().author_summaries_dir);

        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        for (idx, author) in authors.iter().enumerate() {
            match self
                .builder
                .write_author_page(author, version, None, None, options)
                .await
            {
                Ok(path) => {
                    log_author_written(idx + 1, total, author, &path);
                    stats.success += 1;
                }
                Err(e) => {
                    error!("[{}/{}] ❌ {} 处理失败: {}", idx + 1, total, author, e);
                    stats.failed += 1;
                }
            }
        }

        print_final_stats(stats.success, stats.failed, stats.total);
        stats
    }

    /// 列出已有主页的作者
    pub fn list_authors(&self) -> Result<HashSet<String>> {
        self.builder.list_authors_with_summaries(None)
    }
}
