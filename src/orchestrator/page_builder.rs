//! 单个作者主页生成器 - 编排层
//!
//! 流程：加载简介 → 获取论文 → 排版 → 写入
//!
//! 简介和论文都可以由调用方直接提供，缺省时才读取注册表或请求论文来源

use crate::clients::{FetchOptions, PaperSource};
use crate::config::Config;
use crate::error::Result;
use crate::models::Paper;
use crate::services::page_composer::{compose_page, PageOptions};
use crate::services::page_writer::{write_page, PageKey};
use crate::services::{list_authors, AuthorRegistry};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

/// 首尾作者模式下多请求的倍数，过滤后仍能凑够 `max_papers`
const FIRST_LAST_FETCH_FACTOR: usize = 5;

/// 按排版参数计算需要请求的论文数量
pub fn fetch_options(options: &PageOptions) -> FetchOptions {
    let max_results = if options.first_last_only {
        options.max_papers.saturating_mul(FIRST_LAST_FETCH_FACTOR)
    } else {
        options.max_papers
    };
    FetchOptions { max_results }
}

/// 作者主页生成器
pub struct PageBuilder<S> {
    config: Config,
    source: S,
}

impl<S: PaperSource> PageBuilder<S> {
    pub fn new(config: Config, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 生成作者主页文本
    ///
    /// # 参数
    /// - `author`: 作者名
    /// - `papers`: 已获取的论文，`None` 时从论文来源请求
    /// - `bio`: 作者简介，`None` 时从注册表读取
    /// - `options`: 排版参数
    pub async fn make_author_page(
        &self,
        author: &str,
        papers: Option<Vec<Paper>>,
        bio: Option<String>,
        options: &PageOptions,
    ) -> Result<String> {
        let bio = match bio {
            Some(bio) => bio,
            None => {
                let registry = AuthorRegistry::load(&self.config.author_info_file)?;
                registry.bio(author)?.to_string()
            }
        };

        let papers = match papers {
            Some(papers) => papers,
            None => {
                self.source
                    .fetch_papers(author, &fetch_options(options))
                    .await?
            }
        };
        debug!("作者 {} 共有 {} 篇候选论文", author, papers.len());

        compose_page(author, &bio, &papers, options)
    }

    /// 生成并写入作者主页
    ///
    /// # 返回
    /// 返回写入的文件路径
    pub async fn write_author_page(
        &self,
        author: &str,
        version: u32,
        papers: Option<Vec<Paper>>,
        bio: Option<String>,
        options: &PageOptions,
    ) -> Result<PathBuf> {
        let page = self.make_author_page(author, papers, bio, options).await?;
        let key = PageKey::new(author, version, options);
        write_page(&self.config.author_summaries_dir, &key, &page)
    }

    /// 保存作者简介注册表到配置的位置
    pub fn save_author_info(&self, registry: &AuthorRegistry) -> Result<()> {
        registry.save(&self.config.author_info_file)
    }

    /// 列出已有主页的作者
    pub fn list_authors_with_summaries(&self, version: Option<u32>) -> Result<HashSet<String>> {
        list_authors(
            &self.config.author_summaries_dir,
            &self.config.author_summary_file_pattern,
            version,
        )
    }
}
