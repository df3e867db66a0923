//! 作者主页写入
//!
//! 文件名中编码了作者、格式、版本和排版参数，没有单独的索引

use crate::error::{ProfileError, Result};
use crate::models::SummaryFormat;
use crate::services::page_composer::PageOptions;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 主页文件的键
#[derive(Debug, Clone)]
pub struct PageKey<'a> {
    pub author: &'a str,
    pub format: SummaryFormat,
    pub version: u32,
    pub max_papers: usize,
    pub max_years: f64,
    pub first_last_only: bool,
}

impl<'a> PageKey<'a> {
    pub fn new(author: &'a str, version: u32, options: &PageOptions) -> Self {
        Self {
            author,
            format: SummaryFormat::Markdown,
            version,
            max_papers: options.max_papers,
            max_years: options.max_years,
            first_last_only: options.first_last_only,
        }
    }

    /// 生成文件名
    ///
    /// 例如 `jane_doe.markdown.v1.maxp100.maxy20.flonly.txt`
    pub fn file_name(&self) -> String {
        let fl_only = if self.first_last_only { ".flonly" } else { "" };
        format!(
            "{}.{}.v{}.maxp{}.maxy{}{}.txt",
            author_slug(self.author),
            self.format,
            self.version,
            self.max_papers,
            self.max_years,
            fl_only
        )
    }
}

/// 生成可用作文件名的作者标识：转小写，空格替换为下划线，其余字符保持不变
pub fn author_slug(author: &str) -> String {
    author.to_lowercase().replace(' ', "_")
}

/// 写入作者主页
///
/// # 参数
/// - `dir`: 输出目录，不存在时自动创建
/// - `key`: 主页文件的键
/// - `document`: 主页内容
///
/// # 返回
/// 返回写入的文件路径；同名文件会被覆盖
pub fn write_page(dir: &Path, key: &PageKey<'_>, document: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| ProfileError::io(dir, e))?;

    let path = dir.join(key.file_name());
    fs::write(&path, document).map_err(|e| ProfileError::io(&path, e))?;

    info!("📝 已写入 {} 的主页: {}", key.author, path.display());
    Ok(path)
}
