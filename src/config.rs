use crate::error::{ProfileError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置
///
/// 所有路径和匹配规则都通过这个结构体显式传入，不依赖全局状态
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 作者简介注册表（JSON）路径
    pub author_info_file: PathBuf,
    /// 作者主页输出目录
    pub author_summaries_dir: PathBuf,
    /// 列出作者时用于匹配文件名的正则，必须包含 `professor_name` 命名分组
    pub author_summary_file_pattern: String,
    // --- arXiv 配置 ---
    pub arxiv_api_base_url: String,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author_info_file: PathBuf::from("data/author_info.json"),
            author_summaries_dir: PathBuf::from("data/author_summaries"),
            author_summary_file_pattern: r"(?P<professor_name>.+?)\.markdown\.v".to_string(),
            arxiv_api_base_url: "https://export.arxiv.org/api/query".to_string(),
            request_timeout_secs: 30,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            author_info_file: std::env::var("AUTHOR_INFO_FILE").map(PathBuf::from).unwrap_or(default.author_info_file),
            author_summaries_dir: std::env::var("AUTHOR_SUMMARIES_DIR").map(PathBuf::from).unwrap_or(default.author_summaries_dir),
            author_summary_file_pattern: std::env::var("AUTHOR_SUMMARY_FILE_PATTERN").unwrap_or(default.author_summary_file_pattern),
            arxiv_api_base_url: std::env::var("ARXIV_API_BASE_URL").unwrap_or(default.arxiv_api_base_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ProfileError::not_found(path));
        }
        let content = std::fs::read_to_string(path).map_err(|e| ProfileError::io(path, e))?;
        toml::from_str(&content).map_err(|e| ProfileError::MalformedData {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
