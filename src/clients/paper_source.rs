/// 论文来源抽象
///
/// 给定作者名，返回按来源顺序排列的论文列表
use crate::error::Result;
use crate::models::Paper;

/// 检索参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// 最多返回的论文数量
    pub max_results: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { max_results: 100 }
    }
}

/// 论文来源
///
/// 实现方约定：
/// - 结果数量不超过 `options.max_results`，可以更少
/// - 没有结果时返回空列表而不是错误
/// - 网络或服务故障返回 [`crate::ProfileError::SourceUnavailable`]，不做重试
#[allow(async_fn_in_trait)]
pub trait PaperSource {
    async fn fetch_papers(&self, author: &str, options: &FetchOptions) -> Result<Vec<Paper>>;
}
