/// 摘要内容来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum SummarySource {
    /// 仅使用论文摘要
    #[default]
    Abstract,
}

/// 作者主页的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub enum SummaryFormat {
    /// Markdown 文本
    #[default]
    Markdown,
}

impl SummaryFormat {
    /// 写入文件名中的格式标签
    pub fn tag(self) -> &'static str {
        match self {
            SummaryFormat::Markdown => "markdown",
        }
    }
}

impl std::fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
