use serde::{Deserialize, Serialize};

/// 一篇检索到的论文
///
/// `authors` 的顺序即署名顺序，第一作者和最后作者有特殊含义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub authors: Vec<String>,
    /// 发表日期，`YYYY-MM-DD`
    pub published: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl Paper {
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        published: impl Into<String>,
        abstract_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors,
            published: published.into(),
            abstract_text: abstract_text.into(),
        }
    }

    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    pub fn last_author(&self) -> Option<&str> {
        self.authors.last().map(String::as_str)
    }

    /// 首尾作者之间的作者，少于三位作者时为空
    pub fn middle_authors(&self) -> &[String] {
        if self.authors.len() > 2 {
            &self.authors[1..self.authors.len() - 1]
        } else {
            &[]
        }
    }

    /// `author` 是否为第一作者或最后作者（区分大小写，不做规范化）
    pub fn is_first_or_last_author(&self, author: &str) -> bool {
        self.first_author() == Some(author) || self.last_author() == Some(author)
    }
}

impl std::fmt::Display for Paper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.published)
    }
}
