//! 作者主页排版
//!
//! 把论文列表和作者简介组合成一份 Markdown 文档

use crate::error::{ProfileError, Result};
use crate::models::{Paper, SummarySource};
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::debug;

/// 每年天数的近似值（不按日历计算）
const DAYS_PER_YEAR: f64 = 365.25;

const SECONDS_PER_DAY: i64 = 86_400;

/// 每篇论文块末尾的分隔线
const BLOCK_SEPARATOR: &str = "---------------";

/// 排版参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageOptions {
    /// 最多考虑的论文数量
    pub max_papers: usize,
    /// 只渲染发表不足这么多年的论文
    pub max_years: f64,
    /// 只保留目标作者为第一或最后作者的论文
    pub first_last_only: bool,
    /// 论文块中使用的摘要来源
    pub source: SummarySource,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            max_papers: 100,
            max_years: 20.0,
            first_last_only: false,
            source: SummarySource::Abstract,
        }
    }
}

/// 只保留 `author` 为第一或最后作者的论文，保持原有顺序
pub fn filter_first_or_last<'a>(
    author: &str,
    papers: impl IntoIterator<Item = &'a Paper>,
) -> Vec<&'a Paper> {
    papers
        .into_iter()
        .filter(|p| p.is_first_or_last_author(author))
        .collect()
}

/// 使用当前本地时间生成作者主页
pub fn compose_page(
    author: &str,
    biography: &str,
    papers: &[Paper],
    options: &PageOptions,
) -> Result<String> {
    compose_page_at(author, biography, papers, options, Local::now().naive_local())
}

/// 生成作者主页
///
/// 先做首尾作者过滤，再截取前 `max_papers` 篇，最后才按年限过滤。
/// 因此超出年限的论文仍会占用截取名额，只是不会被渲染。
///
/// # 参数
/// - `author`: 作者名
/// - `biography`: 作者简介，原样写入
/// - `papers`: 已获取的论文列表
/// - `options`: 排版参数
/// - `now`: 计算论文年龄所用的当前时间
pub fn compose_page_at(
    author: &str,
    biography: &str,
    papers: &[Paper],
    options: &PageOptions,
    now: NaiveDateTime,
) -> Result<String> {
    let candidates: Vec<&Paper> = if options.first_last_only {
        filter_first_or_last(author, papers)
    } else {
        papers.iter().collect()
    };

    let mut page = String::new();
    page.push_str(&format!("# Research Summary for **{}**\n\n", author));
    page.push_str(&format!("## {} Bio\n\n", author));
    page.push_str(&format!("{}\n\n", biography));
    page.push_str("## Recent Papers\n\n");

    let mut rendered = 0;
    for paper in candidates.into_iter().take(options.max_papers) {
        if age_in_years(paper, now)? < options.max_years {
            page.push_str(&format_paper_block(paper, options.source)?);
            rendered += 1;
        } else {
            debug!("跳过超出年限的论文: {}", paper);
        }
    }

    debug!("作者 {} 的主页共渲染 {} 篇论文", author, rendered);
    Ok(page)
}

/// 渲染单篇论文块
pub fn format_paper_block(paper: &Paper, source: SummarySource) -> Result<String> {
    let (first, last) = match (paper.first_author(), paper.last_author()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(ProfileError::MalformedData {
                path: paper.title.clone(),
                reason: "论文没有作者".to_string(),
            })
        }
    };

    let summary = match source {
        SummarySource::Abstract => &paper.abstract_text,
    };

    let mut block = String::new();
    block.push_str(&format!("### **Title:** {}\n\n", paper.title));
    block.push_str(&format!("**Publish Date:** {}\n\n", paper.published));
    block.push_str(&format!("**First Author:** {}\n\n", first));
    block.push_str(&format!("**Last Author:** {}\n\n", last));
    let middle = paper.middle_authors();
    if !middle.is_empty() {
        block.push_str(&format!("**Middle Authors:** {}\n\n", middle.join(", ")));
    }
    block.push_str(&format!("**Abstract:** {}\n\n", summary));
    block.push_str(&format!("{}\n\n\n", BLOCK_SEPARATOR));
    Ok(block)
}

/// 论文发表至今的年数（向下取整的天数 / 365.25）
///
/// 发表日期晚于当前时间时天数为负，例如差半天记为 -1 天
fn age_in_years(paper: &Paper, now: NaiveDateTime) -> Result<f64> {
    let published = NaiveDate::parse_from_str(&paper.published, "%Y-%m-%d").map_err(|e| {
        ProfileError::MalformedData {
            path: paper.title.clone(),
            reason: format!("无法解析发表日期 '{}': {}", paper.published, e),
        }
    })?;
    let days = now
        .signed_duration_since(published.and_time(chrono::NaiveTime::MIN))
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY);
    Ok(days as f64 / DAYS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn paper(title: &str, authors: &[&str], published: &str) -> Paper {
        Paper::new(
            title,
            authors.iter().map(|a| a.to_string()).collect(),
            published,
            format!("Abstract of {}.", title),
        )
    }

    fn options(max_papers: usize, max_years: f64, first_last_only: bool) -> PageOptions {
        PageOptions {
            max_papers,
            max_years,
            first_last_only,
            ..Default::default()
        }
    }

    fn titles_in(page: &str) -> Vec<String> {
        page.lines()
            .filter_map(|l| l.strip_prefix("### **Title:** "))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_empty_papers_renders_header_only() {
        let page =
            compose_page_at("A. Smith", "Bio.", &[], &options(10, 20.0, false), now()).unwrap();
        assert_eq!(
            page,
            "# Research Summary for **A. Smith**\n\n## A. Smith Bio\n\nBio.\n\n## Recent Papers\n\n"
        );
    }

    #[test]
    fn test_block_format_with_middle_authors() {
        let p = paper("Graphs", &["A", "B", "C", "D"], "2024-01-02");
        let block = format_paper_block(&p, SummarySource::Abstract).unwrap();
        assert_eq!(
            block,
            "### **Title:** Graphs\n\n\
             **Publish Date:** 2024-01-02\n\n\
             **First Author:** A\n\n\
             **Last Author:** D\n\n\
             **Middle Authors:** B, C\n\n\
             **Abstract:** Abstract of Graphs.\n\n\
             ---------------\n\n\n"
        );
    }

    #[test]
    fn test_middle_authors_boundary() {
        let two = format_paper_block(&paper("T", &["A", "B"], "2024-01-01"), SummarySource::Abstract).unwrap();
        assert!(!two.contains("Middle Authors"));

        let three = format_paper_block(&paper("T", &["A", "B", "C"], "2024-01-01"), SummarySource::Abstract).unwrap();
        assert!(three.contains("**Middle Authors:** B\n\n"));

        let one = format_paper_block(&paper("T", &["Solo"], "2024-01-01"), SummarySource::Abstract).unwrap();
        assert!(one.contains("**First Author:** Solo\n\n"));
        assert!(one.contains("**Last Author:** Solo\n\n"));
        assert!(!one.contains("Middle Authors"));
    }

    #[test]
    fn test_no_authors_is_malformed() {
        let p = paper("T", &[], "2024-01-01");
        assert!(matches!(
            format_paper_block(&p, SummarySource::Abstract).unwrap_err(),
            ProfileError::MalformedData { .. }
        ));
    }

    #[test]
    fn test_truncation_happens_before_age_filter() {
        let papers = vec![
            paper("Old", &["X"], "1990-01-01"),
            paper("New", &["X"], "2024-01-01"),
            paper("Newer", &["X"], "2024-02-01"),
        ];

        // 旧论文占用了唯一的名额，因此什么都不渲染
        let page = compose_page_at("X", "", &papers, &options(1, 20.0, false), now()).unwrap();
        assert!(titles_in(&page).is_empty());

        let page = compose_page_at("X", "", &papers, &options(2, 20.0, false), now()).unwrap();
        assert_eq!(titles_in(&page), ["New"]);

        // 放宽年限只会在同一个前 k 篇窗口内增加论文
        let page = compose_page_at("X", "", &papers, &options(2, 100.0, false), now()).unwrap();
        assert_eq!(titles_in(&page), ["Old", "New"]);
    }

    #[test]
    fn test_age_boundary_uses_365_25_day_years() {
        // 2023-06-01 -> 2024-06-01 共 366 天，366 / 365.25 > 1
        let papers = vec![paper("Year", &["X"], "2023-06-01")];
        let page = compose_page_at("X", "", &papers, &options(10, 1.0, false), now()).unwrap();
        assert!(titles_in(&page).is_empty());

        let papers = vec![paper("Recent", &["X"], "2023-06-03")];
        let page = compose_page_at("X", "", &papers, &options(10, 1.0, false), now()).unwrap();
        assert_eq!(titles_in(&page), ["Recent"]);
    }

    #[test]
    fn test_first_last_filter_applies_before_truncation() {
        let papers = vec![
            paper("Middle", &["A", "Jane Doe", "B"], "2024-01-01"),
            paper("First", &["Jane Doe", "B"], "2024-01-01"),
            paper("Last", &["A", "Jane Doe"], "2024-01-01"),
            paper("Lower", &["jane doe", "B"], "2024-01-01"),
        ];

        let page = compose_page_at("Jane Doe", "", &papers, &options(2, 20.0, true), now()).unwrap();
        assert_eq!(titles_in(&page), ["First", "Last"]);

        let page = compose_page_at("Jane Doe", "", &papers, &options(2, 20.0, false), now()).unwrap();
        assert_eq!(titles_in(&page), ["Middle", "First"]);
    }

    #[test]
    fn test_first_last_filter_is_idempotent() {
        let papers = vec![
            paper("P1", &["Jane Doe", "B"], "2024-01-01"),
            paper("P2", &["A", "Jane Doe", "B"], "2024-01-01"),
            paper("P3", &["A", "Jane Doe"], "2024-01-01"),
        ];
        let once = filter_first_or_last("Jane Doe", &papers);
        let twice = filter_first_or_last("Jane Doe", once.iter().copied());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_future_date_counts_as_negative_days() {
        // 发表日期比当前时间晚半天，按 -1 天计算，年龄小于 0
        let papers = vec![paper("Tomorrow", &["X"], "2024-06-02")];
        let page = compose_page_at("X", "", &papers, &options(10, 0.0, false), now()).unwrap();
        assert_eq!(titles_in(&page), ["Tomorrow"]);

        let papers = vec![paper("Today", &["X"], "2024-06-01")];
        let page = compose_page_at("X", "", &papers, &options(10, 0.0, false), now()).unwrap();
        assert!(titles_in(&page).is_empty());
    }

    #[test]
    fn test_invalid_publish_date_is_malformed() {
        let papers = vec![paper("Bad", &["X"], "June 2024")];
        let err = compose_page_at("X", "", &papers, &options(10, 20.0, false), now()).unwrap_err();
        assert!(matches!(err, ProfileError::MalformedData { .. }));
    }

    #[test]
    fn test_papers_keep_input_order() {
        let papers = vec![
            paper("B", &["X"], "2020-01-01"),
            paper("A", &["X"], "2024-01-01"),
            paper("C", &["X"], "2022-01-01"),
        ];
        let page = compose_page_at("X", "Bio", &papers, &PageOptions::default(), now()).unwrap();
        assert_eq!(titles_in(&page), ["B", "A", "C"]);
        assert!(page.starts_with("# Research Summary for **X**\n\n## X Bio\n\nBio\n\n## Recent Papers\n\n### **Title:** B\n\n"));
    }
}
