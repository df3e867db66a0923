/// arXiv API 客户端
///
/// 按作者检索论文，解析 Atom 响应为 [`Paper`]
use crate::clients::paper_source::{FetchOptions, PaperSource};
use crate::config::Config;
use crate::error::{ProfileError, Result};
use crate::models::Paper;
use crate::utils::{collapse_whitespace, truncate_text};
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// arXiv 对非法查询返回的条目 ID 前缀
const ARXIV_ERROR_ID: &str = "arxiv.org/api/errors";

/// arXiv 客户端
#[derive(Clone)]
pub struct ArxivClient {
    http: Client,
    base_url: String,
}

impl ArxivClient {
    /// 创建新的 arXiv 客户端
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("author-profiles/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ProfileError::source_unavailable(&config.arxiv_api_base_url, e))?;

        Ok(Self {
            http,
            base_url: config.arxiv_api_base_url.clone(),
        })
    }

    /// 构建作者检索式
    pub fn build_author_query(author: &str) -> String {
        format!("au:\"{}\"", author.trim())
    }

    /// 请求 arXiv 并返回原始 Atom 文本
    async fn query_api(&self, author: &str, max_results: usize) -> Result<String> {
        let search_query = Self::build_author_query(author);
        debug!("arXiv 检索式: {} (max_results={})", search_query, max_results);

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("search_query", search_query.as_str())])
            .query(&[("start", 0), ("max_results", max_results)])
            .query(&[("sortBy", "submittedDate"), ("sortOrder", "descending")])
            .send()
            .await
            .map_err(|e| ProfileError::source_unavailable(&self.base_url, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProfileError::source_unavailable(
                &self.base_url,
                format!("HTTP {}: {}", status, truncate_text(body.trim(), 200)),
            ));
        }

        resp.text()
            .await
            .map_err(|e| ProfileError::source_unavailable(&self.base_url, e))
    }
}

impl PaperSource for ArxivClient {
    async fn fetch_papers(&self, author: &str, options: &FetchOptions) -> Result<Vec<Paper>> {
        info!(">> 正在从 arXiv 获取作者论文: {}", author);

        let feed = self.query_api(author, options.max_results).await?;
        let mut papers = parse_atom_feed(&feed)
            .map_err(|reason| ProfileError::source_unavailable(&self.base_url, reason))?;
        papers.truncate(options.max_results);

        info!(">> 论文总数: {}", papers.len());
        Ok(papers)
    }
}

/// 正在读取文本的字段
#[derive(Clone, Copy)]
enum Field {
    Id,
    Title,
    Summary,
    Published,
    AuthorName,
}

/// 解析 arXiv Atom 响应
///
/// 标题和摘要中的连续空白被压缩为单个空格，发表日期只保留 `YYYY-MM-DD`；
/// 没有作者的条目会被丢弃。缺少 `<feed>` 根元素或响应被截断（`</feed>` 未出现）时返回错误
pub fn parse_atom_feed(xml: &str) -> std::result::Result<Vec<Paper>, String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut papers = Vec::new();

    let mut feed_opened = false;
    let mut feed_closed = false;
    let mut in_entry = false;
    let mut in_author = false;
    let mut field: Option<Field> = None;
    let mut text = String::new();

    let mut id = String::new();
    let mut title = String::new();
    let mut summary = String::new();
    let mut published = String::new();
    let mut authors: Vec<String> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"feed" => feed_opened = true,
                b"entry" if feed_opened => {
                    in_entry = true;
                    id.clear();
                    title.clear();
                    summary.clear();
                    published.clear();
                    authors.clear();
                }
                b"author" if in_entry => in_author = true,
                b"name" if in_author => field = Some(Field::AuthorName),
                b"id" if in_entry && !in_author => field = Some(Field::Id),
                b"title" if in_entry && !in_author => field = Some(Field::Title),
                b"summary" if in_entry && !in_author => field = Some(Field::Summary),
                b"published" if in_entry && !in_author => field = Some(Field::Published),
                _ => {}
            },
            Ok(Event::Text(t)) => {
                if field.is_some() {
                    let unescaped = t.unescape().map_err(|e| format!("XML 解析失败: {}", e))?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(c)) => {
                if field.is_some() {
                    text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"entry" if in_entry => {
                    in_entry = false;
                    if id.contains(ARXIV_ERROR_ID) {
                        return Err(format!("arXiv 返回错误: {}", collapse_whitespace(&summary)));
                    }
                    if authors.is_empty() {
                        debug!("跳过没有作者的条目: {}", title);
                    } else {
                        papers.push(Paper::new(
                            collapse_whitespace(&title),
                            std::mem::take(&mut authors),
                            published.get(..10).unwrap_or(&published),
                            collapse_whitespace(&summary),
                        ));
                    }
                }
                b"feed" => feed_closed = true,
                b"author" => in_author = false,
                b"name" | b"id" | b"title" | b"summary" | b"published" => {
                    if let Some(f) = field.take() {
                        let value = std::mem::take(&mut text);
                        match f {
                            Field::Id => id = value,
                            Field::Title => title = value,
                            Field::Summary => summary = value,
                            Field::Published => published = value.trim().to_string(),
                            Field::AuthorName => authors.push(collapse_whitespace(&value)),
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("XML 解析失败: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    if !feed_opened {
        return Err("响应不是 Atom feed".to_string());
    }
    if in_entry || !feed_closed {
        return Err("Atom 响应不完整".to_string());
    }
    Ok(papers)
}
