//! 作者列表
//!
//! 扫描已写入的主页目录，从文件名还原作者名

use crate::error::{ProfileError, Result};
use crate::utils::title_case;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 文件名正则中必须包含的命名分组
pub const PROFESSOR_NAME_GROUP: &str = "professor_name";

/// 列出目录中已有主页的作者
///
/// 目录中的每个条目都必须匹配 `pattern`（从文件名开头匹配，匹配对象为去掉最后一个扩展名的文件名），
/// 任何不匹配的条目都会导致 [`ProfileError::PatternMismatch`]，不会被跳过。
///
/// # 参数
/// - `dir`: 主页目录（不递归）
/// - `pattern`: 包含 `professor_name` 命名分组的正则
/// - `version`: 按版本过滤，暂不支持，传入 `Some` 直接返回 [`ProfileError::Unsupported`]
///
/// # 返回
/// 去重后的作者显示名集合
pub fn list_authors(dir: &Path, pattern: &str, version: Option<u32>) -> Result<HashSet<String>> {
    if let Some(version) = version {
        return Err(ProfileError::Unsupported(format!("按版本过滤作者列表 (v{})", version)));
    }

    let regex = Regex::new(pattern).map_err(|source| ProfileError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    if !regex.capture_names().flatten().any(|n| n == PROFESSOR_NAME_GROUP) {
        return Err(ProfileError::PatternMismatch {
            pattern: pattern.to_string(),
            file_name: format!("<正则缺少命名分组 {}>", PROFESSOR_NAME_GROUP),
        });
    }

    let entries = fs::read_dir(dir).map_err(|e| ProfileError::io(dir, e))?;

    let mut authors = HashSet::new();
    for entry in entries {
        let entry = entry.map_err(|e| ProfileError::io(dir, e))?;
        let path = entry.path();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let name = match_professor_name(&regex, &stem).ok_or_else(|| {
            ProfileError::PatternMismatch {
                pattern: pattern.to_string(),
                file_name: entry.file_name().to_string_lossy().to_string(),
            }
        })?;

        let author = display_name(name);
        debug!("{} -> {}", stem, author);
        authors.insert(author);
    }

    Ok(authors)
}

/// 从文件名还原作者显示名：下划线替换为空格，再做标题式大小写
pub fn display_name(slug: &str) -> String {
    title_case(&slug.replace('_', " "))
}

/// 只接受从开头开始的匹配
fn match_professor_name<'t>(regex: &Regex, stem: &'t str) -> Option<&'t str> {
    let caps = regex.captures(stem)?;
    if caps.get(0)?.start() != 0 {
        return None;
    }
    caps.name(PROFESSOR_NAME_GROUP).map(|m| m.as_str())
}
