//! 作者简介注册表
//!
//! 作者名 -> 简介文本的映射，以 JSON 形式持久化（保留插入顺序，4 空格缩进）

use crate::error::{ProfileError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 作者简介注册表
///
/// 内部值始终为字符串；同名作者后写覆盖先写
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorRegistry {
    entries: Map<String, Value>,
}

impl AuthorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加或替换一位作者的简介
    pub fn insert(&mut self, author: impl Into<String>, bio: impl Into<String>) {
        self.entries.insert(author.into(), Value::String(bio.into()));
    }

    /// 查找作者简介
    ///
    /// # 返回
    /// 作者不存在时返回 [`ProfileError::NotFound`]
    pub fn bio(&self, author: &str) -> Result<&str> {
        self.entries
            .get(author)
            .and_then(Value::as_str)
            .ok_or_else(|| ProfileError::NotFound {
                what: format!("作者简介: {}", author),
            })
    }

    pub fn contains(&self, author: &str) -> bool {
        self.entries.contains_key(author)
    }

    /// 按插入顺序返回所有作者名
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 保存注册表
    ///
    /// 自动创建父目录并覆盖已有文件；写入中途失败可能留下不完整的文件
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ProfileError::io(parent, e))?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.entries
            .serialize(&mut serializer)
            .map_err(|e| ProfileError::MalformedData {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        fs::write(path, buf).map_err(|e| ProfileError::io(path, e))?;
        info!("💾 已保存 {} 位作者的简介: {}", self.len(), path.display());
        Ok(())
    }

    /// 加载注册表
    ///
    /// # 返回
    /// - 文件不存在: [`ProfileError::NotFound`]
    /// - 内容不是「字符串 -> 字符串」的 JSON 对象: [`ProfileError::MalformedData`]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ProfileError::io(path, e))?;

        let malformed = |reason: String| ProfileError::MalformedData {
            path: path.display().to_string(),
            reason,
        };

        let value: Value = serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?;
        let Value::Object(entries) = value else {
            return Err(malformed("顶层必须是 JSON 对象".to_string()));
        };
        if let Some((author, _)) = entries.iter().find(|(_, v)| !v.is_string()) {
            return Err(malformed(format!("作者 {} 的简介不是字符串", author)));
        }

        debug!("已加载 {} 位作者的简介: {}", entries.len(), path.display());
        Ok(Self { entries })
    }
}

impl<A: Into<String>, B: Into<String>> FromIterator<(A, B)> for AuthorRegistry {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (author, bio) in iter {
            registry.insert(author, bio);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_keeps_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/info/author_info.json");

        let registry: AuthorRegistry = [
            ("Zoe Zhang", "Works on compilers."),
            ("Adam Abel", "Works on databases."),
        ]
        .into_iter()
        .collect();
        registry.save(&path).unwrap();

        let loaded = AuthorRegistry::load(&path).unwrap();
        assert_eq!(loaded, registry);
        assert_eq!(loaded.authors().collect::<Vec<_>>(), ["Zoe Zhang", "Adam Abel"]);
        assert_eq!(loaded.bio("Adam Abel").unwrap(), "Works on databases.");
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("author_info.json");

        let mut registry = AuthorRegistry::new();
        registry.insert("A. Smith", "Bio.");
        registry.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n    \"A. Smith\": \"Bio.\"\n}");
    }

    #[test]
    fn test_save_overwrites_and_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("author_info.json");

        let mut registry = AuthorRegistry::new();
        registry.insert("A. Smith", "Old bio.");
        registry.insert("A. Smith", "New bio.");
        registry.save(&path).unwrap();

        let mut other = AuthorRegistry::new();
        other.insert("B. Jones", "Other.");
        other.save(&path).unwrap();

        let loaded = AuthorRegistry::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(!loaded.contains("A. Smith"));
        assert_eq!(registry.bio("A. Smith").unwrap(), "New bio.");
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = AuthorRegistry::load(Path::new("/nonexistent/path.json")).unwrap_err();
        assert!(matches!(err, ProfileError::NotFound { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("author_info.json");

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AuthorRegistry::load(&path).unwrap_err(),
            ProfileError::MalformedData { .. }
        ));

        fs::write(&path, "[\"a\", \"b\"]").unwrap();
        assert!(matches!(
            AuthorRegistry::load(&path).unwrap_err(),
            ProfileError::MalformedData { .. }
        ));

        fs::write(&path, "{\"A\": 3}").unwrap();
        assert!(matches!(
            AuthorRegistry::load(&path).unwrap_err(),
            ProfileError::MalformedData { .. }
        ));
    }

    #[test]
    fn test_missing_author_is_not_found() {
        let registry = AuthorRegistry::new();
        assert!(matches!(
            registry.bio("Nobody").unwrap_err(),
            ProfileError::NotFound { .. }
        ));
    }
}
