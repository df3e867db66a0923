use std::path::Path;
use thiserror::Error;

/// 作者主页生成过程中的错误类型
///
/// 所有错误都原样返回给调用方，内部不做捕获或重试
#[derive(Debug, Error)]
pub enum ProfileError {
    /// 文件、目录或注册表条目不存在
    #[error("未找到: {what}")]
    NotFound { what: String },

    /// 数据内容无法解析
    #[error("数据格式错误 ({path}): {reason}")]
    MalformedData { path: String, reason: String },

    /// 远程文献服务不可用
    #[error("文献服务不可用 ({endpoint}): {reason}")]
    SourceUnavailable { endpoint: String, reason: String },

    /// 文件名与预期命名规则不匹配
    #[error("文件名不匹配命名规则 '{pattern}': {file_name}")]
    PatternMismatch { pattern: String, file_name: String },

    /// 正则表达式无法编译
    #[error("无效的文件名正则 '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// 尚未实现的功能
    #[error("暂不支持: {0}")]
    Unsupported(String),

    /// 读写文件失败
    #[error("文件操作失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl ProfileError {
    /// 创建路径不存在错误
    pub fn not_found(path: &Path) -> Self {
        ProfileError::NotFound {
            what: path.display().to_string(),
        }
    }

    /// 创建文件操作错误，`NotFound` 类 IO 错误会被归为 [`ProfileError::NotFound`]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::not_found(path);
        }
        ProfileError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// 创建文献服务错误
    pub fn source_unavailable(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        ProfileError::SourceUnavailable {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 本库结果类型
pub type Result<T> = std::result::Result<T, ProfileError>;
