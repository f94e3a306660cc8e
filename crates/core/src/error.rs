use thiserror::Error;

/// 加载边界上的错误
///
/// `resolve` / `combinations` 本身从不失败，只有把外部输入转换成配置或选择时才会报错。
#[derive(Debug, Error)]
pub enum CvaError {
    #[error("Invalid config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("Invalid selection: {0}")]
    InvalidSelection(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CvaError>;
