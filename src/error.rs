use std::io;
use thiserror::Error;

/// 应用程序错误类型
///
/// 输入格式错误和范围错误不会出现在这里，它们在校验循环内部就地恢复。
#[derive(Debug, Error)]
pub enum AppError {
    /// 控制台输入已结束（EOF），提示无法再得到回答
    #[error("控制台输入已关闭")]
    InputClosed,
    /// 控制台读写失败
    #[error("控制台读写失败: {0}")]
    Console(#[source] io::Error),
    /// 写入成绩文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: io::Error,
    },
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Console(err)
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: io::Error) -> Self {
        AppError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
