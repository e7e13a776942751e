use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 默认配置文件名（不存在时使用内置默认值）
pub const DEFAULT_CONFIG_FILE: &str = "grade_calculator.toml";

/// 程序配置文件
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 成绩报告输出路径
    pub output_file: String,
    /// 日志级别（RUST_LOG 优先）
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: "test_students.txt".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// 加载配置：默认值 < 配置文件 < 环境变量
    pub fn load() -> AppResult<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// 用给定的查找函数代替环境变量加载配置
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let path = lookup("GRADE_CONFIG_FILE").unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        let config = Self::from_file(Path::new(&path))?;
        Ok(config.with_overrides(lookup))
    }

    /// 从 TOML 文件读取配置，文件不存在时返回默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 用查找函数提供的值覆盖配置项
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            output_file: lookup("GRADE_OUTPUT_FILE").unwrap_or(self.output_file),
            log_level: lookup("GRADE_LOG_LEVEL").unwrap_or(self.log_level),
        }
    }
}
