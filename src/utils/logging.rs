//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数。日志写到 stderr，stdout 只留给菜单和报表。

use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅器
///
/// 设置了 RUST_LOG 时以它为准，否则使用配置中的日志级别。
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 成绩计算器启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 报告输出文件: {}", config.output_file);
    info!("{}", "=".repeat(60));
}

/// 记录学生名单加载完成
pub fn log_roster_loaded(count: usize) {
    info!("✓ 已录入 {} 名学生", count);
}

/// 记录会话结束
pub fn log_session_end() {
    info!(
        "👋 会话结束 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
