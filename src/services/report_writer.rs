//! 报告写入服务 - 业务能力层
//!
//! 只负责"把整份名单写进文本文件"能力，每次都整体覆盖

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Roster;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 报告写入服务
///
/// 职责：
/// - 将名单渲染为固定格式的文本
/// - 覆盖写入目标文件（不追加）
/// - 写入失败直接向上返回，不重试
pub struct ReportWriter {
    report_path: PathBuf,
}

impl ReportWriter {
    /// 按配置创建
    pub fn new(config: &Config) -> Self {
        Self::with_path(&config.output_file)
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            report_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.report_path
    }

    /// 渲染报告文本
    pub fn render(roster: &Roster) -> String {
        let mut report = String::new();
        report.push_str("STUDENT GRADE REPORT\n");
        report.push_str(&"=".repeat(40));
        report.push_str("\n\n");

        for student in roster {
            // 写 String 不会失败
            let _ = writeln!(report, "Name: {}", student.name);
            let _ = writeln!(report, "Marks: {}", student.marks);
            let _ = writeln!(report, "Average: {:.1}", student.result.average);
            let _ = writeln!(report, "Grade: {}", student.result.grade);
            let _ = writeln!(report, "Comment: {}", student.result.comment);
            report.push_str(&"-".repeat(30));
            report.push('\n');
        }

        report
    }

    /// 写入报告
    ///
    /// # 参数
    /// - `roster`: 当前名单
    ///
    /// # 返回
    /// 写入失败时返回 `AppError::WriteFailed`
    pub fn save(&self, roster: &Roster) -> AppResult<()> {
        let report = Self::render(roster);
        debug!(
            "写入报告: {} | 学生数: {} | 字节数: {}",
            self.report_path.display(),
            roster.len(),
            report.len()
        );

        fs::write(&self.report_path, report)
            .map_err(|e| AppError::write_failed(self.report_path.display().to_string(), e))?;

        info!("✓ 报告已保存至: {}", self.report_path.display());
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
