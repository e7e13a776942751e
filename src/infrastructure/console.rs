//! 控制台 - 基础设施层
//!
//! 持有唯一的输入/输出资源，只暴露"提问"和"输出"的能力

use crate::error::{AppError, AppResult};
use std::fmt::Display;
use std::io::{self, BufRead, Stdin, Stdout, Write};

/// 控制台
///
/// 职责：
/// - 持有唯一的 reader / writer
/// - 暴露 prompt() / say() 能力
/// - 不认识 Student / Roster
/// - 不做任何输入校验
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// 绑定到进程的标准输入输出
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// 创建新的控制台
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 输出提示文本（不换行）并读取一行回答
    ///
    /// 返回的文本只去掉行尾换行符，其余空白原样保留。
    /// 输入流结束时返回 `AppError::InputClosed`。
    pub fn prompt(&mut self, text: &str) -> AppResult<String> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// 输出一行
    pub fn say(&mut self, text: impl Display) -> AppResult<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// 获取 writer 的可变引用（用于整块渲染）
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// 拆出 reader 和 writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_only_line_ending() {
        let mut console = Console::new(Cursor::new("  Alice \r\nnext\n"), Vec::new());

        assert_eq!(console.prompt("Student name: ").unwrap(), "  Alice ");
        assert_eq!(console.prompt("> ").unwrap(), "next");

        let (_, out) = console.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Student name: > ");
    }

    #[test]
    fn test_prompt_reports_closed_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert!(matches!(console.prompt("Math: "), Err(AppError::InputClosed)));
    }

    #[test]
    fn test_last_line_without_newline_is_read() {
        let mut console = Console::new(Cursor::new("5"), Vec::new());
        assert_eq!(console.prompt("Choose an option: ").unwrap(), "5");
    }
}
