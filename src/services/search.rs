//! 学生查找服务 - 业务能力层

use crate::models::{Roster, Student};
use std::io::{self, Write};

/// 按姓名查找学生（忽略大小写，精确匹配，返回第一个）
pub fn find_student<'a>(roster: &'a Roster, query: &str) -> Option<&'a Student> {
    let query = query.trim().to_lowercase();
    roster
        .iter()
        .find(|student| student.name.to_lowercase() == query)
}

/// 输出查找结果
pub fn write_match(student: Option<&Student>, out: &mut impl Write) -> io::Result<()> {
    match student {
        Some(student) => {
            writeln!(out, "\n✓ Student Found")?;
            writeln!(out, "Name: {}", student.name)?;
            writeln!(out, "Average: {:.1}", student.result.average)?;
            writeln!(out, "Grade: {}", student.result.grade)?;
            writeln!(out, "Comment: {}", student.result.comment)
        }
        None => writeln!(out, "✗ Student not found!"),
    }
}
