//! 名单录入流程 - 流程层
//!
//! 核心职责：定义"录入一批学生"的完整流程
//!
//! 流程顺序：
//! 1. 询问人数 N
//! 2. 每名学生：姓名 → 三科成绩 → 平均分 → 评级
//! 3. 全部录入完成后一次性返回整份名单

use crate::error::AppResult;
use crate::infrastructure::Console;
use crate::models::{Marks, Roster, Student, Subject};
use crate::services::validator;
use crate::utils::logging::truncate_text;
use std::io::{BufRead, Write};
use tracing::debug;

/// 录入整份名单
///
/// 中途失败（例如输入流结束）时不返回部分结果。
pub fn collect_roster<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<Roster> {
    let count = validator::prompt_positive_int(console, "Enter number of students: ")?;
    // 人数只作为循环上限，不据此预分配
    let mut students = Vec::new();

    // 学生编号从 1 开始
    for index in 1..=count {
        console.say(format!("\n=== STUDENT {} ===", index))?;
        let student = collect_student(console)?;
        debug!(
            "录入学生 #{}: {} | 平均分 {:.2} | 等级 {}",
            index,
            truncate_text(&student.name, 20),
            student.result.average,
            student.result.grade
        );
        students.push(student);
    }

    Ok(Roster::new(students))
}

/// 录入单个学生
fn collect_student<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<Student> {
    let name = validator::prompt_non_empty(console, "Student name: ")?;

    console.say("Enter marks (0-100):")?;
    let mut marks = [0.0; 3];
    for (slot, subject) in marks.iter_mut().zip(Subject::ALL) {
        *slot = validator::prompt_mark(console, &subject.prompt())?;
    }

    Ok(Student::new(name, Marks::from(marks)))
}
