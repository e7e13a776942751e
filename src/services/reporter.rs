//! 成绩报表服务 - 业务能力层
//!
//! 输出成绩表和班级统计。调用方负责保证名单非空。

use crate::models::{Roster, Student};
use std::io::{self, Write};

/// 班级统计
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStatistics<'a> {
    pub total: usize,
    pub class_average: f64,
    /// 最高平均分及其所属学生（并列取第一个）
    pub highest: (f64, &'a str),
    /// 最低平均分及其所属学生（并列取第一个）
    pub lowest: (f64, &'a str),
}

impl<'a> ClassStatistics<'a> {
    /// 单次遍历计算统计量，名单为空时返回 None
    pub fn from_roster(roster: &'a Roster) -> Option<Self> {
        let mut students = roster.iter();
        let first = students.next()?;

        let mut sum = first.result.average;
        let mut highest = first;
        let mut lowest = first;
        for student in students {
            let average = student.result.average;
            sum += average;
            if average > highest.result.average {
                highest = student;
            }
            if average < lowest.result.average {
                lowest = student;
            }
        }

        let pair = |s: &'a Student| (s.result.average, s.name.as_str());
        Some(Self {
            total: roster.len(),
            class_average: sum / roster.len() as f64,
            highest: pair(highest),
            lowest: pair(lowest),
        })
    }
}

/// 输出成绩表和班级统计
pub fn write_results(roster: &Roster, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(50))?;
    writeln!(out, "               RESULTS SUMMARY")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "{:<20} | {:>5} | {:^5} | Comment", "Name", "Avg", "Grade")?;
    writeln!(out, "{}", "-".repeat(60))?;

    for student in roster {
        writeln!(
            out,
            "{:<20} | {:>5.1} | {:^5} | {}",
            student.name,
            student.result.average,
            student.result.grade,
            student.result.comment
        )?;
    }

    let Some(stats) = ClassStatistics::from_roster(roster) else {
        return Ok(());
    };

    writeln!(out, "\n{}", "=".repeat(50))?;
    writeln!(out, "              CLASS STATISTICS")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Total Students: {}", stats.total)?;
    writeln!(out, "Class Average: {:.1}", stats.class_average)?;
    writeln!(out, "Highest Average: {:.1} ({})", stats.highest.0, stats.highest.1)?;
    writeln!(out, "Lowest Average: {:.1} ({})", stats.lowest.0, stats.lowest.1)?;
    Ok(())
}
