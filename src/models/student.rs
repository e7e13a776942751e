use crate::models::grade::{grade, Grade};
use crate::models::subject::Subject;
use std::fmt;

/// 三科成绩（原始输入值，不做取整）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marks {
    pub math: f64,
    pub science: f64,
    pub english: f64,
}

impl Marks {
    pub fn new(math: f64, science: f64, english: f64) -> Self {
        Self {
            math,
            science,
            english,
        }
    }

    /// 按科目取分
    pub fn get(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Math => self.math,
            Subject::Science => self.science,
            Subject::English => self.english,
        }
    }

    /// 三科平均分（实数除法）
    pub fn average(&self) -> f64 {
        (self.math + self.science + self.english) / 3.0
    }
}

impl From<[f64; 3]> for Marks {
    fn from([math, science, english]: [f64; 3]) -> Self {
        Self::new(math, science, english)
    }
}

/// 渲染为 `[95.0, 85.0, 92.0]`
impl fmt::Display for Marks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, subject) in Subject::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", mark_repr(self.get(subject)))?;
        }
        write!(f, "]")
    }
}

/// 最短往返小数，科学计数法的指数至少两位并带符号（`1e-05`、`1.5e+16`）
fn mark_repr(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

/// 评定结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeResult {
    pub average: f64,
    pub grade: Grade,
    pub comment: &'static str,
}

/// 学生记录
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub marks: Marks,
    pub result: GradeResult,
}

impl Student {
    /// 创建学生记录并立即评定等级
    pub fn new(name: impl Into<String>, marks: Marks) -> Self {
        let average = marks.average();
        let (grade, comment) = grade(average);
        Self {
            name: name.into(),
            marks,
            result: GradeResult {
                average,
                grade,
                comment,
            },
        }
    }
}

/// 学生名单
///
/// 按录入顺序保存，允许重名。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}
