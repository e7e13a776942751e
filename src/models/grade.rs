use std::fmt;

/// 等级枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

/// 等级阈值（包含下界），从上往下第一个满足的生效
const THRESHOLDS: [(f64, Grade); 4] = [
    (90.0, Grade::A),
    (80.0, Grade::B),
    (70.0, Grade::C),
    (60.0, Grade::D),
];

impl Grade {
    /// 根据平均分评定等级
    ///
    /// 对所有实数输入都有定义：没有上界检查，NaN 落到 F。
    pub fn from_average(average: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| average >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    /// 获取等级字母
    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// 获取固定评语
    pub fn comment(self) -> &'static str {
        match self {
            Grade::A => "Excellent! Keep up the great work!",
            Grade::B => "Very Good! You're doing well.",
            Grade::C => "Good. Room for improvement.",
            Grade::D => "Needs Improvement. Please study more.",
            Grade::F => "Failed. Please seek help from teacher.",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad 而不是 write!，这样 {:^5} 之类的对齐才生效
        f.pad(self.letter())
    }
}

/// 评定等级并给出评语
pub fn grade(average: f64) -> (Grade, &'static str) {
    let grade = Grade::from_average(average);
    (grade, grade.comment())
}
