/// 科目枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// 数学
    Math,
    /// 科学
    Science,
    /// 英语
    English,
}

impl Subject {
    /// 录入顺序
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Science, Subject::English];

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::English => "English",
        }
    }

    /// 获取录入提示
    pub fn prompt(self) -> String {
        format!("{}: ", self.name())
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
