//! 主菜单 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，持有唯一的可变状态（当前名单），
//! 并按用户的选择把它交给对应的能力。
//!
//! ## 状态
//!
//! - `Session::Idle`：尚未录入，选项 2-4 只打印提示
//! - `Session::Loaded`：已有名单，选项 1 会整体替换
//!
//! 选项 5 结束循环。

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::Console;
use crate::models::Roster;
use crate::services::{reporter, search, ReportWriter};
use crate::utils::logging;
use crate::workflow;
use std::io::{self, BufRead, Stdout, Write};
use tracing::{debug, info};

/// 菜单选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterData,
    DisplayResults,
    SearchStudent,
    SaveToFile,
    Exit,
}

impl MenuChoice {
    /// 解析菜单输入（只接受 "1".."5"，不做去空白）
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::EnterData),
            "2" => Some(MenuChoice::DisplayResults),
            "3" => Some(MenuChoice::SearchStudent),
            "4" => Some(MenuChoice::SaveToFile),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// 会话状态
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Idle,
    Loaded(Roster),
}

impl Session {
    /// 整体替换名单，空名单保持 Idle
    pub fn load(roster: Roster) -> Self {
        if roster.is_empty() {
            Session::Idle
        } else {
            Session::Loaded(roster)
        }
    }

    pub fn roster(&self) -> Option<&Roster> {
        match self {
            Session::Idle => None,
            Session::Loaded(roster) => Some(roster),
        }
    }
}

/// 应用主结构
pub struct App<R, W> {
    console: Console<R, W>,
    report_writer: ReportWriter,
    session: Session,
}

impl App<io::StdinLock<'static>, Stdout> {
    /// 初始化应用（绑定标准输入输出）
    pub fn initialize(config: Config) -> Self {
        logging::log_startup(&config);
        Self::new(&config, Console::stdio())
    }
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: &Config, console: Console<R, W>) -> Self {
        Self {
            console,
            report_writer: ReportWriter::new(config),
            session: Session::Idle,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// 运行菜单循环，直到选择退出
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.show_menu()?;
            let input = self.console.prompt("Choose an option: ")?;

            match MenuChoice::parse(&input) {
                Some(MenuChoice::Exit) => {
                    self.console.say("Thank you for using the Grade Calculator!")?;
                    logging::log_session_end();
                    return Ok(());
                }
                Some(choice) => self.dispatch(choice)?,
                None => {
                    debug!("无效的菜单输入: {:?}", input);
                    self.console.say("Invalid option! Please choose again.")?;
                }
            }
        }
    }

    /// 执行单个菜单选项
    pub fn dispatch(&mut self, choice: MenuChoice) -> AppResult<()> {
        match choice {
            MenuChoice::EnterData => {
                let roster = workflow::collect_roster(&mut self.console)?;
                logging::log_roster_loaded(roster.len());
                self.session = Session::load(roster);
            }
            MenuChoice::DisplayResults => match self.session.roster() {
                Some(roster) => reporter::write_results(roster, self.console.writer())?,
                None => self
                    .console
                    .say("No data available! Please enter students first.")?,
            },
            MenuChoice::SearchStudent => match self.session.roster() {
                Some(roster) => {
                    let query = self.console.prompt("\nEnter student name to search: ")?;
                    let found = search::find_student(roster, &query);
                    info!(
                        "🔍 查找 {:?}: {}",
                        query.trim(),
                        if found.is_some() { "命中" } else { "未找到" }
                    );
                    search::write_match(found, self.console.writer())?;
                }
                None => self.console.say("No data available!")?,
            },
            MenuChoice::SaveToFile => match self.session.roster() {
                Some(roster) => {
                    self.report_writer.save(roster)?;
                    self.console.say(format!(
                        "\n✓ Results saved to {}",
                        self.report_writer.path().display()
                    ))?;
                }
                None => self.console.say("No data to save!")?,
            },
            MenuChoice::Exit => {}
        }
        Ok(())
    }

    fn show_menu(&mut self) -> AppResult<()> {
        let rule = "=".repeat(50);
        self.console.say(format!("\n{}", rule))?;
        self.console.say("               MAIN MENU")?;
        self.console.say(&rule)?;
        for line in [
            "1. Enter Student Data",
            "2. Display Results",
            "3. Search Student",
            "4. Save to File",
            "5. Exit",
        ] {
            self.console.say(line)?;
        }
        self.console.say(&rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Cursor;

    type TestApp = App<Cursor<String>, Vec<u8>>;

    fn app(input: &str, output_file: &str) -> TestApp {
        let config = Config {
            output_file: output_file.to_string(),
            ..Config::default()
        };
        App::new(&config, Console::new(Cursor::new(input.to_string()), Vec::new()))
    }

    fn output(app: TestApp) -> String {
        String::from_utf8(app.into_console().into_parts().1).unwrap()
    }

    #[test]
    fn test_menu_choice_parse_is_exact() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::EnterData));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_guards_when_idle() {
        let mut app = app("2\n3\n4\n5\n", "unused.txt");
        app.run().unwrap();
        assert_eq!(app.session(), &Session::Idle);

        let out = output(app);
        assert!(out.contains("No data available! Please enter students first.\n"));
        assert!(out.contains("No data available!\n"));
        assert!(out.contains("No data to save!\n"));
        assert!(!out.contains("Enter student name to search"));
        assert!(out.ends_with("Thank you for using the Grade Calculator!\n"));
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let mut app = app("9\nhello\n5\n", "unused.txt");
        app.run().unwrap();

        let out = output(app);
        assert_eq!(out.matches("Invalid option! Please choose again.").count(), 2);
        assert_eq!(out.matches("               MAIN MENU").count(), 3);
    }

    #[test]
    fn test_enter_data_replaces_roster() {
        let input = "1\n1\nAlice\n95\n85\n92\n1\n1\nBob\n40\n55\n50\n5\n";
        let mut app = app(input, "unused.txt");
        app.run().unwrap();

        let roster = app.session().roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.students()[0].name, "Bob");
    }

    #[test]
    fn test_search_hit_and_miss() {
        let input = "1\n2\nAlice\n95\n85\n92\nBob\n40\n55\n50\n3\nbob\n3\nCarol\n5\n";
        let mut app = app(input, "unused.txt");
        app.run().unwrap();

        let out = output(app);
        assert!(out.contains("Enter student name to search: \n✓ Student Found\nName: Bob\n"));
        assert!(out.contains("Grade: F\n"));
        assert!(out.contains("✗ Student not found!\n"));
    }

    #[test]
    fn test_save_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.txt");
        let input = "1\n1\nAlice\n95\n85\n92\n4\n5\n";
        let mut app = app(input, path.to_str().unwrap());
        app.run().unwrap();

        assert!(path.exists());
        let out = output(app);
        assert!(out.contains(&format!("\n✓ Results saved to {}\n", path.display())));
    }

    #[test]
    fn test_closed_input_ends_run_with_error() {
        let mut app = app("2\n", "unused.txt");
        assert!(matches!(app.run(), Err(AppError::InputClosed)));
    }
}
