//! # Grade Calculator
//!
//! 一个菜单驱动的学生成绩计算器：录入三科成绩、评定等级、
//! 输出班级统计、按姓名查找、保存文本报告。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有唯一的控制台读写资源
//!
//! ### ② 业务能力层（Services）
//! - `validator` - 有界数字 / 正整数 / 非空字符串的提问循环
//! - `reporter` - 成绩表与班级统计
//! - `search` - 按姓名查找（忽略大小写）
//! - `report_writer` - 覆盖写入文本报告
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/roster_flow` - 录入整份名单
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/menu` - 主菜单与会话状态
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::Console;
pub use models::{Grade, Marks, Roster, Student};
pub use orchestrator::{App, MenuChoice, Session};
