//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! menu::App (持有 Session，分发菜单选项)
//!     ↓
//! workflow::collect_roster (录入整份名单)
//!     ↓
//! services (能力层：validator / reporter / search / report_writer)
//!     ↓
//! infrastructure (基础设施：Console)
//! ```
//!
//! 只做调度，不做具体业务判断；名单只在这一层被替换。

pub mod menu;

pub use menu::{App, MenuChoice, Session};
