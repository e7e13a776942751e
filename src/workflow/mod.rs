pub mod roster_flow;

pub use roster_flow::collect_roster;
