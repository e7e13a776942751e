pub mod report_writer;
pub mod reporter;
pub mod search;
pub mod validator;

pub use report_writer::ReportWriter;
pub use reporter::ClassStatistics;
