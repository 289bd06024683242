pub mod builder;
pub mod cleanup;
pub mod writer;

pub use builder::{Report, ReportEntry, ReportHeader, ReportSection, collapse_blank_lines};
pub use cleanup::{CleanedReport, clean_report_text};
pub use writer::{WriteError, write_report};
