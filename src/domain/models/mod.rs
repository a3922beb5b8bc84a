mod generation;
mod grade_report;
mod report_schema;

pub use generation::*;
pub use grade_report::*;
pub use report_schema::*;
