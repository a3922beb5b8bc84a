mod analyze_grades;

pub use analyze_grades::*;
