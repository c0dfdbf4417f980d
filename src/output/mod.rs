mod json;
mod summary;

pub use json::write_report;
pub use summary::{format_day, print_day, print_footer};
