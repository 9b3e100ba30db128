pub mod summary;

pub use summary::{format_plan, format_summary, print_header, print_step};
