pub mod output;

pub use output::{Output, format_success, format_warning};
