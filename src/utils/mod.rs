pub mod logging;
pub mod text;

pub use text::{collapse_whitespace, title_case, truncate_text};
