pub mod paper;
pub mod summary;

pub use paper::Paper;
pub use summary::{SummaryFormat, SummarySource};
