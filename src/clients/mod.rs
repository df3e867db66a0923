pub mod arxiv_client;
pub mod paper_source;

pub use arxiv_client::ArxivClient;
pub use paper_source::{FetchOptions, PaperSource};
