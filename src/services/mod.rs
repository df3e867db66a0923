pub mod author_registry;
pub mod page_composer;
pub mod page_writer;
pub mod profile_lister;

pub use author_registry::AuthorRegistry;
pub use page_composer::{compose_page, compose_page_at, PageOptions};
pub use page_writer::{author_slug, write_page, PageKey};
pub use profile_lister::list_authors;
