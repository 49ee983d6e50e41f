pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{fetch_page, read_text, send_checked, shared_client};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
