pub mod client;
pub mod decode;
pub mod errors;
pub mod types;

pub use client::{DEFAULT_TIMEOUT, MAX_BODY_SIZE, USER_AGENT, fetch, fetch_with_timeout};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
