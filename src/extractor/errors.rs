use thiserror::Error;

use crate::fetcher::FetchError;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{0}")]
    Validation(String),

    #[error("failed to fetch page: {0}")]
    Fetch(String),

    #[error("upstream responded with status {status}")]
    Http { status: u16 },

    #[error("fetching the page timed out")]
    Timeout,

    #[error("page could not be parsed as HTML: {0}")]
    Parse(String),
}

impl From<FetchError> for ExtractError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http { status } => Self::Http {
                status: status.as_u16(),
            },
            FetchError::Timeout => Self::Timeout,
            FetchError::BodyTooLarge(_) | FetchError::UnsupportedContentType(_) => {
                Self::Parse(err.to_string())
            }
            FetchError::InvalidUrl(_)
            | FetchError::UnsupportedScheme(_)
            | FetchError::Network(_)
            | FetchError::RedirectLoop
            | FetchError::Io(_) => Self::Fetch(err.to_string()),
        }
    }
}
