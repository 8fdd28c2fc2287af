/// Result alias used across the crate.
pub type MashupResult<T> = Result<T, MashupError>;

/// Every failure the mashup pipeline can report.
///
/// Only [`MashupError::ListingExhausted`] and [`MashupError::AuthorUnavailable`] are recoverable;
/// everything else aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum MashupError {
    #[error("network error: {0}")]
    Network(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("listing exhausted: wrote {written} of {requested} requested images")]
    ListingExhausted { requested: usize, written: usize },

    #[error("author unavailable")]
    AuthorUnavailable,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MashupError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// `false` for the conditions the pipeline reports and then carries on from.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::ListingExhausted { .. } | Self::AuthorUnavailable
        )
    }
}

impl From<reqwest::Error> for MashupError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<image::ImageError> for MashupError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
