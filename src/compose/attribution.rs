use crate::foundation::error::{MashupError, MashupResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributionKind {
    Image,
    Quote,
}

impl AttributionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Quote => "Quote",
        }
    }
}

/// `"<Kind> by /u/<author> from <permalink>"`, or `"<Kind> from <permalink>"` when the author
/// is unavailable. Any other lookup error is passed through.
pub fn attribution_text(
    kind: AttributionKind,
    author: MashupResult<&str>,
    permalink: &str,
) -> MashupResult<String> {
    match author {
        Ok(name) => Ok(format!("{} by /u/{} from {}", kind.label(), name, permalink)),
        Err(MashupError::AuthorUnavailable) => {
            tracing::debug!(kind = kind.label(), permalink, "attributing without author");
            Ok(format!("{} from {}", kind.label(), permalink))
        }
        Err(err) => Err(err),
    }
}
