use crate::foundation::error::{MashupError, MashupResult};

/// Marker the listing API reports in place of a deleted account's handle.
const DELETED_AUTHOR: &str = "[deleted]";

/// Time window a "top" listing is ranked over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ListingWindow {
    Hour,
    Day,
    Week,
    #[default]
    Month,
    Year,
    All,
}

impl ListingWindow {
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

/// One item of a listing as the content source reports it, before it is used as a caption or an
/// image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: Option<String>,
    pub permalink: String,
    pub over_18: bool,
    pub preview: Option<PreviewSource>,
}

/// Full-resolution preview advertised by the listing.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewSource {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Resolve an optional author field to a usable handle.
pub fn author_handle(author: Option<&str>) -> MashupResult<&str> {
    match author.map(str::trim) {
        Some(name) if !name.is_empty() && name != DELETED_AUTHOR => Ok(name),
        _ => Err(MashupError::AuthorUnavailable),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CaptionCandidate {
    pub text: String,
    pub author: Option<String>,
    pub permalink: String,
    pub is_adult: bool,
}

impl CaptionCandidate {
    pub fn author_handle(&self) -> MashupResult<&str> {
        author_handle(self.author.as_deref())
    }
}

impl From<ListingItem> for CaptionCandidate {
    fn from(item: ListingItem) -> Self {
        Self {
            text: item.title,
            author: item.author,
            permalink: item.permalink,
            is_adult: item.over_18,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageCandidate {
    pub source_url: String,
    /// Dimensions the listing advertises. The decoded raster is authoritative.
    pub advertised_size: Option<(u32, u32)>,
    pub author: Option<String>,
    pub permalink: String,
    pub is_adult: bool,
}

impl ImageCandidate {
    pub fn author_handle(&self) -> MashupResult<&str> {
        author_handle(self.author.as_deref())
    }
}

impl From<ListingItem> for ImageCandidate {
    fn from(item: ListingItem) -> Self {
        let (source_url, advertised_size) = match item.preview {
            Some(p) => (p.url, Some((p.width, p.height))),
            None => (item.url, None),
        };
        Self {
            source_url,
            advertised_size,
            author: item.author,
            permalink: item.permalink,
            is_adult: item.over_18,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/model.rs"]
mod tests;
