use crate::{
    foundation::error::{MashupError, MashupResult},
    source::model::{ListingItem, ListingWindow},
};

/// Remote content API the pipeline pulls listings and raw bytes from.
///
/// Constructed once by the caller and passed down explicitly.
pub trait ContentSource {
    /// Up to `limit` items from the community's "top" listing over `window`, in rank order.
    fn top_listing(
        &self,
        community: &str,
        window: ListingWindow,
        limit: usize,
    ) -> MashupResult<Vec<ListingItem>>;

    /// Fetch an arbitrary URL (images, font files) as raw bytes.
    fn fetch_bytes(&self, url: &str) -> MashupResult<Vec<u8>>;
}

/// Community names are restricted to what the listing API accepts in a path segment.
pub fn validate_community(name: &str) -> MashupResult<()> {
    if name.is_empty() {
        return Err(MashupError::validation("community name must be non-empty"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(MashupError::validation(format!(
            "community name '{name}' may only contain ASCII letters, digits and '_'"
        )));
    }
    Ok(())
}

/// Blocking HTTP client shared by the listing implementations.
pub(crate) fn build_http_client(user_agent: &str) -> MashupResult<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(user_agent.to_string())
        .build()
        .map_err(|e| MashupError::network(format!("build http client: {e}")))
}

pub(crate) fn get_bytes(http: &reqwest::blocking::Client, url: &str) -> MashupResult<Vec<u8>> {
    let resp = http
        .get(url)
        .send()
        .map_err(|e| MashupError::network(format!("GET {url}: {e}")))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(MashupError::network(format!("GET {url}: status {status}")));
    }
    let bytes = resp
        .bytes()
        .map_err(|e| MashupError::network(format!("GET {url}: read body: {e}")))?;
    Ok(bytes.to_vec())
}
