use serde::Deserialize;

use crate::{
    foundation::error::{MashupError, MashupResult},
    source::{
        client::{ContentSource, build_http_client, get_bytes, validate_community},
        model::{ListingItem, ListingWindow, PreviewSource},
    },
};

/// The listing endpoint refuses larger pages.
const MAX_PAGE_SIZE: usize = 100;

/// Default API host.
pub const DEFAULT_API_BASE: &str = "https://www.reddit.com";

#[derive(Clone, Debug)]
pub struct RedditSourceOpts {
    pub api_base: String,
    pub user_agent: String,
}

impl Default for RedditSourceOpts {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: concat!("imgtxtmashup/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// [`ContentSource`] backed by the public JSON listing endpoints.
pub struct RedditSource {
    http: reqwest::blocking::Client,
    api_base: String,
}

impl RedditSource {
    pub fn new(opts: RedditSourceOpts) -> MashupResult<Self> {
        Ok(Self {
            http: build_http_client(&opts.user_agent)?,
            api_base: opts.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn page_url(
        &self,
        community: &str,
        window: ListingWindow,
        page_size: usize,
        after: Option<&str>,
    ) -> MashupResult<reqwest::Url> {
        let base = format!("{}/r/{}/top.json", self.api_base, community);
        let mut url = reqwest::Url::parse(&base)
            .map_err(|e| MashupError::validation(format!("listing url '{base}': {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("t", window.as_query())
                .append_pair("limit", &page_size.to_string())
                .append_pair("raw_json", "1");
            if let Some(after) = after {
                query.append_pair("after", after);
            }
        }
        Ok(url)
    }
}

impl ContentSource for RedditSource {
    fn top_listing(
        &self,
        community: &str,
        window: ListingWindow,
        limit: usize,
    ) -> MashupResult<Vec<ListingItem>> {
        validate_community(community)?;

        let mut out = Vec::new();
        let mut after: Option<String> = None;
        while out.len() < limit {
            let page_size = (limit - out.len()).min(MAX_PAGE_SIZE);
            let url = self.page_url(community, window, page_size, after.as_deref())?;
            let bytes = get_bytes(&self.http, url.as_str())?;
            let page = parse_listing_page(&bytes)?;
            tracing::debug!(community, items = page.items.len(), "fetched listing page");

            let got = page.items.len();
            out.extend(page.items);
            match page.after {
                Some(next) if got > 0 => after = Some(next),
                _ => break,
            }
        }
        out.truncate(limit);
        Ok(out)
    }

    fn fetch_bytes(&self, url: &str) -> MashupResult<Vec<u8>> {
        get_bytes(&self.http, url)
    }
}

/// One decoded page of a listing plus the cursor for the next page.
#[derive(Debug)]
pub struct ListingPage {
    pub items: Vec<ListingItem>,
    pub after: Option<String>,
}

#[derive(Deserialize)]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Deserialize)]
struct EnvelopeData {
    #[serde(default)]
    children: Vec<Child>,
    after: Option<String>,
}

#[derive(Deserialize)]
struct Child {
    data: Post,
}

#[derive(Deserialize)]
struct Post {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    author: Option<String>,
    #[serde(default)]
    over_18: bool,
    preview: Option<Preview>,
}

#[derive(Deserialize)]
struct Preview {
    #[serde(default)]
    images: Vec<PreviewImage>,
}

#[derive(Deserialize)]
struct PreviewImage {
    source: PreviewImageSource,
}

#[derive(Deserialize)]
struct PreviewImageSource {
    url: String,
    width: u32,
    height: u32,
}

/// Decode a `top.json` response body.
pub fn parse_listing_page(bytes: &[u8]) -> MashupResult<ListingPage> {
    let env: Envelope = serde_json::from_slice(bytes)
        .map_err(|e| MashupError::decode(format!("listing payload: {e}")))?;

    let items = env
        .data
        .children
        .into_iter()
        .map(|child| {
            let post = child.data;
            let preview = post
                .preview
                .and_then(|p| p.images.into_iter().next())
                .map(|img| PreviewSource {
                    url: img.source.url,
                    width: img.source.width,
                    height: img.source.height,
                });
            ListingItem {
                permalink: format!("https://redd.it/{}", post.id),
                id: post.id,
                title: post.title,
                url: post.url,
                author: post.author,
                over_18: post.over_18,
                preview,
            }
        })
        .collect();

    Ok(ListingPage {
        items,
        after: env.data.after,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/source/reddit.rs"]
mod tests;
