use crate::{
    foundation::{error::MashupResult, rng::Rng64},
    source::{
        client::ContentSource,
        model::{CaptionCandidate, ImageCandidate, ListingItem, ListingWindow},
    },
};

#[derive(Clone, Copy, Debug)]
pub struct FetchOpts {
    pub window: ListingWindow,
    /// Items requested from each listing.
    pub limit: usize,
    pub allow_adult: bool,
}

/// Caption candidates from `community`, shuffled, adult items removed unless allowed.
pub fn fetch_captions(
    source: &dyn ContentSource,
    community: &str,
    opts: FetchOpts,
    rng: &mut Rng64,
) -> MashupResult<Vec<CaptionCandidate>> {
    fetch_shuffled(source, community, opts, rng)
}

/// Image candidates from `community`, shuffled, adult items removed unless allowed.
pub fn fetch_images(
    source: &dyn ContentSource,
    community: &str,
    opts: FetchOpts,
    rng: &mut Rng64,
) -> MashupResult<Vec<ImageCandidate>> {
    fetch_shuffled(source, community, opts, rng)
}

fn fetch_shuffled<T: From<ListingItem>>(
    source: &dyn ContentSource,
    community: &str,
    opts: FetchOpts,
    rng: &mut Rng64,
) -> MashupResult<Vec<T>> {
    let mut items = source.top_listing(community, opts.window, opts.limit)?;
    let fetched = items.len();
    rng.shuffle(&mut items);
    if !opts.allow_adult {
        items.retain(|it| !it.over_18);
    }
    tracing::info!(
        community,
        fetched,
        kept = items.len(),
        "fetched candidates"
    );
    Ok(items.into_iter().map(T::from).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/source/fetch.rs"]
mod tests;
