use std::cell::RefCell;

use super::*;
use crate::foundation::error::MashupError;

struct CannedSource {
    items: Vec<ListingItem>,
    calls: RefCell<Vec<(String, usize)>>,
}

impl ContentSource for CannedSource {
    fn top_listing(
        &self,
        community: &str,
        _window: ListingWindow,
        limit: usize,
    ) -> MashupResult<Vec<ListingItem>> {
        self.calls.borrow_mut().push((community.to_string(), limit));
        Ok(self.items.iter().take(limit).cloned().collect())
    }

    fn fetch_bytes(&self, url: &str) -> MashupResult<Vec<u8>> {
        Err(MashupError::network(format!("unexpected fetch of {url}")))
    }
}

fn canned(n: usize) -> CannedSource {
    let items = (0..n)
        .map(|i| ListingItem {
            id: format!("id{i}"),
            title: format!("caption {i}"),
            url: format!("https://i.example/{i}.jpg"),
            author: Some(format!("user{i}")),
            permalink: format!("https://redd.it/id{i}"),
            over_18: i % 3 == 0,
            preview: None,
        })
        .collect();
    CannedSource {
        items,
        calls: RefCell::new(Vec::new()),
    }
}

fn opts(limit: usize, allow_adult: bool) -> FetchOpts {
    FetchOpts {
        window: ListingWindow::Month,
        limit,
        allow_adult,
    }
}

#[test]
fn adult_items_are_dropped_by_default() {
    let src = canned(12);
    let caps = fetch_captions(&src, "showerthoughts", opts(12, false), &mut Rng64::new(1)).unwrap();
    assert_eq!(caps.len(), 8);
    assert!(caps.iter().all(|c| !c.is_adult));
    assert_eq!(
        src.calls.borrow().as_slice(),
        &[("showerthoughts".to_string(), 12)]
    );
}

#[test]
fn adult_items_are_kept_when_allowed() {
    let src = canned(12);
    let imgs = fetch_images(&src, "earthporn", opts(12, true), &mut Rng64::new(1)).unwrap();
    assert_eq!(imgs.len(), 12);
    assert!(imgs.iter().any(|c| c.is_adult));
}

#[test]
fn shuffle_is_seeded() {
    let src = canned(20);
    let a = fetch_captions(&src, "x", opts(20, true), &mut Rng64::new(3)).unwrap();
    let b = fetch_captions(&src, "x", opts(20, true), &mut Rng64::new(3)).unwrap();
    let c = fetch_captions(&src, "x", opts(20, true), &mut Rng64::new(4)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let ranked: Vec<String> = (0..20).map(|i| format!("caption {i}")).collect();
    let got: Vec<String> = a.iter().map(|c| c.text.clone()).collect();
    assert_ne!(got, ranked);
}

#[test]
fn listing_errors_propagate() {
    struct Down;
    impl ContentSource for Down {
        fn top_listing(
            &self,
            _community: &str,
            _window: ListingWindow,
            _limit: usize,
        ) -> MashupResult<Vec<ListingItem>> {
            Err(MashupError::network("connection refused"))
        }
        fn fetch_bytes(&self, _url: &str) -> MashupResult<Vec<u8>> {
            unreachable!()
        }
    }

    let err = fetch_images(&Down, "earthporn", opts(5, false), &mut Rng64::new(1)).unwrap_err();
    assert!(matches!(err, MashupError::Network(_)));
}
