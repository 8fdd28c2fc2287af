use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MashupError::network("x")
            .to_string()
            .contains("network error:")
    );
    assert!(MashupError::decode("x").to_string().contains("decode error:"));
    assert!(MashupError::render("x").to_string().contains("render error:"));
    assert!(
        MashupError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn io_keeps_context_and_source() {
    let err = MashupError::io("write font cache", std::io::Error::other("disk full"));
    let msg = err.to_string();
    assert!(msg.contains("write font cache"));
    assert!(msg.contains("disk full"));
}

#[test]
fn only_shortfall_and_missing_author_are_recoverable() {
    assert!(
        !MashupError::ListingExhausted {
            requested: 10,
            written: 3
        }
        .is_fatal()
    );
    assert!(!MashupError::AuthorUnavailable.is_fatal());
    assert!(MashupError::network("timeout").is_fatal());
    assert!(MashupError::decode("bad jpeg").is_fatal());
    assert!(MashupError::validation("wrap width").is_fatal());
}

#[test]
fn listing_exhausted_reports_counts() {
    let msg = MashupError::ListingExhausted {
        requested: 10,
        written: 3,
    }
    .to_string();
    assert!(msg.contains("3 of 10"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MashupError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
