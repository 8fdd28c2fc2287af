use std::path::PathBuf;

use crate::{
    assets::font::DEFAULT_FONT_URL,
    compose::style::{CaptionStyle, CompositionConfig, VerticalAnchor},
    foundation::error::{MashupError, MashupResult},
    pipeline::select::AspectFilter,
    source::{client::validate_community, fetch::FetchOpts, model::ListingWindow},
};

/// Upper bound on listing items requested per community (`n_imgs * candidate_multiplier`).
pub const MAX_LISTING_ITEMS: usize = 10_000;

/// Everything one run needs, independent of where the values came from.
#[derive(Clone, Debug, PartialEq)]
pub struct MashupConfig {
    /// Community the captions come from.
    pub source_txt: String,
    /// Community the images come from.
    pub source_img: String,
    /// Number of images to produce.
    pub n_imgs: usize,
    /// Caption wrap width in characters.
    pub line_length: usize,
    pub no_portraits: bool,
    pub no_landscapes: bool,
    pub nsfw_ok: bool,
    pub quote_location: VerticalAnchor,
    pub font_url: String,
    pub fonts_dir: PathBuf,
    pub out_path: PathBuf,
    pub clear_before_output: bool,
    pub window: ListingWindow,
    /// Listing items requested per output image.
    pub candidate_multiplier: usize,
    /// Shuffle seed; `None` seeds from the clock.
    pub seed: Option<u64>,
    pub style: CaptionStyle,
}

impl Default for MashupConfig {
    fn default() -> Self {
        Self {
            source_txt: "showerthoughts".to_string(),
            source_img: "earthporn".to_string(),
            n_imgs: 10,
            line_length: 48,
            no_portraits: false,
            no_landscapes: false,
            nsfw_ok: false,
            quote_location: VerticalAnchor::Bottom,
            font_url: DEFAULT_FONT_URL.to_string(),
            fonts_dir: PathBuf::from("fonts"),
            out_path: PathBuf::from("output"),
            clear_before_output: false,
            window: ListingWindow::Month,
            candidate_multiplier: 5,
            seed: None,
            style: CaptionStyle::default(),
        }
    }
}

impl MashupConfig {
    pub fn validate(&self) -> MashupResult<()> {
        validate_community(&self.source_txt)?;
        validate_community(&self.source_img)?;
        if self.line_length == 0 {
            return Err(MashupError::validation("line length must be at least 1"));
        }
        if self.candidate_multiplier == 0 {
            return Err(MashupError::validation(
                "candidate multiplier must be at least 1",
            ));
        }
        match self.n_imgs.checked_mul(self.candidate_multiplier) {
            Some(items) if items <= MAX_LISTING_ITEMS => {}
            _ => {
                return Err(MashupError::validation(format!(
                    "{} images x {} candidates exceeds {MAX_LISTING_ITEMS} listing items",
                    self.n_imgs, self.candidate_multiplier
                )));
            }
        }
        if self.font_url.trim().is_empty() {
            return Err(MashupError::validation("font url must be non-empty"));
        }
        Ok(())
    }

    pub fn aspect_filter(&self) -> AspectFilter {
        AspectFilter {
            exclude_portrait: self.no_portraits,
            exclude_landscape: self.no_landscapes,
        }
    }

    pub fn fetch_opts(&self) -> FetchOpts {
        FetchOpts {
            window: self.window,
            limit: self.n_imgs.saturating_mul(self.candidate_multiplier),
            allow_adult: self.nsfw_ok,
        }
    }

    pub fn composition(&self) -> CompositionConfig {
        CompositionConfig {
            wrap_width: self.line_length,
            anchor: self.quote_location,
            style: self.style,
        }
    }
}
