//! imgtxtmashup pairs top posts from a caption community with top posts from an image community
//! and bakes each caption into its image.
//!
//! The pipeline is strictly sequential:
//!
//! - fetch and shuffle both listings through a [`ContentSource`]
//! - walk them in lockstep with a [`PairSelector`], filtering by orientation
//! - render caption and credits with the [`Compositor`]
//! - write `output_<k>.jpg` files with an [`OutputWriter`]
#![forbid(unsafe_code)]

pub mod assets;
pub mod compose;
pub mod config;
mod foundation;
pub mod logging;
pub mod pipeline;
pub mod source;
pub mod text;

pub use crate::assets::font::{DEFAULT_FONT_URL, FontAsset, acquire_font};
pub use crate::compose::render::{CompositionRequest, Compositor};
pub use crate::compose::style::{CaptionStyle, CompositionConfig, Rgba8, VerticalAnchor};
pub use crate::config::MashupConfig;
pub use crate::foundation::error::{MashupError, MashupResult};
pub use crate::foundation::rng::Rng64;
pub use crate::pipeline::run::{RunSummary, fetch_raster, render_pairs, run};
pub use crate::pipeline::select::{AspectFilter, PairSelector, SelectionStats};
pub use crate::pipeline::writer::{OutputWriter, prepare_output_dir};
pub use crate::source::client::ContentSource;
pub use crate::source::model::{
    CaptionCandidate, ImageCandidate, ListingItem, ListingWindow, PreviewSource,
};
pub use crate::source::reddit::{RedditSource, RedditSourceOpts};
