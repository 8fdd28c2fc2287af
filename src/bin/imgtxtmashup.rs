use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use imgtxtmashup::{
    DEFAULT_FONT_URL, ListingWindow, MashupConfig, RedditSource, RedditSourceOpts, VerticalAnchor,
};

/// Caption top images with top posts from another community.
#[derive(Parser, Debug)]
#[command(name = "imgtxtmashup", version)]
struct Cli {
    /// Community the captions come from.
    #[arg(long, default_value = "showerthoughts")]
    source_txt: String,

    /// Community the images come from.
    #[arg(long, default_value = "earthporn")]
    source_img: String,

    /// Number of output images.
    #[arg(long, default_value_t = 10)]
    n_imgs: usize,

    /// Caption line length in characters.
    #[arg(long, default_value_t = 48)]
    line_length: usize,

    /// Skip portrait images (height > width).
    #[arg(long)]
    no_portraits: bool,

    /// Skip landscape images (width > height).
    #[arg(long)]
    no_landscapes: bool,

    /// Include adult (over-18) posts.
    #[arg(long)]
    nsfw_ok: bool,

    /// Vertical position of the caption.
    #[arg(long, value_enum, default_value_t = VerticalAnchor::Bottom)]
    quote_location: VerticalAnchor,

    /// URL of the caption font (cached under --fonts-dir).
    #[arg(long, default_value = DEFAULT_FONT_URL)]
    font_url: String,

    /// Font cache directory.
    #[arg(long, default_value = "fonts")]
    fonts_dir: PathBuf,

    /// Output directory.
    #[arg(long, default_value = "output")]
    out_path: PathBuf,

    /// Empty the output directory before writing.
    #[arg(long)]
    clear_before_output: bool,

    /// Time window the "top" listings are ranked over.
    #[arg(long, value_enum, default_value_t = ListingWindow::Month)]
    time_window: ListingWindow,

    /// Listing items fetched per requested image.
    #[arg(long, default_value_t = 5)]
    candidate_multiplier: usize,

    /// Shuffle seed (defaults to the clock; the seed in use is logged).
    #[arg(long)]
    seed: Option<u64>,

    /// HTTP user agent.
    #[arg(long, default_value = concat!("imgtxtmashup/", env!("CARGO_PKG_VERSION")))]
    user_agent: String,

    /// Listing API base URL.
    #[arg(long, default_value = imgtxtmashup::source::reddit::DEFAULT_API_BASE)]
    api_base: String,
}

impl Cli {
    fn into_parts(self) -> (MashupConfig, RedditSourceOpts) {
        let config = MashupConfig {
            source_txt: self.source_txt,
            source_img: self.source_img,
            n_imgs: self.n_imgs,
            line_length: self.line_length,
            no_portraits: self.no_portraits,
            no_landscapes: self.no_landscapes,
            nsfw_ok: self.nsfw_ok,
            quote_location: self.quote_location,
            font_url: self.font_url,
            fonts_dir: self.fonts_dir,
            out_path: self.out_path,
            clear_before_output: self.clear_before_output,
            window: self.time_window,
            candidate_multiplier: self.candidate_multiplier,
            seed: self.seed,
            ..MashupConfig::default()
        };
        let source = RedditSourceOpts {
            api_base: self.api_base,
            user_agent: self.user_agent,
        };
        (config, source)
    }
}

fn main() -> anyhow::Result<()> {
    imgtxtmashup::logging::init_logging("info");

    let (config, source_opts) = Cli::parse().into_parts();
    config.validate().context("invalid arguments")?;

    let source = RedditSource::new(source_opts).context("create listing client")?;
    let summary = imgtxtmashup::run(&source, &config).context("mashup run failed")?;

    eprintln!(
        "wrote {} of {} images to {}",
        summary.written,
        summary.requested,
        config.out_path.display()
    );
    Ok(())
}
