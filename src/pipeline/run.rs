use crate::{
    assets::{decode::decode_raster, font::acquire_font},
    compose::render::{CompositionRequest, Compositor},
    config::MashupConfig,
    foundation::{
        error::{MashupError, MashupResult},
        rng::Rng64,
    },
    pipeline::{
        select::PairSelector,
        writer::{OutputWriter, prepare_output_dir},
    },
    source::{
        client::ContentSource,
        fetch::{fetch_captions, fetch_images},
        model::{CaptionCandidate, ImageCandidate},
    },
};

/// What a run produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub requested: usize,
    pub written: usize,
    pub considered: usize,
    pub skipped_aspect: usize,
    /// Candidates ran out before `requested` images were written.
    pub exhausted: bool,
}

impl RunSummary {
    /// The non-fatal [`MashupError::ListingExhausted`] condition, when `exhausted` is set.
    pub fn shortfall(&self) -> Option<MashupError> {
        self.exhausted.then_some(MashupError::ListingExhausted {
            requested: self.requested,
            written: self.written,
        })
    }
}

/// Full pipeline: load the font, fetch both listings, prepare the output dir, render and write.
///
/// The output directory is only cleared once every fallible input step has succeeded.
pub fn run(source: &dyn ContentSource, config: &MashupConfig) -> MashupResult<RunSummary> {
    config.validate()?;
    if config.n_imgs == 0 {
        prepare_output_dir(&config.out_path, config.clear_before_output)?;
        tracing::info!("nothing requested");
        return Ok(RunSummary::default());
    }

    let font = acquire_font(source, &config.font_url, &config.fonts_dir)?;
    let mut compositor = Compositor::new(&font)?;

    let (mut rng, seed) = match config.seed {
        Some(seed) => (Rng64::new(seed), seed),
        None => Rng64::from_time(),
    };
    tracing::info!(seed, "shuffle seed");

    let opts = config.fetch_opts();
    let captions = fetch_captions(source, &config.source_txt, opts, &mut rng)?;
    let images = fetch_images(source, &config.source_img, opts, &mut rng)?;

    prepare_output_dir(&config.out_path, config.clear_before_output)?;

    render_pairs(source, &captions, &images, config, |req, raster| {
        compositor.compose_request(req, raster)
    })
}

/// Select pairs, render each with `compose`, and write the results.
///
/// Split from [`run`] so the selection and writing can be driven with any renderer.
pub fn render_pairs<F>(
    source: &dyn ContentSource,
    captions: &[CaptionCandidate],
    images: &[ImageCandidate],
    config: &MashupConfig,
    mut compose: F,
) -> MashupResult<RunSummary>
where
    F: FnMut(&CompositionRequest<'_>, &image::RgbaImage) -> MashupResult<image::RgbImage>,
{
    let composition = config.composition();
    let mut writer = OutputWriter::new(&config.out_path);
    let selector = PairSelector::new(config.n_imgs, config.aspect_filter());

    let stats = selector.run(
        captions,
        images,
        |image| fetch_raster(source, image),
        |index, caption, image, raster| {
            debug_assert_eq!(index, writer.written());
            let req = CompositionRequest {
                caption,
                image,
                config: composition,
            };
            let out = compose(&req, &raster)?;
            writer.write(&out)?;
            Ok(())
        },
    )?;

    let summary = RunSummary {
        requested: config.n_imgs,
        written: stats.written,
        considered: stats.considered,
        skipped_aspect: stats.skipped_aspect,
        exhausted: stats.written < config.n_imgs,
    };
    match summary.shortfall() {
        Some(shortfall) => tracing::warn!(
            %shortfall,
            captions = captions.len(),
            images = images.len(),
            skipped_aspect = summary.skipped_aspect,
            "ran out of candidates"
        ),
        None => tracing::info!(written = summary.written, "done"),
    }
    Ok(summary)
}

/// Download and decode an image candidate's raster.
pub fn fetch_raster(
    source: &dyn ContentSource,
    image: &ImageCandidate,
) -> MashupResult<image::RgbaImage> {
    let bytes = source.fetch_bytes(&image.source_url)?;
    decode_raster(&bytes)
}
