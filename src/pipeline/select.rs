use crate::{
    foundation::error::MashupResult,
    source::model::{CaptionCandidate, ImageCandidate},
};

/// Orientation filter applied to decoded rasters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AspectFilter {
    /// Reject height > width.
    pub exclude_portrait: bool,
    /// Reject width > height.
    pub exclude_landscape: bool,
}

impl AspectFilter {
    pub fn admits(self, width: u32, height: u32) -> bool {
        if self.exclude_portrait && height > width {
            return false;
        }
        if self.exclude_landscape && width > height {
            return false;
        }
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Indices whose raster was fetched.
    pub considered: usize,
    pub skipped_aspect: usize,
    pub written: usize,
}

/// Walks captions and images in lockstep until `target` pairs have been emitted.
#[derive(Clone, Copy, Debug)]
pub struct PairSelector {
    target: usize,
    filter: AspectFilter,
}

impl PairSelector {
    pub fn new(target: usize, filter: AspectFilter) -> Self {
        Self { target, filter }
    }

    /// Index `i` pairs `captions[i]` with `images[i]`; a rejected image burns its caption too.
    ///
    /// `fetch` loads the raster for an image candidate. `emit` receives each accepted pair with
    /// its 0-based output index. Any error from either aborts the walk.
    pub fn run<F, E>(
        &self,
        captions: &[CaptionCandidate],
        images: &[ImageCandidate],
        mut fetch: F,
        mut emit: E,
    ) -> MashupResult<SelectionStats>
    where
        F: FnMut(&ImageCandidate) -> MashupResult<image::RgbaImage>,
        E: FnMut(usize, &CaptionCandidate, &ImageCandidate, image::RgbaImage) -> MashupResult<()>,
    {
        let mut stats = SelectionStats::default();
        for (caption, image) in captions.iter().zip(images) {
            if stats.written >= self.target {
                break;
            }

            let raster = fetch(image)?;
            stats.considered += 1;
            let (width, height) = raster.dimensions();
            if !self.filter.admits(width, height) {
                stats.skipped_aspect += 1;
                tracing::debug!(
                    url = %image.source_url,
                    width,
                    height,
                    "skipping image with excluded orientation"
                );
                continue;
            }

            emit(stats.written, caption, image, raster)?;
            stats.written += 1;
        }
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/select.rs"]
mod tests;
