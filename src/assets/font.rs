use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    foundation::error::{MashupError, MashupResult},
    source::client::ContentSource,
};

/// Default caption font.
pub const DEFAULT_FONT_URL: &str =
    "https://github.com/google/fonts/raw/master/ofl/kadwa/Kadwa-Bold.ttf";

/// Raw font file bytes, shared between the layout engine and the rasterizer.
#[derive(Clone, Debug)]
pub struct FontAsset {
    pub name: String,
    pub bytes: Arc<Vec<u8>>,
}

/// Where the font at `url` is cached under `fonts_dir`: the URL's last path segment.
pub fn font_cache_path(url: &str, fonts_dir: &Path) -> MashupResult<PathBuf> {
    let without_query = url.split(['?', '#']).next().unwrap_or_default();
    let name = without_query.rsplit('/').next().unwrap_or_default();
    if name.is_empty() || name == "." || name == ".." {
        return Err(MashupError::validation(format!(
            "font url '{url}' has no file name"
        )));
    }
    Ok(fonts_dir.join(name))
}

/// Load the font at `url`, downloading it into `fonts_dir` the first time.
///
/// A cached file is trusted as-is.
pub fn acquire_font(
    source: &dyn ContentSource,
    url: &str,
    fonts_dir: &Path,
) -> MashupResult<FontAsset> {
    let path = font_cache_path(url, fonts_dir)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let bytes = if path.is_file() {
        tracing::debug!(path = %path.display(), "using cached font");
        std::fs::read(&path)
            .map_err(|e| MashupError::io(format!("read font '{}'", path.display()), e))?
    } else {
        tracing::info!(url, path = %path.display(), "downloading font");
        let bytes = source.fetch_bytes(url)?;
        std::fs::create_dir_all(fonts_dir).map_err(|e| {
            MashupError::io(format!("create fonts dir '{}'", fonts_dir.display()), e)
        })?;
        std::fs::write(&path, &bytes)
            .map_err(|e| MashupError::io(format!("write font '{}'", path.display()), e))?;
        bytes
    };

    if bytes.is_empty() {
        return Err(MashupError::render(format!("font '{name}' is empty")));
    }

    Ok(FontAsset {
        name,
        bytes: Arc::new(bytes),
    })
}

/// Font for rendering tests: `IMGTXTMASHUP_TEST_FONT`, else the first `.ttf` cached in `fonts/`.
#[cfg(test)]
pub(crate) fn local_test_font() -> Option<FontAsset> {
    let path = match std::env::var_os("IMGTXTMASHUP_TEST_FONT") {
        Some(p) => PathBuf::from(p),
        None => std::fs::read_dir("fonts")
            .ok()?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .find(|p| p.extension().is_some_and(|ext| ext == "ttf"))?,
    };
    let bytes = std::fs::read(&path).ok()?;
    Some(FontAsset {
        name: path.file_name()?.to_string_lossy().into_owned(),
        bytes: Arc::new(bytes),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
