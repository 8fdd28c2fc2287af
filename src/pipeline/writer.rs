use std::path::{Path, PathBuf};

use crate::foundation::error::{MashupError, MashupResult};

/// Optionally wipe `dir`, then make sure it exists.
///
/// An empty path means the working directory and is never wiped.
pub fn prepare_output_dir(dir: &Path, clear: bool) -> MashupResult<()> {
    if clear && !dir.as_os_str().is_empty() {
        match std::fs::remove_dir_all(dir) {
            Ok(()) => tracing::info!(dir = %dir.display(), "cleared output directory"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(MashupError::io(
                    format!("clear output dir '{}'", dir.display()),
                    e,
                ));
            }
        }
    }
    std::fs::create_dir_all(dir)
        .map_err(|e| MashupError::io(format!("create output dir '{}'", dir.display()), e))
}

/// Writes `output_0.jpg`, `output_1.jpg`, ... in call order.
#[derive(Debug)]
pub struct OutputWriter {
    dir: PathBuf,
    next_index: usize,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next_index: 0,
        }
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("output_{index}.jpg"))
    }

    /// Number of files written so far.
    pub fn written(&self) -> usize {
        self.next_index
    }

    /// Encode `img` as JPEG under the next free index. The index only advances on success.
    pub fn write(&mut self, img: &image::RgbImage) -> MashupResult<PathBuf> {
        let path = self.path_for(self.next_index);
        image::save_buffer_with_format(
            &path,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ColorType::Rgb8,
            image::ImageFormat::Jpeg,
        )
        .map_err(|e| match e {
            image::ImageError::IoError(io) => {
                MashupError::io(format!("write '{}'", path.display()), io)
            }
            other => MashupError::Other(
                anyhow::Error::new(other).context(format!("encode jpeg '{}'", path.display())),
            ),
        })?;

        self.next_index += 1;
        tracing::info!(path = %path.display(), "wrote");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/writer.rs"]
mod tests;
