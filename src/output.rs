//! Writing rendered icons to disk.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::config::{DEFAULT_FILE_PREFIX, DEFAULT_SIZES};
use crate::error::{Error, Result};
use crate::icon::IconImage;
use crate::renderer::IconRenderer;

/// Writes icons as `<prefix><size>.png` files inside one directory.
///
/// Existing files with the same names are overwritten; anything else in the
/// directory is left alone.
#[derive(Debug, Clone)]
pub struct OutputDriver {
    dir: PathBuf,
    prefix: String,
}

impl OutputDriver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }

    /// Sets the file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the output directory and any missing parents.
    ///
    /// Succeeds without changes if the directory already exists.
    pub fn ensure_dir(&self) -> Result<()> {
        if self.dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|source| Error::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        tracing::debug!(dir = %self.dir.display(), "created output directory");
        Ok(())
    }

    /// Returns the path an icon of this size is written to.
    pub fn file_path(&self, size: u32) -> PathBuf {
        self.dir.join(format!("{}{}.png", self.prefix, size))
    }

    /// Encodes an icon as PNG, replacing any existing file.
    pub fn write_icon(&self, icon: &IconImage) -> Result<PathBuf> {
        let path = self.file_path(icon.size());
        icon.data
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| Error::Encode {
                path: path.clone(),
                source,
            })?;
        tracing::info!(path = %path.display(), size = icon.size(), "wrote icon");
        Ok(path)
    }

    /// Renders and writes every size in order.
    ///
    /// The directory is ensured once up front. The first failure aborts the
    /// run; files already written stay on disk and later sizes are skipped.
    pub fn generate(&self, renderer: &IconRenderer, sizes: &[u32]) -> Result<Vec<PathBuf>> {
        self.ensure_dir()?;

        let mut written = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let icon = renderer.render(size)?;
            written.push(self.write_icon(&icon)?);
        }
        Ok(written)
    }
}

/// Writes the stock clock icons (16, 32, 48 and 128 px) into `dir`.
pub fn generate_default_icons(dir: impl Into<PathBuf>) -> Result<Vec<PathBuf>> {
    OutputDriver::new(dir).generate(&IconRenderer::default(), &DEFAULT_SIZES)
}

// ============================================================================
// Tests
// ============================================================================
