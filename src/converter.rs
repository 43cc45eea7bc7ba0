use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, ImageReader};

use crate::detect::Format;
use crate::error::{Error, Result};

/// Converts single image files between PNG and JPEG, writing the result
/// into a fixed destination directory.
pub struct Converter {
    dest_dir: PathBuf,
}

impl Converter {
    pub fn new(dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            dest_dir: dest_dir.into(),
        }
    }

    /// Converter targeting the current user's desktop folder.
    pub fn to_desktop() -> Result<Self> {
        let dest_dir = dirs::desktop_dir()
            .ok_or_else(|| Error::WriteFailed("could not resolve the desktop folder".into()))?;
        Ok(Self::new(dest_dir))
    }

    /// Re-encodes the file at `source` in the opposite format (PNG becomes
    /// JPEG and vice versa) and writes `<stem>.<ext>` into the destination
    /// directory, overwriting any existing file of that name. Returns the
    /// absolute path of the written file.
    pub fn convert(&self, source: &Path) -> Result<PathBuf> {
        if !source.is_file() {
            return Err(Error::NotFound(source.display().to_string()));
        }

        let source_format = Format::from_path(source)
            .ok_or_else(|| Error::UnsupportedFormat(source.display().to_string()))?;
        let target_format = source_format.target();

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "converted".to_string());
        let dest = self
            .dest_dir
            .join(format!("{stem}.{}", target_format.extension()));

        // The extension decides how the bytes are decoded; no sniffing.
        let mut reader = ImageReader::open(source).map_err(|e| Error::DecodeFailed {
            format: source_format.name(),
            message: e.to_string(),
        })?;
        reader.set_format(source_format.into());
        let img = reader.decode().map_err(|e| Error::DecodeFailed {
            format: source_format.name(),
            message: e.to_string(),
        })?;

        let file = fs::File::create(&dest).map_err(|e| Error::WriteFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);

        match target_format {
            // JPEG has no alpha channel, so encode from an RGB8 view.
            Format::Jpeg => {
                let encoder = JpegEncoder::new(&mut writer);
                img.to_rgb8()
                    .write_with_encoder(encoder)
                    .map_err(|e| Error::WriteFailed(e.to_string()))?;
            }
            Format::Png => {
                img.write_to(&mut writer, ImageFormat::Png)
                    .map_err(|e| Error::WriteFailed(e.to_string()))?;
            }
        }
        writer.flush().map_err(|e| Error::WriteFailed(e.to_string()))?;

        std::path::absolute(&dest).map_err(|e| Error::WriteFailed(e.to_string()))
    }
}
