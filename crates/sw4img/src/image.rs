//! Whole-image decoding.
//!
//! An [`Image`] is built in one pass: the header is decoded, its codes are
//! resolved through the lookup tables, then every patch is decoded, oriented
//! and summarized in file order. Any failure discards the partial result.

use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::cursor::ByteCursor;
use crate::error::Result;
use crate::header::parse_header;
use crate::patch::{decode_patches, Patch};
use crate::stats::Statistics;
use crate::tables::{Mode, Plane, Precision};

/// Whether an image is a vertical cross-section or a horizontal map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    CrossSection,
    Map,
}

/// A decoded image file: header metadata and its patches in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image {
    /// Path the image was read from, if any.
    pub filename: Option<String>,
    /// Patch count declared by the header; equals `patches.len()`.
    pub number_of_patches: usize,
    pub precision: Precision,
    pub plane: Plane,
    /// Position of the slice along the plane's axis.
    pub coordinate: f64,
    /// Recorded quantity; `None` until a header has been decoded.
    pub mode: Option<Mode>,
    /// Simulation step, taken from the file name.
    pub cycle: i64,
    /// Simulated time, taken from the header.
    pub time: f64,
    pub grid_info: i32,
    pub creation_time: String,
    pub patches: Vec<Patch>,
}

impl Image {
    /// Maps are slices orthogonal to Z; everything else is a cross-section.
    pub fn kind(&self) -> ImageKind {
        match self.plane {
            Plane::Z => ImageKind::Map,
            Plane::X | Plane::Y => ImageKind::CrossSection,
        }
    }

    /// Name of the recorded quantity, e.g. `"ux"`.
    pub fn mode_name(&self) -> Option<&'static str> {
        self.mode.map(|m| m.name)
    }

    /// Physical unit of the samples, e.g. `"m/s"`.
    pub fn unit(&self) -> Option<&'static str> {
        self.mode.map(|m| m.unit)
    }

    /// Statistics over the samples of every patch.
    pub fn statistics(&self) -> Statistics {
        Statistics::from_samples(
            self.patches
                .iter()
                .flat_map(|p| p.data.samples().iter_f64()),
        )
    }
}

/// Decode an image held entirely in memory.
///
/// `filename` and `cycle` are left at their defaults; they come from the file
/// name, not the data.
pub fn decode_image(data: &[u8]) -> Result<Image> {
    let mut cursor = ByteCursor::new(data);
    let header = parse_header(&mut cursor)?;

    let precision = Precision::from_code(header.precision)?;
    let plane = Plane::from_code(header.plane)?;
    let mode = Mode::from_code(header.mode)?;
    let count = header.patch_count()?;
    debug!(
        "header: {count} patches, {} byte samples, plane {plane}, mode {mode}, t={}",
        precision.width(),
        header.time
    );

    let patches: Vec<Patch> = decode_patches(&mut cursor, precision, count)?
        .into_iter()
        .enumerate()
        .map(|(number, raw)| Patch::from_raw(number, raw, plane))
        .collect();

    if cursor.remaining() > 0 {
        debug!(
            "{} trailing bytes after {} patches ignored",
            cursor.remaining(),
            count
        );
    }

    Ok(Image {
        filename: None,
        number_of_patches: count,
        precision,
        plane,
        coordinate: header.coordinate,
        mode: Some(mode),
        cycle: 0,
        time: header.time,
        grid_info: header.grid_info,
        creation_time: String::from(header.creation_time()),
        patches,
    })
}

#[cfg(feature = "std")]
pub use self::source::{read_image, read_image_with, ImageSource};

#[cfg(feature = "std")]
mod source {
    use std::path::{Path, PathBuf};

    use log::{debug, info};

    use super::{decode_image, Image};
    use crate::error::Result;
    use crate::filename::{FileNameParser, Sw4FileNames};

    /// Where [`read_image`] gets its image from.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ImageSource {
        /// An image file on disk.
        Path(PathBuf),
        /// No file: a one-patch image of random samples.
        Random,
        /// No file: an image with no patches and default metadata.
        Empty,
    }

    impl From<PathBuf> for ImageSource {
        fn from(path: PathBuf) -> Self {
            ImageSource::Path(path)
        }
    }

    impl From<&Path> for ImageSource {
        fn from(path: &Path) -> Self {
            ImageSource::Path(path.to_path_buf())
        }
    }

    impl From<&str> for ImageSource {
        fn from(path: &str) -> Self {
            ImageSource::Path(PathBuf::from(path))
        }
    }

    /// Read an image, interpreting file names with [`Sw4FileNames`].
    pub fn read_image(source: impl Into<ImageSource>) -> Result<Image> {
        read_image_with(source, &Sw4FileNames)
    }

    /// Read an image, interpreting file names with `names`.
    ///
    /// Files that are not in the native format are not opened; the returned
    /// image carries only what the file name provides.
    pub fn read_image_with(
        source: impl Into<ImageSource>,
        names: &dyn FileNameParser,
    ) -> Result<Image> {
        let path = match source.into() {
            ImageSource::Random => return Ok(Image::random()),
            ImageSource::Empty => return Ok(Image::default()),
            ImageSource::Path(path) => path,
        };

        let info = names.parse(&path)?;
        let filename = Some(path.display().to_string());
        if !info.is_native {
            info!("{}: not a native image, header not read", path.display());
            return Ok(Image {
                filename,
                cycle: info.cycle,
                ..Image::default()
            });
        }

        let data = std::fs::read(&path)?;
        let image = decode_image(&data)?;
        debug!(
            "{}: {} patches decoded at cycle {}",
            path.display(),
            image.patches.len(),
            info.cycle
        );
        Ok(Image {
            filename,
            cycle: info.cycle,
            ..image
        })
    }
}
