use crate::constants::{A4_HEIGHT_PT, A4_WIDTH_PT};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Please provide either a folder path or a list of JPEG files")]
    Usage,
    #[error("Failed to add image {} to PDF: {source}", .path.display())]
    Conversion {
        path: PathBuf,
        source: Box<MergeError>,
    },
    #[error("Failed to write PDF to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl MergeError {
    /// Attach the offending input path to an error raised while composing a page
    pub(crate) fn conversion(path: impl Into<PathBuf>, source: MergeError) -> Self {
        MergeError::Conversion {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;

/// Natural size of a decoded image, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero (or negative), which no page can hold
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Output page size in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    /// ISO A4 portrait, rounded to whole points
    pub const A4: PageSize = PageSize {
        width_pt: A4_WIDTH_PT,
        height_pt: A4_HEIGHT_PT,
    };

    pub fn new(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}
