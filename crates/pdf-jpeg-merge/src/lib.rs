//! Merge JPEG images into a single PDF, one image per page.
//!
//! The pipeline is linear:
//! 1. Collect input paths (recursive folder scan or explicit list), sorted
//! 2. Decode each JPEG and read its pixel dimensions
//! 3. Fit the image onto a fixed page (never upscaled, centered)
//! 4. Serialize the whole document once, at the end

mod collect;
mod constants;
mod jpeg;
mod layout;
mod options;
mod pdf;
mod types;

pub use collect::{collect_from_folder, collect_from_list, collect_inputs};
pub use constants::*;
pub use jpeg::read_dimensions;
pub use layout::{PageLayout, compute_layout};
pub use options::*;
pub use pdf::{MergeReport, PlacedPage, build_document, generate_pdf};
pub use types::*;
