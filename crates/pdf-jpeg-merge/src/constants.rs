//! Shared constants for JPEG merging

// =============================================================================
// Page Geometry
// =============================================================================

/// A4 page width in points
pub const A4_WIDTH_PT: f32 = 595.0;

/// A4 page height in points
pub const A4_HEIGHT_PT: f32 = 842.0;

/// Image resolution used when placing pixels on the page.
/// At 72 DPI one pixel maps to one point before scaling.
pub const IMAGE_DPI: f32 = 72.0;

// =============================================================================
// Inputs and Outputs
// =============================================================================

/// File extensions picked up by a folder scan (matched case-sensitively)
pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Separator for the explicit file list
pub const FILE_LIST_SEPARATOR: char = ',';

/// Output file used when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "merged_pdf.pdf";

/// Title written into the PDF document info
pub const DOCUMENT_TITLE: &str = "Merged JPEG images";

/// Suffix appended to the output file name while it is being written
pub const STAGING_SUFFIX: &str = ".partial";
