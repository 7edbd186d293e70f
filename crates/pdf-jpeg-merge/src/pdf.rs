//! PDF assembly
//!
//! Pages are composed in memory in input order. The document is serialized
//! only after every image was placed, and written through a staging file so
//! a failed run never leaves a half-written PDF at the output path.

use crate::constants::{DOCUMENT_TITLE, IMAGE_DPI, STAGING_SUFFIX};
use crate::jpeg::DecodedJpeg;
use crate::layout::{PageLayout, compute_layout};
use crate::types::*;
use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectTransform};
use std::path::{Path, PathBuf};

/// One composed page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPage {
    pub source: PathBuf,
    pub dimensions: Dimensions,
    pub layout: PageLayout,
}

/// Result of a successful merge
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub output: PathBuf,
    pub bytes_written: usize,
    /// Pages in document order
    pub pages: Vec<PlacedPage>,
}

/// Compose the document and write it to `output_path`
pub async fn generate_pdf(
    paths: &[PathBuf],
    page_size: PageSize,
    output_path: impl AsRef<Path>,
) -> Result<MergeReport> {
    let paths = paths.to_vec();
    let output_path = output_path.as_ref().to_owned();

    if paths.is_empty() {
        log::warn!("No JPEG files to merge, writing an empty document");
    }

    let (bytes, pages) =
        tokio::task::spawn_blocking(move || build_document(&paths, page_size)).await??;

    write_output(&output_path, &bytes).await?;
    log::info!(
        "Wrote {} pages ({} bytes) to {}",
        pages.len(),
        bytes.len(),
        output_path.display()
    );

    Ok(MergeReport {
        output: output_path,
        bytes_written: bytes.len(),
        pages,
    })
}

/// Compose one page per image and serialize the document.
///
/// Stops at the first image that cannot be decoded; the error names the
/// offending path.
pub fn build_document(
    paths: &[PathBuf],
    page_size: PageSize,
) -> Result<(Vec<u8>, Vec<PlacedPage>)> {
    let mut doc = PdfDocument::new(DOCUMENT_TITLE);
    let mut placed = Vec::with_capacity(paths.len());

    let page_width = Mm::from(Pt(page_size.width_pt));
    let page_height = Mm::from(Pt(page_size.height_pt));

    for path in paths {
        let image = DecodedJpeg::open(path).map_err(|e| MergeError::conversion(path, e))?;
        let dimensions = image.dimensions;
        let layout = compute_layout(dimensions, page_size);

        log::debug!(
            "Placing {} ({}x{}) at ({:.2}, {:.2}) scale {:.4}",
            path.display(),
            dimensions.width,
            dimensions.height,
            layout.offset_x,
            layout.offset_y,
            layout.scale
        );

        let xobject_id = doc.add_image(&image.into_raw_image());
        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: image_transform(&layout),
        }];
        doc.pages.push(PdfPage::new(page_width, page_height, ops));

        placed.push(PlacedPage {
            source: path.clone(),
            dimensions,
            layout,
        });
    }

    // Embed images at their source resolution, no resampling
    let save_options = PdfSaveOptions {
        image_optimization: None,
        ..Default::default()
    };
    let mut warnings = Vec::new();
    let bytes = doc.save(&save_options, &mut warnings);
    if !warnings.is_empty() {
        log::debug!("PDF serialization produced {} warnings", warnings.len());
    }

    Ok((bytes, placed))
}

/// Position and scale of the image XObject on its page
fn image_transform(layout: &PageLayout) -> XObjectTransform {
    XObjectTransform {
        translate_x: Some(Pt(layout.offset_x)),
        translate_y: Some(Pt(layout.offset_y)),
        rotate: None,
        scale_x: Some(layout.scale),
        scale_y: Some(layout.scale),
        dpi: Some(IMAGE_DPI),
    }
}

/// Write `bytes` to a sibling staging file, then rename it into place
async fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let staging = staging_path(path);
    let write_error = |source| MergeError::Write {
        path: path.to_owned(),
        source,
    };

    if let Err(e) = tokio::fs::write(&staging, bytes).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(write_error(e));
    }
    if let Err(e) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(write_error(e));
    }

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_owned();
    name.push(STAGING_SUFFIX);
    path.with_file_name(name)
}
