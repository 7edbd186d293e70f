use anyhow::{Context, Result};
use clap::Parser;
use pdf_jpeg_merge::{MergeOptions, PageSize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jpeg2pdf",
    about = "Merge JPEG images into a single PDF, one image per A4 page",
    version
)]
struct Cli {
    /// Path to the folder containing JPEG files (scanned recursively)
    #[arg(long)]
    folder: Option<PathBuf>,

    /// Comma-separated list of JPEG filenames
    #[arg(long)]
    files: Option<String>,

    /// Output PDF filename [default: merged_pdf.pdf]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load options from a JSON file; flags given on the command line win
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    async fn into_options(self) -> Result<MergeOptions> {
        let mut options = match &self.config {
            Some(path) => MergeOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => MergeOptions::default(),
        };

        if self.folder.is_some() {
            options.folder = self.folder;
        }
        if self.files.is_some() {
            options.files = self.files;
        }
        if let Some(output) = self.output {
            options.output = output;
        }

        Ok(options)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Cli::parse().into_options().await?;
    options.validate()?;

    let source = options.input_source()?;
    let paths = pdf_jpeg_merge::collect_inputs(&source)
        .await
        .context("Error retrieving JPEG files")?;

    // Assembly failures are reported but do not change the exit status
    match pdf_jpeg_merge::generate_pdf(&paths, PageSize::A4, &options.output).await {
        Ok(report) => println!(
            "JPEGs converted to PDF successfully: {} ({} pages)",
            report.output.display(),
            report.pages.len()
        ),
        Err(e) => log::error!("Error converting JPEGs to PDF: {}", e),
    }

    Ok(())
}
