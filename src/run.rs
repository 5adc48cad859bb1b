use std::fs;
use std::io;

use const_format::formatcp;
use thiserror::Error;
use tracing::info;

use crate::cli::Opts;
use crate::document::ResolvedDocument;
use crate::error::ProcessError;
use crate::pdf::{Chrome, PdfError};
use crate::processor::{self, Conversion};
use crate::rates::ApiLayer;
use crate::request::RawDocumentRequest;
use crate::templates;

const BANNER: &str = formatcp!("[ billgen v{} ]", env!("CARGO_PKG_VERSION"));

pub async fn run(
    opts: &Opts,
    request: &RawDocumentRequest,
) -> Result<(), RunError> {
    let provider;
    let conversion = if opts.dry_run {
        Conversion::DryRun
    } else {
        provider =
            ApiLayer::new(opts.api_key.clone()).map_err(ProcessError::from)?;
        Conversion::Enabled(&provider)
    };

    let doc = processor::process(request, conversion).await?;

    if opts.log {
        println!("{} Processed document:\n", BANNER);
        println!("{}\n", serde_lexpr::to_string(&doc)?);
    }

    if opts.dry_run {
        println!(
            "{} Dry run successful, options are valid. \
             (Note: a dry run does not apply currency conversion)",
            BANNER
        );
        return Ok(());
    }

    write_document(opts, &doc).await
}

async fn write_document(
    opts: &Opts,
    doc: &ResolvedDocument,
) -> Result<(), RunError> {
    let html = templates::render(doc)?;
    let path = opts.out_dir.join(&doc.path);

    if opts.html {
        let path = path.with_extension("html");
        fs::write(&path, html)?;
        println!("{} Document written to {}", BANNER, path.display());
        return Ok(());
    }

    let chrome = Chrome::discover(opts.chrome.as_deref())?;
    chrome.print(&html, &path).await?;
    info!(path = %path.display(), "document exported");
    println!("{} Document exported successfully to {}", BANNER, path.display());
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("IO Error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("Error encoding document: {source}")]
    Format {
        #[from]
        source: serde_lexpr::Error,
    },

    #[error("Error rendering document: {source}")]
    Template {
        #[from]
        source: askama::Error,
    },

    #[error("{source}")]
    Process {
        #[from]
        source: ProcessError,
    },

    #[error("{source}")]
    Pdf {
        #[from]
        source: PdfError,
    },
}
