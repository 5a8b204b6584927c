//! Fetch → parse → traverse.

use std::io::Write;
use std::process::ExitCode;

use spiral_fetch::{FetchError, Fetcher, HttpClient};
use spiral_grid::{Matrix, parse_matrix, spiral};
use tracing::info;

use crate::cli::App;
use crate::error::{Error, Result};
use crate::output::render_grid;

/// A parsed grid together with its spiral order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub matrix: Matrix,
    pub order: Vec<i64>,
}

/// How a [`run`] ended when it did not end in an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    /// The document could not be fetched; a diagnostic has been written.
    FetchFailed,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => ExitCode::SUCCESS,
            Exit::FetchFailed => ExitCode::FAILURE,
        }
    }
}

/// Fetch the document at `url`, parse it and walk it in spiral order.
///
/// Nothing is parsed unless the fetch succeeded, and nothing is returned
/// unless the whole document parsed into a rectangular matrix.
pub async fn traverse_url<C: HttpClient>(fetcher: &Fetcher<C>, url: &str) -> Result<Traversal> {
    let text = fetcher.fetch(url).await?;
    let matrix = parse_matrix(&text)?;
    info!(rows = matrix.rows(), cols = matrix.cols(), "parsed matrix");

    let order = spiral(&matrix);
    Ok(Traversal { matrix, order })
}

/// Run the program for `app`, writing the result to `out` and
/// diagnostics to `diag`.
///
/// Fetch failures are reported on `diag` and turned into
/// [`Exit::FetchFailed`]. Malformed documents are returned as errors.
pub async fn run<C, O, D>(fetcher: &Fetcher<C>, app: &App, out: &mut O, diag: &mut D) -> anyhow::Result<Exit>
where
    C: HttpClient,
    O: Write,
    D: Write,
{
    let traversal = match traverse_url(fetcher, &app.url).await {
        Ok(traversal) => traversal,
        Err(Error::Fetch(e)) => {
            report_fetch_failure(e, diag)?;
            return Ok(Exit::FetchFailed);
        }
        Err(e) => return Err(e.into()),
    };

    if app.grid {
        writeln!(diag, "{}", render_grid(&traversal.matrix))?;
    }
    writeln!(out, "{}", app.format.render(&traversal.order)?)?;
    out.flush()?;

    Ok(Exit::Success)
}

fn report_fetch_failure(e: FetchError, diag: &mut impl Write) -> std::io::Result<()> {
    match e {
        FetchError::Status { status, body } => {
            writeln!(diag, "Server returned non 2xx status - {status}:\n{body}")
        }
        FetchError::Timeout { url, after } => {
            writeln!(diag, "timeout occurred after {after:?} fetching {url}")
        }
        other => writeln!(diag, "{:?}", anyhow::Error::new(other)),
    }
}
