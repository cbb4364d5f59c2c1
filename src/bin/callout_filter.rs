//! Callout filter entry point.
//!
//! Reads one markdown page on stdin and writes it to stdout with callouts
//! converted to admonitions and title suffixes removed.

use anyhow::{Context, Result};

use itemgen_mcp_server::markdown::filter_stream;

fn main() -> Result<()> {
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    filter_stream(stdin, stdout).context("failed to filter markdown page")?;

    Ok(())
}
