//! Markdown preprocessing for the documentation site.
//!
//! Independent of the MCP server: the site pipeline calls
//! [`rewrite_callouts`] once per page, or pipes pages through the
//! `callout_filter` binary.

mod callouts;

pub use callouts::{CALLOUT_RULES, TITLE_SUFFIXES, rewrite_callouts};

use std::io::{Read, Write};

use crate::core::Result;

/// Read a whole page from `reader` and write the rewritten page to `writer`.
pub fn filter_stream<R: Read, W: Write>(mut reader: R, mut writer: W) -> Result<()> {
    let mut page = String::new();
    reader.read_to_string(&mut page)?;

    writer.write_all(rewrite_callouts(&page).as_bytes())?;
    writer.flush()?;
    Ok(())
}
