//! Callout rewriting for the documentation site.
//!
//! The registry docs use Terraform-style callouts (`-> `, `~> `, `!> `) and
//! suffix page titles with the object kind. The site generator understands
//! neither, so each page is rewritten before rendering.

/// Callout markers and the admonition opener that replaces each of them.
///
/// Replacement text never contains any marker, so applying the rules in
/// sequence cannot re-match earlier output.
pub const CALLOUT_RULES: [(&str, &str); 3] = [
    ("-> ", "!!! note \"Note\"\n    "),
    ("~> ", "!!! warning \"Note\"\n    "),
    ("!> ", "!!! danger \"Warning\"\n    "),
];

/// Kind suffixes stripped from page titles.
pub const TITLE_SUFFIXES: [&str; 3] = [" (Function)", " (Resource)", " (Data Source)"];

/// Rewrite one page of markdown.
///
/// Every occurrence of a marker is replaced, wherever it appears, and every
/// title suffix is removed. Total: any input yields a new string.
pub fn rewrite_callouts(markdown: &str) -> String {
    let rewritten = CALLOUT_RULES
        .iter()
        .fold(markdown.to_string(), |page, (marker, opener)| {
            page.replace(marker, opener)
        });

    TITLE_SUFFIXES
        .iter()
        .fold(rewritten, |page, suffix| page.replace(suffix, ""))
}
