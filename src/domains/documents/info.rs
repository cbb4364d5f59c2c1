//! Descriptions of the served documents.

use std::fmt;

/// What a served document is, for use in agent-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Lowercase name used mid-sentence, e.g. "swagger definition file".
    pub label: &'static str,

    /// What the file is expected to contain, completing
    /// "This file should contain ...".
    pub purpose: &'static str,
}

/// The properties item post-generation workflow instructions.
pub const WORKFLOW_DOCUMENT: DocumentInfo = DocumentInfo {
    label: "properties workflow file",
    purpose: "the step-by-step instructions for completing a properties-based Fabric item implementation",
};

/// The Swagger definition of the Fabric artifact.
pub const SCHEMA_DOCUMENT: DocumentInfo = DocumentInfo {
    label: "swagger definition file",
    purpose: "the Swagger API specification for Fabric artifacts",
};

impl DocumentInfo {
    /// The label with its first letter capitalized, for headlines.
    pub fn title(&self) -> String {
        let mut chars = self.label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for DocumentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
