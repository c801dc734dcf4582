//! Head tags emitted for a host document
//!
//! The collector's final output is a list of head tags: id/html pairs the
//! host injects into its page so component templates can be looked up
//! from the document head at runtime.

use serde::{Deserialize, Serialize};

use crate::constants::TEMPLATE_ID_PREFIX;

/// One collected template fragment, ready for head injection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Lookup id, the fixed prefix followed by the candidate name.
    ///
    /// Uniqueness follows from candidate names; hosts that feed several
    /// entry files with the same stem get several tags with the same id.
    pub id: String,
    /// Rewritten inner markup of the component's template.
    pub html: String,
}

impl HeadTag {
    /// Build the tag for candidate `name` carrying the rewritten `html`.
    #[must_use]
    pub fn new(name: &str, html: String) -> Self {
        Self {
            id: format!("{TEMPLATE_ID_PREFIX}{name}"),
            html,
        }
    }

    /// Render the tag as a non-rendering `<template>` element for a
    /// document head.
    ///
    /// The id is attribute-escaped; the inner markup is emitted verbatim
    /// because it already came out of an HTML serializer.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<template id=\"{}\">{}</template>",
            html_escape::encode_double_quoted_attribute(&self.id),
            self.html
        )
    }
}
