//! Shared constants for template discovery and head-tag naming.
//!
//! These values are part of the collector's contract with host bundlers:
//! changing them changes which files are read and which element ids hosts
//! must expect in the injected output.

/// File name of the companion template looked up next to every selected
/// entry file.
///
/// A component under `src/widget/` is expected to keep its markup in
/// `src/widget/index.html`; there is no configuration knob for this.
pub const TEMPLATE_FILE_NAME: &str = "index.html";

/// Prefix for the ids of emitted head tags.
///
/// An entry file named `card.js` produces a tag with id `template-card`.
/// Hosts use these ids to look the fragments up from the document head at
/// runtime, so the prefix is fixed rather than configurable.
pub const TEMPLATE_ID_PREFIX: &str = "template-";

/// Prefix for the transient ids that mark freshly inserted style elements
/// while a template is being rewritten.
///
/// Markers never survive into collector output; they exist only so the
/// rewrite step can find the style element it just inserted.
pub const STYLE_MARKER_PREFIX: &str = "inlay-style-";
