//! DOM rewriting for template fragments
//!
//! Parses a companion template, finds the root `<template>` element, and
//! rewrites its content in place: stylesheet text is prepended as `<style>`
//! elements, every link loses its href, and the inner markup is serialized
//! back out.

use anyhow::{Context, Result};
use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use super::stylesheet::style_marker;

/// Locate the template content root in a parsed document.
///
/// The HTML parser keeps `<template>` children in a separate contents
/// fragment hanging off the element; mutation and serialization must go
/// through that fragment, not the element's own child list.
pub(crate) fn template_content_root(document: &NodeRef) -> Option<NodeRef> {
    let template = document.select("template").ok()?.next()?;
    let content = template
        .template_contents
        .clone()
        .unwrap_or_else(|| template.as_node().clone());
    Some(content)
}

/// Collect every link element under the content root, in document order.
///
/// Must collect before rewriting because the rewrite mutates the tree
/// while the links are being visited.
pub(crate) fn collect_links(content_root: &NodeRef) -> Vec<NodeDataRef<ElementData>> {
    match content_root.select("link") {
        Ok(links) => links.collect(),
        // The selector is static and always parses
        Err(()) => Vec::new(),
    }
}

/// Rewrite the template content in `html` and serialize it back to markup.
///
/// `styles` is aligned with the link order of [`collect_links`]: slot `i`
/// carries the stylesheet text for link `i`, if any. Every link loses its
/// href; each stylesheet text is prepended to the content root as a
/// `<style>` element. Returns `None` when the document has no root
/// `<template>` or the rewritten content serializes to nothing.
pub(crate) fn apply_stylesheets(html: &str, styles: &[Option<String>]) -> Option<String> {
    let document = kuchiki::parse_html().one(html);
    let content_root = template_content_root(&document)?;
    let links = collect_links(&content_root);

    for (index, link) in links.iter().enumerate() {
        // Hrefs never survive into collector output, inlined or not
        link.attributes.borrow_mut().remove("href");

        if let Some(Some(text)) = styles.get(index) {
            inject_style(&content_root, index, text);
        }
    }

    match serialize_content(&content_root) {
        Ok(inner) if inner.is_empty() => None,
        Ok(inner) => Some(inner),
        Err(err) => {
            log::error!("Failed to serialize rewritten template content: {err:#}");
            None
        }
    }
}

/// Prepend an empty marked style element, re-find it through the tree,
/// fill it with the stylesheet text, then drop the marker.
fn inject_style(content_root: &NodeRef, index: usize, text: &str) {
    let marker = style_marker(index);

    // The snippet parse wraps the style element in a full document shell,
    // so pull the element itself out before inserting it.
    let snippet = kuchiki::parse_html().one(format!("<style id=\"{marker}\"></style>"));
    let Some(style) = snippet.select("style").ok().and_then(|mut styles| styles.next()) else {
        return;
    };
    let style_node = style.as_node().clone();
    style_node.detach();
    content_root.prepend(style_node);

    let inserted = content_root
        .select(&format!("#{marker}"))
        .ok()
        .and_then(|mut found| found.next());
    let Some(inserted) = inserted else {
        log::warn!("Inserted style marker #{marker} vanished during rewrite");
        return;
    };
    inserted.as_node().append(NodeRef::new_text(text));
    inserted.attributes.borrow_mut().remove("id");
}

/// Serialize the children of the content root, not the root itself.
fn serialize_content(content_root: &NodeRef) -> Result<String> {
    let mut bytes = Vec::new();
    for child in content_root.children() {
        child
            .serialize(&mut bytes)
            .context("Failed to serialize template content")?;
    }
    String::from_utf8(bytes).context("Serialized template content is not valid UTF-8")
}
