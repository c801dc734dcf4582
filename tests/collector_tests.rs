//! End-to-end tests running the collector against files on disk

use std::path::PathBuf;

use proptest::prelude::*;
use template_inlay::{CollectorConfig, TemplateCollector, collect_head_tags, select_candidates};

mod common;

#[tokio::test]
async fn test_end_to_end_single_component() -> anyhow::Result<()> {
    common::init_logging();
    let root = common::create_build_root()?;
    let entry = common::create_component(root.path(), "comp", "index.js")?;
    common::write_template(&entry, &common::template_with_link("style.css"))?;
    common::write_stylesheet(&entry, "style.css", ".x{display:none}")?;

    let config = CollectorConfig::builder().test(r"index\.js$").build()?;
    let tags = TemplateCollector::new(config).collect(&[entry]).await;

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].id, "template-index");
    assert!(
        tags[0].html.contains("<style>.x{display:none}</style>"),
        "got: {}",
        tags[0].html
    );
    assert!(!tags[0].html.contains("href"));
    assert!(
        tags[0]
            .to_html()
            .starts_with("<template id=\"template-index\">")
    );
    Ok(())
}

#[tokio::test]
async fn test_non_matching_files_are_ignored() -> anyhow::Result<()> {
    let root = common::create_build_root()?;
    let entry = common::create_component(root.path(), "comp", "main.js")?;
    common::write_template(&entry, "<template><p>x</p></template>")?;

    let config = CollectorConfig::builder().test(r"index\.js$").build()?;
    let tags = TemplateCollector::new(config).collect(&[entry]).await;

    assert!(tags.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_entry_without_template_is_dropped() -> anyhow::Result<()> {
    let root = common::create_build_root()?;
    let entry = common::create_component(root.path(), "comp", "index.js")?;

    let config = CollectorConfig::builder().test(r"index\.js$").build()?;
    let tags = TemplateCollector::new(config).collect(&[entry]).await;

    assert!(tags.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_multiple_components_keep_input_order() -> anyhow::Result<()> {
    let root = common::create_build_root()?;
    let widget = common::create_component(root.path(), "a", "widget.js")?;
    common::write_template(&widget, "<template><p>widget</p></template>")?;
    let panel = common::create_component(root.path(), "b", "panel.js")?;
    common::write_template(&panel, "<template><p>panel</p></template>")?;

    let config = CollectorConfig::builder().test(r"\.js$").build()?;
    let tags = collect_head_tags(&[widget, panel], config).await;

    let ids: Vec<&str> = tags.iter().map(|tag| tag.id.as_str()).collect();
    assert_eq!(ids, ["template-widget", "template-panel"]);
    Ok(())
}

#[tokio::test]
async fn test_dotted_relative_href_resolves_on_disk() -> anyhow::Result<()> {
    let root = common::create_build_root()?;
    let entry = common::create_component(root.path(), "comp", "index.js")?;
    common::write_template(&entry, &common::template_with_link("./theme.css"))?;
    common::write_stylesheet(&entry, "theme.css", ".t { color: red; }")?;

    let config = CollectorConfig::builder().test(r"index\.js$").build()?;
    let tags = TemplateCollector::new(config).collect(&[entry]).await;

    assert_eq!(tags.len(), 1);
    assert!(
        tags[0].html.contains("<style>.t { color: red; }</style>"),
        "got: {}",
        tags[0].html
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_local_stylesheet_keeps_bare_link() -> anyhow::Result<()> {
    common::init_logging();
    let root = common::create_build_root()?;
    let entry = common::create_component(root.path(), "comp", "index.js")?;
    common::write_template(&entry, &common::template_with_link("ghost.css"))?;

    let config = CollectorConfig::builder().test(r"index\.js$").build()?;
    let tags = TemplateCollector::new(config).collect(&[entry]).await;

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].html, "<link>");
    Ok(())
}

proptest! {
    #[test]
    fn test_candidates_always_target_companion_templates(
        paths in proptest::collection::vec(r"[a-z]{1,8}(/[a-z]{1,8}){0,3}(\.js)?", 0..20)
    ) {
        let config = CollectorConfig::builder()
            .test(r"\.js$")
            .build()
            .expect("valid pattern");
        let files: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();

        let candidates = select_candidates(&files, config.test_compiled());

        let matched = files
            .iter()
            .filter(|path| config.test_compiled().is_match(&path.to_string_lossy()))
            .count();
        prop_assert_eq!(candidates.len(), matched);
        for candidate in &candidates {
            prop_assert!(candidate.template_path.ends_with("index.html"));
            prop_assert!(!candidate.name.is_empty());
            prop_assert!(!candidate.name.contains('/'));
        }
    }
}
