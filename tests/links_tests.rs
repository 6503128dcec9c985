mod common;

use common::fixtures::*;
use common::pdf_assertions::{LinkKind, internal_targets};
use common::{GeneratedPdf, TestResult};
use lootpixel::{
    InMemoryLinkGeometry, LinkOrigin, LinkTarget, Orientation, PageCategory, SkipReason,
};
use std::sync::Arc;

/// cover, tab, weekly_boxed for product 1.
fn three_page_tree() -> AssetTree {
    let tree = AssetTree::new();
    tree.add(1, Orientation::Portrait, PageCategory::Cover, None, COVER_W);
    tree.add(1, Orientation::Portrait, PageCategory::Tab, Some("minimal"), TAB_W);
    tree.add(1, Orientation::Portrait, PageCategory::Weekly, Some("boxed"), WEEKLY_W);
    tree
}

#[test]
fn test_template_page_link_becomes_goto() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = three_page_tree();
    let links = InMemoryLinkGeometry::new();
    links.add_pdf_link(template_link(3, "page:2"))?;

    let output = tree.output("goto.pdf");
    let report = tree.planner(Arc::new(links)).build(&portrait_config(1), &output)?;

    assert_eq!(report.links.len(), 1);
    assert_eq!(report.links[0].origin, LinkOrigin::Template);
    assert_eq!(report.links[0].target, LinkTarget::Page(1));

    let pdf = GeneratedPdf::open(&output)?;
    let found = pdf.links();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].page_index, 2);
    assert_eq!(found[0].kind, LinkKind::Page(1));
    // Top-left (4, 4, 20x10) on an 80pt page.
    assert_eq!(found[0].rect, [4.0, 66.0, 24.0, 76.0]);
    Ok(())
}

#[test]
fn test_template_uri_link() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = three_page_tree();
    let links = InMemoryLinkGeometry::new();
    links.add_pdf_link(template_link(1, "https://lootpixel.example/help"))?;

    let output = tree.output("uri.pdf");
    tree.planner(Arc::new(links)).build(&portrait_config(1), &output)?;

    let found = GeneratedPdf::open(&output)?.links();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].page_index, 0);
    assert_eq!(
        found[0].kind,
        LinkKind::Uri("https://lootpixel.example/help".to_string())
    );
    Ok(())
}

#[test]
fn test_link_on_page_after_last_is_dropped() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = three_page_tree();
    let links = InMemoryLinkGeometry::new();
    links.add_pdf_link(template_link(4, "page:1"))?;
    links.add_pdf_link(template_link(2, "page:1"))?;

    let output = tree.output("dropped.pdf");
    let report = tree.planner(Arc::new(links)).build(&portrait_config(1), &output)?;

    assert_eq!(report.links.len(), 1);
    assert_eq!(report.skipped_links.len(), 1);
    assert_eq!(report.skipped_links[0].page, 4);
    assert_eq!(report.skipped_links[0].reason, SkipReason::PageOutOfRange);

    let found = GeneratedPdf::open(&output)?.links();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].page_index, 1);
    Ok(())
}

#[test]
fn test_malformed_and_empty_destinations_are_skipped() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = three_page_tree();
    let links = InMemoryLinkGeometry::new();
    links.add_pdf_link(template_link(1, "page:two"))?;
    links.add_pdf_link(template_link(1, ""))?;
    links.add_pdf_link(template_link(1, "page:7"))?;
    links.add_pdf_link(template_link(1, "page:3"))?;

    let output = tree.output("malformed.pdf");
    let report = tree.planner(Arc::new(links)).build(&portrait_config(1), &output)?;

    let reasons: Vec<_> = report.skipped_links.iter().map(|s| s.reason).collect();
    assert_eq!(
        reasons,
        vec![
            SkipReason::MalformedDestination,
            SkipReason::EmptyDestination,
            SkipReason::TargetOutOfRange
        ]
    );
    assert_eq!(report.internal_targets(), vec![2]);
    assert_eq!(internal_targets(&GeneratedPdf::open(&output)?.doc), vec![2]);
    Ok(())
}

#[test]
fn test_template_links_only_for_selected_weekly_layout() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = three_page_tree();
    let links = InMemoryLinkGeometry::new();
    let mut other = template_link(1, "page:3");
    other.layout_name = "lined".to_string();
    links.add_pdf_link(other)?;
    let mut daily = template_link(1, "page:3");
    daily.layout_type = "daily".to_string();
    links.add_pdf_link(daily)?;

    let output = tree.output("other-layout.pdf");
    let report = tree.planner(Arc::new(links)).build(&portrait_config(1), &output)?;
    assert!(report.links.is_empty());
    assert!(GeneratedPdf::open(&output)?.links().is_empty());
    Ok(())
}

#[test]
fn test_mixed_case_anchor_matches_month_key() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = three_page_tree();
    let links = InMemoryLinkGeometry::new();
    links.add_svg_anchor(text_anchor(1, "weekly", "boxed", "January"))?;
    links.add_svg_anchor(text_anchor(1, "weekly", "boxed", "january"))?;

    let output = tree.output("january.pdf");
    let report = tree.planner(Arc::new(links)).build(&portrait_config(1), &output)?;

    assert_eq!(report.links.len(), 2);
    assert_eq!(report.links[0].target, report.links[1].target);
    assert!(report.links.iter().all(|l| l.origin == LinkOrigin::Anchor && l.page_index == 2));
    // No monthly pages exist, so both fall back to the cover and are reported once.
    assert_eq!(report.unresolved_destinations, vec!["january"]);

    let found = GeneratedPdf::open(&output)?.links();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|l| l.kind == LinkKind::Page(0)));
    Ok(())
}

#[test]
fn test_anchor_links_resolve_to_emitted_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = AssetTree::new();
    tree.add_full_set(1, Orientation::Portrait);
    let links = InMemoryLinkGeometry::new();
    links.add_svg_anchor(text_anchor(1, "weekly", "boxed", "Stickers"))?;
    links.add_svg_anchor(text_anchor(1, "weekly", "boxed", "Daily"))?;
    links.add_svg_anchor(text_anchor(1, "daily", "hourly", "Weekly"))?;
    links.add_svg_anchor(text_anchor(1, "extra", "icons", "Home"))?;

    let config = portrait_config(1).with_daily_layout("hourly");
    let output = tree.output("anchors.pdf");
    let report = tree.planner(Arc::new(links)).build(&config, &output)?;

    // cover, tab, weekly_boxed, daily_hourly, extra_icons, extra_stickers
    let got: Vec<(usize, LinkTarget)> = report
        .links
        .iter()
        .map(|l| (l.page_index, l.target.clone()))
        .collect();
    assert_eq!(
        got,
        vec![
            (2, LinkTarget::Page(5)),
            (2, LinkTarget::Page(3)),
            (3, LinkTarget::Page(2)),
            (4, LinkTarget::Page(0)),
        ]
    );
    assert!(report.unresolved_destinations.is_empty());

    let pdf = GeneratedPdf::open(&output)?;
    let mut found: Vec<(usize, LinkKind)> = pdf
        .links()
        .into_iter()
        .map(|l| (l.page_index, l.kind))
        .collect();
    found.sort_by_key(|(page, kind)| (*page, format!("{:?}", kind)));
    assert_eq!(
        found,
        vec![
            (2, LinkKind::Page(3)),
            (2, LinkKind::Page(5)),
            (3, LinkKind::Page(2)),
            (4, LinkKind::Page(0)),
        ]
    );
    Ok(())
}

#[test]
fn test_weekly_anchors_use_compositor_placeholders() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = three_page_tree();
    let links = InMemoryLinkGeometry::new();
    links.add_svg_anchor(text_anchor(1, "weekly", "boxed", "home"))?;
    links.add_svg_anchor(text_anchor(1, "weekly", "boxed", "notes"))?;

    let output = tree.output("placeholders.pdf");
    tree.planner(Arc::new(links)).build(&portrait_config(1), &output)?;

    let found = GeneratedPdf::open(&output)?.links();
    // One placeholder per weekly anchor; only the known name is targeted.
    assert_eq!(found.len(), 2);
    let home = found.iter().find(|l| l.kind == LinkKind::Page(0)).unwrap();
    // Anchor at (2, 30), 4 chars * 10 wide, 20 high, on an 80pt page.
    assert_eq!(home.rect, [2.0, 30.0, 42.0, 50.0]);
    assert!(found.iter().any(|l| l.kind == LinkKind::Untargeted));
    Ok(())
}

#[test]
fn test_daily_none_produces_no_daily_links() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = AssetTree::new();
    tree.add_full_set(1, Orientation::Portrait);
    let links = InMemoryLinkGeometry::new();
    links.add_svg_anchor(text_anchor(1, "daily", "hourly", "home"))?;
    links.add_svg_anchor(text_anchor(1, "daily", "none", "home"))?;
    links.add_svg_anchor(text_anchor(1, "weekly", "boxed", "daily"))?;

    let output = tree.output("no-daily-links.pdf");
    let report = tree
        .planner(Arc::new(links))
        .build(&portrait_config(1).with_daily_layout("none"), &output)?;

    // Only the weekly anchor survives, and it falls back to the cover.
    assert_eq!(report.links.len(), 1);
    assert_eq!(report.links[0].page_index, 2);
    assert_eq!(report.links[0].target, LinkTarget::Page(0));
    assert_eq!(report.unresolved_destinations, vec!["daily"]);
    Ok(())
}

#[test]
fn test_anchors_of_other_products_are_ignored() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = three_page_tree();
    let links = InMemoryLinkGeometry::new();
    links.add_svg_anchor(text_anchor(2, "weekly", "boxed", "home"))?;

    let output = tree.output("other-product.pdf");
    let report = tree.planner(Arc::new(links)).build(&portrait_config(1), &output)?;
    assert!(report.links.is_empty());
    Ok(())
}

#[test]
fn test_all_internal_links_stay_in_range() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = AssetTree::new();
    tree.add(1, Orientation::Portrait, PageCategory::Tab, Some("minimal"), TAB_W);
    tree.add(1, Orientation::Portrait, PageCategory::Weekly, Some("boxed"), WEEKLY_W);

    let links = InMemoryLinkGeometry::new();
    for dest in ["page:0", "page:1", "page:2", "page:3", "page:99", "page:-1"] {
        links.add_pdf_link(template_link(2, dest))?;
    }
    for name in ["home", "cover", "monthly", "March", "weekly", "daily", "icons", "stickers"] {
        links.add_svg_anchor(text_anchor(1, "weekly", "boxed", name))?;
    }

    let output = tree.output("range.pdf");
    let report = tree.planner(Arc::new(links)).build(&portrait_config(1), &output)?;

    let pdf = GeneratedPdf::open(&output)?;
    let targets = internal_targets(&pdf.doc);
    assert_eq!(targets.len(), 2 + 8);
    assert!(targets.iter().all(|t| *t < pdf.page_count()));
    assert!(report.internal_targets().iter().all(|t| *t < report.page_count()));
    Ok(())
}

#[test]
fn test_builds_are_idempotent() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = AssetTree::new();
    tree.add_full_set(1, Orientation::Portrait);
    let links = InMemoryLinkGeometry::new();
    links.add_pdf_link(template_link(3, "page:1"))?;
    links.add_pdf_link(template_link(3, "https://lootpixel.example"))?;
    links.add_svg_anchor(text_anchor(1, "weekly", "boxed", "Icons"))?;
    links.add_svg_anchor(text_anchor(1, "weekly", "boxed", "June"))?;
    let planner = tree.planner(Arc::new(links));
    let config = portrait_config(1).with_daily_layout("hourly");

    let first = planner.build(&config, &tree.output("a.pdf"))?;
    let second = planner.build(&config, &tree.output("b.pdf"))?;

    assert_ne!(first.build_id, second.build_id);
    assert_eq!(first.pages, second.pages);
    assert_eq!(first.links, second.links);
    assert_eq!(first.unresolved_destinations, second.unresolved_destinations);

    let a = GeneratedPdf::open(&tree.output("a.pdf"))?;
    let b = GeneratedPdf::open(&tree.output("b.pdf"))?;
    assert_eq!(a.page_count(), b.page_count());
    let kinds = |pdf: &GeneratedPdf| {
        pdf.links()
            .into_iter()
            .map(|l| (l.page_index, l.kind))
            .collect::<Vec<_>>()
    };
    assert_eq!(kinds(&a), kinds(&b));
    Ok(())
}
