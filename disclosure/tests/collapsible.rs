use disclosure::collapsible::INSTALLED_KEY;
use disclosure::element::Content;
use disclosure::{
    Branch, CollapsibleController, CollapsibleError, ControllerConfig, Display, Document,
    Element, Event, Glyph, MissingContentPolicy, MouseButton, StateSource,
};

fn section(header: &str, label: &str, content: &str) -> [Element; 2] {
    [
        Element::text(label).id(header).class("collapsible"),
        Element::text(format!("{label} body")).id(content),
    ]
}

fn three_sections() -> Document {
    Document::new(
        Element::box_()
            .id("root")
            .children(section("a", "Alpha", "a-body"))
            .children(section("b", "Beta", "b-body"))
            .children(section("c", "Gamma", "c-body")),
    )
}

fn label(doc: &Document, id: &str) -> String {
    doc.get(id).unwrap().text_content()
}

fn inline_display(doc: &Document, id: &str) -> Option<Display> {
    doc.get(id).unwrap().style.display
}

fn assert_consistent(doc: &Document, controller: &CollapsibleController) {
    for binding in controller.bindings() {
        let glyph = Glyph::of_label(&label(doc, &binding.header));
        let display = inline_display(doc, &binding.content);
        assert_eq!(
            display == Some(Display::Block),
            glyph == Some(Glyph::Expanded),
            "header '{}' glyph {:?} vs display {:?}",
            binding.header,
            glyph,
            display
        );
        assert_eq!(glyph, Some(Glyph::for_state(binding.expanded)));
    }
}

// ============================================================================
// Install
// ============================================================================

#[test]
fn test_install_prefixes_collapsed_glyph() {
    let mut doc = three_sections();
    let controller = CollapsibleController::install(&mut doc).unwrap();

    assert_eq!(controller.len(), 3);
    assert_eq!(label(&doc, "a"), "▸ Alpha");
    assert_eq!(label(&doc, "b"), "▸ Beta");
    assert_eq!(label(&doc, "c"), "▸ Gamma");
}

#[test]
fn test_install_binds_in_document_order() {
    let mut doc = three_sections();
    let controller = CollapsibleController::install(&mut doc).unwrap();

    let pairs: Vec<_> = controller
        .bindings()
        .iter()
        .map(|b| (b.header.as_str(), b.content.as_str(), b.expanded))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("a", "a-body", false),
            ("b", "b-body", false),
            ("c", "c-body", false),
        ]
    );
}

#[test]
fn test_install_marks_headers_clickable() {
    let mut doc = three_sections();
    CollapsibleController::install(&mut doc).unwrap();

    let header = doc.get("a").unwrap();
    assert!(header.clickable);
    assert_eq!(header.get_data(INSTALLED_KEY), Some(&"true".to_string()));
    assert!(!doc.get("a-body").unwrap().clickable);
}

#[test]
fn test_install_leaves_content_style_alone() {
    let mut doc = three_sections();
    CollapsibleController::install(&mut doc).unwrap();

    assert_eq!(inline_display(&doc, "a-body"), None);
    assert_eq!(inline_display(&doc, "b-body"), None);
}

#[test]
fn test_install_without_headers_is_noop() {
    let mut doc = Document::new(
        Element::box_()
            .child(Element::text("Plain"))
            .child(Element::text("Text")),
    );
    let before = doc.root().clone();

    let controller = CollapsibleController::install(&mut doc).unwrap();

    assert!(controller.is_empty());
    assert_eq!(doc.root(), &before);
}

#[test]
fn test_install_twice_keeps_single_glyph() {
    let mut doc = three_sections();
    let first = CollapsibleController::install(&mut doc).unwrap();
    let second = CollapsibleController::install(&mut doc).unwrap();

    assert_eq!(first.len(), 3);
    assert!(second.is_empty());
    assert_eq!(label(&doc, "a"), "▸ Alpha");

    let glyphs = label(&doc, "a")
        .chars()
        .filter(|c| Glyph::from_char(*c).is_some())
        .count();
    assert_eq!(glyphs, 1);
}

#[test]
fn test_install_flattens_header_children() {
    let mut doc = Document::new(
        Element::box_()
            .child(
                Element::box_()
                    .id("h")
                    .class("collapsible")
                    .child(Element::text("Read "))
                    .child(Element::text("more")),
            )
            .child(Element::text("Body").id("body")),
    );

    CollapsibleController::install(&mut doc).unwrap();

    let header = doc.get("h").unwrap();
    assert_eq!(header.content, Content::Text("▸ Read more".to_string()));
}

#[test]
fn test_install_custom_classes() {
    let mut doc = Document::new(
        Element::box_()
            .child(Element::text("Question").id("q").class("faq"))
            .child(Element::text("Answer").id("answer"))
            .child(Element::text("Ignored").id("x").class("collapsible"))
            .child(Element::text("Other").id("other")),
    );
    let config = ControllerConfig::new().class("faq").active_class("open");

    let mut controller = CollapsibleController::install_with(&mut doc, config).unwrap();

    assert_eq!(controller.len(), 1);
    assert_eq!(label(&doc, "x"), "Ignored");

    controller.toggle(&mut doc, 0).unwrap();
    let header = doc.get("q").unwrap();
    assert!(header.has_class("open"));
    assert!(!header.has_class("active"));
}

// ============================================================================
// Missing content
// ============================================================================

fn orphan_doc() -> Document {
    Document::new(
        Element::box_()
            .children(section("a", "Alpha", "a-body"))
            .child(Element::text("Orphan").id("orphan").class("collapsible")),
    )
}

#[test]
fn test_missing_content_warn_leaves_header_inert() {
    let mut doc = orphan_doc();
    let controller = CollapsibleController::install(&mut doc).unwrap();

    assert_eq!(controller.len(), 1);
    assert_eq!(controller.position("orphan"), None);
    assert_eq!(label(&doc, "orphan"), "Orphan");
    assert!(!doc.get("orphan").unwrap().clickable);
    assert_eq!(label(&doc, "a"), "▸ Alpha");
}

#[test]
fn test_missing_content_skip() {
    let mut doc = orphan_doc();
    let config = ControllerConfig::new().missing_content(MissingContentPolicy::Skip);
    let controller = CollapsibleController::install_with(&mut doc, config).unwrap();

    assert_eq!(controller.len(), 1);
    assert_eq!(label(&doc, "orphan"), "Orphan");
}

#[test]
fn test_missing_content_fail_leaves_document_untouched() {
    let mut doc = orphan_doc();
    let before = doc.root().clone();
    let config = ControllerConfig::new().missing_content(MissingContentPolicy::Fail);

    let result = CollapsibleController::install_with(&mut doc, config);

    assert_eq!(
        result.unwrap_err(),
        CollapsibleError::MissingContent {
            header: "orphan".to_string()
        }
    );
    assert_eq!(doc.root(), &before);
}

#[test]
fn test_cloned_header_ids_get_one_glyph() {
    let header = Element::text("Details").class("collapsible");
    let body = Element::text("Body");
    let header_id = header.id.clone();
    let mut doc = Document::new(
        Element::box_()
            .child(header.clone())
            .child(body.clone())
            .child(header)
            .child(body),
    );

    let controller = CollapsibleController::install(&mut doc).unwrap();

    assert_eq!(controller.len(), 1);
    assert_eq!(controller.bindings()[0].header, header_id);
    let labels: Vec<_> = doc
        .root()
        .content
        .children()
        .iter()
        .map(Element::text_content)
        .collect();
    assert_eq!(labels, vec!["▸ Details", "Body", "Details", "Body"]);
}

#[test]
fn test_cloned_header_ids_fail_policy() {
    let header = Element::text("Details").id("details").class("collapsible");
    let body = Element::text("Body").id("body");
    let mut doc = Document::new(
        Element::box_()
            .child(header.clone())
            .child(body.clone())
            .child(header)
            .child(body),
    );
    let before = doc.root().clone();
    let config = ControllerConfig::new().missing_content(MissingContentPolicy::Fail);

    let result = CollapsibleController::install_with(&mut doc, config);

    assert_eq!(
        result.unwrap_err(),
        CollapsibleError::DuplicateId {
            id: "details".to_string()
        }
    );
    assert_eq!(doc.root(), &before);
}

// ============================================================================
// Toggling
// ============================================================================

#[test]
fn test_details_scenario() {
    let mut doc = Document::new(
        Element::box_()
            .child(Element::text("Details").id("details").class("collapsible"))
            .child(Element::box_().id("content")),
    );

    let mut controller = CollapsibleController::install(&mut doc).unwrap();
    assert_eq!(label(&doc, "details"), "▸ Details");

    let branch = controller
        .handle_event(&mut doc, &Event::click("details"))
        .unwrap();
    assert_eq!(branch, Some(Branch::Expand));
    assert_eq!(label(&doc, "details"), "▾ Details");
    assert_eq!(inline_display(&doc, "content"), Some(Display::Block));

    let branch = controller
        .handle_event(&mut doc, &Event::click("details"))
        .unwrap();
    assert_eq!(branch, Some(Branch::Collapse));
    assert_eq!(label(&doc, "details"), "▸ Details");
    assert_eq!(inline_display(&doc, "content"), Some(Display::None));
}

#[test]
fn test_details_scenario_inline_style_source() {
    let mut doc = Document::new(
        Element::box_()
            .child(Element::text("Details").id("details").class("collapsible"))
            .child(Element::box_().id("content")),
    );
    let config = ControllerConfig::new().state_source(StateSource::InlineStyle);
    let mut controller = CollapsibleController::install_with(&mut doc, config).unwrap();

    assert_eq!(controller.toggle(&mut doc, 0), Ok(Branch::Expand));
    assert_eq!(label(&doc, "details"), "▾ Details");
    assert_eq!(inline_display(&doc, "content"), Some(Display::Block));

    assert_eq!(controller.toggle(&mut doc, 0), Ok(Branch::Collapse));
    assert_eq!(label(&doc, "details"), "▸ Details");
    assert_eq!(inline_display(&doc, "content"), Some(Display::None));
}

#[test]
fn test_double_click_round_trip() {
    let mut doc = three_sections();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();

    controller.toggle(&mut doc, 1).unwrap();
    let label_before = label(&doc, "b");
    let display_before = inline_display(&doc, "b-body");

    controller.toggle(&mut doc, 1).unwrap();
    controller.toggle(&mut doc, 1).unwrap();

    assert_eq!(label(&doc, "b"), label_before);
    assert_eq!(inline_display(&doc, "b-body"), display_before);
    assert_eq!(controller.is_expanded(1), Some(true));
}

#[test]
fn test_toggle_flips_active_class() {
    let mut doc = three_sections();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();

    controller.toggle(&mut doc, 0).unwrap();
    assert!(doc.get("a").unwrap().has_class("active"));
    assert!(doc.get("a").unwrap().has_class("collapsible"));

    controller.toggle(&mut doc, 0).unwrap();
    assert!(!doc.get("a").unwrap().has_class("active"));
}

#[test]
fn test_headers_are_independent() {
    let mut doc = three_sections();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();
    controller.toggle(&mut doc, 1).unwrap();

    let b_label = label(&doc, "b");
    let b_display = inline_display(&doc, "b-body");
    let c_label = label(&doc, "c");
    let c_display = inline_display(&doc, "c-body");

    for _ in 0..3 {
        controller.toggle(&mut doc, 0).unwrap();
        assert_eq!(label(&doc, "b"), b_label);
        assert_eq!(inline_display(&doc, "b-body"), b_display);
        assert_eq!(label(&doc, "c"), c_label);
        assert_eq!(inline_display(&doc, "c-body"), c_display);
    }
}

#[test]
fn test_glyph_matches_display_after_any_clicks() {
    for source in [StateSource::Logical, StateSource::InlineStyle] {
        let mut doc = three_sections();
        let config = ControllerConfig::new().state_source(source);
        let mut controller = CollapsibleController::install_with(&mut doc, config).unwrap();
        assert_consistent(&doc, &controller);

        // Deterministic but irregular click order
        let mut seed: usize = 7;
        for _ in 0..50 {
            seed = (seed * 31 + 11) % 97;
            controller.toggle(&mut doc, seed % 3).unwrap();
            assert_consistent(&doc, &controller);
        }
    }
}

// ============================================================================
// Pre-styled content
// ============================================================================

fn prestyled_doc() -> Document {
    Document::new(
        Element::box_()
            .child(Element::text("Notes").id("notes").class("collapsible"))
            .child(Element::text("Shown").id("shown").display(Display::Block)),
    )
}

#[test]
fn test_prestyled_block_collapses_first_with_inline_style_source() {
    let mut doc = prestyled_doc();
    let config = ControllerConfig::new().state_source(StateSource::InlineStyle);
    let mut controller = CollapsibleController::install_with(&mut doc, config).unwrap();

    assert_eq!(controller.toggle(&mut doc, 0), Ok(Branch::Collapse));
    assert_eq!(label(&doc, "notes"), "▸ Notes");
    assert_eq!(inline_display(&doc, "shown"), Some(Display::None));
    assert_eq!(controller.is_expanded(0), Some(false));
}

#[test]
fn test_prestyled_block_expands_first_with_logical_source() {
    let mut doc = prestyled_doc();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();

    assert_eq!(controller.toggle(&mut doc, 0), Ok(Branch::Expand));
    assert_eq!(label(&doc, "notes"), "▾ Notes");
    assert_eq!(inline_display(&doc, "shown"), Some(Display::Block));
    assert_eq!(controller.is_expanded(0), Some(true));
}

#[test]
fn test_stylesheet_visible_content_reads_closed_with_inline_style_source() {
    // Visible by default styling only: the inline read sees nothing and expands
    let mut doc = Document::new(
        Element::box_()
            .child(Element::text("Notes").id("notes").class("collapsible"))
            .child(Element::text("Body").id("body")),
    );
    assert!(doc.is_rendered("body"));
    let config = ControllerConfig::new().state_source(StateSource::InlineStyle);
    let mut controller = CollapsibleController::install_with(&mut doc, config).unwrap();

    assert_eq!(controller.toggle(&mut doc, 0), Ok(Branch::Expand));
    assert!(doc.is_rendered("body"));
    assert_eq!(label(&doc, "notes"), "▾ Notes");
}

// ============================================================================
// Event routing
// ============================================================================

#[test]
fn test_handle_event_ignores_non_header_targets() {
    let mut doc = three_sections();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();
    let before = doc.root().clone();

    for target in ["a-body", "root", "missing"] {
        let result = controller.handle_event(&mut doc, &Event::click(target));
        assert_eq!(result, Ok(None));
    }
    assert_eq!(doc.root(), &before);
}

#[test]
fn test_handle_event_ignores_other_buttons_and_events() {
    let mut doc = three_sections();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();

    let right = Event::Click {
        target: Some("a".to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Right,
    };
    let untargeted = Event::Click {
        target: None,
        x: 0,
        y: 0,
        button: MouseButton::Left,
    };
    let resize = Event::Resize {
        width: 80,
        height: 24,
    };

    for event in [right, untargeted, resize] {
        assert_eq!(controller.handle_event(&mut doc, &event), Ok(None));
    }
    assert_eq!(label(&doc, "a"), "▸ Alpha");
}

#[test]
fn test_handle_event_routes_to_clicked_header() {
    let mut doc = three_sections();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();

    controller
        .handle_event(&mut doc, &Event::click("c"))
        .unwrap();

    assert_eq!(controller.is_expanded(0), Some(false));
    assert_eq!(controller.is_expanded(2), Some(true));
    assert_eq!(label(&doc, "c"), "▾ Gamma");
}

#[test]
fn test_handle_event_bubbles_from_header_child() {
    let mut doc = three_sections();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();

    // Host page wraps the label after install
    doc.get_mut("b").unwrap().content =
        Content::Children(vec![Element::text("▸ Beta").id("b-label")]);

    let branch = controller
        .handle_event(&mut doc, &Event::click("b-label"))
        .unwrap();

    assert_eq!(branch, Some(Branch::Expand));
    assert_eq!(controller.is_expanded(1), Some(true));
    assert_eq!(label(&doc, "b"), "▾ Beta");
    assert_eq!(inline_display(&doc, "b-body"), Some(Display::Block));
    assert_eq!(controller.is_expanded(0), Some(false));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_toggle_unknown_binding() {
    let mut doc = three_sections();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();

    assert_eq!(
        controller.toggle(&mut doc, 5),
        Err(CollapsibleError::UnknownBinding { index: 5 })
    );
}

#[test]
fn test_toggle_detached_content() {
    let mut doc = three_sections();
    let mut controller = CollapsibleController::install(&mut doc).unwrap();

    if let Content::Children(children) = &mut doc.root_mut().content {
        children.retain(|child| child.id != "a-body");
    }

    assert_eq!(
        controller.toggle(&mut doc, 0),
        Err(CollapsibleError::Detached {
            id: "a-body".to_string()
        })
    );
    assert_eq!(label(&doc, "a"), "▸ Alpha");
    assert!(!doc.get("a").unwrap().has_class("active"));
}
