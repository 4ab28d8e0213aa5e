//! End-to-end rendering scenarios checked against a real HTML parser

use pagecraft::{
    render, render_with, ElementId, ElementKind, Error, GlobalStylesPatch, Page, RenderOptions,
    StyleKey, StylePatch, StyleValue,
};
use scraper::{Html, Selector};

fn container_children(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("div.container > *").unwrap();
    doc.select(&sel).map(|e| e.value().name().to_string()).collect()
}

#[test]
fn header_then_paragraph_export() {
    let mut page = Page::new();
    let h = page.add_element(ElementKind::Header).id();
    page.update_content(h, "Hello").unwrap();
    page.add_element(ElementKind::Paragraph);

    let html = render(&page);
    assert_eq!(container_children(&html), vec!["h1", "p"]);

    let doc = Html::parse_document(&html);
    let h1: Vec<_> = doc.select(&Selector::parse("h1").unwrap()).collect();
    assert_eq!(h1.len(), 1);
    assert_eq!(h1[0].text().collect::<String>(), "Hello");

    let p: Vec<_> = doc.select(&Selector::parse("p").unwrap()).collect();
    assert_eq!(p.len(), 1);
    assert!(p[0].text().collect::<String>().starts_with("Lorem ipsum"));

    assert_eq!(html.matches("<h1 ").count(), 1);
    assert!(html.find(">Hello</h1>").unwrap() < html.find(">Lorem ipsum").unwrap());
}

#[test]
fn default_button_markup() {
    let mut page = Page::new();
    page.add_element(ElementKind::Button);
    let html = render(&page);
    assert!(html.contains(
        "background-color:#3498db; color:white; font-size:12px; font-weight:bold;"
    ));

    let doc = Html::parse_document(&html);
    let button = doc
        .select(&Selector::parse("div.container > button").unwrap())
        .next()
        .expect("button rendered");
    assert_eq!(button.text().collect::<String>(), "Click Me");
}

#[test]
fn every_type_renders_one_top_level_block() {
    let mut page = Page::new();
    for kind in ElementKind::ALL {
        page.add_element(kind);
    }
    let html = render(&page);
    assert_eq!(
        container_children(&html),
        vec!["h1", "p", "button", "div", "div", "div"]
    );

    let doc = Html::parse_document(&html);
    let form_inputs = doc
        .select(&Selector::parse(".form-container input, .form-container textarea").unwrap())
        .count();
    assert_eq!(form_inputs, 3);
    let placeholder = doc
        .select(&Selector::parse(".image-placeholder").unwrap())
        .next()
        .unwrap();
    assert_eq!(placeholder.text().collect::<String>(), "placeholder.png");
}

#[test]
fn render_does_not_change_the_page_and_is_stable() {
    let mut page = Page::new();
    page.add_element(ElementKind::Header);
    page.add_element(ElementKind::Form);
    page.update_global_styles(GlobalStylesPatch::default().font_family("Helvetica"));
    let before = page.clone();
    let first = render(&page);
    let second = render(&page);
    assert_eq!(first, second);
    assert_eq!(page, before);
}

#[test]
fn add_and_delete_sequences_keep_insertion_order() {
    // small deterministic LCG so the sequence is reproducible
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };

    let mut page = Page::new();
    let mut expected: Vec<ElementId> = Vec::new();
    let (mut adds, mut deletes) = (0usize, 0usize);

    for _ in 0..200 {
        if expected.is_empty() || next() % 3 != 0 {
            let kind = ElementKind::ALL[next() % ElementKind::ALL.len()];
            expected.push(page.add_element(kind).id());
            adds += 1;
        } else {
            let victim = expected.remove(next() % expected.len());
            assert!(page.delete_element(victim).is_some());
            deletes += 1;
        }
        let ids: Vec<_> = page.list_elements().iter().map(|e| e.id()).collect();
        assert_eq!(ids, expected);
        assert_eq!(page.len(), adds - deletes);
    }
}

#[test]
fn style_update_round_trip_keeps_other_keys() {
    let mut page = Page::new();
    let id = page.add_element(ElementKind::Paragraph).id();
    page.update_styles(id, &StylePatch::new().with(StyleKey::LineHeight, "2"))
        .unwrap();
    page.update_styles(id, &StylePatch::new().with(StyleKey::FontSize, 20))
        .unwrap();

    let eff = page.effective_styles(id).unwrap();
    assert_eq!(eff[&StyleKey::FontSize], StyleValue::Int(20));
    assert_eq!(eff[&StyleKey::LineHeight], StyleValue::from("2"));
    assert_eq!(eff[&StyleKey::Color], StyleValue::from("#333333"));
    assert!(render(&page).contains("font-size:20px; color:#333333; line-height:2;"));
}

#[test]
fn rejected_font_size_leaves_styles_identical() {
    let mut page = Page::new();
    let id = page.add_element(ElementKind::Header).id();
    page.update_styles(id, &StylePatch::new().with(StyleKey::Color, "#101010"))
        .unwrap();
    let before = serde_json::to_string(page.element(id).unwrap().styles()).unwrap();

    let err = page
        .update_styles(id, &StylePatch::new().with(StyleKey::FontSize, "abc"))
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "font_size"));

    let after = serde_json::to_string(page.element(id).unwrap().styles()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn selection_follows_deletes() {
    let mut page = Page::new();
    let a = page.add_element(ElementKind::Image).id();
    let b = page.add_element(ElementKind::Divider).id();

    page.select_element(a);
    page.delete_element(b);
    assert_eq!(page.selected_id(), Some(a));

    page.delete_element(a);
    assert_eq!(page.selected_id(), None);
}

#[test]
fn escaping_is_on_by_default_and_optional() {
    let mut page = Page::new();
    let id = page.add_element(ElementKind::Header).id();
    page.update_content(id, "<script>alert(1)</script>").unwrap();

    let safe = render(&page);
    let doc = Html::parse_document(&safe);
    assert_eq!(doc.select(&Selector::parse("script").unwrap()).count(), 0);
    assert!(safe.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));

    let raw = render_with(&page, &RenderOptions { escape_content: false });
    assert!(raw.contains("<h1 style=\"font-size:18px; font-weight:bold; color:#333333;\"><script>alert(1)</script></h1>"));
}
