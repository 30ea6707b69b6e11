use crate::test_utils::{layout, numbered_lines, small_doc};
use crate::{LayoutConfig, LayoutElement, LayoutEngine, LayoutError};
use vitae_idf::builders::*;
use vitae_idf::PrintNode;
use vitae_style::{Dimension, ElementStyle, Margins, PageSize};
use vitae_types::Color;

fn lines(prefix: &str, count: usize) -> PrintNode {
    Paragraph::empty().multiline(&numbered_lines(prefix, count)).build()
}

#[test]
fn long_paragraph_flows_across_pages() {
    let out = layout(&small_doc(vec![lines("L", 40)]));
    assert_eq!(out.pages.len(), 3);
    assert_eq!(out.page_of_text("L16"), Some(0));
    assert_eq!(out.page_of_text("L17"), Some(1));
    assert_eq!(out.page_of_text("L40"), Some(2));
}

#[test]
fn keep_together_block_moves_to_next_page() {
    let entry = Block::new().keep_together().child(lines("K", 8));
    let out = layout(&small_doc(vec![lines("L", 10), entry.build()]));
    assert_eq!(out.page_of_text("K01"), Some(1));
    assert_eq!(out.page_of_text("K08"), Some(1));
}

#[test]
fn plain_block_splits_where_it_is() {
    let entry = Block::new().child(lines("K", 8));
    let out = layout(&small_doc(vec![lines("L", 10), entry.build()]));
    assert_eq!(out.page_of_text("K01"), Some(0));
    assert_eq!(out.page_of_text("K08"), Some(1));
}

#[test]
fn oversized_keep_together_block_flows() {
    let entry = Block::new().keep_together().child(lines("K", 20));
    let out = layout(&small_doc(vec![lines("L", 2), entry.build()]));
    assert_eq!(out.page_of_text("K01"), Some(0));
    assert_eq!(out.page_of_text("K20"), Some(1));
}

#[test]
fn row_is_atomic() {
    let row = Row::new()
        .cell_with(Dimension::Auto, Block::new().child(lines("A", 2)))
        .cell_with(Dimension::Auto, Block::new().child(lines("B", 5)));
    let out = layout(&small_doc(vec![lines("L", 12), row.build()]));
    assert_eq!(out.page_of_text("A01"), Some(1));
    assert_eq!(out.page_of_text("B01"), Some(1));

    let find = |label: &str| {
        out.pages[1]
            .elements
            .iter()
            .find(|e| matches!(&e.element, LayoutElement::Text(t) if t.content == label))
            .map(|e| (e.x, e.y))
    };
    let (a_x, a_y) = find("A01").unwrap();
    let (b_x, b_y) = find("B01").unwrap();
    assert_eq!(a_y, b_y);
    assert_eq!((a_x, b_x), (20.0, 100.0));
}

#[test]
fn columns_flow_independently() {
    let columns = Columns::new()
        .cell_with(Dimension::Percent(50.0), Block::new().child(lines("C", 20)))
        .cell_with(Dimension::Auto, Block::new().child(lines("R", 3)));
    let out = layout(&small_doc(vec![
        columns.build(),
        Paragraph::new("after").build(),
    ]));
    assert_eq!(out.page_of_text("R01"), Some(0));
    assert_eq!(out.page_of_text("C16"), Some(0));
    assert_eq!(out.page_of_text("C17"), Some(1));
    assert_eq!(out.page_of_text("after"), Some(1));

    let right = out.pages[0].elements.iter().find(|e| match &e.element {
        LayoutElement::Text(t) => t.content == "R01",
        _ => false,
    });
    assert_eq!(right.map(|e| e.x), Some(100.0));
}

#[test]
fn backgrounds_paint_under_every_fragment() {
    let block = Block::new()
        .style(ElementStyle {
            background_color: Some(Color::gray(230)),
            padding: Some(Margins::all(0.0)),
            ..Default::default()
        })
        .child(lines("L", 20));
    let out = layout(&small_doc(vec![block.build()]));
    assert_eq!(out.pages.len(), 2);
    for page in &out.pages {
        let first = &page.elements[0];
        assert!(matches!(first.element, LayoutElement::Rect { .. }));
        assert_eq!(first.y, 20.0);
    }
    assert_eq!(out.pages[0].elements[0].height, 160.0);
    assert_eq!(out.pages[1].elements[0].height, 40.0);
}

#[test]
fn tags_wrap_into_rows() {
    // Ten Courier characters at 10pt make a 60pt chip; with a 4pt gap two
    // fit on a 160pt line and a third would need 188pt.
    let tags = Tags::new(vec!["abcdefghij"; 10]);
    let out = layout(&small_doc(vec![tags.build()]));
    let mut rows: Vec<f32> = Vec::new();
    let mut xs: Vec<f32> = Vec::new();
    for el in &out.pages[0].elements {
        if matches!(el.element, LayoutElement::Text(_)) {
            if !rows.contains(&el.y) {
                rows.push(el.y);
            }
            if !xs.contains(&el.x) {
                xs.push(el.x);
            }
        }
    }
    assert_eq!(rows.len(), 5);
    assert_eq!(xs.len(), 2);
    assert_eq!(xs[0], 20.0);
    assert!((xs[1] - 84.0).abs() < 0.01, "second chip at {}", xs[1]);
}

#[test]
fn short_tags_share_a_line() {
    // 36pt chips: 36 + 3 * 40 = 156pt fits, a fifth chip does not.
    let tags = Tags::new(vec!["abcdef"; 10]);
    let out = layout(&small_doc(vec![tags.build()]));
    let mut rows: Vec<f32> = Vec::new();
    for el in &out.pages[0].elements {
        if matches!(el.element, LayoutElement::Text(_)) && !rows.contains(&el.y) {
            rows.push(el.y);
        }
    }
    assert_eq!(rows.len(), 3);
}

#[test]
fn links_keep_their_target() {
    let para = Paragraph::new("see ").link("site", "https://example.com");
    let out = layout(&small_doc(vec![para.build()]));
    let link = out.pages[0]
        .texts()
        .find(|t| t.content == "site")
        .expect("link text");
    assert_eq!(link.href.as_deref(), Some("https://example.com"));
}

#[test]
fn images_are_scaled_to_the_frame() {
    let image = Image::new("data:image/png;base64,AA", 320.0, 100.0);
    let out = layout(&small_doc(vec![image.build()]));
    let image = &out.pages[0].elements[0];
    assert_eq!(image.width, 160.0);
    assert_eq!(image.height, 50.0);
    assert_eq!(out.image_sources(), vec!["data:image/png;base64,AA"]);
}

#[test]
fn margins_larger_than_page_are_rejected() {
    let mut doc = small_doc(vec![]);
    doc.margins = Margins::all(150.0);
    let err = LayoutEngine::new(LayoutConfig::default())
        .paginate(&doc)
        .unwrap_err();
    assert!(matches!(err, LayoutError::InvalidPageGeometry { .. }));
}

#[test]
fn runaway_documents_stop() {
    let config = LayoutConfig {
        max_pages: 2,
        ..Default::default()
    };
    let err = LayoutEngine::new(config)
        .paginate(&small_doc(vec![lines("L", 40)]))
        .unwrap_err();
    assert_eq!(err, LayoutError::TooManyPages(2));
}

#[test]
fn a4_document_fits_on_one_page() {
    let mut doc = small_doc(vec![lines("L", 5)]);
    doc.page_size = PageSize::A4;
    let out = layout(&doc);
    assert_eq!(out.pages.len(), 1);
    assert!((out.page_width - 595.28).abs() < 0.01);
}
