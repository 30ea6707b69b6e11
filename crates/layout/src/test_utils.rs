use crate::{LaidOutDocument, LayoutConfig, LayoutEngine};
use vitae_idf::{PrintDocument, PrintNode};
use vitae_style::{ElementStyle, Margins, PageSize};

/// A 200pt square page with 20pt margins and 10pt Courier on a 10pt line:
/// sixteen lines per page, six points per character.
pub fn small_doc(children: Vec<PrintNode>) -> PrintDocument {
    PrintDocument {
        title: "test".into(),
        page_size: PageSize::Custom {
            width: 200.0,
            height: 200.0,
        },
        margins: Margins::all(20.0),
        base_style: ElementStyle {
            font_family: Some("Courier".into()),
            font_size: Some(10.0),
            line_height: Some(1.0),
            ..Default::default()
        },
        children,
        ..Default::default()
    }
}

pub fn layout(doc: &PrintDocument) -> LaidOutDocument {
    let _ = env_logger::builder().is_test(true).try_init();
    LayoutEngine::new(LayoutConfig::default())
        .paginate(doc)
        .expect("layout should succeed")
}

/// `count` lines labelled `{prefix}01`, `{prefix}02`, ...
pub fn numbered_lines(prefix: &str, count: usize) -> String {
    (1..=count)
        .map(|i| format!("{}{:02}", prefix, i))
        .collect::<Vec<_>>()
        .join("\n")
}
