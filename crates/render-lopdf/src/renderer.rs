use crate::RenderError;
use crate::encoding::to_win_ansi;
use crate::image::ResolvedImages;
use crate::page::PageContext;
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};
use std::collections::HashMap;
use vitae_layout::{LaidOutDocument, StandardFont};

/// Writes a laid-out document into a PDF file held in memory.
#[derive(Debug, Clone)]
pub struct LopdfRenderer {
    producer: String,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self {
            producer: format!("vitae {}", env!("CARGO_PKG_VERSION")),
        }
    }

    fn font_dictionary() -> Dictionary {
        let mut fonts = Dictionary::new();
        for font in StandardFont::ALL {
            fonts.set(
                font.resource_name().into_bytes(),
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.base_font_name(),
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }
        fonts
    }

    /// One PDF page per laid-out page. Every image the layout references
    /// must be present in `images`; missing ones are skipped with a warning.
    pub fn render(
        &self,
        laid_out: &LaidOutDocument,
        images: &ResolvedImages,
    ) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        let mut image_names: HashMap<String, String> = HashMap::new();
        let mut xobjects = Dictionary::new();
        for src in laid_out.image_sources() {
            if image_names.contains_key(src) {
                continue;
            }
            let Some(image) = images.get(src) else {
                continue;
            };
            let stream = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => image.width as i64,
                    "Height" => image.height as i64,
                    "ColorSpace" => "DeviceRGB",
                    "BitsPerComponent" => 8,
                },
                image.rgb.clone(),
            );
            let name = format!("Im{}", image_names.len() + 1);
            xobjects.set(name.as_bytes(), doc.add_object(stream));
            image_names.insert(src.to_string(), name);
        }

        let mut resources = dictionary! { "Font" => Self::font_dictionary() };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        let resources_id = doc.add_object(resources);

        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            laid_out.page_width.into(),
            laid_out.page_height.into(),
        ];

        let mut page_ids = Vec::with_capacity(laid_out.pages.len());
        for page in &laid_out.pages {
            let mut ctx = PageContext::new(laid_out.page_height, &image_names);
            if let Some(background) = &laid_out.background {
                ctx.fill_background(laid_out.page_width, background);
            }
            for decoration in &laid_out.decorations {
                ctx.draw_decoration(decoration);
            }
            for element in &page.elements {
                ctx.draw_element(element);
            }
            let (content, links) = ctx.finish();
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

            let mut page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            };
            if !links.is_empty() {
                let annots: Vec<Object> = links
                    .into_iter()
                    .map(|link| {
                        let annot = dictionary! {
                            "Type" => "Annot",
                            "Subtype" => "Link",
                            "Rect" => link.rect.iter().map(|v| (*v).into()).collect::<Vec<Object>>(),
                            "Border" => vec![0.into(), 0.into(), 0.into()],
                            "A" => dictionary! {
                                "Type" => "Action",
                                "S" => "URI",
                                "URI" => Object::String(link.uri.into_bytes(), StringFormat::Literal),
                            },
                        };
                        Object::Reference(doc.add_object(annot))
                    })
                    .collect();
                page_dict.set("Annots", annots);
            }
            page_ids.push(doc.add_object(page_dict));
        }

        doc.objects.insert(
            pages_id,
            dictionary! {
                "Type" => "Pages",
                "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
                "Count" => page_ids.len() as i64,
            }
            .into(),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::String(to_win_ansi(&laid_out.title), StringFormat::Literal),
            "Producer" => Object::String(self.producer.clone().into_bytes(), StringFormat::Literal),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        log::debug!(
            "Wrote {} page(s), {} image(s), {} bytes.",
            page_ids.len(),
            image_names.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodedImage;
    use vitae_idf::{Decoration, ImageShape};
    use vitae_layout::{ImageElement, LayoutElement, Page, PositionedElement, TextElement};
    use vitae_types::{Color, Rect};

    fn text(content: &str, y: f32, href: Option<&str>) -> PositionedElement {
        PositionedElement {
            x: 50.0,
            y,
            width: 60.0,
            height: 10.0,
            element: LayoutElement::Text(TextElement {
                content: content.into(),
                font: StandardFont::HelveticaBold,
                font_size: 10.0,
                color: Color::BLACK,
                href: href.map(String::from),
                underline: false,
            }),
        }
    }

    fn laid_out(pages: Vec<Page>) -> LaidOutDocument {
        LaidOutDocument {
            title: "Alex Rivera".into(),
            page_width: 595.28,
            page_height: 841.89,
            background: None,
            decorations: vec![],
            pages,
        }
    }

    fn render(doc: &LaidOutDocument, images: &ResolvedImages) -> Document {
        let _ = env_logger::builder().is_test(true).try_init();
        let bytes = LopdfRenderer::new().render(doc, images).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        Document::load_mem(&bytes).unwrap()
    }

    #[test]
    fn writes_one_pdf_page_per_layout_page() {
        let doc = laid_out(vec![
            Page {
                elements: vec![text("Experience", 100.0, None)],
            },
            Page {
                elements: vec![text("Education", 100.0, None)],
            },
        ]);
        let pdf = render(&doc, &ResolvedImages::new());
        assert_eq!(pdf.get_pages().len(), 2);
        assert_eq!(pdf.extract_text(&[1]).unwrap().trim(), "Experience");
        assert_eq!(pdf.extract_text(&[2]).unwrap().trim(), "Education");
    }

    #[test]
    fn links_become_uri_annotations() {
        let doc = laid_out(vec![Page {
            elements: vec![text("site", 100.0, Some("https://example.com"))],
        }]);
        let pdf = render(&doc, &ResolvedImages::new());
        let (_, page_id) = pdf.get_pages().into_iter().next().unwrap();
        let page = pdf.get_dictionary(page_id).unwrap();
        let annots = page.get(b"Annots").unwrap().as_array().unwrap();
        assert_eq!(annots.len(), 1);
        let annot = pdf
            .get_dictionary(annots[0].as_reference().unwrap())
            .unwrap();
        let action = annot.get(b"A").unwrap().as_dict().unwrap();
        assert_eq!(
            action.get(b"URI").unwrap().as_str().unwrap(),
            b"https://example.com"
        );
    }

    #[test]
    fn images_are_embedded_once() {
        let photo = ImageElement {
            src: "data:image/png;base64,AAAA".into(),
            shape: ImageShape::Circle,
        };
        let element = |y| PositionedElement {
            x: 20.0,
            y,
            width: 80.0,
            height: 80.0,
            element: LayoutElement::Image(photo.clone()),
        };
        let doc = laid_out(vec![Page {
            elements: vec![element(20.0), element(200.0)],
        }]);
        let mut images = ResolvedImages::new();
        images.insert(
            photo.src.clone(),
            DecodedImage {
                width: 1,
                height: 1,
                rgb: vec![200, 100, 50],
            },
        );
        let pdf = render(&doc, &images);
        let xobjects = pdf
            .objects
            .values()
            .filter(|o| {
                o.as_stream()
                    .is_ok_and(|s| s.dict.get(b"Subtype").and_then(|v| v.as_name()).ok() == Some(b"Image".as_slice()))
            })
            .count();
        assert_eq!(xobjects, 1);
    }

    #[test]
    fn decorations_and_background_paint_every_page() {
        let mut doc = laid_out(vec![Page::default(), Page::default()]);
        doc.background = Some(Color::rgb(250, 250, 245));
        doc.decorations = vec![
            Decoration::Rect {
                rect: Rect::new(0.0, 0.0, 180.0, 841.89),
                color: Color::rgb(30, 40, 60),
            },
            Decoration::Circle {
                cx: 500.0,
                cy: 60.0,
                radius: 40.0,
                color: Color::rgb(30, 40, 60),
            },
        ];
        let pdf = render(&doc, &ResolvedImages::new());
        for (_, page_id) in pdf.get_pages() {
            let content = pdf.get_and_decode_page_content(page_id).unwrap();
            let ops: Vec<&str> = content.operations.iter().map(|o| o.operator.as_str()).collect();
            assert_eq!(ops.iter().filter(|o| **o == "re").count(), 2);
            assert_eq!(ops.iter().filter(|o| **o == "c").count(), 4);
        }
    }

    #[test]
    fn title_lands_in_document_info() {
        let pdf = render(&laid_out(vec![Page::default()]), &ResolvedImages::new());
        let info = pdf.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let title = pdf.get_dictionary(info).unwrap().get(b"Title").unwrap();
        assert_eq!(title.as_str().unwrap(), b"Alex Rivera");
    }
}
