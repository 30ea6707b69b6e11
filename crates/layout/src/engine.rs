//! The pagination engine.
//!
//! Layout is a single top-down pass with a cursor (`Flow`) that knows the
//! current page, the vertical position on it and the horizontal frame it is
//! filling. Containers narrow the frame for their children; columns run one
//! flow per cell over the same pages. Atomic content (rows, keep-together
//! blocks) is first laid out into a scratch flow with no page bottom to
//! measure it.

use crate::LayoutError;
use crate::algorithms::pagination::{EPSILON, check_child_fit, should_move_to_next_page};
use crate::config::LayoutConfig;
use crate::output::{LaidOutDocument, Page, PositionedElement};
use crate::style::ComputedStyle;
use vitae_idf::{PrintDocument, PrintNode};
use vitae_style::Stylesheet;

/// Cursor over a growing list of pages.
pub(crate) struct Flow<'p> {
    pages: &'p mut Vec<Page>,
    pub(crate) page: usize,
    pub(crate) y: f32,
    pub(crate) x: f32,
    pub(crate) width: f32,
    top: f32,
    bottom: f32,
    max_pages: usize,
}

impl<'p> Flow<'p> {
    pub(crate) fn new(
        pages: &'p mut Vec<Page>,
        x: f32,
        width: f32,
        top: f32,
        bottom: f32,
        max_pages: usize,
    ) -> Self {
        if pages.is_empty() {
            pages.push(Page::default());
        }
        Self {
            pages,
            page: 0,
            y: top,
            x,
            width,
            top,
            bottom,
            max_pages,
        }
    }

    /// A single unbounded page starting at y = 0, for measuring.
    pub(crate) fn scratch(pages: &'p mut Vec<Page>, x: f32, width: f32) -> Self {
        pages.clear();
        Self::new(pages, x, width, 0.0, f32::INFINITY, 1)
    }

    /// A flow over the same pages and position, narrowed to a new frame.
    pub(crate) fn sub(&mut self, x: f32, width: f32) -> Flow<'_> {
        Flow {
            pages: &mut *self.pages,
            page: self.page,
            y: self.y,
            x,
            width: width.max(0.0),
            top: self.top,
            bottom: self.bottom,
            max_pages: self.max_pages,
        }
    }

    pub(crate) fn paginates(&self) -> bool {
        self.bottom.is_finite()
    }

    pub(crate) fn at_top(&self) -> bool {
        self.y <= self.top + EPSILON
    }

    pub(crate) fn top(&self) -> f32 {
        self.top
    }

    pub(crate) fn bottom(&self) -> f32 {
        self.bottom
    }

    pub(crate) fn position(&self) -> (usize, f32) {
        (self.page, self.y)
    }

    pub(crate) fn set_position(&mut self, (page, y): (usize, f32)) {
        self.page = page;
        self.y = y;
    }

    pub(crate) fn next_page(&mut self) -> Result<(), LayoutError> {
        self.page += 1;
        if self.page >= self.max_pages {
            return Err(LayoutError::TooManyPages(self.max_pages));
        }
        while self.pages.len() <= self.page {
            self.pages.push(Page::default());
        }
        self.y = self.top;
        Ok(())
    }

    /// Moves to the next page unless `height` fits below the cursor.
    pub(crate) fn ensure_space(&mut self, height: f32) -> Result<(), LayoutError> {
        if check_child_fit(self.y, height, self.top, self.bottom).should_break {
            self.next_page()?;
        }
        Ok(())
    }

    /// Advances the cursor. Running past the page bottom starts a new page.
    pub(crate) fn advance(&mut self, height: f32) -> Result<(), LayoutError> {
        self.y += height;
        if self.paginates() && self.y > self.bottom + EPSILON {
            self.next_page()?;
        }
        Ok(())
    }

    pub(crate) fn push(&mut self, element: PositionedElement) {
        self.pages[self.page].elements.push(element);
    }

    pub(crate) fn element_count(&self, page: usize) -> usize {
        self.pages.get(page).map_or(0, |p| p.elements.len())
    }

    pub(crate) fn insert_at(&mut self, page: usize, index: usize, elements: Vec<PositionedElement>) {
        if let Some(target) = self.pages.get_mut(page) {
            let index = index.min(target.elements.len());
            target.elements.splice(index..index, elements);
        }
    }

    pub(crate) fn push_to(&mut self, page: usize, element: PositionedElement) {
        if let Some(target) = self.pages.get_mut(page) {
            target.elements.push(element);
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out the whole document into pages.
    pub fn paginate(&self, doc: &PrintDocument) -> Result<LaidOutDocument, LayoutError> {
        let (page_width, page_height) = doc.page_size.dimensions_pt();
        let content_width = page_width - doc.margins.horizontal();
        let content_height = page_height - doc.margins.vertical();
        if content_width <= 0.0 || content_height <= 0.0 {
            return Err(LayoutError::InvalidPageGeometry {
                width: content_width,
                height: content_height,
            });
        }

        let layouter = Layouter {
            stylesheet: &doc.stylesheet,
            config: &self.config,
        };
        let root = ComputedStyle::root(&doc.base_style, &self.config);

        let mut pages = Vec::new();
        let mut flow = Flow::new(
            &mut pages,
            doc.margins.left,
            content_width,
            doc.margins.top,
            page_height - doc.margins.bottom,
            self.config.max_pages,
        );
        for child in &doc.children {
            layouter.layout_node(child, &root, &mut flow)?;
        }

        while pages.len() > 1 && pages.last().is_some_and(|p| p.elements.is_empty()) {
            pages.pop();
        }
        log::debug!("Laid out '{}' into {} page(s).", doc.title, pages.len());

        Ok(LaidOutDocument {
            title: doc.title.clone(),
            page_width,
            page_height,
            background: doc.background,
            decorations: doc.decorations.clone(),
            pages,
        })
    }
}

pub(crate) struct Layouter<'a> {
    pub(crate) stylesheet: &'a Stylesheet,
    pub(crate) config: &'a LayoutConfig,
}

impl Layouter<'_> {
    pub(crate) fn layout_node(
        &self,
        node: &PrintNode,
        parent: &ComputedStyle,
        flow: &mut Flow<'_>,
    ) -> Result<(), LayoutError> {
        if node.keep_together() && flow.paginates() && !flow.at_top() {
            let height = self.measure(node, parent, flow.x, flow.width)?;
            if should_move_to_next_page(flow.y, height, flow.top(), flow.bottom()) {
                log::debug!(
                    "Moving {} '{}' ({:.1}pt) to the next page.",
                    node.kind(),
                    node.meta().and_then(|m| m.id.as_deref()).unwrap_or(""),
                    height
                );
                flow.next_page()?;
            }
        }

        match node {
            PrintNode::Block { meta, children } => {
                self.layout_boxed(meta, parent, flow, |this, style, inner| {
                    for child in children {
                        this.layout_node(child, style, inner)?;
                    }
                    Ok(())
                })
            }
            PrintNode::Paragraph { meta, children } => {
                self.layout_boxed(meta, parent, flow, |this, style, inner| {
                    this.layout_paragraph(children, style, inner)
                })
            }
            PrintNode::Tags { meta, tags } => self.layout_tags(meta, tags, parent, flow),
            PrintNode::Row { meta, cells } => {
                self.layout_boxed(meta, parent, flow, |this, style, inner| {
                    this.layout_row(cells, style, inner)
                })
            }
            PrintNode::Columns { meta, cells } => {
                self.layout_boxed(meta, parent, flow, |this, style, inner| {
                    this.layout_columns(cells, style, inner)
                })
            }
            PrintNode::Image {
                meta,
                src,
                width,
                height,
                shape,
            } => self.layout_boxed(meta, parent, flow, |_, style, inner| {
                Self::layout_image(src, *width, *height, *shape, style, inner)
            }),
            PrintNode::Rule { meta } => self.layout_boxed(meta, parent, flow, |_, style, inner| {
                Self::layout_rule(style, inner)
            }),
            PrintNode::Spacer { height } => flow.advance(*height),
        }
    }

    /// Height `node` takes in a frame of `width`, ignoring page breaks.
    pub(crate) fn measure(
        &self,
        node: &PrintNode,
        parent: &ComputedStyle,
        x: f32,
        width: f32,
    ) -> Result<f32, LayoutError> {
        let mut pages = Vec::new();
        let mut scratch = Flow::scratch(&mut pages, x, width);
        self.layout_node(node, parent, &mut scratch)?;
        Ok(scratch.y)
    }
}
