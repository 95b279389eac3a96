//! A minimal page composer: vertical flow, fixed line height, no wrapping.
//!
//! It is the layout-pass boundary for flattened lists and container groups:
//! list rows break individually, atomic groups move whole, and header/footer
//! members go to the bands of the page the group starts on.

use crate::algorithms::pagination::{check_child_fit, fits_empty};
use crate::config::LayoutConfig;
use crate::elements::{FrameElement, LayoutElement, PositionedElement, TextElement};
use crate::group::{ContainerGroup, is_band};
use crate::list::flatten;
use crate::list_utils::get_marker_text;
use crate::objects::Positionable;
use crate::LayoutError;
use log::{debug, warn};
use quire_idf::List;
use quire_types::geometry::{PageBounds, Rect};
use quire_types::Zone;

/// A unit of document content handed to the composer.
#[derive(Debug)]
pub enum Block {
    Object(Box<dyn Positionable>),
    List(List),
    Group(ContainerGroup),
    PageBreak,
}

impl Block {
    pub fn object(object: impl Positionable + 'static) -> Self {
        Block::Object(Box::new(object))
    }
}

/// A finished page of positioned elements.
#[derive(Debug, Clone)]
pub struct ComposedPage {
    pub bounds: PageBounds,
    pub elements: Vec<PositionedElement>,
    header_cursor: f32,
    footer_cursor: f32,
}

impl ComposedPage {
    fn new(bounds: PageBounds) -> Self {
        Self {
            bounds,
            elements: Vec::new(),
            header_cursor: 0.0,
            footer_cursor: 0.0,
        }
    }

    /// Concatenated text of every text element, in emission order. Handy for assertions.
    pub fn text_lines(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter_map(|el| match &el.element {
                LayoutElement::Text(t) => Some(t.content()),
                _ => None,
            })
            .collect()
    }
}

pub struct PageComposer<'a> {
    config: &'a LayoutConfig,
    bounds: PageBounds,
    debug_overlay: bool,
    pages: Vec<ComposedPage>,
    cursor_y: f32,
}

impl<'a> PageComposer<'a> {
    pub fn new(config: &'a LayoutConfig, bounds: PageBounds) -> Self {
        Self {
            config,
            bounds,
            debug_overlay: false,
            pages: vec![ComposedPage::new(bounds)],
            cursor_y: 0.0,
        }
    }

    /// Emit a frame around every placed box.
    pub fn with_debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }

    /// Lays out all blocks and returns the pages. Always yields at least one page.
    pub fn compose<'b>(mut self, blocks: impl IntoIterator<Item = &'b Block>) -> Result<Vec<ComposedPage>, LayoutError> {
        for block in blocks {
            match block {
                Block::Object(object) => self.place_flow(object.as_ref())?,
                Block::List(list) => self.place_list(list),
                Block::Group(group) => self.place_group(group)?,
                Block::PageBreak => {
                    if self.has_flow_content() {
                        self.new_page();
                    }
                }
            }
        }
        Ok(self.pages)
    }

    fn content_rect(&self) -> Rect {
        self.bounds.content_rect()
    }

    fn has_flow_content(&self) -> bool {
        self.cursor_y > 0.0
    }

    fn current_index(&self) -> usize {
        self.pages.len() - 1
    }

    fn new_page(&mut self) {
        debug!("Starting page {}.", self.pages.len() + 1);
        self.pages.push(ComposedPage::new(self.bounds));
        self.cursor_y = 0.0;
    }

    fn emit(&mut self, page_index: usize, elements: Vec<PositionedElement>, frame: Rect) {
        let page = &mut self.pages[page_index];
        page.elements.extend(elements);
        if self.debug_overlay {
            page.elements.push(PositionedElement {
                x: frame.x,
                y: frame.y,
                width: frame.width,
                height: frame.height,
                element: LayoutElement::Frame(FrameElement { line_width: 0.5 }),
            });
        }
    }

    /// Breaks to a new page when `height` does not fit below the cursor.
    fn ensure_space(&mut self, height: f32) {
        let fit = check_child_fit(self.cursor_y, height, self.content_rect());
        if fit.should_break && self.has_flow_content() {
            self.new_page();
        }
    }

    fn place_flow(&mut self, object: &dyn Positionable) -> Result<(), LayoutError> {
        let content = self.content_rect();
        let size = object.measure(content.width, self.config);
        if !fits_empty(size.height, content) {
            return Err(LayoutError::ElementTooLarge(size.height, content.height));
        }
        self.ensure_space(size.height);

        let frame = Rect::new(content.x, content.y + self.cursor_y, content.width, size.height);
        let elements = object.place(frame, self.config);
        self.emit(self.current_index(), elements, frame);
        self.cursor_y += size.height;
        Ok(())
    }

    fn place_list(&mut self, list: &List) {
        let line_height = self.config.line_height;
        for row in flatten(list) {
            self.ensure_space(line_height);
            let content = self.content_rect();
            let indent = list.indent_for(row.level);
            let y = content.y + self.cursor_y;
            let mut elements = Vec::with_capacity(2);

            let marker = get_marker_text(&row.symbol);
            if !marker.is_empty() {
                elements.push(PositionedElement {
                    x: content.x + indent.pre,
                    y,
                    width: indent.past,
                    height: line_height,
                    element: LayoutElement::Text(TextElement::plain(marker, self.config.font_size)),
                });
            }
            let text_x = content.x + indent.pre + indent.past;
            elements.push(PositionedElement {
                x: text_x,
                y,
                width: (content.x + content.width - text_x).max(0.0),
                height: line_height,
                element: LayoutElement::Text(TextElement::plain(row.text, self.config.font_size)),
            });

            let frame = Rect::new(content.x, y, content.width, line_height);
            self.emit(self.current_index(), elements, frame);
            self.cursor_y += line_height;
        }
    }

    fn place_group(&mut self, group: &ContainerGroup) -> Result<(), LayoutError> {
        let content = self.content_rect();
        if !group.allows_breaks() {
            let extent = group.flow_extent(content.width, self.config);
            if !fits_empty(extent, content) {
                warn!(
                    "Atomic group of height {:.2} exceeds the page content height {:.2}; splitting it.",
                    extent, content.height
                );
            } else if check_child_fit(self.cursor_y, extent, content).should_break && self.has_flow_content() {
                debug!("Deferring atomic group of height {:.2} to the next page.", extent);
                self.new_page();
            }
        }

        let start_page = self.current_index();
        for (zone, object) in group.members() {
            if is_band(zone) {
                self.place_band(start_page, zone, object.as_ref());
            } else {
                self.place_flow(object.as_ref())?;
            }
        }
        Ok(())
    }

    fn place_band(&mut self, page_index: usize, zone: &Zone, object: &dyn Positionable) {
        let inset = self.config.band_inset;
        let margins = self.bounds.margins;
        let width = (self.bounds.width - margins.left - margins.right).max(0.0);
        let size = object.measure(width, self.config);

        let page = &mut self.pages[page_index];
        let (band_top, band_height, cursor) = if *zone == Zone::HEADER {
            (inset, (margins.top - inset).max(0.0), &mut page.header_cursor)
        } else {
            let top = self.bounds.height - margins.bottom;
            (top, (margins.bottom - inset).max(0.0), &mut page.footer_cursor)
        };
        if *cursor + size.height > band_height {
            warn!("{} content overflows its band on page {}.", zone, page_index + 1);
        }
        let frame = Rect::new(margins.left, band_top + *cursor, width, size.height);
        *cursor += size.height;

        let elements = object.place(frame, self.config);
        self.emit(page_index, elements, frame);
    }
}
