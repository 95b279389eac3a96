//! Objects that the composer can measure and place.

use crate::config::LayoutConfig;
use crate::elements::{ImageElement, LayoutElement, PositionedElement, TextElement, TextRun};
use quire_idf::{ContentKind, ImageHandle};
use quire_types::geometry::{Rect, Size};
use std::fmt::Debug;

/// Something with a measurable extent that can be placed into a frame.
pub trait Positionable: Debug {
    /// The size this object needs when given `available_width`.
    fn measure(&self, available_width: f32, config: &LayoutConfig) -> Size;

    /// Emits the elements for this object placed into `frame`.
    fn place(&self, frame: Rect, config: &LayoutConfig) -> Vec<PositionedElement>;
}

/// Text content laid out one line per explicit line break.
#[derive(Debug, Clone)]
pub struct TextBlock {
    content: ContentKind,
}

impl TextBlock {
    pub fn new(content: ContentKind) -> Self {
        Self { content }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(ContentKind::PlainText(text.into()))
    }

    pub fn content(&self) -> &ContentKind {
        &self.content
    }

    fn lines(&self) -> Vec<Vec<TextRun>> {
        let spans: Vec<TextRun> = match &self.content {
            ContentKind::PlainText(text) => vec![TextRun {
                text: text.clone(),
                style: Default::default(),
            }],
            ContentKind::RichText(rich) => rich
                .spans()
                .iter()
                .map(|s| TextRun {
                    text: s.text.clone(),
                    style: s.style,
                })
                .collect(),
            ContentKind::Absent | ContentKind::Image(_) => return Vec::new(),
        };

        let mut lines = vec![Vec::new()];
        for run in spans {
            let mut parts = run.text.split('\n');
            if let Some(first) = parts.next() {
                push_run(&mut lines, first, run.style);
            }
            for part in parts {
                lines.push(Vec::new());
                push_run(&mut lines, part, run.style);
            }
        }
        lines
    }
}

fn push_run(lines: &mut [Vec<TextRun>], text: &str, style: quire_idf::SpanStyle) {
    if text.is_empty() {
        return;
    }
    if let Some(line) = lines.last_mut() {
        line.push(TextRun {
            text: text.to_string(),
            style,
        });
    }
}

impl Positionable for TextBlock {
    fn measure(&self, available_width: f32, config: &LayoutConfig) -> Size {
        Size::new(available_width, self.lines().len() as f32 * config.line_height)
    }

    fn place(&self, frame: Rect, config: &LayoutConfig) -> Vec<PositionedElement> {
        self.lines()
            .into_iter()
            .enumerate()
            .filter(|(_, runs)| !runs.is_empty())
            .map(|(i, runs)| PositionedElement {
                x: frame.x,
                y: frame.y + i as f32 * config.line_height,
                width: frame.width,
                height: config.line_height,
                element: LayoutElement::Text(TextElement {
                    runs,
                    font_size: config.font_size,
                }),
            })
            .collect()
    }
}

/// An image placed at its handle's declared size.
#[derive(Debug, Clone)]
pub struct ImageBox {
    image: ImageHandle,
}

impl ImageBox {
    pub fn new(image: ImageHandle) -> Self {
        Self { image }
    }
}

impl Positionable for ImageBox {
    fn measure(&self, available_width: f32, _config: &LayoutConfig) -> Size {
        Size::new(self.image.size.width.min(available_width), self.image.size.height)
    }

    fn place(&self, frame: Rect, config: &LayoutConfig) -> Vec<PositionedElement> {
        let size = self.measure(frame.width, config);
        vec![PositionedElement {
            x: frame.x,
            y: frame.y,
            width: size.width,
            height: size.height,
            element: LayoutElement::Image(ImageElement {
                source: self.image.source.clone(),
                data: self.image.data.clone(),
            }),
        }]
    }
}

/// Blank vertical space.
#[derive(Debug, Clone, Copy)]
pub struct Spacer {
    pub height: f32,
}

impl Spacer {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl Positionable for Spacer {
    fn measure(&self, available_width: f32, _config: &LayoutConfig) -> Size {
        Size::new(available_width, self.height)
    }

    fn place(&self, _frame: Rect, _config: &LayoutConfig) -> Vec<PositionedElement> {
        Vec::new()
    }
}
