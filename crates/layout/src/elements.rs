use quire_idf::{SharedData, SpanStyle, TextStr};

/// An element with its final position on a page. Coordinates have their
/// origin at the top-left corner of the page.
#[derive(Clone, Debug)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Clone, Debug)]
pub enum LayoutElement {
    Text(TextElement),
    Image(ImageElement),
    /// An outline drawn around a placed box when the debug overlay is on.
    Frame(FrameElement),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: TextStr,
    pub style: SpanStyle,
}

/// One line of text, possibly mixing styles.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub runs: Vec<TextRun>,
    pub font_size: f32,
}

impl TextElement {
    pub fn plain(text: impl Into<TextStr>, font_size: f32) -> Self {
        Self {
            runs: vec![TextRun {
                text: text.into(),
                style: SpanStyle::default(),
            }],
            font_size,
        }
    }

    pub fn content(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Clone, Debug)]
pub struct ImageElement {
    pub source: TextStr,
    pub data: SharedData,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameElement {
    pub line_width: f32,
}
