//! Validated classification of generic content into a closed set of kinds.
//!
//! Anything that enters a cell or content slot passes through [`classify`]
//! first. Downstream code only ever observes a [`ContentKind`], never the raw
//! input value.

use crate::{SharedData, TextStr};
use quire_types::Size;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Invalid content: {0} cannot be used as cell content")]
    InvalidContent(String),
}

/// Visual attributes of a run of rich text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: TextStr,
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<TextStr>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::default(),
        }
    }

    pub fn bold(text: impl Into<TextStr>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle {
                bold: true,
                italic: false,
            },
        }
    }

    pub fn italic(text: impl Into<TextStr>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle {
                bold: false,
                italic: true,
            },
        }
    }
}

/// An ordered sequence of styled spans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichText {
    spans: Vec<Span>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The concatenated text of all spans, without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl FromIterator<Span> for RichText {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}

/// An opaque reference to image data. Decoding happens outside this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHandle {
    pub source: TextStr,
    pub data: SharedData,
    /// The size the image occupies when placed, in points.
    pub size: Size,
}

impl ImageHandle {
    pub fn new(source: impl Into<TextStr>, data: SharedData, size: Size) -> Self {
        Self {
            source: source.into(),
            data,
            size,
        }
    }
}

/// Raw input accepted at the content boundary, before classification.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentValue {
    Absent,
    Text(TextStr),
    Rich(RichText),
    Image(ImageHandle),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Json(Value),
}

impl fmt::Display for ContentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentValue::Absent => write!(f, "absent value"),
            ContentValue::Text(_) => write!(f, "string"),
            ContentValue::Rich(_) => write!(f, "rich text"),
            ContentValue::Image(img) => write!(f, "image `{}`", img.source),
            ContentValue::Int(i) => write!(f, "integer `{}`", i),
            ContentValue::UInt(u) => write!(f, "integer `{}`", u),
            ContentValue::Float(x) => write!(f, "float `{}`", x),
            ContentValue::Bool(b) => write!(f, "boolean `{}`", b),
            ContentValue::Json(Value::Array(items)) => {
                write!(f, "JSON array with {} element(s)", items.len())
            }
            ContentValue::Json(Value::Object(map)) => {
                write!(f, "JSON object with {} key(s)", map.len())
            }
            ContentValue::Json(Value::Bool(b)) => write!(f, "JSON boolean `{}`", b),
            ContentValue::Json(other) => write!(f, "JSON value `{}`", other),
        }
    }
}

impl From<&str> for ContentValue {
    fn from(s: &str) -> Self {
        ContentValue::Text(s.to_string())
    }
}

impl From<String> for ContentValue {
    fn from(s: String) -> Self {
        ContentValue::Text(s)
    }
}

impl From<RichText> for ContentValue {
    fn from(r: RichText) -> Self {
        ContentValue::Rich(r)
    }
}

impl From<ImageHandle> for ContentValue {
    fn from(img: ImageHandle) -> Self {
        ContentValue::Image(img)
    }
}

impl From<bool> for ContentValue {
    fn from(b: bool) -> Self {
        ContentValue::Bool(b)
    }
}

impl From<f64> for ContentValue {
    fn from(x: f64) -> Self {
        ContentValue::Float(x)
    }
}

impl From<f32> for ContentValue {
    fn from(x: f32) -> Self {
        // Widening through the shortest decimal keeps `0.1f32` as "0.1".
        ContentValue::Float(x.to_string().parse().unwrap_or(x as f64))
    }
}

impl From<Value> for ContentValue {
    fn from(v: Value) -> Self {
        ContentValue::Json(v)
    }
}

impl<T: Into<ContentValue>> From<Option<T>> for ContentValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(ContentValue::Absent, Into::into)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for ContentValue {
            fn from(i: $t) -> Self {
                ContentValue::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for ContentValue {
            fn from(u: $t) -> Self {
                ContentValue::UInt(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

/// The closed set of content kinds. Exactly one is active, and it never
/// changes after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ContentKind {
    #[default]
    Absent,
    PlainText(TextStr),
    RichText(RichText),
    Image(ImageHandle),
}

impl ContentKind {
    pub fn is_absent(&self) -> bool {
        matches!(self, ContentKind::Absent)
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, ContentKind::PlainText(_))
    }

    pub fn is_rich_text(&self) -> bool {
        matches!(self, ContentKind::RichText(_))
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ContentKind::Image(_))
    }

    pub fn as_plain_text(&self) -> Option<&str> {
        match self {
            ContentKind::PlainText(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_rich_text(&self) -> Option<&RichText> {
        match self {
            ContentKind::RichText(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageHandle> {
        match self {
            ContentKind::Image(img) => Some(img),
            _ => None,
        }
    }

    /// The text a renderer would show for this content; empty for images and
    /// absent content.
    pub fn display_text(&self) -> String {
        match self {
            ContentKind::PlainText(s) => s.clone(),
            ContentKind::RichText(r) => r.plain_text(),
            ContentKind::Absent | ContentKind::Image(_) => String::new(),
        }
    }
}

impl TryFrom<ContentValue> for ContentKind {
    type Error = ContentError;

    fn try_from(value: ContentValue) -> Result<Self, Self::Error> {
        match value {
            ContentValue::Absent => Ok(ContentKind::Absent),
            ContentValue::Text(s) => Ok(ContentKind::PlainText(s)),
            ContentValue::Rich(r) => Ok(ContentKind::RichText(r)),
            ContentValue::Image(img) => Ok(ContentKind::Image(img)),
            ContentValue::Int(i) => Ok(ContentKind::PlainText(itoa::Buffer::new().format(i).to_string())),
            ContentValue::UInt(u) => Ok(ContentKind::PlainText(itoa::Buffer::new().format(u).to_string())),
            ContentValue::Float(x) => Ok(ContentKind::PlainText(format_float(x))),
            ContentValue::Json(Value::Null) => Ok(ContentKind::Absent),
            ContentValue::Json(Value::String(s)) => Ok(ContentKind::PlainText(s)),
            ContentValue::Json(Value::Number(n)) => {
                let text = if let Some(i) = n.as_i64() {
                    itoa::Buffer::new().format(i).to_string()
                } else if let Some(u) = n.as_u64() {
                    itoa::Buffer::new().format(u).to_string()
                } else {
                    format_float(n.as_f64().unwrap_or(f64::NAN))
                };
                Ok(ContentKind::PlainText(text))
            }
            rejected @ (ContentValue::Bool(_) | ContentValue::Json(_)) => {
                Err(ContentError::InvalidContent(rejected.to_string()))
            }
        }
    }
}

/// Shortest decimal that round-trips, never in exponent form and never
/// locale dependent.
fn format_float(x: f64) -> String {
    x.to_string()
}

/// Classifies a raw value into one of the four content kinds.
///
/// Numbers become plain text; booleans and structured JSON are rejected.
pub fn classify(value: impl Into<ContentValue>) -> Result<ContentKind, ContentError> {
    ContentKind::try_from(value.into())
}
