use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use quire_layout::{FrameElement, ImageElement, LayoutElement, PositionedElement, TextElement};
use quire_render_core::utils::{encode_win_ansi, flip_y, font_resource_name};

const BASELINE_RATIO: f32 = 0.8;
const PLACEHOLDER_GRAY: f32 = 0.85;

#[derive(Default)]
struct PageRenderState {
    font_name: &'static str,
    font_size: f32,
}

struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

impl PageContext {
    fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Image(image) => self.draw_image(image, el),
            LayoutElement::Frame(frame) => self.draw_frame(frame, el),
        }
    }

    fn set_font(&mut self, font_name: &'static str, font_size: f32) {
        if self.state.font_name != font_name || self.state.font_size != font_size {
            self.push("Tf", vec![Object::Name(font_name.as_bytes().to_vec()), font_size.into()]);
            self.state.font_name = font_name;
            self.state.font_size = font_size;
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.runs.iter().all(|run| run.text.is_empty()) {
            return;
        }
        self.push("BT", vec![]);
        // Font state does not survive ET.
        self.state = PageRenderState::default();
        let pdf_y = flip_y(el.y + text.font_size * BASELINE_RATIO, self.page_height);
        self.push("Td", vec![el.x.into(), pdf_y.into()]);
        for run in text.runs.iter().filter(|run| !run.text.is_empty()) {
            self.set_font(font_resource_name(run.style), text.font_size);
            self.push(
                "Tj",
                vec![Object::String(encode_win_ansi(&run.text), StringFormat::Literal)],
            );
        }
        self.push("ET", vec![]);
    }

    /// Images are drawn as a gray placeholder box of the placed size.
    fn draw_image(&mut self, image: &ImageElement, el: &PositionedElement) {
        log::debug!(
            "Drawing placeholder for image '{}' ({} bytes)",
            image.source,
            image.data.len()
        );
        let y = flip_y(el.y + el.height, self.page_height);
        self.push("q", vec![]);
        self.push("g", vec![PLACEHOLDER_GRAY.into()]);
        self.push("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.push("f", vec![]);
        self.push("Q", vec![]);
    }

    fn draw_frame(&mut self, frame: &FrameElement, el: &PositionedElement) {
        let y = flip_y(el.y + el.height, self.page_height);
        self.push("q", vec![]);
        self.push("w", vec![frame.line_width.into()]);
        self.push("RG", vec![1.0f32.into(), 0.0f32.into(), 0.0f32.into()]);
        self.push("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.push("S", vec![]);
        self.push("Q", vec![]);
    }
}

/// Builds the content stream for one page. Element coordinates are top-left
/// based and are flipped into PDF space using `page_height`.
pub fn render_elements_to_content(elements: &[PositionedElement], page_height: f32) -> Content {
    let mut ctx = PageContext::new(page_height);
    for el in elements {
        ctx.draw_element(el);
    }
    ctx.finish()
}
