use std::collections::BTreeMap;

use super::node::Element;

/// Named places on the page the renderer writes into. Body order follows
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot {
    Photo,
    Name,
    Links,
    QrCode,
}

impl Slot {
    pub fn element_id(&self) -> &'static str {
        match self {
            Slot::Photo => "profile-photo",
            Slot::Name => "profile-name",
            Slot::Links => "links",
            Slot::QrCode => "qr-code",
        }
    }

    fn default_element(&self) -> Element {
        let tag = match self {
            Slot::Photo | Slot::QrCode => "img",
            Slot::Name => "h1",
            Slot::Links => "ul",
        };
        Element::new(tag).with_attr("id", self.element_id())
    }
}

/// The single stylesheet target of a page. Its content is only ever
/// replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSink {
    css: String,
    writes: u32,
}

impl StyleSink {
    pub const ELEMENT_ID: &'static str = "dynamic-style";

    pub fn replace(&mut self, css: String) {
        self.css = css;
        self.writes += 1;
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    /// Number of times the content has been replaced.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

/// A page skeleton: whichever slots exist, plus at most one style sink.
#[derive(Debug, Clone, Default)]
pub struct Page {
    title: String,
    slots: BTreeMap<Slot, Element>,
    style: Option<StyleSink>,
}

impl Page {
    /// A page with no slots. Renders into it change only the style sink.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The usual link-hub layout with every slot present.
    pub fn standard() -> Self {
        [Slot::Photo, Slot::Name, Slot::Links, Slot::QrCode]
            .into_iter()
            .fold(Self::empty(), |page, slot| page.with_slot(slot))
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.insert(slot, slot.default_element());
        self
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slot(&self, slot: Slot) -> Option<&Element> {
        self.slots.get(&slot)
    }

    pub fn slot_mut(&mut self, slot: Slot) -> Option<&mut Element> {
        self.slots.get_mut(&slot)
    }

    /// Acquire the style sink, creating it on first use.
    pub fn style_sink(&mut self) -> &mut StyleSink {
        self.style.get_or_insert_with(StyleSink::default)
    }

    pub fn style(&self) -> Option<&StyleSink> {
        self.style.as_ref()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
        if !self.title.is_empty() {
            out.push_str(&Element::new("title").with_text(&self.title).to_html());
        }
        if let Some(sink) = &self.style {
            out.push_str("<style id=\"");
            out.push_str(StyleSink::ELEMENT_ID);
            out.push_str("\">");
            // Raw text element: CSS is not entity-escaped.
            out.push_str(sink.css());
            out.push_str("</style>");
        }
        out.push_str("</head><body>");
        for element in self.slots.values() {
            element.write_html(&mut out);
        }
        out.push_str("</body></html>");
        out
    }
}
