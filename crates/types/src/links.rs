use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Which SVG element an anchor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    #[default]
    Text,
    Rect,
}

/// A named rectangle read from an SVG layout, before it is tied to a product.
///
/// For text anchors `width`/`height` are estimates derived from the string
/// length and font size, not measured glyph boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorElement {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, rename = "type")]
    pub kind: AnchorKind,
}

impl AnchorElement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A persisted anchor scoped to `(product, layout_type, option_name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgAnchor {
    pub product_id: u32,
    pub layout_type: String,
    pub option_name: String,
    #[serde(flatten)]
    pub element: AnchorElement,
}

impl SvgAnchor {
    pub fn new(
        product_id: u32,
        layout_type: impl Into<String>,
        option_name: impl Into<String>,
        element: AnchorElement,
    ) -> Self {
        Self {
            product_id,
            layout_type: layout_type.into(),
            option_name: option_name.into(),
            element,
        }
    }

    pub fn name(&self) -> &str {
        &self.element.name
    }

    pub fn belongs_to(&self, layout_type: &str, option_name: &str) -> bool {
        self.layout_type == layout_type && self.option_name == option_name
    }
}

/// A link rectangle extracted from an admin-uploaded PDF template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfHyperlink {
    pub layout_type: String,
    pub layout_name: String,
    /// 1-based page of the assembled planner the link is placed on.
    pub page: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// `page:<n>` (1-based) for internal links, anything else is a URI.
    pub destination: String,
}

impl PdfHyperlink {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn destination(&self) -> LinkDestination {
        LinkDestination::parse(&self.destination)
    }
}

/// A parsed [`PdfHyperlink::destination`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDestination {
    /// 1-based page number.
    Page(u32),
    Uri(String),
    /// A `page:` prefix with a suffix that isn't a page number.
    Malformed(String),
    Empty,
}

impl LinkDestination {
    pub const PAGE_PREFIX: &'static str = "page:";

    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return LinkDestination::Empty;
        }
        match raw.strip_prefix(Self::PAGE_PREFIX) {
            Some(suffix) => suffix
                .trim()
                .parse::<u32>()
                .map(LinkDestination::Page)
                .unwrap_or_else(|_| LinkDestination::Malformed(raw.to_string())),
            None => LinkDestination::Uri(raw.to_string()),
        }
    }

    pub fn page(number: u32) -> String {
        format!("{}{}", Self::PAGE_PREFIX, number)
    }
}
