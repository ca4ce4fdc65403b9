//! Structured content: a small HTML-like markup tree embedded in definitions.
//!
//! Only a closed set of [tags](HtmlTag) is legal, and each tag belongs to a
//! class which decides what attributes it may carry. Every class is its own
//! type here, so a `colSpan` on a `div` is not representable.
//!
//! See [`structured-content.d.ts`](https://github.com/yomidevs/yomitan/blob/master/types/ext/structured-content.d.ts).
#![expect(missing_docs, reason = "variants mirror the wire vocabulary")]

use {
    crate::{
        DecodeError,
        content::ImageFields,
        json,
        wire::{Lenient, Strict, wire_enum},
    },
    derive_more::{Deref, DerefMut},
    indexmap::{IndexMap, IndexSet},
    serde::Serialize,
    serde_json::Value,
};

wire_enum! {
    /// Every tag that may appear in a structured content tree.
    pub enum HtmlTag as "tag" {
        Br = "br",
        Ruby = "ruby",
        Rt = "rt",
        Rp = "rp",
        Table = "table",
        Thead = "thead",
        Tbody = "tbody",
        Tfoot = "tfoot",
        Tr = "tr",
        Td = "td",
        Th = "th",
        Span = "span",
        Div = "div",
        Ol = "ol",
        Ul = "ul",
        Li = "li",
        Img = "img",
        A = "a",
    }
}

impl Strict for HtmlTag {}

wire_enum! {
    #[derive(Default)]
    pub enum FontStyle as "fontStyle" {
        #[default]
        Normal = "normal",
        Italic = "italic",
    }
}

impl Lenient for FontStyle {}

wire_enum! {
    #[derive(Default)]
    pub enum FontWeight as "fontWeight" {
        #[default]
        Normal = "normal",
        Bold = "bold",
    }
}

impl Lenient for FontWeight {}

wire_enum! {
    #[derive(Default)]
    pub enum TextAlign as "textAlign" {
        #[default]
        Start = "start",
        End = "end",
        Left = "left",
        Right = "right",
        Center = "center",
        Justify = "justify",
        JustifyAll = "justify-all",
        MatchParent = "match-parent",
    }
}

impl Lenient for TextAlign {}

wire_enum! {
    #[derive(Default)]
    pub enum VerticalAlign as "verticalAlign" {
        #[default]
        Baseline = "baseline",
        Sub = "sub",
        Super = "super",
        TextTop = "text-top",
        TextBottom = "text-bottom",
        Middle = "middle",
        Top = "top",
        Bottom = "bottom",
    }
}

impl Lenient for VerticalAlign {}

wire_enum! {
    #[derive(Default)]
    pub enum TextDecorationLine as "textDecorationLine" {
        #[default]
        None = "none",
        Underline = "underline",
        Overline = "overline",
        LineThrough = "line-through",
    }
}

impl Lenient for TextDecorationLine {}

wire_enum! {
    /// Units for the width and height of an `img`.
    pub enum SizeUnits as "sizeUnits" {
        Px = "px",
        Em = "em",
    }
}

impl Strict for SizeUnits {}

/// Tags of [`Container`] nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerTag {
    Ruby,
    Rt,
    Rp,
    Table,
    Thead,
    Tbody,
    Tfoot,
    Tr,
}

/// Tags of [`TableCell`] nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellTag {
    Td,
    Th,
}

/// Tags of [`Styled`] nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyledTag {
    Span,
    Div,
    Ol,
    Ul,
    Li,
}

impl From<ContainerTag> for HtmlTag {
    fn from(value: ContainerTag) -> Self {
        match value {
            ContainerTag::Ruby => Self::Ruby,
            ContainerTag::Rt => Self::Rt,
            ContainerTag::Rp => Self::Rp,
            ContainerTag::Table => Self::Table,
            ContainerTag::Thead => Self::Thead,
            ContainerTag::Tbody => Self::Tbody,
            ContainerTag::Tfoot => Self::Tfoot,
            ContainerTag::Tr => Self::Tr,
        }
    }
}

impl From<CellTag> for HtmlTag {
    fn from(value: CellTag) -> Self {
        match value {
            CellTag::Td => Self::Td,
            CellTag::Th => Self::Th,
        }
    }
}

impl From<StyledTag> for HtmlTag {
    fn from(value: StyledTag) -> Self {
        match value {
            StyledTag::Span => Self::Span,
            StyledTag::Div => Self::Div,
            StyledTag::Ol => Self::Ol,
            StyledTag::Ul => Self::Ul,
            StyledTag::Li => Self::Li,
        }
    }
}

/// Generic `data-*` attributes of an element, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut, Serialize)]
pub struct Data(pub IndexMap<String, String>);

/// Inline style of a [`TableCell`] or [`Styled`] node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStyle {
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    pub font_size: String,
    /// Never empty: no decoration is represented as
    /// `{`[`TextDecorationLine::None`]`}`.
    pub text_decoration_line: IndexSet<TextDecorationLine>,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub margin_top: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub list_style_type: String,
}

impl Default for ContentStyle {
    fn default() -> Self {
        Self {
            font_style: FontStyle::default(),
            font_weight: FontWeight::default(),
            font_size: "medium".into(),
            text_decoration_line: IndexSet::from([TextDecorationLine::None]),
            text_align: TextAlign::default(),
            vertical_align: VerticalAlign::default(),
            margin_top: 0.0,
            margin_left: 0.0,
            margin_right: 0.0,
            margin_bottom: 0.0,
            list_style_type: "disc".into(),
        }
    }
}

/// Node of a structured content tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "node", rename_all = "kebab-case")]
pub enum Node {
    /// Text leaf, decoded from a bare string.
    Text(String),
    /// `br`.
    LineBreak(LineBreak),
    /// `ruby`, `rt`, `rp`, `table`, `thead`, `tbody`, `tfoot`, `tr`.
    Container(Container),
    /// `td`, `th`.
    TableCell(TableCell),
    /// `span`, `div`, `ol`, `ul`, `li`.
    Styled(Styled),
    /// `img`.
    Image(ImageElement),
    /// `a`.
    Link(Link),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineBreak {
    pub data: Option<Data>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub tag: ContainerTag,
    pub children: Vec<Node>,
    pub data: Option<Data>,
    pub lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub tag: CellTag,
    pub children: Vec<Node>,
    pub data: Option<Data>,
    pub lang: Option<String>,
    pub col_span: Option<i64>,
    pub row_span: Option<i64>,
    /// [`None`] if the element has no `style` object, rather than a default
    /// style.
    pub style: Option<ContentStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Styled {
    pub tag: StyledTag,
    pub children: Vec<Node>,
    pub data: Option<Data>,
    pub lang: Option<String>,
    /// [`None`] if the element has no `style` object, rather than a default
    /// style.
    pub style: Option<ContentStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    #[serde(flatten)]
    pub image: ImageFields,
    pub data: Option<Data>,
    pub size_units: Option<SizeUnits>,
    pub vertical_align: VerticalAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub children: Vec<Node>,
    /// Target of the link. URLs starting with `?` are internal links to other
    /// dictionary content.
    pub href: Option<String>,
    pub lang: Option<String>,
}

impl Node {
    /// Gets the markup tag of this node, or [`None`] for a text leaf.
    #[must_use]
    pub fn tag(&self) -> Option<HtmlTag> {
        match self {
            Self::Text(_) => None,
            Self::LineBreak(_) => Some(HtmlTag::Br),
            Self::Container(node) => Some(node.tag.into()),
            Self::TableCell(node) => Some(node.tag.into()),
            Self::Styled(node) => Some(node.tag.into()),
            Self::Image(_) => Some(HtmlTag::Img),
            Self::Link(_) => Some(HtmlTag::A),
        }
    }

    /// Gets the child nodes of this node. Empty for classes which cannot have
    /// children.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Container(node) => &node.children,
            Self::TableCell(node) => &node.children,
            Self::Styled(node) => &node.children,
            Self::Link(node) => &node.children,
            Self::Text(_) | Self::LineBreak(_) | Self::Image(_) => &[],
        }
    }

    /// Gets the text of a text leaf.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Gets the `data-*` attributes of this node.
    #[must_use]
    pub fn data(&self) -> Option<&Data> {
        match self {
            Self::LineBreak(node) => node.data.as_ref(),
            Self::Container(node) => node.data.as_ref(),
            Self::TableCell(node) => node.data.as_ref(),
            Self::Styled(node) => node.data.as_ref(),
            Self::Image(node) => node.data.as_ref(),
            Self::Text(_) | Self::Link(_) => None,
        }
    }
}

/// Decodes a structured content tree.
///
/// A string decodes to a single text leaf, an object to a single element, and
/// an array to the concatenation of its decoded elements: arrays never
/// produce a node of their own.
///
/// # Errors
///
/// Errors if any position in the tree holds a number, boolean or `null`, if
/// any element has a missing or unknown tag, or if any attribute fails to
/// decode. This includes elements nested arbitrarily deep.
pub fn decode(node: &Value) -> Result<Vec<Node>, DecodeError> {
    let mut nodes = Vec::new();
    decode_into(node, &mut nodes)?;
    Ok(nodes)
}

fn decode_into(node: &Value, parent: &mut Vec<Node>) -> Result<(), DecodeError> {
    match node {
        Value::String(text) => parent.push(Node::Text(text.clone())),
        Value::Array(items) => {
            for item in items {
                decode_into(item, parent)?;
            }
        }
        Value::Object(_) => parent.push(decode_element(node)?),
        other => return Err(DecodeError::unexpected("structured content", other)),
    }
    Ok(())
}

fn decode_element(node: &Value) -> Result<Node, DecodeError> {
    let tag = HtmlTag::require(node.get("tag"))?;
    Ok(match tag {
        HtmlTag::Br => Node::LineBreak(LineBreak {
            data: decode_data(node)?,
        }),
        HtmlTag::Ruby => Node::Container(Container::decode(ContainerTag::Ruby, node)?),
        HtmlTag::Rt => Node::Container(Container::decode(ContainerTag::Rt, node)?),
        HtmlTag::Rp => Node::Container(Container::decode(ContainerTag::Rp, node)?),
        HtmlTag::Table => Node::Container(Container::decode(ContainerTag::Table, node)?),
        HtmlTag::Thead => Node::Container(Container::decode(ContainerTag::Thead, node)?),
        HtmlTag::Tbody => Node::Container(Container::decode(ContainerTag::Tbody, node)?),
        HtmlTag::Tfoot => Node::Container(Container::decode(ContainerTag::Tfoot, node)?),
        HtmlTag::Tr => Node::Container(Container::decode(ContainerTag::Tr, node)?),
        HtmlTag::Td => Node::TableCell(TableCell::decode(CellTag::Td, node)?),
        HtmlTag::Th => Node::TableCell(TableCell::decode(CellTag::Th, node)?),
        HtmlTag::Span => Node::Styled(Styled::decode(StyledTag::Span, node)?),
        HtmlTag::Div => Node::Styled(Styled::decode(StyledTag::Div, node)?),
        HtmlTag::Ol => Node::Styled(Styled::decode(StyledTag::Ol, node)?),
        HtmlTag::Ul => Node::Styled(Styled::decode(StyledTag::Ul, node)?),
        HtmlTag::Li => Node::Styled(Styled::decode(StyledTag::Li, node)?),
        HtmlTag::Img => Node::Image(ImageElement {
            image: ImageFields::decode(node)?,
            data: decode_data(node)?,
            size_units: SizeUnits::optional(json::field(node, "sizeUnits"))?,
            vertical_align: VerticalAlign::resolve_node(json::field(node, "verticalAlign")),
        }),
        HtmlTag::A => Node::Link(Link {
            children: decode_children(node)?,
            href: json::get_text(node, "href"),
            lang: json::get_text(node, "lang"),
        }),
    })
}

impl Container {
    fn decode(tag: ContainerTag, node: &Value) -> Result<Self, DecodeError> {
        Ok(Self {
            tag,
            children: decode_children(node)?,
            data: decode_data(node)?,
            lang: json::get_text(node, "lang"),
        })
    }
}

impl TableCell {
    fn decode(tag: CellTag, node: &Value) -> Result<Self, DecodeError> {
        Ok(Self {
            tag,
            children: decode_children(node)?,
            data: decode_data(node)?,
            lang: json::get_text(node, "lang"),
            col_span: json::get_int(node, "colSpan"),
            row_span: json::get_int(node, "rowSpan"),
            style: decode_style(node)?,
        })
    }
}

impl Styled {
    fn decode(tag: StyledTag, node: &Value) -> Result<Self, DecodeError> {
        Ok(Self {
            tag,
            children: decode_children(node)?,
            data: decode_data(node)?,
            lang: json::get_text(node, "lang"),
            style: decode_style(node)?,
        })
    }
}

// an absent `content` field means no children, but an explicit `null` is
// treated like any other illegal node
fn decode_children(node: &Value) -> Result<Vec<Node>, DecodeError> {
    node.get("content").map_or_else(|| Ok(Vec::new()), decode)
}

fn decode_data(node: &Value) -> Result<Option<Data>, DecodeError> {
    match json::field(node, "data") {
        None => Ok(None),
        Some(Value::Object(object)) => Ok(Some(Data(json::text_entries(object).collect()))),
        Some(other) => Err(DecodeError::not_object("data", other)),
    }
}

fn decode_style(node: &Value) -> Result<Option<ContentStyle>, DecodeError> {
    let style = match json::field(node, "style") {
        None => return Ok(None),
        Some(style @ Value::Object(_)) => style,
        Some(other) => return Err(DecodeError::not_object("style", other)),
    };
    Ok(Some(ContentStyle {
        font_style: FontStyle::resolve_node(style.get("fontStyle")),
        font_weight: FontWeight::resolve_node(style.get("fontWeight")),
        font_size: json::get_text_or(style, "fontSize", "medium"),
        text_decoration_line: decode_text_decoration_line(style.get("textDecorationLine"))?,
        text_align: TextAlign::resolve_node(style.get("textAlign")),
        vertical_align: VerticalAlign::resolve_node(style.get("verticalAlign")),
        margin_top: json::get_double_or(style, "marginTop", 0.0),
        margin_left: json::get_double_or(style, "marginLeft", 0.0),
        margin_right: json::get_double_or(style, "marginRight", 0.0),
        margin_bottom: json::get_double_or(style, "marginBottom", 0.0),
        list_style_type: json::get_text_or(style, "listStyleType", "disc"),
    }))
}

fn decode_text_decoration_line(
    node: Option<&Value>,
) -> Result<IndexSet<TextDecorationLine>, DecodeError> {
    let mut lines = IndexSet::new();
    match node {
        None | Some(Value::Null) => {}
        Some(Value::String(line)) => {
            lines.insert(TextDecorationLine::resolve(Some(line)));
        }
        Some(Value::Array(items)) => {
            for item in items {
                let line = item
                    .as_str()
                    .ok_or_else(|| DecodeError::unexpected("textDecorationLine", item))?;
                lines.insert(TextDecorationLine::resolve(Some(line)));
            }
        }
        Some(other) => return Err(DecodeError::unexpected("textDecorationLine", other)),
    }
    if lines.is_empty() {
        lines.insert(TextDecorationLine::None);
    }
    Ok(lines)
}
