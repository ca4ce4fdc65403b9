//! Definition content of a term.

use {
    crate::{
        DecodeError, json,
        structured::{self, Node},
        wire::{Lenient, Strict, wire_enum},
    },
    serde::Serialize,
    serde_json::Value,
    tracing::trace,
};

wire_enum! {
    /// Discriminant of an object-shaped [`Content`].
    pub enum ContentKind as "type" {
        /// [`Content::Text`].
        Text = "text",
        /// [`Content::Image`].
        Image = "image",
        /// [`Content::StructuredContent`].
        StructuredContent = "structured-content",
    }
}

impl Strict for ContentKind {}

wire_enum! {
    /// Controls how an image is rendered.
    #[derive(Default)]
    pub enum ImageRendering as "imageRendering" {
        /// Let the renderer decide.
        #[default]
        Auto = "auto",
        /// Scale with nearest-neighbour sampling.
        Pixelated = "pixelated",
        /// Preserve contrast and edges when scaling.
        CrispEdges = "crisp-edges",
    }
}

impl Lenient for ImageRendering {}

wire_enum! {
    /// Controls the appearance of an image.
    ///
    /// [`ImageAppearance::Monochrome`] masks the opaque parts of the image
    /// using the current text color.
    #[derive(Default)]
    pub enum ImageAppearance as "appearance" {
        /// Draw the image as-is.
        #[default]
        Auto = "auto",
        /// Mask the image with the text color.
        Monochrome = "monochrome",
    }
}

impl Lenient for ImageAppearance {}

/// Single definition of a term.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum Content {
    /// Plain text. A bare JSON string decodes to this.
    Text(String),
    /// Image stored inside the dictionary archive.
    Image(Image),
    /// Tree of HTML-like markup.
    StructuredContent(Vec<Node>),
}

/// Image definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Fields shared with `img` elements.
    #[serde(flatten)]
    pub fields: ImageFields,
    /// Description of the image.
    pub description: Option<String>,
}

/// Fields shared by [`Image`] content and `img` elements in structured
/// content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFields {
    /// Path to the image file, relative to the archive root.
    pub path: String,
    /// Preferred width of the image.
    pub width: Option<f64>,
    /// Preferred height of the image.
    pub height: Option<f64>,
    /// Hover text for the image.
    pub title: Option<String>,
    /// Whether the image should appear pixelated at sizes larger than its
    /// native resolution.
    pub pixelated: bool,
    /// How the image is rendered. Supersedes [`ImageFields::pixelated`]; see
    /// [`ImageFields::rendering`].
    pub image_rendering: ImageRendering,
    /// Appearance of the image.
    pub appearance: ImageAppearance,
    /// Whether a background color is displayed behind the image.
    pub background: bool,
    /// Whether the image is collapsed by default.
    pub collapsed: bool,
    /// Whether the image can be collapsed.
    pub collapsible: bool,
}

impl ImageFields {
    pub(crate) fn decode(node: &Value) -> Result<Self, DecodeError> {
        Ok(Self {
            path: json::get_text(node, "path").ok_or(DecodeError::MissingField { field: "path" })?,
            width: json::get_double(node, "width"),
            height: json::get_double(node, "height"),
            title: json::get_text(node, "title"),
            pixelated: json::get_bool_or(node, "pixelated", false),
            image_rendering: ImageRendering::resolve_node(json::field(node, "imageRendering")),
            appearance: ImageAppearance::resolve_node(json::field(node, "appearance")),
            background: json::get_bool_or(node, "background", false),
            collapsed: json::get_bool_or(node, "collapsed", false),
            collapsible: json::get_bool_or(node, "collapsible", true),
        })
    }

    /// Rendering mode to actually use for this image.
    ///
    /// An explicit non-`auto` [`ImageFields::image_rendering`] wins; otherwise
    /// [`ImageFields::pixelated`] selects [`ImageRendering::Pixelated`].
    #[must_use]
    pub fn rendering(&self) -> ImageRendering {
        match self.image_rendering {
            ImageRendering::Auto if self.pixelated => ImageRendering::Pixelated,
            rendering => rendering,
        }
    }
}

impl Content {
    /// Decodes a single definition.
    ///
    /// # Errors
    ///
    /// Errors if `node` is neither a string nor an object, if its `type` is
    /// missing or unknown, or if the content of that type fails to decode.
    pub fn decode(node: &Value) -> Result<Self, DecodeError> {
        match node {
            Value::String(text) => Ok(Self::Text(text.clone())),
            Value::Object(_) => Self::decode_object(node),
            other => Err(DecodeError::unexpected("definition", other)),
        }
    }

    fn decode_object(node: &Value) -> Result<Self, DecodeError> {
        match ContentKind::require(node.get("type"))? {
            ContentKind::Text => Ok(Self::Text(
                json::get_text(node, "text").unwrap_or_default(),
            )),
            ContentKind::Image => Ok(Self::Image(Image {
                fields: ImageFields::decode(node)?,
                description: json::get_text(node, "description"),
            })),
            ContentKind::StructuredContent => {
                let root = node
                    .get("content")
                    .ok_or(DecodeError::MissingField { field: "content" })?;
                trace!("Decoding structured content");
                structured::decode(root).map(Self::StructuredContent)
            }
        }
    }

    /// Gets the kind of this content.
    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::Text,
            Self::Image(_) => ContentKind::Image,
            Self::StructuredContent(_) => ContentKind::StructuredContent,
        }
    }

    /// Gets this content as plain text, if it is only text.
    ///
    /// Structured content consisting of exactly one text leaf counts as text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::StructuredContent(nodes) => match nodes.as_slice() {
                [Node::Text(text)] => Some(text.as_str()),
                _ => None,
            },
            Self::Image(_) => None,
        }
    }
}

/// Decodes a list of definitions.
pub(crate) fn decode_all(node: Option<&Value>) -> Result<Vec<Content>, DecodeError> {
    match node {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(Content::decode).collect(),
        Some(other) => Err(DecodeError::not_array("definitions", other)),
    }
}
