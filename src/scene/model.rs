use std::collections::BTreeMap;

use crate::foundation::value::PropMap;

/// JSON-facing deck description.
///
/// This is what deck-authoring tools emit. It is immutable for a presenting session and validated
/// before use (see [`crate::scene::deck::Deck::validate`]).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeckDef {
    /// Optional human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Nominal design resolution; only its aspect ratio matters to viewport fitting.
    #[serde(default)]
    pub size: SizeDef,
    /// Named jump targets, slide name to 0-based slide index.
    #[serde(default)]
    pub slide_ids: BTreeMap<String, usize>,
    /// Slides in presentation order.
    pub slides: Vec<SlideDef>,
}

/// Design resolution of a deck.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SizeDef {
    /// Width in design units.
    pub width: f64,
    /// Height in design units.
    pub height: f64,
}

impl Default for SizeDef {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// One slide: background, layout-generated content, and free-form objects.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideDef {
    /// Canvas background color while this slide is shown.
    #[serde(
        rename = "backgroundColor",
        alias = "background_color",
        default = "default_background"
    )]
    pub background_color: String,
    /// Layout kind and its fields, tagged by `layout`.
    #[serde(flatten)]
    pub layout: LayoutDef,
    /// Free-form visual objects, drawn after the layout in this order.
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
}

/// Layout-generated slide content.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum LayoutDef {
    /// Heading plus a vertically centered bullet list.
    Bullets {
        /// Heading above the list.
        title: HeadingDef,
        /// The bullet list.
        bullets: BulletsDef,
    },
    /// Full-canvas embedded markup.
    Html {
        /// Markup rendered as foreign content.
        #[serde(default)]
        content: String,
    },
    /// Single centered heading.
    Section(TextDef),
    /// Centered title with a multi-line subtitle.
    Title {
        /// Main title line.
        title: TextDef,
        /// Subtitle lines.
        #[serde(default)]
        subtitle: SubtitleDef,
    },
    /// No layout content.
    Blank,
}

/// Heading of a bullets slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeadingDef {
    /// Heading text.
    #[serde(default)]
    pub content: String,
    /// Font size.
    #[serde(default = "default_heading_size")]
    pub size: f64,
    /// Font family.
    #[serde(default = "default_font")]
    pub font: String,
    /// Fill color.
    #[serde(default = "default_color")]
    pub color: String,
    /// Left inset.
    #[serde(default = "default_padding")]
    pub padding_left: f64,
    /// Top inset.
    #[serde(default = "default_padding")]
    pub padding_top: f64,
}

/// Bullet list of a bullets slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BulletsDef {
    /// Items, in order.
    #[serde(default)]
    pub content: Vec<BulletItemDef>,
    /// Font size.
    #[serde(default = "default_bullet_size")]
    pub size: f64,
    /// Font family.
    #[serde(default = "default_font")]
    pub font: String,
    /// Default item color.
    #[serde(default = "default_color")]
    pub color: String,
    /// Extra vertical space between items.
    #[serde(default = "default_bullet_spacing")]
    pub spacing: f64,
    /// Left inset.
    #[serde(default = "default_bullet_padding")]
    pub padding_left: f64,
    /// Prefix drawn before each item.
    #[serde(default = "default_bullet")]
    pub bullet: String,
    /// Reveal items one build step at a time.
    #[serde(default)]
    pub build: bool,
}

/// A bullet item: either plain text or text with its own color.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum BulletItemDef {
    /// Plain text item.
    Plain(String),
    /// Item with an optional color override.
    Styled {
        /// Item text.
        #[serde(default)]
        text: String,
        /// Color override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
}

impl BulletItemDef {
    /// Item text.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Styled { text, .. } => text,
        }
    }

    /// Color override, if any.
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Styled { color, .. } => color.as_deref(),
        }
    }
}

/// A single styled line of text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextDef {
    /// Text content.
    #[serde(default)]
    pub content: String,
    /// Font size; each layout has its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Font family.
    #[serde(default = "default_font")]
    pub font: String,
    /// Fill color.
    #[serde(default = "default_color")]
    pub color: String,
}

impl TextDef {
    /// Text with default size, font and color.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: None,
            font: default_font(),
            color: default_color(),
        }
    }

    /// Font size, or `default` when the deck omits one.
    pub fn size_or(&self, default: f64) -> f64 {
        self.size.unwrap_or(default)
    }
}

/// Subtitle lines of a title slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubtitleDef {
    /// One entry per line.
    #[serde(default)]
    pub content: Vec<String>,
    /// Font size.
    #[serde(default = "default_subtitle_size")]
    pub size: f64,
    /// Font family.
    #[serde(default = "default_font")]
    pub font: String,
    /// Fill color.
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for SubtitleDef {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            size: default_subtitle_size(),
            font: default_font(),
            color: default_color(),
        }
    }
}

/// A free-form visual object.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectDef {
    /// Drawing primitive (`rect`, `text`, `circle`, ...) or `html` for embedded content.
    #[serde(rename = "type")]
    pub kind: String,
    /// Presentation attributes.
    #[serde(default)]
    pub attrs: PropMap,
    /// Style properties.
    #[serde(default)]
    pub style: PropMap,
    /// Identity used to match this object across an animated slide change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Reveal gating.
    #[serde(default, skip_serializing_if = "Build::is_immediate")]
    pub build: Build,
    /// Milliseconds this object takes to morph into its match on the next slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_length: Option<f64>,
    /// Text lines, drawn as stacked spans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    /// Markup for `html` objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ObjectDef {
    /// Object of the given primitive kind with no properties.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: PropMap::new(),
            style: PropMap::new(),
            id: None,
            build: Build::Immediate,
            transition_length: None,
            text: None,
            content: None,
        }
    }

    /// Transition length in whole milliseconds, falling back to `default_ms`.
    pub fn transition_ms(&self, default_ms: u64) -> u64 {
        match self.transition_length {
            Some(ms) if ms.is_finite() && ms >= 0.0 => ms.round() as u64,
            _ => default_ms,
        }
    }

    /// Whether this object may be the target of an animated transition.
    pub fn is_transition_target(&self) -> bool {
        self.id.is_some() && self.build.is_immediate()
    }
}

/// When an object becomes visible.
///
/// In JSON: absent or `false` is [`Build::Immediate`], `true` is [`Build::Step`], and a positive
/// integer `k` is [`Build::Group`]`(k)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "BuildRepr", into = "BuildRepr")]
pub enum Build {
    /// Shown as soon as the slide renders.
    #[default]
    Immediate,
    /// Revealed by its own build step.
    Step,
    /// Revealed together with every object sharing the same key.
    Group(u64),
}

impl Build {
    /// Shown as soon as the slide renders.
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate)
    }

    /// Hidden until a build step reveals it.
    pub fn is_gated(&self) -> bool {
        !self.is_immediate()
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum BuildRepr {
    Flag(bool),
    Key(u64),
}

impl From<BuildRepr> for Build {
    fn from(r: BuildRepr) -> Self {
        match r {
            BuildRepr::Flag(false) => Self::Immediate,
            BuildRepr::Flag(true) => Self::Step,
            BuildRepr::Key(k) => Self::Group(k),
        }
    }
}

impl From<Build> for BuildRepr {
    fn from(b: Build) -> Self {
        match b {
            Build::Immediate => Self::Flag(false),
            Build::Step => Self::Flag(true),
            Build::Group(k) => Self::Key(k),
        }
    }
}

pub(crate) fn default_background() -> String {
    "black".to_owned()
}

pub(crate) fn default_color() -> String {
    "white".to_owned()
}

pub(crate) fn default_font() -> String {
    "sans-serif".to_owned()
}

fn default_heading_size() -> f64 {
    80.0
}

fn default_subtitle_size() -> f64 {
    60.0
}

fn default_bullet_size() -> f64 {
    60.0
}

fn default_bullet_spacing() -> f64 {
    20.0
}

fn default_padding() -> f64 {
    100.0
}

fn default_bullet_padding() -> f64 {
    150.0
}

fn default_bullet() -> String {
    "• ".to_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
