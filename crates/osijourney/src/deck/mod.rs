pub mod info;
pub mod layers;
pub mod slides;

use serde::Serialize;

/// Which edition of the deck to present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeatureLevel {
    /// The core twelve slides.
    Base,
    /// The twelve slides with type scaled up for projectors.
    LargeDisplay,
    /// Sixteen slides with expandable info panels.
    #[default]
    InfoPanels,
}

impl FeatureLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::LargeDisplay => "large",
            Self::InfoPanels => "info",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "base" => Some(Self::Base),
            "large" => Some(Self::LargeDisplay),
            "info" => Some(Self::InfoPanels),
            _ => None,
        }
    }

    pub fn all() -> &'static [FeatureLevel] {
        &[Self::Base, Self::LargeDisplay, Self::InfoPanels]
    }

    pub fn type_scale(&self) -> f32 {
        match self {
            Self::Base => 1.0,
            Self::LargeDisplay => 1.25,
            Self::InfoPanels => 1.1,
        }
    }

    pub fn has_info_panels(&self) -> bool {
        matches!(self, Self::InfoPanels)
    }
}

impl std::fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Named colors used by the content table; the theme maps them to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Layer(u8),
    Red,
    Yellow,
    Cyan,
    Green,
    Purple,
    Orange,
    Blue,
    Plain,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Down => "\u{2193} INCAPSULAMENTO",
            Self::Up => "\u{2191} DEINCAPSULAMENTO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Vertically centered title-style slide.
    Centered,
    /// Header row followed by bands of columns.
    Standard,
}

/// Which editions carry a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Edition {
    Core,
    Extended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    Display,
    Title,
    Subtitle,
    Body,
    Small,
}

#[derive(Debug, Clone, Serialize)]
pub struct Slide {
    pub key: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Direction>,
    pub layout: Layout,
    pub edition: Edition,
    pub bands: Vec<Band>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub info: Vec<InfoLink>,
}

/// A horizontal strip of equally wide columns.
#[derive(Debug, Clone, Serialize)]
pub struct Band {
    pub columns: Vec<Vec<Block>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfoLink {
    pub label: &'static str,
    pub key: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Text {
        text: &'static str,
        tone: Tone,
        size: TextSize,
        mono: bool,
        centered: bool,
    },
    Card {
        title: &'static str,
        tone: Tone,
        blocks: Vec<Block>,
    },
    /// `label: value` rows.
    Fields {
        rows: Vec<Field>,
        tone: Tone,
        mono: bool,
    },
    /// Label-over-value tiles in a two-column grid.
    Tiles {
        tiles: Vec<Field>,
        tone: Tone,
    },
    Bullets {
        items: Vec<&'static str>,
        tone: Tone,
    },
    /// Lines prefixed with a check mark.
    Checks {
        items: Vec<&'static str>,
        tone: Tone,
    },
    /// Protocol flags; `on` ones are drawn filled.
    Flags {
        on: Vec<&'static str>,
        off: Vec<&'static str>,
    },
    /// Rounded pills.
    Chips {
        items: Vec<&'static str>,
        tone: Tone,
    },
    Hex {
        bytes: Vec<&'static str>,
        highlight: Vec<usize>,
    },
    Callout {
        tone: Tone,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<&'static str>,
        lines: Vec<&'static str>,
    },
    /// Shown once the animation step reaches `at_step`.
    Reveal {
        at_step: u8,
        block: Box<Block>,
    },
    Widget {
        widget: Widget,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: &'static str,
    /// Value replaced by `value`, drawn struck through (e.g. NAT rewrites).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    Endpoints {
        from: Endpoint,
        to: Endpoint,
        message: &'static str,
    },
    /// The seven layers, sliding in one per animation step.
    LayerList,
    /// Packet stack growing with the animation step (downward).
    Encapsulation,
    /// Per-layer detail card following the animation step.
    LayerWalk {
        direction: Direction,
    },
    SignalWave {
        /// Active once the animation step exceeds this value.
        active_after_step: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<&'static str>,
    },
    HopDiagram {
        nodes: Vec<HopNode>,
    },
    HopCards {
        hops: Vec<HopCard>,
    },
    Pam5Levels {
        levels: Vec<&'static str>,
    },
    OverheadBars {
        rows: Vec<OverheadRow>,
    },
    EncryptionLayers {
        bands: Vec<CipherBand>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Endpoint {
    pub icon: &'static str,
    pub label: &'static str,
    pub address: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HopNode {
    pub name: &'static str,
    pub icon: &'static str,
    /// Position in percent of the diagram rect.
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HopCard {
    pub hop: u8,
    pub name: &'static str,
    pub action: &'static str,
    pub ttl: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverheadRow {
    pub label: &'static str,
    pub layer: u8,
    pub from: u32,
    pub to: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CipherBand {
    pub name: &'static str,
    pub content: &'static str,
    pub tone: Tone,
}

/// The slides of one edition, in presentation order.
#[derive(Debug, Clone)]
pub struct Deck {
    pub level: FeatureLevel,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new(level: FeatureLevel) -> Self {
        let slides = slides::all()
            .into_iter()
            .filter(|s| level.has_info_panels() || s.edition == Edition::Core)
            .map(|mut s| {
                if !level.has_info_panels() {
                    s.info.clear();
                }
                s
            })
            .collect();
        Self { level, slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn title(&self) -> &'static str {
        slides::DECK_TITLE
    }
}

// Content-table shorthands.

pub fn text(text: &'static str) -> Block {
    Block::Text {
        text,
        tone: Tone::Plain,
        size: TextSize::Body,
        mono: false,
        centered: false,
    }
}

pub fn styled(text: &'static str, tone: Tone, size: TextSize) -> Block {
    Block::Text {
        text,
        tone,
        size,
        mono: false,
        centered: false,
    }
}

pub fn centered(text: &'static str, tone: Tone, size: TextSize) -> Block {
    Block::Text {
        text,
        tone,
        size,
        mono: false,
        centered: true,
    }
}

pub fn mono(text: &'static str, tone: Tone) -> Block {
    Block::Text {
        text,
        tone,
        size: TextSize::Small,
        mono: true,
        centered: false,
    }
}

pub fn card(title: &'static str, tone: Tone, blocks: Vec<Block>) -> Block {
    Block::Card {
        title,
        tone,
        blocks,
    }
}

pub fn field(label: &'static str, value: &'static str) -> Field {
    Field {
        label,
        value,
        previous: None,
        tone: None,
    }
}

pub fn fields(tone: Tone, rows: &[(&'static str, &'static str)]) -> Block {
    Block::Fields {
        rows: rows.iter().map(|&(l, v)| field(l, v)).collect(),
        tone,
        mono: true,
    }
}

pub fn tiles(tone: Tone, tiles: &[(&'static str, &'static str)]) -> Block {
    Block::Tiles {
        tiles: tiles.iter().map(|&(l, v)| field(l, v)).collect(),
        tone,
    }
}

pub fn checks(tone: Tone, items: &[&'static str]) -> Block {
    Block::Checks {
        items: items.to_vec(),
        tone,
    }
}

pub fn callout(tone: Tone, title: Option<&'static str>, lines: &[&'static str]) -> Block {
    Block::Callout {
        tone,
        title,
        lines: lines.to_vec(),
    }
}

pub fn hex(bytes: &[&'static str], highlight: &[usize]) -> Block {
    Block::Hex {
        bytes: bytes.to_vec(),
        highlight: highlight.to_vec(),
    }
}

pub fn reveal(at_step: u8, block: Block) -> Block {
    Block::Reveal {
        at_step,
        block: Box::new(block),
    }
}

pub fn widget(widget: Widget) -> Block {
    Block::Widget { widget }
}

pub fn band(columns: Vec<Vec<Block>>) -> Band {
    Band { columns }
}

pub fn full(blocks: Vec<Block>) -> Band {
    Band {
        columns: vec![blocks],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names_round_trip() {
        for level in FeatureLevel::all() {
            assert_eq!(FeatureLevel::from_name(level.name()), Some(*level));
        }
        assert_eq!(FeatureLevel::from_name("deluxe"), None);
        assert_eq!(FeatureLevel::default(), FeatureLevel::InfoPanels);
    }

    #[test]
    fn test_base_deck_has_twelve_slides_without_info() {
        let deck = Deck::new(FeatureLevel::Base);
        assert_eq!(deck.len(), 12);
        assert!(deck.slides.iter().all(|s| s.info.is_empty()));
        assert!(deck.slides.iter().all(|s| s.edition == Edition::Core));
    }

    #[test]
    fn test_large_deck_matches_base_content() {
        let base = Deck::new(FeatureLevel::Base);
        let large = Deck::new(FeatureLevel::LargeDisplay);
        let base_keys: Vec<_> = base.slides.iter().map(|s| s.key).collect();
        let large_keys: Vec<_> = large.slides.iter().map(|s| s.key).collect();
        assert_eq!(base_keys, large_keys);
    }

    #[test]
    fn test_info_deck_has_sixteen_slides() {
        let deck = Deck::new(FeatureLevel::InfoPanels);
        assert_eq!(deck.len(), 16);
        assert_eq!(deck.get(0).map(|s| s.key), Some("intro"));
        assert_eq!(deck.get(15).map(|s| s.key), Some("end"));
        assert!(deck.get(16).is_none());
    }

    #[test]
    fn test_info_deck_keeps_core_order() {
        let base = Deck::new(FeatureLevel::Base);
        let info = Deck::new(FeatureLevel::InfoPanels);
        let core_in_info: Vec<_> = info
            .slides
            .iter()
            .filter(|s| s.edition == Edition::Core)
            .map(|s| s.key)
            .collect();
        let base_keys: Vec<_> = base.slides.iter().map(|s| s.key).collect();
        assert_eq!(core_in_info, base_keys);
    }

    #[test]
    fn test_deck_serializes_to_json() {
        let deck = Deck::new(FeatureLevel::InfoPanels);
        let json = serde_json::to_value(&deck.slides).expect("serialize");
        let first = &json[0];
        assert_eq!(first["key"], "intro");
        assert_eq!(first["layout"], "centered");
    }
}
