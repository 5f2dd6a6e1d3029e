//! Branch guide glyphs and their resolution.

/// One decoration role in a guide prefix.
///
/// Every cell of left-hand decoration ahead of a node's content is one of
/// these four roles; which glyph a role resolves to is the business of
/// [`GuideSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuidePart {
    /// Blank filler under a closed branch.
    Space,
    /// Vertical line: more siblings follow below at this depth.
    Continue,
    /// Branch with another sibling following.
    Fork,
    /// Branch with no more siblings.
    End,
}

impl GuidePart {
    /// All four roles, in table order.
    pub const ALL: [Self; 4] = [Self::Space, Self::Continue, Self::Fork, Self::End];

    const fn index(self) -> usize {
        match self {
            Self::Space => 0,
            Self::Continue => 1,
            Self::Fork => 2,
            Self::End => 3,
        }
    }
}

/// Built-in glyph table selected when Unicode output is allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuidePreset {
    /// Light box-drawing lines (the default).
    #[default]
    Lines,
    /// Heavy box-drawing lines.
    Heavy,
    /// Double box-drawing lines.
    Double,
}

const LINE_GUIDES: [&str; 4] = ["    ", "│   ", "├── ", "└── "];
const HEAVY_GUIDES: [&str; 4] = ["    ", "┃   ", "┣━━ ", "┗━━ "];
const DOUBLE_GUIDES: [&str; 4] = ["    ", "║   ", "╠══ ", "╚══ "];
const ASCII_GUIDES: [&str; 4] = ["    ", "|   ", "+-- ", "`-- "];

/// Glyph lookup for the four guide roles.
///
/// Resolution consults per-part overrides first, then the built-in table:
/// the ASCII-safe table when `ascii_only` is set, otherwise the selected
/// Unicode preset. Resolution is pure and never fails.
///
/// # Examples
///
/// ```
/// use treeguide::{GuidePart, GuideSet};
///
/// let guides = GuideSet::default();
/// assert_eq!(guides.resolve(GuidePart::Fork, false), "├── ");
/// assert_eq!(guides.resolve(GuidePart::Fork, true), "+-- ");
///
/// let custom = GuideSet::default().with_override(GuidePart::End, "'-> ");
/// assert_eq!(custom.resolve(GuidePart::End, false), "'-> ");
/// ```
#[derive(Clone, Debug)]
pub struct GuideSet {
    preset: GuidePreset,
    overrides: [Option<String>; 4],
}

impl Default for GuideSet {
    fn default() -> Self {
        Self::with_preset(GuidePreset::Lines)
    }
}

impl GuideSet {
    /// Light box-drawing guides (the default).
    #[must_use]
    pub fn lines() -> Self {
        Self::with_preset(GuidePreset::Lines)
    }

    /// Heavy box-drawing guides.
    #[must_use]
    pub fn heavy() -> Self {
        Self::with_preset(GuidePreset::Heavy)
    }

    /// Double box-drawing guides.
    #[must_use]
    pub fn double() -> Self {
        Self::with_preset(GuidePreset::Double)
    }

    /// Create a guide set using the given Unicode preset.
    #[must_use]
    pub fn with_preset(preset: GuidePreset) -> Self {
        Self {
            preset,
            overrides: [None, None, None, None],
        }
    }

    /// Override the glyph for one part.
    ///
    /// Overrides win in both Unicode and ASCII modes; unspecified parts
    /// fall back to the built-in table.
    #[must_use]
    pub fn with_override(mut self, part: GuidePart, glyph: impl Into<String>) -> Self {
        self.overrides[part.index()] = Some(glyph.into());
        self
    }

    /// Resolve a part to its glyph text.
    #[must_use]
    pub fn resolve(&self, part: GuidePart, ascii_only: bool) -> &str {
        if let Some(glyph) = &self.overrides[part.index()] {
            return glyph;
        }
        let table = if ascii_only {
            &ASCII_GUIDES
        } else {
            match self.preset {
                GuidePreset::Lines => &LINE_GUIDES,
                GuidePreset::Heavy => &HEAVY_GUIDES,
                GuidePreset::Double => &DOUBLE_GUIDES,
            }
        };
        table[part.index()]
    }
}
