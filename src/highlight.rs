//! Highlight attribute table: style ids referenced by grid cells.
//!
//! `hl_attr_define` fills the id → attribute map, `hl_group_set` binds
//! highlight group names to ids, and `default_colors_set` provides the
//! fallback colors every unset attribute inherits at resolve time. Cells
//! only ever carry the id.

use std::collections::HashMap;

use bitflags::bitflags;

use crate::color::Rgb;

/// Identifier of a highlight attribute definition. Id `0` is the default
/// highlight and is never explicitly defined.
pub type HlId = u64;

bitflags! {
    /// Boolean rendering attributes of a highlight definition.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AttrFlags: u16 {
        const BOLD          = 0b0000_0001;
        const ITALIC        = 0b0000_0010;
        const UNDERLINE     = 0b0000_0100;
        const UNDERCURL     = 0b0000_1000;
        const UNDERDOUBLE   = 0b0001_0000;
        const UNDERDOTTED   = 0b0010_0000;
        const UNDERDASHED   = 0b0100_0000;
        const STRIKETHROUGH = 0b1000_0000;
        const REVERSE       = 0b0001_0000_0000;
    }
}

impl AttrFlags {
    /// Combined mask for all underline variants.
    pub const ANY_UNDERLINE: Self = Self::UNDERLINE
        .union(Self::UNDERCURL)
        .union(Self::UNDERDOUBLE)
        .union(Self::UNDERDOTTED)
        .union(Self::UNDERDASHED);
}

/// One highlight definition. Unset colors fall back to the defaults at
/// resolve time; the table never stores resolved colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HlAttr {
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub special: Option<Rgb>,
    pub flags: AttrFlags,
    /// Blend level 0-100 for floating window transparency.
    pub blend: u8,
}

/// Resolved colors for painting one run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub foreground: Rgb,
    pub background: Rgb,
    pub special: Rgb,
    pub flags: AttrFlags,
}

const FALLBACK_FG: Rgb = Rgb::new(0xff, 0xff, 0xff);
const FALLBACK_BG: Rgb = Rgb::new(0x00, 0x00, 0x00);
const FALLBACK_SPECIAL: Rgb = Rgb::new(0x89, 0xb4, 0xfa);

#[derive(Debug, Clone)]
pub struct HighlightTable {
    attrs: HashMap<HlId, HlAttr>,
    groups: HashMap<String, HlId>,
    pub default_fg: Rgb,
    pub default_bg: Rgb,
    pub default_special: Rgb,
}

impl Default for HighlightTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightTable {
    pub fn new() -> Self {
        Self {
            attrs: HashMap::new(),
            groups: HashMap::new(),
            default_fg: FALLBACK_FG,
            default_bg: FALLBACK_BG,
            default_special: FALLBACK_SPECIAL,
        }
    }

    /// Installs or replaces an attribute definition.
    pub fn define(&mut self, id: HlId, attr: HlAttr) {
        self.attrs.insert(id, attr);
    }

    /// Binds a highlight group name to an attribute id.
    pub fn set_group(&mut self, name: impl Into<String>, id: HlId) {
        self.groups.insert(name.into(), id);
    }

    /// Looks up a group's attribute id by name.
    pub fn group(&self, name: &str) -> Option<HlId> {
        self.groups.get(name).copied()
    }

    /// Sets the default colors. `None` keeps the built-in fallback.
    pub fn set_defaults(&mut self, fg: Option<Rgb>, bg: Option<Rgb>, special: Option<Rgb>) {
        self.default_fg = fg.unwrap_or(FALLBACK_FG);
        self.default_bg = bg.unwrap_or(FALLBACK_BG);
        self.default_special = special.unwrap_or(FALLBACK_SPECIAL);
    }

    /// Returns the raw definition for an id, if any. Id `0` and unknown
    /// ids have no definition and resolve to the defaults.
    pub fn get(&self, id: HlId) -> Option<&HlAttr> {
        self.attrs.get(&id)
    }

    /// Resolves the effective colors for a cell's highlight reference,
    /// applying default fallbacks and the reverse attribute.
    pub fn resolve(&self, id: Option<HlId>) -> ResolvedStyle {
        let attr = id.and_then(|id| self.attrs.get(&id)).copied().unwrap_or_default();

        let mut fg = attr.foreground.unwrap_or(self.default_fg);
        let mut bg = attr.background.unwrap_or(self.default_bg);
        let special = attr.special.unwrap_or(self.default_special);

        if attr.flags.contains(AttrFlags::REVERSE) {
            std::mem::swap(&mut fg, &mut bg);
        }

        ResolvedStyle {
            foreground: fg,
            background: bg,
            special,
            flags: attr.flags,
        }
    }
}
