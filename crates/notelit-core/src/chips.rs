//! Chip overflow layout for label rows
//!
//! Decides which label chips render inline and which collapse behind a
//! "+N" badge. Widths are a fixed-slot approximation (every chip costs
//! the same slot regardless of text length) so the split is fully
//! deterministic and testable without any rendering environment.

use serde::Serialize;

use crate::note::Label;

/// Inline cap for the full-page (detail) view
pub const DETAIL_MAX_CHIPS: usize = 6;

/// Inline cap for card/list rows, applied on top of the width budget
pub const COMPACT_MAX_CHIPS: usize = 2;

/// Pixel budget of a compact chip row
pub const CONTAINER_MAX_WIDTH: u32 = 240;

/// Slot width consumed by each chip, regardless of its text
pub const CHIP_MAX_WIDTH: u32 = 80;

/// Width reserved for the trailing "add label" control
pub const PLUS_WIDTH: u32 = 28;

/// Width reserved for the "+N" badge once overflow triggers
pub const BADGE_WIDTH: u32 = 36;

/// Where the chip row is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full-page view: count cap only
    Detail,
    /// Card/list row: width budget plus a tighter count cap
    Compact,
}

/// Width budget for compact packing. `Default` is the production
/// geometry; tests narrow it to exercise the eviction guard.
#[derive(Debug, Clone, Copy)]
pub struct CompactBudget {
    /// Total row width available
    pub container_width: u32,
    /// Fixed slot width per chip
    pub chip_width: u32,
    /// Reserved for the trailing add control
    pub plus_width: u32,
    /// Reserved for the overflow badge once needed
    pub badge_width: u32,
    /// Hard cap on inline chips even when width would allow more
    pub max_inline: usize,
}

impl Default for CompactBudget {
    fn default() -> Self {
        Self {
            container_width: CONTAINER_MAX_WIDTH,
            chip_width: CHIP_MAX_WIDTH,
            plus_width: PLUS_WIDTH,
            badge_width: BADGE_WIDTH,
            max_inline: COMPACT_MAX_CHIPS,
        }
    }
}

/// Result of a chip layout pass. Both sequences preserve the original
/// chip order; hidden chips render inside a single overflow disclosure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipLayout {
    /// Chips rendered inline
    pub visible: Vec<Label>,
    /// Chips collapsed behind the overflow badge, in original order
    pub hidden: Vec<Label>,
    /// Whether the "+N" badge is rendered
    pub overflow_needed: bool,
}

impl ChipLayout {
    fn from_split(visible: Vec<Label>, hidden: Vec<Label>) -> Self {
        let overflow_needed = !hidden.is_empty();
        Self {
            visible,
            hidden,
            overflow_needed,
        }
    }
}

/// Compute the visible/hidden split for a chip row
pub fn layout(chips: &[Label], mode: LayoutMode) -> ChipLayout {
    match mode {
        LayoutMode::Detail => layout_detail(chips),
        LayoutMode::Compact => layout_compact(chips, &CompactBudget::default()),
    }
}

fn layout_detail(chips: &[Label]) -> ChipLayout {
    let cut = chips.len().min(DETAIL_MAX_CHIPS);
    ChipLayout::from_split(chips[..cut].to_vec(), chips[cut..].to_vec())
}

/// Pack chips left to right into the width budget.
///
/// Each candidate is rejected if it would be the `(max_inline + 1)`th
/// chip, or if its slot plus the reserved add-control width would
/// exceed the container. The first rejection sends every remaining chip
/// to `hidden`.
pub fn layout_compact(chips: &[Label], budget: &CompactBudget) -> ChipLayout {
    let mut visible: Vec<Label> = Vec::new();
    let mut hidden: Vec<Label> = Vec::new();
    let mut used_width = 0u32;

    for (i, chip) in chips.iter().enumerate() {
        let over_cap = visible.len() == budget.max_inline;
        let over_width =
            used_width + budget.chip_width + budget.plus_width > budget.container_width;
        if over_cap || over_width {
            hidden.extend(chips[i..].iter().cloned());
            break;
        }
        visible.push(chip.clone());
        used_width += budget.chip_width;
    }

    // The badge is only provisioned once the loop has decided overflow
    // exists; if the accepted chips no longer fit next to it, evict the
    // last one into the front of the disclosure.
    if !hidden.is_empty()
        && !visible.is_empty()
        && used_width + budget.plus_width + budget.badge_width > budget.container_width
    {
        if let Some(evicted) = visible.pop() {
            hidden.insert(0, evicted);
        }
    }

    ChipLayout::from_split(visible, hidden)
}
