//! Viewport classification for the POS screen.
//!
//! Two independent axes come out of the viewport width: catalog grid density (600/1200
//! breakpoints) and cart placement (768 breakpoint). Classification is a pure function; the
//! runtime re-runs it on every resize notification.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Width thresholds in CSS pixels.
#[serde(default)]
pub struct LayoutBreakpoints {
    /// Widths below this are [`GridDensity::Compact`].
    pub regular_min_width: u32,
    /// Widths at or above this are [`GridDensity::Wide`].
    pub wide_min_width: u32,
    /// Widths at or above this show the cart inline.
    pub inline_cart_min_width: u32,
}

impl Default for LayoutBreakpoints {
    fn default() -> Self {
        Self {
            regular_min_width: 600,
            wide_min_width: 1200,
            inline_cart_min_width: 768,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridDensity {
    Compact,
    Regular,
    Wide,
}

impl GridDensity {
    /// Catalog grid column count.
    pub fn columns(self) -> u8 {
        match self {
            Self::Compact => 2,
            Self::Regular => 3,
            Self::Wide => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartPlacement {
    /// Cart panel rendered beside the catalog.
    Inline,
    /// Cart panel hidden behind a floating action button.
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationMode {
    pub density: GridDensity,
    pub cart: CartPlacement,
}

impl PresentationMode {
    pub fn columns(self) -> u8 {
        self.density.columns()
    }

    pub fn shows_cart_inline(self) -> bool {
        self.cart == CartPlacement::Inline
    }
}

impl LayoutBreakpoints {
    pub fn classify(&self, width: u32) -> PresentationMode {
        let density = if width < self.regular_min_width {
            GridDensity::Compact
        } else if width < self.wide_min_width {
            GridDensity::Regular
        } else {
            GridDensity::Wide
        };
        let cart = if width < self.inline_cart_min_width {
            CartPlacement::Toggle
        } else {
            CartPlacement::Inline
        };
        PresentationMode { density, cart }
    }
}

/// Classifies `width` with the default breakpoints.
pub fn classify(width: u32) -> PresentationMode {
    LayoutBreakpoints::default().classify(width)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Current presentation mode plus the manual cart toggle used in [`CartPlacement::Toggle`] mode.
pub struct PresentationState {
    breakpoints: LayoutBreakpoints,
    mode: PresentationMode,
    cart_shown: bool,
}

impl PresentationState {
    pub fn new(breakpoints: LayoutBreakpoints, width: u32) -> Self {
        Self {
            breakpoints,
            mode: breakpoints.classify(width),
            cart_shown: false,
        }
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn breakpoints(&self) -> LayoutBreakpoints {
        self.breakpoints
    }

    /// Reclassifies for a new width. Returns `true` when the mode changed, in which case the
    /// manual cart toggle is reset to hidden.
    pub fn apply_width(&mut self, width: u32) -> bool {
        let mode = self.breakpoints.classify(width);
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.cart_shown = false;
        true
    }

    /// Flips the manual cart flag. Only observable while the cart is in toggle mode.
    pub fn toggle_cart(&mut self) {
        self.cart_shown = !self.cart_shown;
    }

    /// Whether the cart panel is on screen.
    pub fn cart_visible(&self) -> bool {
        match self.mode.cart {
            CartPlacement::Inline => true,
            CartPlacement::Toggle => self.cart_shown,
        }
    }

    /// Badge count for the floating cart button; only rendered in toggle mode with items.
    pub fn fab_badge(&self, total_items: u32) -> Option<u32> {
        (self.mode.cart == CartPlacement::Toggle && total_items > 0).then_some(total_items)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classify_reference_widths() {
        let phone = classify(500);
        assert_eq!(phone.density, GridDensity::Compact);
        assert_eq!(phone.cart, CartPlacement::Toggle);
        assert_eq!(phone.columns(), 2);

        let small_tablet = classify(700);
        assert_eq!(small_tablet.density, GridDensity::Regular);
        assert_eq!(small_tablet.cart, CartPlacement::Toggle);
        assert_eq!(small_tablet.columns(), 3);

        let tablet = classify(1000);
        assert_eq!(tablet.density, GridDensity::Regular);
        assert!(tablet.shows_cart_inline());

        let desktop = classify(1300);
        assert_eq!(desktop.density, GridDensity::Wide);
        assert!(desktop.shows_cart_inline());
        assert_eq!(desktop.columns(), 5);
    }

    #[test]
    fn breakpoints_are_inclusive_lower_bounds() {
        assert_eq!(classify(599).density, GridDensity::Compact);
        assert_eq!(classify(600).density, GridDensity::Regular);
        assert_eq!(classify(767).cart, CartPlacement::Toggle);
        assert_eq!(classify(768).cart, CartPlacement::Inline);
        assert_eq!(classify(1199).density, GridDensity::Regular);
        assert_eq!(classify(1200).density, GridDensity::Wide);
        assert_eq!(classify(0).columns(), 2);
    }

    #[test]
    fn cart_toggle_only_matters_in_toggle_mode() {
        let mut state = PresentationState::new(LayoutBreakpoints::default(), 500);
        assert!(!state.cart_visible());
        state.toggle_cart();
        assert!(state.cart_visible());
        state.toggle_cart();
        assert!(!state.cart_visible());

        let mut wide = PresentationState::new(LayoutBreakpoints::default(), 1300);
        assert!(wide.cart_visible());
        wide.toggle_cart();
        assert!(wide.cart_visible());
    }

    #[test]
    fn mode_change_resets_the_cart_toggle() {
        let mut state = PresentationState::new(LayoutBreakpoints::default(), 500);
        state.toggle_cart();

        assert!(!state.apply_width(520));
        assert!(state.cart_visible());

        assert!(state.apply_width(1000));
        assert!(state.cart_visible());
        assert!(state.apply_width(500));
        assert!(!state.cart_visible(), "flag must not survive the inline detour");
    }

    #[test]
    fn density_change_alone_also_resets_the_toggle() {
        let mut state = PresentationState::new(LayoutBreakpoints::default(), 500);
        state.toggle_cart();
        assert!(state.apply_width(700));
        assert_eq!(state.mode().cart, CartPlacement::Toggle);
        assert!(!state.cart_visible());
    }

    #[test]
    fn fab_badge_shows_item_count_only_in_toggle_mode() {
        let compact = PresentationState::new(LayoutBreakpoints::default(), 400);
        assert_eq!(compact.fab_badge(0), None);
        assert_eq!(compact.fab_badge(3), Some(3));

        let inline = PresentationState::new(LayoutBreakpoints::default(), 900);
        assert_eq!(inline.fab_badge(3), None);
    }

    #[test]
    fn custom_breakpoints_deserialize_with_defaults_for_missing_fields() {
        let breakpoints: LayoutBreakpoints =
            serde_json::from_str(r#"{"inline_cart_min_width": 1024}"#).unwrap();
        assert_eq!(breakpoints.regular_min_width, 600);
        assert_eq!(breakpoints.classify(900).cart, CartPlacement::Toggle);
    }
}
