//! Reducer actions, side-effect intents, and transition logic for the POS screen.

use crate::{
    catalog::{Category, PriceBook},
    model::{PosState, ViewportSize},
    theme::{ColorScheme, ThemePreference},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_pos`] to mutate [`PosState`].
pub enum PosAction {
    /// Add one unit of a catalog item to the order.
    AddItem {
        /// Item name; the merge key.
        name: String,
        /// Category the item was picked from.
        category: Category,
    },
    /// Remove one unit of an item from the order.
    RemoveItem {
        /// Item name.
        name: String,
    },
    /// Empty the order.
    ClearOrder,
    /// Switch the catalog to another category.
    SelectCategory {
        /// Category to show.
        category: Category,
    },
    /// Show or hide the cart panel while it sits behind the floating button.
    ToggleCartVisibility,
    /// The viewport was resized or rotated.
    ViewportResized {
        /// New viewport size.
        viewport: ViewportSize,
    },
    /// Pick a color scheme explicitly.
    SetColorScheme {
        /// Scheme to render with.
        scheme: ColorScheme,
    },
    /// Flip between light and dark.
    ToggleColorScheme,
    /// Turn "follow the system scheme" on or off.
    SetFollowSystemScheme {
        /// Whether to follow the system.
        enabled: bool,
    },
    /// The operating system reported a scheme change.
    SystemSchemeChanged {
        /// Scheme reported by the system.
        scheme: ColorScheme,
    },
    /// Apply the stored theme preference at boot.
    HydrateTheme {
        /// Preference read from storage.
        preference: ThemePreference,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_pos`] for the runtime to execute.
pub enum RuntimeEffect {
    /// Write the current theme preference to the preference store.
    PersistTheme,
}

/// Applies a [`PosAction`] to the POS state and returns the side effects it requires.
///
/// Every action is total: unknown item names, removals of absent items, and repeated clears all
/// succeed. New order lines are priced through `prices`.
pub fn reduce_pos(
    state: &mut PosState,
    action: PosAction,
    prices: &dyn PriceBook,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        PosAction::AddItem { name, category } => {
            state.order.add(&name, category, prices);
        }
        PosAction::RemoveItem { name } => {
            state.order.remove(&name);
        }
        PosAction::ClearOrder => state.order.clear(),
        PosAction::SelectCategory { category } => {
            state.selected_category = category;
        }
        PosAction::ToggleCartVisibility => state.presentation.toggle_cart(),
        PosAction::ViewportResized { viewport } => {
            state.viewport = viewport;
            state.presentation.apply_width(viewport.width);
        }
        PosAction::SetColorScheme { scheme } => {
            state.theme.set_scheme(scheme);
            effects.push(RuntimeEffect::PersistTheme);
        }
        PosAction::ToggleColorScheme => {
            state.theme.toggle();
            effects.push(RuntimeEffect::PersistTheme);
        }
        PosAction::SetFollowSystemScheme { enabled } => {
            state.theme.set_follow_system(enabled);
            effects.push(RuntimeEffect::PersistTheme);
        }
        PosAction::SystemSchemeChanged { scheme } => {
            state.theme.system_scheme_changed(scheme);
        }
        PosAction::HydrateTheme { preference } => {
            state.theme.hydrate(preference);
        }
    }
    effects
}
