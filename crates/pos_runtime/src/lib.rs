//! Restaurant point-of-sale runtime: menu catalog, order ledger, presentation mode selection,
//! theme preference, and the Leptos provider that wires them to a browser host.

pub mod catalog;
pub mod config;
mod effect_executor;
pub mod host;
pub mod layout;
pub mod ledger;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod theme;

pub use catalog::{
    BuiltinMenu, Category, FlatPrice, MenuCatalog, PriceBook, PriceTable, UnknownCategory,
    DEFAULT_UNIT_PRICE, POPULAR_ITEMS,
};
pub use config::PosConfig;
pub use host::PosHostContext;
pub use layout::{
    classify, CartPlacement, GridDensity, LayoutBreakpoints, PresentationMode, PresentationState,
};
pub use ledger::{CategoryCounts, OrderLedger};
pub use model::*;
pub use persistence::{
    load_pos_config, load_theme_preference, persist_pos_config, persist_theme_preference,
};
pub use reducer::{reduce_pos, PosAction, RuntimeEffect};
pub use runtime_context::{use_pos_runtime, PosProvider, PosRuntimeContext};
pub use theme::{ColorScheme, ThemePreference, ThemeState, UnknownColorScheme};
