//! Runtime configuration handed to [`crate::PosProvider`].

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Category, FlatPrice, DEFAULT_UNIT_PRICE},
    layout::LayoutBreakpoints,
    model::Money,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosConfig {
    /// Flat price applied to every item when no other price book is supplied.
    pub unit_price: Money,
    pub breakpoints: LayoutBreakpoints,
    /// Category selected when the screen mounts.
    pub default_category: Category,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            unit_price: DEFAULT_UNIT_PRICE,
            breakpoints: LayoutBreakpoints::default(),
            default_category: Category::Appetizers,
        }
    }
}

impl PosConfig {
    pub fn flat_price_book(&self) -> FlatPrice {
        FlatPrice(self.unit_price)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_fills_missing_fields_from_defaults() {
        let config: PosConfig =
            serde_json::from_str(r#"{"unit_price": 1250, "default_category": "Beverages"}"#)
                .unwrap();
        assert_eq!(config.unit_price, Money::from_cents(1_250));
        assert_eq!(config.default_category, Category::Beverages);
        assert_eq!(config.breakpoints, LayoutBreakpoints::default());
    }

    #[test]
    fn empty_object_is_the_default_config() {
        let config: PosConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PosConfig::default());
        assert_eq!(config.flat_price_book().0, Money::from_cents(1_000));
    }
}
