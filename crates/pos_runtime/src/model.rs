use std::{fmt, iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Category, config::PosConfig, layout::PresentationState, ledger::OrderLedger,
    theme::ThemeState,
};

/// Currency amount in cents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineId(pub u64);

/// One distinct item in the running order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: LineId,
    /// Catalog item name; the merge key.
    pub name: String,
    /// Always at least 1 while the line is in the ledger.
    pub quantity: u32,
    /// Category supplied when the line was first added.
    pub category: Category,
    pub unit_price: Money,
    pub added_at_unix_ms: u64,
}

impl OrderLine {
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Display area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

/// Complete POS screen state owned by the runtime provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PosState {
    pub order: OrderLedger,
    pub selected_category: Category,
    pub viewport: ViewportSize,
    pub presentation: PresentationState,
    pub theme: ThemeState,
}

impl Default for PosState {
    fn default() -> Self {
        Self::new(&PosConfig::default())
    }
}

impl PosState {
    pub fn new(config: &PosConfig) -> Self {
        let viewport = ViewportSize::default();
        Self {
            order: OrderLedger::new(),
            selected_category: config.default_category,
            viewport,
            presentation: PresentationState::new(config.breakpoints, viewport.width),
            theme: ThemeState::default(),
        }
    }

    /// Quantity badge for the floating cart button, when one is rendered.
    pub fn cart_badge(&self) -> Option<u32> {
        self.presentation.fab_badge(self.order.total_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_as_dollars_and_cents() {
        assert_eq!(Money::from_cents(2_000).to_string(), "$20.00");
        assert_eq!(Money::from_cents(599).to_string(), "$5.99");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn money_sums_and_multiplies() {
        let total: Money = [Money::from_cents(150), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(400));
        assert_eq!(Money::from_cents(1_000).times(3), Money::from_cents(3_000));
        assert_eq!(Money::from_cents(1_000).times(0), Money::ZERO);
    }

    #[test]
    fn default_state_starts_with_an_empty_order_on_the_default_category() {
        let state = PosState::default();
        assert!(state.order.is_empty());
        assert_eq!(state.selected_category, Category::Appetizers);
        assert_eq!(state.cart_badge(), None);
    }
}
