//! The order ledger: the running order folded from add/remove/clear events.
//!
//! Each item name moves through `absent -> present(1) -> present(n) -> ... -> absent`. Adding a
//! present name bumps its quantity, removing a name at quantity 1 drops the line, and removing an
//! absent name does nothing. Totals are derived from the live lines on every read.

use std::collections::BTreeMap;

use platform_host::next_monotonic_timestamp_ms;

use crate::{
    catalog::{Category, PriceBook},
    model::{LineId, Money, OrderLine},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Insertion-ordered order lines, unique by item name.
pub struct OrderLedger {
    lines: Vec<OrderLine>,
    next_line_id: u64,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_line_id: 1,
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line(&self, item_name: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.name == item_name)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of `item_name` and returns its new quantity.
    ///
    /// An existing line with the same name is merged into regardless of `category`; the line keeps
    /// the category it was created with. New lines are priced through `prices`. Names are not
    /// checked against any catalog.
    pub fn add<P: PriceBook + ?Sized>(
        &mut self,
        item_name: &str,
        category: Category,
        prices: &P,
    ) -> u32 {
        let quantity = match self.position(item_name) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                let id = self.allocate_line_id();
                self.lines.push(OrderLine {
                    id,
                    name: item_name.to_string(),
                    quantity: 1,
                    category,
                    unit_price: prices.unit_price(item_name, category),
                    added_at_unix_ms: next_monotonic_timestamp_ms(),
                });
                1
            }
        };
        self.debug_check_invariants();
        quantity
    }

    /// Removes one unit of `item_name` and returns the quantity left (0 once the line is gone).
    ///
    /// Removing a name that is not in the order is a no-op.
    pub fn remove(&mut self, item_name: &str) -> u32 {
        let Some(index) = self.position(item_name) else {
            return 0;
        };
        debug_assert!(
            self.lines[index].quantity >= 1,
            "order line `{item_name}` reached zero quantity"
        );
        let remaining = if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
            self.lines[index].quantity
        } else {
            self.lines.remove(index);
            0
        };
        self.debug_check_invariants();
        remaining
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current quantity of `item_name`, 0 when absent.
    pub fn quantity_of(&self, item_name: &str) -> u32 {
        self.line(item_name).map_or(0, |line| line.quantity)
    }

    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// Quantity per category over every known category, zero-filled.
    pub fn category_counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::zeroed();
        for line in &self.lines {
            let count = counts.0.entry(line.category).or_insert(0);
            *count = count.saturating_add(line.quantity);
        }
        counts
    }

    fn position(&self, item_name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.name == item_name)
    }

    fn allocate_line_id(&mut self) -> LineId {
        let id = LineId(self.next_line_id);
        self.next_line_id = self.next_line_id.saturating_add(1);
        id
    }

    fn debug_check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for (index, line) in self.lines.iter().enumerate() {
            assert!(line.quantity >= 1, "order line `{}` has zero quantity", line.name);
            assert!(
                !self.lines[index + 1..]
                    .iter()
                    .any(|other| other.name == line.name),
                "duplicate order line for `{}`",
                line.name
            );
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-category item counts used for category badges.
pub struct CategoryCounts(BTreeMap<Category, u32>);

impl CategoryCounts {
    fn zeroed() -> Self {
        Self(Category::ALL.into_iter().map(|c| (c, 0)).collect())
    }

    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Count for a category label; labels that name no category count 0.
    pub fn get_label(&self, label: &str) -> u32 {
        label.parse().map_or(0, |category| self.get(category))
    }

    /// `(category, count)` pairs in display order, including zeroes.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(category, count)| (*category, *count))
    }
}
