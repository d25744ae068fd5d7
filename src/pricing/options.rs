//! Option ledger: add-on line items attached to a booking.
//!
//! Items keep the raw values the host typed in. Clamping happens on read so an
//! in-progress edit (an empty quantity, say) never poisons the total.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single add-on item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionLineItem {
    pub id: Uuid,
    pub name: String,
    pub unit_price: i64,
    pub quantity: i64,
}

impl OptionLineItem {
    /// Quantity as billed: anything below 1 counts as 1.
    pub fn effective_quantity(&self) -> i64 {
        self.quantity.max(1)
    }

    /// Unit price as billed: never negative.
    pub fn effective_unit_price(&self) -> i64 {
        self.unit_price.max(0)
    }

    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.effective_unit_price())
            .saturating_mul(Decimal::from(self.effective_quantity()))
    }
}

/// Field edit applied through [`OptionLedger::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum OptionUpdate {
    Name(String),
    UnitPrice(i64),
    Quantity(i64),
}

/// Ordered collection of add-on items.
///
/// Removal leaves a tombstone in `slots` so `add`, `remove`, `update` and
/// `get` stay O(1) amortized; tombstones are compacted once they make up
/// half of the slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<OptionLineItem>", into = "Vec<OptionLineItem>")]
pub struct OptionLedger {
    slots: Vec<Option<OptionLineItem>>,
    index: HashMap<Uuid, usize>,
}

impl OptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return its id.
    pub fn add(&mut self, name: impl Into<String>, unit_price: i64, quantity: i64) -> Uuid {
        let id = Uuid::new_v4();
        self.push(OptionLineItem {
            id,
            name: name.into(),
            unit_price,
            quantity,
        });
        id
    }

    fn push(&mut self, item: OptionLineItem) {
        self.index.insert(item.id, self.slots.len());
        self.slots.push(Some(item));
    }

    /// Remove an item, returning it if it existed.
    pub fn remove(&mut self, id: Uuid) -> Option<OptionLineItem> {
        let slot = self.index.remove(&id)?;
        let item = self.slots.get_mut(slot)?.take();

        if self.index.len() * 2 < self.slots.len() {
            self.compact();
        }
        item
    }

    /// Drop tombstones and re-point the index.
    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (slot, item) in self.slots.iter().enumerate() {
            if let Some(item) = item {
                self.index.insert(item.id, slot);
            }
        }
    }

    /// Apply an edit. Returns `false` if no item has that id.
    pub fn update(&mut self, id: Uuid, change: OptionUpdate) -> bool {
        let Some(item) = self
            .index
            .get(&id)
            .and_then(|&slot| self.slots.get_mut(slot))
            .and_then(Option::as_mut)
        else {
            return false;
        };

        match change {
            OptionUpdate::Name(name) => item.name = name,
            OptionUpdate::UnitPrice(price) => item.unit_price = price,
            OptionUpdate::Quantity(quantity) => item.quantity = quantity,
        }
        true
    }

    /// Sum of `unit_price × quantity` over all items, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.items()
            .map(OptionLineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn get(&self, id: Uuid) -> Option<&OptionLineItem> {
        let slot = *self.index.get(&id)?;
        self.slots.get(slot)?.as_ref()
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &OptionLineItem> + '_ {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
    }
}

impl PartialEq for OptionLedger {
    fn eq(&self, other: &Self) -> bool {
        self.items().eq(other.items())
    }
}

impl From<Vec<OptionLineItem>> for OptionLedger {
    fn from(items: Vec<OptionLineItem>) -> Self {
        let mut ledger = Self::default();
        for item in items {
            // Last one wins on a duplicated id
            if ledger.index.contains_key(&item.id) {
                ledger.remove(item.id);
            }
            ledger.push(item);
        }
        ledger
    }
}

impl From<OptionLedger> for Vec<OptionLineItem> {
    fn from(ledger: OptionLedger) -> Self {
        ledger.slots.into_iter().flatten().collect()
    }
}
