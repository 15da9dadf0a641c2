//! Session cart: at most one line per item name, every quantity kept in
//! `1..=max_per_item`.

use crate::domain::model::CartLine;
use std::fmt;
use thiserror::Error;

/// Per-item ceiling used when nothing else is configured.
pub const DEFAULT_MAX_PER_ITEM: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A new line was appended.
    Added,
    /// An existing line grew.
    Updated,
    /// An existing line was set to an exact quantity.
    QuantitySet,
}

/// What a successful cart operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartChange {
    pub kind: ChangeKind,
    /// Set when the requested quantity was clamped down to this ceiling.
    pub capped_at: Option<u32>,
}

impl CartChange {
    fn new(kind: ChangeKind, capped_at: Option<u32>) -> Self {
        Self { kind, capped_at }
    }

    pub fn is_capped(&self) -> bool {
        self.capped_at.is_some()
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CartChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.capped_at) {
            (ChangeKind::Added, None) => write!(f, "Added."),
            (ChangeKind::Added, Some(max)) => write!(f, "Added (capped at {}).", max),
            (ChangeKind::Updated, None) => write!(f, "Updated."),
            (ChangeKind::Updated, Some(max)) => write!(f, "Updated (capped at {}).", max),
            (ChangeKind::QuantitySet, _) => write!(f, "Quantity updated."),
        }
    }
}

/// Why a cart operation left the cart untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartRejection {
    #[error("Quantity must be at least 1.")]
    QuantityTooSmall,

    #[error("Item name is required.")]
    MissingItemName,

    #[error("Item not in cart.")]
    NotInCart,

    #[error("Quantity must be between 1 and {max}.")]
    OutOfRange { max: u32 },
}

pub type CartResult = std::result::Result<CartChange, CartRejection>;

/// Lines keep insertion order, which is also display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    max_per_item: u32,
}

impl Cart {
    /// A ceiling of zero would make every line invalid, so it is raised to one.
    pub fn new(max_per_item: u32) -> Self {
        Self {
            lines: Vec::new(),
            max_per_item: max_per_item.max(1),
        }
    }

    pub fn max_per_item(&self) -> u32 {
        self.max_per_item
    }

    /// Copy of the current lines. Changing the returned vector never affects the cart.
    pub fn to_list(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.item_name == name)
    }

    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.find_index(name).map(|idx| self.lines[idx].quantity)
    }

    /// Adds `qty` units of `name`, clamping the line at `max_per_item`.
    ///
    /// Clamping still counts as success; the returned change carries the
    /// ceiling in `capped_at`.
    pub fn add_item(&mut self, name: &str, qty: i64) -> CartResult {
        if qty < 1 {
            return Err(CartRejection::QuantityTooSmall);
        }
        if name.trim().is_empty() {
            return Err(CartRejection::MissingItemName);
        }

        let max = i64::from(self.max_per_item);
        match self.find_index(name) {
            None => {
                let capped = qty.min(max);
                self.lines.push(CartLine::new(name, capped as u32));
                tracing::debug!(item = name, quantity = capped, "added cart line");
                let capped_at = (qty > max).then_some(self.max_per_item);
                Ok(CartChange::new(ChangeKind::Added, capped_at))
            }
            Some(idx) => {
                let line = &mut self.lines[idx];
                let requested = i64::from(line.quantity).saturating_add(qty);
                let new_qty = requested.min(max);
                line.quantity = new_qty as u32;
                tracing::debug!(item = name, quantity = new_qty, "updated cart line");
                let capped_at = (requested > max).then_some(self.max_per_item);
                Ok(CartChange::new(ChangeKind::Updated, capped_at))
            }
        }
    }

    pub fn add_one(&mut self, name: &str) -> CartResult {
        self.add_item(name, 1)
    }

    /// Returns whether a line was actually deleted.
    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.find_index(name) {
            Some(idx) => {
                self.lines.remove(idx);
                tracing::debug!(item = name, "removed cart line");
                true
            }
            None => false,
        }
    }

    /// Sets an existing line to exactly `qty`, which must lie in `1..=max_per_item`.
    pub fn adjust_quantity(&mut self, name: &str, qty: i64) -> CartResult {
        let idx = self.find_index(name).ok_or(CartRejection::NotInCart)?;
        if qty < 1 || qty > i64::from(self.max_per_item) {
            return Err(CartRejection::OutOfRange {
                max: self.max_per_item,
            });
        }

        self.lines[idx].quantity = qty as u32;
        tracing::debug!(item = name, quantity = qty, "adjusted cart line");
        Ok(CartChange::new(ChangeKind::QuantitySet, None))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    pub fn total_units(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PER_ITEM)
    }
}
