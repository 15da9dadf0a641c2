//! Turns user intents into cart and catalog calls and hands back what the
//! view should show. The view keeps no cart state of its own.

use crate::core::browse::{CatalogQuery, NO_ITEMS_FOUND};
use crate::core::cart::{Cart, CartRejection};
use crate::core::quantity::QuantityPicker;
use crate::core::{CartLine, CatalogSource, ItemRecord};
use crate::utils::validation::{parse_whole_number, validate_order_fields};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Browse(CatalogQuery),
    /// `quantity` is raw user input; it is validated before reaching the cart.
    AddItem { name: String, quantity: String },
    RemoveItem { name: String },
    AdjustQuantity { name: String, quantity: String },
    /// One step up on the item's picker.
    IncreaseQuantity { name: String },
    DecreaseQuantity { name: String },
    ViewCart,
    ClearCart,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub lines: Vec<CartLine>,
    pub total_units: u32,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Nothing,
    Items(Vec<ItemRecord>),
    Cart(Vec<CartLine>),
    Receipt(OrderReceipt),
}

/// Result of one intent. `message` is shown to the user verbatim and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub ok: bool,
    pub message: String,
    pub view: View,
}

impl Feedback {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            view: View::Nothing,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            view: View::Nothing,
        }
    }

    fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }
}

pub struct KioskController<C: CatalogSource> {
    catalog: C,
    cart: Cart,
}

impl<C: CatalogSource> KioskController<C> {
    pub fn new(catalog: C, max_per_item: u32) -> Self {
        Self::with_cart(catalog, Cart::new(max_per_item))
    }

    pub fn with_cart(catalog: C, cart: Cart) -> Self {
        Self { catalog, cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Picker preset to the item's current cart quantity, or 1 if it is not in the cart.
    pub fn picker_for(&self, name: &str) -> QuantityPicker {
        let current = self.cart.quantity_of(name).unwrap_or(1);
        QuantityPicker::starting_at(current, self.cart.max_per_item())
    }

    pub fn handle(&mut self, intent: Intent) -> Feedback {
        match intent {
            Intent::Browse(query) => self.browse(&query),
            Intent::AddItem { name, quantity } => self.add_item(&name, &quantity),
            Intent::RemoveItem { name } => self.remove_item(&name),
            Intent::AdjustQuantity { name, quantity } => self.adjust_quantity(&name, &quantity),
            Intent::IncreaseQuantity { name } => self.step_quantity(&name, true),
            Intent::DecreaseQuantity { name } => self.step_quantity(&name, false),
            Intent::ViewCart => self.view_cart(),
            Intent::ClearCart => {
                self.cart.clear();
                Feedback::success("Cart cleared.")
            }
            Intent::Submit => self.submit(),
        }
    }

    fn browse(&self, query: &CatalogQuery) -> Feedback {
        let items = query.apply(&self.catalog.load());
        let message = if items.is_empty() { NO_ITEMS_FOUND } else { "" };
        Feedback::success(message).with_view(View::Items(items))
    }

    fn add_item(&mut self, name: &str, quantity: &str) -> Feedback {
        let qty = match validate_order_fields(name, quantity, self.cart.max_per_item()) {
            Ok(qty) => qty,
            Err(e) => return Feedback::failure(e.to_string()),
        };

        let Some(catalog_name) = self.resolve_catalog_name(name) else {
            return Feedback::failure(format!("{} is not in the catalog.", name.trim()));
        };

        match self.cart.add_item(&catalog_name, i64::from(qty)) {
            Ok(change) => {
                tracing::info!(item = %catalog_name, quantity = qty, "{}", change);
                Feedback::success(change.message())
            }
            Err(rejection) => Feedback::failure(rejection.to_string()),
        }
    }

    /// Exact name first, then a case-insensitive match so typed names still land
    /// on the catalog spelling.
    fn resolve_catalog_name(&self, name: &str) -> Option<String> {
        let name = name.trim();
        let items = self.catalog.load();
        items
            .iter()
            .find(|item| item.name == name)
            .or_else(|| {
                items
                    .iter()
                    .find(|item| item.name.to_lowercase() == name.to_lowercase())
            })
            .map(|item| item.name.clone())
    }

    /// Same lookup as `resolve_catalog_name`, over the lines already in the cart.
    fn resolve_cart_name(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if self.cart.find_index(name).is_some() {
            return Some(name.to_string());
        }
        self.cart
            .to_list()
            .into_iter()
            .find(|line| line.item_name.to_lowercase() == name.to_lowercase())
            .map(|line| line.item_name)
    }

    fn remove_item(&mut self, name: &str) -> Feedback {
        match self.resolve_cart_name(name) {
            Some(cart_name) if self.cart.remove_item(&cart_name) => {
                Feedback::success(format!("{} removed.", cart_name))
            }
            _ => Feedback::failure(CartRejection::NotInCart.to_string()),
        }
    }

    fn adjust_quantity(&mut self, name: &str, quantity: &str) -> Feedback {
        let Some(cart_name) = self.resolve_cart_name(name) else {
            return Feedback::failure(CartRejection::NotInCart.to_string());
        };

        let qty = match parse_whole_number(quantity) {
            Ok(Some(qty)) => qty,
            Ok(None) => {
                let max = self.cart.max_per_item();
                return Feedback::failure(CartRejection::OutOfRange { max }.to_string());
            }
            Err(e) => return Feedback::failure(e.to_string()),
        };

        match self.cart.adjust_quantity(&cart_name, i64::from(qty)) {
            Ok(change) => Feedback::success(change.message()),
            Err(rejection) => Feedback::failure(rejection.to_string()),
        }
    }

    /// Moves the picker one step from the current cart quantity and writes the
    /// result back. At the ceiling the picker's warning is the feedback.
    fn step_quantity(&mut self, name: &str, up: bool) -> Feedback {
        let Some(cart_name) = self.resolve_cart_name(name) else {
            return Feedback::failure(CartRejection::NotInCart.to_string());
        };

        let mut picker = self.picker_for(&cart_name);
        if up {
            if let Some(warning) = picker.increase() {
                return Feedback::failure(warning);
            }
        } else {
            picker.decrease();
        }

        match self.cart.adjust_quantity(&cart_name, i64::from(picker.value())) {
            Ok(change) => {
                Feedback::success(format!("{} x{}. {}", cart_name, picker.value(), change))
            }
            Err(rejection) => Feedback::failure(rejection.to_string()),
        }
    }

    fn view_cart(&self) -> Feedback {
        let lines = self.cart.to_list();
        let message = if lines.is_empty() { "Cart is empty." } else { "" };
        Feedback::success(message).with_view(View::Cart(lines))
    }

    fn submit(&mut self) -> Feedback {
        if self.cart.is_empty() {
            return Feedback::failure("Cart is empty!");
        }

        let receipt = OrderReceipt {
            lines: self.cart.to_list(),
            total_units: self.cart.total_units(),
            submitted_at: Utc::now(),
        };
        self.cart.clear();
        tracing::info!(
            lines = receipt.lines.len(),
            units = receipt.total_units,
            "order submitted"
        );

        Feedback::success("Your order has been submitted!").with_view(View::Receipt(receipt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::InMemoryCatalog;

    fn controller() -> KioskController<InMemoryCatalog> {
        let catalog = InMemoryCatalog::new(vec![
            ItemRecord::new("Apples", "Fruit", "Vegan"),
            ItemRecord::new("Bread", "Bakery", ""),
            ItemRecord::new("Milk", "Dairy", "Vegetarian"),
        ]);
        KioskController::new(catalog, 10)
    }

    fn add(name: &str, quantity: &str) -> Intent {
        Intent::AddItem {
            name: name.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[test]
    fn test_add_relays_cart_message() {
        let mut ctl = controller();
        let feedback = ctl.handle(add("Apples", "2"));
        assert!(feedback.ok);
        assert_eq!(feedback.message, "Added.");

        let feedback = ctl.handle(add("Apples", "9"));
        assert!(feedback.ok);
        assert_eq!(feedback.message, "Updated (capped at 10).");
        assert_eq!(ctl.cart().quantity_of("Apples"), Some(10));
    }

    #[test]
    fn test_add_relays_validation_message() {
        let mut ctl = controller();
        let feedback = ctl.handle(add("Apples", "many"));
        assert!(!feedback.ok);
        assert_eq!(feedback.message, "Quantity must be a whole number.");

        let feedback = ctl.handle(add("", "1"));
        assert_eq!(feedback.message, "Item name is required.");

        let feedback = ctl.handle(add("Apples", "11"));
        assert_eq!(feedback.message, "Quantity must be no more than 10.");
        assert!(ctl.cart().is_empty());
    }

    #[test]
    fn test_add_uses_catalog_spelling() {
        let mut ctl = controller();
        assert!(ctl.handle(add("apples", "1")).ok);
        assert_eq!(ctl.cart().quantity_of("Apples"), Some(1));

        let feedback = ctl.handle(add("Caviar", "1"));
        assert!(!feedback.ok);
        assert_eq!(feedback.message, "Caviar is not in the catalog.");
    }

    #[test]
    fn test_remove_and_adjust() {
        let mut ctl = controller();
        ctl.handle(add("Bread", "3"));

        let feedback = ctl.handle(Intent::AdjustQuantity {
            name: "Bread".to_string(),
            quantity: "7".to_string(),
        });
        assert_eq!(feedback.message, "Quantity updated.");
        assert_eq!(ctl.cart().quantity_of("Bread"), Some(7));

        let feedback = ctl.handle(Intent::AdjustQuantity {
            name: "Bread".to_string(),
            quantity: "x".to_string(),
        });
        assert!(!feedback.ok);
        assert_eq!(feedback.message, "Quantity must be a whole number.");

        let feedback = ctl.handle(Intent::RemoveItem {
            name: "Bread".to_string(),
        });
        assert_eq!(feedback.message, "Bread removed.");

        let feedback = ctl.handle(Intent::RemoveItem {
            name: "Bread".to_string(),
        });
        assert!(!feedback.ok);
        assert_eq!(feedback.message, "Item not in cart.");
    }

    #[test]
    fn test_remove_and_adjust_follow_catalog_spelling() {
        let mut ctl = controller();
        assert!(ctl.handle(add("apples", "1")).ok);

        let feedback = ctl.handle(Intent::AdjustQuantity {
            name: "apples".to_string(),
            quantity: "3".to_string(),
        });
        assert!(feedback.ok);
        assert_eq!(ctl.cart().quantity_of("Apples"), Some(3));

        let feedback = ctl.handle(Intent::RemoveItem {
            name: " APPLES ".to_string(),
        });
        assert!(feedback.ok);
        assert_eq!(feedback.message, "Apples removed.");
        assert!(ctl.cart().is_empty());
    }

    #[test]
    fn test_adjust_uses_digit_rule() {
        let mut ctl = controller();
        ctl.handle(add("Apples", "2"));

        let adjust = |quantity: &str| Intent::AdjustQuantity {
            name: "Apples".to_string(),
            quantity: quantity.to_string(),
        };

        let feedback = ctl.handle(adjust("99999999999999999999"));
        assert!(!feedback.ok);
        assert_eq!(feedback.message, "Quantity must be between 1 and 10.");

        for bad in ["+3", "-3", "3.0", ""] {
            let feedback = ctl.handle(adjust(bad));
            assert!(!feedback.ok);
            assert_eq!(
                feedback.message, "Quantity must be a whole number.",
                "input {:?}",
                bad
            );
        }

        let feedback = ctl.handle(adjust("0"));
        assert_eq!(feedback.message, "Quantity must be between 1 and 10.");
        assert_eq!(ctl.cart().quantity_of("Apples"), Some(2));
    }

    #[test]
    fn test_adjust_unknown_item_reports_not_in_cart() {
        let mut ctl = controller();
        let feedback = ctl.handle(Intent::AdjustQuantity {
            name: "Bread".to_string(),
            quantity: "abc".to_string(),
        });
        assert!(!feedback.ok);
        assert_eq!(feedback.message, "Item not in cart.");
    }

    #[test]
    fn test_step_quantity() {
        let mut ctl = KioskController::new(
            InMemoryCatalog::new(vec![ItemRecord::new("Milk", "Dairy", "")]),
            3,
        );
        ctl.handle(add("Milk", "2"));

        let feedback = ctl.handle(Intent::IncreaseQuantity {
            name: "milk".to_string(),
        });
        assert!(feedback.ok);
        assert_eq!(feedback.message, "Milk x3. Quantity updated.");

        let feedback = ctl.handle(Intent::IncreaseQuantity {
            name: "Milk".to_string(),
        });
        assert!(!feedback.ok);
        assert_eq!(feedback.message, "Max limit is 3 per item.");
        assert_eq!(ctl.cart().quantity_of("Milk"), Some(3));

        for _ in 0..4 {
            ctl.handle(Intent::DecreaseQuantity {
                name: "Milk".to_string(),
            });
        }
        assert_eq!(ctl.cart().quantity_of("Milk"), Some(1));

        let feedback = ctl.handle(Intent::DecreaseQuantity {
            name: "Bread".to_string(),
        });
        assert_eq!(feedback.message, "Item not in cart.");
    }

    #[test]
    fn test_clear_cart() {
        let mut ctl = controller();
        ctl.handle(add("Milk", "2"));
        ctl.handle(add("Bread", "1"));

        let feedback = ctl.handle(Intent::ClearCart);
        assert!(feedback.ok);
        assert_eq!(feedback.message, "Cart cleared.");
        assert_eq!(feedback.view, View::Nothing);
        assert!(ctl.cart().is_empty());
        assert_eq!(ctl.handle(Intent::Submit).message, "Cart is empty!");
    }

    #[test]
    fn test_view_cart() {
        let mut ctl = controller();
        assert_eq!(ctl.handle(Intent::ViewCart).message, "Cart is empty.");

        ctl.handle(add("Milk", "2"));
        let feedback = ctl.handle(Intent::ViewCart);
        assert_eq!(feedback.view, View::Cart(vec![CartLine::new("Milk", 2)]));
    }

    #[test]
    fn test_submit_empty_cart() {
        let mut ctl = controller();
        let feedback = ctl.handle(Intent::Submit);
        assert!(!feedback.ok);
        assert_eq!(feedback.message, "Cart is empty!");
        assert_eq!(feedback.view, View::Nothing);
    }

    #[test]
    fn test_submit_clears_cart_and_returns_receipt() {
        let mut ctl = controller();
        ctl.handle(add("Milk", "2"));
        ctl.handle(add("Bread", "1"));

        let feedback = ctl.handle(Intent::Submit);
        assert!(feedback.ok);
        assert_eq!(feedback.message, "Your order has been submitted!");
        match feedback.view {
            View::Receipt(receipt) => {
                assert_eq!(receipt.lines.len(), 2);
                assert_eq!(receipt.total_units, 3);
            }
            other => panic!("expected a receipt, got {:?}", other),
        }
        assert!(ctl.cart().is_empty());
    }

    #[test]
    fn test_browse_no_items_found() {
        let mut ctl = controller();
        let feedback = ctl.handle(Intent::Browse(CatalogQuery::new().keyword("caviar")));
        assert_eq!(feedback.message, "No items found.");
        assert_eq!(feedback.view, View::Items(vec![]));
    }

    #[test]
    fn test_picker_starts_at_cart_quantity() {
        let mut ctl = controller();
        assert_eq!(ctl.picker_for("Milk").value(), 1);
        ctl.handle(add("Milk", "4"));
        let mut picker = ctl.picker_for("Milk");
        assert_eq!(picker.value(), 4);
        picker.decrease();
        assert_eq!(picker.value(), 3);
    }
}
