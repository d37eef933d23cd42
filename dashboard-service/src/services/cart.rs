//! Client-side cart that builds an add-on request.

use rust_decimal::Decimal;
use serde::Serialize;
use service_core::error::AppError;

use crate::models::{items_total, AddOnRequest, CartItem, ClientId, Service, ServiceId};
use crate::services::store::DashboardStore;

/// Lines are kept in the order services were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `service`.
    pub fn add(&mut self, service: &Service) {
        match self.items.iter_mut().find(|i| i.service.id == service.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem::new(service.clone(), 1)),
        }
    }

    /// Set a line's quantity; zero removes the line. Unknown ids are ignored.
    pub fn set_quantity(&mut self, service_id: &ServiceId, quantity: u32) {
        if quantity == 0 {
            self.remove(service_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.service.id == service_id) {
            item.quantity = quantity;
        }
    }

    pub fn remove(&mut self, service_id: &ServiceId) {
        self.items.retain(|i| &i.service.id != service_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines (the header badge).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal(&self) -> Result<Decimal, AppError> {
        items_total(&self.items)
    }

    /// Submit the cart for `client_id`. The cart is emptied only on success.
    pub fn checkout(
        &mut self,
        store: &mut DashboardStore,
        client_id: &ClientId,
    ) -> Result<AddOnRequest, AppError> {
        let subtotal = self.subtotal()?;
        let request = store.submit_add_on_request(client_id, self.items.clone(), subtotal)?;
        self.items.clear();
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: &str, rate: i64) -> Service {
        Service {
            id: ServiceId::from(id),
            name: format!("Service {}", id),
            description: String::new(),
            rate: Decimal::from(rate),
            unit: "Creative".to_string(),
        }
    }

    #[test]
    fn adding_same_service_bumps_quantity() {
        let mut cart = Cart::new();
        let upload = service("s1", 200);
        cart.add(&upload);
        cart.add(&service("s3", 450));
        cart.add(&upload);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal().unwrap(), Decimal::from(850));
    }

    #[test]
    fn zero_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add(&service("s1", 200));
        cart.set_quantity(&ServiceId::from("s1"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_ignores_unknown_service() {
        let mut cart = Cart::new();
        cart.add(&service("s1", 200));
        cart.set_quantity(&ServiceId::from("s9"), 5);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn set_quantity_replaces_count() {
        let mut cart = Cart::new();
        cart.add(&service("s4", 650));
        cart.set_quantity(&ServiceId::from("s4"), 4);
        assert_eq!(cart.subtotal().unwrap(), Decimal::from(2600));
    }
}
