//! Online Orders
//!
//! Orders placed through the web shop, waiting to be approved or rejected.

use super::entity::Record;
use super::field::FieldSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u32,
    pub order_no: String,
    pub customer_name: String,
    pub address: String,
    pub mobile: String,
    /// As the shop reports it, e.g. `25/01/2025 [22:56:59]`
    pub order_date: String,
    pub payment: String,
    pub items: Vec<OrderItem>,
}

/// One product of an order with the stock on hand
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product: String,
    pub quantity: u32,
    pub stock: u32,
}

impl OrderItem {
    pub fn new(product: &str, quantity: u32, stock: u32) -> Self {
        Self {
            product: product.to_string(),
            quantity,
            stock,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity <= self.stock
    }
}

const ORDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("order_no", "Order No").searchable(),
    FieldSpec::text("customer_name", "Customer Name").searchable(),
    FieldSpec::text("address", "Address").searchable(),
    FieldSpec::text("mobile", "Mobile").searchable(),
    FieldSpec::text("order_date", "Order Date").searchable(),
    FieldSpec::text("payment", "Payment").searchable(),
];

impl Record for Order {
    const ENTITY: &'static str = "Order";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        ORDER_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "order_no" => self.order_no.clone(),
            "customer_name" => self.customer_name.clone(),
            "address" => self.address.clone(),
            "mobile" => self.mobile.clone(),
            "order_date" => self.order_date.clone(),
            "payment" => self.payment.clone(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    #[test]
    fn test_order_search_covers_every_column() {
        let orders = seed::orders();
        let first = &orders[0];
        assert!(first.matches("2025000001"));
        assert!(first.matches("kazipara"));
        assert!(first.matches("22:56"));
        assert!(first.matches("cash on delivery"));
        assert!(!first.matches("nirob"));
    }

    #[test]
    fn test_item_stock_check() {
        assert!(OrderItem::new("MTS- 308 =3m", 1, 110).in_stock());
        assert!(!OrderItem::new("MTS- 308 =3m", 5, 2).in_stock());
    }
}
