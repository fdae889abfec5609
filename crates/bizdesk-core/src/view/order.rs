//! Order Review
//!
//! Details panel for one pending order. Approving or rejecting takes the
//! order off the pending list; a rejection needs a written cause.

use thiserror::Error;
use tracing::info;

use crate::domain::{DomainError, Order};
use crate::repository::Repository;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Disapprove cause can't be empty")]
    EmptyCause,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderReview {
    order: Order,
    selected: Vec<bool>,
    pub cause: String,
}

impl OrderReview {
    pub fn open(order: &Order) -> Self {
        Self {
            order: order.clone(),
            selected: vec![false; order.items.len()],
            cause: String::new(),
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    /// Flip one item; out-of-range indexes are ignored
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.selected.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// The header checkbox: clears when everything is ticked, else ticks all
    pub fn toggle_all(&mut self) {
        let value = !self.all_selected();
        self.selected.iter_mut().for_each(|flag| *flag = value);
    }

    pub fn all_selected(&self) -> bool {
        !self.selected.is_empty() && self.selected.iter().all(|flag| *flag)
    }

    pub fn approve(&self, orders: &mut impl Repository<Order>) -> Result<Order, OrderError> {
        let order = orders.delete_record(&self.order)?;
        info!(order = %order.order_no, "order approved");
        Ok(order)
    }

    /// Reject with the typed cause; a blank cause leaves the order pending
    pub fn reject(&self, orders: &mut impl Repository<Order>) -> Result<Order, OrderError> {
        let cause = self.cause.trim();
        if cause.is_empty() {
            return Err(OrderError::EmptyCause);
        }
        let order = orders.delete_record(&self.order)?;
        info!(order = %order.order_no, cause, "order rejected");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed, OrderItem};
    use crate::repository::Collection;

    fn pending() -> Collection<Order> {
        Collection::from(seed::orders())
    }

    #[test]
    fn test_select_all_follows_items() {
        let mut order = seed::orders().remove(0);
        order.items.push(OrderItem::new("MTS- 804 -2p3m", 2, 40));
        let mut review = OrderReview::open(&order);
        assert!(!review.all_selected());

        review.toggle(0);
        review.toggle(1);
        assert!(review.all_selected());

        review.toggle_all();
        assert!(!review.is_selected(0) && !review.is_selected(1));
        review.toggle_all();
        assert!(review.all_selected());
        review.toggle(9);
        assert!(!review.is_selected(9));
    }

    #[test]
    fn test_approve_removes_only_that_order() {
        let mut orders = pending();
        let review = OrderReview::open(&orders.list()[2]);

        let approved = review.approve(&mut orders).unwrap();
        assert_eq!(approved.order_no, "2025010220");
        assert_eq!(orders.len(), 5);
        assert!(orders.iter().all(|o| o.order_no != "2025010220"));
        // the other Si Nirob order stays
        assert!(orders.iter().any(|o| o.order_no == "2025010219"));

        assert!(matches!(review.approve(&mut orders), Err(OrderError::Domain(DomainError::NotFound(_)))));
    }

    #[test]
    fn test_reject_needs_cause() {
        let mut orders = pending();
        let mut review = OrderReview::open(&orders.list()[0]);
        review.cause = "   ".to_string();

        assert_eq!(review.reject(&mut orders), Err(OrderError::EmptyCause));
        assert_eq!(orders.len(), 6);

        review.cause = "Out of delivery area".to_string();
        assert_eq!(review.reject(&mut orders).map(|o| o.id), Ok(1));
        assert_eq!(orders.len(), 5);
    }
}
