use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{is_valid_email, Priority};
use crate::collection::{FieldErrors, IdPolicy, InsertPosition, KindSpec, Record, RecordId};

labelled_enum! {
    /// Fulfilment state of an order.
    OrderStatus {
        Pending => "pending",
        Processing => "processing",
        Shipped => "shipped",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl OrderStatus {
    /// Orders still waiting on the shop.
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Processing)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Parse `name*quantity@price` entries separated by `;`.
    ///
    /// The quantity defaults to 1: `"USB Cable@19.99; Mouse Pad*2@24.99"`.
    pub fn parse_list(raw: &str) -> Result<Vec<OrderItem>, String> {
        raw.split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (head, price) = entry
                    .rsplit_once('@')
                    .ok_or_else(|| format!("'{}' is missing '@price'", entry))?;
                let price: f64 = price
                    .trim()
                    .parse()
                    .map_err(|_| format!("'{}' has an invalid price", entry))?;
                let (name, quantity) = match head.rsplit_once('*') {
                    Some((name, quantity)) => {
                        let quantity = quantity
                            .trim()
                            .parse()
                            .map_err(|_| format!("'{}' has an invalid quantity", entry))?;
                        (name, quantity)
                    }
                    None => (head, 1),
                };
                Ok(OrderItem::new(name.trim(), quantity, price))
            })
            .collect()
    }

    /// Inverse of [`OrderItem::parse_list`].
    pub fn format_list(items: &[OrderItem]) -> String {
        items
            .iter()
            .map(|item| format!("{}*{}@{:.2}", item.name, item.quantity, item.price))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Sum of the item subtotals.
pub fn order_total(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::subtotal).sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// `ORD-NNN`.
    pub id: RecordId,
    pub customer: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    /// Always equal to the sum of the item subtotals.
    pub total: f64,
    pub status: OrderStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub priority: Priority,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            customer: String::new(),
            customer_email: String::new(),
            items: Vec::new(),
            priority: Priority::Medium,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub customer: Option<String>,
    pub customer_email: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub status: Option<OrderStatus>,
    pub priority: Option<Priority>,
}

impl Record for Order {
    type Class = OrderStatus;
    type Draft = OrderDraft;
    type Patch = OrderPatch;

    const KIND: KindSpec = KindSpec {
        name: "order",
        required_fields: &["customer", "customer_email", "items"],
        searchable_fields: &["id", "customer", "customer_email"],
        classification_field: "status",
        unique_field: None,
        id_policy: IdPolicy::Prefixed { prefix: "ORD", width: 3 },
        insert_at: InsertPosition::Front,
    };

    const CLASSES: &'static [OrderStatus] = OrderStatus::ALL;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn classification(&self) -> OrderStatus {
        self.status
    }

    fn searchable_values(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(&self.customer),
            Cow::Borrowed(&self.customer_email),
        ]
    }

    fn from_draft(id: RecordId, draft: OrderDraft, now: DateTime<Utc>) -> Result<Self, FieldErrors> {
        Ok(Self {
            id,
            customer: draft.customer.trim().to_string(),
            customer_email: draft.customer_email.trim().to_string(),
            total: order_total(&draft.items),
            items: draft.items,
            status: OrderStatus::Pending,
            priority: draft.priority,
            created_at: now,
            updated_at: now,
        })
    }

    fn apply_patch(&mut self, patch: OrderPatch) {
        if let Some(customer) = patch.customer {
            self.customer = customer.trim().to_string();
        }
        if let Some(email) = patch.customer_email {
            self.customer_email = email.trim().to_string();
        }
        if let Some(items) = patch.items {
            self.total = order_total(&items);
            self.items = items;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("customer", &self.customer, "Customer name is required");
        errors.require("customer_email", &self.customer_email, "Customer email is required");
        if !errors.contains("customer_email") && !is_valid_email(&self.customer_email) {
            errors.insert("customer_email", "Please enter a valid email address");
        }
        if self.items.is_empty() {
            errors.insert("items", "At least one product must be selected");
        } else if self.items.iter().any(|item| item.quantity == 0) {
            errors.insert("items", "Item quantities must be at least 1");
        } else if self.items.iter().any(|item| !item.price.is_finite() || item.price < 0.0) {
            errors.insert("items", "Item prices must not be negative");
        } else if self.items.iter().any(|item| item.name.trim().is_empty()) {
            errors.insert("items", "Every item needs a name");
        }
        errors.into_result()
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_item_list() {
        let items = OrderItem::parse_list("Wireless Headphones*2@199.99; USB Cable@19.99").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], OrderItem::new("Wireless Headphones", 2, 199.99));
        assert_eq!(items[1].quantity, 1);
        assert!((order_total(&items) - 419.97).abs() < 1e-9);
    }

    #[test]
    fn parse_item_list_errors() {
        assert!(OrderItem::parse_list("Cable").is_err());
        assert!(OrderItem::parse_list("Cable*x@1").is_err());
        assert!(OrderItem::parse_list("Cable@abc").is_err());
        assert_eq!(OrderItem::parse_list(" ; ").unwrap(), Vec::new());
    }

    #[test]
    fn format_round_trips_through_parse() {
        let items = vec![OrderItem::new("Mouse Pad", 3, 24.99)];
        assert_eq!(OrderItem::parse_list(&OrderItem::format_list(&items)).unwrap(), items);
    }
}
