//! Headline figures for the dashboard page.

use chrono::NaiveDateTime;

use crate::entities::{OrderStatus, StockLevel, UserStatus};
use crate::store::Store;

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCount {
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub location: String,
}

/// A snapshot of every collection, computed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub users: usize,
    pub active_users: usize,
    pub orders: usize,
    /// Pending or processing.
    pub open_orders: usize,
    /// Sum of order totals, cancelled orders excluded.
    pub revenue: f64,
    pub products: usize,
    /// Low or out of stock.
    pub low_stock: usize,
    pub unread_notifications: usize,
    pub tasks_per_column: Vec<ColumnCount>,
    pub upcoming_events: Vec<UpcomingEvent>,
}

impl DashboardSummary {
    pub fn collect(store: &Store, now: NaiveDateTime, upcoming_limit: usize) -> Self {
        let Store {
            users,
            orders,
            products,
            notifications,
            events,
            board,
        } = store;

        let revenue: f64 = orders
            .records()
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .map(|o| o.total)
            .sum();

        Self {
            users: users.len(),
            active_users: users.count_of(UserStatus::Active),
            orders: orders.len(),
            open_orders: orders.records().iter().filter(|o| o.status.is_open()).count(),
            revenue,
            products: products.len(),
            low_stock: products
                .records()
                .iter()
                .filter(|p| p.stock_level() != StockLevel::InStock)
                .count(),
            unread_notifications: notifications.unread_count(),
            tasks_per_column: board
                .counts()
                .into_iter()
                .map(|(column, count)| ColumnCount {
                    title: column.title.clone(),
                    count,
                })
                .collect(),
            upcoming_events: events
                .upcoming(now, upcoming_limit)
                .into_iter()
                .map(|e| UpcomingEvent {
                    title: e.title.clone(),
                    start: e.start,
                    location: e.location.clone(),
                })
                .collect(),
        }
    }
}
