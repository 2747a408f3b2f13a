//! Every collection the dashboard manages, owned in one place.

use chrono::{DateTime, Local, Utc};

use crate::collection::CollectionManager;
use crate::entities::{CalendarEvent, Notification, Order, Product, User};
use crate::kanban::{Board, Column};
use crate::seed;

#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: CollectionManager<User>,
    pub orders: CollectionManager<Order>,
    pub products: CollectionManager<Product>,
    pub notifications: CollectionManager<Notification>,
    pub events: CollectionManager<CalendarEvent>,
    pub board: Board,
}

impl Store {
    /// Load the demo data, placing time-relative records around `now`.
    pub fn seeded(now: DateTime<Local>, columns: Vec<Column>) -> Self {
        let utc_now = now.with_timezone(&Utc);
        let today = now.date_naive();
        let store = Self {
            users: CollectionManager::new(seed::users(utc_now)),
            orders: CollectionManager::new(seed::orders()),
            products: CollectionManager::new(seed::products()),
            notifications: CollectionManager::new(seed::notifications(utc_now)),
            events: CollectionManager::new(seed::calendar_events(today)),
            board: Board::new(columns, seed::kanban_tasks(today)),
        };
        log::info!(
            "loaded {} users, {} orders, {} products, {} notifications, {} events, {} tasks",
            store.users.len(),
            store.orders.len(),
            store.products.len(),
            store.notifications.len(),
            store.events.len(),
            store.board.tasks().len()
        );
        store
    }
}
