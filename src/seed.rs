//! Demo data loaded at startup.
//!
//! Time-sensitive records (last logins, notifications, calendar events and
//! due dates) are placed relative to the moment the dashboard starts so the
//! relative labels and the upcoming-events list stay meaningful.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::collection::RecordId;
use crate::entities::{
    CalendarEvent, EventKind, KanbanTask, Notification, NotificationKind, NotificationLink, Order, OrderItem,
    OrderStatus, Priority, Product, ProductCategory, User, UserRole, UserStatus,
};
use crate::entities::order::order_total;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap_or_default()
}

pub fn users(now: DateTime<Utc>) -> Vec<User> {
    let rows = [
        (1, "John Doe", "john@example.com", UserRole::Admin, UserStatus::Active, date(2024, 1, 15), Some(Duration::hours(2))),
        (2, "Jane Smith", "jane@example.com", UserRole::User, UserStatus::Active, date(2024, 2, 20), Some(Duration::days(1))),
        (3, "Mike Johnson", "mike@example.com", UserRole::Editor, UserStatus::Inactive, date(2024, 1, 10), Some(Duration::weeks(1))),
        (4, "Sarah Wilson", "sarah@example.com", UserRole::User, UserStatus::Active, date(2024, 3, 5), Some(Duration::hours(3))),
        (5, "Tom Brown", "tom@example.com", UserRole::Admin, UserStatus::Pending, date(2024, 3, 10), None),
        (6, "Lisa Anderson", "lisa@example.com", UserRole::User, UserStatus::Active, date(2024, 2, 28), Some(Duration::minutes(5))),
        (7, "David Garcia", "david@example.com", UserRole::Editor, UserStatus::Active, date(2024, 1, 25), Some(Duration::hours(1))),
        (8, "Emma Martinez", "emma@example.com", UserRole::User, UserStatus::Inactive, date(2024, 2, 15), Some(Duration::weeks(2))),
    ];

    rows.into_iter()
        .map(|(id, name, email, role, status, joined_on, since_login)| User {
            id: RecordId::Int(id),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            joined_on,
            last_login: since_login.map(|ago| now - ago),
        })
        .collect()
}

pub fn orders() -> Vec<Order> {
    let order = |id: &str,
                 customer: &str,
                 email: &str,
                 items: Vec<OrderItem>,
                 status: OrderStatus,
                 priority: Priority,
                 created_at: DateTime<Utc>,
                 updated_at: DateTime<Utc>| Order {
        id: RecordId::from(id),
        customer: customer.to_string(),
        customer_email: email.to_string(),
        total: order_total(&items),
        items,
        status,
        priority,
        created_at,
        updated_at,
    };

    vec![
        order(
            "ORD-001",
            "John Smith",
            "john.smith@email.com",
            vec![
                OrderItem::new("Wireless Headphones", 2, 199.99),
                OrderItem::new("USB Cable", 1, 19.99),
            ],
            OrderStatus::Pending,
            Priority::High,
            utc(2024, 1, 15, 10, 30),
            utc(2024, 1, 15, 10, 30),
        ),
        order(
            "ORD-002",
            "Sarah Johnson",
            "sarah.j@email.com",
            vec![
                OrderItem::new("Bluetooth Speaker", 1, 149.99),
                OrderItem::new("Phone Case", 3, 29.99),
            ],
            OrderStatus::Processing,
            Priority::Medium,
            utc(2024, 1, 14, 14, 20),
            utc(2024, 1, 15, 9, 15),
        ),
        order(
            "ORD-003",
            "Mike Davis",
            "mike.davis@email.com",
            vec![
                OrderItem::new("Laptop Stand", 1, 89.99),
                OrderItem::new("Wireless Mouse", 1, 59.99),
            ],
            OrderStatus::Completed,
            Priority::Low,
            utc(2024, 1, 13, 16, 45),
            utc(2024, 1, 14, 12, 30),
        ),
        order(
            "ORD-004",
            "Emily Wilson",
            "emily.w@email.com",
            vec![OrderItem::new("Smart Watch", 1, 299.99)],
            OrderStatus::Cancelled,
            Priority::Medium,
            utc(2024, 1, 12, 11, 15),
            utc(2024, 1, 13, 8, 45),
        ),
        order(
            "ORD-005",
            "David Brown",
            "david.brown@email.com",
            vec![
                OrderItem::new("Gaming Keyboard", 1, 129.99),
                OrderItem::new("Gaming Mouse", 1, 79.99),
                OrderItem::new("Mouse Pad", 1, 24.99),
            ],
            OrderStatus::Shipped,
            Priority::High,
            utc(2024, 1, 11, 13, 20),
            utc(2024, 1, 14, 16, 0),
        ),
    ]
}

pub fn products() -> Vec<Product> {
    use ProductCategory::*;

    let rows = [
        (1, "Wireless Headphones", 199.99, Electronics, 25, 4.5),
        (2, "USB Cable", 19.99, Electronics, 50, 4.2),
        (3, "Bluetooth Speaker", 149.99, Electronics, 15, 4.7),
        (4, "Phone Case", 29.99, Accessories, 30, 4.1),
        (5, "Laptop Stand", 89.99, Office, 12, 4.3),
        (6, "Wireless Mouse", 59.99, Electronics, 20, 4.4),
        (7, "Smart Watch", 299.99, Electronics, 8, 4.6),
        (8, "Gaming Keyboard", 129.99, Gaming, 18, 4.5),
        (9, "Gaming Mouse", 79.99, Gaming, 22, 4.3),
        (10, "Mouse Pad", 24.99, Gaming, 35, 4.0),
        (11, "Monitor Stand", 69.99, Office, 14, 4.2),
        (12, "Desk Lamp", 45.99, Office, 28, 4.4),
    ];

    rows.into_iter()
        .map(|(id, name, price, category, stock, rating)| Product {
            id: RecordId::Int(id),
            name: name.to_string(),
            price,
            category,
            stock,
            rating,
        })
        .collect()
}

pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    use NotificationKind as Kind;
    use NotificationLink as Link;

    let rows = [
        (
            1,
            "New Order Received",
            "Order #ORD-001 has been placed by John Smith for $299.99. The order contains 2 items: Wireless Headphones and USB Cable.",
            Kind::Order,
            Duration::minutes(2),
            false,
            Some(Link::Orders),
        ),
        (
            2,
            "User Registration",
            "New user Sarah Wilson has registered with email sarah.wilson@email.com. Account verification is pending.",
            Kind::User,
            Duration::minutes(15),
            false,
            Some(Link::Users),
        ),
        (
            3,
            "System Alert",
            "Server maintenance is scheduled for tonight at 2:00 AM EST. Expected downtime is 30 minutes.",
            Kind::Alert,
            Duration::hours(1),
            true,
            None,
        ),
        (
            4,
            "Report Generated",
            "Monthly sales report for December 2024 is now available for download. Total revenue: $12,543.",
            Kind::Report,
            Duration::hours(2),
            false,
            Some(Link::Charts),
        ),
        (
            5,
            "Task Reminder",
            "You have 3 pending orders that require review and approval. Please check the orders page.",
            Kind::Reminder,
            Duration::hours(3),
            true,
            Some(Link::Orders),
        ),
        (
            6,
            "Order Completed",
            "Order #ORD-002 has been completed and shipped to customer Mike Johnson. Tracking ID: TRK123456.",
            Kind::Order,
            Duration::hours(5),
            false,
            Some(Link::Orders),
        ),
        (
            7,
            "New User Feedback",
            "Customer Alice Cooper left a 5-star review: \"Excellent service and fast delivery!\"",
            Kind::User,
            Duration::hours(6),
            true,
            Some(Link::Users),
        ),
        (
            8,
            "Low Stock Alert",
            "Product \"Wireless Mouse\" is running low on stock. Only 5 units remaining.",
            Kind::Alert,
            Duration::hours(8),
            false,
            Some(Link::Products),
        ),
    ];

    rows.into_iter()
        .map(|(id, title, message, kind, age, read, link)| Notification {
            id: RecordId::Int(id),
            title: title.to_string(),
            message: message.to_string(),
            kind,
            created_at: now - age,
            read,
            link,
        })
        .collect()
}

/// Events spread over the days following `today`.
pub fn calendar_events(today: NaiveDate) -> Vec<CalendarEvent> {
    let rows = [
        (1, "Team Meeting", 1, (10, 0), (11, 0), EventKind::Meeting, "Weekly team standup meeting", "Conference Room A", &["John", "Jane", "Mike"][..]),
        (2, "Project Deadline", 3, (9, 0), (17, 0), EventKind::Deadline, "Final project submission", "Office", &["All Team"][..]),
        (3, "Client Presentation", 6, (14, 0), (15, 30), EventKind::Presentation, "Present quarterly results to client", "Zoom", &["Sales Team", "Management"][..]),
        (4, "React Workshop", 2, (13, 0), (16, 0), EventKind::Workshop, "Advanced React development workshop", "Training Room", &["Development Team"][..]),
        (5, "Product Review", 4, (15, 0), (16, 0), EventKind::Meeting, "Monthly product review session", "Conference Room B", &["Product Team", "Stakeholders"][..]),
    ];

    rows.into_iter()
        .map(|(id, title, offset, start, end, kind, description, location, attendees)| {
            let day = today + Duration::days(offset);
            CalendarEvent {
                id: RecordId::Int(id),
                title: title.to_string(),
                start: at(day, start.0, start.1),
                end: at(day, end.0, end.1),
                kind,
                description: description.to_string(),
                location: location.to_string(),
                attendees: attendees.iter().map(|a| a.to_string()).collect(),
            }
        })
        .collect()
}

/// Tasks for the stock columns, with due dates around `today`.
pub fn kanban_tasks(today: NaiveDate) -> Vec<KanbanTask> {
    let rows = [
        (1, "Design Homepage", "Create wireframes and mockups for the new homepage design", "todo", Priority::High, 3, &["John", "Jane"][..], 3, 2),
        (2, "Implement User Authentication", "Add login and registration functionality with JWT", "in-progress", Priority::High, 6, &["Mike"][..], 1, 0),
        (3, "Write API Documentation", "Document all API endpoints and their usage", "review", Priority::Medium, 8, &["Sarah", "Tom"][..], 5, 1),
        (4, "Setup CI/CD Pipeline", "Configure automated testing and deployment", "done", Priority::Medium, -2, &["David"][..], 2, 3),
        (5, "Mobile Responsive Design", "Ensure all pages work perfectly on mobile devices", "todo", Priority::Low, 13, &["Lisa"][..], 0, 0),
    ];

    rows.into_iter()
        .map(|(id, title, description, status, priority, due_in, assignees, comments, attachments)| KanbanTask {
            id: RecordId::Int(id),
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
            priority,
            due_date: Some(today + Duration::days(due_in)),
            assignees: assignees.iter().map(|a| a.to_string()).collect(),
            comments,
            attachments,
        })
        .collect()
}
