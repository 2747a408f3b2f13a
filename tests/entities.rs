use admindash::collection::{CollectionManager, RecordId};
use admindash::entities::{
    CalendarEvent, CalendarEventDraft, CalendarEventPatch, EventKind, Money, Notification, NotificationDraft,
    NotificationKind, NotificationLink, Product, StockLevel, User,
};
use admindash::seed;
use chrono::{NaiveDate, NaiveDateTime, Utc};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

fn noon(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(12, 0, 0).unwrap()
}

fn notifications() -> CollectionManager<Notification> {
    CollectionManager::new(seed::notifications(Utc::now()))
}

#[test]
fn test_open_notification_marks_it_read() {
    let mut inbox = notifications();
    assert_eq!(inbox.unread_count(), 5);

    let link = inbox.open(&RecordId::Int(1)).unwrap();
    assert_eq!(link, Some(NotificationLink::Orders));
    assert!(inbox.get(&RecordId::Int(1)).unwrap().read);
    assert_eq!(inbox.unread_count(), 4);

    // Opening again is harmless
    assert!(inbox.open(&RecordId::Int(1)).is_ok());
    assert_eq!(inbox.unread_count(), 4);
    assert!(inbox.open(&RecordId::Int(99)).is_err());
}

#[test]
fn test_mark_all_read_reports_changed_count() {
    let mut inbox = notifications();
    assert_eq!(inbox.mark_all_read(), 5);
    assert_eq!(inbox.unread_count(), 0);
    assert_eq!(inbox.mark_all_read(), 0);
}

#[test]
fn test_new_notifications_arrive_unread_at_the_top() {
    let mut inbox = notifications();
    let draft = NotificationDraft::new(NotificationKind::Report, "Weekly report", "Sales are up")
        .with_link(NotificationLink::Charts);
    let created = inbox.create(draft).unwrap();

    assert_eq!(created.id, RecordId::Int(9));
    assert!(!created.read);
    assert_eq!(inbox.records()[0].id, created.id);
    assert_eq!(inbox.unread_count(), 6);
}

#[test]
fn test_clear_empties_the_inbox() {
    let mut inbox = notifications();
    assert_eq!(inbox.clear(), 8);
    assert!(inbox.is_empty());
    assert_eq!(inbox.unread_count(), 0);
}

#[test]
fn test_upcoming_events_are_sorted_and_limited() {
    let events = CollectionManager::new(seed::calendar_events(today()));
    let upcoming: Vec<&str> = events
        .upcoming(noon(today()), 3)
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(upcoming, vec!["Team Meeting", "React Workshop", "Project Deadline"]);

    let later = today() + chrono::Duration::days(30);
    assert!(events.upcoming(noon(later), 5).is_empty());
}

#[test]
fn test_events_on_a_day() {
    let events = CollectionManager::new(seed::calendar_events(today()));
    let day = today() + chrono::Duration::days(4);
    let titles: Vec<&str> = events.on_day(day).iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Product Review"]);
}

#[test]
fn test_event_end_must_not_precede_start() {
    let mut events: CollectionManager<CalendarEvent> = CollectionManager::new(seed::calendar_events(today()));
    let start = noon(today());
    let draft = CalendarEventDraft {
        title: "Backwards".to_string(),
        start,
        end: start - chrono::Duration::minutes(30),
        ..CalendarEventDraft::default()
    };
    let err = events.create(draft).unwrap_err();
    assert_eq!(err.field_errors().unwrap().get("end"), Some("End must not be before start"));

    let patch = CalendarEventPatch {
        end: Some(start),
        start: Some(start + chrono::Duration::hours(1)),
        ..CalendarEventPatch::default()
    };
    assert!(events.update(&RecordId::Int(1), patch).is_err());
    assert_eq!(events.get(&RecordId::Int(1)).unwrap().kind, EventKind::Meeting);
}

#[test]
fn test_event_duration() {
    let events = CollectionManager::new(seed::calendar_events(today()));
    let presentation = events.get(&RecordId::Int(3)).unwrap();
    assert_eq!(presentation.duration_minutes(), 90);
}

#[test]
fn test_stock_levels() {
    assert_eq!(StockLevel::for_quantity(0), StockLevel::OutOfStock);
    assert_eq!(StockLevel::for_quantity(14), StockLevel::Low);
    assert_eq!(StockLevel::for_quantity(15), StockLevel::InStock);

    let products: CollectionManager<Product> = CollectionManager::new(seed::products());
    let low: Vec<&str> = products
        .records()
        .iter()
        .filter(|p| p.stock_level() == StockLevel::Low)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(low, vec!["Laptop Stand", "Smart Watch", "Monitor Stand"]);
}

#[test]
fn test_user_initials_follow_the_name() {
    let users: CollectionManager<User> = CollectionManager::new(seed::users(Utc::now()));
    let jane = users.get(&RecordId::Int(2)).unwrap();
    assert_eq!(jane.initials(), "JS");
    assert!(users.get(&RecordId::Int(5)).unwrap().last_login.is_none());
}

#[test]
fn test_money_formatting() {
    assert_eq!(Money(1234.5, "$").to_string(), "$1234.50");
    assert_eq!(Money(0.0, "€").to_string(), "€0.00");
}

#[test]
fn test_labels_round_trip_through_parse() {
    assert_eq!(NotificationKind::parse("REPORT"), Some(NotificationKind::Report));
    assert_eq!(NotificationLink::parse(" charts "), Some(NotificationLink::Charts));
    assert_eq!(EventKind::parse("unknown"), None);
    assert_eq!(NotificationKind::Order.to_string(), "order");
}
