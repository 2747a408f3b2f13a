use admindash::collection::RecordId;
use admindash::dashboard::DashboardSummary;
use admindash::entities::{OrderStatus, OrderPatch};
use admindash::kanban::default_columns;
use admindash::signals::{AddTarget, AppSignals, OneShot};
use admindash::Store;
use chrono::{Local, TimeZone};

fn store() -> Store {
    let now = Local.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
    Store::seeded(now, default_columns())
}

fn summary(store: &Store) -> DashboardSummary {
    let now = Local.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap().naive_local();
    DashboardSummary::collect(store, now, 3)
}

#[test]
fn test_summary_of_seed_data() {
    let summary = summary(&store());

    assert_eq!(summary.users, 8);
    assert_eq!(summary.active_users, 5);
    assert_eq!(summary.orders, 5);
    assert_eq!(summary.open_orders, 2);
    assert!((summary.revenue - 1044.88).abs() < 1e-6);
    assert_eq!(summary.products, 12);
    assert_eq!(summary.low_stock, 3);
    assert_eq!(summary.unread_notifications, 5);

    let columns: Vec<(&str, usize)> = summary
        .tasks_per_column
        .iter()
        .map(|c| (c.title.as_str(), c.count))
        .collect();
    assert_eq!(
        columns,
        vec![("To Do", 2), ("In Progress", 1), ("Review", 1), ("Done", 1)]
    );

    let events: Vec<&str> = summary.upcoming_events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(events, vec!["Team Meeting", "React Workshop", "Project Deadline"]);
}

#[test]
fn test_summary_follows_the_store() {
    let mut store = store();
    store.notifications.mark_all_read();
    let patch = OrderPatch {
        status: Some(OrderStatus::Cancelled),
        ..OrderPatch::default()
    };
    store.orders.update(&RecordId::from("ORD-001"), patch).unwrap();
    store.users.delete(&RecordId::Int(1));

    let summary = summary(&store);
    assert_eq!(summary.unread_notifications, 0);
    assert_eq!(summary.open_orders, 1);
    assert!((summary.revenue - 624.91).abs() < 1e-6);
    assert_eq!(summary.users, 7);
    assert_eq!(summary.active_users, 4);
}

#[test]
fn test_one_shot_reads_true_once() {
    let mut flag = OneShot::default();
    assert!(!flag.take());

    flag.trigger();
    flag.trigger();
    assert!(flag.is_armed());
    assert!(flag.take());
    assert!(!flag.take());
}

#[test]
fn test_add_signals_are_independent() {
    let mut signals = AppSignals::new();
    signals.trigger_add(AddTarget::Order);

    assert!(signals.is_add_pending(AddTarget::Order));
    assert!(!signals.take_add(AddTarget::User));
    assert!(!signals.take_add(AddTarget::Product));
    assert!(signals.take_add(AddTarget::Order));
    assert!(!signals.take_add(AddTarget::Order));

    for target in AddTarget::ALL {
        assert!(!signals.is_add_pending(target));
    }
}
