use admindash::collection::{
    ClassFilter, CollectionError, CollectionEvent, CollectionManager, EventOutcome, RecordId,
};
use admindash::entities::{
    Order, OrderDraft, OrderItem, OrderStatus, Product, ProductCategory, ProductDraft, ProductPatch, User, UserDraft,
    UserPatch, UserStatus,
};
use admindash::seed;
use chrono::{TimeZone, Utc};

fn users() -> CollectionManager<User> {
    CollectionManager::new(seed::users(Utc::now()))
}

fn products() -> CollectionManager<Product> {
    CollectionManager::new(seed::products())
}

#[test]
fn test_create_assigns_next_id_and_appends() {
    let mut users = users();
    let created = users.create(UserDraft::new("Ada Lovelace", "ada@example.com")).unwrap();

    assert_eq!(created.id, RecordId::Int(9));
    assert_eq!(created.status, UserStatus::Active);
    assert!(created.last_login.is_none());
    assert_eq!(users.len(), 9);
    assert_eq!(users.records().last().map(|u| u.id.clone()), Some(RecordId::Int(9)));
}

#[test]
fn test_invalid_create_leaves_collection_untouched() {
    let mut users = users();
    let before = users.records().to_vec();

    let err = users.create(UserDraft::new("", "not-an-email")).unwrap_err();
    let fields = err.field_errors().unwrap();
    assert_eq!(fields.get("name"), Some("Full name is required"));
    assert_eq!(fields.get("email"), Some("Please enter a valid email address"));
    assert_eq!(users.records(), &before[..]);

    // The failed attempt does not burn an id
    let created = users.create(UserDraft::new("Ada", "ada@example.com")).unwrap();
    assert_eq!(created.id, RecordId::Int(9));
}

#[test]
fn test_duplicate_email_is_case_insensitive() {
    let mut users = users();
    let err = users.create(UserDraft::new("Other Jane", "JANE@example.com")).unwrap_err();
    assert!(matches!(err, CollectionError::Duplicate { field: "email", .. }));
    assert_eq!(err.to_string(), "A user with this email already exists");

    // A record may keep its own value on update
    let patch = UserPatch {
        email: Some("Jane@Example.com".to_string()),
        ..UserPatch::default()
    };
    assert!(users.update(&RecordId::Int(2), patch).is_ok());
}

#[test]
fn test_ids_are_never_reused() {
    let mut products = products();
    assert!(products.delete(&RecordId::Int(12)).is_some());

    let created = products
        .create(ProductDraft::new("Webcam", 49.99, 10, ProductCategory::Electronics))
        .unwrap();
    assert_eq!(created.id, RecordId::Int(13));

    products.clear();
    let created = products
        .create(ProductDraft::new("Headset", 89.0, 3, ProductCategory::Gaming))
        .unwrap();
    assert_eq!(created.id, RecordId::Int(14));
}

#[test]
fn test_orders_get_prefixed_ids_at_the_front() {
    let mut orders = CollectionManager::new(seed::orders());
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let draft = OrderDraft {
        customer: "Grace Hopper".to_string(),
        customer_email: "grace@navy.mil".to_string(),
        items: vec![OrderItem::new("USB Cable", 2, 19.99), OrderItem::new("Mouse Pad", 1, 24.99)],
        ..OrderDraft::default()
    };

    let order: Order = orders.create_at(draft, now).unwrap();
    assert_eq!(order.id.to_string(), "ORD-006");
    assert_eq!(order.status, OrderStatus::Pending);
    assert!((order.total - 64.97).abs() < 1e-9);
    assert_eq!(order.created_at, now);
    assert_eq!(orders.records()[0].id, order.id);
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let mut products = products();
    let err = products.update(&RecordId::Int(99), ProductPatch::default()).unwrap_err();
    assert_eq!(err.to_string(), "No product with id 99");
}

#[test]
fn test_update_merges_only_given_fields() {
    let mut products = products();
    let patch = ProductPatch {
        stock: Some(0),
        ..ProductPatch::default()
    };
    let updated = products.update(&RecordId::Int(1), patch).unwrap();
    assert_eq!(updated.stock, 0);
    assert_eq!(updated.name, "Wireless Headphones");
    assert_eq!(updated.price, 199.99);
}

#[test]
fn test_delete_missing_id_is_a_no_op() {
    let mut products = products();
    assert!(products.delete(&RecordId::Int(404)).is_none());
    assert_eq!(products.len(), 12);
}

#[test]
fn test_search_and_filter_combine() {
    let mut products = products();
    products.search("mouse");
    assert_eq!(products.matching_count(), 3);

    products.set_classification_filter(ClassFilter::Only(ProductCategory::Gaming));
    let names: Vec<&str> = products.matches().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Gaming Mouse", "Mouse Pad"]);
}

#[test]
fn test_filter_changes_reset_to_first_page() {
    let mut products = products();
    assert_eq!(products.next_page(), 2);

    products.search("e");
    assert_eq!(products.filter_state().current_page, 1);

    products.next_page();
    products.cycle_classification_filter();
    assert_eq!(products.filter_state().current_page, 1);
}

#[test]
fn test_pagination_view() {
    let mut products = products();
    let first = products.view();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_matches, 12);
    assert_eq!(first.total_pages, 2);
    assert!(first.has_next_page());
    assert!(!first.has_previous_page());

    products.set_page(99);
    let last = products.view();
    assert_eq!(last.current_page, 2);
    assert_eq!(last.items.len(), 2);
    assert_eq!(products.set_page(0), 1);
}

#[test]
fn test_delete_clamps_current_page() {
    let mut products = products();
    products.set_page(2);
    products.delete(&RecordId::Int(11));
    products.delete(&RecordId::Int(12));
    assert_eq!(products.filter_state().current_page, 1);
}

#[test]
fn test_empty_view_has_no_pages() {
    let mut users = users();
    users.search("nobody-matches-this");
    let view = users.view();
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.current_page, 1);
}

#[test]
fn test_counts_by_class_cover_whole_collection() {
    let mut users = users();
    users.search("jane");
    let counts = users.counts_by_class();
    assert_eq!(
        counts,
        vec![(UserStatus::Active, 5), (UserStatus::Inactive, 2), (UserStatus::Pending, 1)]
    );
}

#[test]
fn test_cycle_filter_wraps_to_all() {
    let mut users = users();
    assert_eq!(users.cycle_classification_filter(), ClassFilter::Only(UserStatus::Active));
    assert_eq!(users.cycle_classification_filter(), ClassFilter::Only(UserStatus::Inactive));
    assert_eq!(users.cycle_classification_filter(), ClassFilter::Only(UserStatus::Pending));
    assert_eq!(users.cycle_classification_filter(), ClassFilter::All);
}

#[test]
fn test_dispatch_events() {
    let mut users = users();
    let outcome = users
        .dispatch(CollectionEvent::SearchTextChanged("smith".to_string()))
        .unwrap();
    assert_eq!(outcome, EventOutcome::FilterChanged);
    assert_eq!(users.matching_count(), 1);

    let outcome = users.dispatch(CollectionEvent::Delete(RecordId::Int(2))).unwrap();
    assert!(matches!(outcome, EventOutcome::Deleted(Some(ref user)) if user.name == "Jane Smith"));

    let outcome = users.dispatch(CollectionEvent::Delete(RecordId::Int(2))).unwrap();
    assert_eq!(outcome, EventOutcome::Deleted(None));
}

#[test]
fn test_export_writes_current_matches_as_json() {
    let dir = std::env::temp_dir().join(format!("admindash_test_export_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("users.json");

    let mut users = users();
    users.set_classification_filter(ClassFilter::Only(UserStatus::Inactive));
    assert_eq!(users.export_json(&path).unwrap(), 2);

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mike Johnson", "Emma Martinez"]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_order_without_customer_is_rejected() {
    let mut orders = CollectionManager::new(seed::orders());
    let draft = OrderDraft {
        customer_email: "grace@navy.mil".to_string(),
        items: vec![OrderItem::new("USB Cable", 1, 19.99)],
        ..OrderDraft::default()
    };
    let err = orders.create(draft).unwrap_err();
    assert!(err.field_errors().unwrap().contains("customer"));
    assert_eq!(orders.len(), 5);
}

#[test]
fn test_widget_lands_on_second_page_and_delete_clamps() {
    let mut products = products();
    let widget = products
        .create(ProductDraft::new("Widget", 9.99, 5, ProductCategory::Accessories))
        .unwrap();

    let view = products.view();
    assert_eq!(view.total_matches, 13);
    assert_eq!(view.total_pages, 2);

    products.set_page(2);
    products.delete(&RecordId::Int(11));
    products.delete(&RecordId::Int(12));
    assert_eq!(products.view().items.len(), 1);
    products.delete(&widget.id);
    assert_eq!(products.filter_state().current_page, 1);
    assert!(products.view().items.iter().all(|p| p.id != widget.id));
}

#[test]
fn test_pages_cover_every_match_once() {
    let mut products = products();
    products.search("o");
    let expected: Vec<RecordId> = products.matches().iter().map(|p| p.id.clone()).collect();

    let mut seen = Vec::new();
    let pages = products.view().total_pages;
    for page in 1..=pages {
        products.set_page(page);
        let view = products.view();
        assert!(view.items.len() <= 10);
        seen.extend(view.items.iter().map(|p| p.id.clone()));
    }
    assert_eq!(seen, expected);
}

#[test]
fn test_same_email_in_other_case_after_create() {
    let mut users = users();
    users.create(UserDraft::new("Jane", "JANE@x.com")).unwrap();
    let err = users.create(UserDraft::new("Other", "jane@x.com")).unwrap_err();
    assert!(matches!(err, CollectionError::Duplicate { .. }));
}

#[test]
fn test_update_out_of_the_filter_clamps_current_page() {
    let mut products = products();
    let mut added = Vec::new();
    for n in 1..=6 {
        let draft = ProductDraft::new(format!("Monitor {}", n), 199.0, 4, ProductCategory::Electronics);
        added.push(products.create(draft).unwrap().id);
    }
    products.set_classification_filter(ClassFilter::Only(ProductCategory::Electronics));
    assert_eq!(products.view().total_matches, 11);
    assert_eq!(products.set_page(2), 2);

    let patch = ProductPatch {
        category: Some(ProductCategory::Gaming),
        ..ProductPatch::default()
    };
    products.update(&added[0], patch).unwrap();

    assert_eq!(products.filter_state().current_page, 1);
    let view = products.view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.items.len(), 10);
}

#[test]
fn test_bulk_update_clamps_current_page() {
    let mut products = products();
    for n in 1..=6 {
        let draft = ProductDraft::new(format!("Monitor {}", n), 199.0, 4, ProductCategory::Electronics);
        products.create(draft).unwrap();
    }
    products.set_classification_filter(ClassFilter::Only(ProductCategory::Electronics));
    products.set_page(2);

    let visited = products.update_all(|product| {
        if product.name.starts_with("Monitor") {
            product.category = ProductCategory::Office;
        }
    });

    assert_eq!(visited, 18);
    assert_eq!(products.filter_state().current_page, 1);
    assert_eq!(products.view().total_matches, 5);
}
