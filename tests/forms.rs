use admindash::collection::{ClassFilter, CollectionManager, RecordId};
use admindash::entities::{Order, OrderItem, OrderStatus, Product, ProductCategory, User, UserRole};
use admindash::forms::{FormMode, FormSession, FormValues, Submission};
use admindash::seed;
use chrono::Utc;

fn users() -> CollectionManager<User> {
    CollectionManager::new(seed::users(Utc::now()))
}

fn type_into<R: admindash::forms::FormRecord>(session: &mut FormSession<R>, text: &str) {
    for c in text.chars() {
        session.input(c);
    }
}

#[test]
fn test_create_form_starts_with_defaults() {
    let users = users();
    let session = FormSession::create(&users);
    assert_eq!(session.mode(), &FormMode::Create);
    assert_eq!(session.title(), "New user");
    assert_eq!(session.values().get("role"), "User");
    assert_eq!(session.values().get("status"), "active");
    assert_eq!(session.focused_field().map(|f| f.key), Some("name"));
}

#[test]
fn test_typing_and_cursor_editing() {
    let users = users();
    let mut session = FormSession::create(&users);
    type_into(&mut session, "Ada");
    session.move_cursor_left();
    session.move_cursor_left();
    session.input('x');
    assert_eq!(session.values().get("name"), "Axda");
    session.backspace();
    assert_eq!(session.values().get("name"), "Ada");
    assert_eq!(session.cursor(), 1);
}

#[test]
fn test_choice_fields_cycle_and_ignore_typing() {
    let users = users();
    let mut session = FormSession::create(&users);
    session.focus_next();
    session.focus_next();
    assert_eq!(session.focused_field().map(|f| f.key), Some("role"));

    session.input('z');
    assert_eq!(session.values().get("role"), "User");
    session.cycle_choice(true);
    assert_eq!(session.values().get("role"), "Admin");
    session.cycle_choice(false);
    assert_eq!(session.values().get("role"), "User");
}

#[test]
fn test_submit_creates_the_record() {
    let mut users = users();
    let mut session = FormSession::create(&users);
    type_into(&mut session, "Ada Lovelace");
    session.focus_next();
    type_into(&mut session, "ada@example.com");
    session.focus_next();
    session.cycle_choice(true);

    let user = session.submit(&mut users).unwrap();
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.role, UserRole::Admin);
    assert!(users.contains(&user.id));
}

#[test]
fn test_failed_submit_keeps_messages_and_data() {
    let mut users = users();
    let mut session = FormSession::create(&users);
    session.set("name", "Jane Again");
    session.set("email", "jane@example.com");

    assert!(session.submit(&mut users).is_err());
    assert_eq!(session.errors().get("email"), Some("A user with this email already exists"));
    assert_eq!(users.len(), 8);

    // Editing a field clears the messages
    session.set("email", "jane.again@example.com");
    assert!(session.errors().is_empty());
    assert!(session.submit(&mut users).is_ok());
}

#[test]
fn test_edit_form_is_prefilled() {
    let orders = CollectionManager::new(seed::orders());
    let id = RecordId::from("ORD-002");
    let session = FormSession::edit(&orders, &id).unwrap();

    assert!(session.is_edit());
    assert_eq!(session.title(), "Edit order ORD-002");
    assert_eq!(session.values().get("status"), "processing");
    assert!(session.fields().iter().any(|f| f.key == "status"));
    assert!(FormSession::edit(&orders, &RecordId::from("ORD-999")).is_none());
}

#[test]
fn test_edit_only_fields_are_hidden_when_creating() {
    let orders = CollectionManager::new(seed::orders());
    let session = FormSession::<Order>::create(&orders);
    assert!(session.fields().iter().all(|f| f.key != "status"));

    let products = CollectionManager::new(seed::products());
    let session = FormSession::<Product>::create(&products);
    assert!(session.fields().iter().all(|f| f.key != "rating"));
}

#[test]
fn test_order_items_are_parsed_from_text() {
    let mut orders = CollectionManager::new(seed::orders());
    let values = FormValues::new()
        .with("customer", "Grace Hopper")
        .with("customer_email", "grace@navy.mil")
        .with("items", "USB Cable*2@19.99; Mouse Pad@24.99")
        .with("priority", "high");
    let mut session = FormSession::create_with(&orders, values);

    match session.parse().unwrap() {
        Submission::Create(draft) => {
            assert_eq!(
                draft.items,
                vec![OrderItem::new("USB Cable", 2, 19.99), OrderItem::new("Mouse Pad", 1, 24.99)]
            );
        }
        Submission::Update(..) => panic!("expected a create submission"),
    }

    let order = session.submit(&mut orders).unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.item_count(), 3);
}

#[test]
fn test_bad_order_items_are_reported_on_the_field() {
    let orders = CollectionManager::new(seed::orders());
    let values = FormValues::new()
        .with("customer", "Grace")
        .with("customer_email", "grace@navy.mil")
        .with("items", "USB Cable*two@19.99")
        .with("priority", "high");
    let session = FormSession::create_with(&orders, values);

    let errors = session.parse().unwrap_err();
    assert_eq!(errors.get("items"), Some("'USB Cable*two@19.99' has an invalid quantity"));
}

#[test]
fn test_product_numbers_are_validated() {
    let mut products = CollectionManager::new(seed::products());
    let values = FormValues::new()
        .with("name", "Webcam")
        .with("price", "cheap")
        .with("stock", "")
        .with("category", "Office");
    let mut session = FormSession::create_with(&products, values);

    assert!(session.submit(&mut products).is_err());
    assert_eq!(session.errors().get("price"), Some("Price must be a number"));

    session.set("price", "49.5");
    session.set("stock", "7");
    let product = session.submit(&mut products).unwrap();
    assert_eq!(product.category, ProductCategory::Office);
    assert_eq!(product.stock, 7);
}

#[test]
fn test_cancel_restores_the_filter_state() {
    let mut users = users();
    users.search("smith");
    let session = FormSession::create(&users);

    users.search("something else");
    users.set_classification_filter(ClassFilter::Only(admindash::entities::UserStatus::Pending));
    session.cancel(&mut users);

    assert_eq!(users.filter_state().search_text, "smith");
    assert_eq!(users.filter_state().class_filter, ClassFilter::All);
}

#[test]
fn test_blank_required_fields_are_reported_with_bad_input() {
    let mut orders = CollectionManager::new(seed::orders());
    let values = FormValues::new()
        .with("customer", "")
        .with("customer_email", "")
        .with("items", "Cable")
        .with("priority", "high");
    let mut session = FormSession::create_with(&orders, values);

    assert!(session.submit(&mut orders).is_err());
    let errors = session.errors();
    assert_eq!(errors.get("customer"), Some("Customer name is required"));
    assert_eq!(errors.get("customer_email"), Some("Customer email is required"));
    assert!(errors.contains("items"));
    assert_eq!(orders.len(), 5);
}

#[test]
fn test_blank_name_and_bad_price_are_both_reported() {
    let mut products = CollectionManager::new(seed::products());
    let values = FormValues::new()
        .with("name", "")
        .with("price", "abc")
        .with("stock", "3")
        .with("category", "Office");
    let mut session = FormSession::create_with(&products, values);

    let err = session.submit(&mut products).unwrap_err();
    let fields: Vec<&str> = err.field_errors().unwrap().fields().collect();
    assert_eq!(fields, vec!["name", "price"]);
    assert_eq!(session.errors().get("name"), Some("Product name is required"));
    assert_eq!(session.errors().get("price"), Some("Price must be a number"));
}

#[test]
fn test_negative_price_and_missing_stock_are_both_reported() {
    let mut products = CollectionManager::new(seed::products());
    let values = FormValues::new()
        .with("name", "Webcam")
        .with("price", "-4")
        .with("stock", "")
        .with("category", "Office");
    let mut session = FormSession::create_with(&products, values);

    assert!(session.submit(&mut products).is_err());
    assert_eq!(session.errors().get("price"), Some("Price must be zero or more"));
    assert_eq!(session.errors().get("stock"), Some("Stock is required"));
}
