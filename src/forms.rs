//! Create/edit forms for every record kind.
//!
//! A form is a flat list of text inputs described by [`FieldSpec`]s. The
//! raw strings are parsed into the kind's draft or patch on submit, and any
//! failure comes back as per-field messages so the dialog can show them
//! next to the offending input.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::collection::{CollectionError, CollectionManager, FieldErrors, FilterState, Record, RecordId};
use crate::entities::calendar_event::parse_attendees;
use crate::entities::{
    CalendarEvent, CalendarEventDraft, CalendarEventPatch, EventKind, KanbanTask, KanbanTaskDraft, KanbanTaskPatch,
    Notification, NotificationDraft, NotificationKind, NotificationLink, NotificationPatch, Order, OrderDraft,
    OrderItem, OrderPatch, OrderStatus, Priority, Product, ProductCategory, ProductDraft, ProductPatch, User,
    UserDraft, UserPatch, UserRole, UserStatus,
};
use crate::utils::datetime::{format_datetime, format_ymd, parse_date, parse_datetime};

/// How an input is edited and parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// One of a fixed set of labels, cycled with the arrow keys.
    Choice(&'static [&'static str]),
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DD HH:MM`
    DateTime,
    /// Comma-separated values.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Message shown when the input is left blank; `None` for optional fields.
    pub required: Option<&'static str>,
    /// Hidden when creating (e.g. an order's status always starts as pending).
    pub edit_only: bool,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: None,
            edit_only: false,
        }
    }

    const fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    const fn edit_only(mut self) -> Self {
        self.edit_only = true;
        self
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Date => Some("YYYY-MM-DD"),
            FieldKind::DateTime => Some("YYYY-MM-DD HH:MM"),
            FieldKind::List => Some("comma separated"),
            FieldKind::Choice(_) => Some("←/→ to change"),
            FieldKind::Text | FieldKind::Number => None,
        }
    }
}

/// Raw input strings keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.insert(key, value.into());
    }

    /// Empty string for fields never set.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    fn entry(&mut self, key: &'static str) -> &mut String {
        self.0.entry(key).or_default()
    }

    fn text(&self, key: &str) -> String {
        self.get(key).trim().to_string()
    }

    /// Blank input is `None`; anything unparsable is reported.
    fn number<T: FromStr>(&self, key: &'static str, message: &str, errors: &mut FieldErrors) -> Option<T> {
        let raw = self.get(key).trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                errors.insert(key, message);
                None
            }
        }
    }

    fn choice<T>(&self, key: &'static str, parse: fn(&str) -> Option<T>, errors: &mut FieldErrors) -> Option<T> {
        let parsed = parse(self.get(key));
        if parsed.is_none() {
            errors.insert(key, format!("Unknown value '{}'", self.get(key)));
        }
        parsed
    }

    fn date(&self, key: &'static str, errors: &mut FieldErrors) -> Option<chrono::NaiveDate> {
        let raw = self.get(key).trim();
        if raw.is_empty() {
            return None;
        }
        match parse_date(raw) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert(key, "Use the YYYY-MM-DD format");
                None
            }
        }
    }

    fn datetime(&self, key: &'static str, errors: &mut FieldErrors) -> Option<chrono::NaiveDateTime> {
        let raw = self.get(key).trim();
        if raw.is_empty() {
            errors.insert(key, "Date and time are required");
            return None;
        }
        match parse_datetime(raw) {
            Ok(dt) => Some(dt),
            Err(_) => {
                errors.insert(key, "Use the YYYY-MM-DD HH:MM format");
                None
            }
        }
    }

    fn list(&self, key: &str) -> Vec<String> {
        parse_attendees(self.get(key))
    }
}

/// A record kind that can be created and edited through a form.
pub trait FormRecord: Record {
    const FORM: &'static [FieldSpec];

    /// Initial values of the create form.
    fn draft_values() -> FormValues;

    /// Current values of a record, for the edit form.
    fn to_form(&self) -> FormValues;

    fn parse_draft(values: &FormValues) -> Result<Self::Draft, FieldErrors>;

    fn parse_patch(values: &FormValues) -> Result<Self::Patch, FieldErrors>;
}

fn finish<T>(value: T, errors: FieldErrors) -> Result<T, FieldErrors> {
    errors.into_result().map(|_| value)
}

impl FormRecord for User {
    const FORM: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Full name", FieldKind::Text).required("Full name is required"),
        FieldSpec::new("email", "Email", FieldKind::Text).required("Email address is required"),
        FieldSpec::new("role", "Role", FieldKind::Choice(UserRole::LABELS)),
        FieldSpec::new("status", "Status", FieldKind::Choice(UserStatus::LABELS)),
    ];

    fn draft_values() -> FormValues {
        let draft = UserDraft::default();
        FormValues::new()
            .with("role", draft.role.as_str())
            .with("status", draft.status.as_str())
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("name", self.name.clone())
            .with("email", self.email.clone())
            .with("role", self.role.as_str())
            .with("status", self.status.as_str())
    }

    fn parse_draft(values: &FormValues) -> Result<UserDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let defaults = UserDraft::default();
        let draft = UserDraft {
            name: values.text("name"),
            email: values.text("email"),
            role: values.choice("role", UserRole::parse, &mut errors).unwrap_or(defaults.role),
            status: values.choice("status", UserStatus::parse, &mut errors).unwrap_or(defaults.status),
        };
        finish(draft, errors)
    }

    fn parse_patch(values: &FormValues) -> Result<UserPatch, FieldErrors> {
        let mut errors = FieldErrors::new();
        let patch = UserPatch {
            name: Some(values.text("name")),
            email: Some(values.text("email")),
            role: values.choice("role", UserRole::parse, &mut errors),
            status: values.choice("status", UserStatus::parse, &mut errors),
        };
        finish(patch, errors)
    }
}

impl Order {
    fn parse_items(values: &FormValues, errors: &mut FieldErrors) -> Vec<OrderItem> {
        match OrderItem::parse_list(values.get("items")) {
            Ok(items) => items,
            Err(message) => {
                errors.insert("items", message);
                Vec::new()
            }
        }
    }
}

impl FormRecord for Order {
    const FORM: &'static [FieldSpec] = &[
        FieldSpec::new("customer", "Customer", FieldKind::Text).required("Customer name is required"),
        FieldSpec::new("customer_email", "Customer email", FieldKind::Text).required("Customer email is required"),
        FieldSpec::new("items", "Items (name*qty@price; ...)", FieldKind::Text)
            .required("At least one product must be selected"),
        FieldSpec::new("priority", "Priority", FieldKind::Choice(Priority::LABELS)),
        FieldSpec::new("status", "Status", FieldKind::Choice(OrderStatus::LABELS)).edit_only(),
    ];

    fn draft_values() -> FormValues {
        FormValues::new()
            .with("priority", OrderDraft::default().priority.as_str())
            .with("status", OrderStatus::Pending.as_str())
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("customer", self.customer.clone())
            .with("customer_email", self.customer_email.clone())
            .with("items", OrderItem::format_list(&self.items))
            .with("priority", self.priority.as_str())
            .with("status", self.status.as_str())
    }

    fn parse_draft(values: &FormValues) -> Result<OrderDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let draft = OrderDraft {
            customer: values.text("customer"),
            customer_email: values.text("customer_email"),
            items: Order::parse_items(values, &mut errors),
            priority: values.choice("priority", Priority::parse, &mut errors).unwrap_or(Priority::Medium),
        };
        finish(draft, errors)
    }

    fn parse_patch(values: &FormValues) -> Result<OrderPatch, FieldErrors> {
        let mut errors = FieldErrors::new();
        let patch = OrderPatch {
            customer: Some(values.text("customer")),
            customer_email: Some(values.text("customer_email")),
            items: Some(Order::parse_items(values, &mut errors)),
            status: values.choice("status", OrderStatus::parse, &mut errors),
            priority: values.choice("priority", Priority::parse, &mut errors),
        };
        finish(patch, errors)
    }
}

impl FormRecord for Product {
    const FORM: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Product name", FieldKind::Text).required("Product name is required"),
        FieldSpec::new("price", "Price", FieldKind::Number).required("Price is required"),
        FieldSpec::new("stock", "Stock", FieldKind::Number).required("Stock is required"),
        FieldSpec::new("category", "Category", FieldKind::Choice(ProductCategory::LABELS)),
        FieldSpec::new("rating", "Rating", FieldKind::Number).edit_only(),
    ];

    fn draft_values() -> FormValues {
        FormValues::new().with("category", ProductDraft::default().category.as_str())
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("name", self.name.clone())
            .with("price", format!("{:.2}", self.price))
            .with("stock", self.stock.to_string())
            .with("category", self.category.as_str())
            .with("rating", format!("{:.1}", self.rating))
    }

    fn parse_draft(values: &FormValues) -> Result<ProductDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let draft = ProductDraft {
            name: values.text("name"),
            price: values.number("price", "Price must be a number", &mut errors),
            stock: values.number("stock", "Stock must be a whole number", &mut errors),
            category: values
                .choice("category", ProductCategory::parse, &mut errors)
                .unwrap_or(ProductCategory::Electronics),
        };
        finish(draft, errors)
    }

    fn parse_patch(values: &FormValues) -> Result<ProductPatch, FieldErrors> {
        let mut errors = FieldErrors::new();
        let price = values.number("price", "Price must be a number", &mut errors);
        let stock = values.number("stock", "Stock must be a whole number", &mut errors);
        if price.is_none() {
            errors.insert("price", "Price is required");
        }
        if stock.is_none() {
            errors.insert("stock", "Stock is required");
        }
        let patch = ProductPatch {
            name: Some(values.text("name")),
            price,
            stock,
            category: values.choice("category", ProductCategory::parse, &mut errors),
            rating: values.number("rating", "Rating must be a number", &mut errors),
        };
        finish(patch, errors)
    }
}

const LINK_CHOICES: &[&str] = &["none", "orders", "users", "products", "charts"];

fn parse_link(value: &str) -> Option<Option<NotificationLink>> {
    if value.trim().eq_ignore_ascii_case("none") || value.trim().is_empty() {
        return Some(None);
    }
    NotificationLink::parse(value).map(Some)
}

impl FormRecord for Notification {
    const FORM: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required("Title is required"),
        FieldSpec::new("message", "Message", FieldKind::Text).required("Message is required"),
        FieldSpec::new("kind", "Type", FieldKind::Choice(NotificationKind::LABELS)),
        FieldSpec::new("link", "Opens", FieldKind::Choice(LINK_CHOICES)),
    ];

    fn draft_values() -> FormValues {
        FormValues::new()
            .with("kind", NotificationDraft::default().kind.as_str())
            .with("link", "none")
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("title", self.title.clone())
            .with("message", self.message.clone())
            .with("kind", self.kind.as_str())
            .with("link", self.link.map_or("none", |link| link.as_str()))
    }

    fn parse_draft(values: &FormValues) -> Result<NotificationDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let draft = NotificationDraft {
            title: values.text("title"),
            message: values.text("message"),
            kind: values
                .choice("kind", NotificationKind::parse, &mut errors)
                .unwrap_or(NotificationKind::Alert),
            link: values.choice("link", parse_link, &mut errors).flatten(),
        };
        finish(draft, errors)
    }

    fn parse_patch(values: &FormValues) -> Result<NotificationPatch, FieldErrors> {
        let mut errors = FieldErrors::new();
        let patch = NotificationPatch {
            title: Some(values.text("title")),
            message: Some(values.text("message")),
            kind: values.choice("kind", NotificationKind::parse, &mut errors),
            read: None,
            link: values.choice("link", parse_link, &mut errors),
        };
        finish(patch, errors)
    }
}

impl FormRecord for CalendarEvent {
    const FORM: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required("Event title is required"),
        FieldSpec::new("start", "Starts", FieldKind::DateTime).required("Date and time are required"),
        FieldSpec::new("end", "Ends", FieldKind::DateTime).required("Date and time are required"),
        FieldSpec::new("kind", "Type", FieldKind::Choice(EventKind::LABELS)),
        FieldSpec::new("location", "Location", FieldKind::Text),
        FieldSpec::new("description", "Description", FieldKind::Text),
        FieldSpec::new("attendees", "Attendees", FieldKind::List),
    ];

    fn draft_values() -> FormValues {
        let draft = CalendarEventDraft::default();
        FormValues::new()
            .with("start", format_datetime(draft.start))
            .with("end", format_datetime(draft.end))
            .with("kind", draft.kind.as_str())
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("title", self.title.clone())
            .with("start", format_datetime(self.start))
            .with("end", format_datetime(self.end))
            .with("kind", self.kind.as_str())
            .with("location", self.location.clone())
            .with("description", self.description.clone())
            .with("attendees", self.attendees.join(", "))
    }

    fn parse_draft(values: &FormValues) -> Result<CalendarEventDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let start = values.datetime("start", &mut errors);
        let end = values.datetime("end", &mut errors);
        let kind = values.choice("kind", EventKind::parse, &mut errors);
        match (start, end, kind) {
            (Some(start), Some(end), Some(kind)) if errors.is_empty() => Ok(CalendarEventDraft {
                title: values.text("title"),
                start,
                end,
                kind,
                description: values.text("description"),
                location: values.text("location"),
                attendees: values.list("attendees"),
            }),
            _ => Err(errors),
        }
    }

    fn parse_patch(values: &FormValues) -> Result<CalendarEventPatch, FieldErrors> {
        let mut errors = FieldErrors::new();
        let patch = CalendarEventPatch {
            title: Some(values.text("title")),
            start: values.datetime("start", &mut errors),
            end: values.datetime("end", &mut errors),
            kind: values.choice("kind", EventKind::parse, &mut errors),
            description: Some(values.text("description")),
            location: Some(values.text("location")),
            attendees: Some(values.list("attendees")),
        };
        finish(patch, errors)
    }
}

impl FormRecord for KanbanTask {
    const FORM: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required("Task title is required"),
        FieldSpec::new("description", "Description", FieldKind::Text),
        FieldSpec::new("priority", "Priority", FieldKind::Choice(Priority::LABELS)),
        FieldSpec::new("due_date", "Due date", FieldKind::Date),
        FieldSpec::new("assignees", "Assignees", FieldKind::List),
    ];

    fn draft_values() -> FormValues {
        FormValues::new().with("priority", Priority::Medium.as_str())
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("title", self.title.clone())
            .with("description", self.description.clone())
            .with("priority", self.priority.as_str())
            .with("due_date", self.due_date.map(format_ymd).unwrap_or_default())
            .with("assignees", self.assignees.join(", "))
    }

    /// The column is chosen by the board, not the form.
    fn parse_draft(values: &FormValues) -> Result<KanbanTaskDraft, FieldErrors> {
        let mut errors = FieldErrors::new();
        let draft = KanbanTaskDraft {
            title: values.text("title"),
            description: values.text("description"),
            status: String::new(),
            priority: values.choice("priority", Priority::parse, &mut errors).unwrap_or(Priority::Medium),
            due_date: values.date("due_date", &mut errors),
            assignees: values.list("assignees"),
        };
        finish(draft, errors)
    }

    fn parse_patch(values: &FormValues) -> Result<KanbanTaskPatch, FieldErrors> {
        let mut errors = FieldErrors::new();
        let patch = KanbanTaskPatch {
            title: Some(values.text("title")),
            description: Some(values.text("description")),
            status: None,
            priority: values.choice("priority", Priority::parse, &mut errors),
            due_date: Some(values.date("due_date", &mut errors)),
            assignees: Some(values.list("assignees")),
        };
        finish(patch, errors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Parsed form content, ready for the collection.
#[derive(Debug, Clone)]
pub enum Submission<R: Record> {
    Create(R::Draft),
    Update(RecordId, R::Patch),
}

/// An open create/edit dialog.
///
/// Holds the filter state of the page it was opened from; cancelling puts
/// that state back.
#[derive(Debug, Clone)]
pub struct FormSession<R: FormRecord> {
    mode: FormMode,
    values: FormValues,
    errors: FieldErrors,
    focus: usize,
    cursor: usize,
    saved_filter: FilterState<R::Class>,
    _kind: PhantomData<R>,
}

impl<R: FormRecord> FormSession<R> {
    pub fn new(mode: FormMode, values: FormValues, saved_filter: FilterState<R::Class>) -> Self {
        let mut session = Self {
            mode,
            values,
            errors: FieldErrors::new(),
            focus: 0,
            cursor: 0,
            saved_filter,
            _kind: PhantomData,
        };
        session.cursor = session.focused_value().chars().count();
        session
    }

    pub fn create(manager: &CollectionManager<R>) -> Self {
        Self::create_with(manager, R::draft_values())
    }

    pub fn create_with(manager: &CollectionManager<R>, values: FormValues) -> Self {
        Self::new(FormMode::Create, values, manager.filter_state().clone())
    }

    /// `None` when `id` is not in the collection.
    pub fn edit(manager: &CollectionManager<R>, id: &RecordId) -> Option<Self> {
        let record = manager.get(id)?;
        Some(Self::new(
            FormMode::Edit(id.clone()),
            record.to_form(),
            manager.filter_state().clone(),
        ))
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("New {}", R::KIND.name),
            FormMode::Edit(ref id) => format!("Edit {} {}", R::KIND.name, id),
        }
    }

    /// Fields visible in the current mode.
    pub fn fields(&self) -> Vec<&'static FieldSpec> {
        R::FORM.iter().filter(|f| !f.edit_only || self.is_edit()).collect()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Character offset of the cursor in the focused input.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focused_field(&self) -> Option<&'static FieldSpec> {
        self.fields().get(self.focus).copied()
    }

    fn focused_value(&self) -> &str {
        self.focused_field().map_or("", |field| self.values.get(field.key))
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.values.set(key, value);
        self.errors = FieldErrors::new();
        self.cursor = self.focused_value().chars().count();
    }

    /// Type a character at the cursor. Choice fields ignore typing.
    pub fn input(&mut self, ch: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if matches!(field.kind, FieldKind::Choice(_)) {
            return;
        }
        let cursor = self.cursor;
        let value = self.values.entry(field.key);
        let byte_index = value.char_indices().nth(cursor).map_or(value.len(), |(i, _)| i);
        value.insert(byte_index, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if matches!(field.kind, FieldKind::Choice(_)) || self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let value = self.values.entry(field.key);
        if let Some((byte_index, _)) = value.char_indices().nth(cursor - 1) {
            value.remove(byte_index);
            self.cursor -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.focused_value().chars().count());
    }

    /// Step a choice field to the next (or previous) label.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let FieldKind::Choice(options) = field.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = self.values.get(field.key);
        let index = options.iter().position(|o| o.eq_ignore_ascii_case(current));
        let next = match (index, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % options.len(),
            (Some(i), false) => (i + options.len() - 1) % options.len(),
        };
        self.values.set(field.key, options[next]);
    }

    pub fn focus_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
            self.cursor = self.focused_value().chars().count();
        }
    }

    pub fn focus_previous(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
            self.cursor = self.focused_value().chars().count();
        }
    }

    /// Parse the inputs. When any input is malformed, blank required inputs
    /// are reported alongside it.
    pub fn parse(&self) -> Result<Submission<R>, FieldErrors> {
        let parsed = match &self.mode {
            FormMode::Create => R::parse_draft(&self.values).map(Submission::Create),
            FormMode::Edit(id) => R::parse_patch(&self.values).map(|patch| Submission::Update(id.clone(), patch)),
        };
        parsed.map_err(|mut errors| {
            errors.merge(self.blank_required());
            errors
        })
    }

    /// Messages for visible required inputs left blank.
    fn blank_required(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in self.fields() {
            if let Some(message) = field.required {
                errors.require(field.key, self.values.get(field.key), message);
            }
        }
        errors
    }

    /// Parse and commit. On failure the messages are kept for display and
    /// the collection is unchanged.
    pub fn submit(&mut self, manager: &mut CollectionManager<R>) -> Result<R, CollectionError> {
        let submission = match self.parse() {
            Ok(submission) => submission,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(CollectionError::Validation(errors));
            }
        };
        let result = match submission {
            Submission::Create(draft) => manager.create(draft),
            Submission::Update(id, patch) => manager.update(&id, patch),
        };
        if let Err(err) = &result {
            self.record_errors(err);
        }
        result
    }

    /// Keep the messages of a failed commit for display.
    pub fn record_errors(&mut self, err: &CollectionError) {
        self.errors = match err {
            CollectionError::Validation(errors) => errors.clone(),
            CollectionError::Duplicate { field, .. } => {
                let mut errors = FieldErrors::new();
                errors.insert(*field, err.to_string());
                errors
            }
            CollectionError::NotFound { .. } => {
                let mut errors = FieldErrors::new();
                errors.insert("record", err.to_string());
                errors
            }
        };
    }

    /// The filter state captured when the dialog opened.
    pub fn saved_filter(&self) -> &FilterState<R::Class> {
        &self.saved_filter
    }

    /// Close without committing, restoring the page's filter state.
    pub fn cancel(self, manager: &mut CollectionManager<R>) {
        manager.restore_filter(self.saved_filter);
    }
}
