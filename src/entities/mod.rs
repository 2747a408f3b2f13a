//! Record kinds managed by the dashboard.
//!
//! Each kind is a plain struct implementing [`Record`](crate::collection::Record)
//! with a draft type for creation and a patch type for partial updates.

use std::fmt;

/// Declares a closed set of labelled values (statuses, roles, categories).
///
/// Generates `ALL`, `LABELS`, `as_str`, `parse`, `Display` and serde
/// support using the label as the wire value.
macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Case-insensitive lookup by label.
            pub fn parse(value: &str) -> Option<Self> {
                let value = value.trim();
                Self::ALL.iter().copied().find(|v| v.as_str().eq_ignore_ascii_case(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod calendar_event;
pub mod kanban_task;
pub mod notification;
pub mod order;
pub mod product;
pub mod user;

pub use calendar_event::{CalendarEvent, CalendarEventDraft, CalendarEventPatch, EventKind};
pub use kanban_task::{KanbanTask, KanbanTaskDraft, KanbanTaskPatch};
pub use notification::{Notification, NotificationDraft, NotificationKind, NotificationLink, NotificationPatch};
pub use order::{Order, OrderDraft, OrderItem, OrderPatch, OrderStatus};
pub use product::{Product, ProductCategory, ProductDraft, ProductPatch, StockLevel};
pub use user::{User, UserDraft, UserPatch, UserRole, UserStatus};

labelled_enum! {
    /// Urgency shared by orders and kanban tasks.
    Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

/// Loose email check: `something@something.something` without whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => !local.is_empty() && !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Uppercased initials of the first two words of a name ("Jane Smith" -> "JS").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Format an amount of money with two decimals.
pub struct Money<'a>(pub f64, pub &'a str);

impl fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.1, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("  a.b@mail.example.org "));
        assert!(!is_valid_email("jane@x"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("jane x@x.com"));
        assert!(!is_valid_email("jane.x.com"));
    }

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("jane smith"), "JS");
        assert_eq!(initials("Mary Ann Lee"), "MA");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn priority_labels() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::LABELS, &["low", "medium", "high"]);
        assert_eq!(Priority::Medium.to_string(), "medium");
    }
}
