use crate::entities::NotificationLink;
use crate::signals::AddTarget;

/// Pages reachable from the sidebar, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Users,
    Orders,
    Products,
    Notifications,
    Calendar,
    Kanban,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Dashboard,
        Page::Users,
        Page::Orders,
        Page::Products,
        Page::Notifications,
        Page::Calendar,
        Page::Kanban,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Users => "Users",
            Page::Orders => "Orders",
            Page::Products => "Products",
            Page::Notifications => "Notifications",
            Page::Calendar => "Calendar",
            Page::Kanban => "Kanban",
        }
    }

    /// Config name, as accepted by `ui.default_page`
    pub fn name(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Users => "users",
            Page::Orders => "orders",
            Page::Products => "products",
            Page::Notifications => "notifications",
            Page::Calendar => "calendar",
            Page::Kanban => "kanban",
        }
    }

    pub fn from_name(name: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    /// 0-based sidebar position
    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// `1`..`7` in the sidebar
    pub fn from_digit(digit: char) -> Option<Page> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Page::ALL.get(index as usize).copied()
    }

    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn previous(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    /// Page that hosts the create dialog for a quick-add target
    pub fn for_add_target(target: AddTarget) -> Page {
        match target {
            AddTarget::User => Page::Users,
            AddTarget::Order => Page::Orders,
            AddTarget::Product => Page::Products,
        }
    }

    /// Page a notification points at. Charts have no page of their own.
    pub fn for_link(link: NotificationLink) -> Page {
        match link {
            NotificationLink::Orders => Page::Orders,
            NotificationLink::Users => Page::Users,
            NotificationLink::Products => Page::Products,
            NotificationLink::Charts => Page::Dashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(Page),

    /// Navigate to the owning page and open its create dialog once
    QuickAdd(AddTarget),

    // Feedback
    Info(String),
    Error(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    DialogScrollUp,
    DialogScrollDown,
    DialogScrollToTop,
    DialogScrollToBottom,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}

/// Application-wide modal dialogs. Page-specific dialogs (forms, delete
/// confirmations) belong to the page that opened them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}
