//! Reusable UI components

// Component architecture
pub mod collection_page;
pub mod dashboard_component;
pub mod dialog_component;
pub mod dialogs;
pub mod kanban_component;
pub mod sidebar_component;
pub mod status_bar;
pub mod table_rows;

// Component exports
pub use collection_page::CollectionPage;
pub use dashboard_component::DashboardComponent;
pub use dialog_component::DialogComponent;
pub use kanban_component::KanbanComponent;
pub use sidebar_component::SidebarComponent;
pub use status_bar::{StatusBar, Toast, ToastLevel};
pub use table_rows::{RowContext, TableRecord};
