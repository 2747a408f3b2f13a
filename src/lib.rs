//! Admindash - a terminal admin dashboard
//!
//! This library provides in-memory management of users, orders, products,
//! notifications, calendar events and a kanban board, together with a rich
//! interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`collection`] - Generic collection manager: CRUD, search, filter, pagination
//! * [`entities`] - Record kinds and their validation rules
//! * [`kanban`] - Kanban board and the drag-and-drop protocol
//! * [`forms`] - Create/edit dialog state and parsing
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Generic in-memory collection manager
pub mod collection;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Headline figures for the dashboard page
pub mod dashboard;

/// Record kinds managed by the dashboard
pub mod entities;

/// Create/edit forms on top of the collections
pub mod forms;

/// Kanban board with drag-and-drop moves
pub mod kanban;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Demo data loaded at startup
pub mod seed;

/// One-shot signals shared between pages
pub mod signals;

/// Owner of every collection
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use collection::{CollectionError, CollectionManager, RecordId};
pub use store::Store;
