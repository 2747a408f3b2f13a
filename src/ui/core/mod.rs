//! Core UI functionality for the admin dashboard.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event handling, actions, component abstractions and the shared context. It
//! provides the foundation that all UI components build upon.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions, pages and UI state transitions
//! - [`component`] - Base component traits and rendering abstractions
//! - [`context`] - Settings and services shared by every component
//! - [`event_handler`] - Terminal event polling
//!
//! # Architecture
//!
//! The core UI follows a component-based architecture where:
//!
//! 1. **Components** implement [`Component`] (chrome: sidebar, status bar,
//!    dialogs) or [`PageComponent`] (pages, which borrow their data per call)
//! 2. **Actions** are returned by components and applied by the app component
//! 3. **Context** carries display settings and the logger
//! 4. **Events** are produced by the [`EventHandler`]

// Core UI modules
pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Page};
pub use component::{Component, PageComponent};
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
