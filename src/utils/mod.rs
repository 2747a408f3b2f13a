//! Utility modules for the admin dashboard.
//!
//! This module contains common helpers that are used throughout the
//! application.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date and time formatting and parsing for forms and tables

pub mod datetime;
