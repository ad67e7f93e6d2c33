//! Main window session
//!
//! This module contains:
//! - Message types for widget interactions
//! - The application context shared by handlers
//! - The handler registry and the handlers themselves

pub mod dispatch;
pub mod handlers;
pub mod messages;
pub mod state;
