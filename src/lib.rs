//! Core of a day-planner front-end: the time-slot layout engine that turns
//! schedule intervals into day-grid geometry, plus the application plumbing
//! around it - task API client, persisted config, session state, signup
//! validation, emoji picker data and overlay dismissal. Rendering is left
//! to the consumer; this crate hands it placed items and axis labels.

pub mod api;
pub mod config;
pub mod emoji;
pub mod overlay;
pub mod schedule;
pub mod session;
pub mod signup;
