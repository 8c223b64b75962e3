//! HTTP handlers for the users resource.

pub mod users;
