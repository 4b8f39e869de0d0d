//! Core business logic - framework-agnostic data access and portal rules.
//!
//! Every function takes a SeaORM connection and issues fresh queries; nothing
//! here keeps a copy of remote data between calls.

/// Login decision and member registration
pub mod auth;
/// Fund rows: listing, partial updates, seeding
pub mod finance;
/// Gallery listing and uploads
pub mod media;
/// Member statistics for the admin view
pub mod members;
/// Fund overview cards and display formatting
pub mod report;
/// User rows: listing, lookup, creation, removal
pub mod users;
