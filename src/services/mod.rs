//! Backend access and session plumbing used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the backend protocol and cookie semantics so route
//! handlers can stay focused on request translation and rendering.

pub mod api;
pub mod remote;
pub mod session;
