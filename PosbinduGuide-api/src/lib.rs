// PosbinduGuide-api lib.rs
//
// This is the main library file for the PosbinduGuide API.
// It exposes the router, public entities and configuration.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
