//! HTTP request handlers.
//!
//! Handlers are thin: they extract the request, call `PlantService` and
//! map the result. No catalog rules live here.

pub mod plants;
