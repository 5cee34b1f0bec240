// web_app/api/mod.rs - Server-side state for server functions
//
// Holds the process-wide catalog loader that `load_catalog` runs.

pub mod catalog;
