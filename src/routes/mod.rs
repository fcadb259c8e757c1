//! HTTP route configuration

/// Top-level router assembly
pub mod router;

/// API route table
pub mod api_routes;

pub use router::create_router;
