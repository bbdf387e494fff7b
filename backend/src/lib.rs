//! Employee status service library.
//!
//! Resolves a national number to an employee salary status through a
//! cache-aside pipeline. [`domain`] holds the pipeline and its ports,
//! [`outbound`] the PostgreSQL and cache adapters, and [`inbound`] the HTTP
//! surface.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
