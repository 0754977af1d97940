//! Knowledge group backend library.
//!
//! Layout follows ports and adapters: [`domain`] holds the model and ports,
//! [`inbound`] the HTTP adapter, [`outbound`] the MongoDB adapter, and
//! [`server`] wires them into an Actix application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
