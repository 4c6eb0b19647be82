// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup wiring
// - infrastructure: Postgres adapters and migrations
// - presentation: HTTP handlers and routing
// - application: repository ports and use cases
// - domain: core models and chain value types

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
