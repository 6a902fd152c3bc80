//! HTTP surface: a stateless axum app with permissive CORS.
//!
//! Three routes: `GET /health`, `GET /scenario/:module` (optional
//! `opener`/`defender` query parameters), and `POST /feedback`.

pub mod handler;
pub mod routes;

pub use routes::router;
