//! Observability module - request IDs for log correlation.

mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware};
