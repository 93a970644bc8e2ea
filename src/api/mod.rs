//! API surface
//!
//! The method catalog, request construction and the API error type.
//! Validation of responses lives in [`crate::validation`]; template
//! persistence in [`crate::template`].

pub mod errors;
pub mod methods;
pub mod request;

pub use errors::{ApiError, ApiErrorCode, ApiResult};
pub use methods::Method;
pub use request::{Params, RequestBuilder, API_VERSION, BASE_URL};
