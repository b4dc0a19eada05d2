//! Error codes and the error type shared by the server and the import tool
//!
//! Codes are grouped by range (see [`ErrorCategory`]); every failed request
//! answers with an [`ErrorBody`] carrying the numeric code.
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::TableNumberInvalid).with_detail("field", "tableNumber");
//! let body = ErrorBody::from(&err);
//! assert_eq!(body.code, 7003);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody, ErrorDetails};
