//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Location errors
//! - 4xxx: Order errors
//! - 5xxx: Catalog errors
//! - 6xxx: Audit errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::InvoiceDataRequired);
//! assert_eq!(err.code.code(), 4002);
//!
//! let err = AppError::validation("Missing required field")
//!     .with_detail("field", "metodo_pago");
//! assert!(err.details.is_some());
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
