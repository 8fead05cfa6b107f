//! Unified error codes for the Provesi client
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Location errors (warehouses, shelves)
//! - 4xxx: Order errors
//! - 5xxx: Catalog errors (products)
//! - 6xxx: Audit errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 3xxx: Location ====================
    /// Warehouse not found
    WarehouseNotFound = 3001,
    /// Shelf does not belong to the selected warehouse
    ShelfNotInWarehouse = 3003,
    /// Shelf used capacity exceeds its total capacity
    ShelfOverCapacity = 3004,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Invoice data is required for the requested status
    InvoiceDataRequired = 4002,
    /// A field of the invoice data is empty
    InvoiceFieldMissing = 4003,
    /// The status transition is not allowed
    TransitionNotAllowed = 4004,
    /// Operator is required
    OperatorRequired = 4005,
    /// Requested product line is invalid
    RequestedProductInvalid = 4006,
    /// Order integrity verification failed
    IntegrityMismatch = 4007,

    // ==================== 5xxx: Catalog ====================
    /// Product has invalid price
    ProductInvalidPrice = 5002,
    /// Attribute key is empty
    AttributeKeyEmpty = 5003,
    /// Attribute key already present
    AttributeDuplicateKey = 5004,

    // ==================== 6xxx: Audit ====================
    /// Invalid pagination parameters
    InvalidPagination = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Request superseded by a newer one
    RequestSuperseded = 9006,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Location
            ErrorCode::WarehouseNotFound => "Warehouse not found",
            ErrorCode::ShelfNotInWarehouse => "Shelf does not belong to the selected warehouse",
            ErrorCode::ShelfOverCapacity => "Shelf used capacity exceeds total capacity",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvoiceDataRequired => "Invoice data is required for this status",
            ErrorCode::InvoiceFieldMissing => "Invoice data has empty fields",
            ErrorCode::TransitionNotAllowed => "Status transition is not allowed",
            ErrorCode::OperatorRequired => "Operator is required",
            ErrorCode::RequestedProductInvalid => "Requested product is invalid",
            ErrorCode::IntegrityMismatch => "Order integrity verification failed",

            // Catalog
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::AttributeKeyEmpty => "Attribute key must not be empty",
            ErrorCode::AttributeDuplicateKey => "Attribute key already exists",

            // Audit
            ErrorCode::InvalidPagination => "Invalid pagination parameters",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::RequestSuperseded => "Request superseded by a newer one",
        }
    }

    /// Map the string codes emitted by the order service (`codigo` field)
    pub fn from_service_code(code: &str) -> Option<Self> {
        match code {
            "SUCCESS" => Some(Self::Success),
            "MISSING_FIELDS" => Some(Self::RequiredField),
            "VALIDATION_ERROR" => Some(Self::ValidationFailed),
            "FACTURA_DATA_REQUIRED" => Some(Self::InvoiceDataRequired),
            "MISSING_FACTURA_FIELDS" => Some(Self::InvoiceFieldMissing),
            "INSUFFICIENT_PERMISSIONS" | "PERMISOS_VULNERADOS" => Some(Self::PermissionDenied),
            "UPDATE_ERROR" => Some(Self::InvalidRequest),
            "FACTURA_CREATION_ERROR" | "INTERNAL_ERROR" => Some(Self::InternalError),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Location
            3001 => Ok(ErrorCode::WarehouseNotFound),
            3003 => Ok(ErrorCode::ShelfNotInWarehouse),
            3004 => Ok(ErrorCode::ShelfOverCapacity),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvoiceDataRequired),
            4003 => Ok(ErrorCode::InvoiceFieldMissing),
            4004 => Ok(ErrorCode::TransitionNotAllowed),
            4005 => Ok(ErrorCode::OperatorRequired),
            4006 => Ok(ErrorCode::RequestedProductInvalid),
            4007 => Ok(ErrorCode::IntegrityMismatch),

            // Catalog
            5002 => Ok(ErrorCode::ProductInvalidPrice),
            5003 => Ok(ErrorCode::AttributeKeyEmpty),
            5004 => Ok(ErrorCode::AttributeDuplicateKey),

            // Audit
            6002 => Ok(ErrorCode::InvalidPagination),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::RequestSuperseded),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
