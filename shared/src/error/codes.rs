//! Unified error codes for the banquet planner
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Task errors
//! - 5xxx: Schedule errors (program, rundown, committee)
//! - 7xxx: Seating errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 on the wire so the UI can switch on plain numbers.
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

    // ==================== 4xxx: Task ====================
    /// Task not found
    TaskNotFound = 4001,
    /// Comment text is empty
    CommentEmpty = 4002,
    /// Dinner date for task generation could not be parsed
    InvalidDinnerDate = 4003,

    // ==================== 5xxx: Schedule ====================
    /// Program day has an invalid date or event time
    ProgramInvalid = 5001,
    /// Rundown day is malformed
    RundownInvalid = 5002,
    /// Committee group is malformed
    CommitteeInvalid = 5003,

    // ==================== 7xxx: Seating ====================
    /// Seating table not found
    TableNotFound = 7001,
    /// Table number already used in the plan
    TableNumberTaken = 7002,
    /// Table number is not a positive integer
    TableNumberInvalid = 7003,
    /// Import text contained no usable rows
    ImportEmpty = 7101,
    /// Curated category lists are malformed
    CategoryListInvalid = 7201,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    /// Reading or writing a data file failed
    StorageError = 9002,
    ConfigError = 9005,
    /// A data file exists but does not hold valid JSON
    StorageCorrupted = 9403,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default human-readable message
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

            // Task
            ErrorCode::TaskNotFound => "Task not found",
            ErrorCode::CommentEmpty => "Comment must not be empty",
            ErrorCode::InvalidDinnerDate => "Invalid dinner date",

            // Schedule
            ErrorCode::ProgramInvalid => "Program contains an invalid day or event",
            ErrorCode::RundownInvalid => "Rundown contains an invalid day or slot",
            ErrorCode::CommitteeInvalid => "Committee contains an invalid group",

            // Seating
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableNumberTaken => "Table number is already in use",
            ErrorCode::TableNumberInvalid => "Table number must be a positive integer",
            ErrorCode::ImportEmpty => "Import text contains no usable rows",
            ErrorCode::CategoryListInvalid => "Category lists are invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StorageCorrupted => "Storage corrupted (data file damaged)",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
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

            // Task
            4001 => Ok(ErrorCode::TaskNotFound),
            4002 => Ok(ErrorCode::CommentEmpty),
            4003 => Ok(ErrorCode::InvalidDinnerDate),

            // Schedule
            5001 => Ok(ErrorCode::ProgramInvalid),
            5002 => Ok(ErrorCode::RundownInvalid),
            5003 => Ok(ErrorCode::CommitteeInvalid),

            // Seating
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableNumberTaken),
            7003 => Ok(ErrorCode::TableNumberInvalid),
            7101 => Ok(ErrorCode::ImportEmpty),
            7201 => Ok(ErrorCode::CategoryListInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9005 => Ok(ErrorCode::ConfigError),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
