use thiserror::Error;

use crate::types::Field;

/// Coarse classification shared by every parser error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The expression did not split into exactly six fields.
    InvalidFieldCount,
    /// A token segment is not a decimal integer.
    InvalidSyntax,
    /// A value or range endpoint falls outside the field's domain.
    OutOfRange,
    /// A step count is zero, negative, or not a number.
    InvalidStep,
}

impl ErrorKind {
    /// Short error code string, stable across releases.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidFieldCount => "INVALID_FIELD_COUNT",
            ErrorKind::InvalidSyntax => "INVALID_SYNTAX",
            ErrorKind::OutOfRange => "OUT_OF_RANGE",
            ErrorKind::InvalidStep => "INVALID_STEP",
        }
    }
}

/// Failure to classify or expand a single field token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("invalid number {token:?}")]
    InvalidSyntax { token: String },

    #[error("value {value} out of range [{min}, {max}]")]
    OutOfRange { value: u64, min: u32, max: u32 },

    #[error("range {start}-{end} out of range [{min}, {max}]")]
    RangeOutOfBounds {
        start: u64,
        end: u64,
        min: u32,
        max: u32,
    },

    #[error("invalid step {token:?}: expected a positive integer")]
    InvalidStep { token: String },
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::InvalidSyntax { .. } => ErrorKind::InvalidSyntax,
            TokenError::OutOfRange { .. } | TokenError::RangeOutOfBounds { .. } => {
                ErrorKind::OutOfRange
            }
            TokenError::InvalidStep { .. } => ErrorKind::InvalidStep,
        }
    }
}

/// Errors returned by expression validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    #[error("invalid cron expression format: expected {expected} fields, got {got}")]
    InvalidFieldCount { expected: usize, got: usize },

    /// A scheduling field failed to parse; wraps the token-level cause.
    #[error("error parsing {field} field: {source}")]
    Field {
        field: Field,
        #[source]
        source: TokenError,
    },
}

impl CronError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CronError::InvalidFieldCount { .. } => ErrorKind::InvalidFieldCount,
            CronError::Field { source, .. } => source.kind(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The scheduling field that failed, if the error is field-specific.
    pub fn field(&self) -> Option<Field> {
        match self {
            CronError::InvalidFieldCount { .. } => None,
            CronError::Field { field, .. } => Some(*field),
        }
    }
}

pub type Result<T> = std::result::Result<T, CronError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_message_names_the_field() {
        let err = CronError::Field {
            field: Field::DayOfWeek,
            source: TokenError::OutOfRange {
                value: 8,
                min: 0,
                max: 6,
            },
        };
        assert_eq!(
            err.to_string(),
            "error parsing day of week field: value 8 out of range [0, 6]"
        );
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.code(), "OUT_OF_RANGE");
        assert_eq!(err.field(), Some(Field::DayOfWeek));
    }

    #[test]
    fn field_count_error() {
        let err = CronError::InvalidFieldCount {
            expected: 6,
            got: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid cron expression format: expected 6 fields, got 7"
        );
        assert_eq!(err.code(), "INVALID_FIELD_COUNT");
        assert_eq!(err.field(), None);
    }

    #[test]
    fn range_bounds_map_to_out_of_range() {
        let err = TokenError::RangeOutOfBounds {
            start: 0,
            end: 7,
            min: 0,
            max: 6,
        };
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.to_string(), "range 0-7 out of range [0, 6]");
    }
}
