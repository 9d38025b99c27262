use tracing::debug;

use crate::{
    error::{CronError, Result},
    parser::parse_field,
    record::ScheduleRecord,
    types::{Field, COMMAND_INDEX, FIELD_COUNT},
};

/// Split a full expression on runs of whitespace.
pub fn split_fields(expression: &str) -> Vec<&str> {
    expression.split_whitespace().collect()
}

/// Split `expression` into fields and [`validate`] them.
pub fn parse_expression(expression: &str) -> Result<ScheduleRecord> {
    validate(&split_fields(expression))
}

/// Expand five scheduling fields and take the sixth verbatim as the command.
///
/// Fields are processed in expression order and the first failure is
/// returned; later fields are not looked at.
pub fn validate<S: AsRef<str>>(fields: &[S]) -> Result<ScheduleRecord> {
    if fields.len() != FIELD_COUNT {
        return Err(CronError::InvalidFieldCount {
            expected: FIELD_COUNT,
            got: fields.len(),
        });
    }

    let mut values: [Vec<u32>; 5] = Default::default();
    for field in Field::ALL {
        values[field.index()] = expand_field(field, fields[field.index()].as_ref())?;
    }

    let command = fields[COMMAND_INDEX].as_ref().to_owned();
    Ok(ScheduleRecord::new(values, command))
}

fn expand_field(field: Field, token: &str) -> Result<Vec<u32>> {
    let values = parse_field(token, field.domain())
        .map_err(|source| CronError::Field { field, source })?;
    debug!(%field, %token, count = values.len(), "field expanded");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, TokenError};
    use pretty_assertions::assert_eq;

    #[test]
    fn command_is_taken_verbatim() {
        let record = validate(&["*", "*", "*", "*", "*", "/usr/bin/find"]).unwrap();
        assert_eq!(record.command(), "/usr/bin/find");

        let record = validate(&["*", "*", "*", "*", "*", ""]).unwrap();
        assert_eq!(record.command(), "");
    }

    #[test]
    fn accepts_owned_strings() {
        let fields: Vec<String> = ["0", "0", "1", "1", "0", "/cmd"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let record = validate(&fields).unwrap();
        assert_eq!(record.minute(), &[0]);
        assert_eq!(record.day_of_month(), &[1]);
    }

    #[test]
    fn wrong_field_counts() {
        let five = validate(&["*", "*", "*", "*", "*"]).unwrap_err();
        assert_eq!(
            five,
            CronError::InvalidFieldCount {
                expected: 6,
                got: 5
            }
        );
        let none = validate::<&str>(&[]).unwrap_err();
        assert_eq!(none.kind(), ErrorKind::InvalidFieldCount);
    }

    #[test]
    fn first_failing_field_wins() {
        // minute and day of week are both bad; only minute is reported.
        let err = validate(&["60", "*", "*", "*", "8", "/cmd"]).unwrap_err();
        assert_eq!(err.field(), Some(Field::Minute));

        let err = validate(&["*", "24", "x", "*", "*", "/cmd"]).unwrap_err();
        assert_eq!(
            err,
            CronError::Field {
                field: Field::Hour,
                source: TokenError::OutOfRange {
                    value: 24,
                    min: 0,
                    max: 23
                }
            }
        );
    }

    #[test]
    fn day_of_month_zero_is_rejected() {
        let err = validate(&["*", "*", "0", "*", "*", "/cmd"]).unwrap_err();
        assert_eq!(err.field(), Some(Field::DayOfMonth));
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn parse_expression_splits_on_whitespace_runs() {
        let record = parse_expression("  */15\t0  1,15 *   1-5 /usr/bin/find ").unwrap();
        assert_eq!(record.minute(), &[0, 15, 30, 45]);
        assert_eq!(record.day_of_week(), &[1, 2, 3, 4, 5]);
        assert_eq!(record.command(), "/usr/bin/find");
    }

    #[test]
    fn parse_expression_rejects_commands_with_arguments() {
        let err = parse_expression("* * * * * /usr/bin/find -name foo").unwrap_err();
        assert_eq!(
            err,
            CronError::InvalidFieldCount {
                expected: 6,
                got: 8
            }
        );
    }

    #[test]
    fn split_fields_drops_empty_segments() {
        assert_eq!(split_fields(" a  b\n c "), vec!["a", "b", "c"]);
        assert!(split_fields("   ").is_empty());
    }
}
