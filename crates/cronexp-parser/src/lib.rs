//! `cronexp-parser` expands five-field cron expressions into the concrete
//! values each field matches.
//!
//! # Overview
//!
//! A raw token is first classified into a [`types::FieldExpr`] and then
//! expanded against the [`types::FieldDomain`] of its field position.
//! [`validate::validate`] runs that pipeline for the five scheduling fields in
//! order and assembles an immutable [`record::ScheduleRecord`].
//!
//! # Token grammar
//!
//! | Token     | Kind       | Expands to                                  |
//! |-----------|------------|---------------------------------------------|
//! | `*`       | `Wildcard` | every value in the domain                   |
//! | `*/15`    | `Step`     | domain min, min+15, … up to the domain max  |
//! | `1,15`    | `List`     | the listed values, in the order given       |
//! | `1-5`     | `Range`    | every value from start to end               |
//! | `7`       | `Single`   | exactly that value                          |
//!
//! The base of a step token is ignored: `5/15` expands like `*/15`.

pub mod error;
pub mod parser;
pub mod record;
pub mod types;
pub mod validate;

pub use error::{CronError, ErrorKind, Result, TokenError};
pub use record::{ScheduleRecord, Table};
pub use types::{Field, FieldDomain, FieldExpr};
pub use validate::{parse_expression, split_fields, validate};
