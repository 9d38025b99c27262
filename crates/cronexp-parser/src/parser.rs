use std::num::{IntErrorKind, ParseIntError};

use tracing::trace;

use crate::{
    error::TokenError,
    types::{FieldDomain, FieldExpr},
};

pub const WILDCARD: &str = "*";
pub const STEP_SEPARATOR: char = '/';
pub const LIST_SEPARATOR: char = ',';
pub const RANGE_SEPARATOR: char = '-';

type TokenResult<T> = std::result::Result<T, TokenError>;

impl FieldExpr {
    /// Classify a raw field token.
    ///
    /// Rules are tried in a fixed order and the first match wins:
    /// wildcard, step (`/`), list (`,`), range (`-`), then single value.
    /// Numeric parts of step, range and single tokens are parsed here; list
    /// members are kept raw and parsed by [`FieldExpr::expand`].
    pub fn classify(token: &str) -> TokenResult<Self> {
        let expr = if token == WILDCARD {
            FieldExpr::Wildcard
        } else if let Some((_base, step)) = token.split_once(STEP_SEPARATOR) {
            // The base is not used: stepping always starts at the domain minimum.
            FieldExpr::Step(parse_step(step)?)
        } else if token.contains(LIST_SEPARATOR) {
            FieldExpr::List(token.split(LIST_SEPARATOR).map(str::to_owned).collect())
        } else if let Some((start, end)) = token.split_once(RANGE_SEPARATOR) {
            FieldExpr::Range {
                start: parse_value(start)?,
                end: parse_value(end)?,
            }
        } else {
            FieldExpr::Single(parse_value(token)?)
        };
        trace!(%token, kind = expr.kind_name(), "token classified");
        Ok(expr)
    }

    /// Expand into the concrete values this expression matches within `domain`.
    ///
    /// Wildcard, step and range output ascends; list output keeps the order
    /// the values were written in, duplicates included. A range whose start
    /// exceeds its end expands to nothing.
    pub fn expand(&self, domain: FieldDomain) -> TokenResult<Vec<u32>> {
        let FieldDomain { min, max } = domain;
        match self {
            FieldExpr::Wildcard => Ok((min..=max).collect()),

            FieldExpr::Step(step) => {
                if *step == 0 {
                    return Err(TokenError::InvalidStep {
                        token: step.to_string(),
                    });
                }
                // A step wider than the address space still yields the minimum.
                let step = usize::try_from(*step).unwrap_or(usize::MAX);
                Ok((min..=max).step_by(step).collect())
            }

            FieldExpr::List(tokens) => tokens
                .iter()
                .map(|token| check_bounds(parse_value(token)?, domain))
                .collect(),

            FieldExpr::Range { start, end } => {
                if *start < u64::from(min) || *end > u64::from(max) {
                    return Err(TokenError::RangeOutOfBounds {
                        start: *start,
                        end: *end,
                        min,
                        max,
                    });
                }
                // Every value is at most `end`, which fits the domain.
                Ok((*start..=*end)
                    .filter_map(|v| u32::try_from(v).ok())
                    .collect())
            }

            FieldExpr::Single(value) => Ok(vec![check_bounds(*value, domain)?]),
        }
    }
}

/// Classify `token` and expand it against `domain` in one step.
pub fn parse_field(token: &str, domain: FieldDomain) -> TokenResult<Vec<u32>> {
    FieldExpr::classify(token)?.expand(domain)
}

/// Parse a decimal integer. Values past `u64::MAX` saturate: they are still
/// integers, just larger than any domain.
fn parse_number(token: &str) -> Result<u64, ParseIntError> {
    match token.parse::<u64>() {
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        other => other,
    }
}

fn parse_value(token: &str) -> TokenResult<u64> {
    parse_number(token).map_err(|_| TokenError::InvalidSyntax {
        token: token.to_owned(),
    })
}

fn parse_step(token: &str) -> TokenResult<u64> {
    match parse_number(token) {
        Ok(step) if step > 0 => Ok(step),
        _ => Err(TokenError::InvalidStep {
            token: token.to_owned(),
        }),
    }
}

fn check_bounds(value: u64, domain: FieldDomain) -> TokenResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| domain.contains(*v))
        .ok_or(TokenError::OutOfRange {
            value,
            min: domain.min,
            max: domain.max,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
