use std::fmt;

use cronexp_core::config::DEFAULT_LABEL_WIDTH;
use serde::{Serialize, Serializer};

use crate::types::{Field, COMMAND_LABEL};

/// Fully expanded schedule.
///
/// Only produced by a successful [`crate::validate`]; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecord {
    values: [Vec<u32>; 5],
    command: String,
}

impl ScheduleRecord {
    pub(crate) fn new(values: [Vec<u32>; 5], command: String) -> Self {
        Self { values, command }
    }

    pub fn values(&self, field: Field) -> &[u32] {
        &self.values[field.index()]
    }

    pub fn minute(&self) -> &[u32] {
        self.values(Field::Minute)
    }

    pub fn hour(&self) -> &[u32] {
        self.values(Field::Hour)
    }

    pub fn day_of_month(&self) -> &[u32] {
        self.values(Field::DayOfMonth)
    }

    pub fn month(&self) -> &[u32] {
        self.values(Field::Month)
    }

    pub fn day_of_week(&self) -> &[u32] {
        self.values(Field::DayOfWeek)
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Values of `field` as decimal strings.
    pub fn rendered(&self, field: Field) -> Vec<String> {
        self.values(field).iter().map(u32::to_string).collect()
    }

    /// Table view with labels left-justified to `label_width` columns.
    pub fn table(&self, label_width: usize) -> Table<'_> {
        Table {
            record: self,
            label_width,
        }
    }

    /// Render six `<label><values>` lines, each label left-justified to
    /// `label_width` columns. Labels wider than that are written in full.
    pub fn render_table(&self, label_width: usize) -> String {
        self.table(label_width).to_string()
    }
}

impl fmt::Display for ScheduleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table(DEFAULT_LABEL_WIDTH), f)
    }
}

/// Borrowed table rendering of a [`ScheduleRecord`].
pub struct Table<'a> {
    record: &'a ScheduleRecord,
    label_width: usize,
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.label_width;
        for field in Field::ALL {
            write!(f, "{:<width$}", field.label())?;
            let mut values = self.record.values(field).iter();
            if let Some(first) = values.next() {
                write!(f, "{first}")?;
                for value in values {
                    write!(f, " {value}")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{:<width$}{}", COMMAND_LABEL, self.record.command)
    }
}

/// JSON shape of a record: values as decimal strings, keyed by field.
#[derive(Serialize)]
struct RenderedRecord<'a> {
    minute: Vec<String>,
    hour: Vec<String>,
    day_of_month: Vec<String>,
    month: Vec<String>,
    day_of_week: Vec<String>,
    command: &'a str,
}

impl Serialize for ScheduleRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RenderedRecord {
            minute: self.rendered(Field::Minute),
            hour: self.rendered(Field::Hour),
            day_of_month: self.rendered(Field::DayOfMonth),
            month: self.rendered(Field::Month),
            day_of_week: self.rendered(Field::DayOfWeek),
            command: &self.command,
        }
        .serialize(serializer)
    }
}
