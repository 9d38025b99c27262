/// Number of whitespace-separated fields in a full expression: five
/// scheduling fields plus the command.
pub const FIELD_COUNT: usize = 6;

/// Position of the command string within a full expression.
pub const COMMAND_INDEX: usize = 5;

pub const COMMAND_LABEL: &str = "command";

/// Inclusive numeric bounds of a scheduling field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDomain {
    pub min: u32,
    pub max: u32,
}

impl FieldDomain {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of values a wildcard expands to.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }
}

/// One of the five scheduling fields, in expression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

/// Static properties of a field position.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    pub label: &'static str,
    pub domain: FieldDomain,
}

/// Field table indexed by position in the expression.
pub static FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        field: Field::Minute,
        label: "minute",
        domain: FieldDomain::new(0, 59),
    },
    FieldSpec {
        field: Field::Hour,
        label: "hour",
        domain: FieldDomain::new(0, 23),
    },
    FieldSpec {
        field: Field::DayOfMonth,
        label: "day of month",
        domain: FieldDomain::new(1, 31),
    },
    FieldSpec {
        field: Field::Month,
        label: "month",
        domain: FieldDomain::new(1, 12),
    },
    FieldSpec {
        field: Field::DayOfWeek,
        label: "day of week",
        domain: FieldDomain::new(0, 6),
    },
];

impl Field {
    /// All scheduling fields in the order they appear in an expression.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Position of this field within the expression.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self.index()]
    }

    pub fn domain(self) -> FieldDomain {
        self.spec().domain
    }

    /// Human-readable label used in table output and error messages.
    pub fn label(self) -> &'static str {
        self.spec().label
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified field token, ready to be expanded against a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldExpr {
    /// `*`: every value in the domain.
    Wildcard,

    /// `*/n`: every n-th value starting at the domain minimum.
    Step(u64),

    /// `a,b,c`: raw sub-tokens, parsed and bounds-checked on expansion.
    List(Vec<String>),

    /// `a-b`: every value from `start` to `end` inclusive.
    Range { start: u64, end: u64 },

    /// `a`: exactly one value.
    Single(u64),
}

impl FieldExpr {
    /// Short name of the expression kind, used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldExpr::Wildcard => "wildcard",
            FieldExpr::Step(_) => "step",
            FieldExpr::List(_) => "list",
            FieldExpr::Range { .. } => "range",
            FieldExpr::Single(_) => "single",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cronexp_core::config::DEFAULT_LABEL_WIDTH;

    #[test]
    fn table_positions_match_field_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(FIELDS[i].field, *field);
        }
    }

    #[test]
    fn domains() {
        assert_eq!(Field::Minute.domain(), FieldDomain::new(0, 59));
        assert_eq!(Field::Hour.domain(), FieldDomain::new(0, 23));
        assert_eq!(Field::DayOfMonth.domain(), FieldDomain::new(1, 31));
        assert_eq!(Field::Month.domain(), FieldDomain::new(1, 12));
        assert_eq!(Field::DayOfWeek.domain(), FieldDomain::new(0, 6));
    }

    #[test]
    fn labels_fit_default_width() {
        for spec in &FIELDS {
            assert!(spec.label.len() < DEFAULT_LABEL_WIDTH);
        }
        assert_eq!(Field::DayOfMonth.to_string(), "day of month");
    }

    #[test]
    fn domain_bounds_are_inclusive() {
        let d = Field::DayOfMonth.domain();
        assert!(!d.contains(0));
        assert!(d.contains(1));
        assert!(d.contains(31));
        assert!(!d.contains(32));
        assert_eq!(d.len(), 31);
    }
}
