use serde::Serialize;

/// The four punch kinds a workday is made of.
/// The order of a day's punches must follow [`EntryType::allowed_next`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    In,
    LunchOut,
    LunchIn,
    Out,
}

impl EntryType {
    /// Convert a CLI code → enum ("in", "lunch-out", "lunch-in", "out").
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "lunch-out" | "lunch_out" => Some(Self::LunchOut),
            "lunch-in" | "lunch_in" => Some(Self::LunchIn),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryType::In => "in",
            EntryType::LunchOut => "lunch_out",
            EntryType::LunchIn => "lunch_in",
            EntryType::Out => "out",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "in" => Some(EntryType::In),
            "lunch_out" => Some(EntryType::LunchOut),
            "lunch_in" => Some(EntryType::LunchIn),
            "out" => Some(EntryType::Out),
            _ => None,
        }
    }

    /// Punch kinds that may legally follow this one on the same day.
    /// OUT is terminal: a new IN is only possible after the day boundary.
    pub fn allowed_next(&self) -> &'static [EntryType] {
        match self {
            EntryType::In => &[EntryType::LunchOut, EntryType::Out],
            EntryType::LunchOut => &[EntryType::LunchIn],
            EntryType::LunchIn => &[EntryType::LunchOut, EntryType::Out],
            EntryType::Out => &[],
        }
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EntryType::Out)
    }

    /// Human-readable label for messages and listings.
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::In => "IN",
            EntryType::LunchOut => "LUNCH_OUT",
            EntryType::LunchIn => "LUNCH_IN",
            EntryType::Out => "OUT",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
