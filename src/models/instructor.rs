//! Instructor model.
//!
//! Instructors are the people who fill hour slots. The studio roster is
//! a small fixed set; `Custom` keeps the set open for guest teachers
//! without touching the enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An instructor who can be assigned to an hour slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Instructor {
    /// Evening lead; also covers full days on request.
    Gota,
    /// Default daytime instructor.
    Kayo,
    /// Midday sessions on selected days.
    Emi,
    /// Early morning sessions on selected days.
    Sosa,
    /// Any instructor outside the regular roster.
    Custom(String),
}

impl Instructor {
    /// The regular roster, in display order.
    pub const ROSTER: [Instructor; 4] = [
        Instructor::Gota,
        Instructor::Kayo,
        Instructor::Emi,
        Instructor::Sosa,
    ];

    /// Creates a custom instructor.
    pub fn custom(name: impl Into<String>) -> Self {
        Instructor::Custom(name.into())
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Instructor::Gota => "Gota",
            Instructor::Kayo => "Kayo",
            Instructor::Emi => "Emi",
            Instructor::Sosa => "Sosa",
            Instructor::Custom(name) => name,
        }
    }

    /// Whether this instructor is part of the regular roster.
    pub fn is_regular(&self) -> bool {
        !matches!(self, Instructor::Custom(_))
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
