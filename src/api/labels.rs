// SPDX-License-Identifier: MPL-2.0
//! Closed label vocabularies enforced on corrected-field selection.
//!
//! The server is free to return arbitrary label strings; these enums only
//! constrain what a human reviewer may pick when filing a correction, so an
//! invalid corrected value is unrepresentable.

use std::fmt;

/// Priority labels a corrected service request may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    UrgentTechnical,
    LongTermTechnical,
    LowTechnical,
    Awareness,
}

impl Priority {
    /// All selectable priorities, in display order.
    pub const ALL: [Priority; 4] = [
        Priority::UrgentTechnical,
        Priority::LongTermTechnical,
        Priority::LowTechnical,
        Priority::Awareness,
    ];

    /// The exact wire string for this label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::UrgentTechnical => "HIGH PRIORITY URGENT TECHNICAL",
            Priority::LongTermTechnical => "HIGH PRIORITY LONG TERM TECHNICAL",
            Priority::LowTechnical => "LOW PRIORITY TECHNICAL",
            Priority::Awareness => "AWARENESS",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Team labels a corrected service request may be routed to.
///
/// `Unassigned` is the explicit "no team" choice; its wire form is the empty
/// string, matching what the server stores for awareness-only requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Tech,
    Product,
    Policy,
    Unassigned,
}

impl Team {
    /// All selectable teams, in display order.
    pub const ALL: [Team; 4] = [Team::Tech, Team::Product, Team::Policy, Team::Unassigned];

    /// The exact wire string for this label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Team::Tech => "TECH",
            Team::Product => "PRODUCT",
            // The backend vocabulary really is lowercase for this one.
            Team::Policy => "policy",
            Team::Unassigned => "",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Unassigned => f.write_str("None"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Whether a server-reported priority denotes the awareness category.
///
/// Awareness requests carry no team assignment; the match is
/// case-insensitive because the server's casing is not guaranteed.
#[must_use]
pub fn is_awareness_label(label: &str) -> bool {
    label.eq_ignore_ascii_case(Priority::Awareness.as_str())
}
