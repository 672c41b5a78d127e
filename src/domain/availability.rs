//! Availability engine for menu items.
//!
//! Decides whether an item should be shown as purchasable by combining the
//! item's explicit stock flag with its category's daily service window. The
//! current time is always an explicit parameter so that callers own the clock
//! and every evaluation stays referentially transparent.
//!
//! Missing or malformed time configuration never hides an item: an absent or
//! unparsable window bound makes the window always open. Selling wins over
//! strictness of display.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::category::Category;
use crate::domain::item::Item;

/// A wall-clock time of day.
///
/// No range validation is applied to the fields; values parsed out of
/// collaborator-supplied strings are used as-is in minute arithmetic.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Parse an `H:MM`, `HH:MM` or `HH:MM:SS` token (seconds ignored).
    ///
    /// Any shortfall — absent input, fewer than two colon-separated parts,
    /// non-numeric hour or minute — yields `None`. Absence is the documented
    /// "unknown time" state, not an error.
    pub fn parse(token: Option<&str>) -> Option<Self> {
        let token = token?;
        let mut parts = token.split(':').map(str::trim);
        let hour = parts.next()?.parse::<u32>().ok()?;
        let minute = parts.next()?.parse::<u32>().ok()?;
        Some(Self { hour, minute })
    }

    /// Derive a [`TimeOfDay`] from a caller-held clock reading.
    pub fn from_wall_clock(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    /// Minutes elapsed since midnight, the common unit for window checks.
    pub const fn minutes_from_midnight(self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Daily time range during which a category serves.
///
/// Either bound may be absent; an incomplete window covers all time.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceWindow {
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
}

impl ServiceWindow {
    pub const fn new(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> Self {
        Self { start, end }
    }

    /// A window with no bounds, open at every time of day.
    pub const fn always_open() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Build a window from collaborator-normalized `HH:MM` strings.
    /// Unparsable bounds become absent bounds.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: TimeOfDay::parse(start),
            end: TimeOfDay::parse(end),
        }
    }

    /// Whether `now` falls inside the window, bounds inclusive.
    ///
    /// A window whose end precedes its start wraps past midnight
    /// (e.g. 22:00-02:00 covers 23:30 and 01:30 but not 12:00).
    pub fn contains(&self, now: TimeOfDay) -> bool {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return true;
        };

        let now = now.minutes_from_midnight();
        let start = start.minutes_from_midnight();
        let end = end.minutes_from_midnight();

        if start <= end {
            start <= now && now <= end
        } else {
            now >= start || now <= end
        }
    }
}

/// Why an item is not currently purchasable.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The item reference itself is missing.
    NoItem,
    /// The item is explicitly flagged as out of stock.
    OutOfStock,
    /// The current time is outside the category's service window.
    OutOfHours,
}

impl UnavailableReason {
    /// Stable code surfaced to the UI layer.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoItem => "no_item",
            Self::OutOfStock => "out_of_stock",
            Self::OutOfHours => "out_of_hours",
        }
    }
}

impl Display for UnavailableReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict of an availability evaluation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "state", content = "reason")]
pub enum Availability {
    Available,
    Unavailable(UnavailableReason),
}

impl Availability {
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    pub const fn reason(self) -> Option<UnavailableReason> {
        match self {
            Self::Available => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }
}

/// Decide whether `item` is purchasable at `now`.
///
/// Checks apply in fixed precedence, first match wins:
/// 1. missing item reference;
/// 2. item explicitly flagged unavailable (an absent flag counts as in
///    stock);
/// 3. `now` outside the category's service window (a missing category means
///    no window to miss).
///
/// Every input combination produces a verdict; nothing here can fail.
pub fn evaluate(item: Option<&Item>, category: Option<&Category>, now: TimeOfDay) -> Availability {
    let Some(item) = item else {
        return Availability::Unavailable(UnavailableReason::NoItem);
    };

    if item.is_out_of_stock() {
        return Availability::Unavailable(UnavailableReason::OutOfStock);
    }

    let within = category.is_none_or(|category| category.window.contains(now));
    if !within {
        return Availability::Unavailable(UnavailableReason::OutOfHours);
    }

    Availability::Available
}
