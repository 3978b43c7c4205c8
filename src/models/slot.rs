//! Slot grid model.
//!
//! The weekly grid is fixed: five weekdays by ten teaching hours (8..=17).
//! A [`SlotKey`] names one cell of that grid and can only be constructed
//! for an in-range (day, hour) pair, so two equal keys always denote the
//! same cell. Occupancy lives on the [`Slot`] owned by the [`SlotGrid`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::CourseIdx;

/// First teaching hour of the day.
pub const FIRST_HOUR: u8 = 8;
/// Last teaching hour of the day (inclusive).
pub const LAST_HOUR: u8 = 17;
/// Number of teaching hours per day.
pub const HOURS_PER_DAY: usize = (LAST_HOUR - FIRST_HOUR + 1) as usize;

/// A teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All teaching days in grid order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Day name as used in input and export documents.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown day name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weekday '{0}'")]
pub struct ParseWeekdayError(pub String);

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ParseWeekdayError(s.to_string()))
    }
}

/// Every teaching hour in ascending order.
pub fn hours() -> impl Iterator<Item = u8> {
    FIRST_HOUR..=LAST_HOUR
}

/// Identity of one grid cell.
///
/// Ordered by day, then hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SlotKey {
    day: Weekday,
    hour: u8,
}

impl SlotKey {
    /// Creates a key, or `None` if `hour` is outside the teaching day.
    pub fn new(day: Weekday, hour: u8) -> Option<Self> {
        (FIRST_HOUR..=LAST_HOUR)
            .contains(&hour)
            .then_some(Self { day, hour })
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Row-major position in the grid (day-major).
    #[inline]
    pub fn index(&self) -> usize {
        self.day.index() * HOURS_PER_DAY + (self.hour - FIRST_HOUR) as usize
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:00", self.day, self.hour)
    }
}

/// One grid cell with the courses currently occupying it.
#[derive(Debug, Clone)]
pub struct Slot {
    key: SlotKey,
    pub(crate) courses: BTreeSet<CourseIdx>,
}

impl Slot {
    pub fn key(&self) -> SlotKey {
        self.key
    }

    pub fn day(&self) -> Weekday {
        self.key.day
    }

    pub fn hour(&self) -> u8 {
        self.key.hour
    }

    /// Courses occupying this slot (read-only view).
    pub fn courses(&self) -> &BTreeSet<CourseIdx> {
        &self.courses
    }

    /// Whether no course occupies this slot.
    pub fn is_free(&self) -> bool {
        self.courses.is_empty()
    }
}

/// The fixed 5×10 weekly grid.
///
/// The shape never changes after construction; only occupancy does.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    slots: Vec<Slot>,
}

impl SlotGrid {
    /// Builds an empty grid with one slot per (weekday, hour).
    pub fn new() -> Self {
        let slots = Weekday::ALL
            .into_iter()
            .flat_map(|day| {
                hours().map(move |hour| Slot {
                    key: SlotKey { day, hour },
                    courses: BTreeSet::new(),
                })
            })
            .collect();
        Self { slots }
    }

    /// Looks up a slot key by day name and hour.
    ///
    /// Returns `None` for unknown day names or hours outside 8..=17.
    pub fn find(&self, day: &str, hour: u8) -> Option<SlotKey> {
        let day = day.parse::<Weekday>().ok()?;
        SlotKey::new(day, hour)
    }

    /// The slot for a key.
    #[inline]
    pub fn slot(&self, key: SlotKey) -> &Slot {
        &self.slots[key.index()]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, key: SlotKey) -> &mut Slot {
        &mut self.slots[key.index()]
    }

    /// All slots in grid order (Monday 8:00 first, Friday 17:00 last).
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Number of cells (always 50).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::new()
    }
}
