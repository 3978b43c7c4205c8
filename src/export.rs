//! Timetable export.
//!
//! Produces the day/hour keyed document handed to download and reporting
//! collaborators:
//!
//! ```text
//! { sessionName, sessionId, generatedAt,
//!   days: [Monday..Friday], hours: [8..17],
//!   schedule: { day: { hour: [ { courseId, courseName, instructorId,
//!       instructorName, classroom: {id, capacity} | null, studentCount } ] } } }
//! ```
//!
//! Days appear in weekday order and hours ascending; entries within a cell
//! follow program, department and course order.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::{hours, SlotKey, Weekday, HOURS_PER_DAY};
use crate::Session;

/// Exported timetable for one session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableExport {
    pub session_name: String,
    pub session_id: String,
    pub generated_at: DateTime<Utc>,
    pub days: Vec<Weekday>,
    pub hours: Vec<u8>,
    pub schedule: WeekSchedule,
}

/// One course meeting in one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEntry {
    pub course_id: String,
    pub course_name: String,
    pub instructor_id: String,
    pub instructor_name: String,
    pub classroom: Option<ExportClassroom>,
    pub student_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportClassroom {
    pub id: String,
    pub capacity: u32,
}

/// Entries for every grid cell, serialized as `{ day: { hour: [..] } }`.
#[derive(Debug, Clone)]
pub struct WeekSchedule {
    cells: Vec<Vec<ExportEntry>>,
}

impl WeekSchedule {
    fn new() -> Self {
        Self {
            cells: vec![Vec::new(); Weekday::ALL.len() * HOURS_PER_DAY],
        }
    }

    /// Entries for one slot.
    pub fn entries(&self, slot: SlotKey) -> &[ExportEntry] {
        &self.cells[slot.index()]
    }

    /// Total number of entries across all cells.
    pub fn len(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }
}

impl Serialize for WeekSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Weekday::ALL.len()))?;
        for (day, row) in Weekday::ALL.iter().zip(self.cells.chunks(HOURS_PER_DAY)) {
            map.serialize_entry(day.name(), &DayRow(row))?;
        }
        map.end()
    }
}

struct DayRow<'a>(&'a [Vec<ExportEntry>]);

impl Serialize for DayRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (hour, entries) in hours().zip(self.0) {
            map.serialize_entry(&hour, entries)?;
        }
        map.end()
    }
}

impl TimetableExport {
    /// Snapshots the session's bookings, stamped with `generated_at`.
    pub fn build(session: &Session, generated_at: DateTime<Utc>) -> Self {
        let mut schedule = WeekSchedule::new();

        for (_, course) in session.courses() {
            let instructor = session.instructor(course.instructor());
            for &slot in course.slots() {
                let classroom = course.classroom_at(slot).map(|r| {
                    let room = session.classroom(r);
                    ExportClassroom {
                        id: room.id.clone(),
                        capacity: room.capacity,
                    }
                });
                schedule.cells[slot.index()].push(ExportEntry {
                    course_id: course.id.clone(),
                    course_name: course.name.clone(),
                    instructor_id: instructor.id.clone(),
                    instructor_name: instructor.name.clone(),
                    classroom,
                    student_count: course.enrollment(),
                });
            }
        }

        Self {
            session_name: session.name.clone(),
            session_id: session.id.clone(),
            generated_at,
            days: Weekday::ALL.to_vec(),
            hours: hours().collect(),
            schedule,
        }
    }

    /// Conventional download name: `timetable_<sessionId>_<YYYY-MM-DD>.json`.
    pub fn file_name(&self) -> String {
        format!(
            "timetable_{}_{}.json",
            self.session_id,
            self.generated_at.format("%Y-%m-%d")
        )
    }

    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the pretty-printed document to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?)?;
        info!(
            session = %self.session_id,
            entries = self.schedule.len(),
            path = %path.display(),
            "timetable written"
        );
        Ok(())
    }
}

impl Session {
    /// Exports the current bookings, stamped with the current time.
    pub fn export_timetable(&self) -> TimetableExport {
        TimetableExport::build(self, Utc::now())
    }
}
