//! Academic term timetabling for the U-Engine ecosystem.
//!
//! Models a term as session → program → department → classrooms,
//! instructors, students and courses, and books conflict-free weekly slots
//! and classrooms for courses. Placement is manual: callers propose a
//! slot or room and the core accepts or refuses it.
//!
//! # Modules
//!
//! - **`models`**: Entity records, typed handles, the fixed 5×10 `SlotGrid`
//! - **`input`**: Serde records mirroring the load document
//! - **`validation`**: `ValidationError` and record checks used while loading
//! - **`session`**: `Session`, its ID indices and read API
//! - **`engine`**: Slot and classroom booking on a `Session`
//! - **`export`**: Day/hour keyed timetable document
//! - **`config`**: `SessionConfig` (capacity policy, input limits)
//!
//! # Example
//!
//! ```
//! use u_timetable::{Session, SessionConfig};
//!
//! let json = r#"{
//!   "id": "T1", "name": "Term",
//!   "programs": [{ "id": "P1", "name": "Science", "departments": [{
//!     "id": "D1", "name": "Physics",
//!     "classrooms": [{ "id": "R1", "capacity": 30 }],
//!     "instructors": [{ "id": "I1", "name": "Marie Curie" }],
//!     "students": [{ "id": "S1", "name": "Lise Meitner" }],
//!     "courses": [
//!       { "id": "C1", "name": "Optics", "credits": 3, "studentIds": ["S1"], "instructorId": "I1" },
//!       { "id": "C2", "name": "Optics Lab", "credits": 1, "studentIds": ["S1"], "instructorId": "I1" }
//!     ]
//!   }]}]
//! }"#;
//!
//! let mut session = Session::from_json_str(json, SessionConfig::default()).unwrap();
//! let optics = session.course_by_id("C1").unwrap();
//! let lab = session.course_by_id("C2").unwrap();
//! let mon9 = session.find_slot("Monday", 9).unwrap();
//! let room = session.classroom_by_id("R1").unwrap();
//!
//! assert!(session.assign_slot(optics, mon9));
//! assert!(!session.assign_slot(lab, mon9)); // same instructor and student
//! assert!(session.assign_classroom(optics, mon9, room).unwrap());
//! ```

pub mod config;
mod engine;
pub mod error;
pub mod export;
pub mod input;
mod loader;
pub mod logging;
pub mod models;
pub mod session;
pub mod validation;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, LoadLimits, SessionConfig};
pub use error::{Error, ErrorKind, Result, ScheduleError};
pub use export::{ExportClassroom, ExportEntry, TimetableExport, WeekSchedule};
pub use session::{DepartmentSummary, ProgramSummary, Session, SessionSummary};
pub use validation::{ValidationError, ValidationErrorKind};
