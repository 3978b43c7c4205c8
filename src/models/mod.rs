//! Timetabling domain models.
//!
//! Passive records for one academic term. Entities are stored in arenas
//! owned by the [`Session`](crate::Session) and refer to each other by
//! typed handles, so every relationship can be followed from either side.
//!
//! # Hierarchy
//!
//! | Level | Owns |
//! |-------|------|
//! | Session | Programs, Slot Grid |
//! | Program | Departments |
//! | Department | Classrooms, Instructors, Students, Courses |

mod classroom;
mod course;
mod handle;
mod organization;
mod person;
mod slot;

pub use classroom::Classroom;
pub use course::{Course, SchedulingStatus};
pub use handle::{ClassroomIdx, CourseIdx, InstructorIdx, StudentIdx};
pub use organization::{Department, Program};
pub use person::{Instructor, Student};
pub use slot::{
    hours, ParseWeekdayError, Slot, SlotGrid, SlotKey, Weekday, FIRST_HOUR, HOURS_PER_DAY,
    LAST_HOUR,
};
