//! Course model.
//!
//! A course has a fixed roster and instructor, set at load time, plus the
//! mutable booking state: the slots it meets in and, for some of those
//! slots, the classroom it meets in. Booking state is only changed through
//! the assignment operations on [`Session`](crate::Session).
//!
//! # Scheduling State
//!
//! | State | Condition |
//! |-------|-----------|
//! | Unscheduled | no slots |
//! | PartiallyScheduled | at least one slot lacks a classroom |
//! | FullyScheduled | every slot has a classroom |

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::{ClassroomIdx, InstructorIdx, SlotKey, StudentIdx};

/// A course to be placed on the weekly grid.
#[derive(Debug, Clone)]
pub struct Course {
    /// Session-wide unique course identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Credit value.
    pub credits: f64,
    students: Vec<StudentIdx>,
    instructor: InstructorIdx,
    pub(crate) slots: BTreeSet<SlotKey>,
    pub(crate) slot_classrooms: BTreeMap<SlotKey, ClassroomIdx>,
}

/// Derived booking progress of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchedulingStatus {
    /// No slot assigned.
    Unscheduled,
    /// At least one slot, not all of them with a classroom.
    PartiallyScheduled,
    /// Every assigned slot has a classroom.
    FullyScheduled,
}

impl Course {
    pub(crate) fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        credits: f64,
        students: Vec<StudentIdx>,
        instructor: InstructorIdx,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits,
            students,
            instructor,
            slots: BTreeSet::new(),
            slot_classrooms: BTreeMap::new(),
        }
    }

    /// Enrolled students, in input order.
    pub fn students(&self) -> &[StudentIdx] {
        &self.students
    }

    /// Number of enrolled students.
    pub fn enrollment(&self) -> usize {
        self.students.len()
    }

    pub fn instructor(&self) -> InstructorIdx {
        self.instructor
    }

    /// Assigned slots, ordered by day then hour.
    pub fn slots(&self) -> &BTreeSet<SlotKey> {
        &self.slots
    }

    /// Classroom per assigned slot; slots without a room have no entry.
    pub fn slot_classrooms(&self) -> &BTreeMap<SlotKey, ClassroomIdx> {
        &self.slot_classrooms
    }

    /// Classroom for one slot, if any.
    pub fn classroom_at(&self, slot: SlotKey) -> Option<ClassroomIdx> {
        self.slot_classrooms.get(&slot).copied()
    }

    /// Whether the course meets in `slot`.
    pub fn has_slot(&self, slot: SlotKey) -> bool {
        self.slots.contains(&slot)
    }

    pub fn status(&self) -> SchedulingStatus {
        if self.slots.is_empty() {
            SchedulingStatus::Unscheduled
        } else if self.slots.iter().all(|s| self.slot_classrooms.contains_key(s)) {
            SchedulingStatus::FullyScheduled
        } else {
            SchedulingStatus::PartiallyScheduled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn course() -> Course {
        Course::new(
            "C1",
            "Algorithms",
            4.0,
            vec![StudentIdx(0), StudentIdx(1)],
            InstructorIdx(0),
        )
    }

    #[test]
    fn test_course_accessors() {
        let c = course();
        assert_eq!(c.id, "C1");
        assert_eq!(c.name, "Algorithms");
        assert!((c.credits - 4.0).abs() < 1e-10);
        assert_eq!(c.enrollment(), 2);
        assert_eq!(c.instructor(), InstructorIdx(0));
        assert!(c.slots().is_empty());
        assert!(c.slot_classrooms().is_empty());
    }

    #[test]
    fn test_status_transitions() {
        let mon9 = SlotKey::new(Weekday::Monday, 9).unwrap();
        let tue9 = SlotKey::new(Weekday::Tuesday, 9).unwrap();

        let mut c = course();
        assert_eq!(c.status(), SchedulingStatus::Unscheduled);

        c.slots.insert(mon9);
        c.slots.insert(tue9);
        assert_eq!(c.status(), SchedulingStatus::PartiallyScheduled);

        c.slot_classrooms.insert(mon9, ClassroomIdx(0));
        assert_eq!(c.status(), SchedulingStatus::PartiallyScheduled);
        assert_eq!(c.classroom_at(mon9), Some(ClassroomIdx(0)));
        assert_eq!(c.classroom_at(tue9), None);

        c.slot_classrooms.insert(tue9, ClassroomIdx(1));
        assert_eq!(c.status(), SchedulingStatus::FullyScheduled);
    }
}
