//! Assignment engine.
//!
//! Books and unbooks slots and classrooms for one course at a time. Every
//! check looks only at courses that share a student or the instructor with
//! the course being booked, so the cost of a slot check is bounded by
//! (students × courses per student) + (courses of the instructor).
//!
//! # Result Channels
//! - Expected conflicts return `false`; the caller picks another slot or room.
//! - Booking a classroom into a slot the course does not hold is caller
//!   misuse and returns [`ScheduleError`].
//!
//! Mutations take `&mut Session`, so a check and the write that follows it
//! can never interleave with another booking on the same session.

use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{ClassroomIdx, CourseIdx, SchedulingStatus, SlotKey};
use crate::Session;

impl Session {
    /// Whether `course` can take `slot` without double-booking any of its
    /// students or its instructor.
    ///
    /// A slot the course already holds counts as unavailable.
    ///
    /// # Panics
    /// Panics if a handle was issued by a different session and is out of
    /// range here. An in-range foreign handle answers for the wrong entity.
    pub fn is_slot_available(&self, course: CourseIdx, slot: SlotKey) -> bool {
        let c = &self.courses[course.0];

        let student_clash = c
            .students()
            .iter()
            .flat_map(|s| self.students[s.0].courses.iter())
            .any(|other| self.courses[other.0].slots.contains(&slot));
        if student_clash {
            return false;
        }

        !self.instructors[c.instructor().0]
            .courses
            .iter()
            .any(|other| self.courses[other.0].slots.contains(&slot))
    }

    /// Books `slot` for `course`.
    ///
    /// Returns `false` if the course already holds the slot or the slot
    /// conflicts with a course sharing a student or the instructor.
    ///
    /// # Panics
    /// Panics if a handle was issued by a different session and is out of
    /// range here. An in-range foreign handle books the wrong entity.
    pub fn assign_slot(&mut self, course: CourseIdx, slot: SlotKey) -> bool {
        if self.courses[course.0].slots.contains(&slot) {
            return false;
        }
        if !self.is_slot_available(course, slot) {
            debug!(course = %self.courses[course.0].id, %slot, "slot refused");
            return false;
        }

        self.courses[course.0].slots.insert(slot);
        self.grid.slot_mut(slot).courses.insert(course);
        debug!(course = %self.courses[course.0].id, %slot, "slot assigned");
        true
    }

    /// Releases `slot` from `course`, dropping any classroom booked for it.
    ///
    /// Returns `false` if the course does not hold the slot.
    ///
    /// # Panics
    /// Panics if a handle was issued by a different session and is out of
    /// range here. An in-range foreign handle books the wrong entity.
    pub fn remove_slot(&mut self, course: CourseIdx, slot: SlotKey) -> bool {
        let c = &mut self.courses[course.0];
        if !c.slots.remove(&slot) {
            return false;
        }
        c.slot_classrooms.remove(&slot);
        self.grid.slot_mut(slot).courses.remove(&course);
        debug!(course = %self.courses[course.0].id, %slot, "slot removed");
        true
    }

    /// Whether no course meeting in `slot` already uses `classroom` there.
    ///
    /// Capacity is not considered. A classroom handle from a different
    /// session is compared by position and answers for an unrelated room.
    pub fn is_classroom_available(&self, slot: SlotKey, classroom: ClassroomIdx) -> bool {
        !self
            .grid
            .slot(slot)
            .courses
            .iter()
            .any(|c| self.courses[c.0].slot_classrooms.get(&slot) == Some(&classroom))
    }

    /// Books `classroom` for `course` in `slot`, replacing any classroom
    /// previously booked for that slot.
    ///
    /// Returns `Ok(false)` if the room is taken in that slot, or if capacity
    /// enforcement is on and the room is smaller than the enrollment.
    ///
    /// # Errors
    /// [`ScheduleError::SlotNotAssigned`] if the course does not hold `slot`.
    ///
    /// # Panics
    /// Panics if a handle was issued by a different session and is out of
    /// range here. An in-range foreign handle books the wrong entity.
    pub fn assign_classroom(
        &mut self,
        course: CourseIdx,
        slot: SlotKey,
        classroom: ClassroomIdx,
    ) -> Result<bool, ScheduleError> {
        let c = &self.courses[course.0];
        if !c.slots.contains(&slot) {
            return Err(ScheduleError::SlotNotAssigned {
                course: c.id.clone(),
                slot,
            });
        }
        if !self.is_classroom_available(slot, classroom) {
            debug!(
                course = %c.id,
                %slot,
                classroom = %self.classroom(classroom).id,
                "classroom taken"
            );
            return Ok(false);
        }
        let room = self.classroom(classroom);
        if self.config.enforce_capacity && !room.fits(c.enrollment()) {
            debug!(
                course = %c.id,
                %slot,
                classroom = %room.id,
                capacity = room.capacity,
                enrollment = c.enrollment(),
                "classroom too small"
            );
            return Ok(false);
        }

        debug!(course = %c.id, %slot, classroom = %room.id, "classroom assigned");
        self.courses[course.0]
            .slot_classrooms
            .insert(slot, classroom);
        Ok(true)
    }

    /// Classrooms that could be booked for `course` in `slot`: large enough
    /// for the enrollment and free in that slot. Session order.
    ///
    /// # Panics
    /// Panics if a handle was issued by a different session and is out of
    /// range here. An in-range foreign handle answers for the wrong entity.
    pub fn candidate_classrooms(&self, course: CourseIdx, slot: SlotKey) -> Vec<ClassroomIdx> {
        let enrollment = self.courses[course.0].enrollment();
        self.classrooms()
            .filter(|(idx, room)| room.fits(enrollment) && self.is_classroom_available(slot, *idx))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Every grid slot `course` could take right now, in grid order.
    ///
    /// # Panics
    /// Panics if a handle was issued by a different session and is out of
    /// range here. An in-range foreign handle answers for the wrong entity.
    pub fn available_slots(&self, course: CourseIdx) -> Vec<SlotKey> {
        self.grid
            .iter()
            .map(|s| s.key())
            .filter(|&key| self.is_slot_available(course, key))
            .collect()
    }

    /// Derived booking progress of a course.
    ///
    /// # Panics
    /// Panics if a handle was issued by a different session and is out of
    /// range here. An in-range foreign handle answers for the wrong entity.
    pub fn course_status(&self, course: CourseIdx) -> SchedulingStatus {
        self.courses[course.0].status()
    }
}
