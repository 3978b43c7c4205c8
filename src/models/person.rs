//! Instructor and student models.
//!
//! Both carry a back-reference set of courses. The set is filled in when
//! a course is constructed during loading and is never assigned directly.

use std::collections::BTreeSet;

use super::CourseIdx;

/// A course instructor.
#[derive(Debug, Clone)]
pub struct Instructor {
    /// Session-wide unique instructor identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub(crate) courses: BTreeSet<CourseIdx>,
}

/// An enrolled student.
#[derive(Debug, Clone)]
pub struct Student {
    /// Session-wide unique student identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub(crate) courses: BTreeSet<CourseIdx>,
}

impl Instructor {
    /// Creates an instructor teaching no courses.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            courses: BTreeSet::new(),
        }
    }

    /// Courses taught by this instructor.
    pub fn courses(&self) -> &BTreeSet<CourseIdx> {
        &self.courses
    }
}

impl Student {
    /// Creates a student enrolled in no courses.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            courses: BTreeSet::new(),
        }
    }

    /// Courses this student is enrolled in.
    pub fn courses(&self) -> &BTreeSet<CourseIdx> {
        &self.courses
    }
}
