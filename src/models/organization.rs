//! Organizational hierarchy: programs and departments.
//!
//! A department owns its members outright; no classroom, instructor,
//! student, or course belongs to two departments.

use super::{ClassroomIdx, CourseIdx, InstructorIdx, StudentIdx};

/// An academic program (a group of departments).
#[derive(Debug, Clone)]
pub struct Program {
    pub id: String,
    pub name: String,
    /// Departments in input order.
    pub departments: Vec<Department>,
}

/// A department and the entities it owns.
#[derive(Debug, Clone)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub classrooms: Vec<ClassroomIdx>,
    pub instructors: Vec<InstructorIdx>,
    pub students: Vec<StudentIdx>,
    pub courses: Vec<CourseIdx>,
}

