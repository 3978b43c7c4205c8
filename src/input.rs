//! Session input records.
//!
//! Mirror of the load document. Every field is optional at this layer so
//! that a missing field surfaces as a [`ValidationError`] naming the
//! offending record rather than as a bare deserialization failure.
//!
//! ```text
//! { id, name, programs: [ { id, name, departments: [
//!   { id, name,
//!     classrooms:  [ { id, capacity } ],
//!     instructors: [ { id, name } ],
//!     students:    [ { id, name } ],
//!     courses:     [ { id, name, credits, studentIds: [..], instructorId } ]
//!   } ] } ] }
//! ```
//!
//! [`ValidationError`]: crate::validation::ValidationError

use serde::{Deserialize, Serialize};

/// Root of a session document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub programs: Option<Vec<ProgramRecord>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departments: Option<Vec<DepartmentRecord>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepartmentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classrooms: Option<Vec<ClassroomRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<PersonRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<PersonRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseRecord>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassroomRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

/// Instructor or student record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<String>,
}

impl SessionRecord {
    /// Total number of records in the document, counting each course
    /// enrollment as one record.
    pub fn record_count(&self) -> usize {
        let programs = self.programs.as_deref().unwrap_or_default();
        programs.len()
            + programs
                .iter()
                .flat_map(|p| p.departments.as_deref().unwrap_or_default())
                .map(DepartmentRecord::record_count)
                .sum::<usize>()
    }
}

impl DepartmentRecord {
    fn record_count(&self) -> usize {
        let courses = self.courses.as_deref().unwrap_or_default();
        1 + self.classrooms.as_deref().map_or(0, <[_]>::len)
            + self.instructors.as_deref().map_or(0, <[_]>::len)
            + self.students.as_deref().map_or(0, <[_]>::len)
            + courses.len()
            + courses
                .iter()
                .map(|c| c.student_ids.as_deref().map_or(0, <[_]>::len))
                .sum::<usize>()
    }
}
