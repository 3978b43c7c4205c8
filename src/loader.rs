//! Session graph construction.
//!
//! Walks the input top-down and fails on the first problem found, so the
//! caller never observes a partially linked graph.
//!
//! # Order
//! 1. Input size against the configured record limit
//! 2. Session fields, then each program's fields
//! 3. Per department: fields, then classrooms, instructors, students
//!    (each ID checked against a session-wide map for its kind)
//! 4. Per department, courses in two passes: every course record is
//!    resolved against this department's instructors and students first;
//!    only when all of them resolve are the courses built and linked.
//!
//! Instructor and student owners are collected from the whole document
//! up front, so a reference into any other department is reported as out
//! of scope whether that department comes before or after the course.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::config::SessionConfig;
use crate::input::{
    ClassroomRecord, CourseRecord, DepartmentRecord, PersonRecord, ProgramRecord, SessionRecord,
};
use crate::models::{
    Classroom, ClassroomIdx, Course, CourseIdx, Department, Instructor, InstructorIdx, Program,
    Student, StudentIdx,
};
use crate::session::{Arenas, Session};
use crate::validation::{require, require_str, ValidationError, ValidationErrorKind};

/// Builds a fully linked session or reports the first validation failure.
pub(crate) fn build(
    record: &SessionRecord,
    config: SessionConfig,
) -> Result<Session, ValidationError> {
    let count = record.record_count();
    if count > config.limits.max_records {
        return Err(ValidationError::new(
            ValidationErrorKind::LimitExceeded,
            format!(
                "Session input has {count} records, limit is {}",
                config.limits.max_records
            ),
        ));
    }

    let header = Header::session(record);
    let id = require_str(&record.id, "session", "id", &header)?;
    let name = require_str(&record.name, "session", "name", &header)?;
    let program_records = require(&record.programs, "session", "programs", &header)?;

    let mut builder = GraphBuilder::with_owners(program_records);
    let programs = program_records
        .iter()
        .map(|p| builder.program(p))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Session::assemble(
        id.to_string(),
        name.to_string(),
        programs,
        builder.arenas,
        config,
    ))
}

/// Record header with its child list reduced to a count, used when
/// reporting errors on records whose children may be large.
#[derive(Serialize)]
struct Header<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    programs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    departments: Option<usize>,
}

impl<'a> Header<'a> {
    fn session(record: &'a SessionRecord) -> Self {
        Self {
            id: record.id.as_deref(),
            name: record.name.as_deref(),
            programs: record.programs.as_ref().map(Vec::len),
            departments: None,
        }
    }

    fn program(record: &'a ProgramRecord) -> Self {
        Self {
            id: record.id.as_deref(),
            name: record.name.as_deref(),
            programs: None,
            departments: record.departments.as_ref().map(Vec::len),
        }
    }
}

/// Course resolved in pass 1, ready to be linked in pass 2.
struct ResolvedCourse {
    id: String,
    name: String,
    credits: f64,
    instructor: InstructorIdx,
    students: Vec<StudentIdx>,
}

/// Accumulates entity arenas and the per-kind uniqueness maps.
#[derive(Default)]
struct GraphBuilder {
    arenas: Arenas,
    classroom_ids: HashMap<String, ClassroomIdx>,
    instructor_ids: HashMap<String, InstructorIdx>,
    student_ids: HashMap<String, StudentIdx>,
    course_ids: HashMap<String, CourseIdx>,
    /// Owning department of every instructor ID in the document.
    instructor_owners: HashMap<String, String>,
    /// Owning department of every student ID in the document.
    student_owners: HashMap<String, String>,
}

impl GraphBuilder {
    /// Records which department declares each instructor and student.
    /// Records without an ID are skipped; they fail when built.
    fn with_owners(programs: &[ProgramRecord]) -> Self {
        let mut builder = Self::default();
        let departments = programs
            .iter()
            .filter_map(|p| p.departments.as_deref())
            .flatten();
        for dept in departments {
            let Some(dept_id) = dept.id.as_deref().filter(|id| !id.is_empty()) else {
                continue;
            };
            let owners = [
                (&mut builder.instructor_owners, dept.instructors.as_deref()),
                (&mut builder.student_owners, dept.students.as_deref()),
            ];
            for (owners, people) in owners {
                let ids = people
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|p| p.id.as_deref())
                    .filter(|id| !id.is_empty());
                for id in ids {
                    owners
                        .entry(id.to_string())
                        .or_insert_with(|| dept_id.to_string());
                }
            }
        }
        builder
    }

    /// Classifies a reference that did not resolve to this department.
    fn reference_error(
        owners: &HashMap<String, String>,
        entity: &str,
        id: &str,
        dept_id: &str,
        record: &CourseRecord,
    ) -> ValidationError {
        let error = match owners.get(id) {
            Some(owner) if owner != dept_id => ValidationError::new(
                ValidationErrorKind::OutOfScopeReference,
                format!("{entity} {id} not in department {dept_id}"),
            ),
            _ => ValidationError::new(
                ValidationErrorKind::UnresolvedReference,
                format!("{entity} not found with ID: {id}"),
            ),
        };
        error.with_record(record)
    }

    fn program(&mut self, record: &ProgramRecord) -> Result<Program, ValidationError> {
        let header = Header::program(record);
        let id = require_str(&record.id, "program", "id", &header)?;
        let name = require_str(&record.name, "program", "name", &header)?;
        let dept_records = require(&record.departments, "program", "departments", &header)?;

        let departments = dept_records
            .iter()
            .map(|d| self.department(d))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Program {
            id: id.to_string(),
            name: name.to_string(),
            departments,
        })
    }

    fn department(&mut self, record: &DepartmentRecord) -> Result<Department, ValidationError> {
        let id = require_str(&record.id, "department", "id", record)?;
        let name = require_str(&record.name, "department", "name", record)?;
        let classroom_records = require(&record.classrooms, "department", "classrooms", record)?;
        let instructor_records =
            require(&record.instructors, "department", "instructors", record)?;
        let student_records = require(&record.students, "department", "students", record)?;
        let course_records = require(&record.courses, "department", "courses", record)?;

        let classrooms = classroom_records
            .iter()
            .map(|r| self.classroom(r))
            .collect::<Result<Vec<_>, _>>()?;
        let instructors = instructor_records
            .iter()
            .map(|r| self.instructor(r))
            .collect::<Result<Vec<_>, _>>()?;
        let students = student_records
            .iter()
            .map(|r| self.student(r))
            .collect::<Result<Vec<_>, _>>()?;

        let resolved = self.resolve_courses(id, course_records, &instructors, &students)?;
        let courses = resolved.into_iter().map(|c| self.link_course(c)).collect();

        Ok(Department {
            id: id.to_string(),
            name: name.to_string(),
            classrooms,
            instructors,
            students,
            courses,
        })
    }

    fn classroom(&mut self, record: &ClassroomRecord) -> Result<ClassroomIdx, ValidationError> {
        let id = require_str(&record.id, "classroom", "id", record)?;
        let capacity = *require(&record.capacity, "classroom", "capacity", record)?;
        if self.classroom_ids.contains_key(id) {
            return Err(duplicate("classroom", id, record));
        }

        let idx = ClassroomIdx(self.arenas.classrooms.len());
        self.arenas.classrooms.push(Classroom::new(id, capacity));
        self.classroom_ids.insert(id.to_string(), idx);
        Ok(idx)
    }

    fn instructor(&mut self, record: &PersonRecord) -> Result<InstructorIdx, ValidationError> {
        let id = require_str(&record.id, "instructor", "id", record)?;
        let name = require_str(&record.name, "instructor", "name", record)?;
        if self.instructor_ids.contains_key(id) {
            return Err(duplicate("instructor", id, record));
        }

        let idx = InstructorIdx(self.arenas.instructors.len());
        self.arenas.instructors.push(Instructor::new(id, name));
        self.instructor_ids.insert(id.to_string(), idx);
        Ok(idx)
    }

    fn student(&mut self, record: &PersonRecord) -> Result<StudentIdx, ValidationError> {
        let id = require_str(&record.id, "student", "id", record)?;
        let name = require_str(&record.name, "student", "name", record)?;
        if self.student_ids.contains_key(id) {
            return Err(duplicate("student", id, record));
        }

        let idx = StudentIdx(self.arenas.students.len());
        self.arenas.students.push(Student::new(id, name));
        self.student_ids.insert(id.to_string(), idx);
        Ok(idx)
    }

    /// Pass 1: checks every course record of a department without
    /// building anything.
    fn resolve_courses(
        &self,
        dept_id: &str,
        records: &[CourseRecord],
        instructors: &[InstructorIdx],
        students: &[StudentIdx],
    ) -> Result<Vec<ResolvedCourse>, ValidationError> {
        let own_instructors: HashSet<InstructorIdx> = instructors.iter().copied().collect();
        let own_students: HashSet<StudentIdx> = students.iter().copied().collect();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut resolved = Vec::with_capacity(records.len());

        for record in records {
            let id = require_str(&record.id, "course", "id", record)?;
            let name = require_str(&record.name, "course", "name", record)?;
            let credits = *require(&record.credits, "course", "credits", record)?;
            let student_ids = require(&record.student_ids, "course", "studentIds", record)?;
            let instructor_id =
                require_str(&record.instructor_id, "course", "instructorId", record)?;

            if self.course_ids.contains_key(id) || !seen.insert(id) {
                return Err(duplicate("course", id, record));
            }

            let instructor = match self.instructor_ids.get(instructor_id) {
                Some(idx) if own_instructors.contains(idx) => *idx,
                _ => {
                    return Err(Self::reference_error(
                        &self.instructor_owners,
                        "Instructor",
                        instructor_id,
                        dept_id,
                        record,
                    ))
                }
            };

            let mut enrolled = Vec::with_capacity(student_ids.len());
            for student_id in student_ids {
                let idx = match self.student_ids.get(student_id.as_str()) {
                    Some(idx) if own_students.contains(idx) => *idx,
                    _ => {
                        return Err(Self::reference_error(
                            &self.student_owners,
                            "Student",
                            student_id,
                            dept_id,
                            record,
                        ))
                    }
                };
                // A roster entry repeated in the record enrolls once.
                if !enrolled.contains(&idx) {
                    enrolled.push(idx);
                }
            }

            resolved.push(ResolvedCourse {
                id: id.to_string(),
                name: name.to_string(),
                credits,
                instructor,
                students: enrolled,
            });
        }

        Ok(resolved)
    }

    /// Pass 2: builds a course and wires its instructor and student
    /// back-references.
    fn link_course(&mut self, course: ResolvedCourse) -> CourseIdx {
        let idx = CourseIdx(self.arenas.courses.len());

        self.arenas.instructors[course.instructor.0]
            .courses
            .insert(idx);
        for s in &course.students {
            self.arenas.students[s.0].courses.insert(idx);
        }

        self.course_ids.insert(course.id.clone(), idx);
        self.arenas.courses.push(Course::new(
            course.id,
            course.name,
            course.credits,
            course.students,
            course.instructor,
        ));
        idx
    }
}

fn duplicate<R: Serialize>(entity: &str, id: &str, record: &R) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::DuplicateId,
        format!("Duplicate {entity} ID: {id}"),
    )
    .with_record(record)
}
