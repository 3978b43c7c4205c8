//! Session: one term's validated organizational and scheduling graph.
//!
//! A session owns every entity arena, the slot grid, and the ID indices
//! used by collaborators for O(1) lookup. It is built once by the loader
//! and replaced wholesale when a new document is loaded; afterwards only
//! the course/slot booking links change.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::input::SessionRecord;
use crate::loader;
use crate::models::{
    Classroom, ClassroomIdx, Course, CourseIdx, Instructor, InstructorIdx, Program, Slot,
    SlotGrid, SlotKey, Student, StudentIdx,
};

/// A loaded academic term.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    programs: Vec<Program>,
    pub(crate) grid: SlotGrid,
    classrooms: Vec<Classroom>,
    pub(crate) instructors: Vec<Instructor>,
    pub(crate) students: Vec<Student>,
    pub(crate) courses: Vec<Course>,
    courses_by_id: HashMap<String, CourseIdx>,
    classrooms_by_id: HashMap<String, ClassroomIdx>,
    pub(crate) config: SessionConfig,
}

/// Entity arenas produced by the loader.
#[derive(Debug, Default)]
pub(crate) struct Arenas {
    pub classrooms: Vec<Classroom>,
    pub instructors: Vec<Instructor>,
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
}

impl Session {
    /// Assembles a session from a finished graph, building the slot grid
    /// and walking the programs once to index courses and classrooms.
    pub(crate) fn assemble(
        id: String,
        name: String,
        programs: Vec<Program>,
        arenas: Arenas,
        config: SessionConfig,
    ) -> Self {
        let mut courses_by_id = HashMap::new();
        let mut classrooms_by_id = HashMap::new();
        for dept in programs.iter().flat_map(|p| &p.departments) {
            for &c in &dept.courses {
                courses_by_id.insert(arenas.courses[c.0].id.clone(), c);
            }
            for &r in &dept.classrooms {
                classrooms_by_id.insert(arenas.classrooms[r.0].id.clone(), r);
            }
        }

        Self {
            id,
            name,
            programs,
            grid: SlotGrid::new(),
            classrooms: arenas.classrooms,
            instructors: arenas.instructors,
            students: arenas.students,
            courses: arenas.courses,
            courses_by_id,
            classrooms_by_id,
            config,
        }
    }

    /// Builds a session from deserialized input records.
    pub fn from_record(record: &SessionRecord, config: SessionConfig) -> Result<Self> {
        match loader::build(record, config) {
            Ok(session) => {
                info!(
                    session = %session.id,
                    programs = session.programs.len(),
                    courses = session.courses.len(),
                    classrooms = session.classrooms.len(),
                    "session loaded"
                );
                Ok(session)
            }
            Err(err) => {
                warn!(error = %err, "session rejected");
                Err(err.into())
            }
        }
    }

    /// Builds a session from a JSON document.
    pub fn from_json_str(json: &str, config: SessionConfig) -> Result<Self> {
        let record: SessionRecord = serde_json::from_str(json)?;
        Self::from_record(&record, config)
    }

    /// Builds a session from a JSON reader.
    pub fn from_reader<R: Read>(reader: R, config: SessionConfig) -> Result<Self> {
        let record: SessionRecord = serde_json::from_reader(reader)?;
        Self::from_record(&record, config)
    }

    /// Builds a session from a JSON file.
    pub fn load(path: impl AsRef<Path>, config: SessionConfig) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents, config)
    }

    /// Programs in input order.
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// The weekly slot grid.
    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Looks up a grid slot by day name and hour.
    pub fn find_slot(&self, day: &str, hour: u8) -> Option<SlotKey> {
        self.grid.find(day, hour)
    }

    /// The grid cell for a slot key.
    pub fn slot(&self, key: SlotKey) -> &Slot {
        self.grid.slot(key)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Looks up a course by its ID.
    pub fn course_by_id(&self, id: &str) -> Option<CourseIdx> {
        self.courses_by_id.get(id).copied()
    }

    /// Looks up a classroom by its ID.
    pub fn classroom_by_id(&self, id: &str) -> Option<ClassroomIdx> {
        self.classrooms_by_id.get(id).copied()
    }

    /// # Panics
    /// Panics if `idx` was issued by a different session and is out of
    /// range here. An in-range foreign handle resolves to an unrelated
    /// course.
    pub fn course(&self, idx: CourseIdx) -> &Course {
        &self.courses[idx.0]
    }

    /// # Panics
    /// Panics if `idx` was issued by a different session and is out of
    /// range here. An in-range foreign handle resolves to an unrelated
    /// classroom.
    pub fn classroom(&self, idx: ClassroomIdx) -> &Classroom {
        &self.classrooms[idx.0]
    }

    /// # Panics
    /// Panics if `idx` was issued by a different session and is out of
    /// range here. An in-range foreign handle resolves to an unrelated
    /// instructor.
    pub fn instructor(&self, idx: InstructorIdx) -> &Instructor {
        &self.instructors[idx.0]
    }

    /// # Panics
    /// Panics if `idx` was issued by a different session and is out of
    /// range here. An in-range foreign handle resolves to an unrelated
    /// student.
    pub fn student(&self, idx: StudentIdx) -> &Student {
        &self.students[idx.0]
    }

    /// All courses in program/department order, with their handles.
    pub fn courses(&self) -> impl Iterator<Item = (CourseIdx, &Course)> {
        self.programs
            .iter()
            .flat_map(|p| &p.departments)
            .flat_map(|d| &d.courses)
            .map(move |&c| (c, &self.courses[c.0]))
    }

    /// All classrooms in program/department order, with their handles.
    pub fn classrooms(&self) -> impl Iterator<Item = (ClassroomIdx, &Classroom)> {
        self.programs
            .iter()
            .flat_map(|p| &p.departments)
            .flat_map(|d| &d.classrooms)
            .map(move |&r| (r, &self.classrooms[r.0]))
    }

    /// Courses occupying a slot.
    pub fn courses_at(&self, slot: SlotKey) -> impl Iterator<Item = &Course> {
        self.grid
            .slot(slot)
            .courses()
            .iter()
            .map(move |&c| &self.courses[c.0])
    }

    /// Number of courses in the session.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Number of classrooms in the session.
    pub fn classroom_count(&self) -> usize {
        self.classrooms.len()
    }

    /// Per-department entity counts.
    pub fn summary(&self) -> SessionSummary {
        let programs = self
            .programs
            .iter()
            .map(|p| ProgramSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                departments: p
                    .departments
                    .iter()
                    .map(|d| DepartmentSummary {
                        id: d.id.clone(),
                        name: d.name.clone(),
                        courses: d.courses.len(),
                        students: d.students.len(),
                        instructors: d.instructors.len(),
                        classrooms: d.classrooms.len(),
                    })
                    .collect(),
            })
            .collect();

        SessionSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            programs,
        }
    }
}

/// Entity counts for a session, grouped by program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: String,
    pub name: String,
    pub programs: Vec<ProgramSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSummary {
    pub id: String,
    pub name: String,
    pub departments: Vec<DepartmentSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSummary {
    pub id: String,
    pub name: String,
    pub courses: usize,
    pub students: usize,
    pub instructors: usize,
    pub classrooms: usize,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (ID: {})", self.name, self.id)?;
        for p in &self.programs {
            writeln!(f, "  {} ({})", p.name, p.id)?;
            for d in &p.departments {
                writeln!(
                    f,
                    "    {} ({}): {} courses, {} students, {} instructors, {} classrooms",
                    d.name, d.id, d.courses, d.students, d.instructors, d.classrooms
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_utils::{sample_input, sample_session, slot};
    use std::collections::HashSet;

    #[test]
    fn test_indices_cover_every_department() {
        let s = sample_session();

        let mut expected_courses = HashSet::new();
        let mut expected_rooms = HashSet::new();
        for dept in s.programs().iter().flat_map(|p| &p.departments) {
            for &c in &dept.courses {
                expected_courses.insert(s.course(c).id.clone());
            }
            for &r in &dept.classrooms {
                expected_rooms.insert(s.classroom(r).id.clone());
            }
        }

        let courses: HashSet<String> = s.courses().map(|(_, c)| c.id.clone()).collect();
        let rooms: HashSet<String> = s.classrooms().map(|(_, r)| r.id.clone()).collect();
        assert_eq!(courses, expected_courses);
        assert_eq!(rooms, expected_rooms);
        assert_eq!(s.course_count(), 6);
        assert_eq!(s.classroom_count(), 5);

        for id in &expected_courses {
            let idx = s.course_by_id(id).unwrap();
            assert_eq!(&s.course(idx).id, id);
        }
        for id in &expected_rooms {
            let idx = s.classroom_by_id(id).unwrap();
            assert_eq!(&s.classroom(idx).id, id);
        }
        assert!(s.course_by_id("C99").is_none());
        assert!(s.classroom_by_id("C1").is_none());
    }

    #[test]
    fn test_iteration_order() {
        let s = sample_session();
        let courses: Vec<&str> = s.courses().map(|(_, c)| c.id.as_str()).collect();
        assert_eq!(courses, vec!["C1", "C2", "C3", "C4", "C5", "C6"]);
        let rooms: Vec<&str> = s.classrooms().map(|(_, r)| r.id.as_str()).collect();
        assert_eq!(rooms, vec!["R101", "R102", "R103", "M201", "H301"]);
    }

    #[test]
    fn test_find_slot() {
        let s = sample_session();
        assert_eq!(s.find_slot("Monday", 9), Some(slot("Monday", 9)));
        assert!(s.find_slot("Sunday", 9).is_none());
        assert!(s.find_slot("Monday", 7).is_none());
        assert!(s.slot(slot("Friday", 17)).is_free());
    }

    #[test]
    fn test_course_details() {
        let s = sample_session();
        let c6 = s.course(s.course_by_id("C6").unwrap());
        assert_eq!(c6.name, "Ancient Rome");
        assert!((c6.credits - 2.5).abs() < 1e-10);
        assert_eq!(s.instructor(c6.instructor()).name, "Herodotus");
        assert_eq!(s.student(c6.students()[0]).name, "Tacitus");
    }

    #[test]
    fn test_from_reader_and_load() {
        let json = sample_input().to_string();
        let s = Session::from_reader(json.as_bytes(), SessionConfig::default()).unwrap();
        assert_eq!(s.name, "Fall 2024");

        let path = std::env::temp_dir()
            .join(format!("u-timetable-input-{}.json", std::process::id()));
        std::fs::write(&path, &json).unwrap();
        let loaded = Session::load(&path, SessionConfig::default());
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.unwrap().course_count(), 6);

        let err = Session::load("/nonexistent/session.json", SessionConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_malformed_json() {
        let err = Session::from_json_str("{ \"id\": ", SessionConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_reload_replaces_session() {
        let mut session = sample_session();
        let c1 = session.course_by_id("C1").unwrap();
        let mon9 = slot("Monday", 9);
        assert!(session.assign_slot(c1, mon9));
        assert!(!session.slot(mon9).is_free());

        session = Session::from_json_str(&sample_input().to_string(), SessionConfig::default())
            .unwrap();

        // Handles are positional, so the old one now names the fresh course.
        let course = session.course(c1);
        assert_eq!(course.id, "C1");
        assert!(course.slots().is_empty());
        assert!(session.slot(mon9).is_free());
        assert!(session.instructor(course.instructor()).courses().contains(&c1));
        assert!(session.assign_slot(c1, mon9));
    }

    #[test]
    fn test_config_carried() {
        let config = SessionConfig::default().with_enforce_capacity(false);
        let s = crate::test_utils::sample_session_with(config.clone());
        assert_eq!(s.config(), &config);
    }

    #[test]
    fn test_summary() {
        let s = sample_session();
        let summary = s.summary();
        assert_eq!(summary.id, "2024-FALL");
        assert_eq!(summary.programs.len(), 2);

        let cs = &summary.programs[0].departments[0];
        assert_eq!(
            cs,
            &DepartmentSummary {
                id: "D1".into(),
                name: "Computer Science".into(),
                courses: 4,
                students: 3,
                instructors: 2,
                classrooms: 3,
            }
        );

        let text = summary.to_string();
        assert!(text.starts_with("Fall 2024 (ID: 2024-FALL)\n"));
        assert!(text.contains("  Humanities (P2)\n"));
        assert!(text.contains(
            "    Mathematics (D2): 1 courses, 3 students, 1 instructors, 1 classrooms\n"
        ));
    }
}
