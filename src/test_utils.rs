//! Shared test fixtures.

use serde_json::{json, Value};

use crate::models::SlotKey;
use crate::{Session, SessionConfig};

/// Two programs, three departments.
///
/// Computer Science:
/// - C1 Algorithms  [S1, S2] by I1
/// - C2 Compilers   [S1]     by I1  (shares I1 and S1 with C1)
/// - C3 Databases   [S3]     by I2  (shares only I2 with C4)
/// - C4 Networks    [S2]     by I2  (shares only S2 with C1)
///
/// Mathematics: C5 Topology [S4, S5, S6] by I3.
/// History: C6 Ancient Rome [S7] by I4.
pub(crate) fn sample_input() -> Value {
    json!({
        "id": "2024-FALL",
        "name": "Fall 2024",
        "programs": [
            {
                "id": "P1",
                "name": "Engineering",
                "departments": [
                    {
                        "id": "D1",
                        "name": "Computer Science",
                        "classrooms": [
                            { "id": "R101", "capacity": 40 },
                            { "id": "R102", "capacity": 2 },
                            { "id": "R103", "capacity": 25 }
                        ],
                        "instructors": [
                            { "id": "I1", "name": "Ada Lovelace" },
                            { "id": "I2", "name": "Alan Turing" }
                        ],
                        "students": [
                            { "id": "S1", "name": "Grace Hopper" },
                            { "id": "S2", "name": "Linus Torvalds" },
                            { "id": "S3", "name": "Barbara Liskov" }
                        ],
                        "courses": [
                            { "id": "C1", "name": "Algorithms", "credits": 4,
                              "studentIds": ["S1", "S2"], "instructorId": "I1" },
                            { "id": "C2", "name": "Compilers", "credits": 3,
                              "studentIds": ["S1"], "instructorId": "I1" },
                            { "id": "C3", "name": "Databases", "credits": 3,
                              "studentIds": ["S3"], "instructorId": "I2" },
                            { "id": "C4", "name": "Networks", "credits": 3,
                              "studentIds": ["S2"], "instructorId": "I2" }
                        ]
                    },
                    {
                        "id": "D2",
                        "name": "Mathematics",
                        "classrooms": [ { "id": "M201", "capacity": 60 } ],
                        "instructors": [ { "id": "I3", "name": "Emmy Noether" } ],
                        "students": [
                            { "id": "S4", "name": "Kurt Godel" },
                            { "id": "S5", "name": "Sophie Germain" },
                            { "id": "S6", "name": "Srinivasa Ramanujan" }
                        ],
                        "courses": [
                            { "id": "C5", "name": "Topology", "credits": 4,
                              "studentIds": ["S4", "S5", "S6"], "instructorId": "I3" }
                        ]
                    }
                ]
            },
            {
                "id": "P2",
                "name": "Humanities",
                "departments": [
                    {
                        "id": "D3",
                        "name": "History",
                        "classrooms": [ { "id": "H301", "capacity": 15 } ],
                        "instructors": [ { "id": "I4", "name": "Herodotus" } ],
                        "students": [ { "id": "S7", "name": "Tacitus" } ],
                        "courses": [
                            { "id": "C6", "name": "Ancient Rome", "credits": 2.5,
                              "studentIds": ["S7"], "instructorId": "I4" }
                        ]
                    }
                ]
            }
        ]
    })
}

pub(crate) fn load(input: &Value) -> crate::Result<Session> {
    load_with(input, SessionConfig::default())
}

pub(crate) fn load_with(input: &Value, config: SessionConfig) -> crate::Result<Session> {
    Session::from_json_str(&input.to_string(), config)
}

pub(crate) fn sample_session() -> Session {
    sample_session_with(SessionConfig::default())
}

pub(crate) fn sample_session_with(config: SessionConfig) -> Session {
    load_with(&sample_input(), config).unwrap()
}

pub(crate) fn slot(day: &str, hour: u8) -> SlotKey {
    SlotKey::new(day.parse().unwrap(), hour).unwrap()
}
