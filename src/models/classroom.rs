//! Classroom model.
//!
//! Classrooms are the rooms a course meets in. Only identity and seat
//! capacity matter for booking; occupancy is tracked per slot by the
//! courses that map a slot to the room.

use serde::Serialize;

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classroom {
    /// Session-wide unique classroom identifier.
    pub id: String,
    /// Number of seats.
    pub capacity: u32,
}

impl Classroom {
    /// Creates a classroom.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }

    /// Whether `enrollment` students fit in the room.
    #[inline]
    pub fn fits(&self, enrollment: usize) -> bool {
        enrollment <= self.capacity as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_fits() {
        let room = Classroom::new("R101", 30);
        assert_eq!(room.id, "R101");
        assert!(room.fits(0));
        assert!(room.fits(30));
        assert!(!room.fits(31));

        let closet = Classroom::new("R000", 0);
        assert!(closet.fits(0));
        assert!(!closet.fits(1));
    }
}
