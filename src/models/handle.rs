//! Typed arena handles.
//!
//! Entities live in flat arenas owned by the session; relationships are
//! stored as handles into those arenas. A handle is only meaningful for
//! the session that issued it.

use serde::Serialize;
use std::fmt;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position in the owning session's arena.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

define_handle!(
    /// Handle to a [`Classroom`](super::Classroom).
    ClassroomIdx
);
define_handle!(
    /// Handle to an [`Instructor`](super::Instructor).
    InstructorIdx
);
define_handle!(
    /// Handle to a [`Student`](super::Student).
    StudentIdx
);
define_handle!(
    /// Handle to a [`Course`](super::Course).
    CourseIdx
);
