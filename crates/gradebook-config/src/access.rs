use crate::env_util::flag_or;

/// Per-resource decision on whether a route group requires a bearer token.
///
/// Teacher routes other than register and login are always protected and are
/// not configurable here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessConfig {
    pub protect_students: bool,
    pub protect_courses: bool,
}

impl AccessConfig {
    pub fn from_env() -> Self {
        Self {
            protect_students: flag_or("PROTECT_STUDENT_ROUTES", true),
            protect_courses: flag_or("PROTECT_COURSE_ROUTES", true),
        }
    }

    pub fn open() -> Self {
        Self {
            protect_students: false,
            protect_courses: false,
        }
    }
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            protect_students: true,
            protect_courses: true,
        }
    }
}
