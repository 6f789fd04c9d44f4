//! Seed rows and the knobs that control how many of each are generated.

/// Seed data for creating a teacher.
pub struct TeacherSeed {
    pub name: String,
    pub department: String,
    pub email: String,
    pub password_hash: String,
}

/// Seed data for creating a course.
pub struct CourseSeed {
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
}

/// Seed data for creating a student.
pub struct StudentSeed {
    pub title: String,
    pub description: String,
    pub teacher_id: i64,
    pub course_id: Option<i64>,
}

/// Password given to every seeded teacher unless overridden.
pub const DEFAULT_SEED_PASSWORD: &str = "password123";

#[derive(Clone)]
pub struct SeedConfig {
    pub num_teachers: usize,
    pub courses_per_teacher: usize,
    pub students_per_teacher: usize,
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_teachers: 5,
            courses_per_teacher: 3,
            students_per_teacher: 12,
            password: DEFAULT_SEED_PASSWORD.to_string(),
        }
    }
}

impl SeedConfig {
    pub fn new(num_teachers: usize) -> Self {
        Self {
            num_teachers,
            ..Default::default()
        }
    }

    pub fn with_courses(mut self, courses_per_teacher: usize) -> Self {
        self.courses_per_teacher = courses_per_teacher;
        self
    }

    pub fn with_students(mut self, students_per_teacher: usize) -> Self {
        self.students_per_teacher = students_per_teacher;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn total_courses(&self) -> usize {
        self.num_teachers * self.courses_per_teacher
    }

    pub fn total_students(&self) -> usize {
        self.num_teachers * self.students_per_teacher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_totals() {
        let config = SeedConfig::new(4).with_courses(2).with_students(10);
        assert_eq!(config.total_courses(), 8);
        assert_eq!(config.total_students(), 40);
        assert_eq!(config.password, DEFAULT_SEED_PASSWORD);
    }
}
