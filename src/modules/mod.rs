use anyhow::anyhow;

use gradebook_core::AppError;

pub mod courses;
pub mod students;
pub mod teachers;

/// Maps an insert/update failure. A dangling `teacherId`/`courseId` is the
/// caller's fault (400); anything else is a storage failure (500).
pub(crate) fn write_error(e: sqlx::Error, context: &'static str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_foreign_key_violation() {
            let field = match db_err.constraint() {
                Some(c) if c.contains("course_id") => "courseId",
                Some(c) if c.contains("teacher_id") => "teacherId",
                _ => "reference",
            };
            return AppError::bad_request(anyhow!("{field} does not match an existing record"));
        }
    }
    AppError::database(anyhow::Error::from(e).context(context))
}
