//! # Gradebook Models
//!
//! Database rows, request DTOs and response envelopes for the Gradebook API.
//!
//! - [`auth`]: login request/response and the auth check payload
//! - [`common`]: error and message bodies
//! - [`courses`]: course rows and DTOs
//! - [`students`]: student rows, DTOs and the populated response
//! - [`teachers`]: teacher rows, credentials, DTOs and the populated response
//!
//! Every listable row type implements [`gradebook_core::Resource`], declaring
//! the relation names its `populate` parameter accepts.

pub mod auth;
pub mod common;
pub mod courses;
pub mod students;
pub mod teachers;

/// Relation name that eager-loads courses.
pub const COURSE_RELATION: &str = "courseId";

pub use auth::{AuthCheckResponse, Claims, LoginRequest, LoginResponse};
pub use common::{ErrorResponse, MessageResponse};
pub use courses::{Course, CreateCourseDto, UpdateCourseDto};
pub use students::{CreateStudentDto, Student, StudentResponse, UpdateStudentDto};
pub use teachers::{
    RegisterTeacherDto, Teacher, TeacherCredentials, TeacherResponse, UpdateTeacherDto,
};
