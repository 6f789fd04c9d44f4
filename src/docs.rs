use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use gradebook_core::{PaginationMeta, SortOrder};
use gradebook_models::{
    AuthCheckResponse, Claims, Course, CreateCourseDto, CreateStudentDto, ErrorResponse,
    LoginRequest, LoginResponse, MessageResponse, RegisterTeacherDto, Student, StudentResponse,
    Teacher, TeacherResponse, UpdateCourseDto, UpdateStudentDto, UpdateTeacherDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::teachers::controller::register_teacher,
        crate::modules::teachers::controller::login_teacher,
        crate::modules::teachers::controller::check_teacher_auth,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
    ),
    components(
        schemas(
            Teacher,
            TeacherResponse,
            RegisterTeacherDto,
            UpdateTeacherDto,
            LoginRequest,
            LoginResponse,
            AuthCheckResponse,
            Claims,
            Student,
            StudentResponse,
            CreateStudentDto,
            UpdateStudentDto,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            PaginationMeta,
            SortOrder,
            ErrorResponse,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Teachers", description = "Teacher registration, login and management"),
        (name = "Students", description = "Student management endpoints"),
        (name = "Courses", description = "Course management endpoints")
    ),
    info(
        title = "Gradebook API",
        version = "0.1.0",
        description = "Teachers, students and courses over PostgreSQL, with bearer-token authentication for teachers.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
