//! Student rows, DTOs and the populated response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use gradebook_core::Resource;
use gradebook_core::serde::deserialize_nullable;

use crate::COURSE_RELATION;
use crate::courses::Course;

/// A student row. Belongs to exactly one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub teacher_id: i64,
    pub course_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Student {
    const NAME: &'static str = "student";
    const RELATIONS: &'static [&'static str] = &[COURSE_RELATION];
}

/// A student with its course attached when `populate=courseId` was requested.
///
/// `course` is omitted when not populated and `null` when populated but unset.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentResponse {
    #[serde(flatten)]
    pub student: Student,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Course>)]
    pub course: Option<Option<Course>>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            student,
            course: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Jane Doe")]
    pub title: String,
    #[validate(length(min = 1))]
    #[schema(example = "Second-year student")]
    pub description: String,
    pub teacher_id: i64,
    pub course_id: Option<i64>,
}

/// Partial student update. `courseId: null` removes the course.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i64>)]
    pub course_id: Option<Option<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student() -> Student {
        let now = Utc::now();
        Student {
            id: 1,
            title: "Jane Doe".to_string(),
            description: "Second-year student".to_string(),
            teacher_id: 2,
            course_id: Some(3),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_student_declares_course_relation() {
        assert_eq!(Student::RELATIONS, &["courseId"]);
    }

    #[test]
    fn test_student_serializes_camel_case() {
        let json = serde_json::to_value(student()).unwrap();
        assert_eq!(json["teacherId"], 2);
        assert_eq!(json["courseId"], 3);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("teacher_id").is_none());
    }

    #[test]
    fn test_response_omits_unpopulated_course() {
        let json = serde_json::to_value(StudentResponse::from(student())).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json.get("course").is_none());
    }

    #[test]
    fn test_response_renders_populated_null_course() {
        let response = StudentResponse {
            student: student(),
            course: Some(None),
        };
        let json = serde_json::to_value(response).unwrap();
        assert!(json["course"].is_null());
    }

    #[test]
    fn test_create_student_dto_ignores_unknown_fields() {
        let dto: CreateStudentDto = serde_json::from_str(
            r#"{"title":"Jane","description":"d","teacherId":4,"id":99,"createdAt":"x"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.teacher_id, 4);
        assert_eq!(dto.course_id, None);
    }

    #[test]
    fn test_create_student_dto_requires_teacher() {
        let result =
            serde_json::from_str::<CreateStudentDto>(r#"{"title":"Jane","description":"d"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_student_dto_validation() {
        let dto = UpdateStudentDto {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        assert!(UpdateStudentDto::default().validate().is_ok());
    }
}
