//! Course rows and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use gradebook_core::Resource;
use gradebook_core::serde::deserialize_nullable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Course {
    const NAME: &'static str = "course";
    const RELATIONS: &'static [&'static str] = &[];
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Algebra I")]
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: Option<i64>,
}

/// Partial course update. `teacherId: null` detaches the course.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i64>)]
    pub teacher_id: Option<Option<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_declares_no_relations() {
        assert!(Course::RELATIONS.is_empty());
    }

    #[test]
    fn test_create_course_dto_validation() {
        let dto: CreateCourseDto =
            serde_json::from_str(r#"{"title":"Algebra I","teacherId":3}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.teacher_id, Some(3));

        let empty_title = CreateCourseDto {
            title: String::new(),
            ..dto
        };
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_update_course_dto_distinguishes_null() {
        let cleared: UpdateCourseDto = serde_json::from_str(r#"{"teacherId":null}"#).unwrap();
        assert_eq!(cleared.teacher_id, Some(None));
        assert_eq!(cleared.description, None);

        let untouched: UpdateCourseDto = serde_json::from_str(r#"{"title":"Geometry"}"#).unwrap();
        assert_eq!(untouched.teacher_id, None);
    }
}
