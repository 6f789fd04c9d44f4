//! Teacher rows, credentials and DTOs.
//!
//! [`Teacher`] never carries the password hash; only [`TeacherCredentials`]
//! does, and it is never serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use gradebook_auth::TokenIdentity;
use gradebook_core::Resource;

use crate::COURSE_RELATION;
use crate::courses::Course;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for Teacher {
    const NAME: &'static str = "teacher";
    const RELATIONS: &'static [&'static str] = &[COURSE_RELATION];
}

/// Login lookup row.
#[derive(Clone, FromRow)]
pub struct TeacherCredentials {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl TeacherCredentials {
    pub fn identity(&self) -> TokenIdentity {
        TokenIdentity {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl std::fmt::Debug for TeacherCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeacherCredentials")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// A teacher with their courses attached when `populate=courseId` was requested.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeacherResponse {
    #[serde(flatten)]
    pub teacher: Teacher,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<Course>>,
}

impl From<Teacher> for TeacherResponse {
    fn from(teacher: Teacher) -> Self {
        Self {
            teacher,
            courses: None,
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterTeacherDto {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Mathematics")]
    pub department: String,
    #[validate(email)]
    #[schema(example = "ada@school.edu")]
    pub email: String,
    #[validate(length(min = 1))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Partial teacher update. A supplied password is re-hashed.
#[derive(Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub department: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_dto() -> RegisterTeacherDto {
        RegisterTeacherDto {
            name: "Ada Lovelace".to_string(),
            department: "Mathematics".to_string(),
            email: "ada@school.edu".to_string(),
            password: "password123".to_string(),
        }
    }

    #[test]
    fn test_register_dto_validation() {
        assert!(register_dto().validate().is_ok());

        let bad_email = RegisterTeacherDto {
            email: "nope".to_string(),
            ..register_dto()
        };
        assert!(bad_email.validate().is_err());

        let empty_department = RegisterTeacherDto {
            department: String::new(),
            ..register_dto()
        };
        assert!(empty_department.validate().is_err());
    }

    #[test]
    fn test_register_dto_requires_password_field() {
        let result = serde_json::from_str::<RegisterTeacherDto>(
            r#"{"name":"Ada","department":"Math","email":"ada@school.edu"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_teacher_json_never_has_hash() {
        let now = Utc::now();
        let teacher = Teacher {
            id: 1,
            name: "Ada".to_string(),
            department: "Math".to_string(),
            email: "ada@school.edu".to_string(),
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&TeacherResponse::from(teacher)).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("courses"));
        assert!(json.contains(r#""department":"Math""#));
    }

    #[test]
    fn test_credentials_debug_hides_hash() {
        let credentials = TeacherCredentials {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@school.edu".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
        };
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("$2b$10$"));
        assert_eq!(credentials.identity().id, 1);
    }
}
