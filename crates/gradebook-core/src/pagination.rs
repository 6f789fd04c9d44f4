//! Paginated list query contract shared by every resource.
//!
//! List endpoints accept four raw query parameters:
//!
//! - `page`: page number, 1-indexed (default: 1)
//! - `limit`: items per page (default: 10, clamped to the configured maximum)
//! - `sort`: `asc` or `desc` on the creation timestamp, case-insensitive (default: `asc`)
//! - `populate`: comma-separated relation names to eager-load
//!
//! [`PaginationParams::validate`] turns them into a [`ListQuery`] or a
//! [`PaginationError`] before any storage access happens. Errors are reported
//! in a fixed priority: limit/page first, then sort, then populate.
//!
//! # Example
//!
//! ```ignore
//! async fn list_students(
//!     State(state): State<AppState>,
//!     Query(params): Query<PaginationParams>,
//! ) -> Result<Json<Paginated<StudentResponse>>, AppError> {
//!     let query = params
//!         .validate::<Student>(state.pagination.limits())
//!         .map_err(AppError::bad_request)?;
//!
//!     let (students, total) = tokio::try_join!(fetch(&query), count())?;
//!     Ok(Json(query.paginate(students, total)))
//! }
//! ```
//!
//! # Example JSON Response
//!
//! ```json
//! {
//!   "data": [...],
//!   "meta": { "total": 12, "page": 2, "limit": 5, "totalPages": 3 }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// A listable resource and the relations it allows callers to eager-load.
pub trait Resource {
    /// Singular resource name used in messages and logs.
    const NAME: &'static str;
    /// Relation names accepted by `populate`.
    const RELATIONS: &'static [&'static str];
}

/// Default and maximum page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_limit: i64,
    pub max_limit: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("limit/page must be positive ({field}={value})")]
    NotPositive { field: &'static str, value: String },

    #[error("sort must be 'asc' or 'desc' (got '{0}')")]
    InvalidSort(String),

    #[error("Invalid populate value(s): {}", .0.join(","))]
    InvalidPopulate(Vec<String>),
}

/// Sort direction on the creation timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for SortOrder {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(PaginationError::InvalidSort(s.to_string())),
        }
    }
}

/// Validated set of relations to eager-load, in request order without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Populate(Vec<&'static str>);

impl Populate {
    /// Parses a comma-separated relation list against `R::RELATIONS`.
    ///
    /// Every unknown name is collected so the caller sees all of them at once.
    pub fn parse<R: Resource>(raw: Option<&str>) -> Result<Self, PaginationError> {
        let mut relations = Vec::new();
        let mut invalid = Vec::new();

        for name in raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            match R::RELATIONS.iter().find(|relation| **relation == name) {
                Some(relation) if !relations.contains(relation) => relations.push(*relation),
                Some(_) => {}
                None => invalid.push(name.to_string()),
            }
        }

        if !invalid.is_empty() {
            return Err(PaginationError::InvalidPopulate(invalid));
        }

        Ok(Self(relations))
    }

    pub fn includes(&self, relation: &str) -> bool {
        self.0.contains(&relation)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn relations(&self) -> &[&'static str] {
        &self.0
    }
}

/// Raw list query parameters, kept as strings so malformed values are reported
/// with the pagination error messages instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, 1-indexed (default: 1)
    pub page: Option<String>,
    /// Items per page (default: 10, capped by the server maximum)
    pub limit: Option<String>,
    /// `asc` or `desc` on creation time (default: `asc`)
    pub sort: Option<String>,
    /// Comma-separated relations to eager-load, e.g. `courseId`
    pub populate: Option<String>,
}

impl PaginationParams {
    pub fn validate<R: Resource>(&self, limits: PageLimits) -> Result<ListQuery, PaginationError> {
        let limit = parse_positive("limit", self.limit.as_deref(), limits.default_limit)?
            .min(limits.max_limit.max(1));
        let page = parse_positive("page", self.page.as_deref(), 1)?;

        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => SortOrder::default(),
            Some(raw) => raw.parse()?,
        };

        let populate = Populate::parse::<R>(self.populate.as_deref())?;

        Ok(ListQuery {
            page,
            limit,
            sort,
            populate,
        })
    }
}

/// The `populate` parameter accepted by get-by-id endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PopulateParams {
    /// Comma-separated relations to eager-load, e.g. `courseId`
    pub populate: Option<String>,
}

impl PopulateParams {
    pub fn validate<R: Resource>(&self) -> Result<Populate, PaginationError> {
        Populate::parse::<R>(self.populate.as_deref())
    }
}

fn parse_positive(
    field: &'static str,
    raw: Option<&str>,
    default: i64,
) -> Result<i64, PaginationError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    match raw.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(PaginationError::NotPositive {
            field,
            value: raw.to_string(),
        }),
    }
}

/// A validated, bounded list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: i64,
    pub limit: i64,
    pub sort: SortOrder,
    pub populate: Populate,
}

impl ListQuery {
    /// Rows to skip: `(page - 1) * limit`.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    #[must_use]
    pub fn meta(&self, total: i64) -> PaginationMeta {
        PaginationMeta {
            total,
            page: self.page,
            limit: self.limit,
            total_pages: total_pages(total, self.limit),
        }
    }

    pub fn paginate<T>(&self, data: Vec<T>, total: i64) -> Paginated<T> {
        Paginated {
            data,
            meta: self.meta(total),
        }
    }
}

/// `ceil(total / limit)`, zero when there is nothing to page through.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Total number of records at the time of the count
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Effective page size
    pub limit: i64,
    /// `ceil(total / limit)`
    pub total_pages: i64,
}

/// The `{data, meta}` envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Students;

    impl Resource for Students {
        const NAME: &'static str = "student";
        const RELATIONS: &'static [&'static str] = &["courseId"];
    }

    struct Courses;

    impl Resource for Courses {
        const NAME: &'static str = "course";
        const RELATIONS: &'static [&'static str] = &[];
    }

    fn params(page: Option<&str>, limit: Option<&str>, sort: Option<&str>) -> PaginationParams {
        PaginationParams {
            page: page.map(String::from),
            limit: limit.map(String::from),
            sort: sort.map(String::from),
            populate: None,
        }
    }

    #[test]
    fn test_defaults() {
        let query = PaginationParams::default()
            .validate::<Students>(PageLimits::default())
            .unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.sort, SortOrder::Asc);
        assert!(query.populate.is_empty());
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let query = params(Some(""), Some(""), Some(""))
            .validate::<Students>(PageLimits::default())
            .unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.sort, SortOrder::Asc);
    }

    #[test]
    fn test_offset_from_page_and_limit() {
        let query = params(Some("3"), Some("25"), None)
            .validate::<Students>(PageLimits::default())
            .unwrap();
        assert_eq!(query.offset(), 50);
    }

    #[test]
    fn test_rejects_non_positive_limit_and_page() {
        for (page, limit) in [
            (Some("1"), Some("0")),
            (Some("1"), Some("-5")),
            (Some("0"), Some("10")),
            (Some("-1"), None),
        ] {
            let err = params(page, limit, None)
                .validate::<Students>(PageLimits::default())
                .unwrap_err();
            assert!(matches!(err, PaginationError::NotPositive { .. }));
            assert!(err.to_string().starts_with("limit/page must be positive"));
        }
    }

    #[test]
    fn test_rejects_non_numeric_limit() {
        let err = params(None, Some("ten"), None)
            .validate::<Students>(PageLimits::default())
            .unwrap_err();
        assert_eq!(
            err,
            PaginationError::NotPositive {
                field: "limit",
                value: "ten".to_string()
            }
        );
    }

    #[test]
    fn test_limit_clamped_to_maximum() {
        let limits = PageLimits {
            default_limit: 10,
            max_limit: 50,
        };
        let query = params(None, Some("5000"), None)
            .validate::<Students>(limits)
            .unwrap();
        assert_eq!(query.limit, 50);
        assert_eq!(query.meta(120).limit, 50);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        for (raw, expected) in [
            ("asc", SortOrder::Asc),
            ("ASC", SortOrder::Asc),
            ("Desc", SortOrder::Desc),
            ("DESC", SortOrder::Desc),
        ] {
            let query = params(None, None, Some(raw))
                .validate::<Students>(PageLimits::default())
                .unwrap();
            assert_eq!(query.sort, expected);
        }
    }

    #[test]
    fn test_rejects_unknown_sort() {
        for raw in ["ascending", "up", "1", "random"] {
            let err = params(None, None, Some(raw))
                .validate::<Students>(PageLimits::default())
                .unwrap_err();
            assert_eq!(err, PaginationError::InvalidSort(raw.to_string()));
        }
    }

    #[test]
    fn test_populate_accepts_declared_relation() {
        let query = PaginationParams {
            populate: Some(" courseId ,courseId,".to_string()),
            ..Default::default()
        }
        .validate::<Students>(PageLimits::default())
        .unwrap();
        assert!(query.populate.includes("courseId"));
        assert_eq!(query.populate.relations(), &["courseId"]);
    }

    #[test]
    fn test_populate_reports_every_invalid_name() {
        let err = PaginationParams {
            populate: Some("teacher,courseId,grades".to_string()),
            ..Default::default()
        }
        .validate::<Students>(PageLimits::default())
        .unwrap_err();

        assert_eq!(
            err,
            PaginationError::InvalidPopulate(vec!["teacher".to_string(), "grades".to_string()])
        );
        assert_eq!(err.to_string(), "Invalid populate value(s): teacher,grades");
    }

    #[test]
    fn test_resource_without_relations_rejects_populate() {
        let err = PopulateParams {
            populate: Some("courseId".to_string()),
        }
        .validate::<Courses>()
        .unwrap_err();
        assert_eq!(err, PaginationError::InvalidPopulate(vec!["courseId".to_string()]));
    }

    #[test]
    fn test_error_priority_limit_before_sort_before_populate() {
        let all_bad = PaginationParams {
            page: Some("1".to_string()),
            limit: Some("0".to_string()),
            sort: Some("sideways".to_string()),
            populate: Some("nope".to_string()),
        };
        assert!(matches!(
            all_bad.validate::<Students>(PageLimits::default()),
            Err(PaginationError::NotPositive { field: "limit", .. })
        ));

        let bad_sort_and_populate = PaginationParams {
            limit: None,
            ..all_bad
        };
        assert!(matches!(
            bad_sort_and_populate.validate::<Students>(PageLimits::default()),
            Err(PaginationError::InvalidSort(_))
        ));
    }

    #[test]
    fn test_total_pages_is_ceiling_division() {
        for total in 0..60 {
            for limit in 1..12 {
                let expected = (total as f64 / limit as f64).ceil() as i64;
                assert_eq!(total_pages(total, limit), expected, "total={total} limit={limit}");
            }
        }
    }

    #[test]
    fn test_meta_for_second_page_of_twelve() {
        let query = params(Some("2"), Some("5"), Some("desc"))
            .validate::<Students>(PageLimits::default())
            .unwrap();
        assert_eq!(query.offset(), 5);
        assert_eq!(
            query.meta(12),
            PaginationMeta {
                total: 12,
                page: 2,
                limit: 5,
                total_pages: 3
            }
        );
    }

    #[test]
    fn test_page_beyond_last_keeps_true_total() {
        let query = params(Some("9"), Some("5"), None)
            .validate::<Students>(PageLimits::default())
            .unwrap();
        let page: Paginated<i32> = query.paginate(Vec::new(), 12);
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 12);
        assert_eq!(page.meta.total_pages, 3);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = PaginationMeta {
            total: 12,
            page: 2,
            limit: 5,
            total_pages: 3,
        };
        let serialized = serde_json::to_string(&meta).unwrap();
        assert_eq!(
            serialized,
            r#"{"total":12,"page":2,"limit":5,"totalPages":3}"#
        );
    }

    #[test]
    fn test_params_deserialize_from_query_shape() {
        let json = r#"{"page":"2","limit":"5","sort":"desc","populate":"courseId"}"#;
        let params: PaginationParams = serde_json::from_str(json).unwrap();
        let query = params.validate::<Students>(PageLimits::default()).unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.sort, SortOrder::Desc);
        assert!(query.populate.includes("courseId"));
    }
}
