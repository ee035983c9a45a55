//! Friend-of-friend recommendations and the filter applied to them.
//!
//! Degree and mutual counts are seeded values; nothing here walks the graph.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Validation errors returned by [`Recommendation::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationValidationError {
    /// Degree must be at least one hop.
    ZeroDegrees,
    /// Path preview must list every hop including both ends.
    PathPreviewLength { expected: usize, actual: usize },
}

impl fmt::Display for RecommendationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDegrees => write!(f, "degrees must be at least 1"),
            Self::PathPreviewLength { expected, actual } => write!(
                f,
                "path preview must contain {expected} names, found {actual}"
            ),
        }
    }
}

impl std::error::Error for RecommendationValidationError {}

/// A suggested user together with how far away they are.
///
/// ## Invariants
/// - `degrees >= 1`.
/// - When present, `path_preview.len() == degrees + 1`.
///
/// The user fields are flattened into the JSON object, matching the
/// `{id, name, city, …, degrees, mutualCount, pathPreview}` wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecommendationDto", into = "RecommendationDto")]
pub struct Recommendation {
    user: User,
    degrees: u32,
    mutual_count: u32,
    path_preview: Option<Vec<String>>,
}

impl Recommendation {
    /// Fallible constructor enforcing the degree and path invariants.
    pub fn try_new(
        user: User,
        degrees: u32,
        mutual_count: u32,
        path_preview: Option<Vec<String>>,
    ) -> Result<Self, RecommendationValidationError> {
        if degrees == 0 {
            return Err(RecommendationValidationError::ZeroDegrees);
        }
        if let Some(path) = &path_preview {
            let expected = usize::try_from(degrees)
                .unwrap_or(usize::MAX)
                .saturating_add(1);
            if path.len() != expected {
                return Err(RecommendationValidationError::PathPreviewLength {
                    expected,
                    actual: path.len(),
                });
            }
        }
        Ok(Self {
            user,
            degrees,
            mutual_count,
            path_preview,
        })
    }

    /// The recommended user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Hop distance from the current user.
    pub fn degrees(&self) -> u32 {
        self.degrees
    }

    /// Number of shared connections.
    pub fn mutual_count(&self) -> u32 {
        self.mutual_count
    }

    /// Display names from the current user to the candidate, inclusive.
    pub fn path_preview(&self) -> Option<&[String]> {
        self.path_preview.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendationDto {
    #[serde(flatten)]
    user: User,
    degrees: u32,
    mutual_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path_preview: Option<Vec<String>>,
}

impl From<Recommendation> for RecommendationDto {
    fn from(value: Recommendation) -> Self {
        Self {
            user: value.user,
            degrees: value.degrees,
            mutual_count: value.mutual_count,
            path_preview: value.path_preview,
        }
    }
}

impl TryFrom<RecommendationDto> for Recommendation {
    type Error = RecommendationValidationError;

    fn try_from(value: RecommendationDto) -> Result<Self, Self::Error> {
        Self::try_new(
            value.user,
            value.degrees,
            value.mutual_count,
            value.path_preview,
        )
    }
}

/// Criteria for [`crate::domain::ports::RecommendationsQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationFilter {
    pub max_degrees: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl RecommendationFilter {
    /// Filter on degree only.
    pub fn within(max_degrees: u32) -> Self {
        Self {
            max_degrees,
            city: None,
        }
    }

    /// Restrict results to one city.
    #[must_use]
    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Whether `recommendation` passes this filter.
    ///
    /// An empty city string means no city restriction.
    pub fn matches(&self, recommendation: &Recommendation) -> bool {
        if recommendation.degrees() > self.max_degrees {
            return false;
        }
        match self.city.as_deref() {
            None | Some("") => true,
            Some(city) => recommendation.user().city() == Some(city),
        }
    }
}
