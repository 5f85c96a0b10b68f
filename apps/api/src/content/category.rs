//! Dashboard content categories. Wire names are the camelCase tab
//! identifiers used by the client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentCategory {
    Courses,
    Jobs,
    ExamHelper,
    MockInterview,
    SampleQuestions,
    Progress,
    Trends,
    Salary,
    StudyMaterial,
}

#[derive(Debug, Error)]
#[error("unknown content category '{0}'")]
pub struct UnknownCategory(pub String);

impl ContentCategory {
    pub const ALL: [ContentCategory; 9] = [
        ContentCategory::Courses,
        ContentCategory::Jobs,
        ContentCategory::ExamHelper,
        ContentCategory::MockInterview,
        ContentCategory::SampleQuestions,
        ContentCategory::Progress,
        ContentCategory::Trends,
        ContentCategory::Salary,
        ContentCategory::StudyMaterial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::Courses => "courses",
            ContentCategory::Jobs => "jobs",
            ContentCategory::ExamHelper => "examHelper",
            ContentCategory::MockInterview => "mockInterview",
            ContentCategory::SampleQuestions => "sampleQuestions",
            ContentCategory::Progress => "progress",
            ContentCategory::Trends => "trends",
            ContentCategory::Salary => "salary",
            ContentCategory::StudyMaterial => "studyMaterial",
        }
    }

    /// Record count each generation prompt asks for.
    pub fn batch_size(&self) -> usize {
        match self {
            ContentCategory::ExamHelper => 4,
            ContentCategory::SampleQuestions => 5,
            _ => 6,
        }
    }

    /// `progress` is computed from the profile, never requested from the
    /// remote generator.
    pub fn is_locally_computed(&self) -> bool {
        matches!(self, ContentCategory::Progress)
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for category in ContentCategory::ALL {
            let parsed: ContentCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&ContentCategory::ExamHelper).unwrap();
        assert_eq!(json, "\"examHelper\"");
        let parsed: ContentCategory = serde_json::from_str("\"studyMaterial\"").unwrap();
        assert_eq!(parsed, ContentCategory::StudyMaterial);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!("podcasts".parse::<ContentCategory>().is_err());
        assert!("".parse::<ContentCategory>().is_err());
    }

    #[test]
    fn test_batch_sizes() {
        assert_eq!(ContentCategory::Courses.batch_size(), 6);
        assert_eq!(ContentCategory::ExamHelper.batch_size(), 4);
        assert_eq!(ContentCategory::SampleQuestions.batch_size(), 5);
        assert_eq!(ContentCategory::Salary.batch_size(), 6);
    }

    #[test]
    fn test_only_progress_is_locally_computed() {
        for category in ContentCategory::ALL {
            assert_eq!(
                category.is_locally_computed(),
                category == ContentCategory::Progress
            );
        }
    }
}
