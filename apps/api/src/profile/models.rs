//! Profile data model: the raw shape returned by the external profile API
//! and the session-facing `UserProfile` built from it.

use serde::{Deserialize, Serialize};

/// The profile as the rest of the service sees it. All list fields default
/// to empty rather than absent; a `None` profile means "not ready".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub qualification: String,
    pub date_of_birth: String,
    pub address: String,
    pub mobile_number: String,
    pub email: String,
    pub skills: Vec<String>,
    pub industries: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

/// Wire shape of `GET {PROFILE_API_URL}`.
#[derive(Debug, Deserialize)]
pub struct ProfileEnvelope {
    pub user: RawUser,
    pub profile: RawProfile,
}

#[derive(Debug, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub industries: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(default)]
    pub education: Option<Vec<EducationEntry>>,
}

impl From<ProfileEnvelope> for UserProfile {
    fn from(envelope: ProfileEnvelope) -> Self {
        let ProfileEnvelope { user, profile } = envelope;
        let name = format!("{} {}", user.first_name, user.last_name)
            .trim()
            .to_string();
        UserProfile {
            name,
            qualification: profile.qualification.unwrap_or_default(),
            date_of_birth: profile.date_of_birth.unwrap_or_default(),
            address: profile.address.unwrap_or_default(),
            mobile_number: user.phone_number,
            email: user.email,
            skills: profile.skills.unwrap_or_default(),
            industries: profile.industries.unwrap_or_default(),
            experience: profile.experience.unwrap_or_default(),
            education: profile.education.unwrap_or_default(),
        }
    }
}
