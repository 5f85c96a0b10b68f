//! Locally computed progress milestones.
//!
//! This category never calls the generator; its records derive from the
//! profile's skill and industry counts and the current date, so repeated
//! calls with the same inputs produce identical output.

use chrono::NaiveDate;

use crate::profile::UserProfile;

use super::records::{ContentRecord, ProgressRecord};

pub fn build_progress_records(profile: &UserProfile, today: NaiveDate) -> Vec<ContentRecord> {
    let skills = profile.skills.len();
    let industries = profile.industries.len();

    vec![
        ContentRecord::Progress(ProgressRecord {
            milestone: "Profile completed".to_string(),
            description: format!("Career profile for {} is set up and ready", profile.name),
            timeframe: today.format("%Y-%m-%d").to_string(),
        }),
        ContentRecord::Progress(ProgressRecord {
            milestone: "Skills added".to_string(),
            description: format!(
                "Added {skills} skill{} to your profile",
                if skills == 1 { "" } else { "s" }
            ),
            timeframe: "To date".to_string(),
        }),
        ContentRecord::Progress(ProgressRecord {
            milestone: "Industries selected".to_string(),
            description: format!(
                "Following {industries} industr{} of interest",
                if industries == 1 { "y" } else { "ies" }
            ),
            timeframe: "To date".to_string(),
        }),
    ]
}
