//! Generation prompt templates, one per remotely generated category.
//!
//! Every template pins the output contract: a fixed batch size, an explicit
//! field list, machine-parseable JSON with no surrounding prose, and a fixed
//! currency conversion for monetary amounts. `progress` has no template —
//! it is computed locally.

use crate::profile::UserProfile;

use super::cache::ContentCache;
use super::category::ContentCategory;
use super::records::ContentRecord;

/// Fixed conversion applied to monetary amounts in generated content.
pub const USD_TO_INR: u32 = 83;

const JSON_ONLY_INSTRUCTION: &str = "Return ONLY a JSON array of objects with exactly the fields \
    listed above. Do NOT include any explanations, markdown fences, or text before or after the \
    JSON array.";

const COURSES_TEMPLATE: &str = "{profile}\n\n\
    Generate {count} relevant courses that would benefit this person's career growth.\n\
    Each object must contain exactly these fields: \
    title, duration, provider, fee (in INR), url (a real course platform such as Coursera, Udemy, or edX), \
    buttonText (set to \"Enroll Now\").\n\
    {currency}\n{json_only}";

const JOBS_TEMPLATE: &str = "{profile}\n\n\
    Generate {count} relevant job opportunities that match this profile.\n\
    Each object must contain exactly these fields: \
    title, experience, provider, salary (in INR), location, url (a real job board such as LinkedIn, Indeed, or Naukri), \
    buttonText (set to \"Apply Now\").\n\
    {currency}\n{json_only}";

const EXAM_HELPER_TEMPLATE: &str = "{profile}\n\n\
    Generate {count} exam preparation resources or certifications that would advance this person's career.\n\
    Each object must contain exactly these fields: \
    title, description, conductingBody, eligibility, applicationProcess, examDate, fee (in INR), \
    syllabus, url (the official exam or certification site), buttonText (set to \"Learn More\").\n\
    {currency}\n{json_only}";

const MOCK_INTERVIEW_TEMPLATE: &str = "{profile}\n\n\
    Generate {count} mock interview scenarios relevant to the skills and industries above.\n\
    Each object must contain exactly these fields: \
    title, difficulty, duration, topics (an array of topic strings), \
    url (a real interview practice site such as Interviewing.io, Pramp, or LeetCode), \
    buttonText (set to \"Start Practice\").\n\
    {json_only}";

const SAMPLE_QUESTIONS_TEMPLATE: &str = "{profile}\n\n\
    Generate {count} sample interview questions relevant to the skills and industries above.\n\
    Each object must contain exactly these fields: \
    subject, question, options (an array of 4 choices, omit for open questions), correctAnswer, explanation.{exam_focus}\n\
    {json_only}";

const TRENDS_TEMPLATE: &str = "{profile}\n\n\
    Generate {count} current industry trends relevant to the industries above.\n\
    Each object must contain exactly these fields: \
    title, description, impact, action (a concrete recommended action).\n\
    {json_only}";

const SALARY_TEMPLATE: &str = "{profile}\n\n\
    Generate {count} salary comparisons for positions relevant to the skills and industries above.\n\
    Each object must contain exactly these fields: \
    title, averageSalary (in INR), entrySalary (in INR), seniorSalary (in INR), growthOutlook.\n\
    {currency}\n{json_only}";

const STUDY_MATERIAL_TEMPLATE: &str = "{profile}\n\n\
    Generate {count} study materials that deepen the skills listed above.\n\
    Each object must contain exactly these fields: \
    title, type, author, description, difficulty, url, cost (in INR), timeToComplete (in hours), \
    buttonText (set to \"Access Material\").\n\
    {currency}\n{json_only}";

/// Builds the generation request for a category. Returns `None` for
/// categories that never reach the generator.
pub fn build_prompt(
    category: ContentCategory,
    profile: &UserProfile,
    cache: &ContentCache,
) -> Option<String> {
    let template = match category {
        ContentCategory::Courses => COURSES_TEMPLATE,
        ContentCategory::Jobs => JOBS_TEMPLATE,
        ContentCategory::ExamHelper => EXAM_HELPER_TEMPLATE,
        ContentCategory::MockInterview => MOCK_INTERVIEW_TEMPLATE,
        ContentCategory::SampleQuestions => SAMPLE_QUESTIONS_TEMPLATE,
        ContentCategory::Trends => TRENDS_TEMPLATE,
        ContentCategory::Salary => SALARY_TEMPLATE,
        ContentCategory::StudyMaterial => STUDY_MATERIAL_TEMPLATE,
        ContentCategory::Progress => return None,
    };

    let prompt = template
        .replace("{profile}", &profile_block(profile))
        .replace("{count}", &category.batch_size().to_string())
        .replace("{currency}", &currency_note())
        .replace("{exam_focus}", &exam_focus(cache))
        .replace("{json_only}", JSON_ONLY_INSTRUCTION);

    Some(prompt)
}

fn profile_block(profile: &UserProfile) -> String {
    format!(
        "Based on this profile:\n- Name: {}\n- Qualification: {}\n- Skills: {}\n- Industries: {}",
        profile.name,
        profile.qualification,
        profile.skills.join(", "),
        profile.industries.join(", ")
    )
}

fn currency_note() -> String {
    format!("Use a conversion rate of 1 USD = {USD_TO_INR} INR when producing monetary amounts.")
}

/// Soft cross-category dependency: when exam prep data is already cached,
/// its titles bias sample questions toward those exams.
fn exam_focus(cache: &ContentCache) -> String {
    let titles: Vec<&str> = cache
        .get(ContentCategory::ExamHelper)
        .map(|entry| {
            entry
                .records
                .iter()
                .filter_map(|record| match record {
                    ContentRecord::ExamPrep(exam) if !exam.title.is_empty() => {
                        Some(exam.title.as_str())
                    }
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if titles.is_empty() {
        String::new()
    } else {
        format!(
            "\nFocus the questions on these exams where relevant: {}.",
            titles.join(", ")
        )
    }
}
