//! Typed content records, one variant per category.
//!
//! Model output is best-effort: missing fields default to empty, monetary
//! amounts may arrive as strings or numbers, and records that fail even
//! lenient decoding are skipped with a warning rather than failing the
//! whole batch.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::category::ContentCategory;

/// Accepts a string, number, bool, or null where a string is expected.
/// Objects and arrays are stringified as JSON text.
fn de_stringy<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

/// Accepts an array of values or a single scalar where a list is expected.
fn de_string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Value::Null => Vec::new(),
        Value::String(s) => vec![s],
        other => vec![other.to_string()],
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub fee: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub button_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub salary: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub button_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamPrepRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub conducting_body: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub eligibility: String,
    #[serde(default)]
    pub application_process: String,
    #[serde(default)]
    pub exam_date: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub fee: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub syllabus: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub button_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockInterviewRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default, deserialize_with = "de_string_list")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub button_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleQuestionRecord {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub milestone: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timeframe: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub average_salary: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub entry_salary: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub senior_salary: String,
    #[serde(default)]
    pub growth_outlook: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyMaterialRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub material_type: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub cost: String,
    #[serde(default, deserialize_with = "de_stringy")]
    pub time_to_complete: String,
    #[serde(default)]
    pub button_text: String,
}

/// One structured item in a category's content list. The variant is fixed by
/// the category a record was decoded for; serialization is transparent so
/// responses carry plain objects.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ContentRecord {
    Course(CourseRecord),
    Job(JobRecord),
    ExamPrep(ExamPrepRecord),
    MockInterview(MockInterviewRecord),
    SampleQuestion(SampleQuestionRecord),
    Progress(ProgressRecord),
    Trend(TrendRecord),
    Salary(SalaryRecord),
    StudyMaterial(StudyMaterialRecord),
}

/// Decodes raw JSON array items into typed records for the category.
/// Undecodable items (non-objects, wildly wrong shapes) are skipped.
pub fn decode_records(category: ContentCategory, values: Vec<Value>) -> Vec<ContentRecord> {
    values
        .into_iter()
        .filter_map(|value| match decode_one(category, value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("skipping undecodable {category} record: {e}");
                None
            }
        })
        .collect()
}

fn decode_one(category: ContentCategory, value: Value) -> Result<ContentRecord, serde_json::Error> {
    Ok(match category {
        ContentCategory::Courses => ContentRecord::Course(serde_json::from_value(value)?),
        ContentCategory::Jobs => ContentRecord::Job(serde_json::from_value(value)?),
        ContentCategory::ExamHelper => ContentRecord::ExamPrep(serde_json::from_value(value)?),
        ContentCategory::MockInterview => {
            ContentRecord::MockInterview(serde_json::from_value(value)?)
        }
        ContentCategory::SampleQuestions => {
            ContentRecord::SampleQuestion(serde_json::from_value(value)?)
        }
        ContentCategory::Progress => ContentRecord::Progress(serde_json::from_value(value)?),
        ContentCategory::Trends => ContentRecord::Trend(serde_json::from_value(value)?),
        ContentCategory::Salary => ContentRecord::Salary(serde_json::from_value(value)?),
        ContentCategory::StudyMaterial => {
            ContentRecord::StudyMaterial(serde_json::from_value(value)?)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_decodes_with_numeric_fee() {
        let values = vec![serde_json::json!({
            "title": "Advanced SQL",
            "duration": "6 weeks",
            "provider": "Coursera",
            "fee": 4150,
            "url": "https://example.com",
            "buttonText": "Enroll Now"
        })];
        let records = decode_records(ContentCategory::Courses, values);
        assert_eq!(records.len(), 1);
        match &records[0] {
            ContentRecord::Course(course) => {
                assert_eq!(course.fee, "4150");
                assert_eq!(course.button_text, "Enroll Now");
            }
            other => panic!("expected course record, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let values = vec![serde_json::json!({ "title": "Data Analyst" })];
        let records = decode_records(ContentCategory::Jobs, values);
        assert_eq!(records.len(), 1);
        match &records[0] {
            ContentRecord::Job(job) => {
                assert_eq!(job.title, "Data Analyst");
                assert!(job.salary.is_empty());
                assert!(job.location.is_empty());
            }
            other => panic!("expected job record, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_items_are_skipped() {
        let values = vec![
            serde_json::json!("just a string"),
            serde_json::json!({ "title": "Real entry" }),
            serde_json::json!(42),
        ];
        let records = decode_records(ContentCategory::Trends, values);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_mock_interview_topics_accept_string_or_list() {
        let values = vec![
            serde_json::json!({ "title": "A", "topics": ["graphs", "dp"] }),
            serde_json::json!({ "title": "B", "topics": "system design" }),
        ];
        let records = decode_records(ContentCategory::MockInterview, values);
        assert_eq!(records.len(), 2);
        match (&records[0], &records[1]) {
            (ContentRecord::MockInterview(a), ContentRecord::MockInterview(b)) => {
                assert_eq!(a.topics, vec!["graphs", "dp"]);
                assert_eq!(b.topics, vec!["system design"]);
            }
            other => panic!("expected mock interview records, got {other:?}"),
        }
    }

    #[test]
    fn test_sample_question_options_are_optional() {
        let values = vec![
            serde_json::json!({
                "subject": "SQL",
                "question": "What does GROUP BY do?",
                "correctAnswer": "Aggregates rows",
                "explanation": "It groups rows sharing a value."
            }),
            serde_json::json!({
                "subject": "SQL",
                "question": "Pick one",
                "options": ["A", "B"],
                "correctAnswer": "A",
                "explanation": ""
            }),
        ];
        let records = decode_records(ContentCategory::SampleQuestions, values);
        assert_eq!(records.len(), 2);
        match &records[0] {
            ContentRecord::SampleQuestion(q) => assert!(q.options.is_none()),
            other => panic!("expected sample question, got {other:?}"),
        }
        match &records[1] {
            ContentRecord::SampleQuestion(q) => {
                assert_eq!(q.options.as_deref(), Some(["A".to_string(), "B".to_string()].as_slice()))
            }
            other => panic!("expected sample question, got {other:?}"),
        }
    }

    #[test]
    fn test_study_material_type_field_rename() {
        let values = vec![serde_json::json!({
            "title": "Designing Data-Intensive Applications",
            "type": "Book",
            "cost": 3200,
            "timeToComplete": 40
        })];
        let records = decode_records(ContentCategory::StudyMaterial, values);
        match &records[0] {
            ContentRecord::StudyMaterial(m) => {
                assert_eq!(m.material_type, "Book");
                assert_eq!(m.cost, "3200");
                assert_eq!(m.time_to_complete, "40");
            }
            other => panic!("expected study material, got {other:?}"),
        }
    }

    #[test]
    fn test_exam_eligibility_object_is_stringified() {
        let values = vec![serde_json::json!({
            "title": "GATE",
            "eligibility": { "details": "Bachelor's degree", "ageLimit": "None" }
        })];
        let records = decode_records(ContentCategory::ExamHelper, values);
        match &records[0] {
            ContentRecord::ExamPrep(exam) => {
                assert!(exam.eligibility.contains("Bachelor's degree"));
            }
            other => panic!("expected exam record, got {other:?}"),
        }
    }

    #[test]
    fn test_serialized_record_is_a_plain_object() {
        let record = ContentRecord::Trend(TrendRecord {
            title: "AI tooling".to_string(),
            description: "desc".to_string(),
            impact: "high".to_string(),
            action: "learn".to_string(),
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["title"], "AI tooling");
        assert!(value.get("Trend").is_none());
    }
}
