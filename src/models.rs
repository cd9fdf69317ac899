//! Frontend Models
//!
//! Data structures matching backend responses. Ids are Mongo `_id` strings.

use reorder_core::OrderedItem;
use serde::{Deserialize, Serialize};

/// Exclusive member shown on the public site in admin-defined order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExclusiveMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default, rename = "image")]
    pub image_url: Option<String>,
}

impl OrderedItem for ExclusiveMember {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

/// Survey question, ordered within its survey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub question: String,
    #[serde(default, rename = "questionType")]
    pub question_type: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl OrderedItem for SurveyQuestion {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Membership directory row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, rename = "membershipId")]
    pub membership_id: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// One page of the membership directory
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MembersPage {
    pub members: Vec<Member>,
    /// Absent when the backend does not count matches
    #[serde(default)]
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reorder_core::{decode_data, ListShape};
    use serde_json::json;

    #[test]
    fn test_exclusive_members_from_envelope() {
        let body = json!({
            "data": { "members": [
                { "_id": "m1", "name": "Ashraf", "designation": "President", "image": "https://cdn/1.jpg" },
                { "_id": "m2", "name": "Rasheed" }
            ]}
        });
        let members: Vec<ExclusiveMember> = ListShape::DataField("members".to_string()).decode(body).unwrap();
        assert_eq!(members[0].designation.as_deref(), Some("President"));
        assert_eq!(members[0].image_url.as_deref(), Some("https://cdn/1.jpg"));
        assert_eq!(members[1].id(), "m2");
        assert!(members[1].designation.is_none());
    }

    #[test]
    fn test_survey_question_defaults() {
        let question: SurveyQuestion = serde_json::from_value(json!({ "_id": "q1", "question": "Age group?" })).unwrap();
        assert_eq!(question.question_type, "");
        assert!(question.options.is_empty());
    }

    #[test]
    fn test_members_page() {
        let body = json!({
            "data": { "members": [{ "_id": "x", "name": "Noor", "membershipId": "KM-001" }], "total": 41 }
        });
        let page: MembersPage = decode_data(body).unwrap();
        assert_eq!(page.total, Some(41));
        assert_eq!(page.members[0].membership_id.as_deref(), Some("KM-001"));
    }

    #[test]
    fn test_members_page_without_total() {
        let page: MembersPage = decode_data(json!({ "data": { "members": [] } })).unwrap();
        assert_eq!(page.total, None);
    }
}
