//! Survey API

use reorder_core::{ApiClient, CollectionEndpoint, HttpBackend, ListShape, ReorderController};

use crate::models::{Survey, SurveyQuestion};

pub type SurveyQuestionsController = ReorderController<SurveyQuestion, HttpBackend<SurveyQuestion>>;

pub fn survey_questions_endpoint(survey_id: &str) -> CollectionEndpoint {
    CollectionEndpoint::new(
        format!("surveys/{}/questions", survey_id),
        "questionIds",
        ListShape::Data,
    )
}

pub async fn list_surveys(client: &ApiClient) -> Result<Vec<Survey>, String> {
    let value = client.get_json("surveys", &[]).await.map_err(|e| e.to_string())?;
    ListShape::Data.decode(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_endpoint_is_scoped_to_survey() {
        let endpoint = survey_questions_endpoint("s42");
        assert_eq!(endpoint.list_path, "surveys/s42/questions");
        assert_eq!(endpoint.reorder_path, "surveys/s42/questions/reorder");
        assert_eq!(endpoint.ids_field, "questionIds");
    }
}
