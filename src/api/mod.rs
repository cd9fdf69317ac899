//! Admin API
//!
//! Endpoint definitions and thin REST wrappers per dashboard screen.
//! Reorder traffic goes through `reorder_core::HttpBackend`; everything
//! else returns `Result<T, String>` for direct display.

mod directory;
mod members;
mod surveys;

pub use directory::list_members;
pub use members::{delete_exclusive_member, exclusive_members_endpoint, ExclusiveMembersController};
pub use surveys::{list_surveys, survey_questions_endpoint, SurveyQuestionsController};
