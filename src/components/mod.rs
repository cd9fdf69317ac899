//! UI Components
//!
//! Dashboard screens and the reusable pieces they share.

mod delete_confirm_button;
mod drop_zone;
mod exclusive_members;
mod members_directory;
mod reorder_list;
mod survey_questions;
mod tab_bar;
mod toast_host;

pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_zone::DropZone;
pub use exclusive_members::ExclusiveMembersScreen;
pub use members_directory::MembersDirectoryScreen;
pub use survey_questions::SurveyQuestionsScreen;
pub use tab_bar::TabBar;
pub use toast_host::ToastHost;
