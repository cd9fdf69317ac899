//! Survey Questions Screen
//!
//! Pick a survey, then drag its questions into order. Each survey gets its
//! own controller; results from a previously selected survey are ignored.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DropResult;
use reorder_core::{HttpBackend, Notification};

use super::reorder_list::{to_drag_result, ListRow, ReorderList};
use crate::api::{self, SurveyQuestionsController};
use crate::context::AppContext;
use crate::models::{Survey, SurveyQuestion};
use crate::store::{store_toast, use_admin_store};

impl From<SurveyQuestion> for ListRow {
    fn from(question: SurveyQuestion) -> Self {
        let subtitle = match (question.question_type.is_empty(), question.options.len()) {
            (true, 0) => None,
            (true, n) => Some(format!("{} options", n)),
            (false, 0) => Some(question.question_type),
            (false, n) => Some(format!("{} · {} options", question.question_type, n)),
        };
        ListRow {
            key: question.id,
            title: question.question,
            subtitle,
            image: None,
        }
    }
}

#[component]
pub fn SurveyQuestionsScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_admin_store();
    let toast_ms = ctx.config.toast_duration_ms;

    let (surveys, set_surveys) = signal(Vec::<Survey>::new());
    let (selected, set_selected) = signal(None::<String>);
    let (questions, set_questions) = signal(Vec::<SurveyQuestion>::new());
    let (loading, set_loading) = signal(false);

    let client = StoredValue::new_local(ctx.api());
    let options = StoredValue::new(ctx.config.reorder_options("survey questions"));
    let controller = StoredValue::new_local(None::<Rc<SurveyQuestionsController>>);

    // Load surveys on mount, selecting the first one
    Effect::new(move |_| {
        let api = client.get_value();
        spawn_local(async move {
            match api::list_surveys(&api).await {
                Ok(loaded) => {
                    if selected.get_untracked().is_none() {
                        set_selected.set(loaded.first().map(|s| s.id.clone()));
                    }
                    set_surveys.set(loaded);
                }
                Err(e) => {
                    log::warn!("[SURVEY] list failed: {}", e);
                    store_toast(store, Notification::failure("Failed to load surveys"), toast_ms);
                }
            }
        });
    });

    // New controller per selected survey
    Effect::new(move |_| {
        let Some(survey_id) = selected.get() else {
            controller.set_value(None);
            set_questions.set(Vec::new());
            return;
        };
        log::debug!("[SURVEY] selected {}", survey_id);

        let ctrl = Rc::new(SurveyQuestionsController::new(
            HttpBackend::new(client.get_value(), api::survey_questions_endpoint(&survey_id)),
            move |n: Notification| store_toast(store, n, toast_ms),
            options.get_value(),
        ));
        let observed = survey_id.clone();
        ctrl.on_change(move |items: &[SurveyQuestion]| {
            if selected.get_untracked().as_deref() == Some(observed.as_str()) {
                set_questions.set(items.to_vec());
            }
        });
        controller.set_value(Some(Rc::clone(&ctrl)));
        set_questions.set(Vec::new());
        set_loading.set(true);

        spawn_local(async move {
            let _ = ctrl.load().await;
            if selected.get_untracked().as_deref() == Some(survey_id.as_str()) {
                set_loading.set(false);
            }
        });
    });

    let on_drop = Callback::new(move |result: DropResult| {
        let Some(ctrl) = controller.get_value() else { return };
        spawn_local(async move {
            let outcome = ctrl.handle_drop(to_drag_result(result)).await;
            log::debug!("[SURVEY] drop outcome: {:?}", outcome);
        });
    });

    let rows = Signal::derive(move || questions.get().into_iter().map(ListRow::from).collect::<Vec<_>>());

    view! {
        <div class="screen survey-questions">
            <h2>"Survey Questions"</h2>
            <label class="survey-picker">
                "Survey "
                <select
                    prop:value=move || selected.get().unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_selected.set((!value.is_empty()).then_some(value));
                    }
                >
                    <For
                        each=move || surveys.get()
                        key=|survey| survey.id.clone()
                        children=move |survey| {
                            view! { <option value=survey.id.clone()>{survey.title.clone()}</option> }
                        }
                    />
                </select>
            </label>
            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>
            <ReorderList
                rows=rows
                on_drop=on_drop
                empty_text="This survey has no questions."
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(question_type: &str, options: &[&str]) -> SurveyQuestion {
        SurveyQuestion {
            id: "q1".to_string(),
            question: "Which emirate?".to_string(),
            question_type: question_type.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[test]
    fn test_question_row_subtitle() {
        assert_eq!(ListRow::from(question("", &[])).subtitle, None);
        assert_eq!(ListRow::from(question("text", &[])).subtitle.as_deref(), Some("text"));
        assert_eq!(
            ListRow::from(question("choice", &["Dubai", "Sharjah"])).subtitle.as_deref(),
            Some("choice · 2 options")
        );
    }
}
