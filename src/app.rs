//! KMCC Admin App
//!
//! Tab bar over three screens. All screens stay mounted so list state and
//! in-flight saves survive tab switches.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ExclusiveMembersScreen, MembersDirectoryScreen, SurveyQuestionsScreen, TabBar, ToastHost};
use crate::context::AppContext;
use crate::store::{AdminState, AdminStateStoreFields, Tab};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::from_build_env();
    log::info!("[APP] KMCC admin starting, api={}", ctx.config.api_base_url);
    provide_context(ctx);

    let store = Store::new(AdminState::default());
    provide_context(store);

    let display_for = move |tab: Tab| move || if store.active_tab().get() == tab { "block" } else { "none" };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"KMCC Admin"</h1>
                <TabBar />
            </header>
            <main class="main-content">
                <section style:display=display_for(Tab::ExclusiveMembers)>
                    <ExclusiveMembersScreen />
                </section>
                <section style:display=display_for(Tab::SurveyQuestions)>
                    <SurveyQuestionsScreen />
                </section>
                <section style:display=display_for(Tab::Directory)>
                    <MembersDirectoryScreen />
                </section>
            </main>
            <ToastHost />
        </div>
    }
}
