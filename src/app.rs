//! Todo Cards Frontend App
//!
//! Root component: owns the shared store and config and hands both to the card view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoCards;
use crate::config::AppConfig;
use crate::store::{TodoState, TodoStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // The store outlives TodoCards, so a fetch settling after unmount writes nowhere stale
    let store: TodoStore = Store::new(TodoState::default());

    provide_context(config);
    provide_context(store);

    view! {
        <main class="main-content">
            <TodoCards />
        </main>
    }
}
