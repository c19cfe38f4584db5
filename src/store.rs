//! Todo State Store
//!
//! Shared state container read by the card view. The only write path is
//! [`dispatch`], which runs the fetch and commits reducer output field by field.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::models::Item;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    pub is_loading: bool,
    /// `None` until the first successful fetch
    pub data: Option<Vec<Item>>,
    /// Message of the last failed fetch
    pub error: Option<String>,
}

/// Observable lifecycle of the list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    /// Loading wins, then a recorded error, then the presence of data
    pub fn from_flags(is_loading: bool, has_data: bool, has_error: bool) -> Self {
        match (is_loading, has_error, has_data) {
            (true, _, _) => LoadState::Loading,
            (false, true, _) => LoadState::Failed,
            (false, false, true) => LoadState::Loaded,
            (false, false, false) => LoadState::Idle,
        }
    }
}

/// Actions accepted by [`dispatch`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TodoAction {
    FetchTodos,
}

/// Fetch lifecycle events fed through the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    Pending,
    Fulfilled(Vec<Item>),
    Rejected(String),
}

impl TodoState {
    pub fn reduce(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Pending => {
                self.is_loading = true;
                self.error = None;
            }
            FetchEvent::Fulfilled(items) => {
                self.is_loading = false;
                self.data = Some(items);
            }
            FetchEvent::Rejected(message) => {
                self.is_loading = false;
                self.error = Some(message);
            }
        }
    }

    pub fn load_state(&self) -> LoadState {
        LoadState::from_flags(self.is_loading, self.data.is_some(), self.error.is_some())
    }
}

/// Which store fields differ between two states
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ChangedFields {
    is_loading: bool,
    error: bool,
    data: bool,
}

impl ChangedFields {
    fn between(prev: &TodoState, next: &TodoState) -> Self {
        Self {
            is_loading: prev.is_loading != next.is_loading,
            error: prev.error != next.error,
            data: prev.data != next.data,
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Run an action against the store.
///
/// `FetchTodos` marks the store as loading right away and commits the outcome
/// when the request settles.
pub fn dispatch(store: TodoStore, api_url: &str, action: TodoAction) {
    match action {
        TodoAction::FetchTodos => {
            log::info!("fetching todos from {}", api_url);
            apply(store, FetchEvent::Pending);

            let url = api_url.to_string();
            spawn_local(async move {
                let event = match api::fetch_todos(&url).await {
                    Ok(items) => {
                        log::info!("loaded {} todos", items.len());
                        FetchEvent::Fulfilled(items)
                    }
                    Err(e) => {
                        log::error!("fetch failed: {}", e);
                        FetchEvent::Rejected(e.to_string())
                    }
                };
                apply(store, event);
            });
        }
    }
}

/// Reduce a copy of the current state, then write back only the fields that changed
fn apply(store: TodoStore, event: FetchEvent) {
    let prev = store.with_untracked(|state| state.clone());
    let mut next = prev.clone();
    next.reduce(event);

    let changed = ChangedFields::between(&prev, &next);
    if changed.is_loading {
        store.is_loading().set(next.is_loading);
    }
    if changed.error {
        store.error().set(next.error);
    }
    if changed.data {
        store.data().set(next.data);
    }
}
