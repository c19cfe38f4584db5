//! Todo Cards Component
//!
//! Fetches the list once on mount, pages it six at a time and renders the current
//! page as a card grid. Removing a card only shrinks the visible slice.

use leptos::prelude::*;

use crate::components::{PaginationBar, TodoCard};
use crate::config::use_config;
use crate::format::today_string;
use crate::models::Item;
use crate::pagination::{page_count, Paginator};
use crate::store::{dispatch, use_todo_store, LoadState, TodoAction, TodoStateStoreFields, TodoStore};

/// Which of the three views to show
#[derive(Debug, Clone, Copy, PartialEq)]
enum RenderOutcome {
    Loading,
    Grid,
    NoData { failed: bool },
}

/// Loading wins; otherwise any visible card shows the grid, even one left over
/// from before a failed refetch.
fn render_outcome(state: LoadState, visible_len: usize) -> RenderOutcome {
    match state {
        LoadState::Loading => RenderOutcome::Loading,
        _ if visible_len > 0 => RenderOutcome::Grid,
        LoadState::Failed => RenderOutcome::NoData { failed: true },
        LoadState::Idle | LoadState::Loaded => RenderOutcome::NoData { failed: false },
    }
}

/// Apply a paginator step against the current source list, notifying only on change
fn navigate(
    store: TodoStore,
    paginator: RwSignal<Paginator>,
    step: impl FnOnce(&mut Paginator, Option<&[Item]>) -> bool,
) {
    store.data().with_untracked(|data| {
        paginator.maybe_update(|p| step(p, data.as_deref()));
    });
}

#[component]
pub fn TodoCards() -> impl IntoView {
    let store = use_todo_store();
    let config = use_config();
    let paginator = RwSignal::new(Paginator::new());

    // Fetch on mount
    let api_url = config.api_url.clone();
    Effect::new(move |_| {
        dispatch(store, &api_url, TodoAction::FetchTodos);
    });

    // Re-slice when the fetched list changes
    Effect::new(move |_| {
        store.data().with(|data| {
            paginator.maybe_update(|p| {
                p.resync(data.as_deref());
                data.is_some()
            });
        });
    });

    let go_to = move |page: usize| {
        navigate(store, paginator, |p, source| p.go_to(page, source));
        log::debug!("page {}", paginator.with_untracked(|p| p.page()));
    };
    let prev = move |_: ()| navigate(store, paginator, |p, source| p.prev(source));
    let next = move |_: ()| navigate(store, paginator, |p, source| p.next(source));
    let remove = move |id: i64| {
        let removed = paginator
            .try_maybe_update(|p| {
                let removed = p.remove(id);
                (removed, removed)
            })
            .unwrap_or(false);
        if removed {
            log::debug!("removed card {} from page {}", id, paginator.with_untracked(|p| p.page()));
        }
    };

    let page = Signal::derive(move || paginator.with(|p| p.page()));
    let total_pages = Signal::derive(move || page_count(store.data().with(|data| data.as_ref().map(Vec::len))));
    let can_prev = Signal::derive(move || paginator.with(|p| p.can_prev()));
    let can_next = Signal::derive(move || paginator.with(|p| p.can_next()));

    let image_base = config.image_base;

    move || {
        let state = LoadState::from_flags(
            store.is_loading().get(),
            store.data().with(Option::is_some),
            store.error().with(Option::is_some),
        );
        let visible = paginator.with(|p| p.visible().to_vec());

        match render_outcome(state, visible.len()) {
            RenderOutcome::Loading => return view! { <h1>"Loading..."</h1> }.into_any(),
            RenderOutcome::NoData { failed } => {
                let no_data_class = if failed { "no-data failed" } else { "no-data" };
                return view! { <p class=no_data_class>"No data available"</p> }.into_any();
            }
            RenderOutcome::Grid => {}
        }

        // One date per render pass, shared by every card
        let rendered_on = today_string();

        view! {
            <div class="todo-cards">
                <div class="card-grid">
                    {visible
                        .into_iter()
                        .map(|item| view! {
                            <TodoCard
                                item=item
                                image_base=image_base.clone()
                                rendered_on=rendered_on.clone()
                                on_remove=remove
                            />
                        })
                        .collect_view()}
                </div>
                <PaginationBar
                    page=page
                    total_pages=total_pages
                    can_prev=can_prev
                    can_next=can_next
                    on_prev=prev
                    on_next=next
                    on_select=go_to
                />
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_hides_stale_cards() {
        assert_eq!(render_outcome(LoadState::Loading, 6), RenderOutcome::Loading);
        assert_eq!(render_outcome(LoadState::Loading, 0), RenderOutcome::Loading);
    }

    #[test]
    fn test_loaded_page_shows_grid() {
        assert_eq!(render_outcome(LoadState::Loaded, 6), RenderOutcome::Grid);
        assert_eq!(render_outcome(LoadState::Loaded, 1), RenderOutcome::Grid);
    }

    #[test]
    fn test_page_emptied_by_removal_shows_no_data() {
        assert_eq!(render_outcome(LoadState::Loaded, 0), RenderOutcome::NoData { failed: false });
    }

    #[test]
    fn test_empty_fetch_and_idle_show_no_data() {
        assert_eq!(render_outcome(LoadState::Loaded, 0), RenderOutcome::NoData { failed: false });
        assert_eq!(render_outcome(LoadState::Idle, 0), RenderOutcome::NoData { failed: false });
    }

    #[test]
    fn test_failed_fetch_marks_no_data() {
        assert_eq!(render_outcome(LoadState::Failed, 0), RenderOutcome::NoData { failed: true });
    }

    #[test]
    fn test_failed_refetch_keeps_visible_cards() {
        assert_eq!(render_outcome(LoadState::Failed, 3), RenderOutcome::Grid);
    }
}
