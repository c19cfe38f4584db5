//! Pagination Bar Component
//!
//! Prev / page numbers / Next controls below the card grid.

use leptos::prelude::*;

#[component]
pub fn PaginationBar(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] can_prev: Signal<bool>,
    #[prop(into)] can_next: Signal<bool>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-bar">
            <button
                class="page-nav-btn"
                disabled=move || !can_prev.get()
                on:click=move |_| on_prev.run(())
            >
                "← Prev"
            </button>
            <div class="page-numbers">
                <For
                    each=move || 1..=total_pages.get()
                    key=|n| *n
                    children=move |n| {
                        let btn_class = move || {
                            if page.get() == n { "page-btn active" } else { "page-btn" }
                        };
                        view! {
                            <button class=btn_class on:click=move |_| on_select.run(n)>
                                {n}
                            </button>
                        }
                    }
                />
            </div>
            <button
                class="page-nav-btn"
                disabled=move || !can_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next →"
            </button>
        </div>
    }
}
