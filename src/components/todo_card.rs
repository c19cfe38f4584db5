//! Todo Card Component
//!
//! One card in the grid: id header, text, render date, thumbnail and a remove button.

use leptos::prelude::*;

use crate::format::{image_alt, image_url};
use crate::models::Item;

/// # Arguments
/// * `rendered_on` - Date string shared by every card of the same render pass
/// * `on_remove` - Called with the item id when the ✕ button is clicked
#[component]
pub fn TodoCard(
    item: Item,
    #[prop(into)] image_base: String,
    #[prop(into)] rendered_on: String,
    #[prop(into)] on_remove: Callback<i64>,
) -> impl IntoView {
    let id = item.id;

    view! {
        <div class="todo-card">
            <button
                class="card-remove-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(id);
                }
            >
                "✕"
            </button>
            <h2 class="card-heading">{format!("User ID: {}", id)}</h2>
            <p class="card-text">{format!("Title: {}", item.title)}</p>
            <p class="card-text">{format!("Body: {}", item.body)}</p>
            <p class="card-date">{format!("Date: {}", rendered_on)}</p>
            <img
                class="card-image"
                src=image_url(&image_base, id)
                alt=image_alt(id)
            />
        </div>
    }
}
