//! UI Components
//!
//! Leptos components for the todo card grid.

mod todo_card;
mod pagination_bar;
mod todo_cards;

pub use todo_card::TodoCard;
pub use pagination_bar::PaginationBar;
pub use todo_cards::TodoCards;
