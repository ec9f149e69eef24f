use leptos::prelude::*;

use crate::content::Icon;

/// Inline outline icon drawn in the current text color. Decorative, so hidden
/// from screen readers; size it with `class` (defaults to `w-5 h-5`).
#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if class.is_empty() { "w-5 h-5" } else { class };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().copied().map(|d| view! { <path d=d /> }).collect_view()}
        </svg>
    }
}
