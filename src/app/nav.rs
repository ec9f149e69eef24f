use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use super::{activate, icon::Glyph, use_page_state};
use crate::{
    content::{Icon, BRAND, LOGO_ALT, LOGO_SRC},
    portfolio::{ScrollMetrics, Section},
};

pub fn scroll_to(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section {section}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = window();
    let offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = document().document_element()?.scroll_height() as f64;
    Some(ScrollMetrics {
        offset,
        viewport_height,
        document_height,
    })
}

/// Top edge of each section relative to the viewport, in page order.
pub fn section_tops() -> Vec<(Section, f64)> {
    let document = document();
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            document
                .get_element_by_id(section.id())
                .map(|el| (section, el.get_bounding_client_rect().top()))
        })
        .collect()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let state = use_page_state();
    let scrolled = Memo::new(move |_| state.with(|s| s.nav().scrolled()));
    let active = Memo::new(move |_| state.with(|s| s.nav().active()));
    let menu_open = Memo::new(move |_| state.with(|s| s.nav().menu_open()));

    view! {
        <nav class=move || {
            if scrolled.get() {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-white/80 dark:bg-slate-900/80 backdrop-blur-md shadow-lg"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-2">
                        <img src=LOGO_SRC alt=LOGO_ALT class="w-6 h-6" />
                        <span class="font-bold text-xl">{BRAND}</span>
                    </div>
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| activate(state, section)
                                        class=move || {
                                            if active.get() == section {
                                                "transition-colors hover:text-sky-500 text-sky-600 font-semibold"
                                            } else {
                                                "transition-colors hover:text-sky-500 text-slate-500"
                                            }
                                        }
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden inline-flex items-center gap-1 p-2 rounded-md hover:bg-slate-200 dark:hover:bg-slate-700"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| state.update(|s| s.toggle_menu())
                    >
                        {move || {
                            let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                            view! { <Glyph icon class="w-6 h-6" /> }
                        }}
                        <span class="text-sm font-medium">"Menú"</span>
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white dark:bg-slate-900 border-t">
                    <div class="px-4 py-2 space-y-2">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| activate(state, section)
                                        class="block w-full text-left px-3 py-2 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
