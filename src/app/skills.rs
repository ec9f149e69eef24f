use leptos::prelude::*;

use super::{icon::Glyph, use_page_state};
use crate::{
    content::{skills_in, Category, Skill},
    portfolio::Section,
};

#[component]
pub fn Skills() -> impl IntoView {
    let state = use_page_state();
    let selected = Memo::new(move |_| state.with(|s| s.tabs().selected()));

    view! {
        <section id=Section::Skills.id() class="py-20 px-4 bg-white/50 dark:bg-slate-900/50">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Habilidades Técnicas"</h2>
                    <p class="text-slate-500 max-w-2xl mx-auto">
                        "Tecnologías y herramientas con las que trabajo diariamente"
                    </p>
                </div>
                <div class="max-w-4xl mx-auto">
                    <div
                        role="tablist"
                        class="grid w-full grid-cols-3 rounded-md bg-slate-200 dark:bg-slate-800 p-1 mb-6"
                    >
                        {Category::ALL
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <button
                                        role="tab"
                                        aria-selected=move || (selected.get() == category).to_string()
                                        class=move || {
                                            if selected.get() == category {
                                                "rounded-sm px-3 py-1.5 text-sm font-medium bg-white dark:bg-slate-950 shadow"
                                            } else {
                                                "rounded-sm px-3 py-1.5 text-sm font-medium text-slate-500"
                                            }
                                        }
                                        on:click=move |_| state.maybe_update(|s| s.select_tab(category))
                                    >
                                        {category.name()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    {move || {
                        let category = selected.get();
                        view! {
                            <div role="tabpanel" aria-label=category.name() class="space-y-6">
                                {skills_in(category)
                                    .iter()
                                    .map(|skill| view! { <SkillBar skill /> })
                                    .collect_view()}
                            </div>
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let state = use_page_state();
    let value = Memo::new(move |_| {
        state
            .with(|s| s.progress().value(skill.name))
            .unwrap_or_else(|e| {
                log::warn!("{e}");
                0
            })
    });

    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-2">
                    <Glyph icon=skill.icon />
                    <span class="font-medium">{skill.name}</span>
                </div>
                <span class="text-sm text-slate-500">{format!("{}%", skill.level)}</span>
            </div>
            <div
                role="progressbar"
                aria-label=skill.name
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || value.get().to_string()
                class="h-2 w-full overflow-hidden rounded-full bg-slate-200 dark:bg-slate-700"
            >
                // the fill animates through the CSS width transition
                <div
                    class="h-full rounded-full bg-sky-500 transition-all duration-1000 ease-out"
                    style:width=move || format!("{}%", value.get())
                ></div>
            </div>
        </div>
    }
}
