use leptos::prelude::*;

use super::{activate, icon::Glyph, use_page_state};
use crate::{
    content::{Icon, SOCIAL_LINKS},
    portfolio::Section,
};

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_page_state();

    view! {
        <section
            id=Section::Home.id()
            class="min-h-screen flex items-center justify-center px-4 pt-16"
        >
            <div class="text-center max-w-4xl mx-auto">
                <div class="mb-8">
                    <div class="inline-flex items-center justify-center w-20 h-20 bg-gradient-to-br from-sky-600 to-sky-400 rounded-full mb-6 animate-pulse">
                        <Glyph icon=Icon::Zap class="w-10 h-10 text-white" />
                    </div>
                    <h1 class="text-4xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-sky-600 to-sky-400 bg-clip-text text-transparent">
                        "Hola, Soy Desarrollador Web"
                    </h1>
                    <p class="text-xl text-slate-500 mb-8 max-w-2xl mx-auto">
                        "Creo experiencias digitales modernas y atractivas con las últimas tecnologías web. Apasionado por el código limpio y el diseño intuitivo."
                    </p>
                </div>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <button
                        class="group inline-flex items-center justify-center px-6 py-3 rounded-md bg-sky-600 hover:bg-sky-700 text-white font-medium transition-colors"
                        on:click=move |_| activate(state, Section::Projects)
                    >
                        "Ver Proyectos"
                        <Glyph
                            icon=Icon::ChevronDown
                            class="w-4 h-4 ml-2 group-hover:translate-y-1 transition-transform"
                        />
                    </button>
                    <button
                        class="px-6 py-3 rounded-md border border-slate-300 dark:border-slate-600 hover:bg-slate-100 dark:hover:bg-slate-800 font-medium transition-colors"
                        on:click=move |_| activate(state, Section::Contact)
                    >
                        "Contactarme"
                    </button>
                </div>
                <div class="flex justify-center space-x-6">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="p-2 rounded-md text-xl hover:scale-110 transition-transform"
                                >
                                    <Glyph icon=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
