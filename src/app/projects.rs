use leptos::prelude::*;

use super::icon::Glyph;
use crate::{
    content::{Icon, Project, PROJECTS},
    portfolio::Section,
};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Proyectos Destacados"</h2>
                    <p class="text-slate-500 max-w-2xl mx-auto">
                        "Algunos de mis trabajos recientes que demuestran mis habilidades y experiencia"
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-900 p-6 hover:shadow-xl transition-all duration-300 hover:-translate-y-1">
            <div class="flex items-center justify-between mb-2">
                <div class="flex items-center space-x-3">
                    <div class="p-2 bg-sky-500/10 rounded-lg">
                        <Glyph icon=project.icon />
                    </div>
                    <h3 class="text-lg font-semibold">{project.title}</h3>
                </div>
                <div class="flex space-x-2 opacity-0 group-hover:opacity-100 transition-opacity">
                    <a
                        href=project.repo
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Source code"
                        class="p-2 hover:scale-110 transition-transform"
                    >
                        <Glyph icon=Icon::Github />
                    </a>
                    <a
                        href=project.demo
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Live demo"
                        class="p-2 hover:scale-110 transition-transform"
                    >
                        <Glyph icon=Icon::ExternalLink />
                    </a>
                </div>
            </div>
            <p class="text-sm text-slate-500 mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-2">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="rounded-md px-2 py-1 bg-slate-200 dark:bg-slate-700 text-xs">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
