use leptos::prelude::*;

use super::icon::Glyph;
use crate::content::{BRAND, LOGO_ALT, LOGO_SRC, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white dark:bg-slate-900 border-t border-slate-200 dark:border-slate-700">
            <div class="max-w-6xl mx-auto px-4 py-8">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="flex items-center space-x-2 mb-4 md:mb-0">
                        <img src=LOGO_SRC alt=LOGO_ALT class="w-5 h-5" />
                        <span class="text-sm text-slate-500">
                            {format!(
                                "© {} {BRAND}. Todos los derechos reservados.",
                                env!("BUILD_YEAR"),
                            )}
                        </span>
                    </div>
                    <div class="flex space-x-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=link.label
                                        class="p-2 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800"
                                    >
                                        <Glyph icon=link.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
