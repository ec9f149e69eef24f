mod contact;
mod footer;
mod hero;
mod icon;
mod nav;
mod projects;
mod skills;
mod timers;

use leptos::{either::Either, ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_throttle_fn, use_window};

use crate::{
    content::SKILLS,
    portfolio::{PortfolioView, Section},
};

use contact::Contact;
use footer::Footer;
use hero::Hero;
use nav::{scroll_metrics, scroll_to, section_tops, NavBar};
use projects::Projects;
use skills::Skills;
use timers::Timers;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/svg+xml" href="/portfolio-logo.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

const SPY_INTERVAL_MS: f64 = 100.0;

/// Page state shared by every region through context.
pub type PageState = RwSignal<PortfolioView>;

fn use_page_state() -> PageState {
    expect_context::<PageState>()
}

/// Scroll to a section and make it the active one.
fn activate(state: PageState, section: Section) {
    scroll_to(section);
    state.update(|s| s.activate(section));
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match PortfolioView::new(&SKILLS) {
        Ok(page) => Either::Left(view! { <Portfolio page /> }),
        Err(e) => {
            log::error!("couldn't build page state: {e}");
            Either::Right(view! {
                <p class="p-8 text-center text-red-500">"Something went wrong loading this page."</p>
            })
        }
    }
}

#[component]
fn Portfolio(page: PortfolioView) -> impl IntoView {
    let state: PageState = RwSignal::new(page);
    let timers = Timers::default();
    provide_context(state);
    provide_context(timers.clone());

    // effects only run in the browser, so timers are never started during SSR
    Effect::watch(
        || (),
        {
            let timers = timers.clone();
            move |_, _, _| {
                let hash = window().location().hash().unwrap_or_default();
                match Section::from_hash(&hash) {
                    Some(Ok(section)) => state.update(|s| s.activate(section)),
                    Some(Err(e)) => log::debug!("ignoring location hash: {e}"),
                    None => {}
                }
                match state.try_update(|s| s.mount()) {
                    Some(Ok(deferred)) => timers.start(state, deferred),
                    Some(Err(e)) => log::warn!("{e}"),
                    None => {}
                }
            }
        },
        true,
    );

    on_cleanup(move || {
        let pending = state.try_update(|s| s.unmount()).unwrap_or_default();
        timers.cancel(&pending);
    });

    // section geometry is measured at most once per SPY_INTERVAL_MS; the
    // trailing call still sees where the scroll came to rest
    let spy = use_throttle_fn(
        move || {
            if let Some(metrics) = scroll_metrics() {
                let tops = section_tops();
                state.maybe_update(|s| s.spy(&metrics, &tops));
            }
        },
        SPY_INTERVAL_MS,
    );

    // removed automatically when this component's owner is cleaned up
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        match window().scroll_y() {
            Ok(offset) => state.maybe_update(|s| s.observe_scroll(offset)),
            Err(e) => log::debug!("couldn't read scroll offset: {e:?}"),
        }
        spy();
    });

    view! {
        <Title text="Inicio" />
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-slate-100 dark:from-slate-900 dark:to-slate-800 text-slate-900 dark:text-slate-100">
            <NavBar />
            <Hero />
            <Projects />
            <Skills />
            <Contact />
            <Footer />
        </div>
    }
}
