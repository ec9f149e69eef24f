use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
};

use super::{icon::Glyph, timers::Timers, use_page_state};
use crate::{
    content::Icon,
    portfolio::{Field, LocalSubmitter, Section, SubmitError},
};

#[component]
pub fn Contact() -> impl IntoView {
    let state = use_page_state();
    let confirmed = Memo::new(move |_| state.with(|s| s.contact().is_confirmed()));

    view! {
        <section id=Section::Contact.id() class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Contacto"</h2>
                    <p class="text-slate-500 max-w-2xl mx-auto">
                        "¿Tienes un proyecto en mente? Me encantaría saber de ti"
                    </p>
                </div>
                <div class="max-w-2xl mx-auto rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-900 p-6">
                    <h3 class="text-xl font-semibold">"Envíame un mensaje"</h3>
                    <p class="text-sm text-slate-500 mb-6">"Responderé tan pronto como sea posible"</p>
                    {move || {
                        if confirmed.get() {
                            Either::Left(view! { <Confirmation /> })
                        } else {
                            Either::Right(view! { <MessageForm /> })
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <div class="text-center py-8" role="status">
            <div class="inline-flex items-center justify-center w-16 h-16 bg-green-100 dark:bg-green-900 rounded-full mb-4">
                <Glyph icon=Icon::Mail class="w-8 h-8 text-green-600 dark:text-green-400" />
            </div>
            <h3 class="text-lg font-semibold mb-2">"¡Mensaje enviado!"</h3>
            <p class="text-slate-500">"Gracias por contactarme. Te responderé pronto."</p>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let state = use_page_state();
    let timers = expect_context::<Timers>();
    let error = Memo::new(move |_| state.with(|s| s.contact().error().map(SubmitError::notice)));

    let field_value = move |field: Field| state.with(|s| s.contact().draft().get(field).to_string());
    let on_input = move |field: Field| {
        move |ev: Event| {
            let value = event_target_value(&ev);
            state.update(|s| {
                s.edit(field, value);
            });
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match state.try_update(|s| s.submit(&LocalSubmitter)) {
            Some(Ok(deferred)) => timers.start(state, deferred),
            Some(Err(e)) => log::warn!("contact form not sent: {e}"),
            None => {}
        }
    };

    let input_class = "w-full px-4 py-2 rounded-md border border-slate-300 dark:border-slate-600 bg-transparent focus:outline-none focus:ring-2 focus:ring-sky-500";

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <input
                type="text"
                name="name"
                placeholder="Tu nombre"
                required
                class=input_class
                prop:value=move || field_value(Field::Name)
                on:input=on_input(Field::Name)
            />
            <input
                type="email"
                name="email"
                placeholder="Tu email"
                required
                class=input_class
                prop:value=move || field_value(Field::Email)
                on:input=on_input(Field::Email)
            />
            <textarea
                name="message"
                placeholder="Tu mensaje"
                rows="4"
                required
                class=input_class
                prop:value=move || field_value(Field::Message)
                on:input=on_input(Field::Message)
            ></textarea>
            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! {
                            <p class="text-sm text-red-500" role="alert">
                                {msg}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                class="w-full px-4 py-2 rounded-md bg-sky-600 hover:bg-sky-700 text-white font-medium transition-colors"
            >
                "Enviar Mensaje"
            </button>
        </form>
    }
}
