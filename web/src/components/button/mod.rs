mod classes;
mod config;
mod pulse;

use leptos::html;
use leptos::prelude::*;

use crate::utils::{BrowserScheduler, LastCallback, Scheduler, ShowTransition, TransitionTimings};

pub use classes::{button_type, is_disabled_attr, ButtonClassFlags, ButtonKind};
pub use config::{ButtonConfig, CLICKED_TIMEOUT_MS, LOADING_CLOSE_DURATION_MS};
pub use pulse::{Pulse, PulseState};

stylance::import_crate_style!(styles, "src/components/button/button.module.css");

/// Runs the caller's handler unless disabled, then (re)starts the pulse.
pub fn activate<S: Scheduler>(is_disabled: bool, on_click: Option<Callback<()>>, pulse: &Pulse<S>) {
    if !is_disabled {
        if let Some(on_click) = on_click {
            on_click.run(());
        }
    }

    pulse.trigger();
}

#[component]
pub fn Button(
    children: Children,
    #[prop(into, optional)] id: MaybeProp<String>,
    #[prop(into, optional)] class: MaybeProp<String>,
    #[prop(into, optional)] style: MaybeProp<String>,
    #[prop(into, optional)] aria_label: MaybeProp<String>,
    /// Associates the button with a form elsewhere in the document.
    #[prop(into, optional)]
    for_form_id: MaybeProp<String>,
    #[prop(optional)] kind: Option<ButtonKind>,
    #[prop(into, default = false.into())] is_submit: Signal<bool>,
    #[prop(into, default = false.into())] is_primary: Signal<bool>,
    #[prop(into, default = false.into())] is_simple: Signal<bool>,
    #[prop(into, default = false.into())] is_text: Signal<bool>,
    /// Leaving this unset omits the loading classes entirely.
    #[prop(into, optional)]
    is_loading: MaybeProp<bool>,
    #[prop(into, default = false.into())] is_disabled: Signal<bool>,
    #[prop(into, default = false.into())] is_round: Signal<bool>,
    #[prop(into, default = false.into())] is_small: Signal<bool>,
    #[prop(into, default = false.into())] is_destructive: Signal<bool>,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
) -> impl IntoView {
    let config = use_context::<ButtonConfig>().unwrap_or_default();

    let pulse = Pulse::new(BrowserScheduler, config.clicked_timeout());
    let is_clicked = pulse.is_active();

    let loading = ShowTransition::new(
        BrowserScheduler,
        is_loading.get_untracked().unwrap_or(false),
        TransitionTimings::default().with_close_duration(config.loading_close_duration()),
    );
    let should_render_loading = loading.should_render();
    let is_loading_visible = loading.has_open_class();
    Effect::new(move |_| loading.set_active(is_loading.get().unwrap_or(false)));

    let handle_click = LastCallback::new(move |()| {
        activate(is_disabled.get_untracked(), on_click, &pulse);
    });

    let class_name = move || {
        ButtonClassFlags {
            is_simple: is_simple.get(),
            is_small: is_small.get(),
            is_primary: is_primary.get(),
            is_disabled: is_disabled.get(),
            is_loading: is_loading.get(),
            is_round: is_round.get(),
            is_text: is_text.get(),
            is_destructive: is_destructive.get(),
            is_clicked: is_clicked.get(),
            class: class.get(),
            kind,
        }
        .class_name()
    };

    view! {
        <button
            id=move || id.get()
            node_ref=node_ref
            type=move || button_type(is_submit.get(), for_form_id.get().as_deref())
            class=class_name
            style=move || style.get()
            aria-label=move || aria_label.get()
            on:click=move |_| handle_click.run(())
            disabled=move || is_disabled_attr(is_disabled.get(), is_loading.get())
            form=move || for_form_id.get()
        >
            {children()}
            {move || {
                should_render_loading
                    .get()
                    .then(move || {
                        view! {
                            <div class=move || classes::loading_dots_class(is_loading_visible.get())>
                                <span class=styles::loading_dot></span>
                                <span class=styles::loading_dot></span>
                                <span class=styles::loading_dot></span>
                            </div>
                        }
                    })
            }}
        </button>
    }
}
