use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::{ConfigProvider, MessageBar, MessageBarIntent};

use crate::components::{Button, ButtonConfig, ButtonKind};

const SHOWCASE_FORM_ID: &str = "showcase-form";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ButtonConfig::default());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/button-widget.css"/>

        <Title text="Button showcase"/>

        <ConfigProvider>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=ShowcasePage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}

/// Every button variant, plus a loading toggle and a detached form submit.
#[component]
fn ShowcasePage() -> impl IntoView {
    let clicks = RwSignal::new(0);
    let submissions = RwSignal::new(0);
    let is_saving = RwSignal::new(false);

    let count_click = Callback::new(move |()| *clicks.write() += 1);
    let toggle_saving = Callback::new(move |()| is_saving.update(|saving| *saving = !*saving));
    let saving = Signal::derive(move || Some(is_saving.get()));

    view! {
        <h1>"Buttons"</h1>

        <section class="showcase-row">
            <Button on_click=count_click>"Default"</Button>
            <Button is_primary=true on_click=count_click>"Primary"</Button>
            <Button kind=ButtonKind::Transparent on_click=count_click>"Transparent"</Button>
            <Button is_text=true on_click=count_click>"Text"</Button>
            <Button is_simple=true on_click=count_click>"Simple"</Button>
            <Button is_small=true on_click=count_click>"Small"</Button>
            <Button is_round=true aria_label="Add" on_click=count_click>"+"</Button>
            <Button is_destructive=true is_primary=true on_click=count_click>"Delete"</Button>
            <Button is_disabled=true on_click=count_click>"Disabled"</Button>
        </section>

        <section class="showcase-row">
            <Button is_primary=true is_loading=saving on_click=count_click>"Save"</Button>
            <Button is_text=true on_click=toggle_saving>
                {move || if is_saving.get() { "Stop loading" } else { "Start loading" }}
            </Button>
        </section>

        <form
            id=SHOWCASE_FORM_ID
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                *submissions.write() += 1;
            }
        ></form>
        <section class="showcase-row">
            <Button is_primary=true for_form_id=SHOWCASE_FORM_ID>"Submit detached form"</Button>
        </section>

        <MessageBar intent=MessageBarIntent::Info>
            "Clicks: " {clicks} " · Submissions: " {submissions}
        </MessageBar>
    }
}
