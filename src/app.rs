use crate::footer::SYSTEM_NAME;
use crate::pages::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router_macro::path;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/wxmp-console.css"/>

        <Title text=SYSTEM_NAME/>
        <Meta name="theme-color" content="#ffffff"/>

        <Router>
            <main>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=ConsolePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
    // The status can only be set during the initial server-side render
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="app-container">
            <h1>"页面不存在"</h1>
            <Footer/>
        </div>
    }
}

#[cfg(feature = "ssr")]
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
