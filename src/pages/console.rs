use crate::{footer::SYSTEM_NAME, pages::footer::Footer};
use leptos::prelude::*;

/// Console landing page.
#[component]
pub fn ConsolePage() -> impl IntoView {
    view! {
        <div class="app-container">
            <header class="app-header">
                <div class="header-content">
                    <h1 class="app-title">{SYSTEM_NAME}</h1>
                </div>
            </header>

            <div class="main-content">
                <p class="console-welcome">"欢迎使用微信公众号管理系统"</p>
            </div>

            <Footer/>
        </div>
    }
}
