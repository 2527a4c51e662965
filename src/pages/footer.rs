use leptos::prelude::*;

use crate::components::Icon;
use crate::footer::{FooterContent, FooterContentBuilder, LinkEntry, FOOTER_STYLE};

/// Page footer. Content is rebuilt from the system clock on every render.
#[component]
pub fn Footer() -> impl IntoView {
    let content = FooterContentBuilder::new().build();

    view! { <FooterView content/> }
}

/// Renders a prepared [`FooterContent`]; links keep the order they arrive in.
#[component]
pub fn FooterView(content: FooterContent) -> impl IntoView {
    let FooterContent {
        copyright_text,
        links,
    } = content;

    view! {
        <footer class="app-footer" style=FOOTER_STYLE>
            <div class="footer-content">
                <nav class="footer-links">
                    <For
                        each=move || links.clone()
                        key=|link| link.key.clone()
                        children=move |link| view! { <FooterLink link/> }
                    />
                </nav>
                <p class="footer-copyright">{format!("\u{00A9} {}", copyright_text)}</p>
            </div>
        </footer>
    }
}

#[component]
fn FooterLink(link: LinkEntry) -> impl IntoView {
    let target = link.open_in_new_tab.then_some("_blank");
    // Pages opened in a new tab must not get a handle on the console window
    let rel = link.open_in_new_tab.then_some("noopener noreferrer");
    let icon = link.title.icon();
    let text = link.title.text().to_string();

    view! {
        <a href=link.href target=target rel=rel class="footer-link">
            {icon.map(|glyph| view! { <Icon glyph/> })}
            <span class="footer-link-text">{text}</span>
        </a>
    }
}
