use leptos::*;
use leptos_router::A;

use crate::icons::{Icon, IconName, IconSize};

#[component]
pub(crate) fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <span class="not-found-icon">
                <Icon icon=IconName::Alert size=IconSize::Xl />
            </span>
            <h1 class="not-found-code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p class="muted">"The page you're looking for doesn't exist or has been moved."</p>
            <A href="/" class="btn btn-primary">
                <Icon icon=IconName::Home />
                <span>"Back to Home"</span>
            </A>
            <A href="/files" class="link">"Go back to My Files"</A>
        </div>
    }
}
