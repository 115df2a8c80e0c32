//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::notice_bar::NoticeBar;
use crate::config::ApiConfig;
use crate::net::http::BrowserClient;
use crate::pages::{chat::ChatPage, dashboard::DashboardPage, products::ProductsPage};
use crate::state::{auth::AuthState, cart::CartState, notify::Notices};
use crate::util::session::read_current_user;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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

/// Root application component.
///
/// Provides the session user, notices, cart, and HTTP client to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { user: read_current_user() });
    let notices = RwSignal::new(Notices::default());
    let cart = RwSignal::new(CartState::default());

    provide_context(auth);
    provide_context(notices);
    provide_context(cart);
    provide_context(BrowserClient::new(ApiConfig::from_build_env()));

    let shows_cart = move || !auth.with(AuthState::is_privileged);

    view! {
        <Stylesheet id="leptos" href="/pkg/pharmacy-ui.css"/>
        <Title text="Pharmacy"/>

        <Router>
            <nav class="app-nav">
                <A href="/">"Dashboard"</A>
                <A href="/products">"Products"</A>
                <A href="/chat">"Chat"</A>
                <Show when=shows_cart>
                    <span class="app-nav__cart">{move || cart.with(CartState::summary)}</span>
                </Show>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                </Routes>
            </main>
        </Router>
        <NoticeBar/>
    }
}
