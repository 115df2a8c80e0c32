//! Dashboard page with the four aggregate metric cards.

use leptos::prelude::*;

use crate::components::metric_card::MetricCard;
use crate::net::api;
use crate::net::http::BrowserClient;
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;
use crate::state::notify::Notices;
use crate::util::task::spawn_in_browser;

/// Dashboard page. Stats are fetched once on mount.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<Notices>>();
    let client = expect_context::<BrowserClient>();
    let dashboard = RwSignal::new(DashboardState::default());

    dashboard.update(DashboardState::begin_load);
    spawn_in_browser(async move {
        let result = api::fetch_dashboard_stats(&client).await;
        dashboard.update(|s| s.apply_stats(result, &notices));
    });

    let greeting = move || format!("Welcome back, {}!", auth.with(AuthState::display_name));

    view! {
        <Show
            when=move || !dashboard.with(|s| s.loading)
            fallback=|| view! { <div class="page-spinner" aria-busy="true"></div> }
        >
            <div class="dashboard-page">
                <header class="page-header">
                    <div>
                        <h1>"Dashboard"</h1>
                        <p class="page-header__subtitle">{greeting}</p>
                    </div>
                </header>
                <div class="dashboard-page__cards">
                    {move || {
                        dashboard
                            .with(DashboardState::cards)
                            .into_iter()
                            .map(|card| view! { <MetricCard title=card.title value=card.value tone=card.tone/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <section class="dashboard-page__activity">
                    <h2>"Recent Activity"</h2>
                    <p>"Your recent activities will appear here."</p>
                </section>
            </div>
        </Show>
    }
}
