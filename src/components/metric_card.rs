//! Single dashboard counter card.

use leptos::prelude::*;

use crate::state::dashboard::CardTone;

#[component]
pub fn MetricCard(title: &'static str, value: u64, tone: CardTone) -> impl IntoView {
    let class = format!("metric-card metric-card--{}", tone.css_modifier());

    view! {
        <div class=class>
            <span class="metric-card__title">{title}</span>
            <span class="metric-card__value">{value}</span>
        </div>
    }
}
