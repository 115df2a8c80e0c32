//! Stack of success/error notices raised by the screens.

use leptos::prelude::*;

use crate::state::notify::{NoticeLevel, Notices};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4_000;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let notices = expect_context::<RwSignal<Notices>>();

    view! {
        <div class="notice-bar" aria-live="polite">
            <For
                each=move || notices.get().entries
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    #[cfg(feature = "hydrate")]
                    {
                        gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
                            notices.update(|n| n.dismiss(id));
                        })
                        .forget();
                    }
                    let class = match notice.level {
                        NoticeLevel::Success => "notice notice--success",
                        NoticeLevel::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class>
                            <span class="notice__text">{notice.message}</span>
                            <button
                                class="notice__close"
                                aria-label="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
