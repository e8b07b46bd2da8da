//! Transient toast notifications.
//!
//! Every user-visible outcome (bad file, missing preconditions,
//! submission success/failure) goes through [`push_notice`]; nothing
//! is swallowed silently. Each notice expires on its own after
//! [`NOTICE_TTL_MS`].

use leptos::*;
use std::cell::Cell;

use crate::config::NOTICE_TTL_MS;
use crate::types::{Notice, NoticeLevel};

thread_local! {
    static NEXT_NOTICE_ID: Cell<u64> = Cell::new(0);
}

/// Push a toast and schedule its expiry.
pub fn push_notice(set_notices: WriteSignal<Vec<Notice>>, level: NoticeLevel, message: &str) {
    let id = NEXT_NOTICE_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });

    set_notices.update(|notices| {
        notices.push(Notice {
            id,
            level,
            message: message.to_string(),
        });
    });

    // Log to the console as well.
    match level {
        NoticeLevel::Error => log::error!("{}", message),
        _ => log::info!("{}", message),
    }

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        set_notices.update(|notices| notices.retain(|n| n.id != id));
    });
}

#[component]
pub fn NoticeStack(notices: ReadSignal<Vec<Notice>>) -> impl IntoView {
    view! {
        <div class="notice-stack" id="noticeStack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let class_name = format!("notice {}", notice.level.css_class());
                    view! {
                        <div class=class_name>
                            {notice.level.emoji()} " " {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
