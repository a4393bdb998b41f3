//! Rotating banner
//!
//! Stacks every banner image and fades the active one in. The active index advances
//! once per interval until the component is cleaned up.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_core::banner::{BannerRotation, ROTATE_INTERVAL_MS};
use shared::site::BANNER_IMAGES;

use crate::utils::constants::BANNER_ALT;

#[component]
pub fn Banner() -> impl IntoView {
    let rotation = RwSignal::new(BannerRotation::new(BANNER_IMAGES.len()));

    leptos::task::spawn_local(async move {
        loop {
            TimeoutFuture::new(ROTATE_INTERVAL_MS).await;
            // None once the signal is disposed, false once stopped
            if rotation.try_update(|r| r.tick()) != Some(true) {
                break;
            }
        }
        log::debug!("Banner rotation stopped");
    });

    on_cleanup(move || {
        rotation.try_update(|r| r.stop());
    });

    let current = move || rotation.with(|r| r.current());

    view! {
        <div class="banner">
            {BANNER_IMAGES
                .iter()
                .enumerate()
                .map(|(index, src)| {
                    view! {
                        <img
                            src=*src
                            alt=BANNER_ALT
                            class="banner-image"
                            class:banner-image-active=move || current() == index
                        />
                    }
                })
                .collect_view()}

            // Overlay tint
            <div class="banner-tint"></div>

            <h1 class="banner-title">"Showfari"</h1>
        </div>
    }
}
