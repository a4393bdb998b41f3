//! Page footer

use leptos::prelude::*;

use crate::utils::format::copyright_line;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">{copyright_line(year)}</footer>
    }
}
