pub mod tabs;

use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="center">
            {children()}
        </div>
    }
}
