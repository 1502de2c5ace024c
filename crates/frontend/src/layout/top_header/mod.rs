//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title and the
//! customer/admin role switcher.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::session::{use_session, Role};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let role_button = move |role: Role, label: &'static str| {
        let is_active = move || session.role.get() == role;
        view! {
            <button
                class="top-header__role-btn"
                class:top-header__role-btn--active=is_active
                on:click=move |_| session.role.set(role)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Room Booking"</span>
            </div>

            <div class="top-header__actions">
                // Sidebar toggle
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                // Role switcher: the backend has no sessions, the views do
                <div class="top-header__roles">
                    {role_button(Role::Customer, "Customer")}
                    {role_button(Role::Admin, "Admin")}
                </div>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || match session.role.get() {
                            Role::Customer => format!("Customer #{}", session.customer_id),
                            Role::Admin => "Administrator".to_string(),
                        }}
                    </span>
                </div>
            </div>
        </div>
    }
}
