//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::session::{use_session, Role};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "bookings",
            label: "Bookings",
            icon: "calendar",
            items: vec![
                (
                    "u501_create_bookings",
                    tab_label_for_key("u501_create_bookings"),
                    "shopping-cart",
                ),
                (
                    "a003_my_bookings",
                    tab_label_for_key("a003_my_bookings"),
                    "list",
                ),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "settings",
            items: vec![
                (
                    "a003_admin_review",
                    tab_label_for_key("a003_admin_review"),
                    "check-square",
                ),
                (
                    "a004_booking_groups",
                    tab_label_for_key("a004_booking_groups"),
                    "layers",
                ),
                (
                    "a002_customers",
                    tab_label_for_key("a002_customers"),
                    "customers",
                ),
            ],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let session = use_session();

    let open = move |key: &str| {
        tabs_store.open_tab(key, tab_label_for_key(key));
    };

    view! {
        <nav class="sidebar">
            {move || {
                let is_admin = session.role.get() == Role::Admin;
                get_menu_groups()
                    .into_iter()
                    .filter(|group| !group.admin_only || is_admin)
                    .map(|group| {
                        view! {
                            <div class="sidebar__group">
                                <div class="sidebar__group-header">
                                    {icon(group.icon)}
                                    <span class="sidebar__group-label">{group.label}</span>
                                </div>
                                <ul class="sidebar__items">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|(key, label, item_icon)| {
                                            let is_active = move || {
                                                tabs_store.active.get().as_deref() == Some(key)
                                            };
                                            view! {
                                                <li
                                                    class="sidebar__item"
                                                    class:sidebar__item--active=is_active
                                                    on:click=move |_| open(key)
                                                >
                                                    {icon(item_icon)}
                                                    <span>{label}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
