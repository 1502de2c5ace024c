use crate::domain::a002_customer::ui::list::CustomerList;
use crate::domain::a003_room_booking::ui::admin_review::AdminReviewPanel;
use crate::domain::a003_room_booking::ui::my_bookings::MyBookingsList;
use crate::domain::a004_booking_group::ui::list::BookingGroupList;
use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::usecases::u501_submit_booking_cart::CreateBookingsPage;
use leptos::logging::log;
use leptos::prelude::*;

// Helper component for rendering individual tab content
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    // Reactive: pages stay mounted, only visibility flips
    let is_active =
        move || tabs_store.active.get().as_deref() == Some(tab_key_for_active_check.as_str());

    let content = {
        match tab_key.as_str() {
            "u501_create_bookings" => view! { <CreateBookingsPage /> }.into_any(),
            "a003_my_bookings" => view! { <MyBookingsList /> }.into_any(),
            "a003_admin_review" => view! { <AdminReviewPanel /> }.into_any(),
            "a004_booking_groups" => view! { <BookingGroupList /> }.into_any(),
            "a002_customers" => view! { <CustomerList /> }.into_any(),
            key => {
                log!("Unknown tab type: {}", key);
                view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
            }
        }
    };

    view! {
        <div
            class="tab-page"
            class:hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! {
                            <TabPage tab=tab tabs_store=tabs_store />
                        }
                    }
                />
            </div>
        </div>
    }
}
