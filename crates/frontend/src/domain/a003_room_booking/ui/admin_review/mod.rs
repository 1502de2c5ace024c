use contracts::domain::a003_room_booking::{BookingStatus, RoomBookingView};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_room_booking::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

/// Admin approval panel: bookings awaiting a decision, one action per
/// row. The decided row leaves the list; the group-level status is the
/// backend's business.
#[component]
#[allow(non_snake_case)]
pub fn AdminReviewPanel() -> impl IntoView {
    let (bookings, set_bookings) = signal::<Vec<RoomBookingView>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (action_loading_id, set_action_loading_id) = signal::<Option<i32>>(None);

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            match api::fetch_pending_bookings().await {
                Ok(result) => {
                    set_bookings.set(result.data);
                    set_error.set(None);
                }
                Err(e) => {
                    set_bookings.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let decide = move |id: i32, status: BookingStatus| {
        set_action_loading_id.set(Some(id));
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_booking_status(id, status).await {
                Ok(()) => {
                    // Remove from list after the decision
                    set_bookings.update(|list| list.retain(|b| b.id != id));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Failed to update booking: {}", e))),
            }
            set_action_loading_id.set(None);
        });
    };

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Approvals"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            {move || loading.get().then(|| view! {
                <p class="page__hint">{"Loading pending bookings..."}</p>
            })}

            {move || {
                (!loading.get() && bookings.get().is_empty()).then(|| view! {
                    <div class="empty-state">
                        <p class="empty-state__title">{"No pending bookings"}</p>
                        <p class="empty-state__hint">{"You're all caught up."}</p>
                    </div>
                })
            }}

            {move || (!bookings.get().is_empty()).then(|| view! {
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Room"}</th>
                                <th class="table__header-cell">{"Customer"}</th>
                                <th class="table__header-cell">{"Start"}</th>
                                <th class="table__header-cell">{"End"}</th>
                                <th class="table__header-cell">{"Action"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || bookings.get().into_iter().map(|booking| {
                                let id = booking.id;
                                let row_busy = move || action_loading_id.get() == Some(id);
                                view! {
                                    <tr class="table__row" class:table__row--busy=row_busy>
                                        <td class="table__cell">
                                            {booking.room_name.clone()}
                                            <span class="status-chip status-chip--pending">{"Pending"}</span>
                                        </td>
                                        <td class="table__cell">
                                            <div>
                                                <p class="table__cell-main">{booking.customer_name.clone()}</p>
                                                <p class="table__cell-sub">{booking.customer_email.clone()}</p>
                                            </div>
                                        </td>
                                        <td class="table__cell">{format_datetime(&booking.start_time)}</td>
                                        <td class="table__cell">{format_datetime(&booking.end_time)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Primary
                                                disabled=Signal::derive(row_busy)
                                                on_click=move |_| decide(id, BookingStatus::Approved)
                                            >
                                                "Approve"
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Secondary
                                                disabled=Signal::derive(row_busy)
                                                on_click=move |_| decide(id, BookingStatus::Rejected)
                                            >
                                                "Reject"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            })}
        </div>
    }
}
