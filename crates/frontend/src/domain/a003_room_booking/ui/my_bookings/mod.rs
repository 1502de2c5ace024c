use contracts::domain::a003_room_booking::{BookingStatus, RoomBookingView};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_room_booking::api;
use crate::domain::a003_room_booking::ui::edit_dialog::{EditAction, EditBookingDialog};
use crate::layout::session::use_session;
use crate::shared::date_utils::format_datetime;

const STATUS_FILTERS: [(&str, Option<BookingStatus>); 4] = [
    ("All", None),
    ("Pending", Some(BookingStatus::Pending)),
    ("Approved", Some(BookingStatus::Approved)),
    ("Rejected", Some(BookingStatus::Rejected)),
];

fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Approved => "status-chip status-chip--approved",
        BookingStatus::Rejected => "status-chip status-chip--rejected",
        BookingStatus::Pending => "status-chip status-chip--pending",
    }
}

/// The customer's submitted bookings, filterable by decision status.
/// Rejected bookings can be edited or resubmitted with a new window.
#[component]
#[allow(non_snake_case)]
pub fn MyBookingsList() -> impl IntoView {
    let session = use_session();

    let (bookings, set_bookings) = signal::<Vec<RoomBookingView>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (status_filter, set_status_filter) = signal::<Option<BookingStatus>>(None);

    let dialog_open = RwSignal::new(false);
    let editing = RwSignal::new(None::<RoomBookingView>);
    let edit_action = RwSignal::new(EditAction::Update);

    let customer_id = session.customer_id;

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            match api::fetch_customer_bookings(customer_id, status_filter.get_untracked(), 1, 50)
                .await
            {
                Ok(result) => {
                    set_bookings.set(result.data);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let open_editor = move |booking: RoomBookingView, action: EditAction| {
        editing.set(Some(booking));
        edit_action.set(action);
        dialog_open.set(true);
    };

    load();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"My bookings"}</h1>
                </div>
            </div>

            <div class="filter-chips">
                {STATUS_FILTERS
                    .into_iter()
                    .map(|(label, value)| {
                        let is_active = move || status_filter.get() == value;
                        view! {
                            <button
                                class="filter-chip"
                                class:filter-chip--active=is_active
                                on:click=move |_| {
                                    set_status_filter.set(value);
                                    load();
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            {move || loading.get().then(|| view! {
                <p class="page__hint">{"Loading bookings..."}</p>
            })}

            {move || {
                (!loading.get() && bookings.get().is_empty()).then(|| view! {
                    <div class="empty-state">
                        <p class="empty-state__title">{"No bookings found"}</p>
                    </div>
                })
            }}

            <div class="card-list">
                {move || bookings.get().into_iter().map(|booking| {
                    let status = booking.status;
                    let for_edit = booking.clone();
                    let for_resubmit = booking.clone();
                    view! {
                        <div class="card">
                            <div class="card__header">
                                <h2 class="card__title">{booking.room_name.clone()}</h2>
                                <span class={status_class(status)}>{status.as_str()}</span>
                            </div>

                            <p class="card__subtitle">
                                {format!(
                                    "{} — {}",
                                    format_datetime(&booking.start_time),
                                    format_datetime(&booking.end_time)
                                )}
                            </p>

                            {booking.description.clone().map(|d| view! {
                                <p class="card__note">{d}</p>
                            })}

                            {(status == BookingStatus::Rejected).then(|| view! {
                                <div class="card__actions">
                                    <button
                                        class="link-button"
                                        on:click=move |_| open_editor(for_edit.clone(), EditAction::Update)
                                    >
                                        {"Edit"}
                                    </button>
                                    <button
                                        class="link-button"
                                        on:click=move |_| open_editor(for_resubmit.clone(), EditAction::Resubmit)
                                    >
                                        {"Resubmit"}
                                    </button>
                                </div>
                            })}
                        </div>
                    }
                }).collect_view()}
            </div>

            <EditBookingDialog
                open=dialog_open
                booking=editing
                action=edit_action
                on_success=Callback::new(move |_| {
                    editing.set(None);
                    load();
                })
            />
        </div>
    }
}
