use std::collections::HashSet;

use contracts::domain::a001_room::Room;
use contracts::usecases::u501_submit_booking_cart::{CartEntryStatus, DateSelection};
use leptos::prelude::*;
use thaw::*;

use super::view_model::{CartPageViewModel, NoticeKind};
use crate::domain::a001_room::ui::RoomPicker;
use crate::layout::session::use_session;
use crate::shared::components::{BookingDatePicker, ConfirmDialog, TimeRangeInput};
use crate::shared::date_utils::format_date;

fn room_name(rooms: &[Room], room_id: i32) -> String {
    rooms
        .iter()
        .find(|r| r.id == room_id)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| format!("Room #{}", room_id))
}

fn selection_label(selection: &DateSelection) -> String {
    match selection {
        DateSelection::Range { start, end } => format!(
            "{} — {}",
            format_date(&start.to_string()),
            format_date(&end.to_string())
        ),
        DateSelection::Dates(dates) => {
            let formatted: Vec<String> = dates
                .iter()
                .map(|d| format_date(&d.to_string()))
                .collect();
            format!("{} dates: {}", dates.len(), formatted.join(", "))
        }
    }
}

fn entry_status_class(status: CartEntryStatus) -> &'static str {
    match status {
        CartEntryStatus::Draft => "status-chip status-chip--draft",
        CartEntryStatus::Submitting => "status-chip status-chip--pending",
        CartEntryStatus::Pending => "status-chip status-chip--approved",
        CartEntryStatus::PartialError => "status-chip status-chip--rejected",
    }
}

/// Create-bookings page: draft form on the left, cart on the right.
#[component]
#[allow(non_snake_case)]
pub fn CreateBookingsPage() -> impl IntoView {
    let session = use_session();
    let vm = CartPageViewModel::new(session.customer_id);
    vm.load_rooms();

    let confirm_open = RwSignal::new(false);
    let pending_remove = RwSignal::new(None::<String>);

    // Rooms the picker must refuse for the current draft
    let disabled_rooms = Signal::derive(move || {
        vm.precheck
            .get()
            .conflicts()
            .iter()
            .map(|c| c.room_id)
            .collect::<HashSet<i32>>()
    });

    let draft_incomplete = move || {
        let no_dates = match vm.pick_mode.get() {
            crate::shared::components::DatePickMode::SingleRange => {
                vm.date_from.get().is_empty() || vm.date_to.get().is_empty()
            }
            crate::shared::components::DatePickMode::MultiDate => {
                vm.picked_dates.get().is_empty()
            }
        };
        no_dates
            || vm.start_time.get().is_empty()
            || vm.end_time.get().is_empty()
            || vm.selected_rooms.get().is_empty()
    };

    let add_disabled =
        Signal::derive(move || draft_incomplete() || vm.precheck.get().has_conflicts());

    let submit_disabled =
        Signal::derive(move || vm.cart.get().is_empty() || vm.submitting.get());

    let request_remove = move |id: String| {
        pending_remove.set(Some(id));
        confirm_open.set(true);
    };

    view! {
        <div class="page booking-page">
            <div class="booking-page__form">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">{"Create bookings"}</h1>
                        <p class="page__hint">
                            {"Add rooms to the cart, then submit everything at once"}
                        </p>
                    </div>
                </div>

                {move || vm.rooms_error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{format!("Failed to load rooms: {}", e)}</MessageBarBody>
                    </MessageBar>
                })}

                <Flex vertical=true gap=FlexGap::Large>
                    <BookingDatePicker
                        mode=vm.pick_mode
                        date_from=vm.date_from
                        date_to=vm.date_to
                        dates=vm.picked_dates
                        on_range_change=Callback::new(move |(from, to)| vm.set_range(from, to))
                        on_dates_change=Callback::new(move |dates| vm.set_dates(dates))
                        on_mode_change=Callback::new(move |mode| vm.set_mode(mode))
                        label="Dates".to_string()
                    />

                    <TimeRangeInput
                        start_time=vm.start_time
                        end_time=vm.end_time
                        on_change=Callback::new(move |(start, end)| vm.set_times(start, end))
                        label="Time window".to_string()
                    />

                    <div>
                        <Label>"Rooms"</Label>
                        <RoomPicker
                            rooms=vm.rooms
                            selected=vm.selected_rooms
                            disabled_rooms=disabled_rooms
                            on_toggle=Callback::new(move |room_id| vm.toggle_room(room_id))
                        />
                    </div>

                    <div>
                        <Label>"Purpose (optional)"</Label>
                        <textarea
                            class="booking-page__description"
                            placeholder="e.g. team workshop, onboarding session"
                            prop:value=move || vm.description.get()
                            on:input=move |ev| vm.description.set(event_target_value(&ev))
                        />
                    </div>

                    {move || vm.checking.get().then(|| view! {
                        <MessageBar intent=MessageBarIntent::Info>
                            <MessageBarBody>{"Checking room availability..."}</MessageBarBody>
                        </MessageBar>
                    })}

                    {move || {
                        let conflicts = vm.precheck.get().conflicts().to_vec();
                        (!conflicts.is_empty()).then(|| {
                            let rooms = vm.rooms.get();
                            view! {
                                <MessageBar intent=MessageBarIntent::Warning>
                                    <MessageBarBody>
                                        <div>
                                            <p>{"Conflicts found:"}</p>
                                            <ul class="conflict-list">
                                                {conflicts.into_iter().map(|c| {
                                                    let name = room_name(&rooms, c.room_id);
                                                    view! {
                                                        <li>{format!("{}: {}", name, c.message)}</li>
                                                    }
                                                }).collect_view()}
                                            </ul>
                                            <p class="conflict-list__hint">
                                                {"Conflicting rooms cannot be selected. Change the time window or pick other rooms."}
                                            </p>
                                        </div>
                                    </MessageBarBody>
                                </MessageBar>
                            }
                        })
                    }}

                    <Flex justify=FlexJustify::End>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=add_disabled
                            on_click=move |_| vm.add_to_cart()
                        >
                            "Add to cart"
                        </Button>
                    </Flex>
                </Flex>
            </div>

            <div class="booking-page__cart">
                <div class="cart-panel__header">
                    <h2 class="cart-panel__title">{"Booking cart"}</h2>
                    <p class="page__hint">
                        {move || format!("{} bookings", vm.cart.get().len())}
                    </p>
                </div>

                {move || vm.notice.get().map(|notice| {
                    let intent = match notice.kind {
                        NoticeKind::Success => MessageBarIntent::Success,
                        NoticeKind::Warning => MessageBarIntent::Warning,
                        NoticeKind::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <MessageBar intent=intent>
                            <MessageBarBody>{notice.text}</MessageBarBody>
                        </MessageBar>
                    }
                })}

                <div class="cart-panel__items">
                    {move || {
                        let groups = vm.cart.get().groups().to_vec();
                        if groups.is_empty() {
                            view! {
                                <div class="empty-state">
                                    <p class="empty-state__title">{"The cart is empty"}</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            let rooms = vm.rooms.get();
                            groups
                                .into_iter()
                                .enumerate()
                                .map(|(idx, group)| {
                                    let id = group.id.clone();
                                    let busy = vm.submitting;
                                    view! {
                                        <div class="cart-entry">
                                            <div class="cart-entry__header">
                                                <h3 class="cart-entry__title">
                                                    {format!("Booking {}", idx + 1)}
                                                </h3>
                                                <span class={entry_status_class(group.status)}>
                                                    {group.status.as_str()}
                                                </span>
                                            </div>

                                            <p class="cart-entry__dates">
                                                {selection_label(&group.date_selection)}
                                            </p>
                                            <p class="cart-entry__times">
                                                {format!("{} - {}", group.start_time, group.end_time)}
                                            </p>

                                            {group.description.clone().map(|d| view! {
                                                <p class="cart-entry__purpose">{format!("Purpose: {}", d)}</p>
                                            })}

                                            <div class="cart-entry__rooms">
                                                {group.room_ids.iter().map(|&room_id| {
                                                    view! {
                                                        <span class="room-chip">
                                                            {room_name(&rooms, room_id)}
                                                        </span>
                                                    }
                                                }).collect_view()}
                                            </div>

                                            {(!group.conflicts.is_empty()).then(|| view! {
                                                <div class="cart-entry__conflicts">
                                                    <p class="cart-entry__conflicts-title">{"Conflicts:"}</p>
                                                    {group.conflicts.iter().map(|c| {
                                                        let name = room_name(&rooms, c.room_id);
                                                        view! {
                                                            <p class="cart-entry__conflict">
                                                                {format!("• {}: {}", name, c.message)}
                                                            </p>
                                                        }
                                                    }).collect_view()}
                                                </div>
                                            })}

                                            <button
                                                class="button button--danger-outline cart-entry__remove"
                                                disabled=move || busy.get()
                                                on:click=move |_| request_remove(id.clone())
                                            >
                                                {"Remove"}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>

                <div class="cart-panel__footer">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=submit_disabled
                        on_click=move |_| vm.submit_all()
                    >
                        {move || if vm.submitting.get() { "Submitting..." } else { "Submit all" }}
                    </Button>
                    <p class="page__hint">
                        {move || {
                            let count = vm.cart.get().len();
                            if count > 0 {
                                format!("{} bookings ready to submit", count)
                            } else {
                                String::new()
                            }
                        }}
                    </p>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Cancel booking?"
                message="Remove this booking from the cart?"
                on_confirm=Callback::new(move |_| {
                    if let Some(id) = pending_remove.get_untracked() {
                        vm.remove_from_cart(&id);
                        pending_remove.set(None);
                    }
                })
            />
        </div>
    }
}
