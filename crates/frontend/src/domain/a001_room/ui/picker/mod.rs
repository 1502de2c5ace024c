use std::collections::HashSet;

use contracts::domain::a001_room::Room;
use leptos::prelude::*;

/// Multi-select room picker for a booking draft.
///
/// Offers active rooms only, filtered by the search box. Rooms in
/// `disabled_rooms` (the draft's known pre-check conflicts) cannot be
/// toggled until the conflict clears.
#[component]
pub fn RoomPicker(
    #[prop(into)] rooms: Signal<Vec<Room>>,

    #[prop(into)] selected: Signal<Vec<i32>>,

    /// Rooms currently reported as conflicting for this draft
    #[prop(into)]
    disabled_rooms: Signal<HashSet<i32>>,

    /// Toggle a room in/out of the selection
    on_toggle: Callback<i32>,
) -> impl IntoView {
    let search_term = RwSignal::new(String::new());

    view! {
        <div class="room-picker">
            <input
                type="text"
                class="room-picker__search"
                placeholder="Search rooms..."
                prop:value=search_term
                on:input=move |ev| search_term.set(event_target_value(&ev))
            />

            <ul class="room-picker__list">
                {move || {
                    let term = search_term.get().to_lowercase();
                    let selected_ids = selected.get();
                    let disabled_ids = disabled_rooms.get();
                    rooms
                        .get()
                        .into_iter()
                        .filter(|room| {
                            room.is_active && room.name.to_lowercase().contains(&term)
                        })
                        .map(|room| {
                            let room_id = room.id;
                            let is_selected = selected_ids.contains(&room_id);
                            let is_disabled = disabled_ids.contains(&room_id);
                            view! {
                                <li
                                    class="room-picker__item"
                                    class:room-picker__item--conflicted=is_disabled
                                >
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=is_selected
                                            disabled=is_disabled
                                            on:change=move |_| on_toggle.run(room_id)
                                        />
                                        {format!("{} (cap. {})", room.name, room.capacity)}
                                    </label>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
