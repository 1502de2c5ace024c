use chrono::NaiveDateTime;
use contracts::domain::a003_room_booking::RoomBookingView;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_room_booking::api;
use crate::shared::date_utils::{from_datetime_local, to_datetime_local};

/// What saving the dialog does with the new time window. The two actions
/// share the whole form; only the endpoint differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Plain update of the booking's times.
    Update,
    /// Update and move the booking back to `Pending` for a new review.
    Resubmit,
}

/// Time-window editor for a rejected booking.
#[component]
#[allow(non_snake_case)]
pub fn EditBookingDialog(
    open: RwSignal<bool>,

    /// The booking being edited; the form reseeds whenever it changes.
    #[prop(into)]
    booking: Signal<Option<RoomBookingView>>,

    #[prop(into)] action: Signal<EditAction>,

    /// Called after a successful save, before the dialog closes.
    on_success: Callback<()>,
) -> impl IntoView {
    let start_time = RwSignal::new(String::new());
    let end_time = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    // Reseed the fields from the booking whenever a new one is edited.
    Effect::new(move |_| {
        if let Some(b) = booking.get() {
            start_time.set(to_datetime_local(&b.start_time));
            end_time.set(to_datetime_local(&b.end_time));
            error.set(None);
        }
    });

    let parse_local = |value: &str| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok();

    let submit = move |_| {
        let Some(b) = booking.get_untracked() else {
            return;
        };
        let start_raw = start_time.get_untracked();
        let end_raw = end_time.get_untracked();
        if start_raw.is_empty() || end_raw.is_empty() {
            error.set(Some("Both times are required".to_string()));
            return;
        }
        match (parse_local(&start_raw), parse_local(&end_raw)) {
            (Some(start), Some(end)) if end > start => {}
            (Some(_), Some(_)) => {
                error.set(Some("End time must be later than start time".to_string()));
                return;
            }
            _ => {
                error.set(Some("Times could not be parsed".to_string()));
                return;
            }
        }

        let current_action = action.get_untracked();
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let start_iso = from_datetime_local(&start_raw);
            let end_iso = from_datetime_local(&end_raw);
            let result = match current_action {
                EditAction::Update => api::update_booking(b.id, &start_iso, &end_iso).await,
                EditAction::Resubmit => api::resubmit_booking(b.id, &start_iso, &end_iso).await,
            };
            loading.set(false);
            match result {
                Ok(()) => {
                    error.set(None);
                    open.set(false);
                    on_success.run(());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let title = move || {
        let room = booking
            .get()
            .map(|b| b.room_name)
            .unwrap_or_default();
        match action.get() {
            EditAction::Update => format!("Edit booking - {}", room),
            EditAction::Resubmit => format!("Resubmit booking - {}", room),
        }
    };

    let submit_label = move || {
        if loading.get() {
            "Saving...".to_string()
        } else {
            match action.get() {
                EditAction::Update => "Save changes".to_string(),
                EditAction::Resubmit => "Resubmit".to_string(),
            }
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        {move || error.get().map(|e| view! {
                            <MessageBar intent=MessageBarIntent::Error>
                                <MessageBarBody>{e}</MessageBarBody>
                            </MessageBar>
                        })}

                        <Flex vertical=true gap=FlexGap::Medium>
                            <div>
                                <Label>"Start time"</Label>
                                <input
                                    type="datetime-local"
                                    class="details-form__input"
                                    prop:value=start_time
                                    on:input=move |ev| start_time.set(event_target_value(&ev))
                                />
                            </div>
                            <div>
                                <Label>"End time"</Label>
                                <input
                                    type="datetime-local"
                                    class="details-form__input"
                                    prop:value=end_time
                                    on:input=move |ev| end_time.set(event_target_value(&ev))
                                />
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            disabled=loading
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=loading
                            on_click=submit
                        >
                            {submit_label}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
