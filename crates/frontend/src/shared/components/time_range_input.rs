use leptos::prelude::*;
use thaw::*;

/// Paired "HH:MM" time fields for a booking's daily window.
#[component]
pub fn TimeRangeInput(
    /// Start time value, "HH:MM" or empty
    #[prop(into)]
    start_time: Signal<String>,

    /// End time value, "HH:MM" or empty
    #[prop(into)]
    end_time: Signal<String>,

    /// Callback on either field changing (start, end)
    on_change: Callback<(String, String)>,

    #[prop(optional)] label: Option<String>,
) -> impl IntoView {
    let on_start_change = {
        let on_change = on_change.clone();
        move |new_start: String| {
            let current_end = end_time.get_untracked();
            on_change.run((new_start, current_end));
        }
    };

    let on_end_change = move |new_end: String| {
        let current_start = start_time.get_untracked();
        on_change.run((current_start, new_end));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="time"
                    class="time-range-input__field"
                    prop:value=start_time
                    on:input=move |ev| {
                        on_start_change(event_target_value(&ev));
                    }
                />

                <div>"—"</div>

                <input
                    type="time"
                    class="time-range-input__field"
                    prop:value=end_time
                    on:input=move |ev| {
                        on_end_change(event_target_value(&ev));
                    }
                />
            </Flex>
        </Flex>
    }
}
