use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_date;

/// Capture mode of the date picker. One component serves both shapes;
/// callers switch the mode instead of forking the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickMode {
    /// One contiguous range, captured with two date fields.
    SingleRange,
    /// An explicit set of individual dates, captured one at a time.
    MultiDate,
}

/// Date-selection component for booking drafts.
///
/// The caller owns the raw state (range field strings, picked date set)
/// and derives its `DateSelection` from whichever mode is active.
#[component]
pub fn BookingDatePicker(
    #[prop(into)] mode: Signal<DatePickMode>,

    /// Range "from" value, "yyyy-mm-dd" or empty (SingleRange mode)
    #[prop(into)]
    date_from: Signal<String>,

    /// Range "to" value, "yyyy-mm-dd" or empty (SingleRange mode)
    #[prop(into)]
    date_to: Signal<String>,

    /// Picked date set (MultiDate mode)
    #[prop(into)]
    dates: Signal<Vec<NaiveDate>>,

    /// Range change callback (from, to)
    on_range_change: Callback<(String, String)>,

    /// Date set change callback
    on_dates_change: Callback<Vec<NaiveDate>>,

    /// Mode toggle callback
    on_mode_change: Callback<DatePickMode>,

    #[prop(optional)] label: Option<String>,
) -> impl IntoView {
    // Staging field for MultiDate mode
    let pick_value = RwSignal::new(String::new());

    let on_from_change = {
        let on_range_change = on_range_change.clone();
        move |new_from: String| {
            let current_to = date_to.get_untracked();
            on_range_change.run((new_from, current_to));
        }
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_range_change.run((current_from, new_to));
    };

    let add_picked_date = {
        let on_dates_change = on_dates_change.clone();
        move |_| {
            let raw = pick_value.get_untracked();
            if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                let mut current = dates.get_untracked();
                if !current.contains(&date) {
                    current.push(date);
                    current.sort_unstable();
                    on_dates_change.run(current);
                }
                pick_value.set(String::new());
            }
        }
    };

    let remove_picked_date = {
        let on_dates_change = on_dates_change.clone();
        move |date: NaiveDate| {
            let mut current = dates.get_untracked();
            current.retain(|d| *d != date);
            on_dates_change.run(current);
        }
    };

    let mode_button = move |value: DatePickMode, text: &'static str| {
        let on_mode_change = on_mode_change.clone();
        view! {
            <Button
                size=ButtonSize::Small
                appearance=move || {
                    if mode.get() == value {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                }
                on_click=move |_| on_mode_change.run(value)
            >
                {text}
            </Button>
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                {label.map(|l| view! {
                    <Label>{l}</Label>
                })}
                <ButtonGroup>
                    {mode_button(DatePickMode::SingleRange, "Range")}
                    {mode_button(DatePickMode::MultiDate, "Dates")}
                </ButtonGroup>
            </Flex>

            <Show
                when=move || mode.get() == DatePickMode::SingleRange
                fallback=move || {
                    let remove_picked_date = remove_picked_date.clone();
                    view! {
                        <Flex vertical=true gap=FlexGap::Small>
                            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                                <input
                                    type="date"
                                    class="date-picker__field"
                                    prop:value=pick_value
                                    on:input=move |ev| pick_value.set(event_target_value(&ev))
                                />
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Secondary
                                    on_click=add_picked_date.clone()
                                >
                                    "Add date"
                                </Button>
                            </Flex>
                            <Flex align=FlexAlign::Center gap=FlexGap::Small class="date-picker__chips">
                                {move || {
                                    let remove_picked_date = remove_picked_date.clone();
                                    dates
                                        .get()
                                        .into_iter()
                                        .map(|date| {
                                            let remove = remove_picked_date.clone();
                                            view! {
                                                <span class="date-picker__chip">
                                                    {format_date(&date.to_string())}
                                                    <button
                                                        class="date-picker__chip-remove"
                                                        on:click=move |_| remove(date)
                                                    >
                                                        "×"
                                                    </button>
                                                </span>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </Flex>
                        </Flex>
                    }
                }
            >
                <Flex align=FlexAlign::Center gap=FlexGap::Small class="date-picker__range">
                    <input
                        type="date"
                        class="date-picker__field"
                        prop:value=date_from
                        on:input=move |ev| {
                            on_from_change(event_target_value(&ev));
                        }
                    />

                    <div>"—"</div>

                    <input
                        type="date"
                        class="date-picker__field"
                        prop:value=date_to
                        on:input=move |ev| {
                            on_to_change(event_target_value(&ev));
                        }
                    />
                </Flex>
            </Show>
        </Flex>
    }
}
