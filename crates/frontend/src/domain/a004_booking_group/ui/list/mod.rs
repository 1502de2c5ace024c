use contracts::domain::a003_room_booking::{BookingGroupDetail, GroupStatus};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_booking_group::api;
use crate::shared::components::PaginationControls;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;

const STATUS_OPTIONS: [&str; 6] = [
    "All",
    "Pending",
    "AllApproved",
    "AllRejected",
    "PartiallyApproved",
    "PartiallyRejected",
];

fn group_status_class(status: GroupStatus) -> &'static str {
    match status {
        GroupStatus::AllApproved => "status-chip status-chip--approved",
        GroupStatus::AllRejected => "status-chip status-chip--rejected",
        GroupStatus::Pending => "status-chip status-chip--pending",
        GroupStatus::PartiallyApproved | GroupStatus::PartiallyRejected => {
            "status-chip status-chip--partial"
        }
    }
}

/// Admin browser over all submitted booking groups, with status and
/// free-text filters.
#[component]
#[allow(non_snake_case)]
pub fn BookingGroupList() -> impl IntoView {
    let (groups, set_groups) = signal::<Vec<BookingGroupDetail>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    let status_filter = RwSignal::new("All".to_string());
    let search = RwSignal::new(String::new());
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(10usize);
    let (total_pages, set_total_pages) = signal(0usize);
    let (total_count, set_total_count) = signal(0usize);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            set_loading.set(true);
            let status_value = status_filter.get_untracked();
            let status = if status_value == "All" {
                None
            } else {
                Some(status_value)
            };
            let term = search.get_untracked();
            match api::fetch_admin_booking_groups(
                page.get_untracked() + 1,
                page_size.get_untracked(),
                status.as_deref(),
                &term,
            )
            .await
            {
                Ok(paged) => {
                    set_total_pages.set(paged.total_pages as usize);
                    set_total_count.set(paged.total_items as usize);
                    set_groups.set(paged.data);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Booking groups"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            <div class="filter-row">
                <select
                    class="filter-row__select"
                    on:change=move |ev| {
                        status_filter.set(event_target_value(&ev));
                        set_page.set(0);
                        fetch();
                    }
                    prop:value=move || status_filter.get()
                >
                    {STATUS_OPTIONS.iter().map(|&option| view! {
                        <option value=option>{option}</option>
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    class="filter-row__search"
                    placeholder="Search by customer..."
                    prop:value=search
                    on:input=move |ev| search.set(event_target_value(&ev))
                    on:change=move |_| {
                        set_page.set(0);
                        fetch();
                    }
                />
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            {move || loading.get().then(|| view! {
                <p class="page__hint">{"Loading booking groups..."}</p>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Customer"}</th>
                            <th class="table__header-cell">{"Dates"}</th>
                            <th class="table__header-cell">{"Time"}</th>
                            <th class="table__header-cell">{"Rooms"}</th>
                            <th class="table__header-cell">{"Decisions"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Created"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || groups.get().into_iter().map(|group| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <div>
                                            <p class="table__cell-main">{group.customer_name.clone()}</p>
                                            <p class="table__cell-sub">{group.customer_email.clone()}</p>
                                        </div>
                                    </td>
                                    <td class="table__cell">
                                        {format!(
                                            "{} — {}",
                                            format_date(&group.start_date),
                                            format_date(&group.end_date)
                                        )}
                                    </td>
                                    <td class="table__cell">
                                        {format!("{} - {}", group.start_time, group.end_time)}
                                    </td>
                                    <td class="table__cell">{group.total_rooms}</td>
                                    <td class="table__cell">
                                        {format!(
                                            "{} approved / {} pending / {} rejected",
                                            group.approved_count,
                                            group.pending_count,
                                            group.rejected_count
                                        )}
                                    </td>
                                    <td class="table__cell">
                                        <span class={group_status_class(group.status)}>
                                            {group.status.as_str()}
                                        </span>
                                    </td>
                                    <td class="table__cell">{format_datetime(&group.created_at)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |p| {
                    set_page.set(p);
                    fetch();
                })
                on_page_size_change=Callback::new(move |size| {
                    set_page_size.set(size);
                    set_page.set(0);
                    fetch();
                })
            />
        </div>
    }
}
