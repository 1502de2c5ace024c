use crate::domain::a002_customer::ui::details::CustomerDetails;
use crate::shared::api_utils::api_url;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use contracts::domain::a002_customer::Customer;
use contracts::domain::common::PagedResponse;
use gloo_net::http::Request;
use leptos::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;
use thaw::*;

#[derive(Clone, Debug)]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub active: &'static str,
    pub created_at: String,
}

impl From<Customer> for CustomerRow {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone.unwrap_or_else(|| "-".to_string()),
            address: c.address.unwrap_or_else(|| "-".to_string()),
            active: if c.is_active { "yes" } else { "no" },
            created_at: c.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CustomerRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<i32>>(HashSet::new());
    let show_details = RwSignal::new(false);
    let (editing_id, set_editing_id) = signal::<Option<i32>>(None);

    let search = RwSignal::new(String::new());
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(10usize);
    let (total_pages, set_total_pages) = signal(0usize);
    let (total_count, set_total_count) = signal(0usize);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let term = search.get_untracked();
            // Backend pages are 1-based
            match fetch_customers(&term, page.get_untracked() + 1, page_size.get_untracked())
                .await
            {
                Ok(paged) => {
                    set_total_pages.set(paged.total_pages as usize);
                    set_total_count.set(paged.total_items as usize);
                    let rows: Vec<CustomerRow> =
                        paged.data.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_create_new = move || {
        set_editing_id.set(None);
        show_details.set(true);
    };

    let handle_edit = move |id: i32| {
        set_editing_id.set(Some(id));
        show_details.set(true);
    };

    let toggle_select = move |id: i32, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let clear_selection = move || set_selected.set(HashSet::new());

    let delete_selected = move || {
        let ids: Vec<i32> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let count = ids.len();
        // Simple confirm dialog via browser
        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message(&format!("Delete selected customers? Count: {}", count))
                    .unwrap_or(false)
            } else {
                false
            }
        };
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            for id in ids {
                if let Err(e) = delete_customer(id).await {
                    log::warn!("Failed to delete customer {}: {}", id, e);
                }
            }
            // Yield one microtask so the refetch observes the deletes
            let _ = wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(
                &wasm_bindgen::JsValue::UNDEFINED,
            ))
            .await;
        });
        // Immediately refetch and clear selection (optimistic)
        fetch();
        clear_selection();
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Customers"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"New customer"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| delete_selected() disabled={move || selected.get().is_empty()}>
                        {icon("delete")}
                        {move || format!("Delete ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            <div class="filter-row">
                <input
                    type="text"
                    class="filter-row__search"
                    placeholder="Search by name or email..."
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

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox"></th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Email"}</th>
                            <th class="table__header-cell">{"Phone"}</th>
                            <th class="table__header-cell">{"Address"}</th>
                            <th class="table__header-cell">{"Active"}</th>
                            <th class="table__header-cell">{"Created"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id = row.id;
                            let is_selected = Signal::derive(move || selected.get().contains(&id));
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=move || is_selected.get()
                                    on:click=move |_| handle_edit(id)
                                >
                                    <td class="table__cell" on:click=move |ev| ev.stop_propagation()>
                                        <input
                                            type="checkbox"
                                            class="table__checkbox"
                                            prop:checked=move || is_selected.get()
                                            on:change=move |ev| {
                                                toggle_select(id, event_target_checked(&ev));
                                            }
                                        />
                                    </td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.email}</td>
                                    <td class="table__cell">{row.phone}</td>
                                    <td class="table__cell">{row.address}</td>
                                    <td class="table__cell">{row.active}</td>
                                    <td class="table__cell">{row.created_at}</td>
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

            <Dialog open=show_details>
                <DialogSurface>
                    <DialogBody>
                        {move || {
                            let on_saved = Rc::new(move |_| {
                                show_details.set(false);
                                fetch();
                            });
                            let on_cancel = Rc::new(move |_| show_details.set(false));
                            view! {
                                <CustomerDetails
                                    id=editing_id.get()
                                    on_saved=on_saved
                                    on_cancel=on_cancel
                                />
                            }
                        }}
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}

async fn fetch_customers(
    search: &str,
    page: usize,
    page_size: usize,
) -> Result<PagedResponse<Customer>, String> {
    let mut query = format!("?page={}&pageSize={}", page, page_size);
    if !search.trim().is_empty() {
        query.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }

    let response = Request::get(&api_url(&format!("/api/customers{}", query)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<PagedResponse<Customer>>()
        .await
        .map_err(|e| e.to_string())
}

async fn delete_customer(id: i32) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/customers/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
