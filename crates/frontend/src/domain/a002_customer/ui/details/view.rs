use super::view_model::CustomerDetailsViewModel;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

/// Customer create/edit form, hosted in the list's dialog.
#[component]
#[allow(non_snake_case)]
pub fn CustomerDetails(
    id: Option<i32>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new();
    vm.load_if_needed(id);

    let form = vm.form;
    let error = vm.error;

    let title = if id.is_some() {
        "Edit customer"
    } else {
        "New customer"
    };

    // `on_saved`/`on_cancel` are `Rc<dyn Fn(())>` (!Send), but thaw's `Button`
    // `on_click` prop requires a `Send + Sync` callback. Store them behind a
    // local `StoredValue` (a `Copy + Send + Sync` handle) so the event closures
    // capture only the handle, not the `Rc` itself.
    let on_saved = StoredValue::new_local(on_saved);
    let on_cancel = StoredValue::new_local(on_cancel);

    let save = {
        let vm = vm.clone();
        move |_| {
            vm.save_command(on_saved.get_value());
        }
    };

    let cancel = move |_| on_cancel.with_value(|f| f(()));

    view! {
        <div class="details-form">
            <h2 class="details-form__title">{title}</h2>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            <Flex vertical=true gap=FlexGap::Medium>
                <div>
                    <Label>"Name"</Label>
                    <input
                        type="text"
                        class="details-form__input"
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                        }
                    />
                </div>

                <div>
                    <Label>"Email"</Label>
                    <input
                        type="email"
                        class="details-form__input"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            form.update(|f| f.email = event_target_value(&ev));
                        }
                    />
                </div>

                <div>
                    <Label>"Phone"</Label>
                    <input
                        type="text"
                        class="details-form__input"
                        prop:value=move || form.get().phone.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.phone = if value.trim().is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </div>

                <div>
                    <Label>"Address"</Label>
                    <input
                        type="text"
                        class="details-form__input"
                        prop:value=move || form.get().address.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| {
                                f.address = if value.trim().is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </div>

                <div>
                    <label class="details-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().is_active
                            on:change=move |ev| {
                                form.update(|f| f.is_active = event_target_checked(&ev));
                            }
                        />
                        "Active"
                    </label>
                </div>
            </Flex>

            <Flex justify=FlexJustify::End gap=FlexGap::Small class="details-form__actions">
                <Button appearance=ButtonAppearance::Subtle on_click=cancel>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    "Save"
                </Button>
            </Flex>
        </div>
    }
}
