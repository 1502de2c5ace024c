use super::model;
use contracts::domain::a002_customer::CustomerDto;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for Customer details form
#[derive(Clone)]
pub struct CustomerDetailsViewModel {
    pub form: RwSignal<CustomerDto>,
    pub error: RwSignal<Option<String>>,
}

impl CustomerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CustomerDto::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<i32>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(customer) => {
                        let dto = CustomerDto {
                            id: Some(customer.id),
                            name: customer.name,
                            email: customer.email,
                            phone: customer.phone,
                            address: customer.address,
                            is_active: customer.is_active,
                        };
                        form.set(dto);
                    }
                    Err(e) => error.set(Some(format!("Load failed: {}", e))),
                }
            });
        }
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }

        let on_saved_cb = on_saved.clone();
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(()) => (on_saved_cb)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
