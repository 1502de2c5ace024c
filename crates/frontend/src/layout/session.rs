use leptos::prelude::*;

/// Who the current actor is. Switched explicitly from the top header;
/// there is no authentication, the backend trusts the ids it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Admin,
}

/// Session-wide state, provided once at app start and passed through
/// context rather than living in ambient globals.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub role: RwSignal<Role>,
    /// Acting customer for booking submissions and "my bookings".
    /// TODO: replace with the signed-in customer once login lands.
    pub customer_id: i32,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            role: RwSignal::new(Role::Customer),
            customer_id: 1,
        }
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in context")
}
