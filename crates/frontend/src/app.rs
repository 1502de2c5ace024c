use crate::layout::global_context::AppGlobalContext;
use crate::layout::session::SessionContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Session context: current role and the acting customer. Passed
    // explicitly through context instead of living in ambient globals.
    provide_context(SessionContext::new());

    view! {
        <AppRoutes />
    }
}
