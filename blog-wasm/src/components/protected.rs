use crate::Route;
use crate::context::use_session;
use dioxus::prelude::*;
use inkwell_client::routes::{Access, guard};

/// Layout wrapped around pages that need a session. Without one the
/// navigation is replaced by the login page before anything renders.
#[component]
pub fn Protected() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let access = guard(&route.to_app_route(), session.read().user_info());
    match access {
        Access::Render => rsx! { Outlet::<Route> {} },
        Access::Redirect(to) => {
            navigator.replace(Route::from(to));
            rsx! { p { class: "text-center text-gray-500 py-12", "Redirecting to login..." } }
        }
    }
}
