use crate::Route;
use crate::client::{BlogClientWeb, api_config};
use crate::context::{use_notifier, use_session};
use dioxus::prelude::*;
use inkwell_client::AppRoute;
use inkwell_client::pages::{LoginForm, authenticate};
use inkwell_client::routes::guest_redirect;

const INPUT_CLASS: &str = "w-full px-5 py-4 text-lg border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-500 transition placeholder-gray-500 text-black";

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();

    let mut credentials = use_signal(LoginForm::default);
    let mut loading = use_signal(|| false);

    if let Some(to) = guest_redirect(&AppRoute::Login, session.read().user_info()) {
        navigator.replace(Route::from(to));
        return rsx! {};
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(err) = credentials.read().validate() {
            notifier.show(err.notice("Error"));
            return;
        }
        let form = credentials.read().clone();
        loading.set(true);
        spawn(async move {
            let client = BlogClientWeb::new(api_config());
            match authenticate(&form, &client).await {
                Ok(user) => {
                    let persisted = session.write().log_in(user.clone());
                    if let Err(err) = &persisted {
                        tracing::warn!(error = %err, "session will not survive a reload");
                    }
                    notifier.outcome(LoginForm::signed_in(&user, persisted));
                }
                Err(err) => notifier.show(err.notice("Error")),
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "min-h-[80vh] flex items-center justify-center px-4",
            div { class: "w-full max-w-md bg-white rounded-2xl shadow-xl p-8 md:p-10",
                h1 { class: "text-3xl font-bold text-center text-gray-900 mb-2", "Welcome Back" }
                p { class: "text-center text-gray-500 mb-8", "Sign in to continue" }

                form { onsubmit: on_submit, class: "space-y-6",
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Username" }
                        input {
                            class: INPUT_CLASS,
                            r#type: "text",
                            placeholder: "Enter your username",
                            value: "{credentials.read().username}",
                            oninput: move |evt| credentials.write().username = evt.value(),
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Password" }
                        input {
                            class: INPUT_CLASS,
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{credentials.read().password}",
                            oninput: move |evt| credentials.write().password = evt.value(),
                        }
                    }
                    button {
                        class: "w-full py-4 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-xl shadow-md transition disabled:opacity-50 disabled:cursor-not-allowed",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                p { class: "text-center mt-6 text-gray-600",
                    "Don't have an account? "
                    Link { to: Route::Register {}, class: "text-blue-600 hover:text-blue-800 font-medium", "Register here" }
                }
            }
        }
    }
}
