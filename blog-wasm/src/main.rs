use crate::components::{MainLayout, Protected};
use crate::context::{Notifier, PendingNotice};
use crate::pages::{AuthorPosts, Create, Edit, Home, Login, NotFound, PostDetail, Register};
use crate::storage::LocalStorageSession;
use dioxus::prelude::*;
use inkwell_client::{AppRoute, SessionStore};

mod client;
mod components;
mod context;
mod pages;
mod storage;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/post/:id")]
        PostDetail { id: String },
        #[route("/author/:id")]
        AuthorPosts { id: String },
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[layout(Protected)]
            #[route("/create")]
            Create {},
            #[route("/edit/:id")]
            Edit { id: String },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    pub fn to_app_route(&self) -> AppRoute {
        match self {
            Route::Home {} => AppRoute::Home,
            Route::PostDetail { id } => AppRoute::PostDetail { id: id.clone() },
            Route::AuthorPosts { id } => AppRoute::AuthorPosts { id: id.clone() },
            Route::Login {} => AppRoute::Login,
            Route::Register {} => AppRoute::Register,
            Route::Create {} => AppRoute::Create,
            Route::Edit { id } => AppRoute::Edit { id: id.clone() },
            Route::NotFound { segments } => AppRoute::NotFound {
                path: format!("/{}", segments.join("/")),
            },
        }
    }
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Home => Route::Home {},
            AppRoute::PostDetail { id } => Route::PostDetail { id },
            AppRoute::Create => Route::Create {},
            AppRoute::Edit { id } => Route::Edit { id },
            AppRoute::Login => Route::Login {},
            AppRoute::Register => Route::Register {},
            AppRoute::AuthorPosts { id } => Route::AuthorPosts { id },
            AppRoute::NotFound { path } => Route::NotFound {
                segments: path
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
// Utility classes are compiled in the browser; no tailwind build step.
const TAILWIND_RUNTIME: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let session = use_signal(|| SessionStore::init(LocalStorageSession));
    let pending = use_signal(|| None::<PendingNotice>);

    use_context_provider(|| session);
    use_context_provider(|| Notifier::new(pending));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_RUNTIME }
        Router::<Route> {}
    }
}
