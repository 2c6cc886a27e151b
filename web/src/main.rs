use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, SiteShell};
use ui::core::locale::LocaleCode;
use ui::core::storage::PreferenceStore;
use ui::views::{Contact, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::HomePage { locale: LocaleCode::default().to_string() })]
    #[layout(WebShell)]
        #[route("/:locale")]
        HomePage { locale: String },
        #[route("/:locale/contact")]
        ContactPage { locale: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn nav_home(locale: &str, label: &str, class: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::HomePage { locale: locale.to_string() },
        "{label}"
    })
}

fn nav_contact(locale: &str, label: &str, class: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::ContactPage { locale: locale.to_string() },
        "{label}"
    })
}

/// The server renders every page from the embedded bundles; only the browser
/// keeps preferences.
fn preference_store() -> Box<dyn PreferenceStore> {
    if cfg!(feature = "server") {
        Box::new(ui::core::storage::MemoryStore::new())
    } else {
        ui::core::storage::default_store()
    }
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");

    let config = api::ProxyConfig::from_env();
    let state = api::ProxyState::from_config(&config).expect("failed to build proxy clients");

    let router = axum::Router::new()
        .nest("/api", api::router(state))
        .serve_dioxus_application(ServeConfigBuilder::default(), App)
        .into_make_service();

    let address = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .expect("failed to bind server address");
    tracing::info!(%address, "serving folio");
    axum::serve(listener, router).await.expect("server error");
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        contact: nav_contact,
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Web layout: resolves the locale from the URL, installs the translation
/// manager for it and wraps the page in the shared shell.
#[component]
fn WebShell() -> Element {
    let route = use_route::<Route>();
    let raw = match &route {
        Route::HomePage { locale } | Route::ContactPage { locale } => locale.as_str(),
        Route::NotFound { .. } => "",
    };
    let parsed = raw.parse::<LocaleCode>();
    let locale = parsed.clone().unwrap_or_default();

    ui::provide_translation(locale, preference_store);

    if let Err(err) = parsed {
        tracing::info!("{err}; redirecting to /{locale}");
        return rsx! {
            LocaleRedirect {}
        };
    }

    rsx! {
        SiteShell {
            Outlet::<Route> {}
        }
    }
}

// `WebShell` reads the locale; the pages only key on it.
#[component]
fn HomePage(locale: String) -> Element {
    rsx! { Home { key: "{locale}" } }
}

#[component]
fn ContactPage(locale: String) -> Element {
    rsx! { Contact { key: "{locale}" } }
}

#[component]
fn LocaleRedirect() -> Element {
    let nav = navigator();
    use_effect(move || {
        nav.replace(Route::HomePage {
            locale: LocaleCode::default().to_string(),
        });
    });
    rsx! {}
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::info!(path = %segments.join("/"), "unknown page");
    rsx! {
        LocaleRedirect {}
    }
}
