//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::net::api::{ApiHandle, HttpAuthApi};
use crate::pages::{callback::CallbackPage, dashboard::DashboardPage, login::LoginPage};
use crate::session::guard::AppRoute;
use crate::session::store::{BrowserSessionStore, SessionHandle};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, identity API, and config to every page and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    provide_context::<SessionHandle>(BrowserSessionStore::handle());
    provide_context::<ApiHandle>(HttpAuthApi::new(config.clone()).into_handle());
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-portal.css"/>
        <Title text="Auth Platform"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("callback") view=CallbackPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Login.path()/> }/>
            </Routes>
        </Router>
    }
}
