//! `/callback` landing after an external-provider round trip.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::session::callback::{CallbackResolver, TOKEN_PARAM};
use crate::session::store::SessionHandle;

#[component]
pub fn CallbackPage() -> impl IntoView {
    let store = expect_context::<SessionHandle>();
    let location = use_location();
    let query = use_query_map();
    let navigate = use_navigate();

    // The resolver is threaded through the effect's previous value so each
    // distinct landing is resolved exactly once.
    Effect::new(move |prev: Option<CallbackResolver>| {
        let mut resolver = prev.unwrap_or_default();
        let search = location.search.get();
        let token = query.with(|q| q.get(TOKEN_PARAM));
        if let Some(next) = resolver.resolve(store.as_ref(), &search, token.as_deref()) {
            navigate(next.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        resolver
    });

    view! { <div class="loading">"Redirecting..."</div> }
}
