//! Route guard wrapper for protected views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::guard::{AppRoute, GuardState};
use crate::session::store::SessionHandle;

/// Renders `children` only when the guard allows the current location.
///
/// Re-evaluates the guard against the current path on every location
/// change, so a token cleared by another component (a failed profile fetch,
/// a logout) is noticed on the next navigation. Starts in `Checking`, which
/// is also what the server renders since effects only run in the browser.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionHandle>();
    let location = use_location();
    let navigate = use_navigate();
    let guard = RwSignal::new(GuardState::Checking);

    Effect::new(move || {
        location.search.track();
        let next = location
            .pathname
            .with(|path| GuardState::at_path(store.get_token().as_deref(), path));
        guard.set(next);
        if next == GuardState::Unauthenticated {
            navigate(AppRoute::Login.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || guard.get().may_render()
            fallback=move || {
                view! {
                    <div class="loading">
                        {move || if guard.get() == GuardState::Checking { "Loading..." } else { "Redirecting..." }}
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
