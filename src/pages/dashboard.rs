//! Protected dashboard showing the authenticated user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `ProtectedRoute`. Fetches the profile once per entry;
//! a rejected fetch invalidates the session and returns to `/login` without
//! ever showing protected content.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::profile_card::ProfileCard;
use crate::net::api::ApiHandle;
use crate::session::profile::{self, ProfileOutcome};
use crate::session::store::SessionHandle;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionHandle>();
    let api = expect_context::<ApiHandle>();
    let navigate = use_navigate();
    let auth = RwSignal::new(AuthState::loading());

    let fetch_store = store.clone();
    let fetch_navigate = navigate.clone();
    Effect::new(move || {
        let api = api.clone();
        let store = fetch_store.clone();
        let navigate = fetch_navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = profile::load_profile(api.as_ref(), store.as_ref()).await;
            if auth.try_update(|s| s.apply(&outcome)).is_none() {
                log::debug!("dashboard disposed before profile resolved");
                return;
            }
            if let ProfileOutcome::Invalidated(route) = outcome {
                navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    });

    let on_logout = Callback::new(move |()| {
        let next = profile::logout(store.as_ref());
        navigate(next.path(), NavigateOptions::default());
    });

    view! {
        <div class="dashboard">
            {move || {
                let state = auth.get();
                let ready = state.ready();
                match state.profile {
                    Some(profile) if ready => view! { <ProfileCard profile on_logout/> }.into_any(),
                    _ => view! { <div class="loading">"Loading..."</div> }.into_any(),
                }
            }}
        </div>
    }
}
