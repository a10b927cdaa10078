//! `/login` entry point: local email/password auth plus external providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Also the landing page for failed external round trips: the server sends
//! the browser to `/login?error=<code>` and the code is shown through the
//! fixed message taxonomy.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::ClientConfig;
use crate::net::api::ApiHandle;
use crate::net::types::ProviderId;
use crate::session::store::SessionHandle;
use crate::session::submit::{self, AuthMode};
use crate::state::login::LoginFormState;

/// Query parameter carrying a redirect failure code.
pub const ERROR_PARAM: &str = "error";

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionHandle>();
    let api = expect_context::<ApiHandle>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let query = use_query_map();
    let form = RwSignal::new(LoginFormState::default());

    Effect::new(move || {
        let raw = query.with(|q| q.get(ERROR_PARAM));
        form.update(|f| f.apply_error_param(raw.as_deref()));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((mode, creds)) = form.try_update(LoginFormState::begin_submit).flatten() else {
            return;
        };
        let api = api.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = submit::submit_local(api.as_ref(), store.as_ref(), mode, &creds).await;
            if form.try_update(|f| f.finish_submit(&result)).is_none() {
                log::debug!("login page disposed before {} resolved", mode.as_str());
                return;
            }
            if let Ok(next) = result {
                navigate(next.path(), NavigateOptions::default());
            }
        });
    };

    let loading = move || form.with(|f| f.loading);
    let is_register = move || form.with(|f| f.mode == AuthMode::Register);

    let provider_buttons = ProviderId::EXTERNAL
        .into_iter()
        .map(|provider| {
            let config = config.clone();
            let label = provider.login_label();
            let class = format!("btn-{provider}");
            let on_click = move |_| {
                if let Err(e) = submit::start_external_login(&config, &provider) {
                    log::warn!("external login for {provider} did not start: {e}");
                    form.update(|f| f.error = Some(e.user_message()));
                }
            };
            view! {
                <button class=class on:click=on_click disabled=loading>
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Auth Platform"</h1>
                <p class="subtitle">{move || form.with(|f| f.mode.subtitle())}</p>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <div class="error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=is_register>
                        <input
                            type="text"
                            placeholder="Full Name"
                            required=true
                            disabled=loading
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </Show>
                    <input
                        type="email"
                        placeholder="Email Address"
                        required=true
                        autocomplete="email"
                        disabled=loading
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required=true
                        minlength="6"
                        autocomplete=move || if is_register() { "new-password" } else { "current-password" }
                        disabled=loading
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button type="submit" class="btn-primary" disabled=loading>
                        {move || form.with(LoginFormState::submit_label)}
                    </button>
                </form>

                <div class="divider">"OR"</div>
                {provider_buttons}

                <p class="toggle-auth">
                    {move || form.with(|f| f.mode.toggle_prompt().0)}
                    <button type="button" disabled=loading on:click=move |_| form.update(LoginFormState::toggle_mode)>
                        {move || form.with(|f| f.mode.toggle_prompt().1)}
                    </button>
                </p>
            </div>
        </div>
    }
}
