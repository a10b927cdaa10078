//! Profile card for the authenticated user.

use leptos::prelude::*;

use crate::net::types::UserProfile;

#[component]
pub fn ProfileCard(profile: UserProfile, on_logout: Callback<()>) -> impl IntoView {
    let name = profile.display_name().to_owned();
    let providers = profile.providers_label();
    let member_since = profile.member_since().to_owned();

    view! {
        <div class="profile-card">
            <h1>"Welcome, " {name} "!"</h1>
            <div class="profile-info">
                <div class="info-row">
                    <span class="label">"Email:"</span>
                    <span class="value">{profile.email}</span>
                </div>
                <div class="info-row">
                    <span class="label">"Provider:"</span>
                    <span class="value provider">{providers}</span>
                </div>
                <div class="info-row">
                    <span class="label">"Member since:"</span>
                    <span class="value">{member_since}</span>
                </div>
            </div>
            <button class="btn-logout" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </div>
    }
}
