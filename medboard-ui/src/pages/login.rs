//! Login Page
//!
//! Simulated sign-in: required-field checks, a fixed spinner delay for
//! feel, then straight into the chosen role's section. Nothing validates
//! the credentials anywhere.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{SelectField, TextField};
use crate::state::global::{GlobalState, Session};

/// Cosmetic delay before the login call, in milliseconds
const LOGIN_SPINNER_MS: u32 = 800;

/// Role-picking login page
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (role, set_role) = create_signal("admin".to_string());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.clear_error();

        if email.get().trim().is_empty() || password.get().trim().is_empty() {
            state.show_error("Email and password are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let navigate = navigate.clone();
        let selected_role = role.get();
        let email_value = email.get();
        let password_value = password.get();
        spawn_local(async move {
            // Spinner cosmetics only; there is no real authentication
            TimeoutFuture::new(LOGIN_SPINNER_MS).await;

            match api::login(&selected_role, &email_value, &password_value).await {
                Ok(response) => {
                    let target = format!("/{}/dashboard", response.role);
                    state_clone.sign_in(Session {
                        role: response.role,
                        display_name: response.display_name,
                        token: response.token,
                    });
                    state_clone.show_success("Signed in");
                    navigate(&target, Default::default());
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-md border border-gray-700">
                <div class="text-center mb-8">
                    <div class="text-4xl mb-2">"🏥"</div>
                    <h1 class="text-2xl font-bold">"Medboard Console"</h1>
                    <p class="text-gray-400 text-sm mt-1">"Sign in to your section"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <SelectField
                        label="Role"
                        value=role
                        set_value=set_role
                        options=vec![
                            ("admin", "Administrator"),
                            ("doctor", "Doctor"),
                            ("patient", "Patient"),
                        ]
                    />
                    <TextField label="Email" value=email set_value=set_email placeholder="you@medboard.example" />
                    <PasswordField value=password set_value=set_password />

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                               transition-colors flex items-center justify-center space-x-2"
                    >
                        {move || if submitting.get() {
                            view! {
                                <div class="loading-spinner w-5 h-5" />
                                <span>"Signing in..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Sign in"</span>
                            }.into_view()
                        }}
                    </button>
                </form>

                <p class="text-gray-500 text-xs text-center mt-6">
                    "Demo console: any non-empty credentials work."
                </p>
            </div>
        </div>
    }
}

#[component]
fn PasswordField(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Password"</label>
            <input
                type="password"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
