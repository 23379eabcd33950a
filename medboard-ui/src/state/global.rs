//! Global Application State
//!
//! Reactive state management using Leptos signals. The only state shared
//! across pages is the session label, the toast messages, and the loading
//! flag; every feature page owns its own records.

use leptos::*;

/// The signed-in session label
///
/// Nothing validates this; it is whatever the simulated login returned,
/// kept so the chrome can show a name and the logout button has something
/// to clear.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub role: String,
    pub display_name: String,
    pub token: String,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current session, if the user went through the login page
    pub session: RwSignal<Option<Session>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(load_session()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Store the session and persist it for the next page load
    pub fn sign_in(&self, session: Session) {
        save_session(Some(&session));
        self.session.set(Some(session));
    }

    /// Drop the session
    pub fn sign_out(&self) {
        save_session(None);
        self.session.set(None);
    }
}

const SESSION_KEY: &str = "medboard_session";

fn load_session() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

fn save_session(session: Option<&Session>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            match session {
                Some(session) => {
                    if let Ok(raw) = serde_json::to_string(session) {
                        let _ = storage.set_item(SESSION_KEY, &raw);
                    }
                }
                None => {
                    let _ = storage.remove_item(SESSION_KEY);
                }
            }
        }
    }
}
