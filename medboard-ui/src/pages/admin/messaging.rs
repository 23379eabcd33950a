//! Admin Messaging Page
//!
//! SMS and mail outboxes. Sending appends a row and shows a toast; no
//! message ever leaves the building.

use leptos::*;

use crate::api;
use crate::api::types::{MailMessage, SmsMessage};
use crate::components::{Modal, SubmitRow, TabButton, TextAreaField, TextField};
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Sms,
    Mail,
}

/// Messaging page
#[component]
pub fn Messaging() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Sms);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"SMS & Mail"</h1>
                <p class="text-gray-400 mt-1">"Outboxes only; nothing is delivered anywhere"</p>
            </div>

            <div class="flex space-x-2">
                <TabButton label="SMS" active=Signal::derive(move || tab.get() == Tab::Sms)
                    on_click=move |_| set_tab.set(Tab::Sms) />
                <TabButton label="Mail" active=Signal::derive(move || tab.get() == Tab::Mail)
                    on_click=move |_| set_tab.set(Tab::Mail) />
            </div>

            {move || match tab.get() {
                Tab::Sms => view! { <SmsSection /> }.into_view(),
                Tab::Mail => view! { <MailSection /> }.into_view(),
            }}
        </div>
    }
}

/// Render an outbox timestamp (ms since epoch) as local date-time
fn format_sent_at(sent_at: i64) -> String {
    chrono::DateTime::from_timestamp_millis(sent_at)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}

// ============ SMS ============

#[component]
fn SmsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<SmsMessage>::new());
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<SmsMessage>("admin", "sms", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-4">
            <div class="flex justify-end">
                <button
                    on:click=move |_| set_show_form.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Compose SMS"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || set_show_form.set(false);
                    view! { <SmsForm records=records on_close=on_close /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="space-y-3">
                {move || {
                    let rows = records.get();
                    if rows.is_empty() {
                        view! {
                            <div class="text-center py-10">
                                <p class="text-gray-400">"The SMS outbox is empty."</p>
                            </div>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|sms| {
                            let state = state_for_rows.clone();
                            let id = sms.id;
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex items-start justify-between">
                                    <div>
                                        <span class="font-medium">{sms.recipient.clone()}</span>
                                        <p class="text-gray-400 text-sm mt-1">{sms.body.clone()}</p>
                                    </div>
                                    <div class="flex flex-col items-end space-y-2 shrink-0 ml-4">
                                        <span class="text-gray-500 text-xs">{format_sent_at(sms.sent_at)}</span>
                                        <button
                                            on:click=move |_| {
                                                let state = state.clone();
                                                spawn_local(async move {
                                                    match api::delete_record("admin", "sms", id).await {
                                                        Ok(()) => {
                                                            records.update(|r| r.retain(|m| m.id != id));
                                                            state.show_success("Message removed");
                                                        }
                                                        Err(e) => state.show_error(&e),
                                                    }
                                                });
                                            }
                                            class="px-3 py-1 bg-red-700/70 hover:bg-red-700 rounded text-xs transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn SmsForm(
    records: RwSignal<Vec<SmsMessage>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (recipient, set_recipient) = create_signal(String::new());
    let (body, set_body) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if recipient.get().trim().is_empty() || body.get().trim().is_empty() {
            state_for_submit.show_error("Recipient and message are required");
            return;
        }

        // The server stamps sent_at
        let payload = serde_json::json!({
            "recipient": recipient.get(),
            "body": body.get(),
        });

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_record::<serde_json::Value, SmsMessage>("admin", "sms", &payload)
                .await
            {
                Ok(saved) => {
                    records.update(|r| r.push(saved));
                    state_clone.show_success("SMS sent");
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title="Compose SMS" on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Recipient" value=recipient set_value=set_recipient placeholder="Phone number" />
                <TextAreaField label="Message" value=body set_value=set_body />
                <SubmitRow submitting=submitting on_cancel=on_close label="Send" busy_label="Sending..." />
            </form>
        </Modal>
    }
}

// ============ Mail ============

#[component]
fn MailSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<MailMessage>::new());
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<MailMessage>("admin", "mail", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-4">
            <div class="flex justify-end">
                <button
                    on:click=move |_| set_show_form.set(true)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Compose Mail"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || set_show_form.set(false);
                    view! { <MailForm records=records on_close=on_close /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="space-y-3">
                {move || {
                    let rows = records.get();
                    if rows.is_empty() {
                        view! {
                            <div class="text-center py-10">
                                <p class="text-gray-400">"The mail outbox is empty."</p>
                            </div>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|mail| {
                            let state = state_for_rows.clone();
                            let id = mail.id;
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex items-start justify-between">
                                    <div>
                                        <div class="flex items-center space-x-2">
                                            <span class="font-medium">{mail.subject.clone()}</span>
                                            <span class="text-gray-500 text-sm">{mail.recipient.clone()}</span>
                                        </div>
                                        <p class="text-gray-400 text-sm mt-1">{mail.body.clone()}</p>
                                    </div>
                                    <div class="flex flex-col items-end space-y-2 shrink-0 ml-4">
                                        <span class="text-gray-500 text-xs">{format_sent_at(mail.sent_at)}</span>
                                        <button
                                            on:click=move |_| {
                                                let state = state.clone();
                                                spawn_local(async move {
                                                    match api::delete_record("admin", "mail", id).await {
                                                        Ok(()) => {
                                                            records.update(|r| r.retain(|m| m.id != id));
                                                            state.show_success("Mail removed");
                                                        }
                                                        Err(e) => state.show_error(&e),
                                                    }
                                                });
                                            }
                                            class="px-3 py-1 bg-red-700/70 hover:bg-red-700 rounded text-xs transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn MailForm(
    records: RwSignal<Vec<MailMessage>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (recipient, set_recipient) = create_signal(String::new());
    let (subject, set_subject) = create_signal(String::new());
    let (body, set_body) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if recipient.get().trim().is_empty()
            || subject.get().trim().is_empty()
            || body.get().trim().is_empty()
        {
            state_for_submit.show_error("Recipient, subject and body are required");
            return;
        }

        let payload = serde_json::json!({
            "recipient": recipient.get(),
            "subject": subject.get(),
            "body": body.get(),
        });

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_record::<serde_json::Value, MailMessage>("admin", "mail", &payload)
                .await
            {
                Ok(saved) => {
                    records.update(|r| r.push(saved));
                    state_clone.show_success("Mail sent");
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title="Compose Mail" on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Recipient" value=recipient set_value=set_recipient placeholder="name@example.com" />
                <TextField label="Subject" value=subject set_value=set_subject />
                <TextAreaField label="Body" value=body set_value=set_body />
                <SubmitRow submitting=submitting on_cancel=on_close label="Send" busy_label="Sending..." />
            </form>
        </Modal>
    }
}
