//! Admin Communications Page
//!
//! Notice board, meeting schedule, and public enquiries behind a tab
//! toggle. Enquiries arrive from the marketing site and are read-only
//! here apart from deletion.

use leptos::*;

use crate::api;
use crate::api::types::{Enquiry, Meeting, Notice};
use crate::components::{
    DateField, Modal, SelectField, SubmitRow, TabButton, TextAreaField, TextField,
};
use crate::pages::home::today;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Notices,
    Meetings,
    Enquiries,
}

/// Communications page
#[component]
pub fn Communications() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Notices);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Communications"</h1>
                <p class="text-gray-400 mt-1">"Notices, meetings, and public enquiries"</p>
            </div>

            <div class="flex space-x-2">
                <TabButton label="Notices" active=Signal::derive(move || tab.get() == Tab::Notices)
                    on_click=move |_| set_tab.set(Tab::Notices) />
                <TabButton label="Meetings" active=Signal::derive(move || tab.get() == Tab::Meetings)
                    on_click=move |_| set_tab.set(Tab::Meetings) />
                <TabButton label="Enquiries" active=Signal::derive(move || tab.get() == Tab::Enquiries)
                    on_click=move |_| set_tab.set(Tab::Enquiries) />
            </div>

            {move || match tab.get() {
                Tab::Notices => view! { <NoticesSection /> }.into_view(),
                Tab::Meetings => view! { <MeetingsSection /> }.into_view(),
                Tab::Enquiries => view! { <EnquiriesSection /> }.into_view(),
            }}
        </div>
    }
}

// ============ Notices ============

#[component]
fn NoticesSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Notice>::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Notice>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Notice>("admin", "notices", "").await {
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
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Post Notice"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <NoticeForm existing=editing.get() records=records on_close=on_close /> }
                        .into_view()
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
                                <p class="text-gray-400">"The notice board is empty."</p>
                            </div>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|notice| {
                            let state = state_for_rows.clone();
                            let id = notice.id;
                            let edit_copy = notice.clone();
                            view! {
                                <div class="bg-gray-800 rounded-xl p-5 border border-gray-700">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <div class="flex items-center space-x-2">
                                                <h3 class="font-semibold">{notice.title.clone()}</h3>
                                                <span class="bg-gray-700 text-xs px-2 py-0.5 rounded-full capitalize">
                                                    {notice.audience.clone()}
                                                </span>
                                            </div>
                                            <p class="text-gray-400 text-sm mt-2">{notice.body.clone()}</p>
                                        </div>
                                        <span class="text-gray-500 text-sm shrink-0 ml-4">{notice.date.clone()}</span>
                                    </div>
                                    <div class="flex justify-end space-x-2 mt-3">
                                        <button
                                            on:click=move |_| {
                                                set_editing.set(Some(edit_copy.clone()));
                                                set_show_form.set(true);
                                            }
                                            class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-xs transition-colors"
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            on:click=move |_| {
                                                let state = state.clone();
                                                spawn_local(async move {
                                                    match api::delete_record("admin", "notices", id).await {
                                                        Ok(()) => {
                                                            records.update(|r| r.retain(|n| n.id != id));
                                                            state.show_success("Notice removed");
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
fn NoticeForm(
    existing: Option<Notice>,
    records: RwSignal<Vec<Notice>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (title, set_title) = create_signal(initial.title);
    let (body, set_body) = create_signal(initial.body);
    let (audience, set_audience) = create_signal(if initial.audience.is_empty() {
        "all".to_string()
    } else {
        initial.audience
    });
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if title.get().trim().is_empty() || body.get().trim().is_empty() {
            state_for_submit.show_error("Title and body are required");
            return;
        }

        let record = Notice {
            id,
            title: title.get(),
            body: body.get(),
            audience: audience.get(),
            date: if is_edit && !initial.date.is_empty() {
                initial.date.clone()
            } else {
                today()
            },
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Notice, Notice>("admin", "notices", id, &record).await
            } else {
                api::create_record::<Notice, Notice>("admin", "notices", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|n| n.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Notice updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Notice posted");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let modal_title = if is_edit { "Edit Notice" } else { "Post Notice" };

    view! {
        <Modal title=modal_title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Title" value=title set_value=set_title />
                <TextAreaField label="Body" value=body set_value=set_body />
                <SelectField
                    label="Audience"
                    value=audience
                    set_value=set_audience
                    options=vec![
                        ("all", "Everyone"),
                        ("doctors", "Doctors"),
                        ("patients", "Patients"),
                        ("staff", "Staff"),
                    ]
                />
                <SubmitRow submitting=submitting on_cancel=on_close label="Post" busy_label="Posting..." />
            </form>
        </Modal>
    }
}

// ============ Meetings ============

#[component]
fn MeetingsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Meeting>::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Meeting>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Meeting>("admin", "meetings", "").await {
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
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Schedule Meeting"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <MeetingForm existing=editing.get() records=records on_close=on_close /> }
                        .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Title"</th>
                            <th class="py-3 px-4">"Agenda"</th>
                            <th class="py-3 px-4">"Location"</th>
                            <th class="py-3 px-4">"Date"</th>
                            <th class="py-3 px-4">"Time"</th>
                            <th class="py-3 px-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = records.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="text-center text-gray-400 py-10">
                                            "No meetings scheduled."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|meeting| {
                                    let state = state_for_rows.clone();
                                    let id = meeting.id;
                                    let edit_copy = meeting.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{meeting.title.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{meeting.agenda.clone()}</td>
                                            <td class="py-3 px-4">{meeting.location.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{meeting.date.clone()}</td>
                                            <td class="py-3 px-4">{meeting.time.clone()}</td>
                                            <td class="py-3 px-4 text-right space-x-2">
                                                <button
                                                    on:click=move |_| {
                                                        set_editing.set(Some(edit_copy.clone()));
                                                        set_show_form.set(true);
                                                    }
                                                    class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-xs transition-colors"
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    on:click=move |_| {
                                                        let state = state.clone();
                                                        spawn_local(async move {
                                                            match api::delete_record("admin", "meetings", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|m| m.id != id));
                                                                    state.show_success("Meeting removed");
                                                                }
                                                                Err(e) => state.show_error(&e),
                                                            }
                                                        });
                                                    }
                                                    class="px-3 py-1 bg-red-700/70 hover:bg-red-700 rounded text-xs transition-colors"
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn MeetingForm(
    existing: Option<Meeting>,
    records: RwSignal<Vec<Meeting>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (title, set_title) = create_signal(initial.title);
    let (agenda, set_agenda) = create_signal(initial.agenda);
    let (location, set_location) = create_signal(initial.location);
    let (date, set_date) = create_signal(if initial.date.is_empty() {
        today()
    } else {
        initial.date
    });
    let (time, set_time) = create_signal(initial.time);
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if title.get().trim().is_empty()
            || location.get().trim().is_empty()
            || time.get().trim().is_empty()
        {
            state_for_submit.show_error("Title, location and time are required");
            return;
        }

        let record = Meeting {
            id,
            title: title.get(),
            agenda: agenda.get(),
            location: location.get(),
            date: date.get(),
            time: time.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Meeting, Meeting>("admin", "meetings", id, &record).await
            } else {
                api::create_record::<Meeting, Meeting>("admin", "meetings", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|m| m.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Meeting updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Meeting scheduled");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let modal_title = if is_edit { "Edit Meeting" } else { "Schedule Meeting" };

    view! {
        <Modal
            title=modal_title
            on_close=on_close.clone()
        >
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Title" value=title set_value=set_title />
                <TextField label="Agenda" value=agenda set_value=set_agenda placeholder="(optional)" />
                <TextField label="Location" value=location set_value=set_location />
                <DateField label="Date" value=date set_value=set_date />
                <TextField label="Time" value=time set_value=set_time placeholder="e.g., 14:00" />
                <SubmitRow submitting=submitting on_cancel=on_close label="Schedule" busy_label="Scheduling..." />
            </form>
        </Modal>
    }
}

// ============ Enquiries ============

#[component]
fn EnquiriesSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Enquiry>::new());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Enquiry>("admin", "enquiries", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-3">
            {move || {
                let rows = records.get();
                if rows.is_empty() {
                    view! {
                        <div class="text-center py-10">
                            <p class="text-gray-400">"No enquiries yet."</p>
                        </div>
                    }.into_view()
                } else {
                    rows.into_iter().map(|enquiry| {
                        let state = state_for_rows.clone();
                        let id = enquiry.id;
                        view! {
                            <div class="bg-gray-800 rounded-xl p-5 border border-gray-700">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <div class="flex items-center space-x-2">
                                            <h3 class="font-semibold">{enquiry.name.clone()}</h3>
                                            <span class="text-gray-500 text-sm">{enquiry.email.clone()}</span>
                                        </div>
                                        {(!enquiry.subject.is_empty()).then(|| view! {
                                            <p class="text-primary-400 text-sm mt-1">{enquiry.subject.clone()}</p>
                                        })}
                                        <p class="text-gray-400 text-sm mt-2">{enquiry.message.clone()}</p>
                                    </div>
                                    <div class="flex flex-col items-end space-y-2 shrink-0 ml-4">
                                        <span class="text-gray-500 text-sm">{enquiry.date.clone()}</span>
                                        <button
                                            on:click=move |_| {
                                                let state = state.clone();
                                                spawn_local(async move {
                                                    match api::delete_record("admin", "enquiries", id).await {
                                                        Ok(()) => {
                                                            records.update(|r| r.retain(|e| e.id != id));
                                                            state.show_success("Enquiry removed");
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
                            </div>
                        }
                    }).collect_view()
                }
            }}
        </div>
    }
}
