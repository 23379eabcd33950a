//! Admin Users Page
//!
//! Console account management. Accounts are display records only.

use leptos::*;

use crate::api;
use crate::api::types::StaffUser;
use crate::components::{Modal, SearchBox, SelectField, SubmitRow, TextField};
use crate::state::global::GlobalState;

/// User account management page
#[component]
pub fn Users() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<StaffUser>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<StaffUser>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<StaffUser>("admin", "users", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let filtered = move || {
        let needle = query.get().to_lowercase();
        records
            .get()
            .into_iter()
            .filter(|u| {
                needle.is_empty()
                    || format!("{} {}", u.name, u.email).to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Users"</h1>
                    <p class="text-gray-400 mt-1">"Console accounts by role"</p>
                </div>
                <button
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add User"
                </button>
            </div>

            <SearchBox value=query set_value=set_query placeholder="Search by name or email..." />

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <UserForm existing=editing.get() records=records on_close=on_close /> }
                        .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Name"</th>
                            <th class="py-3 px-4">"Email"</th>
                            <th class="py-3 px-4">"Role"</th>
                            <th class="py-3 px-4">"Status"</th>
                            <th class="py-3 px-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="5" class="text-center text-gray-400 py-10">
                                            "No users match."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|user| {
                                    let state = state_for_rows.clone();
                                    let id = user.id;
                                    let edit_copy = user.clone();
                                    let row_class = if user.active {
                                        "border-b border-gray-700/50 hover:bg-gray-700/30"
                                    } else {
                                        "border-b border-gray-700/50 hover:bg-gray-700/30 text-gray-500"
                                    };
                                    view! {
                                        <tr class=row_class>
                                            <td class="py-3 px-4 font-medium">{user.name.clone()}</td>
                                            <td class="py-3 px-4">{user.email.clone()}</td>
                                            <td class="py-3 px-4 capitalize">{user.role.clone()}</td>
                                            <td class="py-3 px-4">
                                                {if user.active { "active" } else { "inactive" }}
                                            </td>
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
                                                    on:click=move |_| remove_user(state.clone(), records, id)
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

fn remove_user(state: GlobalState, records: RwSignal<Vec<StaffUser>>, id: u32) {
    spawn_local(async move {
        match api::delete_record("admin", "users", id).await {
            Ok(()) => {
                records.update(|r| r.retain(|u| u.id != id));
                state.show_success("User removed");
            }
            Err(e) => state.show_error(&e),
        }
    });
}

#[component]
fn UserForm(
    existing: Option<StaffUser>,
    records: RwSignal<Vec<StaffUser>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (name, set_name) = create_signal(initial.name);
    let (email, set_email) = create_signal(initial.email);
    let (role, set_role) = create_signal(if initial.role.is_empty() {
        "admin".to_string()
    } else {
        initial.role
    });
    let (active, set_active) = create_signal(if is_edit && !initial.active {
        "inactive".to_string()
    } else {
        "active".to_string()
    });
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty() || email.get().trim().is_empty() {
            state_for_submit.show_error("Name and email are required");
            return;
        }

        let record = StaffUser {
            id,
            name: name.get(),
            email: email.get(),
            role: role.get(),
            active: active.get() == "active",
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<StaffUser, StaffUser>("admin", "users", id, &record).await
            } else {
                api::create_record::<StaffUser, StaffUser>("admin", "users", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|u| u.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("User updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("User added");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit User" } else { "Add User" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Name" value=name set_value=set_name />
                <TextField label="Email" value=email set_value=set_email placeholder="name@medboard.example" />
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
                <SelectField
                    label="Status"
                    value=active
                    set_value=set_active
                    options=vec![("active", "Active"), ("inactive", "Inactive")]
                />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}
