//! Admin Doctors Page
//!
//! Manage the doctor roster: list, search, add, edit, delete.

use leptos::*;

use crate::api;
use crate::api::types::Doctor;
use crate::components::{ListSkeleton, Modal, SearchBox, SelectField, SubmitRow, TextField};
use crate::state::global::GlobalState;

/// Doctor roster management page
#[component]
pub fn Doctors() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Doctor>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Doctor>::None);
    let (loaded, set_loaded) = create_signal(false);

    // Fetch the roster on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Doctor>("admin", "doctors", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);
        });
    });

    // Client-side substring filter over the visible rows
    let filtered = move || {
        let needle = query.get().to_lowercase();
        records
            .get()
            .into_iter()
            .filter(|d| {
                needle.is_empty()
                    || format!("{} {}", d.name, d.specialty)
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Doctors"</h1>
                    <p class="text-gray-400 mt-1">"Consultation roster and availability"</p>
                </div>

                <button
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Doctor"
                </button>
            </div>

            <SearchBox value=query set_value=set_query placeholder="Search by name or specialty..." />

            // Add/edit modal
            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! {
                        <DoctorForm existing=editing.get() records=records on_close=on_close />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Roster table
            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Name"</th>
                            <th class="py-3 px-4">"Specialty"</th>
                            <th class="py-3 px-4">"Consultation"</th>
                            <th class="py-3 px-4">"Availability"</th>
                            <th class="py-3 px-4">"Phone"</th>
                            <th class="py-3 px-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered();
                            if !loaded.get() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="py-4 px-4">
                                            <ListSkeleton count=4 />
                                        </td>
                                    </tr>
                                }.into_view()
                            } else if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="text-center text-gray-400 py-10">
                                            "No doctors match."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|doctor| {
                                    let state = state_for_rows.clone();
                                    let id = doctor.id;
                                    let edit_copy = doctor.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{doctor.name.clone()}</td>
                                            <td class="py-3 px-4">{doctor.specialty.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{doctor.consultation_time.clone()}</td>
                                            <td class="py-3 px-4">
                                                <AvailabilityBadge availability=doctor.availability.clone() />
                                            </td>
                                            <td class="py-3 px-4 text-gray-400">{doctor.phone.clone()}</td>
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
                                                    on:click=move |_| remove_doctor(state.clone(), records, id)
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

/// Availability pill
#[component]
fn AvailabilityBadge(availability: String) -> impl IntoView {
    let color = match availability.as_str() {
        "available" => "bg-green-600",
        "busy" => "bg-yellow-600",
        "on_leave" => "bg-gray-600",
        _ => "bg-gray-600",
    };
    view! {
        <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white capitalize", color)>
            {availability.replace('_', " ")}
        </span>
    }
}

fn remove_doctor(state: GlobalState, records: RwSignal<Vec<Doctor>>, id: u32) {
    spawn_local(async move {
        match api::delete_record("admin", "doctors", id).await {
            Ok(()) => {
                records.update(|r| r.retain(|d| d.id != id));
                state.show_success("Doctor removed");
            }
            Err(e) => state.show_error(&e),
        }
    });
}

/// Combined add/edit modal; `existing` prefills the fields for edit
#[component]
fn DoctorForm(
    existing: Option<Doctor>,
    records: RwSignal<Vec<Doctor>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (name, set_name) = create_signal(initial.name);
    let (specialty, set_specialty) = create_signal(initial.specialty);
    let (consultation_time, set_consultation_time) = create_signal(initial.consultation_time);
    let (availability, set_availability) = create_signal(if initial.availability.is_empty() {
        "available".to_string()
    } else {
        initial.availability
    });
    let (phone, set_phone) = create_signal(initial.phone);
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Required-field presence, the console's only validation rule
        if name.get().trim().is_empty()
            || specialty.get().trim().is_empty()
            || consultation_time.get().trim().is_empty()
        {
            state_for_submit.show_error("Name, specialty and consultation time are required");
            return;
        }

        let record = Doctor {
            id,
            name: name.get(),
            specialty: specialty.get(),
            consultation_time: consultation_time.get(),
            availability: availability.get(),
            phone: phone.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Doctor, Doctor>("admin", "doctors", id, &record).await
            } else {
                api::create_record::<Doctor, Doctor>("admin", "doctors", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|d| d.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Doctor updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Doctor added");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Doctor" } else { "Add Doctor" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Name" value=name set_value=set_name placeholder="e.g., Asha Verma" />
                <TextField label="Specialty" value=specialty set_value=set_specialty placeholder="e.g., Cardiology" />
                <TextField
                    label="Consultation time"
                    value=consultation_time
                    set_value=set_consultation_time
                    placeholder="e.g., 09:00 - 13:00"
                />
                <SelectField
                    label="Availability"
                    value=availability
                    set_value=set_availability
                    options=vec![
                        ("available", "Available"),
                        ("busy", "Busy"),
                        ("on_leave", "On leave"),
                    ]
                />
                <TextField label="Phone" value=phone set_value=set_phone placeholder="(optional)" />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}
