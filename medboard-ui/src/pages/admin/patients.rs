//! Admin Patients Page
//!
//! Three sections behind a tab toggle: the patient register, issued smart
//! cards, and document metadata.

use leptos::*;

use crate::api;
use crate::api::types::{Document, Patient, SmartCard};
use crate::components::{
    DateField, Modal, NumberField, SearchBox, SelectField, SubmitRow, TabButton, TextField,
};
use crate::pages::home::today;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Register,
    Cards,
    Documents,
}

/// Patient register page with smart cards and documents tabs
#[component]
pub fn Patients() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Register);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Patients"</h1>
                <p class="text-gray-400 mt-1">"Register, smart cards, and documents"</p>
            </div>

            // Tab toggle
            <div class="flex space-x-2">
                <TabButton label="Register" active=Signal::derive(move || tab.get() == Tab::Register)
                    on_click=move |_| set_tab.set(Tab::Register) />
                <TabButton label="Smart Cards" active=Signal::derive(move || tab.get() == Tab::Cards)
                    on_click=move |_| set_tab.set(Tab::Cards) />
                <TabButton label="Documents" active=Signal::derive(move || tab.get() == Tab::Documents)
                    on_click=move |_| set_tab.set(Tab::Documents) />
            </div>

            {move || match tab.get() {
                Tab::Register => view! { <RegisterSection /> }.into_view(),
                Tab::Cards => view! { <CardsSection /> }.into_view(),
                Tab::Documents => view! { <DocumentsSection /> }.into_view(),
            }}
        </div>
    }
}

// ============ Register ============

#[component]
fn RegisterSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Patient>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Patient>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Patient>("admin", "patients", "").await {
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
            .filter(|p| {
                needle.is_empty()
                    || format!("{} {} {}", p.name, p.phone, p.address)
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <SearchBox value=query set_value=set_query placeholder="Search patients..." />
                <button
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Patient"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <PatientForm existing=editing.get() records=records on_close=on_close /> }
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
                            <th class="py-3 px-4">"Age"</th>
                            <th class="py-3 px-4">"Gender"</th>
                            <th class="py-3 px-4">"Blood Group"</th>
                            <th class="py-3 px-4">"Phone"</th>
                            <th class="py-3 px-4">"Address"</th>
                            <th class="py-3 px-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = filtered();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" class="text-center text-gray-400 py-10">
                                            "No patients match."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|patient| {
                                    let state = state_for_rows.clone();
                                    let id = patient.id;
                                    let edit_copy = patient.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{patient.name.clone()}</td>
                                            <td class="py-3 px-4">{patient.age}</td>
                                            <td class="py-3 px-4 capitalize">{patient.gender.clone()}</td>
                                            <td class="py-3 px-4">{patient.blood_group.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{patient.phone.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{patient.address.clone()}</td>
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
                                                            match api::delete_record("admin", "patients", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|p| p.id != id));
                                                                    state.show_success("Patient removed");
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
fn PatientForm(
    existing: Option<Patient>,
    records: RwSignal<Vec<Patient>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (name, set_name) = create_signal(initial.name);
    let (age, set_age) = create_signal(if is_edit {
        initial.age.to_string()
    } else {
        String::new()
    });
    let (gender, set_gender) = create_signal(if initial.gender.is_empty() {
        "female".to_string()
    } else {
        initial.gender
    });
    let (blood_group, set_blood_group) = create_signal(if initial.blood_group.is_empty() {
        "O+".to_string()
    } else {
        initial.blood_group
    });
    let (phone, set_phone) = create_signal(initial.phone);
    let (address, set_address) = create_signal(initial.address);
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty() || phone.get().trim().is_empty() {
            state_for_submit.show_error("Name and phone are required");
            return;
        }

        let record = Patient {
            id,
            name: name.get(),
            age: age.get().parse().unwrap_or(0),
            gender: gender.get(),
            blood_group: blood_group.get(),
            phone: phone.get(),
            address: address.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Patient, Patient>("admin", "patients", id, &record).await
            } else {
                api::create_record::<Patient, Patient>("admin", "patients", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|p| p.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Patient updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Patient added");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Patient" } else { "Add Patient" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Name" value=name set_value=set_name />
                <NumberField label="Age" value=age set_value=set_age />
                <SelectField
                    label="Gender"
                    value=gender
                    set_value=set_gender
                    options=vec![("female", "Female"), ("male", "Male"), ("other", "Other")]
                />
                <SelectField
                    label="Blood group"
                    value=blood_group
                    set_value=set_blood_group
                    options=blood_group_options()
                />
                <TextField label="Phone" value=phone set_value=set_phone />
                <TextField label="Address" value=address set_value=set_address placeholder="(optional)" />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}

/// Dropdown options shared by every blood-group select
pub(crate) fn blood_group_options() -> Vec<(&'static str, &'static str)> {
    vec![
        ("A+", "A+"),
        ("A-", "A-"),
        ("B+", "B+"),
        ("B-", "B-"),
        ("AB+", "AB+"),
        ("AB-", "AB-"),
        ("O+", "O+"),
        ("O-", "O-"),
    ]
}

// ============ Smart cards ============

#[component]
fn CardsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<SmartCard>::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<SmartCard>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<SmartCard>("admin", "smart-cards", "").await {
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
                    "+ Issue Card"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <CardForm existing=editing.get() records=records on_close=on_close /> }
                        .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Patient"</th>
                            <th class="py-3 px-4">"Card Number"</th>
                            <th class="py-3 px-4">"Issued"</th>
                            <th class="py-3 px-4">"Status"</th>
                            <th class="py-3 px-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = records.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="5" class="text-center text-gray-400 py-10">
                                            "No cards issued."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|card| {
                                    let state = state_for_rows.clone();
                                    let id = card.id;
                                    let edit_copy = card.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{card.patient.clone()}</td>
                                            <td class="py-3 px-4">{card.card_number.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{card.issued_on.clone()}</td>
                                            <td class="py-3 px-4 capitalize">{card.status.clone()}</td>
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
                                                            match api::delete_record("admin", "smart-cards", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|c| c.id != id));
                                                                    state.show_success("Card removed");
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
fn CardForm(
    existing: Option<SmartCard>,
    records: RwSignal<Vec<SmartCard>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (patient, set_patient) = create_signal(initial.patient);
    let (card_number, set_card_number) = create_signal(initial.card_number);
    let (issued_on, set_issued_on) = create_signal(if initial.issued_on.is_empty() {
        today()
    } else {
        initial.issued_on
    });
    let (status, set_status) = create_signal(if initial.status.is_empty() {
        "active".to_string()
    } else {
        initial.status
    });
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if patient.get().trim().is_empty() || card_number.get().trim().is_empty() {
            state_for_submit.show_error("Patient and card number are required");
            return;
        }

        let record = SmartCard {
            id,
            patient: patient.get(),
            card_number: card_number.get(),
            issued_on: issued_on.get(),
            status: status.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<SmartCard, SmartCard>("admin", "smart-cards", id, &record).await
            } else {
                api::create_record::<SmartCard, SmartCard>("admin", "smart-cards", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|c| c.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Card updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Card issued");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Card" } else { "Issue Card" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Patient" value=patient set_value=set_patient />
                <TextField label="Card number" value=card_number set_value=set_card_number placeholder="SC-10023" />
                <DateField label="Issued on" value=issued_on set_value=set_issued_on />
                <SelectField
                    label="Status"
                    value=status
                    set_value=set_status
                    options=vec![
                        ("active", "Active"),
                        ("blocked", "Blocked"),
                        ("expired", "Expired"),
                    ]
                />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}

// ============ Documents ============

#[component]
fn DocumentsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Document>::new());
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Document>("admin", "documents", "").await {
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
                    "+ Add Document"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || set_show_form.set(false);
                    view! { <DocumentForm records=records on_close=on_close /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    let rows = records.get();
                    if rows.is_empty() {
                        view! {
                            <div class="col-span-full text-center py-10">
                                <p class="text-gray-400">"No documents on file."</p>
                            </div>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|document| {
                            let state = state_for_rows.clone();
                            let id = document.id;
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <h3 class="font-semibold">{document.title.clone()}</h3>
                                            <p class="text-gray-400 text-sm mt-1">{document.patient.clone()}</p>
                                        </div>
                                        <span class="bg-gray-700 text-xs px-2 py-0.5 rounded-full">
                                            {document.category.clone()}
                                        </span>
                                    </div>
                                    <div class="flex items-center justify-between mt-4 text-sm">
                                        <span class="text-gray-500">{document.uploaded_on.clone()}</span>
                                        <button
                                            on:click=move |_| {
                                                let state = state.clone();
                                                spawn_local(async move {
                                                    match api::delete_record("admin", "documents", id).await {
                                                        Ok(()) => {
                                                            records.update(|r| r.retain(|d| d.id != id));
                                                            state.show_success("Document removed");
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
fn DocumentForm(
    records: RwSignal<Vec<Document>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (patient, set_patient) = create_signal(String::new());
    let (title, set_title) = create_signal(String::new());
    let (category, set_category) = create_signal("X-Ray".to_string());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if patient.get().trim().is_empty() || title.get().trim().is_empty() {
            state_for_submit.show_error("Patient and title are required");
            return;
        }

        let record = Document {
            id: 0,
            patient: patient.get(),
            title: title.get(),
            category: category.get(),
            uploaded_on: today(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_record::<Document, Document>("admin", "documents", &record).await {
                Ok(saved) => {
                    records.update(|r| r.push(saved));
                    state_clone.show_success("Document added");
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title="Add Document" on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Patient" value=patient set_value=set_patient />
                <TextField label="Title" value=title set_value=set_title placeholder="e.g., Chest X-Ray" />
                <SelectField
                    label="Category"
                    value=category
                    set_value=set_category
                    options=vec![
                        ("X-Ray", "X-Ray"),
                        ("Discharge Summary", "Discharge Summary"),
                        ("Insurance", "Insurance"),
                        ("Other", "Other"),
                    ]
                />
                <SubmitRow submitting=submitting on_cancel=on_close label="Add" busy_label="Adding..." />
            </form>
        </Modal>
    }
}
