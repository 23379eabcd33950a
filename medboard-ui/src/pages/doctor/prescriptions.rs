//! Doctor Prescriptions Page

use leptos::*;

use crate::api;
use crate::api::types::Prescription;
use crate::components::{DateField, Modal, SearchBox, SubmitRow, TextField};
use crate::pages::home::today;
use crate::state::global::GlobalState;

/// Prescription pad page
#[component]
pub fn Prescriptions() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Prescription>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Prescription>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Prescription>("doctor", "prescriptions", "").await {
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
                    || format!("{} {} {}", p.patient, p.doctor, p.medication)
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Prescriptions"</h1>
                    <p class="text-gray-400 mt-1">"Written prescriptions"</p>
                </div>
                <button
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Write Prescription"
                </button>
            </div>

            <SearchBox value=query set_value=set_query placeholder="Search by patient or medication..." />

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <PrescriptionForm existing=editing.get() records=records on_close=on_close /> }
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
                            <th class="py-3 px-4">"Doctor"</th>
                            <th class="py-3 px-4">"Medication"</th>
                            <th class="py-3 px-4">"Dosage"</th>
                            <th class="py-3 px-4">"Instructions"</th>
                            <th class="py-3 px-4">"Date"</th>
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
                                            "No prescriptions match."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|prescription| {
                                    let state = state_for_rows.clone();
                                    let id = prescription.id;
                                    let edit_copy = prescription.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{prescription.patient.clone()}</td>
                                            <td class="py-3 px-4">{prescription.doctor.clone()}</td>
                                            <td class="py-3 px-4">{prescription.medication.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{prescription.dosage.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{prescription.instructions.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{prescription.date.clone()}</td>
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
                                                            match api::delete_record("doctor", "prescriptions", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|p| p.id != id));
                                                                    state.show_success("Prescription removed");
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
fn PrescriptionForm(
    existing: Option<Prescription>,
    records: RwSignal<Vec<Prescription>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (patient, set_patient) = create_signal(initial.patient);
    let (doctor, set_doctor) = create_signal(initial.doctor);
    let (medication, set_medication) = create_signal(initial.medication);
    let (dosage, set_dosage) = create_signal(initial.dosage);
    let (instructions, set_instructions) = create_signal(initial.instructions);
    let (date, set_date) = create_signal(if initial.date.is_empty() {
        today()
    } else {
        initial.date
    });
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if patient.get().trim().is_empty()
            || doctor.get().trim().is_empty()
            || medication.get().trim().is_empty()
            || dosage.get().trim().is_empty()
        {
            state_for_submit.show_error("Patient, doctor, medication and dosage are required");
            return;
        }

        let record = Prescription {
            id,
            patient: patient.get(),
            doctor: doctor.get(),
            medication: medication.get(),
            dosage: dosage.get(),
            instructions: instructions.get(),
            date: date.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Prescription, Prescription>(
                    "doctor",
                    "prescriptions",
                    id,
                    &record,
                )
                .await
            } else {
                api::create_record::<Prescription, Prescription>("doctor", "prescriptions", &record)
                    .await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|p| p.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Prescription updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Prescription written");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Prescription" } else { "Write Prescription" };

    view! {
        <Modal
            title=title
            on_close=on_close.clone()
        >
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Patient" value=patient set_value=set_patient />
                <TextField label="Doctor" value=doctor set_value=set_doctor />
                <TextField label="Medication" value=medication set_value=set_medication />
                <TextField label="Dosage" value=dosage set_value=set_dosage placeholder="e.g., 500mg twice daily" />
                <TextField label="Instructions" value=instructions set_value=set_instructions placeholder="(optional)" />
                <DateField label="Date" value=date set_value=set_date />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}
