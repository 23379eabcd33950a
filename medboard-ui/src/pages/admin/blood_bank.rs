//! Admin Blood Bank Page
//!
//! Donor roster and blood issues behind a tab toggle. Patient, doctor,
//! and donor names on an issue are free text, exactly as typed.

use leptos::*;

use crate::api;
use crate::api::types::{BloodIssue, Donor};
use crate::components::{
    DateField, Modal, NumberField, SearchBox, SelectField, SubmitRow, TabButton, TextField,
};
use crate::pages::admin::patients::blood_group_options;
use crate::pages::home::today;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Donors,
    Issues,
}

/// Blood bank page
#[component]
pub fn BloodBank() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Donors);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Blood Bank"</h1>
                <p class="text-gray-400 mt-1">"Donors and issued units"</p>
            </div>

            <div class="flex space-x-2">
                <TabButton label="Donors" active=Signal::derive(move || tab.get() == Tab::Donors)
                    on_click=move |_| set_tab.set(Tab::Donors) />
                <TabButton label="Blood Issues" active=Signal::derive(move || tab.get() == Tab::Issues)
                    on_click=move |_| set_tab.set(Tab::Issues) />
            </div>

            {move || match tab.get() {
                Tab::Donors => view! { <DonorsSection /> }.into_view(),
                Tab::Issues => view! { <IssuesSection /> }.into_view(),
            }}
        </div>
    }
}

// ============ Donors ============

#[component]
fn DonorsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Donor>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Donor>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Donor>("admin", "donors", "").await {
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
            .filter(|d| {
                needle.is_empty()
                    || format!("{} {}", d.name, d.phone).to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <SearchBox value=query set_value=set_query placeholder="Search donors..." />
                <button
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Donor"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <DonorForm existing=editing.get() records=records on_close=on_close /> }
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
                            <th class="py-3 px-4">"Blood Group"</th>
                            <th class="py-3 px-4">"Phone"</th>
                            <th class="py-3 px-4">"Last Donation"</th>
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
                                            "No donors match."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|donor| {
                                    let state = state_for_rows.clone();
                                    let id = donor.id;
                                    let edit_copy = donor.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{donor.name.clone()}</td>
                                            <td class="py-3 px-4">
                                                <span class="bg-red-900/60 text-red-200 text-xs px-2 py-0.5 rounded-full">
                                                    {donor.blood_group.clone()}
                                                </span>
                                            </td>
                                            <td class="py-3 px-4 text-gray-400">{donor.phone.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">
                                                {donor.last_donation.clone().unwrap_or_else(|| "—".to_string())}
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
                                                    on:click=move |_| {
                                                        let state = state.clone();
                                                        spawn_local(async move {
                                                            match api::delete_record("admin", "donors", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|d| d.id != id));
                                                                    state.show_success("Donor removed");
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
fn DonorForm(
    existing: Option<Donor>,
    records: RwSignal<Vec<Donor>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (name, set_name) = create_signal(initial.name);
    let (blood_group, set_blood_group) = create_signal(if initial.blood_group.is_empty() {
        "O+".to_string()
    } else {
        initial.blood_group
    });
    let (phone, set_phone) = create_signal(initial.phone);
    let (last_donation, set_last_donation) =
        create_signal(initial.last_donation.unwrap_or_default());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty() || phone.get().trim().is_empty() {
            state_for_submit.show_error("Name and phone are required");
            return;
        }

        let donation = last_donation.get();
        let record = Donor {
            id,
            name: name.get(),
            blood_group: blood_group.get(),
            phone: phone.get(),
            last_donation: if donation.is_empty() { None } else { Some(donation) },
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Donor, Donor>("admin", "donors", id, &record).await
            } else {
                api::create_record::<Donor, Donor>("admin", "donors", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|d| d.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Donor updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Donor added");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Donor" } else { "Add Donor" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Name" value=name set_value=set_name />
                <SelectField
                    label="Blood group"
                    value=blood_group
                    set_value=set_blood_group
                    options=blood_group_options()
                />
                <TextField label="Phone" value=phone set_value=set_phone />
                <DateField label="Last donation" value=last_donation set_value=set_last_donation />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}

// ============ Blood issues ============

#[component]
fn IssuesSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<BloodIssue>::new());
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<BloodIssue>("admin", "blood-issues", "").await {
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
                    "+ Issue Blood"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || set_show_form.set(false);
                    view! { <IssueForm records=records on_close=on_close /> }.into_view()
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
                            <th class="py-3 px-4">"Donor"</th>
                            <th class="py-3 px-4">"Group"</th>
                            <th class="py-3 px-4">"Amount (ml)"</th>
                            <th class="py-3 px-4">"Date"</th>
                            <th class="py-3 px-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = records.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="7" class="text-center text-gray-400 py-10">
                                            "No blood issued yet."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|issue| {
                                    let state = state_for_rows.clone();
                                    let id = issue.id;
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{issue.patient.clone()}</td>
                                            <td class="py-3 px-4">{issue.doctor.clone()}</td>
                                            <td class="py-3 px-4">{issue.donor.clone()}</td>
                                            <td class="py-3 px-4">{issue.blood_group.clone()}</td>
                                            <td class="py-3 px-4">{issue.amount_ml}</td>
                                            <td class="py-3 px-4 text-gray-400">{issue.issue_date.clone()}</td>
                                            <td class="py-3 px-4 text-right">
                                                <button
                                                    on:click=move |_| {
                                                        let state = state.clone();
                                                        spawn_local(async move {
                                                            match api::delete_record("admin", "blood-issues", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|i| i.id != id));
                                                                    state.show_success("Issue removed");
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
fn IssueForm(
    records: RwSignal<Vec<BloodIssue>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (patient, set_patient) = create_signal(String::new());
    let (doctor, set_doctor) = create_signal(String::new());
    let (donor, set_donor) = create_signal(String::new());
    let (blood_group, set_blood_group) = create_signal("O+".to_string());
    let (amount_ml, set_amount_ml) = create_signal("450".to_string());
    let (issue_date, set_issue_date) = create_signal(today());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if patient.get().trim().is_empty()
            || doctor.get().trim().is_empty()
            || donor.get().trim().is_empty()
        {
            state_for_submit.show_error("Patient, doctor and donor are required");
            return;
        }

        let record = BloodIssue {
            id: 0,
            patient: patient.get(),
            doctor: doctor.get(),
            donor: donor.get(),
            blood_group: blood_group.get(),
            amount_ml: amount_ml.get().parse().unwrap_or(0),
            issue_date: issue_date.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_record::<BloodIssue, BloodIssue>("admin", "blood-issues", &record)
                .await
            {
                Ok(saved) => {
                    records.update(|r| r.push(saved));
                    state_clone.show_success("Blood issued");
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title="Issue Blood" on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Patient" value=patient set_value=set_patient />
                <TextField label="Doctor" value=doctor set_value=set_doctor />
                <TextField label="Donor" value=donor set_value=set_donor />
                <SelectField
                    label="Blood group"
                    value=blood_group
                    set_value=set_blood_group
                    options=blood_group_options()
                />
                <NumberField label="Amount (ml)" value=amount_ml set_value=set_amount_ml />
                <DateField label="Issue date" value=issue_date set_value=set_issue_date />
                <SubmitRow submitting=submitting on_cancel=on_close label="Issue" busy_label="Issuing..." />
            </form>
        </Modal>
    }
}
