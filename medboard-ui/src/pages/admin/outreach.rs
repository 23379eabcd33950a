//! Admin Outreach Page
//!
//! RFID asset tags and marketing field visits behind a tab toggle. Visit
//! coordinates are whatever was entered with the record; nothing moves.

use leptos::*;

use crate::api;
use crate::api::types::{MarketingVisit, RfidTag};
use crate::components::{
    DateField, Modal, NumberField, SelectField, SubmitRow, TabButton, TextField,
};
use crate::pages::home::today;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Rfid,
    Visits,
}

/// Outreach page
#[component]
pub fn Outreach() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Rfid);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Outreach"</h1>
                <p class="text-gray-400 mt-1">"RFID tags and marketing visits"</p>
            </div>

            <div class="flex space-x-2">
                <TabButton label="RFID Tags" active=Signal::derive(move || tab.get() == Tab::Rfid)
                    on_click=move |_| set_tab.set(Tab::Rfid) />
                <TabButton label="Marketing Visits" active=Signal::derive(move || tab.get() == Tab::Visits)
                    on_click=move |_| set_tab.set(Tab::Visits) />
            </div>

            {move || match tab.get() {
                Tab::Rfid => view! { <RfidSection /> }.into_view(),
                Tab::Visits => view! { <VisitsSection /> }.into_view(),
            }}
        </div>
    }
}

// ============ RFID tags ============

#[component]
fn RfidSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<RfidTag>::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<RfidTag>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<RfidTag>("admin", "rfid-tags", "").await {
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
                    "+ Register Tag"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <TagForm existing=editing.get() records=records on_close=on_close /> }
                        .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Tag Code"</th>
                            <th class="py-3 px-4">"Assignee"</th>
                            <th class="py-3 px-4">"Zone"</th>
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
                                            "No tags registered."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|tag| {
                                    let state = state_for_rows.clone();
                                    let id = tag.id;
                                    let edit_copy = tag.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-mono">{tag.tag_code.clone()}</td>
                                            <td class="py-3 px-4 font-medium">{tag.assignee.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{tag.zone.clone()}</td>
                                            <td class="py-3 px-4">
                                                {if tag.active { "active" } else { "inactive" }}
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
                                                            match api::delete_record("admin", "rfid-tags", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|t| t.id != id));
                                                                    state.show_success("Tag removed");
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
fn TagForm(
    existing: Option<RfidTag>,
    records: RwSignal<Vec<RfidTag>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (tag_code, set_tag_code) = create_signal(initial.tag_code);
    let (assignee, set_assignee) = create_signal(initial.assignee);
    let (zone, set_zone) = create_signal(initial.zone);
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

        if tag_code.get().trim().is_empty() || assignee.get().trim().is_empty() {
            state_for_submit.show_error("Tag code and assignee are required");
            return;
        }

        let record = RfidTag {
            id,
            tag_code: tag_code.get(),
            assignee: assignee.get(),
            zone: zone.get(),
            active: active.get() == "active",
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<RfidTag, RfidTag>("admin", "rfid-tags", id, &record).await
            } else {
                api::create_record::<RfidTag, RfidTag>("admin", "rfid-tags", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|t| t.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Tag updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Tag registered");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Tag" } else { "Register Tag" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Tag code" value=tag_code set_value=set_tag_code placeholder="RF-00444" />
                <TextField label="Assignee" value=assignee set_value=set_assignee placeholder="e.g., Wheelchair 5" />
                <TextField label="Zone" value=zone set_value=set_zone placeholder="(optional)" />
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

// ============ Marketing visits ============

#[component]
fn VisitsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<MarketingVisit>::new());
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<MarketingVisit>("admin", "marketing-visits", "").await {
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
                    "+ Log Visit"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || set_show_form.set(false);
                    view! { <VisitForm records=records on_close=on_close /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="grid md:grid-cols-2 gap-4">
                {move || {
                    let rows = records.get();
                    if rows.is_empty() {
                        view! {
                            <div class="col-span-full text-center py-10">
                                <p class="text-gray-400">"No visits logged."</p>
                            </div>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|visit| {
                            let state = state_for_rows.clone();
                            let id = visit.id;
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <h3 class="font-semibold">{visit.clinic.clone()}</h3>
                                            <p class="text-gray-400 text-sm mt-1">
                                                "Rep: " {visit.representative.clone()}
                                            </p>
                                        </div>
                                        <span class="text-gray-500 text-sm">{visit.date.clone()}</span>
                                    </div>
                                    {(!visit.notes.is_empty()).then(|| view! {
                                        <p class="text-gray-400 text-sm mt-2">{visit.notes.clone()}</p>
                                    })}
                                    <div class="flex items-center justify-between mt-4 text-sm">
                                        <span class="text-gray-500 font-mono text-xs">
                                            {format!("{:.4}, {:.4}", visit.lat, visit.lng)}
                                        </span>
                                        <button
                                            on:click=move |_| {
                                                let state = state.clone();
                                                spawn_local(async move {
                                                    match api::delete_record("admin", "marketing-visits", id).await {
                                                        Ok(()) => {
                                                            records.update(|r| r.retain(|v| v.id != id));
                                                            state.show_success("Visit removed");
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
fn VisitForm(
    records: RwSignal<Vec<MarketingVisit>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (representative, set_representative) = create_signal(String::new());
    let (clinic, set_clinic) = create_signal(String::new());
    let (notes, set_notes) = create_signal(String::new());
    let (lat, set_lat) = create_signal(String::new());
    let (lng, set_lng) = create_signal(String::new());
    let (date, set_date) = create_signal(today());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if representative.get().trim().is_empty() || clinic.get().trim().is_empty() {
            state_for_submit.show_error("Representative and clinic are required");
            return;
        }

        let record = MarketingVisit {
            id: 0,
            representative: representative.get(),
            clinic: clinic.get(),
            notes: notes.get(),
            lat: lat.get().parse().unwrap_or(0.0),
            lng: lng.get().parse().unwrap_or(0.0),
            date: date.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_record::<MarketingVisit, MarketingVisit>(
                "admin",
                "marketing-visits",
                &record,
            )
            .await
            {
                Ok(saved) => {
                    records.update(|r| r.push(saved));
                    state_clone.show_success("Visit logged");
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title="Log Visit" on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Representative" value=representative set_value=set_representative />
                <TextField label="Clinic" value=clinic set_value=set_clinic />
                <TextField label="Notes" value=notes set_value=set_notes placeholder="(optional)" />
                <NumberField label="Latitude" value=lat set_value=set_lat />
                <NumberField label="Longitude" value=lng set_value=set_lng />
                <DateField label="Date" value=date set_value=set_date />
                <SubmitRow submitting=submitting on_cancel=on_close label="Log" busy_label="Logging..." />
            </form>
        </Modal>
    }
}
