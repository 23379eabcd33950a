//! Admin Pathology Page
//!
//! The pathology test catalogue with its list charges.

use leptos::*;

use crate::api;
use crate::api::types::PathologyTest;
use crate::components::{Modal, NumberField, SearchBox, SubmitRow, TextField};
use crate::state::global::GlobalState;

/// Pathology catalogue page
#[component]
pub fn Pathology() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<PathologyTest>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<PathologyTest>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<PathologyTest>("admin", "pathology-tests", "").await {
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
            .filter(|t| {
                needle.is_empty()
                    || format!("{} {}", t.name, t.category).to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Pathology"</h1>
                    <p class="text-gray-400 mt-1">"Test catalogue and charges"</p>
                </div>
                <button
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Test"
                </button>
            </div>

            <SearchBox value=query set_value=set_query placeholder="Search tests..." />

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <TestForm existing=editing.get() records=records on_close=on_close /> }
                        .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    let rows = filtered();
                    if rows.is_empty() {
                        view! {
                            <div class="col-span-full text-center py-10">
                                <p class="text-gray-400">"No tests match."</p>
                            </div>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|test| {
                            let state = state_for_rows.clone();
                            let id = test.id;
                            let edit_copy = test.clone();
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <h3 class="font-semibold">{test.name.clone()}</h3>
                                            <p class="text-gray-400 text-sm mt-1">{test.category.clone()}</p>
                                        </div>
                                        <span class="text-primary-400 font-semibold">
                                            {format!("{:.0}", test.charge)}
                                        </span>
                                    </div>
                                    <div class="flex items-center justify-between mt-4 text-sm">
                                        <span class="text-gray-500">
                                            {if test.sample.is_empty() {
                                                "—".to_string()
                                            } else {
                                                format!("sample: {}", test.sample)
                                            }}
                                        </span>
                                        <div class="space-x-2">
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
                                                        match api::delete_record("admin", "pathology-tests", id).await {
                                                            Ok(()) => {
                                                                records.update(|r| r.retain(|t| t.id != id));
                                                                state.show_success("Test removed");
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
        </div>
    }
}

#[component]
fn TestForm(
    existing: Option<PathologyTest>,
    records: RwSignal<Vec<PathologyTest>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (name, set_name) = create_signal(initial.name);
    let (category, set_category) = create_signal(initial.category);
    let (sample, set_sample) = create_signal(initial.sample);
    let (charge, set_charge) = create_signal(if is_edit {
        initial.charge.to_string()
    } else {
        String::new()
    });
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty() || category.get().trim().is_empty() {
            state_for_submit.show_error("Name and category are required");
            return;
        }

        let record = PathologyTest {
            id,
            name: name.get(),
            category: category.get(),
            sample: sample.get(),
            charge: charge.get().parse().unwrap_or(0.0),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<PathologyTest, PathologyTest>(
                    "admin",
                    "pathology-tests",
                    id,
                    &record,
                )
                .await
            } else {
                api::create_record::<PathologyTest, PathologyTest>(
                    "admin",
                    "pathology-tests",
                    &record,
                )
                .await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|t| t.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Test updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Test added");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Test" } else { "Add Test" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Name" value=name set_value=set_name placeholder="e.g., Complete Blood Count" />
                <TextField label="Category" value=category set_value=set_category placeholder="e.g., Hematology" />
                <TextField label="Sample" value=sample set_value=set_sample placeholder="e.g., blood (optional)" />
                <NumberField label="Charge" value=charge set_value=set_charge />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}
