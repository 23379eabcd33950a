//! Admin Pharmacy Page
//!
//! Medicine inventory and counter bills behind a tab toggle. Low-stock
//! rows get flagged; everything else is the standard list/add/edit shape.

use leptos::*;

use crate::api;
use crate::api::types::{Medicine, MedicineBill};
use crate::components::{
    DateField, Modal, NumberField, SearchBox, SubmitRow, TabButton, TextField,
};
use crate::pages::home::today;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Inventory,
    Bills,
}

/// Pharmacy page
#[component]
pub fn Pharmacy() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Inventory);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Pharmacy"</h1>
                <p class="text-gray-400 mt-1">"Inventory and counter bills"</p>
            </div>

            <div class="flex space-x-2">
                <TabButton label="Inventory" active=Signal::derive(move || tab.get() == Tab::Inventory)
                    on_click=move |_| set_tab.set(Tab::Inventory) />
                <TabButton label="Bills" active=Signal::derive(move || tab.get() == Tab::Bills)
                    on_click=move |_| set_tab.set(Tab::Bills) />
            </div>

            {move || match tab.get() {
                Tab::Inventory => view! { <InventorySection /> }.into_view(),
                Tab::Bills => view! { <BillsSection /> }.into_view(),
            }}
        </div>
    }
}

// ============ Inventory ============

#[component]
fn InventorySection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Medicine>::new());
    let (query, set_query) = create_signal(String::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Medicine>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Medicine>("admin", "medicines", "").await {
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
            .filter(|m| {
                needle.is_empty()
                    || format!("{} {} {}", m.name, m.category, m.company)
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <SearchBox value=query set_value=set_query placeholder="Search medicines..." />
                <button
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "+ Add Medicine"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <MedicineForm existing=editing.get() records=records on_close=on_close /> }
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
                            <th class="py-3 px-4">"Category"</th>
                            <th class="py-3 px-4">"Company"</th>
                            <th class="py-3 px-4">"Stock"</th>
                            <th class="py-3 px-4">"Price"</th>
                            <th class="py-3 px-4">"Expiry"</th>
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
                                            "No medicines match."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|medicine| {
                                    let state = state_for_rows.clone();
                                    let id = medicine.id;
                                    let edit_copy = medicine.clone();
                                    let low_stock = medicine.stock < 10;
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{medicine.name.clone()}</td>
                                            <td class="py-3 px-4">{medicine.category.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{medicine.company.clone()}</td>
                                            <td class="py-3 px-4">
                                                <span>{medicine.stock}</span>
                                                {low_stock.then(|| view! {
                                                    <span class="ml-2 bg-yellow-700 text-yellow-100 text-xs px-2 py-0.5 rounded-full">
                                                        "low"
                                                    </span>
                                                })}
                                            </td>
                                            <td class="py-3 px-4">{format!("{:.2}", medicine.price)}</td>
                                            <td class="py-3 px-4 text-gray-400">{medicine.expiry.clone()}</td>
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
                                                            match api::delete_record("admin", "medicines", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|m| m.id != id));
                                                                    state.show_success("Medicine removed");
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
fn MedicineForm(
    existing: Option<Medicine>,
    records: RwSignal<Vec<Medicine>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (name, set_name) = create_signal(initial.name);
    let (category, set_category) = create_signal(initial.category);
    let (company, set_company) = create_signal(initial.company);
    let (stock, set_stock) = create_signal(if is_edit {
        initial.stock.to_string()
    } else {
        String::new()
    });
    let (price, set_price) = create_signal(if is_edit {
        initial.price.to_string()
    } else {
        String::new()
    });
    let (expiry, set_expiry) = create_signal(initial.expiry);
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty()
            || category.get().trim().is_empty()
            || company.get().trim().is_empty()
        {
            state_for_submit.show_error("Name, category and company are required");
            return;
        }

        let record = Medicine {
            id,
            name: name.get(),
            category: category.get(),
            company: company.get(),
            stock: stock.get().parse().unwrap_or(0),
            price: price.get().parse().unwrap_or(0.0),
            expiry: expiry.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Medicine, Medicine>("admin", "medicines", id, &record).await
            } else {
                api::create_record::<Medicine, Medicine>("admin", "medicines", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|m| m.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Medicine updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Medicine added");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Medicine" } else { "Add Medicine" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Name" value=name set_value=set_name placeholder="e.g., Amoxicillin 500" />
                <TextField label="Category" value=category set_value=set_category placeholder="e.g., Antibiotic" />
                <TextField label="Company" value=company set_value=set_company />
                <NumberField label="Stock" value=stock set_value=set_stock />
                <NumberField label="Unit price" value=price set_value=set_price />
                <DateField label="Expiry" value=expiry set_value=set_expiry />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}

// ============ Bills ============

#[component]
fn BillsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<MedicineBill>::new());
    let (show_form, set_show_form) = create_signal(false);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<MedicineBill>("admin", "medicine-bills", "").await {
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
                    "+ New Bill"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || set_show_form.set(false);
                    view! { <BillForm records=records on_close=on_close /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Patient"</th>
                            <th class="py-3 px-4">"Medicine"</th>
                            <th class="py-3 px-4">"Qty"</th>
                            <th class="py-3 px-4">"Total"</th>
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
                                        <td colspan="6" class="text-center text-gray-400 py-10">
                                            "No bills yet."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|bill| {
                                    let state = state_for_rows.clone();
                                    let id = bill.id;
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{bill.patient.clone()}</td>
                                            <td class="py-3 px-4">{bill.medicine.clone()}</td>
                                            <td class="py-3 px-4">{bill.quantity}</td>
                                            <td class="py-3 px-4">{format!("{:.2}", bill.total)}</td>
                                            <td class="py-3 px-4 text-gray-400">{bill.date.clone()}</td>
                                            <td class="py-3 px-4 text-right">
                                                <button
                                                    on:click=move |_| {
                                                        let state = state.clone();
                                                        spawn_local(async move {
                                                            match api::delete_record("admin", "medicine-bills", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|b| b.id != id));
                                                                    state.show_success("Bill removed");
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
fn BillForm(
    records: RwSignal<Vec<MedicineBill>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (patient, set_patient) = create_signal(String::new());
    let (medicine, set_medicine) = create_signal(String::new());
    let (quantity, set_quantity) = create_signal("1".to_string());
    let (total, set_total) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if patient.get().trim().is_empty() || medicine.get().trim().is_empty() {
            state_for_submit.show_error("Patient and medicine are required");
            return;
        }

        let record = MedicineBill {
            id: 0,
            patient: patient.get(),
            medicine: medicine.get(),
            quantity: quantity.get().parse().unwrap_or(1),
            total: total.get().parse().unwrap_or(0.0),
            date: today(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            match api::create_record::<MedicineBill, MedicineBill>(
                "admin",
                "medicine-bills",
                &record,
            )
            .await
            {
                Ok(saved) => {
                    records.update(|r| r.push(saved));
                    state_clone.show_success("Bill recorded");
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal title="New Bill" on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Patient" value=patient set_value=set_patient />
                <TextField label="Medicine" value=medicine set_value=set_medicine />
                <NumberField label="Quantity" value=quantity set_value=set_quantity />
                <NumberField label="Total" value=total set_value=set_total />
                <SubmitRow submitting=submitting on_cancel=on_close label="Record" busy_label="Recording..." />
            </form>
        </Modal>
    }
}
