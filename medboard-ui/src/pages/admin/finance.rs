//! Admin Finances Page
//!
//! Transactions, invoices, and the hospital charge sheet behind a tab
//! toggle. The header cards recompute the income/expense/balance sums
//! from whatever rows are loaded; these are display sums, not a ledger.

use leptos::*;

use crate::api;
use crate::api::types::{HospitalCharge, Invoice, Transaction};
use crate::components::{
    DateField, Modal, NumberField, SelectField, StatCard, SubmitRow, TabButton, TextField,
};
use crate::pages::home::today;
use crate::state::global::GlobalState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Transactions,
    Invoices,
    Charges,
}

/// Finances page
#[component]
pub fn Finance() -> impl IntoView {
    let (tab, set_tab) = create_signal(Tab::Transactions);
    let transactions = create_rw_signal(Vec::<Transaction>::new());

    let income = move || {
        transactions
            .get()
            .iter()
            .filter(|t| t.kind == "income")
            .map(|t| t.amount)
            .sum::<f64>()
    };
    let expense = move || {
        transactions
            .get()
            .iter()
            .filter(|t| t.kind == "expense")
            .map(|t| t.amount)
            .sum::<f64>()
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Finances"</h1>
                <p class="text-gray-400 mt-1">"Transactions, invoices, and the charge sheet"</p>
            </div>

            <div class="grid md:grid-cols-3 gap-4">
                <StatCard label="Income" value=Signal::derive(move || format!("{:.2}", income())) icon="📈" />
                <StatCard label="Expense" value=Signal::derive(move || format!("{:.2}", expense())) icon="📉" />
                <StatCard
                    label="Balance"
                    value=Signal::derive(move || format!("{:.2}", income() - expense()))
                    icon="🧾"
                />
            </div>

            <div class="flex space-x-2">
                <TabButton label="Transactions" active=Signal::derive(move || tab.get() == Tab::Transactions)
                    on_click=move |_| set_tab.set(Tab::Transactions) />
                <TabButton label="Invoices" active=Signal::derive(move || tab.get() == Tab::Invoices)
                    on_click=move |_| set_tab.set(Tab::Invoices) />
                <TabButton label="Charge Sheet" active=Signal::derive(move || tab.get() == Tab::Charges)
                    on_click=move |_| set_tab.set(Tab::Charges) />
            </div>

            {move || match tab.get() {
                Tab::Transactions => view! { <TransactionsSection records=transactions /> }.into_view(),
                Tab::Invoices => view! { <InvoicesSection /> }.into_view(),
                Tab::Charges => view! { <ChargesSection /> }.into_view(),
            }}
        </div>
    }
}

// ============ Transactions ============

#[component]
fn TransactionsSection(records: RwSignal<Vec<Transaction>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Transaction>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Transaction>("admin", "transactions", "").await {
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
                    "+ Add Transaction"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <TransactionForm existing=editing.get() records=records on_close=on_close /> }
                        .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Type"</th>
                            <th class="py-3 px-4">"Description"</th>
                            <th class="py-3 px-4">"Category"</th>
                            <th class="py-3 px-4">"Amount"</th>
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
                                            "No transactions yet."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|txn| {
                                    let state = state_for_rows.clone();
                                    let id = txn.id;
                                    let edit_copy = txn.clone();
                                    let kind_class = if txn.kind == "income" {
                                        "bg-green-700 text-green-100"
                                    } else {
                                        "bg-red-800 text-red-100"
                                    };
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4">
                                                <span class=format!("{} text-xs px-2 py-0.5 rounded-full capitalize", kind_class)>
                                                    {txn.kind.clone()}
                                                </span>
                                            </td>
                                            <td class="py-3 px-4 font-medium">{txn.description.clone()}</td>
                                            <td class="py-3 px-4 text-gray-400">{txn.category.clone()}</td>
                                            <td class="py-3 px-4">{format!("{:.2}", txn.amount)}</td>
                                            <td class="py-3 px-4 text-gray-400">{txn.date.clone()}</td>
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
                                                            match api::delete_record("admin", "transactions", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|t| t.id != id));
                                                                    state.show_success("Transaction removed");
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
fn TransactionForm(
    existing: Option<Transaction>,
    records: RwSignal<Vec<Transaction>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (kind, set_kind) = create_signal(if initial.kind.is_empty() {
        "income".to_string()
    } else {
        initial.kind
    });
    let (amount, set_amount) = create_signal(if is_edit {
        initial.amount.to_string()
    } else {
        String::new()
    });
    let (description, set_description) = create_signal(initial.description);
    let (category, set_category) = create_signal(initial.category);
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

        if description.get().trim().is_empty() || category.get().trim().is_empty() {
            state_for_submit.show_error("Description and category are required");
            return;
        }

        // The amount is whatever parses; there are no precision guarantees
        let record = Transaction {
            id,
            kind: kind.get(),
            amount: amount.get().parse().unwrap_or(0.0),
            description: description.get(),
            category: category.get(),
            date: date.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Transaction, Transaction>("admin", "transactions", id, &record)
                    .await
            } else {
                api::create_record::<Transaction, Transaction>("admin", "transactions", &record)
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
                        state_clone.show_success("Transaction updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Transaction recorded");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Transaction" } else { "Add Transaction" };

    view! {
        <Modal
            title=title
            on_close=on_close.clone()
        >
            <form on:submit=on_submit class="space-y-4">
                <SelectField
                    label="Type"
                    value=kind
                    set_value=set_kind
                    options=vec![("income", "Income"), ("expense", "Expense")]
                />
                <NumberField label="Amount" value=amount set_value=set_amount />
                <TextField label="Description" value=description set_value=set_description />
                <TextField label="Category" value=category set_value=set_category placeholder="e.g., Consultation" />
                <DateField label="Date" value=date set_value=set_date />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}

// ============ Invoices ============

#[component]
fn InvoicesSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Invoice>::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<Invoice>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Invoice>("admin", "invoices", "").await {
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
                    "+ New Invoice"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <InvoiceForm existing=editing.get() records=records on_close=on_close /> }
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
                            <th class="py-3 px-4">"Description"</th>
                            <th class="py-3 px-4">"Amount"</th>
                            <th class="py-3 px-4">"Status"</th>
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
                                            "No invoices yet."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|invoice| {
                                    let state = state_for_rows.clone();
                                    let id = invoice.id;
                                    let edit_copy = invoice.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                            <td class="py-3 px-4 font-medium">{invoice.patient.clone()}</td>
                                            <td class="py-3 px-4">{invoice.description.clone()}</td>
                                            <td class="py-3 px-4">{format!("{:.2}", invoice.amount)}</td>
                                            <td class="py-3 px-4">
                                                <InvoiceStatusBadge status=invoice.status.clone() />
                                            </td>
                                            <td class="py-3 px-4 text-gray-400">{invoice.date.clone()}</td>
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
                                                            match api::delete_record("admin", "invoices", id).await {
                                                                Ok(()) => {
                                                                    records.update(|r| r.retain(|i| i.id != id));
                                                                    state.show_success("Invoice removed");
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

/// Invoice status pill, shared with the patient section
#[component]
pub fn InvoiceStatusBadge(status: String) -> impl IntoView {
    let color = match status.as_str() {
        "paid" => "bg-green-700 text-green-100",
        "unpaid" => "bg-yellow-700 text-yellow-100",
        "overdue" => "bg-red-800 text-red-100",
        _ => "bg-gray-600 text-gray-100",
    };
    view! {
        <span class=format!("{} text-xs px-2 py-0.5 rounded-full capitalize", color)>
            {status}
        </span>
    }
}

#[component]
fn InvoiceForm(
    existing: Option<Invoice>,
    records: RwSignal<Vec<Invoice>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (patient, set_patient) = create_signal(initial.patient);
    let (description, set_description) = create_signal(initial.description);
    let (amount, set_amount) = create_signal(if is_edit {
        initial.amount.to_string()
    } else {
        String::new()
    });
    let (status, set_status) = create_signal(if initial.status.is_empty() {
        "unpaid".to_string()
    } else {
        initial.status
    });
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

        if patient.get().trim().is_empty() || description.get().trim().is_empty() {
            state_for_submit.show_error("Patient and description are required");
            return;
        }

        let record = Invoice {
            id,
            patient: patient.get(),
            description: description.get(),
            amount: amount.get().parse().unwrap_or(0.0),
            status: status.get(),
            date: date.get(),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<Invoice, Invoice>("admin", "invoices", id, &record).await
            } else {
                api::create_record::<Invoice, Invoice>("admin", "invoices", &record).await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|i| i.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Invoice updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Invoice created");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Invoice" } else { "New Invoice" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Patient" value=patient set_value=set_patient />
                <TextField label="Description" value=description set_value=set_description />
                <NumberField label="Amount" value=amount set_value=set_amount />
                <SelectField
                    label="Status"
                    value=status
                    set_value=set_status
                    options=vec![
                        ("unpaid", "Unpaid"),
                        ("paid", "Paid"),
                        ("overdue", "Overdue"),
                    ]
                />
                <DateField label="Date" value=date set_value=set_date />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}

// ============ Charge sheet ============

#[component]
fn ChargesSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<HospitalCharge>::new());
    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(Option::<HospitalCharge>::None);

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<HospitalCharge>("admin", "charges", "").await {
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
                    "+ Add Charge"
                </button>
            </div>

            {move || {
                if show_form.get() {
                    let on_close = move || {
                        set_show_form.set(false);
                        set_editing.set(None);
                    };
                    view! { <ChargeForm existing=editing.get() records=records on_close=on_close /> }
                        .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4">
                {move || {
                    let rows = records.get();
                    if rows.is_empty() {
                        view! {
                            <div class="col-span-full text-center py-10">
                                <p class="text-gray-400">"The charge sheet is empty."</p>
                            </div>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|charge| {
                            let state = state_for_rows.clone();
                            let id = charge.id;
                            let edit_copy = charge.clone();
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                    <h3 class="font-semibold">{charge.name.clone()}</h3>
                                    <p class="text-gray-400 text-sm mt-1">{charge.category.clone()}</p>
                                    <div class="flex items-center justify-between mt-4">
                                        <span class="text-primary-400 font-semibold">
                                            {format!("{:.0}", charge.amount)}
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
                                                        match api::delete_record("admin", "charges", id).await {
                                                            Ok(()) => {
                                                                records.update(|r| r.retain(|c| c.id != id));
                                                                state.show_success("Charge removed");
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
fn ChargeForm(
    existing: Option<HospitalCharge>,
    records: RwSignal<Vec<HospitalCharge>>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let is_edit = existing.is_some();
    let initial = existing.unwrap_or_default();
    let id = initial.id;

    let (name, set_name) = create_signal(initial.name);
    let (category, set_category) = create_signal(initial.category);
    let (amount, set_amount) = create_signal(if is_edit {
        initial.amount.to_string()
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

        let record = HospitalCharge {
            id,
            name: name.get(),
            category: category.get(),
            amount: amount.get().parse().unwrap_or(0.0),
        };

        set_submitting.set(true);
        let state_clone = state_for_submit.clone();
        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = if is_edit {
                api::update_record::<HospitalCharge, HospitalCharge>("admin", "charges", id, &record)
                    .await
            } else {
                api::create_record::<HospitalCharge, HospitalCharge>("admin", "charges", &record)
                    .await
            };

            match result {
                Ok(saved) => {
                    if is_edit {
                        records.update(|r| {
                            if let Some(slot) = r.iter_mut().find(|c| c.id == id) {
                                *slot = saved.clone();
                            }
                        });
                        state_clone.show_success("Charge updated");
                    } else {
                        records.update(|r| r.push(saved));
                        state_clone.show_success("Charge added");
                    }
                    on_close_inner();
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let title = if is_edit { "Edit Charge" } else { "Add Charge" };

    view! {
        <Modal title=title on_close=on_close.clone()>
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Name" value=name set_value=set_name placeholder="e.g., OPD Consultation" />
                <TextField label="Category" value=category set_value=set_category placeholder="e.g., Consultation" />
                <NumberField label="Amount" value=amount set_value=set_amount />
                <SubmitRow submitting=submitting on_cancel=on_close />
            </form>
        </Modal>
    }
}
