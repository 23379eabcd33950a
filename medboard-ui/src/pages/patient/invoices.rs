//! Patient Invoices Page
//!
//! Read-only invoice list with what is still owed.

use leptos::*;

use crate::api;
use crate::api::types::Invoice;
use crate::components::StatCard;
use crate::pages::admin::finance::InvoiceStatusBadge;
use crate::state::global::GlobalState;

/// Invoice list page
#[component]
pub fn Invoices() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let records = create_rw_signal(Vec::<Invoice>::new());

    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Invoice>("patient", "invoices", "").await {
                Ok(items) => records.set(items),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let amount_due = move || {
        records
            .get()
            .iter()
            .filter(|i| i.status != "paid")
            .map(|i| i.amount)
            .sum::<f64>()
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Invoices"</h1>
                    <p class="text-gray-400 mt-1">"Billing history"</p>
                </div>
                <div class="w-56">
                    <StatCard
                        label="Amount Due"
                        value=Signal::derive(move || format!("{:.2}", amount_due()))
                        icon="💰"
                    />
                </div>
            </div>

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full text-sm text-left">
                    <thead class="text-gray-400 border-b border-gray-700">
                        <tr>
                            <th class="py-3 px-4">"Patient"</th>
                            <th class="py-3 px-4">"Description"</th>
                            <th class="py-3 px-4">"Amount"</th>
                            <th class="py-3 px-4">"Status"</th>
                            <th class="py-3 px-4">"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = records.get();
                            if rows.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="5" class="text-center text-gray-400 py-10">
                                            "No invoices yet."
                                        </td>
                                    </tr>
                                }.into_view()
                            } else {
                                rows.into_iter().map(|invoice| view! {
                                    <tr class="border-b border-gray-700/50 hover:bg-gray-700/30">
                                        <td class="py-3 px-4 font-medium">{invoice.patient}</td>
                                        <td class="py-3 px-4">{invoice.description}</td>
                                        <td class="py-3 px-4">{format!("{:.2}", invoice.amount)}</td>
                                        <td class="py-3 px-4">
                                            <InvoiceStatusBadge status=invoice.status />
                                        </td>
                                        <td class="py-3 px-4 text-gray-400">{invoice.date}</td>
                                    </tr>
                                }).collect_view()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
