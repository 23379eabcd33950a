//! Public Marketing Page
//!
//! The hospital's public face: hero, the doctor directory, and the
//! enquiry form, which appends to the admin-visible enquiry list.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::types::{Doctor, Enquiry};
use crate::components::{Loading, TextAreaField, TextField};
use crate::state::global::GlobalState;

/// Public landing page
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let doctors = create_rw_signal(Vec::<Doctor>::new());
    let (loaded, set_loaded) = create_signal(false);

    // Fetch the public doctor directory on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_list::<Doctor>("site", "doctors", "").await {
                Ok(items) => doctors.set(items),
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);
        });
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            // Public navigation
            <nav class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <span class="flex items-center space-x-2">
                        <span class="text-2xl">"🏥"</span>
                        <span class="text-xl font-bold">"Medboard General Hospital"</span>
                    </span>
                    <A
                        href="/login"
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Console Login"
                    </A>
                </div>
            </nav>

            <main class="container mx-auto px-4 py-12 space-y-16">
                // Hero
                <section class="text-center py-12">
                    <h1 class="text-4xl font-bold mb-4">"Care that shows up for you"</h1>
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "Outpatient clinics, diagnostics, a 24/7 pharmacy, and a blood bank
                         under one roof. Book a consultation or send us a question below."
                    </p>
                </section>

                // Doctor directory
                <section>
                    <h2 class="text-2xl font-semibold mb-6">"Our Doctors"</h2>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4">
                        {move || {
                            let list = doctors.get();
                            if !loaded.get() {
                                view! {
                                    <div class="col-span-full">
                                        <Loading />
                                    </div>
                                }.into_view()
                            } else if list.is_empty() {
                                view! {
                                    <div class="col-span-full text-center py-8">
                                        <p class="text-gray-400">"The directory is empty right now."</p>
                                    </div>
                                }.into_view()
                            } else {
                                list.into_iter().map(|doctor| view! {
                                    <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                        <h3 class="font-semibold">{doctor.name}</h3>
                                        <p class="text-primary-400 text-sm">{doctor.specialty}</p>
                                        <p class="text-gray-400 text-sm mt-2">
                                            "Consultations: " {doctor.consultation_time}
                                        </p>
                                        <p class="text-gray-500 text-xs mt-1 capitalize">
                                            {doctor.availability.replace('_', " ")}
                                        </p>
                                    </div>
                                }).collect_view()
                            }
                        }}
                    </div>
                </section>

                // Enquiry form
                <section class="max-w-xl mx-auto bg-gray-800 rounded-xl p-6">
                    <h2 class="text-2xl font-semibold mb-4">"Ask us anything"</h2>
                    <EnquiryForm />
                </section>
            </main>

            <footer class="border-t border-gray-700 py-6 text-center text-gray-500 text-sm">
                "Medboard General Hospital — 12 Lake Road"
            </footer>
        </div>
    }
}

/// Contact form; submissions land in the admin enquiry list
#[component]
fn EnquiryForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (subject, set_subject) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty()
            || email.get().trim().is_empty()
            || message.get().trim().is_empty()
        {
            state.show_error("Name, email and message are required");
            return;
        }

        let enquiry = Enquiry {
            id: 0,
            name: name.get(),
            email: email.get(),
            subject: subject.get(),
            message: message.get(),
            date: today(),
        };

        set_submitting.set(true);
        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_record::<Enquiry, Enquiry>("site", "enquiries", &enquiry).await {
                Ok(_) => {
                    state_clone.show_success("Thanks! We'll get back to you soon.");
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                }
                Err(e) => state_clone.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <TextField label="Name" value=name set_value=set_name placeholder="Your name" />
            <TextField label="Email" value=email set_value=set_email placeholder="you@example.com" />
            <TextField label="Subject" value=subject set_value=set_subject placeholder="(optional)" />
            <TextAreaField label="Message" value=message set_value=set_message />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() { "Sending..." } else { "Send" }}
            </button>
        </form>
    }
}

/// Today's date in the API's yyyy-mm-dd wire format
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
