//! Gig edit/create form
//!
//! Pure view component: owns its field signals, validates on submit,
//! and hands a `GigDraft` to the caller through `on_submit`.
//! Persistence is the caller's concern.

use crate::components::{TextInput, TextInputSize};
use crate::display_types::{FieldError, Gig, GigDraft, GigStatus};
use dioxus::prelude::*;

/// Parse a user-entered dollar amount into cents.
pub fn parse_price_input(input: &str) -> Result<i64, String> {
    let trimmed = input.trim().trim_start_matches('$').trim();
    if trimmed.is_empty() {
        return Err("Price is required".to_string());
    }
    let (dollars_part, cents_part) = match trimmed.split_once('.') {
        Some((d, c)) => (d, c),
        None => (trimmed, ""),
    };
    let valid = !dollars_part.is_empty()
        && dollars_part.chars().all(|c| c.is_ascii_digit())
        && cents_part.len() <= 2
        && cents_part.chars().all(|c| c.is_ascii_digit());
    if !valid {
        return Err("Enter a price like 12.50".to_string());
    }
    let dollars: i64 = dollars_part
        .parse()
        .map_err(|_| "Price is too large".to_string())?;
    let cents: i64 = if cents_part.is_empty() {
        0
    } else {
        // "5" means 50 cents, not 5
        format!("{:0<2}", cents_part)
            .parse()
            .map_err(|_| "Enter a price like 12.50".to_string())?
    };
    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(|| "Price is too large".to_string())
}

/// Dollar string for pre-populating the price field, e.g. 1250 -> "12.50"
fn price_input_value(price_cents: i64) -> String {
    let sign = if price_cents < 0 { "-" } else { "" };
    let cents = price_cents.abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

/// Gig form view (pure, props-based)
#[component]
pub fn GigFormView(
    /// Existing record to pre-populate the fields from
    #[props(default)]
    initial_data: Option<Gig>,
    /// Whether this form edits an existing gig (changes the submit label)
    #[props(default)]
    is_edit: bool,
    /// Disables the submit button while the caller persists the draft
    #[props(default)]
    submitting: bool,
    on_submit: EventHandler<GigDraft>,
) -> Element {
    let initial = initial_data
        .as_ref()
        .map(GigDraft::from_gig)
        .unwrap_or_default();

    let mut title = use_signal(|| initial.title.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut category = use_signal(|| initial.category.clone());
    let mut price = use_signal(|| {
        if initial_data.is_some() {
            price_input_value(initial.price_cents)
        } else {
            String::new()
        }
    });
    let mut status = use_signal(|| initial.status.clone());
    let mut errors = use_signal(Vec::<FieldError>::new);

    let mut submit = move |_| {
        let mut draft = GigDraft {
            title: title.read().trim().to_string(),
            description: description.read().trim().to_string(),
            category: category.read().trim().to_string(),
            price_cents: 0,
            status: status.read().clone(),
        };

        let mut found = Vec::new();
        match parse_price_input(&price.read()) {
            Ok(cents) => draft.price_cents = cents,
            Err(message) => found.push(FieldError {
                field: "price",
                message,
            }),
        }
        found.extend(draft.validate());
        errors.set(found.clone());

        if found.is_empty() {
            on_submit.call(draft);
        }
    };

    let submit_label = if is_edit { "Save Changes" } else { "Create Gig" };
    let current_errors = errors.read().clone();

    rsx! {
        form {
            class: "max-w-2xl space-y-6",
            onsubmit: move |e| {
                e.prevent_default();
                submit(());
            },

            div {
                label { class: "block text-sm text-gray-400 mb-2", r#for: "gig-title", "Title" }
                TextInput {
                    id: "gig-title".to_string(),
                    value: title(),
                    size: TextInputSize::Medium,
                    placeholder: "What is this gig called?",
                    on_input: move |v| title.set(v),
                }
                if let Some(err) = error_for(&current_errors, "title") {
                    p { class: "text-sm text-red-400 mt-1", "{err}" }
                }
            }

            div {
                label {
                    class: "block text-sm text-gray-400 mb-2",
                    r#for: "gig-description",
                    "Description"
                }
                textarea {
                    id: "gig-description",
                    class: "w-full bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-300 placeholder-gray-500 min-h-32",
                    placeholder: "Describe the work included",
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
            }

            div { class: "grid grid-cols-2 gap-4",
                div {
                    label {
                        class: "block text-sm text-gray-400 mb-2",
                        r#for: "gig-category",
                        "Category"
                    }
                    TextInput {
                        id: "gig-category".to_string(),
                        value: category(),
                        size: TextInputSize::Medium,
                        placeholder: "e.g. design",
                        on_input: move |v| category.set(v),
                    }
                    if let Some(err) = error_for(&current_errors, "category") {
                        p { class: "text-sm text-red-400 mt-1", "{err}" }
                    }
                }
                div {
                    label { class: "block text-sm text-gray-400 mb-2", r#for: "gig-price", "Price ($)" }
                    TextInput {
                        id: "gig-price".to_string(),
                        value: price(),
                        size: TextInputSize::Medium,
                        placeholder: "12.50",
                        on_input: move |v| price.set(v),
                    }
                    if let Some(err) = error_for(&current_errors, "price") {
                        p { class: "text-sm text-red-400 mt-1", "{err}" }
                    }
                }
            }

            div {
                label { class: "block text-sm text-gray-400 mb-2", r#for: "gig-status", "Status" }
                select {
                    id: "gig-status",
                    class: "bg-gray-800/50 rounded-lg px-3 py-2 text-gray-300 focus:outline-none",
                    value: "{status.read().as_str()}",
                    onchange: move |e| status.set(GigStatus::from_str_repr(&e.value())),
                    for option_status in GigStatus::selectable() {
                        option {
                            value: "{option_status.as_str()}",
                            selected: *status.read() == option_status,
                            "{option_status.display_name()}"
                        }
                    }
                }
            }

            button {
                r#type: "submit",
                class: "px-4 py-2 text-sm bg-indigo-600 hover:bg-indigo-500 text-white rounded-md transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: submitting,
                "{submit_label}"
            }
        }
    }
}
