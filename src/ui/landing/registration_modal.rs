//! Free-trial registration dialog
//!
//! The dialog is a thin view over [`RegistrationFlow`]: inputs write into the
//! draft, submit validates it, and the caller's handler decides whether the
//! submission went through.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{Field, RegistrationDraft, RegistrationFlow, RegistrationForm, SubmitFuture};
use crate::ui::common::{Button, ButtonSize, ButtonVariant, CheckboxField, Dialog, FormField};

/// Handler used when the caller does not supply one: log the payload and accept it
fn log_submission(form: RegistrationForm) -> SubmitFuture {
    match serde_json::to_string(&form) {
        Ok(json) => log!("Form submitted: {}", json),
        Err(err) => error!("Form submitted but could not be serialized: {}", err),
    }
    Box::pin(async { Ok(()) })
}

/// Trial sign-up dialog with inline validation
#[component]
pub fn RegistrationModal(
    /// Open state owned by the caller; the dialog opens itself when omitted
    #[prop(optional, into)]
    open: Option<Signal<bool>>,
    /// Told about every open/close the dialog performs
    #[prop(optional, into)]
    on_open_change: Option<Callback<bool>>,
    /// Receives the validated form; an `Err` keeps the dialog open
    #[prop(optional, into)]
    on_submit: Option<Callback<RegistrationForm, SubmitFuture>>,
) -> impl IntoView {
    let starts_open = open.map(|o| o.get_untracked()).unwrap_or(true);
    let flow = RwSignal::new(if starts_open {
        RegistrationFlow::opened()
    } else {
        RegistrationFlow::new()
    });
    let on_submit = on_submit.unwrap_or_else(|| Callback::new(log_submission));

    let notify = move |is_open: bool| {
        if let Some(cb) = on_open_change {
            cb.run(is_open);
        }
    };

    // Follow the caller's open state
    if let Some(open) = open {
        Effect::new(move |_| {
            if open.get() {
                flow.update(RegistrationFlow::open);
            } else {
                flow.update(|f| {
                    f.close();
                });
            }
        });
    }

    // A controlled dialog only asks; the caller's `open` drives `close()`
    let controlled = open.is_some();
    let request_close = Callback::new(move |_: ()| {
        let closing = if controlled {
            flow.try_with_untracked(RegistrationFlow::can_close)
        } else {
            flow.try_update(RegistrationFlow::close)
        };
        if closing.unwrap_or(false) {
            notify(false);
        }
    });

    let is_open = Signal::derive(move || flow.with(RegistrationFlow::is_open));
    let submitting = Signal::derive(move || flow.with(RegistrationFlow::is_submitting));

    let text = move |read: fn(&RegistrationDraft) -> String| {
        Signal::derive(move || flow.with(|f| read(f.draft())))
    };
    let edit = move |field: Option<Field>, write: fn(&mut RegistrationDraft, String)| {
        Callback::new(move |value: String| {
            flow.update(|f| {
                write(f.draft_mut(), value);
                if let Some(field) = field {
                    f.clear_error(field);
                }
            })
        })
    };
    let error_for =
        move |field: Field| Signal::derive(move || flow.with(|f| f.errors().message(field)));

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = flow.try_update(RegistrationFlow::submit).flatten() else {
            return;
        };

        let pending = on_submit.run(form);
        spawn_local(async move {
            let outcome = pending.await;
            if let Err(err) = &outcome {
                error!("Registration failed: {}", err);
            }
            let accepted = outcome.is_ok();
            flow.update(|f| {
                if controlled {
                    f.finish_controlled(outcome)
                } else {
                    f.finish(outcome)
                }
            });
            if accepted {
                notify(false);
            }
        });
    };

    view! {
        <Dialog
            title="Start Your Free Trial".to_string()
            description="Get access to AI-powered price predictions for your agricultural business.".to_string()
            is_open=is_open
            on_close=request_close
        >
            <form on:submit=handle_submit class="space-y-4 py-4" novalidate=true>
                <FormField
                    id="name"
                    label="Full Name"
                    required=true
                    placeholder="John Doe"
                    value=text(|d| d.name.clone())
                    on_input=edit(Some(Field::Name), |d, v| d.name = v)
                    disabled=submitting
                    error=error_for(Field::Name)
                />
                <FormField
                    id="email"
                    label="Email Address"
                    required=true
                    input_type="email"
                    placeholder="john@example.com"
                    value=text(|d| d.email.clone())
                    on_input=edit(Some(Field::Email), |d, v| d.email = v)
                    disabled=submitting
                    error=error_for(Field::Email)
                />
                <FormField
                    id="company"
                    label="Company Name"
                    placeholder="Your Company"
                    value=text(|d| d.company.clone())
                    on_input=edit(None, |d, v| d.company = v)
                    disabled=submitting
                />
                <FormField
                    id="phone"
                    label="Phone Number"
                    input_type="tel"
                    placeholder="+1 (555) 123-4567"
                    value=text(|d| d.phone.clone())
                    on_input=edit(None, |d, v| d.phone = v)
                    disabled=submitting
                />
                <CheckboxField
                    id="agreeToTerms"
                    checked=Signal::derive(move || flow.with(|f| f.draft().agree_to_terms))
                    on_change=Callback::new(move |checked: bool| {
                        flow.update(|f| {
                            f.draft_mut().agree_to_terms = checked;
                            f.clear_error(Field::AgreeToTerms);
                        })
                    })
                    disabled=submitting
                    error=error_for(Field::AgreeToTerms)
                >
                    "I agree to the terms and conditions"
                    <span class="text-red-500">"*"</span>
                </CheckboxField>

                <div class="pt-4">
                    <Button
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Medium
                        button_type="submit"
                        loading=submitting
                        class="w-full"
                    >
                        {move || if submitting.get() { "Processing..." } else { "Start Free Trial" }}
                    </Button>
                </div>

                <p class="text-xs text-center text-gray-400 mt-4">
                    "No credit card required. 14-day free trial."
                </p>
            </form>
        </Dialog>
    }
}
