//! Organization onboarding wizard at `/onboarding`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts [`OnboardingWizard`] in a signal and swaps step components as the
//! step changes. The only network call is the organization create issued
//! from the billing step.
//!
//! DESIGN
//! ======
//! Step start/complete analytics fire on mount, unmount, and every step
//! change, so revisiting a step counts it again.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::billing_info_step::{BillingInfoStep, billing_ready};
use crate::components::organization_basics_step::{OrganizationBasicsStep, basics_ready};
use crate::components::success_step::SuccessStep;
use crate::net::types::OrganizationDraft;
use crate::state::onboarding::{OnboardingWizard, PrimaryAction, WizardStep};
use crate::state::session::use_session;
use crate::util::analytics::use_analytics;
use crate::util::auth::{LOGIN_PATH, handle_auth_failure, hard_redirect};
use crate::util::task::spawn;

const NOT_SIGNED_IN: &str = "You are not signed in. Please log in and try again.";

/// Whether the step's own field rules allow its forward control.
fn step_ready(step: WizardStep, draft: &OrganizationDraft) -> bool {
    match step {
        WizardStep::OrganizationBasics => basics_ready(draft),
        WizardStep::BillingInfo => billing_ready(draft),
        WizardStep::Success => false,
    }
}

/// Indicator modifier for `index` relative to the current step.
fn indicator_state(index: usize, current: usize) -> &'static str {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => "done",
        std::cmp::Ordering::Equal => "active",
        std::cmp::Ordering::Greater => "pending",
    }
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let sink = use_analytics();
    provide_context(sink.clone());
    let analytics = StoredValue::new(sink);
    let session = use_session();
    let navigate = use_navigate();

    let wizard = RwSignal::new(OnboardingWizard::new());
    let step = Memo::new(move |_| wizard.with(OnboardingWizard::step));

    Effect::new(move || {
        analytics.with_value(|a| wizard.with_untracked(|w| w.activate(a.sink())));
    });
    on_cleanup(move || {
        let _ = analytics.try_with_value(|a| wizard.try_with_untracked(|w| w.deactivate(a.sink())));
    });

    let on_previous = move |_| {
        analytics.with_value(|a| {
            wizard.update(|w| {
                w.previous(a.sink());
            });
        });
    };

    let on_primary = move |_| match wizard.with_untracked(OnboardingWizard::primary_action) {
        Some(PrimaryAction::Next) => analytics.with_value(|a| {
            wizard.update(|w| {
                w.next(a.sink());
            });
        }),
        Some(PrimaryAction::Submit) => {
            let Some(draft) = wizard.try_update(OnboardingWizard::begin_submit).flatten() else {
                return;
            };
            let Some(token) = session.token() else {
                wizard.update(|w| w.reject_submit(NOT_SIGNED_IN));
                navigate(LOGIN_PATH, NavigateOptions::default());
                return;
            };
            let session = session.clone();
            spawn(async move {
                let result = crate::net::api::create_organization(&token, &draft).await;
                let signed_out = result.as_ref().err().is_some_and(|e| handle_auth_failure(&session, e));
                analytics.with_value(|a| wizard.update(|w| w.finish_submit(result, a.sink())));
                if signed_out {
                    hard_redirect(LOGIN_PATH);
                }
            });
        }
        None => {}
    };

    let primary_disabled = move || wizard.with(|w| w.busy() || !step_ready(w.step(), w.draft()));

    view! {
        <div class="onboarding">
            <div class="onboarding__inner">
                <div class="onboarding__header">
                    <h1>"Welcome to EventLeads"</h1>
                    <p>"Let's set up your organisation in just a few steps"</p>
                </div>

                <div class="onboarding-progress">
                    <div class="onboarding-progress__labels">
                        <span>{move || wizard.with(OnboardingWizard::step_label)}</span>
                        <span>{move || format!("{}% Complete", wizard.with(OnboardingWizard::progress_percent))}</span>
                    </div>
                    <div class="onboarding-progress__track">
                        <div
                            class="onboarding-progress__bar"
                            style=move || format!("width: {}%;", wizard.with(OnboardingWizard::progress_percent))
                        ></div>
                    </div>
                </div>

                <div class="onboarding-steps">
                    {WizardStep::ALL
                        .into_iter()
                        .map(|s| {
                            let index = s.index();
                            let state = move || indicator_state(index, step.get().index());
                            view! {
                                <div class=move || format!("onboarding-steps__item onboarding-steps__item--{}", state())>
                                    <span class="onboarding-steps__dot">
                                        {move || if state() == "done" { "✓".to_owned() } else { (index + 1).to_string() }}
                                    </span>
                                    <span class="onboarding-steps__title">{s.title()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="onboarding-card">
                    <div class="onboarding-card__header">
                        <h2>{move || step.get().title()}</h2>
                        <p>{move || step.get().description()}</p>
                    </div>

                    {move || {
                        wizard
                            .with(|w| w.error().map(str::to_owned))
                            .map(|msg| view! { <div class="onboarding-card__error"><p>{msg}</p></div> })
                    }}

                    {move || match step.get() {
                        WizardStep::OrganizationBasics => view! { <OrganizationBasicsStep wizard/> }.into_any(),
                        WizardStep::BillingInfo => view! { <BillingInfoStep wizard/> }.into_any(),
                        WizardStep::Success => view! { <SuccessStep wizard/> }.into_any(),
                    }}

                    <div class="onboarding-card__nav" hidden=move || wizard.with(|w| w.primary_action().is_none())>
                        <button
                            class="wizard-button wizard-button--outline"
                            on:click=on_previous
                            disabled=move || !wizard.with(OnboardingWizard::can_go_previous)
                        >
                            "Previous"
                        </button>
                        <button class="wizard-button wizard-button--primary" on:click=on_primary disabled=primary_disabled>
                            {move || wizard.with(|w| w.primary_action().map(PrimaryAction::label).unwrap_or_default())}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
