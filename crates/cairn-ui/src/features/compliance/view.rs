//! Compliance policy editor and suggestion banner views.
//!
//! # Design
//! - Keep side effects out of these components; they emit typed requests via callbacks.
//! - Local form state stays inside the panel and resets when a new read arrives.
//! - Accepting a suggestion edits the working form; persistence stays explicit.

use crate::features::compliance::actions::SuggestionAction;
use crate::features::compliance::state::{ComplianceFormState, ComplianceRead, PersonalDataChoice};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use cairn_api_models::{
    CompliancePolicy, ComplianceSuggestion, DataClassification, PurgePolicy,
};
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CompliancePanelProps {
    pub read: Option<ComplianceRead>,
    pub suggestion: Option<ComplianceSuggestion>,
    pub saving: bool,
    pub on_save: Callback<CompliancePolicy>,
    pub on_feedback: Callback<SuggestionAction>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CompliancePanel)]
pub(crate) fn compliance_panel(props: &CompliancePanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let form = use_state(ComplianceFormState::default);

    {
        let form = form.clone();
        use_effect_with_deps(
            move |read: &Option<ComplianceRead>| {
                if let Some(read) = read {
                    form.set(ComplianceFormState::from_policy(&read.policy));
                }
                || ()
            },
            props.read.clone(),
        );
    }

    let Some(read) = props.read.clone() else {
        return html! {
            <section class={classes!("compliance-panel", props.class.clone())}>
                <div class="panel-head">
                    <h3>{t("compliance.title")}</h3>
                </div>
                <p class="muted skeleton">{""}</p>
            </section>
        };
    };

    let badge = if read.is_new {
        t("compliance.badge_new")
    } else {
        t("compliance.badge_existing")
    };

    let on_classification_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.classification = select.value();
                form.set(next);
            }
        })
    };
    let on_personal_data_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.personal_data = PersonalDataChoice::from_value(&select.value());
                form.set(next);
            }
        })
    };
    let on_purge_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*form).clone();
                next.purge_policy = select.value();
                form.set(next);
            }
        })
    };
    let on_note_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*form).clone();
                next.purge_note = area.value();
                form.set(next);
            }
        })
    };

    let on_save = {
        let form = form.clone();
        let base = read.policy.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_| {
            on_save.emit(form.to_policy(&base));
        })
    };

    let suggestion_banner = props.suggestion.as_ref().map_or_else(
        || html! {},
        |suggestion| {
            render_suggestion(
                &bundle,
                suggestion,
                &form,
                &props.on_feedback,
                props.saving,
            )
        },
    );

    html! {
        <section class={classes!("compliance-panel", props.class.clone())}>
            <div class="panel-head">
                <h3>{t("compliance.title")}</h3>
                <span class={classes!("pill", if read.is_new { "subtle" } else { "solid" })}>
                    {badge}
                </span>
            </div>
            {suggestion_banner}
            <div class="compliance-form">
                <label>
                    <span>{t("compliance.classification")}</span>
                    <select value={form.classification.clone()} onchange={on_classification_change}>
                        <option value="" selected={form.classification.is_empty()}>
                            {t("compliance.classification_unset")}
                        </option>
                        {for DataClassification::all().iter().map(|level| html! {
                            <option
                                value={level.as_value()}
                                selected={form.classification == level.as_value()}
                            >
                                {bundle.text(&format!("compliance.level.{}", level.as_value()), "")}
                            </option>
                        })}
                    </select>
                </label>
                <label>
                    <span>{t("compliance.personal_data")}</span>
                    <select value={form.personal_data.as_value()} onchange={on_personal_data_change}>
                        <option value="unknown" selected={form.personal_data == PersonalDataChoice::Unknown}>
                            {t("compliance.personal_data_unknown")}
                        </option>
                        <option value="yes" selected={form.personal_data == PersonalDataChoice::Yes}>
                            {t("compliance.personal_data_yes")}
                        </option>
                        <option value="no" selected={form.personal_data == PersonalDataChoice::No}>
                            {t("compliance.personal_data_no")}
                        </option>
                    </select>
                </label>
                <label>
                    <span>{t("compliance.purge_policy")}</span>
                    <select value={form.purge_policy.clone()} onchange={on_purge_change}>
                        <option value="" selected={form.purge_policy.is_empty()}>
                            {t("compliance.purge_policy_unset")}
                        </option>
                        {for PurgePolicy::all().iter().map(|purge| html! {
                            <option
                                value={purge.as_value()}
                                selected={form.purge_policy == purge.as_value()}
                            >
                                {bundle.text(&format!("compliance.purge.{}", purge.as_value()), "")}
                            </option>
                        })}
                    </select>
                </label>
                <label>
                    <span>{t("compliance.purge_note")}</span>
                    <textarea
                        rows="2"
                        placeholder={t("compliance.purge_note_placeholder")}
                        value={form.purge_note.clone()}
                        oninput={on_note_input}
                    />
                </label>
                <div class="panel-actions">
                    <button class="solid" onclick={on_save} disabled={props.saving}>
                        {if props.saving { t("compliance.saving") } else { t("compliance.save") }}
                    </button>
                </div>
            </div>
        </section>
    }
}

fn render_suggestion(
    bundle: &TranslationBundle,
    suggestion: &ComplianceSuggestion,
    form: &UseStateHandle<ComplianceFormState>,
    on_feedback: &Callback<SuggestionAction>,
    saving: bool,
) -> Html {
    let summary = suggestion
        .classification
        .map(|level| bundle.text(&format!("compliance.level.{}", level.as_value()), ""))
        .unwrap_or_default();
    let on_accept = {
        let form = form.clone();
        let suggestion = suggestion.clone();
        let on_feedback = on_feedback.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.apply_suggestion(&suggestion);
            form.set(next);
            on_feedback.emit(SuggestionAction::Accept);
        })
    };
    let on_discard = {
        let on_feedback = on_feedback.clone();
        Callback::from(move |_| on_feedback.emit(SuggestionAction::Discard))
    };
    html! {
        <div class="suggestion-banner" role="note">
            <div class="suggestion-body">
                <strong>{bundle.text("compliance.suggestion_title", "")}</strong>
                <span>{summary}</span>
                {if let Some(confidence) = suggestion.confidence {
                    html! { <span class="muted">{format!("{:.0}%", confidence * 100.0)}</span> }
                } else { html! {} }}
            </div>
            <div class="suggestion-actions">
                <button class="solid" onclick={on_accept} disabled={saving}>
                    {bundle.text("compliance.accept", "")}
                </button>
                <button class="ghost" onclick={on_discard} disabled={saving}>
                    {bundle.text("compliance.discard", "")}
                </button>
            </div>
        </div>
    }
}
