//! Link list and edit dialog views.
//!
//! # Design
//! - Keep side effects out of these components; they emit typed actions via callbacks.
//! - Local form state stays inside the dialog to avoid polluting shared store slices.
//! - Validation errors are surfaced inline with clear, localized copy.

use crate::features::links::actions::LinkAction;
use crate::features::links::logic::{
    LinkDraftError, url_format_warning, validate_draft,
};
use crate::features::links::state::LinkRow;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LinksPanelProps {
    pub links: Vec<LinkRow>,
    pub editing: Option<LinkRow>,
    pub busy: bool,
    pub on_action: Callback<LinkAction>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LinksPanel)]
pub(crate) fn links_panel(props: &LinksPanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    html! {
        <section class={classes!("links-panel", props.class.clone())}>
            <div class="panel-head">
                <h3>{t("links.title")}</h3>
            </div>
            {if props.links.is_empty() {
                html! { <p class="muted">{t("links.empty")}</p> }
            } else {
                html! {
                    <ul class="link-list">
                        {for props.links.iter().map(|row| render_row(row, &bundle, &props.on_action, props.busy))}
                    </ul>
                }
            }}
            {if let Some(row) = props.editing.clone() {
                html! {
                    <EditLinkDialog
                        row={row}
                        busy={props.busy}
                        on_action={props.on_action.clone()}
                    />
                }
            } else { html! {} }}
        </section>
    }
}

fn render_row(
    row: &LinkRow,
    bundle: &TranslationBundle,
    on_action: &Callback<LinkAction>,
    busy: bool,
) -> Html {
    let on_edit = {
        let on_action = on_action.clone();
        let row = row.clone();
        Callback::from(move |_| on_action.emit(LinkAction::RequestEdit(row.clone())))
    };
    let on_delete = {
        let on_action = on_action.clone();
        let row = row.clone();
        Callback::from(move |_| on_action.emit(LinkAction::Delete(row.clone())))
    };
    html! {
        <li class="link-row">
            <div class="link-main">
                <a href={row.url.clone()} target="_blank" rel="noopener noreferrer">
                    {row.description.clone()}
                </a>
                <p class="muted">
                    {format!(
                        "{} {} · {}",
                        bundle.text("links.author_prefix", ""),
                        row.author_urn,
                        row.created_label
                    )}
                </p>
                {if let Some(resource) = &row.resource_urn {
                    html! { <span class="pill subtle">{resource.clone()}</span> }
                } else { html! {} }}
            </div>
            <div class="link-actions">
                <button class="ghost" onclick={on_edit} disabled={busy}>
                    {bundle.text("links.edit", "")}
                </button>
                <button class="ghost danger" onclick={on_delete} disabled={busy}>
                    {bundle.text("links.delete", "")}
                </button>
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct EditLinkDialogProps {
    row: LinkRow,
    busy: bool,
    on_action: Callback<LinkAction>,
}

#[function_component(EditLinkDialog)]
fn edit_link_dialog(props: &EditLinkDialogProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let url = use_state(|| props.row.url.clone());
    let description = use_state(|| props.row.description.clone());
    let error = use_state(|| None as Option<String>);

    {
        let url = url.clone();
        let description = description.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |row: &LinkRow| {
                url.set(row.url.clone());
                description.set(row.description.clone());
                error.set(None);
                || ()
            },
            props.row.clone(),
        );
    }

    let on_url_input = {
        let url = url.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                url.set(input.value());
            }
        })
    };
    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                description.set(input.value());
            }
        })
    };

    let on_cancel = {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(LinkAction::CancelEdit))
    };

    let on_save = {
        let url = url.clone();
        let description = description.clone();
        let error = error.clone();
        let on_action = props.on_action.clone();
        let row = props.row.clone();
        let bundle = bundle.clone();
        Callback::from(move |_| {
            let draft = match validate_draft(url.as_str(), description.as_str()) {
                Ok(draft) => draft,
                Err(LinkDraftError::UrlRequired) => {
                    error.set(Some(bundle.text("links.error.url_required", "")));
                    return;
                }
                Err(LinkDraftError::DescriptionRequired) => {
                    error.set(Some(bundle.text("links.error.description_required", "")));
                    return;
                }
            };
            error.set(None);
            on_action.emit(LinkAction::SubmitEdit {
                row: row.clone(),
                draft,
            });
        })
    };

    let warning = url_format_warning(url.as_str());

    html! {
        <div class="dialog-backdrop" role="dialog" aria-modal="true">
            <div class="dialog edit-link">
                <h4>{t("links.edit_title")}</h4>
                <label>
                    <span>{t("links.url_label")}</span>
                    <input
                        placeholder={t("links.url_placeholder")}
                        value={(*url).clone()}
                        oninput={on_url_input}
                    />
                </label>
                {if warning {
                    html! { <p class="warn-text">{t("links.warn.url_format")}</p> }
                } else { html! {} }}
                <label>
                    <span>{t("links.description_label")}</span>
                    <input
                        placeholder={t("links.description_placeholder")}
                        value={(*description).clone()}
                        oninput={on_description_input}
                    />
                </label>
                {if let Some(message) = &*error {
                    html! { <p class="error-text">{message.clone()}</p> }
                } else { html! {} }}
                <div class="dialog-actions">
                    <button class="ghost" onclick={on_cancel} disabled={props.busy}>
                        {t("links.cancel")}
                    </button>
                    <button class="solid" onclick={on_save} disabled={props.busy}>
                        {t("links.save")}
                    </button>
                </div>
            </div>
        </div>
    }
}
