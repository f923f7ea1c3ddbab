use crate::app::api::ApiCtx;
use crate::components::toast::ToastHost;
use crate::core::logic::DatasetRef;
use crate::core::store::{AppStore, app_dispatch, apply_dataset_view};
use crate::features::compliance;
use crate::features::compliance::actions::{SuggestionAction, feedback_message};
use crate::features::compliance::logic::SaveError;
use crate::features::compliance::state::{clear_suggestion, mark_saved, set_read, set_suggestion};
use crate::features::compliance::view::CompliancePanel;
use crate::features::links;
use crate::features::links::actions::{LinkAction, success_message};
use crate::features::links::logic::{EditBlocked, plan_edit};
use crate::features::links::state::{LinkRow, remove_row};
use crate::features::links::view::LinksPanel;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use crate::models::{Toast, ToastKind};
use crate::services::api::ApiClient;
use cairn_api_models::CompliancePolicy;
use cairn_events::Event as ActivityEvent;
use gloo::console;
use preferences::{api_base_url, load_locale, load_session, load_session_token, persist_locale};
pub(crate) use routes::Route;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

mod api;
mod preferences;
mod routes;

#[function_component(CairnApp)]
pub fn cairn_app() -> Html {
    let locale = use_state(load_locale);
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url(), load_session_token()), ());
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);
    let dispatch = app_dispatch();
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(|store| {
                    store.session = load_session();
                });
                || ()
            },
            (),
        );
    }

    let session = use_selector(|store: &AppStore| store.session.clone());
    let session_label = session.user().map_or_else(
        || bundle.text("shell.session_anonymous", ""),
        |user| {
            format!(
                "{} {}",
                bundle.text("shell.session_prefix", ""),
                user.display_name
            )
        },
    );

    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .cloned()
                    .filter(|toast| toast.id != id)
                    .collect(),
            );
        })
    };
    let on_toast = {
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            push_toast(&toasts, &toast_id, kind, message);
        })
    };

    let locale_selector = {
        let locale = locale.clone();
        html! {
            <select value={locale.code().to_string()} onchange={{
                let locale = locale.clone();
                Callback::from(move |e: Event| {
                    let Some(target) = e
                        .target()
                        .and_then(|node| node.dyn_into::<web_sys::HtmlSelectElement>().ok())
                    else {
                        return;
                    };
                    if let Some(next) = LocaleCode::from_lang_tag(&target.value()) {
                        persist_locale(next);
                        locale.set(next);
                    }
                })
            }}>
                {for LocaleCode::all().iter().map(|lc| html! {
                    <option value={lc.code()} selected={*lc == *locale}>{lc.label()}</option>
                })}
            </select>
        }
    };

    let bundle_ctx = bundle.clone();
    let bundle_routes = bundle.clone();

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle_ctx).clone()}>
                <BrowserRouter>
                    <header class="shell-head">
                        <div class="brand">
                            <strong>{bundle_ctx.text("app.title", "Cairn")}</strong>
                            <span class="muted">{bundle_ctx.text("app.tagline", "")}</span>
                        </div>
                        <div class="shell-meta">
                            <span class="muted">{session_label}</span>
                            {locale_selector}
                        </div>
                    </header>
                    <Switch<Route> render={move |route| {
                        let bundle = (*bundle_routes).clone();
                        match route {
                            Route::Home => html! {
                                <Placeholder
                                    title={bundle.text("placeholder.home_title", "")}
                                    body={bundle.text("placeholder.home_body", "")}
                                />
                            },
                            Route::Dataset { urn } => html! {
                                <DatasetPage urn={urn} on_toast={on_toast.clone()} />
                            },
                            Route::NotFound => html! {
                                <Placeholder
                                    title={bundle.text("placeholder.not_found_title", "")}
                                    body={bundle.text("placeholder.not_found_body", "")}
                                />
                            },
                        }
                    }} />
                    <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct DatasetPageProps {
    urn: String,
    on_toast: Callback<(ToastKind, String)>,
}

#[function_component(DatasetPage)]
fn dataset_page(props: &DatasetPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = app_dispatch();
    let edit_target = use_state(|| None as Option<LinkRow>);

    let dataset_name = use_selector(|store: &AppStore| store.dataset.name.clone());
    let link_rows = use_selector(|store: &AppStore| store.links.rows.clone());
    let links_busy = use_selector(|store: &AppStore| store.links.busy);
    let compliance_read = use_selector(|store: &AppStore| store.compliance.read.clone());
    let suggestion = use_selector(|store: &AppStore| store.compliance.suggestion.clone());
    let saving = use_selector(|store: &AppStore| store.compliance.saving);

    {
        let api_ctx = api_ctx.clone();
        let dispatch = dispatch.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        use_effect_with_deps(
            move |urn: &String| {
                if let Some(api_ctx) = api_ctx {
                    let client = api_ctx.client.clone();
                    let urn = urn.clone();
                    spawn_local(async move {
                        match client.fetch_dataset(&DatasetRef::Urn(urn.clone())).await {
                            Ok(view) => {
                                dispatch.reduce_mut(|store| apply_dataset_view(store, view));
                            }
                            Err(err) => on_toast.emit((
                                ToastKind::Error,
                                format!("{} {err}", bundle.text("toast.load_failed", "")),
                            )),
                        }
                        match compliance::api::read_by_urn(&client, &urn).await {
                            Ok(read) => {
                                dispatch.reduce_mut(|store| set_read(&mut store.compliance, read));
                            }
                            Err(err) => on_toast.emit((
                                ToastKind::Error,
                                format!("{} {err}", bundle.text("toast.load_failed", "")),
                            )),
                        }
                        let suggestion =
                            compliance::api::read_suggestion_by_urn(&client, &urn).await;
                        dispatch
                            .reduce_mut(|store| set_suggestion(&mut store.compliance, suggestion));
                    });
                }
                || ()
            },
            props.urn.clone(),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="error-text">{"Missing API context."}</p>
            </div>
        };
    };

    let on_link_action = {
        let client = api_ctx.client.clone();
        let dispatch = dispatch.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        let edit_target = edit_target.clone();
        let urn = props.urn.clone();
        Callback::from(move |action: LinkAction| match action {
            LinkAction::RequestEdit(row) => edit_target.set(Some(row)),
            LinkAction::CancelEdit => edit_target.set(None),
            LinkAction::Delete(row) => {
                let client = client.clone();
                let dispatch = dispatch.clone();
                let on_toast = on_toast.clone();
                let bundle = bundle.clone();
                let urn = urn.clone();
                let message = success_message(&bundle, &LinkAction::Delete(row.clone()));
                dispatch.reduce_mut(|store| store.links.busy = true);
                spawn_local(async move {
                    match links::api::delete_link(&client, &urn, &row).await {
                        Ok(()) => {
                            dispatch.reduce_mut(|store| {
                                remove_row(&mut store.links, &row.url, row.resource_urn.as_deref());
                            });
                            if let Some(message) = message {
                                on_toast.emit((ToastKind::Success, message));
                            }
                            record_activity(
                                &client,
                                ActivityEvent::LinkRemoved {
                                    dataset_urn: urn.clone(),
                                    url: row.url.clone(),
                                },
                            )
                            .await;
                        }
                        Err(err) => on_toast.emit((
                            ToastKind::Error,
                            format!("{} {err}", bundle.text("toast.link_delete_failed", "")),
                        )),
                    }
                    // The refetch runs regardless of the delete outcome.
                    refetch_dataset(&client, &dispatch, &on_toast, &bundle, &urn).await;
                    dispatch.reduce_mut(|store| store.links.busy = false);
                });
            }
            LinkAction::SubmitEdit { row, draft } => {
                let session = dispatch.get().session.clone();
                let plan = match plan_edit(session.user(), &urn, &row, &draft) {
                    Ok(plan) => plan,
                    Err(EditBlocked::MissingUser) => {
                        on_toast.emit((
                            ToastKind::Error,
                            bundle.text("toast.missing_user", ""),
                        ));
                        return;
                    }
                };
                let client = client.clone();
                let dispatch = dispatch.clone();
                let on_toast = on_toast.clone();
                let bundle = bundle.clone();
                let edit_target = edit_target.clone();
                let urn = urn.clone();
                let message = success_message(&bundle, &LinkAction::SubmitEdit { row, draft });
                dispatch.reduce_mut(|store| store.links.busy = true);
                spawn_local(async move {
                    match links::api::apply_edit(&client, &plan).await {
                        Ok(()) => {
                            record_activity(
                                &client,
                                ActivityEvent::LinkEdited {
                                    dataset_urn: plan.target_urn.clone(),
                                    url: plan.create.url.clone(),
                                },
                            )
                            .await;
                            if let Some(message) = message {
                                on_toast.emit((ToastKind::Success, message));
                            }
                            edit_target.set(None);
                            refetch_dataset(&client, &dispatch, &on_toast, &bundle, &urn).await;
                        }
                        Err(err) => on_toast.emit((
                            ToastKind::Error,
                            format!("{} {err}", bundle.text("toast.link_edit_failed", "")),
                        )),
                    }
                    dispatch.reduce_mut(|store| store.links.busy = false);
                });
            }
        })
    };

    let on_save_compliance = {
        let client = api_ctx.client.clone();
        let dispatch = dispatch.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        let urn = props.urn.clone();
        Callback::from(move |policy: CompliancePolicy| {
            let client = client.clone();
            let dispatch = dispatch.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            let urn = urn.clone();
            dispatch.reduce_mut(|store| store.compliance.saving = true);
            spawn_local(async move {
                match compliance::api::save(&client, &urn, &policy).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| {
                            mark_saved(&mut store.compliance, policy.clone());
                        });
                        on_toast.emit((
                            ToastKind::Success,
                            bundle.text("toast.compliance_saved", ""),
                        ));
                        record_activity(
                            &client,
                            ActivityEvent::ComplianceSaved {
                                dataset_urn: urn.clone(),
                            },
                        )
                        .await;
                    }
                    Err(SaveError::Policy(err)) => on_toast.emit((
                        ToastKind::Error,
                        format!("{} {err}", bundle.text("toast.compliance_save_failed", "")),
                    )),
                    Err(SaveError::Retention(err)) => {
                        // The policy body persisted; only retention is stale.
                        let (stripped, _) = policy.split_retention();
                        dispatch.reduce_mut(|store| {
                            mark_saved(&mut store.compliance, stripped);
                        });
                        on_toast.emit((
                            ToastKind::Error,
                            format!("{} {err}", bundle.text("toast.retention_save_failed", "")),
                        ));
                    }
                }
                dispatch.reduce_mut(|store| store.compliance.saving = false);
            });
        })
    };

    let on_feedback = {
        let client = api_ctx.client.clone();
        let dispatch = dispatch.clone();
        let on_toast = props.on_toast.clone();
        let bundle = bundle.clone();
        let urn = props.urn.clone();
        Callback::from(move |action: SuggestionAction| {
            let client = client.clone();
            let dispatch = dispatch.clone();
            let on_toast = on_toast.clone();
            let bundle = bundle.clone();
            let urn = urn.clone();
            let uid = dispatch
                .get()
                .compliance
                .suggestion
                .as_ref()
                .and_then(|suggestion| suggestion.uid);
            spawn_local(async move {
                match compliance::api::save_suggestion_feedback(
                    &client,
                    &urn,
                    uid,
                    action.feedback(),
                )
                .await
                {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| clear_suggestion(&mut store.compliance));
                        on_toast.emit((ToastKind::Success, feedback_message(&bundle, action)));
                        record_activity(
                            &client,
                            ActivityEvent::SuggestionFeedback {
                                dataset_urn: urn.clone(),
                                uid,
                                accepted: action == SuggestionAction::Accept,
                            },
                        )
                        .await;
                    }
                    Err(err) => on_toast.emit((
                        ToastKind::Error,
                        format!("{} {err}", bundle.text("toast.feedback_failed", "")),
                    )),
                }
            });
        })
    };

    let title = (*dataset_name)
        .clone()
        .unwrap_or_else(|| props.urn.clone());

    html! {
        <main class="dataset-page">
            <div class="page-head">
                <h2>{title}</h2>
                <span class="muted mono">{props.urn.clone()}</span>
            </div>
            <div class="dataset-panels">
                <LinksPanel
                    links={(*link_rows).clone()}
                    editing={(*edit_target).clone()}
                    busy={*links_busy}
                    on_action={on_link_action}
                />
                <CompliancePanel
                    read={(*compliance_read).clone()}
                    suggestion={(*suggestion).clone()}
                    saving={*saving}
                    on_save={on_save_compliance}
                    on_feedback={on_feedback}
                />
            </div>
        </main>
    }
}

/// Refresh the dataset view, surfacing failures as an info toast.
async fn refetch_dataset(
    client: &Rc<ApiClient>,
    dispatch: &yewdux::prelude::Dispatch<AppStore>,
    on_toast: &Callback<(ToastKind, String)>,
    bundle: &TranslationBundle,
    urn: &str,
) {
    match client
        .fetch_dataset(&DatasetRef::Urn(urn.to_string()))
        .await
    {
        Ok(view) => dispatch.reduce_mut(|store| apply_dataset_view(store, view)),
        Err(err) => on_toast.emit((
            ToastKind::Info,
            format!("{} {err}", bundle.text("toast.refresh_failed", "")),
        )),
    }
}

/// Post an activity event; failures are logged, never surfaced.
async fn record_activity(client: &Rc<ApiClient>, event: ActivityEvent) {
    if let Err(err) = client.record_activity(&event).await {
        console::warn!("activity event dropped", event.kind(), err.to_string());
    }
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder">
            <h2>{&props.title}</h2>
            <p class="muted">{&props.body}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    pub title: String,
    pub body: String,
}

fn push_toast(
    toasts: &UseStateHandle<Vec<Toast>>,
    next_id: &UseStateHandle<u64>,
    kind: ToastKind,
    message: String,
) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**toasts).clone();
    list.push(Toast { id, message, kind });
    if list.len() > 4 {
        let drain = list.len() - 4;
        list.drain(0..drain);
    }
    toasts.set(list);
}

/// Mount the application onto the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<CairnApp>::new().render();
}
