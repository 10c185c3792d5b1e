//! Settings page: site document editor plus the admin token box.
//!
//! # Design
//! - The form stays `None` until the document arrives so a failed load never
//!   shows editable zeros.
//! - Signing in only updates the shared store; the app root pushes the token
//!   into the API client.

use std::rc::Rc;

use risalo_api_models::Lang;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::app::api::ApiCtx;
use crate::app::hooks::use_slot;
use crate::app::preferences::persist_session;
use crate::components::notice_host::NoticeHost;
use crate::core::notice::{NoticeKind, NoticeSlot};
use crate::core::session::Session;
use crate::core::store::AppStore;
use crate::features::settings::api::{get_settings, put_settings};
use crate::features::settings::state::{SettingsFormState, lang_from_value};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");

    let form = use_state(|| None as Option<SettingsFormState>);
    let form_error = use_state(|| None as Option<String>);
    let load_error = use_state(|| None as Option<String>);
    let attempt = use_state(|| 0_u32);
    let saving = use_state(|| false);
    let token_input = use_state(String::new);
    let notices = use_slot::<NoticeSlot>();
    let dispatch = Dispatch::<AppStore>::new();
    let session = use_selector(|store: &AppStore| store.session.clone());
    let api_ctx = use_context::<ApiCtx>();

    {
        let api_ctx = api_ctx.clone();
        let form = form.clone();
        let load_error = load_error.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api_ctx {
                    let client = Rc::clone(&api.client);
                    yew::platform::spawn_local(async move {
                        match get_settings(&client).await {
                            Ok(settings) => {
                                load_error.set(None);
                                form.set(Some(SettingsFormState::from_settings(&settings)));
                            }
                            Err(err) => load_error.set(Some(err.to_string())),
                        }
                    });
                }
                || ()
            },
            *attempt,
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| attempt.set(*attempt + 1))
    };

    let on_save = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        let saving = saving.clone();
        let notices = notices.clone();
        Callback::from(move |_| {
            let Some(state) = (*form).clone() else {
                return;
            };
            let settings = match state.to_settings() {
                Ok(settings) => settings,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
            form_error.set(None);
            saving.set(true);
            let client = Rc::clone(&api_ctx.client);
            let bundle = bundle.clone();
            let form = form.clone();
            let saving = saving.clone();
            let notices = notices.clone();
            yew::platform::spawn_local(async move {
                match put_settings(&client, &settings).await {
                    Ok(saved) => {
                        // Re-seed from the server copy so the form shows what
                        // actually got stored.
                        form.set(Some(SettingsFormState::from_settings(&saved)));
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Success, bundle.text("notice.saved", ""));
                        });
                    }
                    Err(err) => {
                        notices.mutate(|slot| {
                            slot.push(NoticeKind::Error, err.to_string());
                        });
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_sign_in = {
        let bundle = bundle.clone();
        let dispatch = dispatch.clone();
        let token_input = token_input.clone();
        let notices = notices.clone();
        Callback::from(move |_| {
            let session = Session::new(&token_input);
            if session.token().is_none() {
                return;
            }
            persist_session(&session);
            dispatch.reduce_mut(|store| store.session = session);
            token_input.set(String::new());
            let message = bundle.text("settings.signed_in", "");
            notices.mutate(|slot| {
                slot.push(NoticeKind::Success, message);
            });
        })
    };
    let on_sign_out = {
        let bundle = bundle.clone();
        let notices = notices.clone();
        Callback::from(move |_| {
            persist_session(&Session::default());
            dispatch.reduce_mut(|store| store.session = Session::default());
            let message = bundle.text("settings.signed_out", "");
            notices.mutate(|slot| {
                slot.push(NoticeKind::Info, message);
            });
        })
    };

    let notice = notices.read().current().cloned();
    let on_expire = {
        let notices = notices.clone();
        Callback::from(move |seq: u64| {
            notices.mutate(|slot| {
                slot.expire(seq);
            });
        })
    };
    let on_dismiss = {
        let notices = notices.clone();
        Callback::from(move |()| notices.mutate(NoticeSlot::dismiss))
    };

    let editor = if let Some(message) = load_error.as_ref() {
        html! {
            <div class="banner error">
                <span>{format!("{}: {message}", t("common.error"))}</span>
                <button class="btn btn-ghost btn-sm" onclick={on_retry}>{t("common.retry")}</button>
            </div>
        }
    } else if let Some(state) = form.as_ref() {
        html! {
            <div class="stacked">
                <label class="stack">
                    <span>{t("settings.site_title_sd")}</span>
                    <input
                        type="text"
                        dir="rtl"
                        value={state.site_title_sd.clone()}
                        oninput={{
                            let form = form.clone();
                            Callback::from(move |event: InputEvent| {
                                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                    update_form(&form, |state| state.site_title_sd = input.value());
                                }
                            })
                        }}
                    />
                </label>
                <label class="stack">
                    <span>{t("settings.site_title_en")}</span>
                    <input
                        type="text"
                        dir="ltr"
                        value={state.site_title_en.clone()}
                        oninput={{
                            let form = form.clone();
                            Callback::from(move |event: InputEvent| {
                                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                    update_form(&form, |state| state.site_title_en = input.value());
                                }
                            })
                        }}
                    />
                </label>
                <label class="stack">
                    <span>{t("settings.default_lang")}</span>
                    <select
                        value={state.default_lang.as_str()}
                        onchange={{
                            let form = form.clone();
                            Callback::from(move |event: Event| {
                                if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                                    let next = lang_from_value(&select.value());
                                    update_form(&form, |state| state.default_lang = next);
                                }
                            })
                        }}
                    >
                        <option value="sd" selected={state.default_lang == Lang::Sd}>{"سنڌي"}</option>
                        <option value="en" selected={state.default_lang == Lang::En}>{"English"}</option>
                    </select>
                </label>
                <label class="stack">
                    <span>{t("settings.couplets_per_page")}</span>
                    <input
                        type="number"
                        min="1"
                        max="100"
                        value={state.couplets_per_page.clone()}
                        oninput={{
                            let form = form.clone();
                            Callback::from(move |event: InputEvent| {
                                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                    update_form(&form, |state| state.couplets_per_page = input.value());
                                }
                            })
                        }}
                    />
                </label>
                <label class="stack toggle-row">
                    <span>{t("settings.show_romanized")}</span>
                    <input
                        type="checkbox"
                        checked={state.show_romanized}
                        onchange={{
                            let form = form.clone();
                            Callback::from(move |event: Event| {
                                if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                    let checked = input.checked();
                                    update_form(&form, |state| state.show_romanized = checked);
                                }
                            })
                        }}
                    />
                </label>
                {if let Some(message) = form_error.as_ref() {
                    html! { <p class="text-sm text-error">{message.clone()}</p> }
                } else {
                    html! {}
                }}
                <div class="actions">
                    <button class="btn btn-primary" disabled={*saving} onclick={on_save}>
                        {if *saving { t("common.saving") } else { t("common.save") }}
                    </button>
                </div>
            </div>
        }
    } else {
        html! { <p class="muted">{t("common.loading")}</p> }
    };

    let token_panel = if session.is_admin() {
        html! {
            <div class="toggle-row">
                <span class="pill subtle">{t("settings.signed_in")}</span>
                <button class="btn btn-ghost btn-sm" onclick={on_sign_out}>
                    {t("settings.sign_out")}
                </button>
            </div>
        }
    } else {
        html! {
            <div class="quick-add">
                <input
                    type="password"
                    placeholder={t("settings.token_hint")}
                    value={(*token_input).clone()}
                    oninput={{
                        let token_input = token_input.clone();
                        Callback::from(move |event: InputEvent| {
                            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                                token_input.set(input.value());
                            }
                        })
                    }}
                />
                <button
                    class="btn btn-primary btn-sm"
                    disabled={token_input.trim().is_empty()}
                    onclick={on_sign_in}
                >
                    {t("common.save")}
                </button>
            </div>
        }
    };

    html! {
        <section class="settings-page">
            <NoticeHost notice={notice} on_expire={on_expire} on_dismiss={on_dismiss} />
            <div class="panel">
                <div class="panel-head">
                    <div>
                        <h3>{t("settings.title")}</h3>
                    </div>
                </div>
                {editor}
            </div>
            <div class="panel editor">
                <div class="panel-subhead">
                    <strong>{t("settings.token")}</strong>
                </div>
                {token_panel}
            </div>
        </section>
    }
}

fn update_form(
    form: &UseStateHandle<Option<SettingsFormState>>,
    update: impl FnOnce(&mut SettingsFormState),
) {
    let mut next = (**form).clone();
    if let Some(state) = next.as_mut() {
        update(state);
        form.set(next);
    }
}
