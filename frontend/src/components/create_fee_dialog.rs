use shared::{FeeField, FeeTypeOption};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::month_select::MonthSelect;
use crate::hooks::use_fee_form::{
    submit_task, use_fee_form, FeeFormAction, FeeFormState, SubmitHandler,
};

#[derive(Properties, PartialEq)]
pub struct CreateFeeDialogProps {
    /// Persists the validated fee
    pub on_submit: SubmitHandler,
    /// Parent-side flag for an in-flight submission
    #[prop_or_default]
    pub is_loading: bool,
}

/// Label and enabled state of the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub label: &'static str,
    pub disabled: bool,
}

impl SubmitButtonState {
    pub fn for_loading(is_loading: bool) -> Self {
        if is_loading {
            Self {
                label: "Creating...",
                disabled: true,
            }
        } else {
            Self {
                label: "Create Fee",
                disabled: false,
            }
        }
    }
}

/// Keys that dismiss the open dialog
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

fn field_error(form: &FeeFormState, field: FeeField) -> Html {
    match form.error_message(field) {
        Some(message) => html! {
            <p class="form-message error">{message}</p>
        },
        None => html! {},
    }
}

#[function_component(CreateFeeDialog)]
pub fn create_fee_dialog(props: &CreateFeeDialogProps) -> Html {
    let form = use_fee_form();

    let on_open = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FeeFormAction::Open))
    };

    let on_cancel = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(FeeFormAction::Close))
    };

    let on_backdrop_click = {
        let form = form.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            form.dispatch(FeeFormAction::Close);
        })
    };

    let on_backdrop_keydown = {
        let form = form.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_dismiss_key(&e.key()) {
                e.prevent_default();
                form.dispatch(FeeFormAction::Close);
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_type_select = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FeeFormAction::SelectType(select.value()));
        })
    };

    let on_custom_type_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FeeFormAction::SetCustomType(input.value()));
        })
    };

    let on_amount_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FeeFormAction::SetAmountInput(input.value()));
        })
    };

    let on_month_change = {
        let form = form.clone();
        Callback::from(move |month: String| form.dispatch(FeeFormAction::SetMonth(month)))
    };

    let on_description_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FeeFormAction::SetDescription(input.value()));
        })
    };

    let on_compulsory_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FeeFormAction::SetCompulsory(select.value() == "true"));
        })
    };

    let on_submit = {
        let form = form.clone();
        let handler = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let dispatcher = form.dispatcher();
            let dispatch = move |action: FeeFormAction| dispatcher.dispatch(action);
            if let Some(task) = submit_task(&form, handler.clone(), dispatch) {
                spawn_local(task);
            }
        })
    };

    let trigger = html! {
        <button type="button" class="btn btn-outline btn-sm" onclick={on_open}>
            <span class="icon">{"+"}</span>
            <span class="btn-label">{"Add Fee"}</span>
        </button>
    };

    if !form.is_open {
        return trigger;
    }

    let submit_button = SubmitButtonState::for_loading(props.is_loading);

    let type_input = if form.is_custom_type {
        html! {
            <input
                id="fee-type"
                type="text"
                class="fee-input"
                placeholder="Enter custom fee type"
                value={form.draft.fee_type.clone()}
                oninput={on_custom_type_input}
            />
        }
    } else {
        let selected = form.selected_type_option();
        html! {
            <select id="fee-type" class="fee-select" onchange={on_type_select}>
                <option value="" disabled=true selected={selected.is_none()}>
                    {"Select fee type"}
                </option>
                {for FeeTypeOption::ALL.iter().map(|option| html! {
                    <option value={option.value()} selected={selected == Some(*option)}>
                        {option.label()}
                    </option>
                })}
            </select>
        }
    };

    html! {
        <>
            {trigger}
            <div
                class="fee-modal-backdrop"
                tabindex="-1"
                onclick={on_backdrop_click}
                onkeydown={on_backdrop_keydown}
            >
                <div class="fee-modal" onclick={on_modal_click}>
                    <div class="fee-modal-header">
                        <h3 class="fee-modal-title">{"Add New Fee"}</h3>
                        <p class="fee-modal-description">
                            {"Fill in the details to add a new fee to the system."}
                        </p>
                    </div>

                    <form class="fee-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="fee-type">{"Fee Type"}</label>
                            {type_input}
                            {field_error(&form, FeeField::Type)}
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="fee-amount">{"Amount (VND)"}</label>
                                <input
                                    id="fee-amount"
                                    type="number"
                                    class="fee-input"
                                    placeholder="Enter amount"
                                    value={form.amount_input.clone()}
                                    oninput={on_amount_input}
                                />
                                {field_error(&form, FeeField::Amount)}
                            </div>

                            <div class="form-group">
                                <label for="month">{"Month"}</label>
                                <MonthSelect
                                    id="month"
                                    value={form.draft.month.clone()}
                                    on_change={on_month_change}
                                />
                                {field_error(&form, FeeField::Month)}
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="fee-description">{"Description"}</label>
                            <input
                                id="fee-description"
                                type="text"
                                class="fee-input"
                                placeholder="Enter description"
                                value={form.draft.description.clone()}
                                oninput={on_description_input}
                            />
                            {field_error(&form, FeeField::Description)}
                        </div>

                        <div class="form-group">
                            <label for="fee-compulsory">{"Compulsory"}</label>
                            <select
                                id="fee-compulsory"
                                class="fee-select"
                                disabled={form.is_compulsory_locked()}
                                onchange={on_compulsory_change}
                            >
                                <option value="true" selected={form.draft.compulsory}>
                                    {"Yes - Compulsory"}
                                </option>
                                <option value="false" selected={!form.draft.compulsory}>
                                    {"No - Optional"}
                                </option>
                            </select>
                            {field_error(&form, FeeField::Compulsory)}
                        </div>

                        <div class="fee-modal-footer">
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="btn btn-primary" disabled={submit_button.disabled}>
                                {submit_button.label}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </>
    }
}
