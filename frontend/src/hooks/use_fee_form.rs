//! # Fee Form State
//!
//! State container behind the fee creation dialog.
//!
//! ## Responsibilities:
//! - Dialog visibility and custom-type mode
//! - Current field values, touched fields and inline errors
//! - The fee type / compulsory coupling
//! - Validate-then-submit flow around the injected handler
//!
//! The state is plain data so every transition can be exercised without a
//! browser; the Yew side drives it through [`FeeFormAction`].

use async_trait::async_trait;
use shared::{
    derive_compulsory, parse_amount_input, FeeCreationPayload, FeeDraft, FeeField,
    FeeFieldErrors, FeeTypeOption,
};
use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::services::logging::Logger;

const COMPONENT: &str = "CreateFeeDialog";

/// Persistence collaborator supplied by the parent
#[async_trait(?Send)]
pub trait FeeSubmitHandler {
    async fn submit_fee(&self, payload: FeeCreationPayload) -> anyhow::Result<()>;
}

/// Shared handle to a [`FeeSubmitHandler`], comparable for Yew props
#[derive(Clone)]
pub struct SubmitHandler(Rc<dyn FeeSubmitHandler>);

impl SubmitHandler {
    pub fn new(handler: impl FeeSubmitHandler + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn as_handler(&self) -> &dyn FeeSubmitHandler {
        self.0.as_ref()
    }
}

impl PartialEq for SubmitHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SubmitHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubmitHandler")
    }
}

/// Result of a handler call
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Handler succeeded; dialog closed and fields reset
    Submitted,
    /// Handler failed; dialog and values left as they were
    Failed(String),
}

/// Form state for creating a new fee
#[derive(Debug, Clone, PartialEq)]
pub struct FeeFormState {
    pub is_open: bool,
    /// Type rendered as free text instead of the fixed selector
    pub is_custom_type: bool,
    pub draft: FeeDraft,
    /// Raw amount text as typed, kept for redisplay
    pub amount_input: String,
    pub errors: FeeFieldErrors,
    pub touched: BTreeSet<FeeField>,
    /// Set by the first submit; later edits re-validate
    pub submit_attempted: bool,
}

impl Default for FeeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeeFormState {
    /// Create new fee form state with default values
    pub fn new() -> Self {
        let draft = FeeDraft::default();
        Self {
            is_open: false,
            is_custom_type: false,
            amount_input: draft.amount.to_string(),
            draft,
            errors: FeeFieldErrors::default(),
            touched: BTreeSet::new(),
            submit_attempted: false,
        }
    }

    pub fn open_dialog(&mut self) {
        self.is_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.is_open = false;
    }

    /// Return every field to its default, keeping visibility as is
    pub fn reset(&mut self) {
        *self = Self {
            is_open: self.is_open,
            ..Self::new()
        };
    }

    /// Handle a choice from the fee type selector
    pub fn select_type(&mut self, value: &str) {
        if value == FeeTypeOption::Other.value() {
            self.is_custom_type = true;
            self.draft.fee_type.clear();
        } else {
            self.is_custom_type = false;
            self.draft.fee_type = value.to_string();
            // Built-in selection always overwrites a manual choice.
            self.draft.compulsory = derive_compulsory(value).apply(false);
        }
        self.touch(FeeField::Type);
    }

    /// Free-text type entry in custom mode
    pub fn set_custom_type(&mut self, text: &str) {
        self.draft.fee_type = text.to_string();
        let rule = derive_compulsory(text);
        if rule.is_locked() {
            self.draft.compulsory = rule.apply(self.draft.compulsory);
        }
        self.touch(FeeField::Type);
    }

    pub fn set_amount_input(&mut self, text: &str) {
        self.amount_input = text.to_string();
        self.draft.amount = parse_amount_input(text);
        self.touch(FeeField::Amount);
    }

    pub fn set_month(&mut self, month: &str) {
        self.draft.month = month.to_string();
        self.touch(FeeField::Month);
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_string();
        self.touch(FeeField::Description);
    }

    /// Manual compulsory edit; refused while the type locks the flag
    pub fn set_compulsory(&mut self, compulsory: bool) -> bool {
        if self.is_compulsory_locked() {
            return false;
        }
        self.draft.compulsory = compulsory;
        self.touch(FeeField::Compulsory);
        true
    }

    pub fn is_compulsory_locked(&self) -> bool {
        derive_compulsory(&self.draft.fee_type).is_locked()
    }

    /// Built-in option matching the current type, for the selector
    pub fn selected_type_option(&self) -> Option<FeeTypeOption> {
        FeeTypeOption::from_value(&self.draft.fee_type).filter(FeeTypeOption::is_built_in)
    }

    pub fn error_message(&self, field: FeeField) -> Option<String> {
        self.errors.message(field)
    }

    fn touch(&mut self, field: FeeField) {
        self.touched.insert(field);
        if self.submit_attempted {
            self.errors = self.draft.validate().err().unwrap_or_default();
        }
    }

    /// Payload the current values would submit, without touching state
    pub fn submission(&self) -> Result<FeeCreationPayload, FeeFieldErrors> {
        self.draft.validate()
    }

    /// Validate the draft and record the errors for inline display
    pub fn begin_submit(&mut self) -> Result<FeeCreationPayload, FeeFieldErrors> {
        self.submit_attempted = true;
        match self.submission() {
            Ok(payload) => {
                self.errors = FeeFieldErrors::default();
                Ok(payload)
            }
            Err(errors) => {
                Logger::debug_with_component(
                    COMPONENT,
                    &format!("Fee form rejected with {} invalid field(s)", errors.len()),
                );
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Apply the handler's result
    pub fn finish_submit(&mut self, result: anyhow::Result<()>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                Logger::info_with_component(COMPONENT, "Fee created");
                self.close_dialog();
                self.reset();
                SubmitOutcome::Submitted
            }
            Err(error) => {
                Logger::error_with_component(
                    COMPONENT,
                    &format!("Failed to create fee: {:#}", error),
                );
                SubmitOutcome::Failed(error.to_string())
            }
        }
    }

    pub fn apply(&mut self, action: FeeFormAction) {
        match action {
            FeeFormAction::Open => self.open_dialog(),
            FeeFormAction::Close => self.close_dialog(),
            FeeFormAction::SelectType(value) => self.select_type(&value),
            FeeFormAction::SetCustomType(text) => self.set_custom_type(&text),
            FeeFormAction::SetAmountInput(text) => self.set_amount_input(&text),
            FeeFormAction::SetMonth(month) => self.set_month(&month),
            FeeFormAction::SetDescription(description) => self.set_description(&description),
            FeeFormAction::SetCompulsory(compulsory) => {
                self.set_compulsory(compulsory);
            }
            FeeFormAction::BeginSubmit => {
                let _ = self.begin_submit();
            }
            FeeFormAction::FinishSubmit(result) => {
                self.finish_submit(result);
            }
        }
    }
}

/// Transitions dispatched by the dialog component
pub enum FeeFormAction {
    Open,
    Close,
    SelectType(String),
    SetCustomType(String),
    SetAmountInput(String),
    SetMonth(String),
    SetDescription(String),
    SetCompulsory(bool),
    BeginSubmit,
    FinishSubmit(anyhow::Result<()>),
}

/// Submit the snapshot `form` through `dispatch`.
///
/// Dispatches `BeginSubmit` right away. When the values pass the schema the
/// returned future calls the handler once and dispatches `FinishSubmit` with
/// its result; otherwise there is nothing to run and the handler is never
/// called.
pub fn submit_task<D>(
    form: &FeeFormState,
    handler: SubmitHandler,
    dispatch: D,
) -> Option<impl Future<Output = ()>>
where
    D: Fn(FeeFormAction) + 'static,
{
    let submission = form.submission();
    dispatch(FeeFormAction::BeginSubmit);
    let payload = submission.ok()?;

    Some(async move {
        let result = handler.as_handler().submit_fee(payload).await;
        dispatch(FeeFormAction::FinishSubmit(result));
    })
}

impl Reducible for FeeFormState {
    type Action = FeeFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Hook for managing the fee creation form
#[hook]
pub fn use_fee_form() -> UseReducerHandle<FeeFormState> {
    use_reducer_eq(FeeFormState::new)
}
