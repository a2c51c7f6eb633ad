//! The dialog's state machine.
//!
//! All of the checkout dialog's local state lives in one [`CheckoutState`]
//! driven through [`CheckoutAction`]s, so the whole submission lifecycle
//! (editing, validating, dispatching, awaiting the frame signal, success,
//! failure, retry) is a pure transition function that native unit tests can
//! exercise without a DOM. The Yew component wraps it in `use_reducer`.

use std::rc::Rc;

use yew::prelude::*;

use crate::request::DraftOrder;

/// Where the dialog currently is in the submission lifecycle. `Hidden` has no
/// variant here: a closed dialog renders nothing and keeps no live state
/// machine of interest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Form panel visible, inputs editable.
    Editing,
    /// Confirm clicked; validating and constructing the request.
    Submitting,
    /// Request dispatched; waiting for the result frame's load signal.
    AwaitingResult,
    /// Result panel showing success.
    Succeeded,
}

/// Everything a checkout dialog instance remembers while open.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutState {
    pub draft: DraftOrder,
    /// Set from confirm until a result (or failure) is observed; gates the
    /// confirm action and disables all inputs.
    pub loading: bool,
    /// Most recent validation or submission error, shown in whichever panel
    /// is active.
    pub error: Option<String>,
    /// Result panel visible (submission dispatched or pass-through success).
    pub show_result: bool,
    /// The result frame reported its content loaded.
    pub frame_loaded: bool,
}

/// Transitions of the checkout lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckoutAction {
    /// Dialog (re)opened with the caller's current invoice email.
    Reopen { email: String },
    EditEmail(String),
    EditRemarks(String),
    ChoosePayment(String),
    /// Confirm clicked: clear prior error, enter `Submitting`.
    ConfirmStarted,
    /// Request handed to the transport; result panel goes up while the frame
    /// signal is awaited.
    Dispatched,
    /// No submit URL configured: declare success without dispatching.
    PassThrough,
    /// The result frame's one-shot load signal fired.
    Completed,
    /// Validation or transport failure; back to editing with the message set.
    Failed(String),
    /// Leave the result panel without touching the draft.
    BackAndRetry,
}

impl CheckoutState {
    pub fn new(initial_email: String) -> Self {
        Self {
            draft: DraftOrder { email: initial_email, ..DraftOrder::default() },
            loading: false,
            error: None,
            show_result: false,
            frame_loaded: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.show_result && self.frame_loaded {
            Phase::Succeeded
        } else if self.show_result && self.loading {
            Phase::AwaitingResult
        } else if self.loading {
            Phase::Submitting
        } else {
            Phase::Editing
        }
    }

    /// True while a submission is dispatched but neither the load signal nor
    /// an error has arrived; retry stays unreachable until then.
    pub fn awaiting_result(&self) -> bool {
        self.show_result && !self.frame_loaded && self.error.is_none()
    }

    pub fn apply(&mut self, action: CheckoutAction) {
        match action {
            CheckoutAction::Reopen { email } => {
                self.draft.email = email;
                self.error = None;
            }
            CheckoutAction::EditEmail(email) => self.draft.email = email,
            CheckoutAction::EditRemarks(remarks) => self.draft.remarks = remarks,
            CheckoutAction::ChoosePayment(method) => {
                self.draft.payment_method = Some(method);
            }
            CheckoutAction::ConfirmStarted => {
                self.loading = true;
                self.error = None;
                self.frame_loaded = false;
            }
            CheckoutAction::Dispatched => {
                self.show_result = true;
            }
            CheckoutAction::PassThrough => {
                self.show_result = true;
                self.frame_loaded = true;
                self.loading = false;
            }
            CheckoutAction::Completed => {
                self.frame_loaded = true;
                self.loading = false;
            }
            CheckoutAction::Failed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
            CheckoutAction::BackAndRetry => {
                self.show_result = false;
                self.frame_loaded = false;
                self.error = None;
            }
        }
    }
}

impl Reducible for CheckoutState {
    type Action = CheckoutAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}
