// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use teamup_core::{FormAction, FormState};

use crate::notify::Toast;
use crate::tui::dispatcher::{Action, Dispatcher};

/// What the user asked the editor to do, picked up by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Perform(FormAction),
    Submit,
}

#[derive(Debug)]
pub struct EventFormStore {
    pub form: FormState,

    /// Actions the form currently offers.
    pub actions: &'static [FormAction],

    /// Pending request from the user, cleared by the event loop.
    pub intent: Option<Intent>,

    /// The toast on screen, if any.
    pub toast: Option<Toast>,
}

impl EventFormStore {
    pub fn new(form: FormState, actions: &'static [FormAction]) -> Self {
        Self {
            form,
            actions,
            intent: None,
            toast: None,
        }
    }

    /// The action bound to the save key: create for a new event, update otherwise.
    pub fn primary_action(&self) -> Option<FormAction> {
        self.actions
            .iter()
            .copied()
            .find(|a| matches!(a, FormAction::Create | FormAction::Update))
    }

    pub fn offers(&self, action: FormAction) -> bool {
        self.actions.contains(&action)
    }

    pub fn take_intent(&mut self) -> Option<Intent> {
        self.intent.take()
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateField(field, v) => {
                let mut that = that.borrow_mut();
                that.form.set(*field, v.clone());
            }
            Action::Perform(a) => {
                let mut that = that.borrow_mut();
                if that.offers(*a) {
                    that.intent = Some(Intent::Perform(*a));
                } else {
                    tracing::debug!(action = ?a, "action not offered, ignored");
                }
            }
            Action::Submit => {
                let mut that = that.borrow_mut();
                that.intent = Some(Intent::Submit);
            }
        }));
        dispatcher.register(callback);
    }
}
