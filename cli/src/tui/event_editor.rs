// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use teamup_core::{Field, FormAction};

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, FormItem, Input};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_store::EventFormStore;

type EventForm = Form<EventFormStore, Box<dyn FormItem<EventFormStore>>>;

pub struct EventEditor(SinglePage<EventFormStore, EventForm>);

impl EventEditor {
    pub fn new(editing: bool) -> Self {
        let title = match editing {
            true => "Event Scheduling - Edit",
            false => "Event Scheduling - Create",
        };
        Self(SinglePage::new(
            title.to_owned(),
            instructions(editing),
            new_event_form(),
        ))
    }
}

impl Component<EventFormStore> for EventEditor {
    fn render(&self, store: &RefCell<EventFormStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);

        let store = store.borrow();
        if let Some(toast) = &store.toast
            && area.height > 2
        {
            let toast_area = Rect::new(
                area.x + 1,
                area.y + area.height - 2,
                area.width.saturating_sub(2),
                1,
            );
            Clear.render(toast_area, buf);
            Paragraph::new(format!(" {} ", toast.message))
                .black()
                .on_yellow()
                .render(toast_area, buf);
        }
    }

    fn get_cursor_position(
        &self,
        store: &RefCell<EventFormStore>,
        area: Rect,
    ) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<EventFormStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match event.code {
                KeyCode::Char('s') => store.borrow().primary_action(),
                KeyCode::Char('d') => Some(FormAction::Delete),
                _ => None,
            };
            if let Some(action) = action {
                dispatcher.dispatch(Action::Perform(action));
                return Some(Message::Handled);
            }
        }

        self.0.on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventFormStore>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventFormStore>) {
        self.0.deactivate(dispatcher, store);
    }
}

fn instructions(editing: bool) -> Line<'static> {
    let mut spans = vec![
        " Move ".into(),
        "<Up/Down>".blue().bold(),
        " Save ".into(),
        "<Ctrl-S>".blue().bold(),
    ];
    if editing {
        spans.push(" Delete ".into());
        spans.push("<Ctrl-D>".blue().bold());
    }
    spans.extend([
        " Submit ".into(),
        "<Enter>".blue().bold(),
        " Quit ".into(),
        "<Esc> ".blue().bold(),
    ]);
    Line::from(spans)
}

fn new_event_form() -> EventForm {
    Form::new(vec![
        Box::new(new_event_name()),
        Box::new(new_description()),
        Box::new(new_from()),
        Box::new(new_to()),
        Box::new(new_location()),
    ])
}

macro_rules! new_input {
    ($fn: ident, $acc: ident, $field: ident) => {
        fn $fn() -> Input<EventFormStore, $acc> {
            Input::new(Field::$field.label())
        }

        struct $acc;

        impl Access<EventFormStore, String> for $acc {
            fn get(store: &RefCell<EventFormStore>) -> String {
                store.borrow().form.get(Field::$field).to_owned()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::UpdateField(Field::$field, value));
                true
            }
        }
    };
}

new_input!(new_event_name, EventNameAccess, EventName);
new_input!(new_description, DescriptionAccess, Description);
new_input!(new_from, FromAccess, From);
new_input!(new_to, ToAccess, To);
new_input!(new_location, LocationAccess, Location);
