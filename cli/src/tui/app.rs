// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc, time::Duration};

use chrono::Local;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use teamup_core::{EventFormSession, EventsApi, Navigator, SubmitOutcome};

use crate::notify::ToastNotifier;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_editor::EventEditor;
use crate::tui::event_store::{EventFormStore, Intent};

/// How often the screen refreshes without input, so toasts expire on time.
const TICK: Duration = Duration::from_millis(250);

/// Runs the event editor on a mounted session until the user leaves or a
/// write succeeds.
pub async fn run_event_form<A, N>(
    session: &mut EventFormSession<A, N, ToastNotifier, Local>,
) -> Result<(), Box<dyn Error>>
where
    A: EventsApi,
    N: Navigator,
{
    let store = EventFormStore::new(session.form().clone(), session.actions());
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        EventFormStore::register_to(store.clone(), &mut dispatcher);
        let mut view = EventFormView::new(dispatcher, &store, session.event_id().is_some());

        loop {
            store.borrow_mut().toast = session.notifier().visible();
            if let Err(e) = view.draw(&store, &mut terminal) {
                break Err(e);
            }

            match view.read_event(&store) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {}
            }

            let Some(intent) = store.borrow_mut().take_intent() else {
                continue;
            };
            let form = store.borrow().form.clone();
            session.replace_fields(form);
            let done = match intent {
                Intent::Perform(action) => match session.perform(action).await {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::debug!(error = %e, "action failed, staying on the form");
                        false
                    }
                },
                Intent::Submit => session.submit() == SubmitOutcome::Navigated,
            };
            if done {
                break Ok(());
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    result
}

struct EventFormView {
    dispatcher: Dispatcher,
    editor: EventEditor,
    area: Rect,
}

impl EventFormView {
    fn new(mut dispatcher: Dispatcher, store: &RefCell<EventFormStore>, editing: bool) -> Self {
        let mut editor = EventEditor::new(editing);
        editor.activate(&mut dispatcher, store);
        Self {
            dispatcher,
            editor,
            area: Rect::default(),
        }
    }

    fn draw(
        &mut self,
        store: &RefCell<EventFormStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        let mut area = self.area;
        terminal.draw(|frame| {
            area = frame.area();
            self.editor.render(store, area, frame.buffer_mut());
            if let Some((x, y)) = self.editor.get_cursor_position(store, area) {
                frame.set_cursor_position(Position::new(x, y));
            }
        })?;
        self.area = area;
        Ok(())
    }

    fn read_event(
        &mut self,
        store: &RefCell<EventFormStore>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        if !event::poll(TICK)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(e) if e.kind == KeyEventKind::Press => {
                Ok(self.editor.on_key(&mut self.dispatcher, store, self.area, e))
            }
            _ => Ok(None),
        }
    }
}
