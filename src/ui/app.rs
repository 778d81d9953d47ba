//! Application state for the terminal UI.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::client::ApiClient;
use crate::submit;
use crate::ui::events::{AppEvent, FormEvent};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::page::UiPage;

pub struct App {
    form: FormState,
    client: Arc<ApiClient>,
    runtime: Handle,
    events_tx: Sender<AppEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(client: ApiClient, runtime: Handle, events_tx: Sender<AppEvent>) -> Self {
        Self {
            form: FormState::default(),
            client: Arc::new(client),
            runtime,
            events_tx,
            should_quit: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn dispatch(&mut self, intent: FormIntent) {
        self.form = FormReducer::reduce(std::mem::take(&mut self.form), intent);
    }

    /// Start a submission unless one is already outstanding.
    ///
    /// The gate closes here, synchronously: waiting for the handler's own
    /// busy event to round-trip through the channel would leave a window
    /// where a second Enter still passes `can_submit`. An empty field is
    /// left to the handler, which renders the validation message without
    /// touching busy.
    pub fn submit(&mut self) {
        if !self.form.can_submit() {
            return;
        }
        let input = self.form.input.clone();
        if !input.trim().is_empty() {
            self.dispatch(FormIntent::BusyChanged(true));
        }
        let mut page = UiPage::new(input, self.events_tx.clone());
        let client = self.client.clone();
        self.runtime.spawn(async move {
            submit::submit(&mut page, &client).await;
        });
    }

    pub fn on_form_event(&mut self, event: FormEvent) {
        match event {
            FormEvent::Busy(busy) => self.dispatch(FormIntent::BusyChanged(busy)),
            FormEvent::Render(outcome) => self.dispatch(FormIntent::Rendered(outcome)),
        }
    }

    pub fn on_tick(&mut self) {
        self.dispatch(FormIntent::Tick);
    }
}
