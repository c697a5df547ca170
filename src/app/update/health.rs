//! System health page message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle system health page messages
    pub fn handle_health(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ServiceDetailsToggled(index) => {
                let expanded = &mut self.ui.health.expanded;
                if !expanded.remove(index) {
                    expanded.insert(*index);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
