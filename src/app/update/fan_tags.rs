//! Fan tag registry message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle fan tag page messages
    pub fn handle_fan_tags(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FanTagSearchChanged(query) => {
                self.ui.fan_tags.query = query.clone();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
