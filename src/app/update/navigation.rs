// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(nav) => {
                if self.ui.active_nav != *nav {
                    tracing::debug!("Navigating to {:?}", nav);
                    self.ui.active_nav = *nav;
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
