//! Message update handlers - thin dispatcher delegating to submodules

mod celebration;
mod fan_tags;
mod health;
mod memory_tags;
mod navigation;
mod settings;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_celebration(&message) {
            return task;
        }
        if let Some(task) = self.handle_health(&message) {
            return task;
        }
        if let Some(task) = self.handle_fan_tags(&message) {
            return task;
        }
        if let Some(task) = self.handle_memory_tags(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
