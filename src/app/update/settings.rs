//! Settings message handlers
//!
//! Every change saves immediately; a failed save is logged and the in-memory
//! value stays applied.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, NOTICE_DURATION};
use crate::i18n::{Key, Language, Locale};
use crate::ui::widgets::Notice;

impl App {
    /// Handle settings messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                Some(self.save_settings())
            }

            Message::UpdateAppLanguage(code) => {
                self.core.settings.display.language = code.clone();
                self.core.locale = Locale::new(Language::from_code(code));
                Some(self.save_settings())
            }

            Message::UpdateReduceMotion(enabled) => {
                self.core.settings.display.reduce_motion = *enabled;
                Some(self.save_settings())
            }

            _ => None,
        }
    }

    /// Persist settings. A failed save keeps the in-memory value applied
    /// and raises an error notice on top of the log line.
    fn save_settings(&mut self) -> Task<Message> {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
            self.ui.notice = Some(Notice::error(self.core.locale.get(Key::SettingsSaveFailed)));
            return Task::perform(
                async { tokio::time::sleep(NOTICE_DURATION).await },
                |_| Message::HideNotice,
            );
        }
        Task::none()
    }
}
