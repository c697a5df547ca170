//! Memory tag editor message handlers
//!
//! Edits live in a draft buffer; the roster only changes on Save. Selecting
//! another tag discards whatever was typed.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, NOTICE_DURATION};
use crate::i18n::Key;
use crate::ui::widgets::Notice;

impl App {
    /// Handle memory tag page messages
    pub fn handle_memory_tags(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::MemoryTagSelected(id) => {
                if let Some(tag) = self.roster.memory_tags.iter().find(|t| t.id == *id) {
                    self.ui.memory_tags.select(*id, &tag.label, &tag.note);
                }
                Some(Task::none())
            }

            Message::MemoryLabelChanged(label) => {
                self.ui.memory_tags.draft_label = label.clone();
                Some(Task::none())
            }

            Message::MemoryNoteChanged(note) => {
                self.ui.memory_tags.draft_note = note.clone();
                Some(Task::none())
            }

            Message::MemorySave => {
                let page = &self.ui.memory_tags;
                let Some(id) = page.selected else {
                    return Some(Task::none());
                };
                if let Some(tag) = self.roster.memory_tags.iter_mut().find(|t| t.id == id) {
                    tag.label = page.draft_label.clone();
                    tag.note = page.draft_note.clone();
                    tracing::debug!(id, "Memory tag saved");
                }
                self.ui.notice =
                    Some(Notice::success(self.core.locale.get(Key::MemorySavedNotice)));
                Some(Task::perform(
                    async { tokio::time::sleep(NOTICE_DURATION).await },
                    |_| Message::HideNotice,
                ))
            }

            Message::MemoryRevert => {
                let page = &mut self.ui.memory_tags;
                if let Some(id) = page.selected {
                    if let Some(tag) = self.roster.memory_tags.iter().find(|t| t.id == id) {
                        page.draft_label = tag.label.clone();
                        page.draft_note = tag.note.clone();
                    }
                }
                Some(Task::none())
            }

            Message::MemoryPinToggled(id) => {
                if let Some(tag) = self.roster.memory_tags.iter_mut().find(|t| t.id == *id) {
                    tag.pinned = !tag.pinned;
                }
                Some(Task::none())
            }

            Message::HideNotice => {
                self.ui.notice = None;
                Some(Task::none())
            }

            _ => None,
        }
    }
}
