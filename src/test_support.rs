//! In-memory backend shared by the controller and router tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::api::{NoteQuery, NotesApi};
use crate::error::{Action, ClientError};
use crate::models::{MessageResponse, Note, NoteDraft, Stats};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ListNotes(NoteQuery),
    ListCategories,
    Create(NoteDraft),
    Update(i64, NoteDraft),
    Delete(i64),
    Stats,
}

type Scripted = (Duration, Result<Vec<Note>, u16>);

/// In-memory backend. `notes` is the server-side list; `scripted` list
/// responses, when queued, take precedence over it.
pub(crate) struct FakeApi {
    pub(crate) calls: Mutex<Vec<Call>>,
    pub(crate) notes: Mutex<Vec<Note>>,
    pub(crate) scripted: Mutex<VecDeque<Scripted>>,
    pub(crate) categories: Result<Vec<String>, u16>,
    pub(crate) stats: Result<Stats, u16>,
    pub(crate) write_status: Option<u16>,
}

impl FakeApi {
    pub(crate) fn new(notes: Vec<Note>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            notes: Mutex::new(notes),
            scripted: Mutex::new(VecDeque::new()),
            categories: Ok(vec!["Work".to_string(), "Home".to_string()]),
            stats: Ok(Stats {
                total_notes: 2,
                pinned_notes: 1,
            }),
            write_status: None,
        }
    }

    pub(crate) fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub(crate) fn script(&self, delay_ms: u64, result: Result<Vec<Note>, u16>) {
        self.scripted
            .lock()
            .unwrap()
            .push_back((Duration::from_millis(delay_ms), result));
    }

    pub(crate) fn write_result(
        &self,
        action: Action,
        message: &str,
    ) -> Result<MessageResponse, ClientError> {
        match self.write_status {
            Some(status) => Err(ClientError::Status { action, status }),
            None => Ok(MessageResponse {
                message: message.to_string(),
            }),
        }
    }
}

impl NotesApi for FakeApi {
    async fn list_notes(&self, query: &NoteQuery) -> Result<Vec<Note>, ClientError> {
        self.record(Call::ListNotes(query.clone()));
        let action = if query.is_empty() {
            Action::LoadNotes
        } else {
            Action::Search
        };

        let scripted = self.scripted.lock().unwrap().pop_front();
        match scripted {
            Some((delay, result)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result.map_err(|status| ClientError::Status { action, status })
            }
            None => Ok(self.notes.lock().unwrap().clone()),
        }
    }

    async fn list_categories(&self) -> Result<Vec<String>, ClientError> {
        self.record(Call::ListCategories);
        self.categories.clone().map_err(|status| ClientError::Status {
            action: Action::LoadCategories,
            status,
        })
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<MessageResponse, ClientError> {
        self.record(Call::Create(draft.clone()));
        let result = self.write_result(Action::CreateNote, "Created");
        if result.is_ok() {
            let mut notes = self.notes.lock().unwrap();
            let id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
            notes.push(note_from_draft(id, draft));
        }
        result
    }

    async fn update_note(&self, id: i64, draft: &NoteDraft) -> Result<MessageResponse, ClientError> {
        self.record(Call::Update(id, draft.clone()));
        let result = self.write_result(Action::UpdateNote, "Updated");
        if result.is_ok() {
            let mut notes = self.notes.lock().unwrap();
            if let Some(existing) = notes.iter_mut().find(|n| n.id == id) {
                *existing = note_from_draft(id, draft);
            }
        }
        result
    }

    async fn delete_note(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.record(Call::Delete(id));
        let result = self.write_result(Action::DeleteNote, "Deleted");
        if result.is_ok() {
            self.notes.lock().unwrap().retain(|n| n.id != id);
        }
        result
    }

    async fn stats(&self) -> Result<Stats, ClientError> {
        self.record(Call::Stats);
        self.stats.map_err(|status| ClientError::Status {
            action: Action::LoadStats,
            status,
        })
    }
}

pub(crate) fn note_from_draft(id: i64, draft: &NoteDraft) -> Note {
    Note {
        id,
        title: draft.title.clone(),
        content: draft.content.clone(),
        category: draft.category.clone(),
        color: draft.color.clone(),
        tags: draft.tags.clone(),
        is_pinned: draft.is_pinned,
        created_at: "2024-06-01 12:00:00".to_string(),
    }
}

pub(crate) fn mock_note(id: i64, title: &str, category: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: format!("{} body", title),
        category: category.to_string(),
        color: "#3498db".to_string(),
        tags: vec![],
        is_pinned: false,
        created_at: "2024-06-01 12:00:00".to_string(),
    }
}

pub(crate) fn two_notes() -> Vec<Note> {
    vec![mock_note(1, "Alpha", "Work"), mock_note(2, "Beta", "Home")]
}
