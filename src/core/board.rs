//! In-memory document board behind the dashboard
//!
//! Documents are kept in insertion order and addressed by a stable [`DocumentId`].
//! The board also owns the "new document" draft and the single edit session.

use std::collections::HashMap;

use super::document::{Document, DocumentDraft, DocumentId, DraftField};
use super::validation::{ValidationError, ValidationResult, validate_document};

/// Board operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Document {0} not found")]
    NotFound(DocumentId),

    #[error("No document at position {index} (board has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No document is being edited")]
    NotEditing,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// The active edit: which document is being edited and its unsaved contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: DocumentId,
    pub draft: DocumentDraft,
}

#[derive(Debug, Clone)]
struct Entry {
    id: DocumentId,
    document: Document,
}

/// Ordered document list with a new-document draft and one edit cursor
#[derive(Debug, Clone, Default)]
pub struct DocumentBoard {
    entries: Vec<Entry>,
    /// id -> position in `entries`
    slots: HashMap<DocumentId, usize>,
    new_draft: DocumentDraft,
    editing: Option<EditSession>,
}

impl DocumentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from existing documents, in order
    pub fn with_documents(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut board = Self::new();
        for document in documents {
            board.push(document);
        }
        board
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.position(id).map(|index| &self.entries[index].document)
    }

    pub fn position(&self, id: DocumentId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    pub fn id_at(&self, index: usize) -> Option<DocumentId> {
        self.entries.get(index).map(|entry| entry.id)
    }

    /// Documents in display order
    pub fn documents(&self) -> impl Iterator<Item = (DocumentId, &Document)> + '_ {
        self.entries.iter().map(|entry| (entry.id, &entry.document))
    }

    pub fn ids(&self) -> Vec<DocumentId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn new_draft(&self) -> &DocumentDraft {
        &self.new_draft
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_id(&self) -> Option<DocumentId> {
        self.editing.as_ref().map(|session| session.id)
    }

    pub fn is_editing(&self, id: DocumentId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn edit_draft(&self) -> Option<&DocumentDraft> {
        self.editing.as_ref().map(|session| &session.draft)
    }

    // ------------------------------------------------------------------
    // Drafts
    // ------------------------------------------------------------------

    pub fn set_new_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.new_draft.set_field(field, value);
    }

    /// Update a field of the edit draft. Returns `NotEditing` when no edit is active.
    pub fn set_edit_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), BoardError> {
        let session = self.editing.as_mut().ok_or(BoardError::NotEditing)?;
        session.draft.set_field(field, value);
        Ok(())
    }

    /// Validate the new draft without adding it
    pub fn check_new_draft(&self) -> ValidationResult {
        validate_document(&self.new_draft)
    }

    /// Validate the edit draft without saving it
    pub fn check_edit_draft(&self) -> Option<ValidationResult> {
        self.edit_draft().map(validate_document)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Append the new draft as a document and reset the draft.
    ///
    /// On a validation error neither the documents nor the draft change.
    pub fn add(&mut self) -> Result<DocumentId, BoardError> {
        let draft = self.new_draft.clone();
        let id = self.add_document(&draft)?;
        self.new_draft.clear();
        Ok(id)
    }

    /// Append a document built from `draft`, leaving the board's own draft alone
    pub fn add_document(&mut self, draft: &DocumentDraft) -> Result<DocumentId, BoardError> {
        if let Err(e) = validate_document(draft).to_result() {
            tracing::warn!("Rejected new document: {}", e);
            return Err(e.into());
        }

        let id = self.push(draft.to_document());
        tracing::debug!("Added document {} at position {}", id, self.len() - 1);
        Ok(id)
    }

    /// Make `id` the edit target, copying its contents into the edit draft.
    ///
    /// Any edit already in progress is dropped.
    pub fn start_edit(&mut self, id: DocumentId) -> Result<(), BoardError> {
        let document = self.get(id).ok_or(BoardError::NotFound(id))?;
        let draft = document.to_draft();

        if let Some(previous) = self.editing.as_ref().filter(|s| s.id != id) {
            tracing::debug!("Discarding edit of document {}", previous.id);
        }

        self.editing = Some(EditSession { id, draft });
        tracing::debug!("Editing document {}", id);
        Ok(())
    }

    pub fn start_edit_at(&mut self, index: usize) -> Result<DocumentId, BoardError> {
        let id = self.checked_id_at(index)?;
        self.start_edit(id)?;
        Ok(id)
    }

    /// Save the edit draft over its document and close the edit session.
    ///
    /// On a validation error the document is unchanged and the edit stays open.
    pub fn update(&mut self) -> Result<DocumentId, BoardError> {
        let session = self.editing.as_ref().ok_or(BoardError::NotEditing)?;
        let id = session.id;

        if let Err(e) = validate_document(&session.draft).to_result() {
            tracing::warn!("Rejected update of document {}: {}", id, e);
            return Err(e.into());
        }

        let Some(index) = self.position(id) else {
            // Only reachable if the document vanished without going through `remove`.
            self.editing = None;
            return Err(BoardError::NotFound(id));
        };

        let document = session.draft.to_document();
        self.entries[index].document = document;
        self.editing = None;
        tracing::debug!("Updated document {} at position {}", id, index);
        Ok(id)
    }

    /// Close the edit session without saving. Returns whether one was open.
    pub fn cancel_edit(&mut self) -> bool {
        match self.editing.take() {
            Some(session) => {
                tracing::debug!("Cancelled edit of document {}", session.id);
                true
            }
            None => false,
        }
    }

    /// Delete a document. Later documents move up one position.
    pub fn remove(&mut self, id: DocumentId) -> Result<Document, BoardError> {
        let index = self.position(id).ok_or(BoardError::NotFound(id))?;
        let entry = self.entries.remove(index);
        self.slots.remove(&id);
        for (offset, shifted) in self.entries[index..].iter().enumerate() {
            self.slots.insert(shifted.id, index + offset);
        }

        if self.is_editing(id) {
            self.editing = None;
        }

        tracing::debug!("Removed document {} from position {}", id, index);
        Ok(entry.document)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Document, BoardError> {
        let id = self.checked_id_at(index)?;
        self.remove(id)
    }

    fn checked_id_at(&self, index: usize) -> Result<DocumentId, BoardError> {
        self.id_at(index).ok_or(BoardError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    fn push(&mut self, document: Document) -> DocumentId {
        let id = DocumentId::new();
        self.slots.insert(id, self.entries.len());
        self.entries.push(Entry { id, document });
        id
    }
}
