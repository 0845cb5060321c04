//! Document records shown on the dashboard and the drafts used to edit them.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned to a document when it is added to a board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, From)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

/// A saved document record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl Document {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.image_url = if url.trim().is_empty() {
            None
        } else {
            Some(url)
        };
        self
    }

    /// Draft pre-filled with this document's contents
    pub fn to_draft(&self) -> DocumentDraft {
        DocumentDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Form field of a document draft
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Description,
    ImageUrl,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::ImageUrl,
    ];

    /// Form input name of the field
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::ImageUrl => "imageUrl",
        }
    }

    /// Resolve a form input name, accepting `image_url` as well as `imageUrl`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(DraftField::Title),
            "description" => Some(DraftField::Description),
            "imageUrl" | "image_url" => Some(DraftField::ImageUrl),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DraftField::Title => "Document Title",
            DraftField::Description => "Document Description",
            DraftField::ImageUrl => "Image URL (optional)",
        }
    }
}

/// Unsaved form state for a document being created or edited
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl DocumentDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::ImageUrl => &self.image_url,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::ImageUrl => self.image_url = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.image_url.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Convert into a document. Does not validate.
    pub fn to_document(&self) -> Document {
        Document::new(self.title.clone(), self.description.clone())
            .with_image_url(self.image_url.clone())
    }
}

impl From<&Document> for DocumentDraft {
    fn from(document: &Document) -> Self {
        document.to_draft()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_ids_are_unique() {
        let a = DocumentId::new();
        let b = DocumentId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), a.as_uuid().to_string());
    }

    #[test]
    fn test_blank_image_url_is_none() {
        let doc = Document::new("Title", "Body").with_image_url("   ");
        assert_eq!(doc.image_url, None);

        let doc = Document::new("Title", "Body").with_image_url("https://example.com/a.png");
        assert_eq!(doc.image_url.as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_draft_keeps_text_as_typed() {
        let draft = DocumentDraft::new("  Spaced  ", "desc ", "");
        let doc = draft.to_document();
        assert_eq!(doc.title, "  Spaced  ");
        assert_eq!(doc.description, "desc ");
        assert!(doc.image_url.is_none());
    }

    #[test]
    fn test_document_to_draft() {
        let doc = Document::new("A", "B").with_image_url("https://img");
        let draft = doc.to_draft();
        assert_eq!(draft, DocumentDraft::new("A", "B", "https://img"));
        assert_eq!(DocumentDraft::from(&Document::new("A", "B")).image_url, "");
    }

    #[test]
    fn test_draft_field_by_name() {
        let mut draft = DocumentDraft::default();
        for field in DraftField::ALL {
            let resolved = DraftField::from_name(field.name()).unwrap();
            draft.set_field(resolved, field.name());
        }
        assert_eq!(draft.field(DraftField::Title), "title");
        assert_eq!(draft.field(DraftField::Description), "description");
        assert_eq!(draft.field(DraftField::ImageUrl), "imageUrl");
        assert_eq!(DraftField::from_name("image_url"), Some(DraftField::ImageUrl));
        assert_eq!(DraftField::from_name("author"), None);

        draft.clear();
        assert!(draft.is_empty());
    }
}
