#[cfg(test)]
mod tests {
    use crate::core::validation::ValidationError;
    use crate::core::{BoardError, Document, DocumentBoard, DocumentDraft, DraftField};

    fn board_abc() -> DocumentBoard {
        DocumentBoard::with_documents([
            Document::new("A", "first"),
            Document::new("B", "second").with_image_url("https://example.com/b.png"),
            Document::new("C", "third"),
        ])
    }

    fn titles(board: &DocumentBoard) -> Vec<String> {
        board.documents().map(|(_, d)| d.title.clone()).collect()
    }

    fn fill_new_draft(board: &mut DocumentBoard, title: &str, description: &str, url: &str) {
        board.set_new_field(DraftField::Title, title);
        board.set_new_field(DraftField::Description, description);
        board.set_new_field(DraftField::ImageUrl, url);
    }

    #[test]
    fn test_add_appends_and_clears_draft() {
        let mut board = board_abc();
        fill_new_draft(&mut board, "D", "fourth", "https://img/d.png");

        let id = board.add().unwrap();

        assert_eq!(titles(&board), vec!["A", "B", "C", "D"]);
        assert_eq!(board.id_at(3), Some(id));
        assert_eq!(
            board.get(id).unwrap().image_url.as_deref(),
            Some("https://img/d.png")
        );
        assert!(board.new_draft().is_empty());
    }

    #[test]
    fn test_add_to_empty_board() {
        let mut board = DocumentBoard::new();
        assert!(board.is_empty());

        fill_new_draft(&mut board, "Only", "one", "");
        let id = board.add().unwrap();

        assert_eq!(board.len(), 1);
        assert_eq!(board.position(id), Some(0));
        assert_eq!(board.get(id).unwrap().image_url, None);
    }

    #[test]
    fn test_add_blank_title_is_rejected() {
        let mut board = board_abc();
        fill_new_draft(&mut board, "  ", "x", "");

        let result = board.add();

        assert_eq!(result, Err(BoardError::Invalid(ValidationError::EmptyTitle)));
        assert_eq!(titles(&board), vec!["A", "B", "C"]);
        // The draft is kept so the user can fix it
        assert_eq!(board.new_draft().description, "x");
    }

    #[test]
    fn test_add_blank_description_is_rejected() {
        let mut board = DocumentBoard::new();
        fill_new_draft(&mut board, "Title", "\n\t ", "");

        assert_eq!(
            board.add(),
            Err(BoardError::Invalid(ValidationError::EmptyDescription))
        );
        assert!(board.is_empty());
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut board = DocumentBoard::new();
        let draft = DocumentDraft::new("Same", "Same", "");
        let first = board.add_document(&draft).unwrap();
        let second = board.add_document(&draft).unwrap();

        assert_ne!(first, second);
        assert_eq!(board.get(first), board.get(second));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_add_document_leaves_board_draft_alone() {
        let mut board = DocumentBoard::new();
        board.set_new_field(DraftField::Title, "typing...");

        board
            .add_document(&DocumentDraft::new("Other", "doc", ""))
            .unwrap();

        assert_eq!(board.new_draft().title, "typing...");
    }

    #[test]
    fn test_start_edit_copies_record() {
        let mut board = board_abc();

        let id = board.start_edit_at(1).unwrap();

        assert_eq!(board.editing_id(), Some(id));
        assert!(board.is_editing(id));
        assert_eq!(
            board.edit_draft(),
            Some(&DocumentDraft::new(
                "B",
                "second",
                "https://example.com/b.png"
            ))
        );
    }

    #[test]
    fn test_start_edit_replaces_previous_edit() {
        let mut board = board_abc();
        let a = board.id_at(0).unwrap();
        let c = board.id_at(2).unwrap();

        board.start_edit(a).unwrap();
        board.set_edit_field(DraftField::Title, "A changed").unwrap();
        board.start_edit(c).unwrap();

        assert_eq!(board.editing_id(), Some(c));
        assert_eq!(board.edit_draft().unwrap().title, "C");
        assert_eq!(board.get(a).unwrap().title, "A");
    }

    #[test]
    fn test_start_edit_unknown() {
        let mut board = board_abc();
        assert_eq!(
            board.start_edit_at(3),
            Err(BoardError::IndexOutOfRange { index: 3, len: 3 })
        );

        let id = board.id_at(0).unwrap();
        board.remove(id).unwrap();
        assert_eq!(board.start_edit(id), Err(BoardError::NotFound(id)));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut board = board_abc();
        let b = board.start_edit_at(1).unwrap();
        board.set_edit_field(DraftField::Title, "B2").unwrap();
        board.set_edit_field(DraftField::ImageUrl, "").unwrap();

        assert_eq!(board.update(), Ok(b));

        assert_eq!(titles(&board), vec!["A", "B2", "C"]);
        assert_eq!(board.position(b), Some(1));
        assert_eq!(board.get(b).unwrap().image_url, None);
        assert_eq!(board.editing_id(), None);
        assert_eq!(board.edit_draft(), None);
    }

    #[test]
    fn test_update_blank_keeps_cursor() {
        let mut board = board_abc();
        let a = board.start_edit_at(0).unwrap();
        board.set_edit_field(DraftField::Description, "   ").unwrap();

        assert_eq!(
            board.update(),
            Err(BoardError::Invalid(ValidationError::EmptyDescription))
        );
        assert_eq!(titles(&board), vec!["A", "B", "C"]);
        assert_eq!(board.get(a).unwrap().description, "first");
        assert_eq!(board.editing_id(), Some(a));
        assert_eq!(board.edit_draft().unwrap().description, "   ");
    }

    #[test]
    fn test_update_without_edit() {
        let mut board = board_abc();
        assert_eq!(board.update(), Err(BoardError::NotEditing));
        assert_eq!(
            board.set_edit_field(DraftField::Title, "x"),
            Err(BoardError::NotEditing)
        );
        assert!(board.check_edit_draft().is_none());
    }

    #[test]
    fn test_cancel_edit() {
        let mut board = board_abc();
        board.start_edit_at(2).unwrap();
        board.set_edit_field(DraftField::Title, "discarded").unwrap();

        assert!(board.cancel_edit());
        assert!(!board.cancel_edit());
        assert_eq!(titles(&board), vec!["A", "B", "C"]);
        assert_eq!(board.editing_id(), None);
    }

    #[test]
    fn test_remove_middle_shifts_left() {
        let mut board = board_abc();
        let c = board.id_at(2).unwrap();

        let removed = board.remove_at(1).unwrap();

        assert_eq!(removed.title, "B");
        assert_eq!(titles(&board), vec!["A", "C"]);
        assert_eq!(board.len(), 2);
        assert_eq!(board.position(c), Some(1));
        assert_eq!(board.id_at(1), Some(c));
    }

    #[test]
    fn test_remove_unknown() {
        let mut board = board_abc();
        assert_eq!(
            board.remove_at(5),
            Err(BoardError::IndexOutOfRange { index: 5, len: 3 })
        );

        let id = board.id_at(0).unwrap();
        board.remove(id).unwrap();
        assert_eq!(board.remove(id), Err(BoardError::NotFound(id)));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_edit_follows_document_across_removal() {
        let mut board = board_abc();
        let c = board.start_edit_at(2).unwrap();
        board.set_edit_field(DraftField::Title, "C2").unwrap();

        // Removing an earlier document must not retarget the edit
        board.remove_at(0).unwrap();
        assert_eq!(board.editing_id(), Some(c));

        board.update().unwrap();
        assert_eq!(titles(&board), vec!["B", "C2"]);
    }

    #[test]
    fn test_removing_edited_document_clears_cursor() {
        let mut board = board_abc();
        let b = board.start_edit_at(1).unwrap();

        board.remove(b).unwrap();

        assert_eq!(board.editing_id(), None);
        assert_eq!(board.update(), Err(BoardError::NotEditing));
    }

    #[test]
    fn test_ids_stay_consistent_after_many_removals() {
        let mut board = DocumentBoard::with_documents(
            (0..6).map(|i| Document::new(format!("T{i}"), format!("D{i}"))),
        );
        board.remove_at(0).unwrap();
        board.remove_at(2).unwrap();
        board.remove_at(3).unwrap();

        assert_eq!(titles(&board), vec!["T1", "T2", "T4"]);
        for (index, id) in board.ids().into_iter().enumerate() {
            assert_eq!(board.position(id), Some(index));
        }
    }

    #[test]
    fn test_check_new_draft_reports_warnings() {
        let mut board = DocumentBoard::new();
        fill_new_draft(&mut board, "T", "D", "not-a-url");

        let result = board.check_new_draft();
        assert!(result.is_valid());
        assert!(result.has_warnings());

        // Warnings never block
        assert!(board.add().is_ok());
    }

    #[test]
    fn test_board_error_messages() {
        let err = BoardError::from(ValidationError::EmptyTitle);
        assert_eq!(err.to_string(), "Title is required");
        assert_eq!(
            BoardError::NotEditing.to_string(),
            "No document is being edited"
        );
    }
}
