use super::*;

impl App {
    pub(in crate::tui_shell) fn move_up(&mut self) {
        if let Some(i) = self.selected_index() {
            self.selected = i.saturating_sub(1);
        }
    }

    pub(in crate::tui_shell) fn move_down(&mut self) {
        if let Some(i) = self.selected_index() {
            self.selected = (i + 1).min(self.store.len() - 1);
        }
    }

    pub(in crate::tui_shell) fn move_first(&mut self) {
        self.selected = 0;
    }

    pub(in crate::tui_shell) fn move_last(&mut self) {
        self.selected = self.store.len().saturating_sub(1);
    }

    pub(in crate::tui_shell) fn copy_selected(&mut self) {
        let Some(index) = self.selected_index() else {
            self.push_output(vec!["nothing to copy (press `a` to add)".to_string()]);
            return;
        };
        let Some(text) = self.store.get(index).map(|s| s.to_string()) else {
            return;
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => {
                log::debug!("copied row {} ({} bytes)", index, text.len());
                self.push_output(vec![format!("copied row {}", index + 1)]);
            }
            Err(err) => self.push_error(format!("copy: {:#}", err)),
        }
    }

    pub(in crate::tui_shell) fn begin_add(&mut self) {
        self.modal = Some(Modal {
            title: "New snippet".to_string(),
            lines: vec!["Enter text for new item".to_string()],
            kind: ModalKind::TextInput {
                prompt: "> ".to_string(),
                action: TextInputAction::AddSnippet,
            },
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn begin_edit(&mut self) {
        let Some(index) = self.selected_index() else {
            self.push_output(vec!["nothing to edit".to_string()]);
            return;
        };
        let mut input = Input::default();
        input.set(self.store.get(index).unwrap_or_default().to_string());
        self.modal = Some(Modal {
            title: format!("Edit row {}", index + 1),
            lines: vec!["Change text for item".to_string()],
            kind: ModalKind::TextInput {
                prompt: "> ".to_string(),
                action: TextInputAction::EditSnippet { index },
            },
            input,
        });
    }

    pub(in crate::tui_shell) fn begin_delete(&mut self) {
        let Some(index) = self.selected_index() else {
            self.push_output(vec!["nothing to delete".to_string()]);
            return;
        };
        let preview = view::row_label(self.store.get(index).unwrap_or_default());
        self.modal = Some(Modal {
            title: format!("Delete row {}", index + 1),
            lines: vec![preview, String::new(), "Delete this item? (y/n)".to_string()],
            kind: ModalKind::ConfirmDelete { index },
            input: Input::default(),
        });
    }

    /// Applies a confirmed text prompt. The value is stored verbatim.
    pub(in crate::tui_shell) fn submit_text_input(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        match action {
            TextInputAction::AddSnippet => {
                let index = self.store.add(value);
                self.selected = index;
                self.push_output(vec![format!("added row {}", index + 1)]);
            }
            TextInputAction::EditSnippet { index } => match self.store.edit(index, value) {
                Ok(()) => {
                    self.selected = index;
                    self.push_output(vec![format!("updated row {}", index + 1)]);
                }
                Err(err) => self.push_error(format!("edit: {}", err)),
            },
        }
    }

    pub(in crate::tui_shell) fn confirm_delete(&mut self, index: usize) {
        match self.store.remove(index) {
            Ok(_) => {
                self.selected = index.min(self.store.len().saturating_sub(1));
                self.push_output(vec![format!("deleted row {}", index + 1)]);
            }
            Err(err) => self.push_error(format!("delete: {}", err)),
        }
    }
}
