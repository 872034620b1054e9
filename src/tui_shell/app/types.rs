use super::Input;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum EntryKind {
    Output,
    Error,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct ResultEntry {
    pub(in crate::tui_shell) ts: String,
    pub(in crate::tui_shell) kind: EntryKind,
    pub(in crate::tui_shell) lines: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TextInputAction {
    AddSnippet,
    EditSnippet { index: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum ModalKind {
    TextInput {
        prompt: String,
        action: TextInputAction,
    },
    ConfirmDelete {
        index: usize,
    },
}

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) input: Input,
}
