use std::io::{self, IsTerminal};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::store::{FileBackend, SnippetStore};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

use super::input::Input;
use super::modal;
use super::view;

mod actions;
mod event_loop;
mod render;
mod time_utils;
mod types;

pub(super) use self::time_utils::{fmt_ts_ui, now_ts};
pub(super) use self::types::{EntryKind, Modal, ModalKind, ResultEntry, TextInputAction};

pub(super) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut app = App::load(opts);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App {
    store: SnippetStore,
    clipboard: Box<dyn ClipboardSink>,

    // Row cursor; clamped to the list on every read.
    selected: usize,

    modal: Option<Modal>,
    last_result: Option<ResultEntry>,
    quit: bool,
}

impl App {
    pub(super) fn new(store: SnippetStore, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            store,
            clipboard,
            selected: 0,
            modal: None,
            last_result: None,
            quit: false,
        }
    }

    fn load(opts: crate::tui::TuiRunOptions) -> Self {
        let store = SnippetStore::open(FileBackend::new(opts.data_file));
        log::info!(
            "loaded {} snippet(s) from {}",
            store.len(),
            store.location()
        );
        let mut app = App::new(store, Box::new(SystemClipboard::new()));
        app.push_output(vec![
            "Enter: copy  a: add  e: edit  d: delete  q: quit".to_string(),
        ]);
        app
    }

    pub(super) fn selected_index(&self) -> Option<usize> {
        if self.store.is_empty() {
            return None;
        }
        Some(self.selected.min(self.store.len() - 1))
    }

    pub(super) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(super) fn close_modal(&mut self) {
        self.modal = None;
    }

    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        self.last_result = Some(ResultEntry {
            ts: now_ts(),
            kind,
            lines,
        });
    }

    pub(super) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(super) fn push_error(&mut self, msg: String) {
        log::warn!("{}", msg);
        self.push_entry(EntryKind::Error, vec![msg]);
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
