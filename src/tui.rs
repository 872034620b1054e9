use std::path::PathBuf;

use anyhow::Result;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub data_file: PathBuf,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
