use std::path::PathBuf;

use anyhow::{Context, Result};

use distmodel::application::check_document;
use distmodel::presentation::output::{check_event, emit};
use distmodel::presentation::TextRenderer;

pub fn cmd_check(input: PathBuf, json: bool, renderer: &TextRenderer) -> Result<()> {
    let result =
        check_document(&input).with_context(|| format!("failed to check {}", input.display()))?;

    if json {
        emit(check_event(&result))?;
    } else {
        print!("{}", renderer.render_check(&result));
    }
    Ok(())
}
