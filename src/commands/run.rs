use std::path::PathBuf;

use anyhow::{Context, Result};

use distmodel::application::Pipeline;
use distmodel::config;
use distmodel::infrastructure::LocalFs;
use distmodel::presentation::output::{emit, report_event, warning_event};
use distmodel::presentation::{create_sink, OutputFormat, TextRenderer};

pub fn cmd_run(
    config_path: Option<PathBuf>,
    document: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    json: bool,
    renderer: &TextRenderer,
) -> Result<()> {
    let (mut config, warnings) =
        config::load_or_default(config_path.as_deref()).context("failed to load configuration")?;

    if let Some(document) = document {
        config.input.document = document;
    }
    if let Some(dir) = output_dir {
        config.output.dir = dir;
    }

    for warning in &warnings {
        if json {
            emit(warning_event(warning))?;
        } else {
            eprint!("{}", renderer.render_warning(warning));
        }
    }

    let sink = create_sink(OutputFormat::from_json_flag(json));
    let fs = LocalFs::new();
    let report = Pipeline::new(&fs, &sink).run(&config).with_context(|| {
        format!(
            "failed to build artifacts from {}",
            config.input.document.display()
        )
    })?;

    if json {
        emit(report_event(&report))?;
    } else {
        print!("{}", renderer.render_report(&report));
    }
    Ok(())
}
