//! Command dispatch: outline in, directories out

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::Tree;
use crate::infrastructure::{InfraError, ServiceContainer};
use crate::tree_traits::TreeNodeConvert;
use crate::util::path::{split_output_dir, PathExt};

/// Load settings, wire real services and run.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let cwd = env::current_dir().map_err(|e| InfraError::io("determine working directory", e))?;
    let settings = apply_cli_overrides(Settings::load(Some(&cwd))?, cli);

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let container = ServiceContainer::new(settings);
    execute_with(&container, cli)
}

/// Command-line flags take precedence over every config layer.
pub fn apply_cli_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(blank_lines) = cli.blank_lines {
        settings.blank_lines = blank_lines.into();
    }
    if cli.quiet {
        settings.summary = false;
    }
    settings
}

/// Parse the outline, build the tree and materialize it under OUTPUT's parent.
#[instrument(skip(container))]
pub fn execute_with(container: &ServiceContainer, cli: &Cli) -> CliResult<()> {
    let (input, output_dir) = match (&cli.input, &cli.output) {
        (Some(input), Some(output_dir)) => (input, output_dir),
        _ => return Err(CliError::Usage("INPUT and OUTPUT are required".to_string())),
    };

    let (root, base) = resolve_output(container, output_dir)?;
    let text = read_input(container, input)?;
    debug!("root={:?} base={}", root, base.display());

    let tree = Tree::from_text(&root, &text, container.settings.blank_lines)
        .map_err(ApplicationError::from)?;

    if cli.dry_run {
        output::info(&tree.to_tree_string());
        return Ok(());
    }

    container.directory_service().materialize(tree.root(), &base)?;

    if container.settings.summary {
        output::success(&summary_line(&tree, &base.join(&root)));
    }
    Ok(())
}

/// Summary printed after a successful run.
pub fn summary_line(tree: &Tree, root_dir: &Path) -> String {
    format!("created {} directories under {}", tree.len(), root_dir.display())
}

/// OUTPUT must be an existing directory; its name is the root value.
fn resolve_output(container: &ServiceContainer, output_dir: &Path) -> CliResult<(String, PathBuf)> {
    if !container.fs.is_dir(output_dir) {
        return Err(CliError::InvalidArgs(format!(
            "output is not an existing directory: {}",
            output_dir.display()
        )));
    }
    let canonical = container.fs.canonicalize(output_dir).map_err(|e| {
        InfraError::io(format!("resolve output {}", output_dir.display()), e)
    })?;

    split_output_dir(&canonical).ok_or_else(|| {
        CliError::InvalidArgs(format!(
            "output directory name is not valid UTF-8: {}",
            canonical.display()
        ))
    })
}

fn read_input(container: &ServiceContainer, input: &Path) -> CliResult<String> {
    let text = if input.is_stdin_marker() {
        container
            .stdin
            .read_stdin()
            .map_err(|e| InfraError::io("read outline from stdin", e))?
    } else {
        container
            .fs
            .read_to_string(input)
            .map_err(|e| InfraError::io(format!("read outline {}", input.display()), e))?
    };
    Ok(text)
}
