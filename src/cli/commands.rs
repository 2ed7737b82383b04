//! Command dispatch: loads settings, wires services, runs one subcommand.

use std::io::{self, BufRead};

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands, HighlightArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::menu::Menu;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{normalize, InputKind};
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraError;

/// Run the parsed command line; returns the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    // config and completion work without opening the dictionary
    match &cli.command {
        Some(Commands::Config { command }) => return cmd_config(cli, command),
        Some(Commands::Completion { shell }) => return cmd_completion(*shell),
        _ => {}
    }

    let settings = load_settings(cli)?;
    let mut services = ServiceContainer::new(&settings);

    match &cli.command {
        Some(Commands::Add { words }) => cmd_add(&mut services, words),
        Some(Commands::Check { word }) => cmd_check(&services, word),
        Some(Commands::Prefix { prefix }) => cmd_prefix(&services, prefix),
        Some(Commands::Find { prefix }) => cmd_find(&services, prefix),
        Some(Commands::Remove { word }) => cmd_remove(&mut services, word),
        Some(Commands::List) => cmd_list(&services),
        Some(Commands::Clear { yes }) => cmd_clear(&mut services, *yes),
        Some(Commands::Tree { highlight }) => cmd_tree(&mut services, highlight),
        Some(Commands::Layout {
            highlight,
            width,
            toml,
        }) => cmd_layout(&mut services, highlight, *width, *toml),
        Some(Commands::Shell) | None => cmd_shell(&mut services),
        Some(Commands::Config { .. }) | Some(Commands::Completion { .. }) => Ok(exitcode::OK),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(data_file) = &cli.data_file {
        debug!("data file override: {}", data_file.display());
        settings.data_file = data_file.clone();
    }
    Ok(settings)
}

/// Normalize user input, mapping validation failures into the error chain.
fn parse_input(raw: &str, kind: InputKind) -> CliResult<String> {
    normalize(raw, kind).map_err(|e| ApplicationError::from(e).into())
}

fn report_persistence(services: &mut ServiceContainer) {
    if let Some(warning) = services.dictionary.take_warning() {
        output::warning(&warning);
    }
}

#[instrument(level = "debug", skip(services))]
fn cmd_add(services: &mut ServiceContainer, words: &[String]) -> CliResult<i32> {
    let mut code = exitcode::OK;
    for raw in words {
        let word = match normalize(raw, InputKind::Word) {
            Ok(word) => word,
            Err(e) => {
                output::failure(&format!("'{}': {}", raw, e));
                code = exitcode::DATAERR;
                continue;
            }
        };
        if services.dictionary.insert(&word) {
            output::success(&format!("Word '{}' added successfully!", word));
        } else {
            output::failure(&format!("Word '{}' already exists in dictionary", word));
        }
        report_persistence(services);
    }
    output::status(&format!(
        "Total words in dictionary: {}",
        services.dictionary.word_count()
    ));
    Ok(code)
}

fn cmd_check(services: &ServiceContainer, raw: &str) -> CliResult<i32> {
    let word = parse_input(raw, InputKind::Word)?;
    if services.dictionary.contains(&word) {
        output::success(&format!("Word '{}' was found in dictionary!", word));
        Ok(exitcode::OK)
    } else {
        output::failure(&format!("Word '{}' was not found in dictionary", word));
        Ok(exitcode::NOT_FOUND)
    }
}

fn cmd_prefix(services: &ServiceContainer, raw: &str) -> CliResult<i32> {
    let prefix = parse_input(raw, InputKind::Prefix)?;
    if services.dictionary.starts_with(&prefix) {
        output::success(&format!("There are words starting with '{}'!", prefix));
        Ok(exitcode::OK)
    } else {
        output::failure(&format!("No words starting with '{}' found", prefix));
        Ok(exitcode::NOT_FOUND)
    }
}

fn cmd_find(services: &ServiceContainer, raw: &str) -> CliResult<i32> {
    let prefix = parse_input(raw, InputKind::Prefix)?;
    let words = services.dictionary.get_by_prefix(&prefix);
    if words.is_empty() {
        output::failure(&format!("No words with prefix '{}' found", prefix));
        return Ok(exitcode::NOT_FOUND);
    }
    output::header(&format!(
        "Found {} words with prefix '{}':",
        words.len(),
        prefix
    ));
    for (i, word) in words.iter().enumerate() {
        output::numbered(i + 1, word);
    }
    Ok(exitcode::OK)
}

fn cmd_remove(services: &mut ServiceContainer, raw: &str) -> CliResult<i32> {
    let word = parse_input(raw, InputKind::Word)?;
    if !services.dictionary.remove_word(&word) {
        output::failure(&format!("Word '{}' not found in dictionary", word));
        return Ok(exitcode::NOT_FOUND);
    }
    output::success(&format!("Word '{}' removed successfully!", word));
    report_persistence(services);
    Ok(exitcode::OK)
}

fn cmd_list(services: &ServiceContainer) -> CliResult<i32> {
    let words = services.dictionary.all_words();
    if words.is_empty() {
        output::info(&"!Dictionary is empty! No words to print");
        return Ok(exitcode::OK);
    }
    output::header(&"======== All words ========");
    for (i, word) in words.iter().enumerate() {
        output::numbered(i + 1, word);
    }
    output::status(&format!("Total words in dictionary: {}", words.len()));
    Ok(exitcode::OK)
}

fn cmd_clear(services: &mut ServiceContainer, yes: bool) -> CliResult<i32> {
    if !yes {
        output::prompt(&"Delete ALL dictionary data? This cannot be undone! (yes/no):");
        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(|e| InfraError::io("read confirmation", e))?;
        if !answer.trim().eq_ignore_ascii_case("yes") {
            output::info(&"Operation cancelled");
            return Ok(exitcode::OK);
        }
    }
    services.dictionary.delete_all_data();
    output::success(&"All dictionary data deleted successfully!");
    report_persistence(services);
    Ok(exitcode::OK)
}

/// Rebuild the visual tree and apply the requested selection.
///
/// Returns NOT_FOUND when a selection was requested but matched nothing; the
/// tree is still drawn without highlight in that case.
fn prepare_visual(services: &mut ServiceContainer, args: &HighlightArgs) -> CliResult<i32> {
    services.visualizer.refresh(services.dictionary.trie());

    if let Some(raw) = &args.word {
        let word = parse_input(raw, InputKind::Word)?;
        if !services.dictionary.contains(&word) {
            output::failure(&format!("Word '{}' was not found in dictionary", word));
            return Ok(exitcode::NOT_FOUND);
        }
        services.visualizer.highlight_word(&word);
    } else if let Some(raw) = &args.prefix {
        let prefix = parse_input(raw, InputKind::Prefix)?;
        if !services.dictionary.starts_with(&prefix) {
            output::failure(&format!("No words starting with '{}' found", prefix));
            return Ok(exitcode::NOT_FOUND);
        }
        services.visualizer.highlight_prefix(&prefix);
    } else if let Some(raw) = &args.find {
        let prefix = parse_input(raw, InputKind::Prefix)?;
        let found = services
            .visualizer
            .highlight_words_by_prefix(services.dictionary.trie(), &prefix);
        if found == 0 {
            output::failure(&format!("No words with prefix '{}' found", prefix));
            return Ok(exitcode::NOT_FOUND);
        }
    }
    Ok(exitcode::OK)
}

fn cmd_tree(services: &mut ServiceContainer, highlight: &HighlightArgs) -> CliResult<i32> {
    let code = prepare_visual(services, highlight)?;
    output::info(&services.visualizer.render_text());
    output::status(&services.visualizer.status_line(services.dictionary.trie()));
    Ok(code)
}

fn cmd_layout(
    services: &mut ServiceContainer,
    highlight: &HighlightArgs,
    width: Option<i32>,
    as_toml: bool,
) -> CliResult<i32> {
    if let Some(width) = width {
        services.visualizer.set_panel_width(width);
    }
    let code = prepare_visual(services, highlight)?;
    let snapshot = services.visualizer.snapshot();

    if as_toml {
        let text = toml::to_string(&snapshot).map_err(|e| ApplicationError::OperationFailed {
            context: "serialize layout".to_string(),
            source: Box::new(e),
        })?;
        output::info(&text);
        return Ok(code);
    }

    output::header(&format!(
        "{:<16} {:>6} {:>6} {:>6}  {}",
        "NODE", "X", "Y", "WIDTH", "FLAGS"
    ));
    for node in &snapshot.nodes {
        let mut flags = Vec::new();
        if node.end_of_word {
            flags.push("word");
        }
        if node.highlighted {
            flags.push("highlighted");
        }
        let name = if node.path.is_empty() {
            node.label.clone()
        } else {
            node.path.clone()
        };
        output::info(&format!(
            "{:<16} {:>6} {:>6} {:>6}  {}",
            name,
            node.x,
            node.y,
            node.subtree_width,
            flags.join(",")
        ));
    }
    output::status(&services.visualizer.status_line(services.dictionary.trie()));
    Ok(code)
}

fn cmd_shell(services: &mut ServiceContainer) -> CliResult<i32> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(services, stdin.lock(), stdout.lock())
        .run()
        .map_err(|e| InfraError::io("interactive menu", e))?;
    Ok(exitcode::OK)
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path()
                .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
            let fs = RealFileSystem;
            if fs.exists(&path) && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            fs.ensure_parent(&path)
                .with_path_context("create config directory", &path)?;
            fs.write(&path, &Settings::template())
                .with_path_context("write config template", &path)?;
            output::success(&format!("Created {}", path.display()));
        }
        ConfigCommands::Path => {
            let settings = load_settings(cli)?;
            match global_config_path() {
                Some(path) => output::info(&format!("config: {}", path.display())),
                None => output::info(&"config: <unavailable>"),
            }
            output::info(&format!("data:   {}", settings.data_file.display()));
        }
    }
    Ok(exitcode::OK)
}

fn cmd_completion(shell: clap_complete::Shell) -> CliResult<i32> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(exitcode::OK)
}
