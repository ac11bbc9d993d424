use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{parse_descriptors, NodeCollection, NodeHandle, RtfNodeRef};
use crate::tree_view::TreeView;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    if !settings.display.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::List { nodes }) => _list(&settings, nodes),
        Some(Commands::Tree { nodes }) => _tree(&settings, nodes),
        Some(Commands::Find { key, from, nodes }) => _find(&settings, key, *from, nodes),
        Some(Commands::Select { key, nodes }) => _select(&settings, key, nodes),
        Some(Commands::Config { command }) => _config(&settings, command),
        Some(Commands::Completion { shell }) => {
            clap_complete::generate(*shell, &mut Cli::command(), "rtfnodes", &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs("no command given, see --help".into())),
    }
}

/// Builds a collection from descriptors, in argument order.
#[instrument(level = "debug", skip(settings))]
pub fn build_collection(settings: &Settings, descriptors: &[String]) -> CliResult<NodeCollection<RtfNodeRef>> {
    let mut collection = NodeCollection::new();
    collection
        .try_reserve(settings.initial_capacity)
        .map_err(|e| CliError::Capacity {
            requested: settings.initial_capacity,
            source: e,
        })?;
    for node in parse_descriptors(descriptors)? {
        collection.add(node.into_ref());
    }
    debug!("built collection of {} nodes", collection.len());
    Ok(collection)
}

#[instrument(level = "debug", skip(settings))]
fn _list(settings: &Settings, nodes: &[String]) -> CliResult<()> {
    let collection = build_collection(settings, nodes)?;
    let mut cursor = collection.cursor();
    while cursor.move_next() {
        let node = cursor.current()?;
        let index = cursor.position().unwrap_or_default();
        output::node_row(index, &node.borrow(), settings.display.show_parameters);
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _tree(settings: &Settings, nodes: &[String]) -> CliResult<()> {
    let collection = build_collection(settings, nodes)?;
    let tree = collection.to_tree_string(&settings.display.tree_label, settings.display.show_parameters);
    output::info(&tree);
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _find(settings: &Settings, key: &str, from: usize, nodes: &[String]) -> CliResult<()> {
    let collection = build_collection(settings, nodes)?;
    match collection.index_of_key_from(key, from) {
        Some(index) => {
            output::info(&index);
            Ok(())
        }
        None => Err(CliError::NotFound {
            key: key.to_string(),
            from,
        }),
    }
}

#[instrument(level = "debug", skip(settings))]
fn _select(settings: &Settings, key: &str, nodes: &[String]) -> CliResult<()> {
    let collection = build_collection(settings, nodes)?;
    let matches: Vec<(usize, &RtfNodeRef)> = collection
        .iter()
        .enumerate()
        .filter(|(_, node)| node.key_matches(key))
        .collect();
    if matches.is_empty() {
        output::warning(&format!("no node with key '{}'", key));
        return Ok(());
    }
    output::header(&format!("{} of {} nodes match '{}'", matches.len(), collection.len(), key));

    for (index, node) in matches {
        output::node_row(index, &node.borrow(), settings.display.show_parameters);
    }
    Ok(())
}

fn _config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let text = settings.to_toml().map_err(|e| CliError::Render(e.to_string()))?;
            output::info(&text);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory on this platform"),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn descriptors(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    fn given_descriptors_when_building_then_preserves_order() {
        let collection = build_collection(
            &Settings::default(),
            &descriptors(&["keyword:b", "text:Hello", "keyword:b:0"]),
        )
        .unwrap();
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.index_of_key("Hello"), Some(1));
        assert_eq!(collection.index_of_key_from("b", 1), Some(2));
        assert!(!collection.get(0).unwrap().same_node(collection.get(2).unwrap()));
    }

    #[rstest]
    fn given_bad_descriptor_when_building_then_descriptor_error() {
        let err = build_collection(&Settings::default(), &descriptors(&["keyword:b", "bogus:x"])).unwrap_err();
        assert!(matches!(err, CliError::Descriptor(_)));
    }

    #[rstest]
    fn given_missing_key_when_find_then_not_found() {
        let err = _find(&Settings::default(), "i", 0, &descriptors(&["keyword:b"])).unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::NOT_FOUND);
    }

    #[rstest]
    fn given_oversized_capacity_when_building_then_capacity_error() {
        let settings = Settings {
            initial_capacity: usize::MAX / 2,
            ..Settings::default()
        };
        let err = build_collection(&settings, &descriptors(&["group"])).unwrap_err();
        assert!(matches!(err, CliError::Capacity { .. }));
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }

    #[rstest]
    fn given_matching_keys_when_select_then_succeeds() {
        assert!(_select(&Settings::default(), "b", &descriptors(&["keyword:b", "text:x", "keyword:b:1"])).is_ok());
        assert!(_select(&Settings::default(), "z", &descriptors(&["keyword:b"])).is_ok());
    }

    #[rstest]
    fn given_start_past_end_when_find_then_not_found_without_range_error() {
        let err = _find(&Settings::default(), "b", 7, &descriptors(&["keyword:b"])).unwrap_err();
        assert!(matches!(err, CliError::NotFound { from: 7, .. }));
    }
}
