//! CLI parsing and command wiring.

use clap::Parser;
use rstest::rstest;

use rtfnodes::cli::args::{Commands, ConfigCommands};
use rtfnodes::cli::commands::build_collection;
use rtfnodes::cli::Cli;
use rtfnodes::config::Settings;

#[rstest]
fn given_find_with_start_when_parsed_then_fields_set() {
    let cli = Cli::parse_from(["rtfnodes", "find", "b", "--from", "2", "keyword:b", "text:x"]);
    match cli.command {
        Some(Commands::Find { key, from, nodes }) => {
            assert_eq!(key, "b");
            assert_eq!(from, 2);
            assert_eq!(nodes, ["keyword:b", "text:x"]);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[rstest]
fn given_list_without_descriptors_when_parsed_then_rejected() {
    assert!(Cli::try_parse_from(["rtfnodes", "list"]).is_err());
}

#[rstest]
fn given_config_show_when_parsed_then_subcommand_selected() {
    let cli = Cli::parse_from(["rtfnodes", "config", "show"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Config { command: ConfigCommands::Show })
    ));
}

#[rstest]
fn given_configured_capacity_when_building_then_reserves_slots() {
    let settings = Settings {
        initial_capacity: 64,
        ..Settings::default()
    };
    let collection = build_collection(&settings, &["group".to_string()]).unwrap();
    assert!(collection.capacity() >= 64);
    assert_eq!(collection.len(), 1);
}
