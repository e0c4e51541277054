use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process::ExitCode;

use tkx_helper::utils::io::prompt_with_confirmation;
use tkx_helper::utils::logging::initialize_logging;
use tkx_helper::{
    GateSettings, LogLevel, LogSink, Toolkit, DEFAULT_ADMIN_CONFIG_FILE, DEFAULT_LOG_FILE,
    MAX_ADMIN_ATTEMPTS,
};

fn build_cli() -> Command {
    Command::new("tkx-helper")
        .about("Console logging, an admin password gate and file helpers")
        .version(tkx_helper::VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path of the admin credential file")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_ADMIN_CONFIG_FILE),
        )
        .arg(
            Arg::new("max-attempts")
                .long("max-attempts")
                .global(true)
                .help("Failed attempts allowed before the gate locks")
                .value_name("N")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .global(true)
                .help("Prefix printed before console messages")
                .value_name("TEXT")
                .default_value("[TKX] "),
        )
        .arg(
            Arg::new("no-time")
                .long("no-time")
                .global(true)
                .help("Do not print timestamps")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .global(true)
                .help("File receiving the diagnostic log")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_LOG_FILE),
        )
        .subcommand(
            Command::new("set")
                .about("Set the admin password")
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Overwrite an existing password")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Remove the stored admin password")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation question")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Ask for the admin password")
                .arg(
                    Arg::new("success-message")
                        .long("success-message")
                        .help("Message printed on success")
                        .value_name("TEXT"),
                )
                .arg(
                    Arg::new("fail-message")
                        .long("fail-message")
                        .help("Message printed after a wrong password")
                        .value_name("TEXT"),
                ),
        )
        .subcommand(
            Command::new("mkdir")
                .about("Create a folder if it does not exist")
                .arg(Arg::new("path").required(true).value_parser(clap::value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new("copy")
                .about("Copy a file with its metadata")
                .arg(Arg::new("source").required(true).value_parser(clap::value_parser!(PathBuf)))
                .arg(
                    Arg::new("destination")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a file")
                .arg(Arg::new("path").required(true).value_parser(clap::value_parser!(PathBuf))),
        )
        .subcommand(
            Command::new("exists")
                .about("Check whether a file or folder exists")
                .arg(Arg::new("path").required(true).value_parser(clap::value_parser!(PathBuf))),
        )
        .subcommand(Command::new("version").about("Print the toolkit version"))
}

fn path_arg(matches: &ArgMatches, name: &str) -> PathBuf {
    matches
        .get_one::<PathBuf>(name)
        .cloned()
        .unwrap_or_default()
}

fn gate_settings(matches: &ArgMatches) -> GateSettings {
    GateSettings::default()
        .with_config_file(path_arg(matches, "config"))
        .with_max_attempts(
            matches
                .get_one::<u32>("max-attempts")
                .copied()
                .unwrap_or(MAX_ADMIN_ATTEMPTS),
        )
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let log_file = path_arg(&matches, "log-file");
    let settings = gate_settings(&matches);
    let prefix = matches
        .get_one::<String>("prefix")
        .cloned()
        .unwrap_or_default();
    let show_time = !matches.get_flag("no-time");

    let mut toolkit = Toolkit::with_settings(prefix, show_time, settings);

    if let Err(e) = initialize_logging(&log_file) {
        toolkit.cli.emit(
            LogLevel::Warning,
            &format!("Diagnostic log disabled ({}): {}", log_file.display(), e),
        );
    }

    match matches.subcommand() {
        Some(("set", sub_matches)) => {
            toolkit.admin.set_credential(sub_matches.get_flag("force"));
            ExitCode::SUCCESS
        }
        Some(("reset", sub_matches)) => {
            if !sub_matches.get_flag("yes") {
                match prompt_with_confirmation("Really remove the admin password?") {
                    Ok(true) => {}
                    Ok(false) => {
                        toolkit.cli.emit(LogLevel::Info, "Reset cancelled.");
                        return ExitCode::SUCCESS;
                    }
                    Err(e) => {
                        toolkit
                            .cli
                            .emit(LogLevel::Error, &format!("Failed to read answer: {}", e));
                        return ExitCode::FAILURE;
                    }
                }
            }
            toolkit.admin.reset_credential();
            ExitCode::SUCCESS
        }
        Some(("verify", sub_matches)) => {
            let success = sub_matches.get_one::<String>("success-message");
            let fail = sub_matches.get_one::<String>("fail-message");
            if success.is_some() || fail.is_some() {
                let defaults = GateSettings::default();
                toolkit.admin.configure_messages(
                    success.cloned().unwrap_or(defaults.success_message),
                    fail.cloned().unwrap_or(defaults.fail_message),
                );
            }
            exit_code(toolkit.admin.verify_credential())
        }
        Some(("mkdir", sub_matches)) => {
            exit_code(toolkit.files.create_folder(path_arg(sub_matches, "path")).is_ok())
        }
        Some(("copy", sub_matches)) => exit_code(
            toolkit
                .files
                .copy_file(path_arg(sub_matches, "source"), path_arg(sub_matches, "destination"))
                .is_ok(),
        ),
        Some(("delete", sub_matches)) => {
            exit_code(toolkit.files.delete_file(path_arg(sub_matches, "path")).is_ok())
        }
        Some(("exists", sub_matches)) => {
            let path = path_arg(sub_matches, "path");
            let (label, message, found) = if toolkit.files.file_exists(&path) {
                ("success", "File exists", true)
            } else if toolkit.files.folder_exists(&path) {
                ("success", "Folder exists", true)
            } else {
                ("warning", "Not found", false)
            };
            toolkit
                .cli
                .print_labeled(&format!("{}: {}", message, path.display()), label);
            exit_code(found)
        }
        Some(("version", _)) => {
            println!("{}", Toolkit::version());
            ExitCode::SUCCESS
        }
        _ => ExitCode::FAILURE,
    }
}
