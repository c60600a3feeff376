use clap::{Arg, Command as ClapCommand, ArgAction};
use std::path::Path;
use std::process;
use log::error;

use avatarkit::utils::logger::Logger;
use avatarkit::commands::{Command, ExtractCommand};

fn main() {
    let matches = ClapCommand::new("AvatarKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Split a 3x3 avatar grid image into nine 200x200 PNG avatars")
        .arg(
            Arg::new("input")
                .help("Avatar grid image")
                .value_name("PATH_TO_IMAGE")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory for avatar_1.png .. avatar_9.png [default: public/images/profile/]")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file with output_dir and avatar_size settings")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let Some(input) = matches.get_one::<String>("input") else {
        println!("Usage: avatarkit <path_to_image>");
        process::exit(1);
    };

    let logger = match Logger::new("avatarkit.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("avatarkit-global.log", matches.get_flag("verbose")) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let command = match ExtractCommand::new(Path::new(input), &matches, &logger) {
        Ok(command) => command,
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = command.execute() {
        error!("Command execution error: {}", e);
        eprintln!("Error extracting avatars: {}", e);
        process::exit(1);
    }
}
