mod mix;
mod spaces;

pub mod prelude {
    pub use crate::commands::GenericCommand;
    pub use crate::config::Config;
    pub use crate::error::{CliError, Result};
    pub use crate::output::Output;
    pub use clap::ArgMatches;
    pub use std::io::Write;
}

use prelude::*;

pub trait GenericCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()>;
}

pub struct Command {
    command: Box<dyn GenericCommand>,
}

impl Command {
    pub fn from_string(command: &str) -> Self {
        Command {
            command: match command {
                "mix" => Box::new(mix::MixCommand),
                "spaces" => Box::new(spaces::SpacesCommand),
                _ => unreachable!("Unknown subcommand"),
            },
        }
    }

    pub fn execute(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        self.command.run(out, matches, config)
    }
}
