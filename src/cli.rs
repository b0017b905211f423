//! crypto-bmark command line interface definition and command dispatch.

use crate::command::Command;
use crate::error::{Error, RegistrationError};
use std::ffi::OsString;
use std::io::{BufRead, Write};
use structopt::clap::{App, AppSettings, Arg, ErrorKind, SubCommand};
use structopt::StructOpt;
use tracing::debug;

/// Positional values trailing a subcommand; any present is a usage error.
const REMAINING: &str = "ARGS";

// Only contributes the `-V/--version` entry to the usage text, the flag
// itself is handled before parsing.
#[derive(StructOpt)]
#[structopt(
    name = "crypto-bmark",
    about = "Crypto algorithm benchmark",
    no_version,
    global_settings = &[AppSettings::VersionlessSubcommands]
)]
#[allow(dead_code)]
pub struct Options {
    /// Display version information
    #[structopt(short = "V", long)]
    pub version: bool,
}

/// Outcome of a successful parse.
#[derive(Debug, PartialEq)]
pub struct Invocation {
    /// Name of the selected subcommand, if any.
    pub active: Option<String>,
    /// Positional arguments nothing consumed.
    pub remaining: Vec<String>,
}

/// Owns the registered commands and routes the command line to one of them.
#[derive(Default)]
pub struct Dispatcher {
    definitions: Vec<App<'static, 'static>>,
    names: Vec<&'static str>,
    commands: Vec<Box<dyn Command>>,
}

impl Dispatcher {
    /// Constructs an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every command and takes ownership of them.
    pub fn with_commands(commands: Vec<Box<dyn Command>>) -> Result<Self, Error> {
        let mut dispatcher = Self::new();
        for command in &commands {
            command.register(&mut dispatcher)?;
            debug!("Registered command {}", command.name());
        }
        dispatcher.commands = commands;
        Ok(dispatcher)
    }

    /// Adds a subcommand definition to the command table.
    pub fn register(&mut self, name: &'static str, description: &'static str) -> Result<(), Error> {
        validate(name, &self.names).map_err(|source| Error::Registration {
            name: name.to_string(),
            source,
        })?;

        let definition = SubCommand::with_name(name).about(description).arg(
            Arg::with_name(REMAINING)
                .multiple(true)
                .hidden(true),
        );
        self.definitions.push(definition);
        self.names.push(name);
        Ok(())
    }

    fn app(&self) -> App<'static, 'static> {
        Options::clap().subcommands(self.definitions.iter().cloned())
    }

    /// Parses the full argument vector, program name first.
    pub fn parse<I, T>(&self, args: I) -> Result<Invocation, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .app()
            .get_matches_from_safe(args)
            .map_err(|err| match err.kind {
                ErrorKind::HelpDisplayed => Error::Help(err.message),
                _ => Error::Usage(err.message),
            })?;

        let invocation = match matches.subcommand() {
            (name, Some(sub)) => Invocation {
                active: Some(name.to_string()),
                remaining: sub
                    .values_of(REMAINING)
                    .map(|values| values.map(String::from).collect())
                    .unwrap_or_default(),
            },
            _ => Invocation {
                active: None,
                remaining: Vec::new(),
            },
        };
        Ok(invocation)
    }

    /// Runs the command selected by `invocation`.
    pub fn dispatch(
        &self,
        invocation: Invocation,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), Error> {
        if !invocation.remaining.is_empty() {
            return Err(Error::UnrecognizedArguments(invocation.remaining));
        }
        let name = invocation.active.ok_or(Error::NoCommand)?;

        match self.commands.iter().find(|command| command.name() == name) {
            Some(command) => {
                debug!("Running command {}", name);
                command.run(input, output)
            }
            None => Err(Error::CommandNotFound(name)),
        }
    }

    /// Parses `args` and runs the selected command.
    pub fn execute<I, T>(
        &self,
        args: I,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let invocation = self.parse(args)?;
        self.dispatch(invocation, input, output)
    }
}

/// Checks that `name` is usable as a subcommand and not taken.
fn validate(name: &str, taken: &[&str]) -> Result<(), RegistrationError> {
    if name.is_empty() {
        return Err(RegistrationError::EmptyName);
    }
    if name.starts_with('-') || name.chars().any(char::is_whitespace) {
        return Err(RegistrationError::MalformedName(name.to_string()));
    }
    if taken.contains(&name) {
        return Err(RegistrationError::Duplicate(name.to_string()));
    }
    Ok(())
}
