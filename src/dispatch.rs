use crate::args::Args;
use crate::command::{Command, DefaultHandler, Entry, Handler};
use crate::context::Context;
use crate::error::{BoxError, Error};
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How [`Mood::run`] picks the commands to execute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Only the first positional argument selects a command. Anything unregistered falls back to
    /// the default handler.
    #[default]
    FirstMatch,
    /// Every positional argument must name a command. They run in ascending priority order.
    Priority,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::FirstMatch => write!(f, "first-match"),
            Strategy::Priority => write!(f, "priority"),
        }
    }
}

/// Returned when a string does not name a [`Strategy`]
#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a dispatch strategy (expected 'first-match' or 'priority')")]
pub struct UnknownStrategy(String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-match" => Ok(Strategy::FirstMatch),
            "priority" => Ok(Strategy::Priority),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// The command router.
///
/// ```no_run
/// let mut app = mood::Mood::from_env();
///
/// app.register("build", |_| {
///     println!("hit the build route!");
///     Ok(())
/// });
///
/// if let Err(e) = app.run() {
///     eprintln!("{e}");
///     std::process::exit(1);
/// }
/// ```
pub struct Mood {
    context: Context,
    commands: HashMap<String, Entry>,
    default: DefaultHandler,
    strategy: Strategy,
}

impl Mood {
    /// Creates a router over `args`. The input is expected to be in the same format that
    /// [args()](std::env::args) returns (i.e. the name of the executable is first)
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Mood {
            context: Context::new(Args::parse_from(args)),
            commands: HashMap::new(),
            default: DefaultHandler::Welcome,
            strategy: Strategy::default(),
        }
    }

    /// Creates a router over the arguments of the current process
    pub fn from_env() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Sets the strategy used to select commands
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Registers `handler` under `name` with priority 0
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut Context) -> Result<(), BoxError> + 'static,
    {
        self.at(name, 0, handler);
    }

    /// Registers `handler` under `name`. Lower priorities run first under [`Strategy::Priority`].
    pub fn at<F>(&mut self, name: impl Into<String>, priority: i32, handler: F)
    where
        F: Fn(&mut Context) -> Result<(), BoxError> + 'static,
    {
        self.insert(name.into(), priority, Handler::func(handler));
    }

    /// Registers a factory under `name`. It is only called when the command is dispatched.
    pub fn register_command<C, F>(&mut self, name: impl Into<String>, priority: i32, factory: F)
    where
        C: Command + 'static,
        F: Fn(&Context) -> Result<C, BoxError> + 'static,
    {
        self.insert(name.into(), priority, Handler::factory(factory));
    }

    fn insert(&mut self, name: String, priority: i32, handler: Handler) {
        tracing::debug!(command = %name, priority, "registering command");

        let entry = Entry {
            name: name.clone(),
            priority,
            handler,
        };

        if let Some(previous) = self.commands.insert(name, entry) {
            tracing::warn!(command = %previous.name, "command registered twice, replacing it");
        }
    }

    /// Returns true if a command is registered under `name`
    pub fn is_registered(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Replaces the handler that runs when no command is selected
    pub fn set_default<F>(&mut self, handler: F)
    where
        F: Fn(&mut Context) -> Result<(), BoxError> + 'static,
    {
        self.default = DefaultHandler::Func(Box::new(handler));
    }

    /// Builds the default command right away.
    ///
    /// If `factory` fails, the previous default handler stays in place and the failure is
    /// returned.
    pub fn set_default_command<C, F>(&mut self, factory: F) -> Result<(), Error>
    where
        C: Command + 'static,
        F: FnOnce(&Context) -> Result<C, BoxError>,
    {
        match factory(&self.context) {
            Ok(command) => {
                self.default = DefaultHandler::Command(Box::new(command));
                Ok(())
            }
            Err(source) => {
                tracing::error!(error = %source, "default command could not be built, keeping the previous one");
                Err(Error::FactoryFailure {
                    name: "default".to_string(),
                    source,
                })
            }
        }
    }

    /// Dispatches the command line to the registered commands
    pub fn run(&mut self) -> Result<(), Error> {
        if self.context.positionals().is_empty() {
            tracing::debug!("no positional arguments, running the default handler");
            return self.default.invoke(&mut self.context);
        }

        match self.strategy {
            Strategy::FirstMatch => self.run_first_match(),
            Strategy::Priority => self.run_by_priority(),
        }
    }

    fn run_first_match(&mut self) -> Result<(), Error> {
        let Some(first) = self.context.arg_at(1) else {
            return self.default.invoke(&mut self.context);
        };

        match self.commands.get(first) {
            Some(entry) => {
                tracing::debug!(command = %entry.name, "dispatching");
                entry.handler.invoke(&entry.name, &mut self.context)
            }
            None => {
                tracing::debug!(argument = first, "no command matched, running the default handler");
                self.default.invoke(&mut self.context)
            }
        }
    }

    fn run_by_priority(&mut self) -> Result<(), Error> {
        let mut queue = Vec::with_capacity(self.context.positionals().len());

        for arg in self.context.positionals() {
            let Some(entry) = self.commands.get(&arg.value) else {
                return Err(Error::UnknownCommand {
                    name: arg.value.clone(),
                });
            };
            queue.push(entry);
        }

        // sorted_by_key is stable: equal priorities keep command line order
        for entry in queue.into_iter().sorted_by_key(|e| e.priority) {
            tracing::debug!(command = %entry.name, priority = entry.priority, "dispatching");
            entry.handler.invoke(&entry.name, &mut self.context)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mood")
            .field("context", &self.context)
            .field("commands", &self.commands.keys().sorted().collect::<Vec<_>>())
            .field("strategy", &self.strategy)
            .finish()
    }
}
