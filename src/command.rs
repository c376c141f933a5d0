use crate::context::Context;
use crate::error::{BoxError, Error};

/// A command object built by a factory registered with
/// [`Mood::register_command`](crate::Mood::register_command)
pub trait Command {
    fn execute(&mut self, cx: &mut Context) -> Result<(), BoxError>;
}

pub(crate) type HandlerFn = dyn Fn(&mut Context) -> Result<(), BoxError>;
pub(crate) type FactoryFn = dyn Fn(&Context) -> Result<Box<dyn Command>, BoxError>;

pub(crate) enum Handler {
    Func(Box<HandlerFn>),
    // Built lazily, only when the command is dispatched
    Factory(Box<FactoryFn>),
}

impl Handler {
    pub(crate) fn func<F>(f: F) -> Self
    where
        F: Fn(&mut Context) -> Result<(), BoxError> + 'static,
    {
        Handler::Func(Box::new(f))
    }

    pub(crate) fn factory<C, F>(factory: F) -> Self
    where
        C: Command + 'static,
        F: Fn(&Context) -> Result<C, BoxError> + 'static,
    {
        Handler::Factory(Box::new(move |cx: &Context| {
            factory(cx).map(|c| Box::new(c) as Box<dyn Command>)
        }))
    }

    pub(crate) fn invoke(&self, name: &str, cx: &mut Context) -> Result<(), Error> {
        let result = match self {
            Handler::Func(f) => f(cx),
            Handler::Factory(factory) => {
                let mut command = factory(cx).map_err(|source| Error::FactoryFailure {
                    name: name.to_string(),
                    source,
                })?;
                command.execute(cx)
            }
        };

        result.map_err(|source| Error::Command {
            command: name.to_string(),
            source,
        })
    }
}

/// A registered command
pub(crate) struct Entry {
    pub(crate) name: String,
    pub(crate) priority: i32,
    pub(crate) handler: Handler,
}

/// The handler that runs when no registered command is selected
pub(crate) enum DefaultHandler {
    Welcome,
    Func(Box<HandlerFn>),
    Command(Box<dyn Command>),
}

impl DefaultHandler {
    pub(crate) fn invoke(&mut self, cx: &mut Context) -> Result<(), Error> {
        let result = match self {
            DefaultHandler::Welcome => {
                println!(
                    "welcome to {}, please pass an arg to your cli application",
                    cx.program()
                );
                Ok(())
            }
            DefaultHandler::Func(f) => f(cx),
            DefaultHandler::Command(c) => c.execute(cx),
        };

        result.map_err(Error::DefaultFailure)
    }
}
