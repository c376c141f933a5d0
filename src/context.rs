use crate::args::Args;
use crate::store::Store;
use std::ops::Deref;

/// What a handler gets to see: the classified arguments and the store.
///
/// Dereferences to [`Args`], so accessors such as [`Args::has_flag`] can be called directly.
#[derive(Debug)]
pub struct Context {
    args: Args,
    store: Store,
}

impl Context {
    pub fn new(args: Args) -> Self {
        Context {
            args,
            store: Store::new(),
        }
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

impl Deref for Context {
    type Target = Args;

    fn deref(&self) -> &Args {
        &self.args
    }
}
