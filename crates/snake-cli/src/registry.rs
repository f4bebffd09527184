//! Named bot constructors
//!
//! The registry is plain configuration passed into the composition
//! root; looking up a key that was never registered is a configuration
//! error, not a protocol error.

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use snake_client::SnakeBot;

type BotConstructor = Box<dyn Fn(&str, bool) -> Box<dyn SnakeBot>>;

/// Maps bot names (as given on the command line) to constructors.
pub struct BotRegistry {
    bots: HashMap<String, BotConstructor>,
}

impl BotRegistry {
    pub fn new() -> Self {
        Self {
            bots: HashMap::new(),
        }
    }

    pub fn register(
        &mut self,
        key: &str,
        constructor: impl Fn(&str, bool) -> Box<dyn SnakeBot> + 'static,
    ) {
        self.bots.insert(key.to_owned(), Box::new(constructor));
    }

    /// Instantiate the bot registered under `key`.
    pub fn create(&self, key: &str, name: &str, auto_start: bool) -> Result<Box<dyn SnakeBot>> {
        match self.bots.get(key) {
            Some(constructor) => Ok(constructor(name, auto_start)),
            None => {
                let mut available: Vec<_> = self.bots.keys().map(String::as_str).collect();
                available.sort_unstable();
                Err(anyhow!(
                    "unknown bot '{key}', available bots are: {}",
                    available.join(", ")
                ))
            }
        }
    }
}
