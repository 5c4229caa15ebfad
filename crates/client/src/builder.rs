//! Arena builder.

use crate::{Arena, ClientConfig, Contender};
use anyhow::{Context, Result};

/// Builder for an [`Arena`].
///
/// Both contenders are required; configuration defaults to
/// [`ClientConfig::default`].
#[derive(Default)]
pub struct ArenaBuilder {
    first: Option<Contender>,
    second: Option<Contender>,
    config: Option<ClientConfig>,
}

impl ArenaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the contender that attacks first (required).
    pub fn first(mut self, contender: Contender) -> Self {
        self.first = Some(contender);
        self
    }

    /// Set the contender that attacks second (required).
    pub fn second(mut self, contender: Contender) -> Self {
        self.second = Some(contender);
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the Arena.
    ///
    /// # Errors
    ///
    /// Returns an error if either contender is not set.
    pub fn build(self) -> Result<Arena> {
        let first = self
            .first
            .context("First contender is required. Use .first() to set it.")?;

        let second = self
            .second
            .context("Second contender is required. Use .second() to set it.")?;

        Ok(Arena {
            first,
            second,
            config: self.config.unwrap_or_default(),
        })
    }
}
