//! Session configuration, loadable from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use tetro::{Action, Board, Keymap, Metrics};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Distance in pixels between neighbouring cell origins.
    pub cell_size: u32,
    pub padding: u32,
    pub tick_millis: u64,
    /// Fixed seed for the shape randomizer. Drawn from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Key name to action name.
    pub bindings: BTreeMap<String, String>,
    /// Alternate key name to canonical key name.
    pub aliases: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let keymap = Keymap::standard();
        let metrics = Metrics::default();
        Self {
            width: Board::WIDTH,
            height: Board::HEIGHT,
            cell_size: metrics.cell,
            padding: metrics.padding,
            tick_millis: 500,
            seed: None,
            bindings: keymap
                .bindings()
                .map(|(k, a)| (k.to_string(), a.name().to_string()))
                .collect(),
            aliases: keymap
                .aliases()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Config {
    pub const MIN_SIDE: usize = 4;
    /// Keeps every board and status line addressable by a terminal cursor.
    pub const MAX_SIDE: usize = 1024;

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let sides = Self::MIN_SIDE..=Self::MAX_SIDE;
        if !sides.contains(&self.width) || !sides.contains(&self.height) {
            return Err(Error::BoardSize {
                width: self.width,
                height: self.height,
            });
        }
        let metrics = self.metrics();
        if !metrics.is_drawable() {
            return Err(Error::Padding {
                cell: self.cell_size,
                padding: self.padding,
            });
        }
        if metrics.offset(self.width.max(self.height) - 1).is_none() {
            return Err(Error::Extent {
                width: self.width,
                height: self.height,
                cell: self.cell_size,
            });
        }
        if self.tick_millis == 0 {
            return Err(Error::TickInterval);
        }
        self.keymap().map(|_| ())
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::new(self.cell_size, self.padding)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    pub fn board(&self) -> Board {
        Board::with_metrics(self.width, self.height, self.metrics())
    }

    pub fn keymap(&self) -> Result<Keymap, Error> {
        let mut keymap = Keymap::empty();
        for (key, name) in &self.bindings {
            let action = name.parse::<Action>().map_err(|_| Error::UnknownAction {
                key: key.clone(),
                action: name.clone(),
            })?;
            keymap.bind(key, action);
        }
        for (key, target) in &self.aliases {
            keymap.alias(key, target);
        }
        Ok(keymap)
    }
}
