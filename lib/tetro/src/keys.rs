//! Mapping from logical key names to controller actions.
//!
//! Keys are identified by name (`"ArrowLeft"`, `"Space"`, `"KeyJ"`, ...). A key is first
//! looked up in the alias table, which maps alternate keys onto a canonical key, and the
//! resulting name is then looked up in the binding table.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::piece::Dir;
use crate::shape::Turn;

type HashMap<K, V> = hashbrown::HashMap<K, V, core::hash::BuildHasherDefault<ahash::AHasher>>;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    Down,
    Rotate,
    RotateCcw,
    Left,
    Right,
    HardDrop,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Down,
        Action::Rotate,
        Action::RotateCcw,
        Action::Left,
        Action::Right,
        Action::HardDrop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Down => "down",
            Action::Rotate => "rotate",
            Action::RotateCcw => "rotate-ccw",
            Action::Left => "left",
            Action::Right => "right",
            Action::HardDrop => "drop",
        }
    }

    pub fn dir(self) -> Option<Dir> {
        match self {
            Action::Left => Some(Dir::Left),
            Action::Right => Some(Dir::Right),
            _ => None,
        }
    }

    pub fn turn(self) -> Option<Turn> {
        match self {
            Action::Rotate => Some(Turn::Cw),
            Action::RotateCcw => Some(Turn::Ccw),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action {:?}", self.0)
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

#[derive(Clone, Debug, Default)]
pub struct Keymap {
    aliases: HashMap<String, String>,
    bindings: HashMap<String, Action>,
}

impl Keymap {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Arrow keys and space, with `hjkl` as alternates for the arrows and `z` for a
    /// counter-clockwise turn.
    pub fn standard() -> Self {
        let mut map = Self::empty();
        map.bind("ArrowDown", Action::Down);
        map.bind("ArrowUp", Action::Rotate);
        map.bind("ArrowLeft", Action::Left);
        map.bind("ArrowRight", Action::Right);
        map.bind("Space", Action::HardDrop);
        map.bind("KeyZ", Action::RotateCcw);
        map.alias("KeyJ", "ArrowDown");
        map.alias("KeyK", "ArrowUp");
        map.alias("KeyH", "ArrowLeft");
        map.alias("KeyL", "ArrowRight");
        map
    }

    pub fn bind(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    pub fn alias(&mut self, key: &str, target: &str) {
        self.aliases.insert(key.to_string(), target.to_string());
    }

    /// Returns the action for `key`, or `None` for unrecognized keys.
    pub fn resolve(&self, key: &str) -> Option<Action> {
        let key = self.aliases.get(key).map_or(key, String::as_str);
        self.bindings.get(key).copied()
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, Action)> {
        self.bindings.iter().map(|(k, &a)| (k.as_str(), a))
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_standard_bindings() {
        let map = Keymap::standard();
        assert_eq!(map.resolve("ArrowDown"), Some(Action::Down));
        assert_eq!(map.resolve("ArrowUp"), Some(Action::Rotate));
        assert_eq!(map.resolve("ArrowLeft"), Some(Action::Left));
        assert_eq!(map.resolve("ArrowRight"), Some(Action::Right));
        assert_eq!(map.resolve("Space"), Some(Action::HardDrop));
        assert_eq!(map.resolve("KeyJ"), Some(Action::Down));
        assert_eq!(map.resolve("KeyK"), Some(Action::Rotate));
        assert_eq!(map.resolve("KeyH"), Some(Action::Left));
        assert_eq!(map.resolve("KeyL"), Some(Action::Right));
        assert_eq!(map.resolve("KeyQ"), None);
        assert_eq!(map.resolve("arrowdown"), None);
    }

    #[test]
    fn test_alias_to_unbound_key() {
        let mut map = Keymap::empty();
        map.alias("KeyW", "ArrowUp");
        assert_eq!(map.resolve("KeyW"), None);
        map.bind("ArrowUp", Action::HardDrop);
        assert_eq!(map.resolve("KeyW"), Some(Action::HardDrop));
    }

    #[test]
    fn test_action_names() {
        for a in Action::ALL {
            assert_eq!(a.name().parse::<Action>(), Ok(a));
        }
        assert_eq!(
            "fly".parse::<Action>(),
            Err(UnknownAction("fly".to_string()))
        );
        assert_eq!(Action::Left.dir(), Some(Dir::Left));
        assert_eq!(Action::RotateCcw.turn(), Some(Turn::Ccw));
        assert_eq!(Action::Down.turn(), None);
    }
}
