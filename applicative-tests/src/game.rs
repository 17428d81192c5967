//! Reading two players out of a key-value cache and starting a game between them.
//!
//! Each lookup is an `Io` effect that may come back empty, so the result type is
//! `Io<Maybe<Player>>`. Lifting `game` over the composite container handles both layers.

use std::cell::RefCell;
use std::collections::HashMap;

use applicative::{lift_a2, Compose, Io, Maybe, PartiallyApplied};

pub type IoMaybe<'c> = Compose<Io<'c, PartiallyApplied>, Maybe<PartiallyApplied>>;

/// In-memory cache that records every key it is asked for
#[derive(Debug, Default)]
pub struct Cache {
    entries: HashMap<String, String>,
    reads: RefCell<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
}

impl Cache {
    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }

    pub fn get<'c>(&'c self, key: &'c str) -> Io<'c, Maybe<String>> {
        Io::new(move || {
            self.reads.borrow_mut().push(key.to_string());
            self.entries.get(key).cloned().into()
        })
    }
}

pub fn get_player<'c>(cache: &'c Cache, id: &'c str) -> Io<'c, Maybe<Player>> {
    cache.get(id).map(move |name| {
        name.map(|name| Player {
            id: id.to_string(),
            name,
        })
    })
}

pub fn game(p1: Player, p2: Player) -> String {
    format!("{} vs {}", p1.name, p2.name)
}

pub fn start_game(cache: &Cache) -> Io<'_, Maybe<String>> {
    lift_a2::<IoMaybe<'_>, _, _, _>(
        game,
        get_player(cache, "player1"),
        get_player(cache, "player2"),
    )
}
