// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::BTreeMap, str::FromStr};

use serde::Deserialize;

use super::{
    enums::Handler,
    errors::TableError,
    helper_constants::{START_MARKER, WILDCARD_KEY},
};

/// Class of one input character as seen by a state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DigitClass {
    Digit(u8),
    Plus,
    Star,
    Hash,
    /// Synthetic marker put in front of a new number.
    Start,
    /// Matches any class that has no edge of its own.
    Wildcard,
}

impl DigitClass {
    /// Numeric id of the class: digits are `0..=9`, then `+`, `*`, `#`,
    /// start and wildcard as `10..=14`.
    pub fn id(self) -> u8 {
        match self {
            DigitClass::Digit(digit) => digit,
            DigitClass::Plus => 10,
            DigitClass::Star => 11,
            DigitClass::Hash => 12,
            DigitClass::Start => 13,
            DigitClass::Wildcard => 14,
        }
    }

    /// Class of an input character. `None` for characters that do not move
    /// the state machine (pauses and extension markers).
    pub fn of_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(DigitClass::Digit(c as u8 - b'0')),
            '+' => Some(DigitClass::Plus),
            '*' => Some(DigitClass::Star),
            '#' => Some(DigitClass::Hash),
            START_MARKER => Some(DigitClass::Start),
            _ => None,
        }
    }

    /// Class named by an edge key of the table data.
    pub fn from_key(key: &str) -> Result<Self, TableError> {
        if key == WILDCARD_KEY {
            return Ok(DigitClass::Wildcard);
        }
        let mut chars = key.chars();
        match (chars.next().and_then(Self::of_char), chars.next()) {
            (Some(class), None) => Ok(class),
            _ => Err(TableError::UnknownDigitClass(key.to_owned())),
        }
    }
}

/// Node of a state table as written in the data files: a bare string is a
/// leaf-only node, an object may name a leaf (`l`) and carry edges (`s`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNode {
    Leaf(String),
    Branch {
        #[serde(default)]
        l: Option<String>,
        #[serde(default)]
        s: BTreeMap<String, RawNode>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    leaf: Option<Handler>,
    edges: BTreeMap<DigitClass, Node>,
}

impl Node {
    fn from_raw(raw: RawNode) -> Result<Self, TableError> {
        match raw {
            RawNode::Leaf(name) => Ok(Node {
                leaf: Some(parse_handler(&name)?),
                edges: BTreeMap::new(),
            }),
            RawNode::Branch { l, s } => {
                let leaf = l.as_deref().map(parse_handler).transpose()?;
                let mut edges = BTreeMap::new();
                for (key, child) in s {
                    edges.insert(DigitClass::from_key(&key)?, Node::from_raw(child)?);
                }
                Ok(Node { leaf, edges })
            }
        }
    }

    pub fn leaf(&self) -> Option<Handler> {
        self.leaf
    }

    /// A node without edges ends every walk that reaches it.
    pub fn is_terminal(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge for exactly this class, without wildcard fallback.
    pub fn edge(&self, class: DigitClass) -> Option<&Node> {
        self.edges.get(&class)
    }

    /// Transition taken for `class`: its own edge, or else the wildcard.
    pub fn step(&self, class: DigitClass) -> Option<&Node> {
        self.edges
            .get(&class)
            .or_else(|| self.edges.get(&DigitClass::Wildcard))
    }

    fn insert_route(&mut self, route: &str, handler: Handler) -> Result<(), TableError> {
        let mut node = self;
        for key in route.chars() {
            let class = DigitClass::from_key(key.encode_utf8(&mut [0; 4]))?;
            node = node.edges.entry(class).or_default();
        }
        node.leaf = Some(handler);
        Ok(())
    }
}

fn parse_handler(name: &str) -> Result<Handler, TableError> {
    Handler::from_str(name).map_err(|_| TableError::UnknownHandler(name.to_owned()))
}

/// Digit-transition tree driving the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateTable {
    root: Node,
}

impl StateTable {
    pub fn from_raw(raw: RawNode) -> Result<Self, TableError> {
        Ok(Self {
            root: Node::from_raw(raw)?,
        })
    }

    /// Builds a table from `(keys, handler)` routes, one data key per
    /// character, e.g. `("00", Handler::Idd)`. Shared prefixes become shared
    /// nodes, so a route may end on a node other routes continue from.
    pub fn from_routes<'a>(
        routes: impl IntoIterator<Item = (&'a str, Handler)>,
    ) -> Result<Self, TableError> {
        let mut root = Node::default();
        for (route, handler) in routes {
            root.insert_route(route, handler)?;
        }
        Ok(Self { root })
    }

    /// Table of regions that have no data of their own: a start marker, `+`,
    /// the default trunk and IDD codes, and everything else as a local number.
    pub fn fallback() -> Self {
        Self::from_routes([
            ("^", Handler::Start),
            ("+", Handler::Plus),
            ("0", Handler::Trunk),
            ("00", Handler::Idd),
            ("?", Handler::Local),
        ])
        .expect("Invalid constant routes!")
    }

    /// Shared table recognizing country calling codes after an IDD prefix.
    /// Anything that is not a known code ends up as an invalid subscriber
    /// number.
    pub fn for_calling_codes(codes: impl IntoIterator<Item = u16>) -> Self {
        let mut buffer = itoa::Buffer::new();
        let mut root = Node::default();
        for code in codes {
            root.insert_route(buffer.format(code), Handler::Country)
                .expect("Calling codes are digits only");
        }
        root.edges
            .entry(DigitClass::Wildcard)
            .or_default()
            .leaf
            .get_or_insert(Handler::None);
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Node where the parse of a national number continues when the trunk
    /// code is implied: the node reached from the start marker through the
    /// trunk digits. Stops early at the last node that has the needed edge.
    pub fn trunk_skipped(&self, trunk_code: &str) -> &Node {
        let mut node = match self.root.edge(DigitClass::Start) {
            Some(start) if !start.is_terminal() => start,
            _ => &self.root,
        };
        for class in trunk_code.chars().filter_map(DigitClass::of_char) {
            match node.edge(class) {
                Some(next) => node = next,
                None => break,
            }
        }
        node
    }
}
