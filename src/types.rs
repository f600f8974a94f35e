/**
 * RatingMatrix
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use fnv::{FnvHashMap, FnvHashSet};
use serde::ser::{Serialize, Serializer};

/// Identifier read from a table cell. All cells of a column share one variant, see
/// `IdentifierKind`. Across variants, integers sort before floats and floats before text.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Identifier {
    Int(i64),
    /// Never `NaN`, ordered with `f64::total_cmp`.
    Float(f64),
    Text(String),
}

impl Identifier {

    fn rank(&self) -> u8 {
        match self {
            Identifier::Int(_) => 0,
            Identifier::Float(_) => 1,
            Identifier::Text(_) => 2,
        }
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Int(a), Identifier::Int(b)) => a.cmp(b),
            (Identifier::Float(a), Identifier::Float(b)) => a.total_cmp(b),
            (Identifier::Text(a), Identifier::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Identifier::Int(value) => value.hash(state),
            Identifier::Float(value) => value.to_bits().hash(state),
            Identifier::Text(value) => value.hash(state),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Identifier::Int(value) => write!(f, "{}", value),
            Identifier::Float(value) => write!(f, "{}", value),
            Identifier::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Int(value)
    }
}

impl<'a> From<&'a str> for Identifier {
    fn from(value: &'a str) -> Self {
        Identifier::Text(value.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Text(value)
    }
}

/// The type shared by all identifiers of a column. A column is `Int` if every cell parses as an
/// integer, `Float` if every cell parses as a number, and `Text` otherwise. Surrounding
/// whitespace is ignored in all cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierKind {
    Int,
    Float,
    Text,
}

impl IdentifierKind {

    pub fn infer<'a, I>(cells: I) -> Self
        where I: IntoIterator<Item=&'a str> {

        let mut kind = IdentifierKind::Int;

        for cell in cells {
            let cell = cell.trim();

            if kind == IdentifierKind::Int && cell.parse::<i64>().is_err() {
                kind = IdentifierKind::Float;
            }

            if kind == IdentifierKind::Float && parse_float(cell).is_none() {
                return IdentifierKind::Text;
            }
        }

        kind
    }

    /// Cells that do not fit the kind fall back to text.
    pub fn parse(self, cell: &str) -> Identifier {
        let cell = cell.trim();

        let parsed = match self {
            IdentifierKind::Int => cell.parse::<i64>().ok().map(Identifier::Int),
            IdentifierKind::Float => parse_float(cell).map(Identifier::Float),
            IdentifierKind::Text => None,
        };

        parsed.unwrap_or_else(|| Identifier::Text(cell.to_owned()))
    }
}

fn parse_float(cell: &str) -> Option<f64> {
    match cell.parse::<f64>() {
        Ok(value) if value.is_nan() => None,
        // -0.0 and 0.0 are the same identifier
        Ok(value) if value == 0.0 => Some(0.0),
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Maps the distinct identifiers of a column to consecutive positions `0..len()`, handed out in
/// ascending order of the identifiers. Lookups work in both directions.
#[derive(Clone, Debug)]
pub struct IdentifierMap<K> {
    positions: FnvHashMap<K, u32>,
    identifiers: Vec<K>,
}

impl<K> IdentifierMap<K>
    where K: Ord + Hash + Clone {

    pub fn from_values<I>(values: I) -> Self
        where I: IntoIterator<Item=K> {

        let distinct: FnvHashSet<K> = values.into_iter().collect();

        let mut identifiers: Vec<K> = distinct.into_iter().collect();
        identifiers.sort_unstable();

        let mut positions: FnvHashMap<K, u32> =
            FnvHashMap::with_capacity_and_hasher(identifiers.len(), Default::default());

        for (position, identifier) in identifiers.iter().enumerate() {
            positions.insert(identifier.clone(), position as u32);
        }

        IdentifierMap { positions, identifiers }
    }

    pub fn index_of<Q>(&self, identifier: &Q) -> Option<u32>
        where K: Borrow<Q>, Q: Hash + Eq + ?Sized {
        self.positions.get(identifier).cloned()
    }
}

impl<K> IdentifierMap<K> {

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifier(&self, position: u32) -> Option<&K> {
        self.identifiers.get(position as usize)
    }

    /// All identifiers, the index into the slice is the position.
    pub fn identifiers(&self) -> &[K] {
        &self.identifiers
    }

    /// (identifier, position) pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item=(&K, u32)> + '_ {
        self.identifiers.iter()
            .enumerate()
            .map(|(position, identifier)| (identifier, position as u32))
    }
}

impl<K: PartialEq> PartialEq for IdentifierMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.identifiers == other.identifiers
    }
}

impl<K: Serialize> Serialize for IdentifierMap<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        serializer.collect_seq(self.iter())
    }
}


#[cfg(test)]
mod tests {

    use super::{Identifier, IdentifierKind, IdentifierMap};

    #[test]
    fn positions_follow_ascending_order() {
        let map = IdentifierMap::from_values(vec!["pony", "apple", "dog", "apple"]);

        assert_eq!(map.len(), 3);
        assert_eq!(map.identifiers(), &["apple", "dog", "pony"]);
        assert_eq!(map.index_of("apple"), Some(0));
        assert_eq!(map.index_of("dog"), Some(1));
        assert_eq!(map.index_of("pony"), Some(2));
        assert_eq!(map.index_of("bike"), None);
    }

    #[test]
    fn reverse_lookup() {
        let map = IdentifierMap::from_values(vec![30_u64, 10, 20]);

        assert_eq!(map.identifier(0), Some(&10));
        assert_eq!(map.identifier(2), Some(&30));
        assert_eq!(map.identifier(3), None);

        for (identifier, position) in map.iter() {
            assert_eq!(map.index_of(identifier), Some(position));
        }
    }

    #[test]
    fn string_keys_can_be_looked_up_by_str() {
        let map = IdentifierMap::from_values(vec![String::from("bob"), String::from("alice")]);
        assert_eq!(map.index_of("alice"), Some(0));
        assert_eq!(map.index_of("bob"), Some(1));
    }

    #[test]
    fn empty_map() {
        let map: IdentifierMap<String> = IdentifierMap::from_values(Vec::new());
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }

    fn parse_column(cells: &[&str]) -> Vec<Identifier> {
        let kind = IdentifierKind::infer(cells.iter().cloned());
        cells.iter().map(|cell| kind.parse(cell)).collect()
    }

    #[test]
    fn integer_columns_sort_numerically() {
        let cells = vec!["10", "2", "-1", " 7 "];

        assert_eq!(IdentifierKind::infer(cells.iter().cloned()), IdentifierKind::Int);

        let map = IdentifierMap::from_values(parse_column(&cells));
        assert_eq!(map.identifiers(), &[
            Identifier::Int(-1),
            Identifier::Int(2),
            Identifier::Int(7),
            Identifier::Int(10),
        ]);
    }

    #[test]
    fn float_columns_sort_numerically() {
        let cells = vec!["10.5", "2.5", "3", "-0.0", "0"];

        assert_eq!(IdentifierKind::infer(cells.iter().cloned()), IdentifierKind::Float);

        let map = IdentifierMap::from_values(parse_column(&cells));
        assert_eq!(map.identifiers(), &[
            Identifier::Float(0.0),
            Identifier::Float(2.5),
            Identifier::Float(3.0),
            Identifier::Float(10.5),
        ]);
    }

    #[test]
    fn one_text_cell_keeps_the_whole_column_as_text() {
        let cells = vec!["7", "007", "+7", "abc"];

        assert_eq!(IdentifierKind::infer(cells.iter().cloned()), IdentifierKind::Text);

        let map = IdentifierMap::from_values(parse_column(&cells));
        assert_eq!(map.len(), 4);
        assert_eq!(map.identifiers(), &[
            Identifier::from("+7"),
            Identifier::from("007"),
            Identifier::from("7"),
            Identifier::from("abc"),
        ]);
    }

    #[test]
    fn whitespace_around_identifiers_is_ignored() {
        let map = IdentifierMap::from_values(parse_column(&["5", " 5", "5 "]));
        assert_eq!(map.identifiers(), &[Identifier::Int(5)]);

        let map = IdentifierMap::from_values(parse_column(&["bob", " bob", "alice"]));
        assert_eq!(map.identifiers(), &[Identifier::from("alice"), Identifier::from("bob")]);
    }

    #[test]
    fn variants_are_ordered_int_float_text() {
        let map = IdentifierMap::from_values(vec![
            Identifier::from("a"),
            Identifier::Float(-3.5),
            Identifier::Int(100),
        ]);

        assert_eq!(map.identifiers(), &[
            Identifier::Int(100),
            Identifier::Float(-3.5),
            Identifier::from("a"),
        ]);
    }

    #[test]
    fn serializes_as_pairs() {
        let map = IdentifierMap::from_values(vec![Identifier::from("u2"), Identifier::Int(5)]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"[[5,0],["u2",1]]"#);
    }
}
