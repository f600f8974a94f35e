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

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

use std::hash::Hash;

pub mod error;
pub mod io;
pub mod matrix;
pub mod table;
pub mod types;
mod usage_tests;

pub use error::{Error, Result};
pub use matrix::RatingMatrix;
pub use table::Table;
pub use types::{Identifier, IdentifierKind, IdentifierMap};

/// Decides how ratings are grouped before averaging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pivot {
    /// One row per user and a single column holding the mean of all ratings of the user.
    UserMean,
    /// One row per user and one column per item, each cell holds the mean rating of the pair.
    UserItem,
}

/// The rating matrix together with the maps from user identifiers to rows and from item
/// identifiers to columns.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingMatrixOutput<U, I = U> {
    pub matrix: RatingMatrix,
    pub user_map: IdentifierMap<U>,
    pub item_map: IdentifierMap<I>,
}

impl<U, I> RatingMatrixOutput<U, I> {
    pub fn into_parts(self) -> (RatingMatrix, IdentifierMap<U>, IdentifierMap<I>) {
        (self.matrix, self.user_map, self.item_map)
    }
}

/// Builds the rating matrix for a table whose first three columns hold user identifiers, item
/// identifiers and ratings, whatever the columns are called. Ratings are averaged per user
/// (see `Pivot::UserMean`); use `build_rating_matrix_with` to pivot over items as well.
pub fn build_rating_matrix(table: &Table) -> Result<RatingMatrixOutput<Identifier>> {
    build_rating_matrix_with(table, Pivot::UserMean)
}

pub fn build_rating_matrix_with(
    table: &Table,
    pivot: Pivot,
) -> Result<RatingMatrixOutput<Identifier>> {

    if table.num_columns() < 3 {
        return Err(Error::InsufficientColumns { found: table.num_columns() });
    }

    let user_kind = IdentifierKind::infer(table.rows().iter().map(|row| row[0].as_str()));
    let item_kind = IdentifierKind::infer(table.rows().iter().map(|row| row[1].as_str()));

    let mut records: Vec<(Identifier, Identifier, Option<f64>)> =
        Vec::with_capacity(table.num_rows());

    for (index, row) in table.rows().iter().enumerate() {

        let rating = parse_rating(&row[2])
            .ok_or_else(|| Error::NonNumericRating { row: index, value: row[2].clone() })?;

        records.push((user_kind.parse(&row[0]), item_kind.parse(&row[1]), rating));
    }

    Ok(aggregate(records, pivot))
}

/// Builds the rating matrix from typed (user, item, rating) records. `NaN` ratings count as
/// missing.
pub fn from_records<U, I, R>(records: R, pivot: Pivot) -> RatingMatrixOutput<U, I>
    where U: Ord + Hash + Clone,
          I: Ord + Hash + Clone,
          R: IntoIterator<Item=(U, I, f64)> {

    let records: Vec<(U, I, Option<f64>)> = records.into_iter()
        .map(|(user, item, rating)| {
            let rating = if rating.is_nan() { None } else { Some(rating) };
            (user, item, rating)
        })
        .collect();

    aggregate(records, pivot)
}

/// Empty cells and `NaN` are missing ratings, `None` means the cell is not numeric at all.
fn parse_rating(cell: &str) -> Option<Option<f64>> {
    let cell = cell.trim();

    if cell.is_empty() {
        return Some(None);
    }

    match cell.parse::<f64>() {
        Ok(rating) if rating.is_nan() => Some(None),
        Ok(rating) => Some(Some(rating)),
        Err(_) => None,
    }
}

fn aggregate<U, I>(records: Vec<(U, I, Option<f64>)>, pivot: Pivot) -> RatingMatrixOutput<U, I>
    where U: Ord + Hash + Clone,
          I: Ord + Hash + Clone {

    let user_map = IdentifierMap::from_values(records.iter().map(|(user, _, _)| user.clone()));
    let item_map = IdentifierMap::from_values(records.iter().map(|(_, item, _)| item.clone()));

    let num_rows = user_map.len();
    let num_cols = match pivot {
        Pivot::UserMean => 1,
        Pivot::UserItem => item_map.len(),
    };

    let mut rating_sums: Vec<f64> = vec![0.0; num_rows * num_cols];
    let mut rating_counts: Vec<usize> = vec![0; num_rows * num_cols];
    let mut num_missing_ratings: usize = 0;

    for (user, item, rating) in records.iter() {

        let rating = match rating {
            Some(rating) => *rating,
            None => {
                num_missing_ratings += 1;
                continue;
            }
        };

        // Both maps were built from these very records
        let (row, item_index) = match (user_map.index_of(user), item_map.index_of(item)) {
            (Some(row), Some(item_index)) => (row as usize, item_index as usize),
            _ => continue,
        };

        let col = match pivot {
            Pivot::UserMean => 0,
            Pivot::UserItem => item_index,
        };

        rating_sums[row * num_cols + col] += rating;
        rating_counts[row * num_cols + col] += 1;
    }

    if num_missing_ratings > 0 {
        trace!("Skipped {} records without a rating.", num_missing_ratings);
    }

    let mut matrix = RatingMatrix::zeros(num_rows, num_cols);

    for row in 0..num_rows {
        for col in 0..num_cols {
            let count = rating_counts[row * num_cols + col];
            if count > 0 {
                matrix.set(row, col, rating_sums[row * num_cols + col] / count as f64);
            }
        }
    }

    debug!(
        "Found {} ratings between {} users and {} items, built a {}x{} matrix ({:?}).",
        records.len(),
        user_map.len(),
        item_map.len(),
        num_rows,
        num_cols,
        pivot,
    );

    RatingMatrixOutput { matrix, user_map, item_map }
}
