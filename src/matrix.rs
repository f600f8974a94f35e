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

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Dense row-major matrix of ratings.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingMatrix {
    num_rows: usize,
    num_cols: usize,
    data: Vec<f64>,
}

impl RatingMatrix {

    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        RatingMatrix { num_rows, num_cols, data: vec![0.0; num_rows * num_cols] }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.num_rows && col < self.num_cols {
            Some(self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.num_rows, "row {} out of bounds for {} rows", row, self.num_rows);
        let start = row * self.num_cols;
        &self.data[start..(start + self.num_cols)]
    }

    pub fn rows(&self) -> impl Iterator<Item=&[f64]> + '_ {
        (0..self.num_rows).map(move |row| self.row(row))
    }

    /// The ratings in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.num_cols + col] = value;
    }
}

impl Serialize for RatingMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        let rows: Vec<&[f64]> = self.rows().collect();

        let mut state = serializer.serialize_struct("RatingMatrix", 2)?;
        state.serialize_field("shape", &self.shape())?;
        state.serialize_field("data", &rows)?;
        state.end()
    }
}
