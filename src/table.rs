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

use crate::{Pivot, RatingMatrixOutput};
use crate::error::{Error, Result};
use crate::types::Identifier;

/// In-memory table of records with named columns. Cells are kept as text, the roles of the
/// columns are decided by position when the table is turned into a rating matrix.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {

    pub fn new<I, S>(columns: I) -> Self
        where I: IntoIterator<Item=S>, S: Into<String> {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn from_rows<C, R, I, S>(columns: C, rows: R) -> Result<Self>
        where C: IntoIterator,
              C::Item: Into<String>,
              R: IntoIterator<Item=I>,
              I: IntoIterator<Item=S>,
              S: Into<String> {

        let mut table = Table::new(columns);
        for row in rows {
            table.push_row(row)?;
        }

        Ok(table)
    }

    /// Appends a record, which must have exactly one field per column.
    pub fn push_row<I, S>(&mut self, row: I) -> Result<()>
        where I: IntoIterator<Item=S>, S: Into<String> {

        let row: Vec<String> = row.into_iter().map(Into::into).collect();

        if row.len() != self.columns.len() {
            return Err(Error::RowLength {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn build_rating_matrix(&self) -> Result<RatingMatrixOutput<Identifier>> {
        crate::build_rating_matrix(self)
    }

    pub fn build_rating_matrix_with(&self, pivot: Pivot) -> Result<RatingMatrixOutput<Identifier>> {
        crate::build_rating_matrix_with(self, pivot)
    }
}
