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

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use serde::ser::Serialize;

use crate::error::Result;
use crate::matrix::RatingMatrix;
use crate::table::Table;
use crate::types::IdentifierMap;

/// Opens a CSV file for reading. Ratings exports like MovieLens' `ratings.csv` come with a header
/// and comma separation, tab-separated dumps usually have no header.
pub fn csv_reader<P>(path: P, delimiter: u8, has_headers: bool) -> Result<csv::Reader<File>>
    where P: AsRef<Path> {

    let reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .delimiter(delimiter)
        .from_path(path)?;

    Ok(reader)
}

/// Reads all records into a `Table`. Without a header, the columns are named by their position.
pub fn table_from_csv<R>(reader: &mut csv::Reader<R>) -> Result<Table>
    where R: Read {

    let mut table: Option<Table> = if reader.has_headers() {
        Some(Table::new(reader.headers()?.iter()))
    } else {
        None
    };

    for record in reader.records() {
        let record = record?;

        let table = table.get_or_insert_with(|| {
            Table::new((0..record.len()).map(|index| index.to_string()))
        });

        table.push_row(record.iter())?;
    }

    let table = table.unwrap_or_default();

    debug!("Read {} records with {} columns.", table.num_rows(), table.num_columns());

    Ok(table)
}

/// Struct used for JSON serialization of identifier maps. Field names will be used in JSON.
#[derive(Serialize)]
struct MappedIdentifier<'a, K: 'a> {
    identifier: &'a K,
    position: u32,
}

/// Writes one JSON object per identifier, in order of position.
pub fn write_identifier_map<K, W>(map: &IdentifierMap<K>, mut out: W) -> Result<()>
    where K: Serialize, W: Write {

    for (identifier, position) in map.iter() {
        let line = serde_json::to_string(&MappedIdentifier { identifier, position })?;
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

/// Writes the matrix as CSV, one line per row and no header.
pub fn write_matrix<W>(matrix: &RatingMatrix, out: W) -> Result<()>
    where W: Write {

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(out);

    for row in matrix.rows() {
        writer.write_record(row.iter().map(|rating| rating.to_string()))?;
    }

    writer.flush()?;

    Ok(())
}
