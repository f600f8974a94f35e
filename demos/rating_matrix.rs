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

extern crate ratingmatrix;

use std::io::stdout;

use ratingmatrix::{io, Pivot, Table};

fn main() -> ratingmatrix::Result<()> {

    let table = read_ratings()?;

    // One row per user, one column per item
    let output = table.build_rating_matrix_with(Pivot::UserItem)?;

    println!(
        "Found {} ratings between {} users and {} items.",
        table.num_rows(),
        output.user_map.len(),
        output.item_map.len(),
    );

    println!("Users:");
    io::write_identifier_map(&output.user_map, stdout())?;

    println!("Items:");
    io::write_identifier_map(&output.item_map, stdout())?;

    println!("Ratings:");
    io::write_matrix(&output.matrix, stdout())?;

    Ok(())
}

fn read_ratings() -> ratingmatrix::Result<Table> {
    Table::from_rows(
        vec!["userId", "movieId", "rating", "timestamp"],
        vec![
            vec!["1", "31", "2.5", "1260759144"],
            vec!["1", "1029", "3.0", "1260759179"],
            vec!["1", "1061", "3.0", "1260759182"],
            vec!["2", "10", "4.0", "835355493"],
            vec!["2", "31", "5.0", "835355681"],
            vec!["3", "1029", "4.5", "1298861675"],
        ],
    )
}
