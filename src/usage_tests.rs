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

#[cfg(test)]
mod tests {

    use crate::{build_rating_matrix, build_rating_matrix_with, Pivot};
    use crate::table::Table;
    use crate::types::Identifier;

    #[test]
    fn programmatic_usage() {

        /* Our input data comprises of ratings which users gave to items. Only the position of
           the columns matters: users first, then items, then ratings. Identifiers can be strings
           of arbitrary length and structure, or integers. */
        let table = Table::from_rows(
            vec!["user", "item", "rating"],
            vec![
                vec!["alice", "apple", "5"],
                vec!["alice", "dog", "3"],
                vec!["alice", "pony", "4"],
                vec!["bob", "apple", "2"],
                vec!["bob", "pony", "5"],
                vec!["charles", "pony", "1"],
                vec!["charles", "bike", "4"],
            ],
        ).unwrap();

        /* By default we average the ratings per user, which gives us a matrix with a single
           column. The identifier maps tell us which row belongs to which user. */
        let (matrix, user_map, item_map) = build_rating_matrix(&table).unwrap().into_parts();

        println!(
            "Found {} ratings between {} users and {} items.",
            table.num_rows(),
            user_map.len(),
            item_map.len(),
        );

        for (user, row) in user_map.iter() {
            println!("Mean rating of {}: {:?}", user, matrix.row(row as usize));
        }

        let bob = user_map.index_of(&Identifier::from("bob")).unwrap() as usize;
        assert_eq!(matrix.row(bob), &[3.5]);

        /* If we need one column per item, we pivot over items as well. Items nobody rated
           are filled with zeros. */
        let output = build_rating_matrix_with(&table, Pivot::UserItem).unwrap();

        let pony = output.item_map.index_of(&Identifier::from("pony")).unwrap() as usize;
        let bike = output.item_map.index_of(&Identifier::from("bike")).unwrap() as usize;

        assert_eq!(output.matrix.shape(), (3, 4));
        assert_eq!(output.matrix.get(bob, pony), Some(5.0));
        assert_eq!(output.matrix.get(bob, bike), Some(0.0));

        /* The maps also work in reverse, from positions back to the original identifiers. */
        assert_eq!(output.item_map.identifier(bike as u32), Some(&Identifier::from("bike")));
    }
}
