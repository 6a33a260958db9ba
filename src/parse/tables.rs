use scraper::{ElementRef, Html};

use super::Error;
use crate::static_selector;

/// Tables of `document` that are not nested inside another table, in document
/// order. Fails unless exactly `expected` are present.
pub fn locate_tables(document: &Html, expected: usize) -> Result<Vec<ElementRef<'_>>, Error> {
    static_selector!(TABLE_SELECTOR <- "table");
    let tables: Vec<_> = document
        .select(&TABLE_SELECTOR)
        .filter(|table| {
            !table.ancestors().any(|node| {
                node.value()
                    .as_element()
                    .is_some_and(|el| el.name() == "table")
            })
        })
        .collect();

    if tables.len() != expected {
        return Err(Error::WrongTableCount {
            expected,
            found: tables.len(),
        });
    }
    Ok(tables)
}
