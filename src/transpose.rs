/// Turns `rows` of fixed width `N` into `N` columns, moving every cell.
pub fn transposed<T, const N: usize>(rows: Vec<[T; N]>) -> [Vec<T>; N] {
    let height = rows.len();
    let mut columns: [Vec<T>; N] = std::array::from_fn(|_| Vec::with_capacity(height));
    for row in rows {
        for (column, cell) in columns.iter_mut().zip(row) {
            column.push(cell);
        }
    }
    columns
}
