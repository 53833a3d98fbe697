//! Cycle-following in-place matrix transposition.

/// Rewrite a column-major `rows x cols` buffer as row-major, in place.
///
/// Treats the transposition as a permutation of buffer indices and rotates
/// each permutation cycle by one position using a single temporary scalar.
/// Index `i` is preceded in its cycle by `rows * (i % cols) + i / cols`.
///
/// A buffer with a single row or column is already in both orders, so the
/// loop body never fires for it.
///
/// # Panics
///
/// Panics if `data.len() != rows * cols`.
pub fn to_row_major(data: &mut [f64], rows: usize, cols: usize) {
    assert_eq!(data.len(), rows * cols, "buffer is not {}x{}", rows, cols);
    let n = data.len();
    if n <= 1 {
        return;
    }
    for i in 1..n - 1 {
        // Predecessor of i in its cycle.
        let mut x = rows * (i % cols) + i / cols;
        // x <= i: fixed point, or the cycle was entered from a smaller index.
        if x <= i {
            continue;
        }
        // Walk the cycle; ending below i means it was already rotated.
        while x > i {
            x = rows * (x % cols) + x / cols;
        }
        if x < i {
            continue;
        }
        // x == i: an unvisited cycle. Rotate its elements by one.
        let tmp = data[i];
        let mut s = i;
        let mut x = rows * (i % cols) + i / cols;
        while x != i {
            data[s] = data[x];
            s = x;
            x = rows * (x % cols) + x / cols;
        }
        data[s] = tmp;
    }
}

/// Rewrite a row-major `rows x cols` buffer as column-major, in place.
///
/// This is the inverse of [to_row_major]: a row-major `rows x cols` buffer
/// is the same bytes as a column-major `cols x rows` buffer.
///
/// # Panics
///
/// Panics if `data.len() != rows * cols`.
pub fn to_column_major(data: &mut [f64], rows: usize, cols: usize) {
    to_row_major(data, cols, rows);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transpose_2x3() {
        // Row-major 2x3 is the same buffer as column-major 3x2.
        let mut data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        to_row_major(&mut data, 3, 2);
        assert_eq!(data, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn transpose_3x2() {
        let mut data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        to_row_major(&mut data, 2, 3);
        assert_eq!(data, [1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn single_row_and_column_are_unchanged() {
        let mut row = [1.0, 2.0, 3.0, 4.0];
        to_row_major(&mut row, 1, 4);
        assert_eq!(row, [1.0, 2.0, 3.0, 4.0]);

        let mut col = [1.0, 2.0, 3.0, 4.0];
        to_row_major(&mut col, 4, 1);
        assert_eq!(col, [1.0, 2.0, 3.0, 4.0]);

        let mut single = [7.0];
        to_row_major(&mut single, 1, 1);
        assert_eq!(single, [7.0]);

        let mut empty: [f64; 0] = [];
        to_row_major(&mut empty, 0, 0);
    }

    #[test]
    fn round_trip_restores_the_buffer() {
        for rows in 1..8 {
            for cols in 1..8 {
                let original: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
                let mut data = original.clone();
                to_row_major(&mut data, rows, cols);
                to_column_major(&mut data, rows, cols);
                assert_eq!(data, original, "{}x{}", rows, cols);
            }
        }
    }

    #[test]
    fn matches_reference_transpose() {
        for rows in 1..6 {
            for cols in 1..6 {
                // Column-major input.
                let mut data: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
                let reference: Vec<f64> = (0..rows * cols)
                    .map(|i| {
                        let (r, c) = (i / cols, i % cols);
                        data[c * rows + r]
                    })
                    .collect();
                to_row_major(&mut data, rows, cols);
                assert_eq!(data, reference, "{}x{}", rows, cols);
            }
        }
    }

    #[test]
    #[should_panic]
    fn wrong_buffer_length_panics() {
        let mut data = [1.0, 2.0, 3.0];
        to_row_major(&mut data, 2, 2);
    }
}
