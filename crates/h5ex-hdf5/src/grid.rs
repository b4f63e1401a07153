use ndarray::Array2;

pub const DIM0: usize = 4;
pub const DIM1: usize = 7;
pub const DIMS: [usize; 2] = [DIM0, DIM1];

/// Fills a `dims[0]` x `dims[1]` grid with `v(i, j) = i*j - j`
pub fn generate(dims: [usize; 2]) -> Array2<i64> {
    Array2::from_shape_fn((dims[0], dims[1]), |(i, j)| {
        let (i, j) = (i as i64, j as i64);
        i * j - j
    })
}

/// Renders a grid the way numpy prints a 2D integer array
///
/// ```text
/// [[ 0 -1 -2]
///  [ 0  0  0]]
/// ```
pub fn format_grid(grid: &Array2<i64>) -> String {
    if grid.is_empty() {
        return "[]".to_owned();
    }
    let width = grid
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or_default();

    let nrows = grid.nrows();
    let mut out = String::new();
    for (row_idx, row) in grid.rows().into_iter().enumerate() {
        out.push_str(if row_idx == 0 { "[[" } else { " [" });
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
        out.push_str(&cells.join(" "));
        out.push(']');
        if row_idx + 1 == nrows {
            out.push(']');
        } else {
            out.push('\n');
        }
    }
    out
}

/// Renders `grid` under a `name:` header line, newline terminated
pub fn format_named_grid(name: &str, grid: &Array2<i64>) -> String {
    format!("{name}:\n{}\n", format_grid(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use h5ex_test_util::{EXPECTED_STDOUT, expected_a1};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_matches_formula() {
        let grid = generate(DIMS);
        assert_eq!(grid.dim(), (DIM0, DIM1));
        assert_eq!(grid, expected_a1());
    }

    #[test]
    fn test_format_named_grid() {
        let grid = generate(DIMS);
        assert_eq!(format_named_grid("A1", &grid), EXPECTED_STDOUT);
    }

    #[test]
    fn test_format_single_row_and_empty() {
        let single = generate([1, 3]);
        assert_eq!(format_grid(&single), "[[ 0 -1 -2]]");

        let empty = generate([0, 7]);
        assert_eq!(format_grid(&empty), "[]");
    }

    #[test]
    fn test_width_follows_widest_value() {
        let grid = ndarray::arr2(&[[1, -100], [20, 3]]);
        assert_eq!(format_grid(&grid), "[[   1 -100]\n [  20    3]]");
    }
}
