/// Dimensions of the grid, supplied once at startup and fixed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub columns: i32,
    pub rows: i32,
}

impl GridConfig {
    pub fn new(columns: i32, rows: i32) -> GridConfig {
        GridConfig { columns, rows }
    }
}

impl Default for GridConfig {
    /// 40 columns by 25 rows.
    fn default() -> GridConfig {
        GridConfig {
            columns: 40,
            rows: 25,
        }
    }
}
