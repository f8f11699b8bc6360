//! Static tile grid — the level's solid geometry.
//!
//! The grid is built once from a line-oriented text description at level-load
//! time and read-shared by every entity afterwards. Storage is row-major
//! (`row * width + col`); queries take `(col, row)` with row 0 at the top,
//! matching the order of lines in the description.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

/// Pixels per grid cell unless overridden with [`TileGrid::with_tile_size`].
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// A single cell classification. Movement only cares about solidity, but the
/// kinds stay distinct so entity logics can treat them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Ground,
    Brick,
}

impl TileKind {
    /// Map a description character to a kind. Unrecognized characters
    /// (including the implicit padding on short lines) are empty.
    pub fn from_char(ch: char) -> Self {
        match ch {
            'A' => TileKind::Ground,
            'B' => TileKind::Brick,
            _ => TileKind::Empty,
        }
    }

    pub fn is_solid(self) -> bool {
        self != TileKind::Empty
    }
}

/// A tile query fell outside the grid. Always a caller bug: probes are
/// expected to bounds-check (or use [`TileGrid::get`]) rather than rely on
/// clamping, which would mask collision errors at the grid edges.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("tile index out of range: ({col}, {row}) in {width}x{height} grid")]
pub struct OutOfRangeError {
    pub col: i32,
    pub row: i32,
    pub width: u32,
    pub height: u32,
}

/// The tile description resource could not be read.
#[derive(Debug, Error)]
#[error("failed to read tile map {path:?}")]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Rectangular grid of [`TileKind`] cells.
///
/// Immutable after load; [`TileGrid::set_tile`] exists only as an escape
/// hatch for dynamic tile destruction features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_size: u32,
    tiles: Vec<TileKind>,
}

impl TileGrid {
    /// The degraded 0x0 grid: every query is out of range, nothing is solid.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            tile_size: DEFAULT_TILE_SIZE,
            tiles: Vec::new(),
        }
    }

    /// Build a grid from a text description.
    ///
    /// Lines starting with `#` are comments and discarded before dimensions
    /// are computed. Width is the length of the longest remaining line;
    /// shorter lines are padded with empty cells out to the full rectangle.
    pub fn parse(text: &str) -> Self {
        let rows: Vec<&str> = text.lines().filter(|line| !line.starts_with('#')).collect();
        let width = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0) as u32;
        let height = rows.len() as u32;

        let mut tiles = vec![TileKind::Empty; (width as usize) * (height as usize)];
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                tiles[row * width as usize + col] = TileKind::from_char(ch);
            }
        }

        debug!("parsed tile map: {}x{} cells", width, height);
        Self {
            width,
            height,
            tile_size: DEFAULT_TILE_SIZE,
            tiles,
        }
    }

    /// Read and parse a tile description file.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Load a tile description, degrading to the empty 0x0 grid if the
    /// resource cannot be read. A level with no solid geometry still runs;
    /// a missing map file never takes down the frame loop.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path) {
            Ok(grid) => grid,
            Err(err) => {
                warn!("{err}; using empty grid");
                Self::empty()
            }
        }
    }

    /// Set the cell size in pixels.
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell size in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Whether `(col, row)` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as u32) < self.width && (row as u32) < self.height
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        self.contains(col, row)
            .then(|| row as usize * self.width as usize + col as usize)
    }

    /// Non-contract lookup: cells outside the grid are simply no tile.
    /// Contact probes use this near the grid edges.
    pub fn get(&self, col: i32, row: i32) -> Option<TileKind> {
        self.index(col, row).map(|i| self.tiles[i])
    }

    /// Look up a cell, failing fast on out-of-range indices.
    pub fn tile_at(&self, col: i32, row: i32) -> Result<TileKind, OutOfRangeError> {
        self.get(col, row).ok_or(OutOfRangeError {
            col,
            row,
            width: self.width,
            height: self.height,
        })
    }

    /// Overwrite a cell. Escape hatch for dynamic tile destruction; the base
    /// load path never calls this.
    pub fn set_tile(&mut self, col: i32, row: i32, kind: TileKind) -> Result<(), OutOfRangeError> {
        match self.index(col, row) {
            Some(i) => {
                self.tiles[i] = kind;
                Ok(())
            }
            None => Err(OutOfRangeError {
                col,
                row,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Cell column containing world-space pixel `px` (floor division, so
    /// negative pixels land in negative columns, outside the grid).
    pub fn col_at(&self, px: i32) -> i32 {
        px.div_euclid(self.tile_size as i32)
    }

    /// Cell row containing world-space pixel `py`.
    pub fn row_at(&self, py: i32) -> i32 {
        py.div_euclid(self.tile_size as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_pads_short_lines() {
        let grid = TileGrid::parse("AAB\n# comment\n B ");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.tile_at(0, 0), Ok(TileKind::Ground));
        assert_eq!(grid.tile_at(2, 0), Ok(TileKind::Brick));
        assert_eq!(grid.tile_at(1, 1), Ok(TileKind::Brick));
        assert_eq!(grid.tile_at(0, 1), Ok(TileKind::Empty));
        assert_eq!(grid.tile_at(2, 1), Ok(TileKind::Empty));
    }

    #[test]
    fn width_is_longest_line() {
        let grid = TileGrid::parse("A\nAAAA\nAA");
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        // Short lines are padded with empty, never left uninitialized.
        assert_eq!(grid.tile_at(3, 0), Ok(TileKind::Empty));
        assert_eq!(grid.tile_at(3, 2), Ok(TileKind::Empty));
    }

    #[test]
    fn tile_at_rejects_every_out_of_range_boundary() {
        let grid = TileGrid::parse("AAB\n B ");
        for (col, row) in [(-1, 0), (3, 0), (0, -1), (0, 2)] {
            let err = grid.tile_at(col, row).unwrap_err();
            assert_eq!((err.col, err.row), (col, row));
            assert_eq!((err.width, err.height), (3, 2));
        }
    }

    #[test]
    fn set_tile_respects_the_same_bounds_contract() {
        let mut grid = TileGrid::parse("AA\nAA");
        grid.set_tile(1, 1, TileKind::Empty).unwrap();
        assert_eq!(grid.tile_at(1, 1), Ok(TileKind::Empty));
        assert!(grid.set_tile(2, 0, TileKind::Brick).is_err());
    }

    #[test]
    fn load_failure_degrades_to_empty_grid() {
        let grid = TileGrid::load("definitely/not/a/real/map.txt");
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert!(grid.tile_at(0, 0).is_err());
    }

    #[test]
    fn try_load_reports_the_failing_path() {
        let err = TileGrid::try_load("missing/level-1.txt").unwrap_err();
        assert!(err.path.ends_with("level-1.txt"));
    }

    #[test]
    fn load_round_trips_through_a_file() {
        let path = std::env::temp_dir().join("ledge-core-tilemap-test.txt");
        fs::write(&path, "# level 1\nA B\n").unwrap();
        let grid = TileGrid::load(&path);
        assert_eq!((grid.width(), grid.height()), (3, 1));
        assert_eq!(grid.tile_at(2, 0), Ok(TileKind::Brick));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn pixel_to_cell_uses_floor_division() {
        let grid = TileGrid::parse("AA\nAA").with_tile_size(10);
        assert_eq!(grid.col_at(0), 0);
        assert_eq!(grid.col_at(9), 0);
        assert_eq!(grid.col_at(10), 1);
        assert_eq!(grid.col_at(-1), -1);
        assert_eq!(grid.row_at(19), 1);
    }

    #[test]
    fn empty_grid_contains_nothing() {
        let grid = TileGrid::empty();
        assert!(!grid.contains(0, 0));
        assert_eq!(grid.get(0, 0), None);
    }
}
