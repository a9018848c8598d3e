//! Puzzle text format: tiles, adjacency rules and the print layout
//!
//! ```text
//! <tile count> <edge size>
//! <tile name>
//! <edge size rows, short rows padded with blanks>   (once per tile)
//! <vertical rule count>
//! <top places>
//! <bottom places>
//! <horizontal rule count>
//! <horizontal rule tokens>
//! <layout lines until end of input>
//! ```
//!
//! Empty lines are ignored everywhere.

use crate::algorithm::executor::{SearchConfig, SearchEngine};
use crate::algorithm::rules::Rule;
use crate::io::configuration::{MAX_PLACES, WILDCARD_PIXEL};
use crate::io::error::{Result, TileFitError, WithLine, invalid_parameter, malformed};
use crate::spatial::{Place, Tile};
use std::path::Path;

/// The puzzle shipped with the crate: six 6×6 tiles, 4 vertical and 8
/// horizontal rules
pub const BUNDLED_PUZZLE: &str = include_str!("../../data/bundled_puzzle.txt");

/// Parsed tiles, rules and print layout
#[derive(Debug, Clone)]
pub struct Puzzle {
    tiles: Vec<Tile>,
    rules: Vec<Rule>,
    layout: Vec<String>,
}

impl Puzzle {
    /// Assemble a puzzle from parts
    ///
    /// # Errors
    ///
    /// Returns an error if there are no tiles or more than fit the layout,
    /// tile sizes differ, or a rule or layout line names a place without a tile.
    pub fn new(tiles: Vec<Tile>, rules: Vec<Rule>, layout: Vec<String>) -> Result<Self> {
        if tiles.is_empty() || tiles.len() > MAX_PLACES {
            return Err(invalid_parameter(
                "tiles",
                &tiles.len(),
                &format!("a puzzle needs between 1 and {MAX_PLACES} tiles"),
            ));
        }

        let size = tiles.first().map_or(0, Tile::size);
        if let Some(tile) = tiles.iter().find(|tile| tile.size() != size) {
            return Err(TileFitError::DimensionMismatch {
                context: "puzzle tile size",
                expected: size,
                found: tile.size(),
            });
        }

        for rule in &rules {
            if let Some(place) = rule
                .places()
                .into_iter()
                .find(|place| place.index() >= tiles.len())
            {
                return Err(malformed(
                    &rule.to_string(),
                    format!("place {place} has no tile"),
                ));
            }
        }

        for line in &layout {
            if let Some(place) = line
                .chars()
                .filter_map(Place::from_label)
                .find(|place| place.index() >= tiles.len())
            {
                return Err(malformed(line, format!("place {place} has no tile")));
            }
        }

        Ok(Self {
            tiles,
            rules,
            layout,
        })
    }

    /// Parse the puzzle text format
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` naming the offending line and token when the
    /// header, a tile block, a rule line or a rule count is wrong, and any
    /// error from [`Puzzle::new`].
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = LineReader::new(text);

        let (header_line, header) = lines.require("tile count and edge size")?;
        let (tile_count, edge_size) = parse_header(header).at_line(header_line)?;

        let mut tiles = Vec::with_capacity(tile_count);
        for _ in 0..tile_count {
            let (name_line, name) = lines.require("tile name")?;
            let mut rows = Vec::with_capacity(edge_size);
            for _ in 0..edge_size {
                let (row_line, row) = lines.require("tile row")?;
                rows.push(pad_row(row, edge_size).at_line(row_line)?);
            }
            tiles.push(Tile::parse(name.trim(), &rows).at_line(name_line)?);
        }

        let mut rules = Vec::new();

        let (vertical_line, vertical) = lines.require("vertical rule count")?;
        let vertical_count = parse_count(vertical).at_line(vertical_line)?;
        if vertical_count > 0 {
            let (top_line, tops) = lines.require("vertical rule top places")?;
            let (bottom_line, bottoms) = lines.require("vertical rule bottom places")?;
            let tops = parse_places(tops, vertical_count).at_line(top_line)?;
            let bottoms = parse_places(bottoms, vertical_count).at_line(bottom_line)?;
            rules.extend(
                tops.into_iter()
                    .zip(bottoms)
                    .map(|(top, bottom)| Rule::vertical(top, bottom)),
            );
        }

        let (horizontal_line, horizontal) = lines.require("horizontal rule count")?;
        let horizontal_count = parse_count(horizontal).at_line(horizontal_line)?;
        if horizontal_count > 0 {
            let (token_line, tokens) = lines.require("horizontal rules")?;
            let tokens: Vec<&str> = tokens.split_whitespace().collect();
            if tokens.len() != horizontal_count {
                return Err(TileFitError::MalformedInput {
                    line: Some(token_line),
                    token: tokens.join(" "),
                    reason: format!(
                        "expected {horizontal_count} horizontal rules, found {}",
                        tokens.len()
                    ),
                });
            }
            for token in tokens {
                rules.push(Rule::parse_horizontal(token).at_line(token_line)?);
            }
        }

        let layout = lines.map(|(_, line)| line.to_string()).collect();
        Self::new(tiles, rules, layout)
    }

    /// Read and parse a puzzle file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, otherwise any error
    /// from [`Puzzle::parse`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| TileFitError::FileSystem {
            path: path.to_path_buf(),
            operation: "read puzzle",
            source,
        })?;
        Self::parse(&text)
    }

    /// The puzzle shipped with the crate
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled text no longer parses.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_PUZZLE)
    }

    /// Tiles in input order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Vertical rules followed by horizontal rules, in input order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Print layout lines with place labels
    pub fn layout(&self) -> &[String] {
        &self.layout
    }

    /// Edge length shared by every tile
    pub fn edge_size(&self) -> usize {
        self.tiles.first().map_or(0, Tile::size)
    }

    /// Search engine over this puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the tiles or rules.
    pub fn engine(&self, config: SearchConfig) -> Result<SearchEngine<'_>> {
        SearchEngine::new(&self.tiles, &self.rules, config)
    }
}

/// Non-empty lines with their 1-based line numbers
struct LineReader<'t> {
    lines: std::iter::Enumerate<std::str::Lines<'t>>,
}

impl<'t> LineReader<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }

    fn require(&mut self, what: &str) -> Result<(usize, &'t str)> {
        self.next().ok_or_else(|| {
            malformed(
                "<end of input>",
                format!("input ended while reading {what}"),
            )
        })
    }
}

impl<'t> Iterator for LineReader<'t> {
    type Item = (usize, &'t str);

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .by_ref()
            .find(|(_, line)| !line.is_empty())
            .map(|(index, line)| (index + 1, line))
    }
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let tile_count = parse_number(line, fields.next(), "tile count")?;
    let edge_size = parse_number(line, fields.next(), "edge size")?;
    if fields.next().is_some() {
        return Err(malformed(line, "header has more than two fields"));
    }
    if tile_count == 0 || tile_count > MAX_PLACES {
        return Err(malformed(
            line,
            format!("tile count must be between 1 and {MAX_PLACES}"),
        ));
    }
    if edge_size == 0 {
        return Err(malformed(line, "edge size must be positive"));
    }
    Ok((tile_count, edge_size))
}

fn parse_count(line: &str) -> Result<usize> {
    let mut fields = line.split_whitespace();
    let count = parse_number(line, fields.next(), "rule count")?;
    if fields.next().is_some() {
        return Err(malformed(line, "rule count line has extra fields"));
    }
    Ok(count)
}

fn parse_number(line: &str, field: Option<&str>, what: &str) -> Result<usize> {
    let field = field.ok_or_else(|| malformed(line, format!("missing {what}")))?;
    field
        .parse()
        .map_err(|source| malformed(field, format!("{what} is not a number: {source}")))
}

fn parse_places(line: &str, count: usize) -> Result<Vec<Place>> {
    let places = line
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next().and_then(Place::from_label), chars.next()) {
                (Some(place), None) => Ok(place),
                _ => Err(malformed(token, "expected a single place label")),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    if places.len() == count {
        Ok(places)
    } else {
        Err(malformed(
            line,
            format!("expected {count} places, found {}", places.len()),
        ))
    }
}

// Trailing blanks beyond the edge size are dropped; anything else is too wide.
fn pad_row(row: &str, edge_size: usize) -> Result<String> {
    let width = row.chars().count();
    if width <= edge_size {
        let padding = std::iter::repeat_n(WILDCARD_PIXEL, edge_size - width);
        return Ok(row.chars().chain(padding).collect());
    }

    let kept: String = row.chars().take(edge_size).collect();
    if row.chars().skip(edge_size).all(|symbol| symbol == WILDCARD_PIXEL) {
        Ok(kept)
    } else {
        Err(malformed(
            row,
            format!("row is {width} wide, edge size is {edge_size}"),
        ))
    }
}
