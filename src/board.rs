use log::{trace, warn};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::{
    error::HashiError,
    geometry::{segments_cross, Position, Segment},
    moves::{Move, Player},
    puzzle::Puzzle,
    score::ScoreLedger,
    LABEL_CHOICES, MAX_BRIDGES, MAX_LABEL,
};

/// A numbered cell of the grid
///
/// A `label` of 0 means the island has not been given its target yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Island {
    pub position: Position,
    pub label: u8,
}

impl Island {
    pub fn new(row: usize, column: usize, label: u8) -> Self {
        Self {
            position: Position::new(row, column),
            label,
        }
    }

    pub fn is_labeled(&self) -> bool {
        self.label != 0
    }
}

/// The rule a rejected bridge broke
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BridgeRejection {
    SelfLoop,
    NotAligned,
    IslandFull { island: usize },
    Obstructed { by: usize },
    Crossing { from: usize, to: usize },
    PairFull,
}

impl fmt::Display for BridgeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeRejection::SelfLoop => write!(f, "an island cannot be bridged to itself"),
            BridgeRejection::NotAligned => {
                write!(f, "islands share neither a row nor a column")
            }
            BridgeRejection::IslandFull { island } => {
                write!(f, "island {} cannot take another bridge", island)
            }
            BridgeRejection::Obstructed { by } => write!(f, "island {} is in the way", by),
            BridgeRejection::Crossing { from, to } => {
                write!(f, "would cross the bridge between islands {} and {}", from, to)
            }
            BridgeRejection::PairFull => {
                write!(f, "islands already joined by {} bridges", MAX_BRIDGES)
            }
        }
    }
}

/// The shared game state: islands, the bridges between them and both scores
///
/// Islands are identified by their index in the order they were given, which
/// for a parsed puzzle is reading order. Cloning a `Board` gives a fully
/// independent copy, which is how the search explores hypothetical moves.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    islands: Vec<Island>,
    // symmetric, bridges[i][j] is the number of bridges between islands i and j
    bridges: Vec<Vec<u8>>,
    island_index: HashMap<Position, usize>,
    scores: ScoreLedger,
}

impl Board {
    /// Creates an empty board on a `size` x `size` grid
    ///
    /// Fails if an island lies outside the grid, two islands share a cell, or
    /// an island is printed with a label larger than `MAX_LABEL`.
    pub fn new(islands: Vec<Island>, size: usize) -> Result<Self, HashiError> {
        let mut island_index = HashMap::with_capacity(islands.len());

        for (index, island) in islands.iter().enumerate() {
            let Position { row, column } = island.position;
            if row >= size || column >= size {
                return Err(HashiError::InvalidCoordinate {
                    position: island.position,
                    size,
                });
            }
            if island.label > MAX_LABEL {
                return Err(HashiError::InvalidLabelValue(island.label));
            }
            if island_index.insert(island.position, index).is_some() {
                return Err(HashiError::DuplicateIsland(island.position));
            }
        }

        Ok(Self {
            size,
            bridges: vec![vec![0; islands.len()]; islands.len()],
            islands,
            island_index,
            scores: ScoreLedger::new(),
        })
    }

    pub fn from_puzzle(puzzle: Puzzle) -> Result<Self, HashiError> {
        Self::new(puzzle.islands, puzzle.size)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    pub fn num_islands(&self) -> usize {
        self.islands.len()
    }

    pub fn adjacency_matrix(&self) -> &[Vec<u8>] {
        &self.bridges
    }

    pub fn scores(&self) -> &ScoreLedger {
        &self.scores
    }

    /// The index of the island at a position, if there is one
    pub fn island_at(&self, position: Position) -> Option<usize> {
        self.island_index.get(&position).copied()
    }

    /// The number of bridges between two islands
    pub fn bridges_between(&self, a: usize, b: usize) -> u8 {
        self.bridges
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(0)
    }

    /// The total number of bridges touching an island
    pub fn bridge_count(&self, index: usize) -> usize {
        self.bridges[index].iter().map(|&count| count as usize).sum()
    }

    /// Every island pair joined by at least one bridge, as `(i, j, count)` with `i < j`
    pub fn bridges(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.bridges.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .skip(i + 1)
                .filter(|&(_, &count)| count > 0)
                .map(move |(j, &count)| (i, j, count))
        })
    }

    fn check_index(&self, index: usize) -> Result<(), HashiError> {
        if index < self.islands.len() {
            Ok(())
        } else {
            Err(HashiError::InvalidIndex {
                index,
                count: self.islands.len(),
            })
        }
    }

    /// Checks every placement rule for a new bridge between islands `a` and `b`
    pub fn check_bridge(&self, a: usize, b: usize) -> Result<(), HashiError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.bridge_rule(a, b).map_err(HashiError::IllegalBridge)
    }

    /// Checks whether a new bridge between islands `a` and `b` is legal
    pub fn is_valid_bridge(&self, a: usize, b: usize) -> bool {
        self.check_bridge(a, b).is_ok()
    }

    // assumes both indices are in range
    fn bridge_rule(&self, a: usize, b: usize) -> Result<(), BridgeRejection> {
        if a == b {
            return Err(BridgeRejection::SelfLoop);
        }

        let segment = Segment::between(self.islands[a].position, self.islands[b].position)
            .ok_or(BridgeRejection::NotAligned)?;

        // unlabeled islands have no room for bridges
        for &island in [a, b].iter() {
            if self.bridge_count(island) >= self.islands[island].label as usize {
                return Err(BridgeRejection::IslandFull { island });
            }
        }

        if let Some(by) = segment.interior().find_map(|cell| self.island_at(cell)) {
            return Err(BridgeRejection::Obstructed { by });
        }

        for (i, j, _) in self.bridges() {
            if (i, j) == (a.min(b), a.max(b)) {
                continue;
            }
            if let Some(existing) =
                Segment::between(self.islands[i].position, self.islands[j].position)
            {
                if segments_cross(&segment, &existing) {
                    return Err(BridgeRejection::Crossing { from: i, to: j });
                }
            }
        }

        if self.bridges[a][b] >= MAX_BRIDGES {
            return Err(BridgeRejection::PairFull);
        }
        Ok(())
    }

    /// Checks whether `value` may be assigned to the island at `index`
    pub fn check_label(&self, index: usize, value: u8) -> Result<(), HashiError> {
        self.check_index(index)?;
        if self.islands[index].is_labeled() {
            return Err(HashiError::InvalidLabelTarget(index));
        }
        if !LABEL_CHOICES.contains(&value) {
            return Err(HashiError::InvalidLabelValue(value));
        }
        Ok(())
    }

    /// Gives an unlabeled island its label, without any scoring
    pub fn assign_label(&mut self, index: usize, value: u8) -> Result<(), HashiError> {
        self.check_label(index, value)?;
        self.islands[index].label = value;
        Ok(())
    }

    /// Plays a move for `player`, crediting them for every island it completes
    ///
    /// The board is left unchanged if the move is rejected.
    pub fn apply_move(&mut self, player: Player, action: Move) -> Result<(), HashiError> {
        let result = match action {
            Move::Bridge { from, to } => self.check_bridge(from, to).map(|_| {
                self.bridges[from][to] += 1;
                self.bridges[to][from] += 1;
                self.score_completed(player, from);
                self.score_completed(player, to);
            }),
            Move::Label { island, value } => self
                .assign_label(island, value)
                .map(|_| self.score_completed(player, island)),
        };

        match &result {
            Ok(()) => trace!("{} played {}", player, action),
            Err(err) => warn!("{} attempted {}: {}", player, action, err),
        }
        result
    }

    // credit the island's label if it now holds exactly that many bridges
    fn score_completed(&mut self, player: Player, index: usize) {
        let label = self.islands[index].label;
        if self.bridge_count(index) == label as usize {
            self.scores.credit(player, label as i32);
        }
    }
}

impl FromStr for Board {
    type Err = HashiError;

    fn from_str(grid: &str) -> Result<Self, Self::Err> {
        Self::from_puzzle(grid.parse()?)
    }
}

impl fmt::Display for Board {
    /// Draws the grid with islands on even cells and bridges between them
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * 2).saturating_sub(1);
        let mut cells = vec![vec!['.'; width]; width];

        for (i, j, count) in self.bridges() {
            let (a, b) = (self.islands[i].position, self.islands[j].position);
            match Segment::between(a, b) {
                Some(Segment::Horizontal { row, start, end }) => {
                    let symbol = if count == 1 { '─' } else { '═' };
                    for column in start * 2 + 1..end * 2 {
                        cells[row * 2][column] = symbol;
                    }
                }
                Some(Segment::Vertical { column, start, end }) => {
                    let symbol = if count == 1 { '│' } else { '║' };
                    for row in start * 2 + 1..end * 2 {
                        cells[row][column * 2] = symbol;
                    }
                }
                None => {}
            }
        }

        for island in self.islands.iter() {
            let Position { row, column } = island.position;
            cells[row * 2][column * 2] =
                std::char::from_digit(island.label as u32, 10).unwrap_or('?');
        }

        for row in cells {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
