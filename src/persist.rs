//! CSV persistence: ship layouts (one row per occupied cell) and the
//! append-only round log.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};

use crate::board::BoardView;
use crate::common::Coord;
use crate::fleet::Fleet;
use crate::game::RoundReport;
use crate::ship::Ship;

/// One occupied cell of a persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipCellRecord {
    pub ship_id: usize,
    pub row: usize,
    pub col: usize,
}

/// Write `fleet` as `ship_id,row,col` rows under a header.
pub fn write_layout<W: Write>(fleet: &Fleet, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (ship_id, ship) in fleet.ships().iter().enumerate() {
        for &(row, col) in ship.cells() {
            wtr.serialize(ShipCellRecord { ship_id, row, col })?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Read a layout back. Ship ids must run from 0 without gaps and the ships
/// must satisfy the placement rules; composition is not checked here.
pub fn read_layout<R: Read>(reader: R) -> anyhow::Result<Fleet> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut cells: BTreeMap<usize, Vec<Coord>> = BTreeMap::new();
    for record in rdr.deserialize::<ShipCellRecord>() {
        let rec = record.context("malformed layout row")?;
        cells.entry(rec.ship_id).or_default().push((rec.row, rec.col));
    }
    let mut ships = Vec::with_capacity(cells.len());
    for (expected, (ship_id, coords)) in cells.into_iter().enumerate() {
        if ship_id != expected {
            bail!("layout skips ship id {} (found {})", expected, ship_id);
        }
        let ship = Ship::new(coords).map_err(|e| anyhow!("ship {}: {}", ship_id, e))?;
        ships.push(ship);
    }
    Fleet::new(ships).map_err(|e| anyhow!(e))
}

pub fn save_layout(fleet: &Fleet, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_layout(fleet, file).with_context(|| format!("writing {}", path.display()))
}

pub fn load_layout(path: &Path) -> anyhow::Result<Fleet> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_layout(file).with_context(|| format!("reading {}", path.display()))
}

pub const ROUND_LOG_HEADER: [&str; 7] = [
    "turn",
    "player_move",
    "player_result",
    "bot_move",
    "bot_result",
    "player_board",
    "bot_board",
];

/// One row of the round log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub turn: u32,
    pub player_move: String,
    pub player_result: String,
    pub bot_move: String,
    pub bot_result: String,
    pub player_board: String,
    pub bot_board: String,
}

impl RoundRecord {
    pub fn new(report: &RoundReport, player_board: &BoardView, bot_board: &BoardView) -> Self {
        Self {
            turn: report.turn,
            player_move: format_coord(report.player_move),
            player_result: report.player_result.to_string(),
            bot_move: format_coord(report.opponent_move),
            bot_result: report.opponent_result.to_string(),
            player_board: player_board.serialize(),
            bot_board: bot_board.serialize(),
        }
    }
}

fn format_coord((r, c): Coord) -> String {
    format!("{} {}", r, c)
}

/// Append-only log with one row per completed round.
pub struct RoundLog<W: Write> {
    wtr: csv::Writer<W>,
}

impl RoundLog<File> {
    /// Truncate `path` and start a fresh log there.
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        Self::new(file)
    }
}

impl<W: Write> RoundLog<W> {
    /// Start a log on `writer`, writing the header immediately.
    pub fn new(writer: W) -> anyhow::Result<Self> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        wtr.write_record(ROUND_LOG_HEADER)?;
        wtr.flush()?;
        Ok(Self { wtr })
    }

    /// Append `record` and flush it through to the writer.
    pub fn append(&mut self, record: &RoundRecord) -> anyhow::Result<()> {
        self.wtr.serialize(record)?;
        self.wtr.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> anyhow::Result<W> {
        self.wtr
            .into_inner()
            .map_err(|e| anyhow!("flushing round log: {}", e.error()))
    }
}
