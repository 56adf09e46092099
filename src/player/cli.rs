use std::io::{self, BufRead, Stdout, StdinLock, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::bitboard::HitSet;
use crate::board::BoardView;
use crate::common::{Coord, GuessResult, MoveError};
use crate::config::SHIP_SIZES;
use crate::fleet::{is_valid, random_ship_beside, Fleet};
use crate::game::{GameEngine, GameStatus};
use crate::grid::in_bounds;
use crate::ship::Ship;

use super::{validate_move, Player};

/// Interactive player reading `r c` style input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    fn print_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Coordinates are 'row col', both 0-9, e.g. '3 7'.")?;
        writeln!(self.output, "Ships are a comma separated list of cells, e.g. '0 0, 0 1, 0 2'.")?;
        writeln!(self.output, "Ships may not touch, not even diagonally.")?;
        writeln!(self.output, "Symbols: ~ water  S ship  X hit  M miss")
    }
}

/// Parse `"r c"` into a signed pair so out-of-range values can be reported.
pub fn parse_pair(input: &str) -> Result<(isize, isize), MoveError> {
    let malformed = || MoveError::Malformed(input.trim().to_string());
    let mut parts = input.split_whitespace();
    let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let r = r.parse::<isize>().map_err(|_| malformed())?;
    let c = c.parse::<isize>().map_err(|_| malformed())?;
    Ok((r, c))
}

/// Parse and validate a move against the cells already fired at.
pub fn parse_move(input: &str, fired: &HitSet) -> Result<Coord, MoveError> {
    let (r, c) = parse_pair(input)?;
    validate_move(r, c, fired)
}

/// Parse `"r c, r c, ..."` into a ship of `length` cells that does not touch
/// any ship in `placed`.
pub fn parse_ship(input: &str, length: usize, placed: &[Ship]) -> Result<Ship, MoveError> {
    let pairs = input
        .split(',')
        .map(parse_pair)
        .collect::<Result<Vec<_>, _>>()?;
    if pairs.len() != length {
        return Err(MoveError::WrongLength {
            expected: length,
            got: pairs.len(),
        });
    }
    if let Some(&(row, col)) = pairs.iter().find(|&&(r, c)| !in_bounds(r, c)) {
        return Err(MoveError::OutOfBounds { row, col });
    }
    let cells: Vec<Coord> = pairs.iter().map(|&(r, c)| (r as usize, c as usize)).collect();
    let ship = Ship::new(cells).map_err(|_| MoveError::Malformed(input.trim().to_string()))?;
    if ship.len() != length {
        return Err(MoveError::WrongLength {
            expected: length,
            got: ship.len(),
        });
    }
    let mut candidate = placed.to_vec();
    candidate.push(ship.clone());
    if !is_valid(&candidate) {
        return Err(MoveError::ShipsTouch);
    }
    Ok(ship)
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_ships(&mut self, rng: &mut SmallRng) -> anyhow::Result<Fleet> {
        writeln!(self.output, "Enter the ships in format r c, r c, ...")?;
        writeln!(self.output, "(empty line places the ship randomly, 'help' for help)")?;
        let mut ships: Vec<Ship> = Vec::with_capacity(SHIP_SIZES.len());
        for size in SHIP_SIZES {
            loop {
                let line = self.prompt(&format!("Ship size {}: ", size))?;
                if line.eq_ignore_ascii_case("help") {
                    self.print_help()?;
                    continue;
                }
                if line.is_empty() {
                    match random_ship_beside(rng, size, &ships)? {
                        Some(ship) => {
                            writeln!(self.output, "Placed randomly at {:?}", ship.cells())?;
                            ships.push(ship);
                            break;
                        }
                        None => {
                            writeln!(self.output, "No room to place the ship randomly.")?;
                            continue;
                        }
                    }
                }
                match parse_ship(&line, size, &ships) {
                    Ok(ship) => {
                        ships.push(ship);
                        break;
                    }
                    Err(e) => writeln!(self.output, "{}.", e)?,
                }
            }
        }
        Ok(Fleet::standard(ships)?)
    }

    fn select_target(&mut self, _rng: &mut SmallRng, fired: &HitSet) -> anyhow::Result<Coord> {
        loop {
            let line = self.prompt("Enter your move r c: ")?;
            if line.eq_ignore_ascii_case("help") {
                self.print_help()?;
                continue;
            }
            match parse_move(&line, fired) {
                Ok(coord) => return Ok(coord),
                Err(e) => writeln!(self.output, "{}.", e)?,
            }
        }
    }

    fn show_turn(&mut self, engine: &GameEngine) -> anyhow::Result<()> {
        writeln!(self.output, "\n--- Turn {} ---", engine.turn())?;
        writeln!(self.output, "\nPlayer Board:")?;
        write!(self.output, "{}", BoardView::project(engine.player_field(), true))?;
        writeln!(self.output, "\nBot Board:")?;
        write!(self.output, "{}", BoardView::project(engine.opponent_field(), false))?;
        Ok(())
    }

    fn handle_guess_result(&mut self, _coord: Coord, result: GuessResult) -> anyhow::Result<()> {
        match result {
            GuessResult::Miss => writeln!(self.output, "Miss.")?,
            GuessResult::Hit => writeln!(self.output, "Hit.")?,
            GuessResult::ShipDestroyed(_) => {
                writeln!(self.output, "Hit.")?;
                writeln!(self.output, "Ship destroyed.")?;
            }
        }
        Ok(())
    }

    fn handle_opponent_guess(&mut self, (r, c): Coord, result: GuessResult) -> anyhow::Result<()> {
        writeln!(self.output, "Bot moves: {} {}", r, c)?;
        match result {
            GuessResult::Miss => writeln!(self.output, "Bot miss.")?,
            GuessResult::Hit => writeln!(self.output, "Bot hit!")?,
            GuessResult::ShipDestroyed(_) => {
                writeln!(self.output, "Bot hit!")?;
                writeln!(self.output, "Bot destroyed a ship.")?;
            }
        }
        Ok(())
    }

    fn show_outcome(&mut self, engine: &GameEngine) -> anyhow::Result<()> {
        match engine.status() {
            GameStatus::PlayerWon => writeln!(self.output, "Player wins.")?,
            GameStatus::OpponentWon => writeln!(self.output, "Bot wins.")?,
            GameStatus::InProgress => {}
        }
        writeln!(self.output, "\n--- Final Boards ---")?;
        writeln!(self.output, "\nPlayer Board:")?;
        write!(self.output, "{}", BoardView::project(engine.player_field(), true))?;
        writeln!(self.output, "\nBot Board:")?;
        write!(self.output, "{}", BoardView::project(engine.opponent_field(), true))?;
        Ok(())
    }
}
