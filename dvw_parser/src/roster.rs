use dvw_schema::{Player, TeamSide};

use crate::error::ParseError;
use crate::parser::RosterRow;

/// `(TeamSide, shirt number) -> roster slot`, built once after the roster
/// sections are read and consulted by index while resolving the scout log.
pub(crate) struct RosterIndex {
    slots: [[Option<usize>; 100]; 2],
}

impl RosterIndex {
    pub(crate) fn build(
        home: &[RosterRow],
        visitor: &[RosterRow],
    ) -> Result<Self, ParseError> {
        let mut index = RosterIndex {
            slots: [[None; 100]; 2],
        };
        index.fill(TeamSide::Home, home)?;
        index.fill(TeamSide::Visitor, visitor)?;
        Ok(index)
    }

    fn fill(&mut self, side: TeamSide, rows: &[RosterRow]) -> Result<(), ParseError> {
        let table = &mut self.slots[side_slot(side)];
        for (slot, row) in rows.iter().enumerate() {
            let cell = &mut table[row.number as usize];
            if cell.is_some() {
                return Err(ParseError::new(
                    "E4002",
                    format!("duplicate shirt number {} in roster", row.number),
                    row.line,
                )
                .with_side(side));
            }
            *cell = Some(slot);
        }
        Ok(())
    }

    pub(crate) fn resolve<'a>(
        &self,
        side: TeamSide,
        number: u8,
        players: &'a [Player],
        line: usize,
    ) -> Result<&'a Player, ParseError> {
        self.slots[side_slot(side)][number as usize]
            .map(|slot| &players[slot])
            .ok_or_else(|| {
                ParseError::new(
                    "E4001",
                    format!("touch references shirt number {number} absent from roster"),
                    line,
                )
                .with_side(side)
            })
    }
}

fn side_slot(side: TeamSide) -> usize {
    match side {
        TeamSide::Home => 0,
        TeamSide::Visitor => 1,
    }
}
