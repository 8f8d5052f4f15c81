//! Grammar tables for the "DataVolley 3" flavor of the scouting format.
//!
//! The format is external and fixed; everything shape-specific lives here as
//! named tables so a format revision is a new table, not a parser rewrite.
//! The reference fixtures under `tests/fixtures/` are the ground truth for
//! these tables.

use dvw_schema::{Skill, TeamSide};

pub(crate) const SECTION_PREAMBLE: &str = "3DATAVOLLEYSCOUT";
pub(crate) const SECTION_MATCH: &str = "3MATCH";
pub(crate) const SECTION_TEAMS: &str = "3TEAMS";
pub(crate) const SECTION_PLAYERS_HOME: &str = "3PLAYERS-H";
pub(crate) const SECTION_PLAYERS_VISITOR: &str = "3PLAYERS-V";
pub(crate) const SECTION_SCOUT: &str = "3SCOUT";

/// Column layout of a roster row (`;`-delimited).
pub(crate) const ROSTER_COL_NUMBER: usize = 1;
pub(crate) const ROSTER_COL_LAST_NAME: usize = 9;
pub(crate) const ROSTER_COL_FIRST_NAME: usize = 10;
pub(crate) const ROSTER_MIN_COLS: usize = 11;

/// Shirt numbers are scouted as at most two digits.
pub(crate) const MAX_SHIRT_NUMBER: u8 = 99;

pub(crate) const HOME_MARK: char = '*';
pub(crate) const VISITOR_MARK: char = 'a';

pub(crate) fn side_from_mark(c: char) -> Option<TeamSide> {
    match c {
        HOME_MARK => Some(TeamSide::Home),
        VISITOR_MARK => Some(TeamSide::Visitor),
        _ => None,
    }
}

pub(crate) fn skill_from_letter(c: char) -> Option<Skill> {
    match c {
        'S' => Some(Skill::Serve),
        'R' => Some(Skill::Reception),
        'E' => Some(Skill::Set),
        'A' => Some(Skill::Attack),
        'B' => Some(Skill::Block),
        'D' => Some(Skill::Dig),
        _ => None,
    }
}

/// Optional tempo/type letter between the skill letter and the quality
/// symbol (high ball, medium, quick, tense, super, negative, overpass).
pub(crate) fn is_tempo_letter(c: char) -> bool {
    matches!(c, 'H' | 'M' | 'Q' | 'T' | 'U' | 'N' | 'O')
}
