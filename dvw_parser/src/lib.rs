use std::{fs, path::Path};

use dvw_schema::{Match, Player, Team, TeamSide, TouchEvent};

mod error;
mod grammar;
mod parser;
mod roster;

pub use error::{ParseError, ParseErrorKind};

use parser::{RawSections, RosterRow, ScoutEntry, TeamRow};
use roster::RosterIndex;

use crate::grammar::{SECTION_PLAYERS_HOME, SECTION_PLAYERS_VISITOR, SECTION_SCOUT, SECTION_TEAMS};

pub fn parse_file(path: impl AsRef<Path>) -> Result<Match, ParseError> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|e| {
        ParseError::new("E2001", format!("failed to read scouting file: {e}"), 0)
            .with_file(path.display().to_string())
    })?;
    parse_str(&src)
}

/// Single deterministic pass: sections are split first, the rosters are fully
/// resolved, then the scout log is welded to them. No partial `Match` ever
/// escapes.
pub fn parse_str(src: &str) -> Result<Match, ParseError> {
    let sections = parser::split_sections(src)?;
    require_sections(&sections)?;

    let (home_row, visitor_row) = parse_teams(&sections)?;

    let mut home_roster = Vec::with_capacity(sections.home_rows.len());
    for row in &sections.home_rows {
        home_roster.push(parser::parse_roster_row(row, TeamSide::Home)?);
    }
    let mut visitor_roster = Vec::with_capacity(sections.visitor_rows.len());
    for row in &sections.visitor_rows {
        visitor_roster.push(parser::parse_roster_row(row, TeamSide::Visitor)?);
    }

    let index = RosterIndex::build(&home_roster, &visitor_roster)?;
    let home = build_team(TeamSide::Home, home_row, &home_roster);
    let visitor = build_team(TeamSide::Visitor, visitor_row, &visitor_roster);

    let events = resolve_scout(&sections, &index, &home, &visitor)?;

    Ok(Match {
        meta: parser::parse_match_meta(&sections.match_rows),
        home,
        visitor,
        events,
    })
}

fn require_sections(sections: &RawSections) -> Result<(), ParseError> {
    if !sections.saw_teams {
        return Err(ParseError::new("E3001", format!("missing [{SECTION_TEAMS}] section"), 0)
            .with_section(SECTION_TEAMS.to_string()));
    }
    if !sections.saw_home {
        return Err(ParseError::new(
            "E3002",
            format!("missing [{SECTION_PLAYERS_HOME}] section"),
            0,
        )
        .with_section(SECTION_PLAYERS_HOME.to_string())
        .with_side(TeamSide::Home));
    }
    if !sections.saw_visitor {
        return Err(ParseError::new(
            "E3002",
            format!("missing [{SECTION_PLAYERS_VISITOR}] section"),
            0,
        )
        .with_section(SECTION_PLAYERS_VISITOR.to_string())
        .with_side(TeamSide::Visitor));
    }
    if !sections.saw_scout {
        return Err(ParseError::new("E3003", format!("missing [{SECTION_SCOUT}] section"), 0)
            .with_section(SECTION_SCOUT.to_string()));
    }
    Ok(())
}

fn parse_teams(sections: &RawSections) -> Result<(TeamRow, TeamRow), ParseError> {
    if sections.teams_rows.len() != 2 {
        let line = sections.teams_rows.first().map(|r| r.line).unwrap_or(0);
        return Err(ParseError::new(
            "E3004",
            format!(
                "[{SECTION_TEAMS}] must have exactly two rows, got {}",
                sections.teams_rows.len()
            ),
            line,
        )
        .with_section(SECTION_TEAMS.to_string()));
    }
    let home = parser::parse_team_row(&sections.teams_rows[0])?;
    let visitor = parser::parse_team_row(&sections.teams_rows[1])?;
    Ok((home, visitor))
}

fn build_team(side: TeamSide, row: TeamRow, roster: &[RosterRow]) -> Team {
    let players = roster
        .iter()
        .map(|r| Player::new(side, r.number, r.first_name.clone(), r.last_name.clone()))
        .collect();
    Team {
        code: row.code,
        name: row.name,
        players,
    }
}

fn resolve_scout(
    sections: &RawSections,
    index: &RosterIndex,
    home: &Team,
    visitor: &Team,
) -> Result<Vec<TouchEvent>, ParseError> {
    let mut events = Vec::with_capacity(sections.scout_rows.len());
    let mut set_number: u8 = 1;
    let mut home_score: u8 = 0;
    let mut visitor_score: u8 = 0;

    for row in &sections.scout_rows {
        let Some(entry) = parser::parse_scout_row(row)? else {
            continue;
        };
        match entry {
            ScoutEntry::Touch {
                line,
                side,
                number,
                skill,
                quality,
            } => {
                let players = match side {
                    TeamSide::Home => &home.players,
                    TeamSide::Visitor => &visitor.players,
                };
                let player = index.resolve(side, number, players, line)?;
                events.push(TouchEvent {
                    player_id: player.id.clone(),
                    side,
                    number,
                    skill,
                    quality,
                    set_number,
                    home_score,
                    visitor_score,
                });
            }
            ScoutEntry::Point { side, scores } => match scores {
                Some((h, v)) => {
                    home_score = h;
                    visitor_score = v;
                }
                None => match side {
                    TeamSide::Home => home_score = home_score.saturating_add(1),
                    TeamSide::Visitor => visitor_score = visitor_score.saturating_add(1),
                },
            },
            ScoutEntry::SetMarker => {
                set_number = set_number.saturating_add(1);
                home_score = 0;
                visitor_score = 0;
            }
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests;
