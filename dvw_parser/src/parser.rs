use dvw_schema::{MatchMeta, Quality, Skill, TeamSide};

use crate::error::ParseError;
use crate::grammar::{
    self, ROSTER_COL_FIRST_NAME, ROSTER_COL_LAST_NAME, ROSTER_COL_NUMBER, ROSTER_MIN_COLS,
    SECTION_MATCH, SECTION_PLAYERS_HOME, SECTION_PLAYERS_VISITOR, SECTION_PREAMBLE,
    SECTION_SCOUT, SECTION_TEAMS,
};

#[derive(Debug, Clone)]
pub(crate) struct Row {
    pub(crate) line: usize,
    pub(crate) text: String,
}

/// The file split into its recognized sections, rows still unparsed.
#[derive(Debug, Default)]
pub(crate) struct RawSections {
    pub(crate) match_rows: Vec<Row>,
    pub(crate) teams_rows: Vec<Row>,
    pub(crate) home_rows: Vec<Row>,
    pub(crate) visitor_rows: Vec<Row>,
    pub(crate) scout_rows: Vec<Row>,
    pub(crate) saw_teams: bool,
    pub(crate) saw_home: bool,
    pub(crate) saw_visitor: bool,
    pub(crate) saw_scout: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct TeamRow {
    pub(crate) code: String,
    pub(crate) name: String,
}

#[derive(Debug, Clone)]
pub(crate) struct RosterRow {
    pub(crate) line: usize,
    pub(crate) number: u8,
    pub(crate) last_name: String,
    pub(crate) first_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScoutEntry {
    Touch {
        line: usize,
        side: TeamSide,
        number: u8,
        skill: Skill,
        quality: Quality,
    },
    Point {
        side: TeamSide,
        scores: Option<(u8, u8)>,
    },
    SetMarker,
}

pub(crate) fn split_sections(src: &str) -> Result<RawSections, ParseError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Current {
        None,
        Ignored,
        Match,
        Teams,
        Home,
        Visitor,
        Scout,
    }

    let mut sections = RawSections::default();
    let mut current = Current::None;

    for (i, raw_line) in src.lines().enumerate() {
        let line_no = i + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(name) = section_header(trimmed) {
            current = match name {
                SECTION_PREAMBLE => Current::Ignored,
                SECTION_MATCH => Current::Match,
                SECTION_TEAMS => {
                    sections.saw_teams = true;
                    Current::Teams
                }
                SECTION_PLAYERS_HOME => {
                    sections.saw_home = true;
                    Current::Home
                }
                SECTION_PLAYERS_VISITOR => {
                    sections.saw_visitor = true;
                    Current::Visitor
                }
                SECTION_SCOUT => {
                    sections.saw_scout = true;
                    Current::Scout
                }
                other => {
                    log::debug!("skipping unrecognized section [{other}] at line {line_no}");
                    Current::Ignored
                }
            };
            continue;
        }

        let row = Row {
            line: line_no,
            text: trimmed.to_string(),
        };
        match current {
            Current::None => {
                return Err(ParseError::new(
                    "E1007",
                    format!("content outside any section: {trimmed}"),
                    line_no,
                )
                .with_context(trimmed.to_string()));
            }
            Current::Ignored => {}
            Current::Match => sections.match_rows.push(row),
            Current::Teams => sections.teams_rows.push(row),
            Current::Home => sections.home_rows.push(row),
            Current::Visitor => sections.visitor_rows.push(row),
            Current::Scout => sections.scout_rows.push(row),
        }
    }

    Ok(sections)
}

fn section_header(trimmed: &str) -> Option<&str> {
    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return None;
    }
    Some(inner)
}

/// All `[3MATCH]` fields are optional; a malformed row never aborts parsing.
pub(crate) fn parse_match_meta(rows: &[Row]) -> MatchMeta {
    let Some(row) = rows.first() else {
        return MatchMeta::default();
    };
    let mut cols = row.text.split(';').map(str::trim);
    let mut next_opt = || {
        cols.next()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    };
    MatchMeta {
        date: next_opt(),
        season: next_opt(),
        competition: next_opt(),
    }
}

pub(crate) fn parse_team_row(row: &Row) -> Result<TeamRow, ParseError> {
    let cols: Vec<&str> = row.text.split(';').collect();
    if cols.len() < 2 {
        return Err(ParseError::new(
            "E1005",
            format!("teams row needs code;name (context={})", row.text),
            row.line,
        )
        .with_section(SECTION_TEAMS.to_string())
        .with_context(row.text.clone()));
    }
    let code = cols[0].trim();
    let name = cols[1].trim();
    if code.is_empty() || name.is_empty() {
        return Err(ParseError::new(
            "E1005",
            format!("teams row has empty code or name (context={})", row.text),
            row.line,
        )
        .with_section(SECTION_TEAMS.to_string())
        .with_context(row.text.clone()));
    }
    Ok(TeamRow {
        code: code.to_string(),
        name: name.to_string(),
    })
}

pub(crate) fn parse_roster_row(row: &Row, side: TeamSide) -> Result<RosterRow, ParseError> {
    let cols: Vec<&str> = row.text.split(';').collect();
    if cols.len() < ROSTER_MIN_COLS {
        return Err(ParseError::new(
            "E1004",
            format!(
                "roster row needs {ROSTER_MIN_COLS} columns, got {} (context={})",
                cols.len(),
                row.text
            ),
            row.line,
        )
        .with_side(side)
        .with_context(row.text.clone()));
    }

    let number_field = cols[ROSTER_COL_NUMBER].trim();
    let number: u8 = number_field.parse().map_err(|_| {
        ParseError::new(
            "E1004",
            format!("invalid shirt number '{number_field}' (context={})", row.text),
            row.line,
        )
        .with_side(side)
        .with_context(row.text.clone())
    })?;
    if number > grammar::MAX_SHIRT_NUMBER {
        return Err(ParseError::new(
            "E1004",
            format!("shirt number {number} out of range (context={})", row.text),
            row.line,
        )
        .with_side(side)
        .with_context(row.text.clone()));
    }

    let last_name = cols[ROSTER_COL_LAST_NAME].trim();
    let first_name = cols[ROSTER_COL_FIRST_NAME].trim();
    if last_name.is_empty() || first_name.is_empty() {
        return Err(ParseError::new(
            "E1004",
            format!("roster row missing player name (context={})", row.text),
            row.line,
        )
        .with_side(side)
        .with_context(row.text.clone()));
    }

    Ok(RosterRow {
        line: row.line,
        number,
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
    })
}

/// Parses one scout-log row. `Ok(None)` means a recognized but
/// non-statistical code (lineup, substitution, timeout).
pub(crate) fn parse_scout_row(row: &Row) -> Result<Option<ScoutEntry>, ParseError> {
    let code = row.text.split(';').next().unwrap_or("").trim();
    if code.is_empty() {
        return Ok(None);
    }

    // Set markers are scouted as `**1set`, `**2set`, ...
    if let Some(rest) = code.strip_prefix("**") {
        if rest.contains("set") {
            return Ok(Some(ScoutEntry::SetMarker));
        }
        return Err(unrecognized(row, code));
    }

    let mut chars = code.chars();
    let Some(mark) = chars.next() else {
        return Ok(None);
    };
    let Some(side) = grammar::side_from_mark(mark) else {
        return Err(unrecognized(row, code));
    };

    let rest = chars.as_str();
    let Some(first) = rest.chars().next() else {
        // A bare team mark carries no scouting information.
        return Err(unrecognized(row, code));
    };

    if first.is_ascii_digit() {
        return parse_touch_code(row, code, side, rest).map(Some);
    }

    match first {
        'p' => Ok(Some(ScoutEntry::Point {
            side,
            scores: parse_point_scores(&rest[1..], row),
        })),
        // Lineup, substitution and timeout codes carry no touch.
        'z' | 'c' | 'T' => {
            log::debug!("skipping non-touch code {code} at line {}", row.line);
            Ok(None)
        }
        _ => Err(unrecognized(row, code)),
    }
}

fn unrecognized(row: &Row, code: &str) -> ParseError {
    ParseError::new(
        "E1001",
        format!("unrecognized scout entry '{code}' (context={})", row.text),
        row.line,
    )
    .with_context(row.text.clone())
}

fn parse_touch_code(
    row: &Row,
    code: &str,
    side: TeamSide,
    rest: &str,
) -> Result<ScoutEntry, ParseError> {
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let number: u8 = if digits.len() <= 2 {
        digits.parse().map_err(|_| {
            ParseError::new(
                "E1003",
                format!("invalid shirt number in '{code}'"),
                row.line,
            )
            .with_side(side)
            .with_context(row.text.clone())
        })?
    } else {
        return Err(ParseError::new(
            "E1003",
            format!("shirt number in '{code}' has more than two digits"),
            row.line,
        )
        .with_side(side)
        .with_context(row.text.clone()));
    };

    let tail = &rest[digits.len()..];
    let mut tail_chars = tail.chars();
    let Some(skill_letter) = tail_chars.next() else {
        return Err(ParseError::new(
            "E1002",
            format!("touch code '{code}' missing skill letter"),
            row.line,
        )
        .with_side(side)
        .with_context(row.text.clone()));
    };
    let Some(skill) = grammar::skill_from_letter(skill_letter) else {
        return Err(ParseError::new(
            "E1002",
            format!("unknown skill letter '{skill_letter}' in '{code}'"),
            row.line,
        )
        .with_side(side)
        .with_context(row.text.clone()));
    };

    // Quality is the first non-tempo character after the skill letter;
    // anything past it (combination, target zone) is ignored.
    let mut quality_char = tail_chars.next();
    if let Some(c) = quality_char {
        if grammar::is_tempo_letter(c) {
            quality_char = tail_chars.next();
        }
    }
    let Some(q) = quality_char else {
        return Err(ParseError::new(
            "E1006",
            format!("touch code '{code}' missing quality"),
            row.line,
        )
        .with_side(side)
        .with_context(row.text.clone()));
    };

    let quality = Quality::from(q);
    if !quality.is_canonical() {
        log::warn!(
            "non-canonical quality '{q}' in '{code}' at line {}",
            row.line
        );
    }

    Ok(ScoutEntry::Touch {
        line: row.line,
        side,
        number,
        skill,
        quality,
    })
}

/// Score suffix of a point code, e.g. `*p05:04`. The scores are optional
/// context; a malformed suffix degrades to a plain point for `side`.
fn parse_point_scores(suffix: &str, row: &Row) -> Option<(u8, u8)> {
    if suffix.is_empty() {
        return None;
    }
    let parsed = suffix
        .split_once(':')
        .and_then(|(h, v)| Some((h.trim().parse().ok()?, v.trim().parse().ok()?)));
    if parsed.is_none() {
        log::warn!(
            "malformed score suffix '{suffix}' at line {}, keeping running score",
            row.line
        );
    }
    parsed
}
