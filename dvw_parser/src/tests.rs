use super::*;
use dvw_schema::{Quality, Skill};

const MINIMAL: &str = "\
[3TEAMS]
AME;Amethyst Volley
OPA;Opal Volley
[3PLAYERS-H]
0;9;;;;;;;;SILVA;Ana
[3PLAYERS-V]
0;7;;;;;;;;COSTA;Mia
[3SCOUT]
*9SH#
";

#[test]
fn parse_minimal_match() {
    let m = parse_str(MINIMAL).unwrap();

    assert_eq!(m.home.code, "AME");
    assert_eq!(m.home.name, "Amethyst Volley");
    assert_eq!(m.visitor.name, "Opal Volley");
    assert_eq!(m.home.players.len(), 1);
    assert_eq!(m.home.players[0].id, "H09");
    assert_eq!(m.home.players[0].last_name, "SILVA");
    assert_eq!(m.home.players[0].first_name, "Ana");

    assert_eq!(m.events.len(), 1);
    let e = &m.events[0];
    assert_eq!(e.player_id, "H09");
    assert_eq!(e.side, TeamSide::Home);
    assert_eq!(e.number, 9);
    assert_eq!(e.skill, Skill::Serve);
    assert_eq!(e.quality, Quality::Perfect);
    assert_eq!(e.set_number, 1);
    assert_eq!((e.home_score, e.visitor_score), (0, 0));
}

#[test]
fn parse_is_deterministic() {
    let a = parse_str(MINIMAL).unwrap();
    let b = parse_str(MINIMAL).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_teams_section_is_e3001() {
    let src = "[3PLAYERS-H]\n0;9;;;;;;;;SILVA;Ana\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\n*9SH#\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E3001");
    assert_eq!(err.kind, ParseErrorKind::Structure);
    assert_eq!(err.section.as_deref(), Some("3TEAMS"));
}

#[test]
fn missing_home_roster_section_is_e3002() {
    let src = "[3TEAMS]\nAME;A\nOPA;B\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\n*9SH#\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E3002");
    assert_eq!(err.kind, ParseErrorKind::Structure);
    assert_eq!(err.side, Some(TeamSide::Home));
    assert_eq!(err.section.as_deref(), Some("3PLAYERS-H"));
}

#[test]
fn missing_scout_section_is_e3003() {
    let src = "[3TEAMS]\nAME;A\nOPA;B\n[3PLAYERS-H]\n0;9;;;;;;;;SILVA;Ana\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E3003");
    assert_eq!(err.kind, ParseErrorKind::Structure);
}

#[test]
fn teams_section_wrong_arity_is_e3004() {
    let src = "[3TEAMS]\nAME;A\n[3PLAYERS-H]\n0;9;;;;;;;;SILVA;Ana\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\n*9SH#\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E3004");
    assert_eq!(err.kind, ParseErrorKind::Structure);
    assert_eq!(err.line, 2);
}

#[test]
fn malformed_roster_row_is_e1004() {
    let src = "[3TEAMS]\nAME;A\nOPA;B\n[3PLAYERS-H]\n0;9;SILVA\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\n*9SH#\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E1004");
    assert_eq!(err.kind, ParseErrorKind::Parse);
    assert_eq!(err.line, 5);
    assert_eq!(err.side, Some(TeamSide::Home));
    assert_eq!(err.context.as_deref(), Some("0;9;SILVA"));
}

#[test]
fn roster_row_without_names_is_e1004() {
    let src = "[3TEAMS]\nAME;A\nOPA;B\n[3PLAYERS-H]\n0;9;;;;;;;;;\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\n*9SH#\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E1004");
    assert!(err.message.contains("missing player name"));
}

#[test]
fn unknown_shirt_number_is_e4001() {
    let src = "[3TEAMS]\nAME;A\nOPA;B\n[3PLAYERS-H]\n0;9;;;;;;;;SILVA;Ana\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\n*11SH#\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E4001");
    assert_eq!(err.kind, ParseErrorKind::Roster);
    assert_eq!(err.line, 9);
    assert_eq!(err.side, Some(TeamSide::Home));
    assert!(err.message.contains("11"));
}

#[test]
fn duplicate_shirt_number_is_e4002() {
    let src = "[3TEAMS]\nAME;A\nOPA;B\n[3PLAYERS-H]\n0;9;;;;;;;;SILVA;Ana\n0;9;;;;;;;;ROCHA;Bia\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\n*9SH#\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E4002");
    assert_eq!(err.kind, ParseErrorKind::Roster);
    assert_eq!(err.line, 6);
    assert_eq!(err.side, Some(TeamSide::Home));
}

#[test]
fn unrecognized_scout_entry_is_e1001() {
    let src = "[3TEAMS]\nAME;A\nOPA;B\n[3PLAYERS-H]\n0;9;;;;;;;;SILVA;Ana\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\nwhat is this\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E1001");
    assert_eq!(err.kind, ParseErrorKind::Parse);
    assert_eq!(err.line, 9);
    assert_eq!(err.context.as_deref(), Some("what is this"));
}

#[test]
fn unknown_skill_letter_is_e1002() {
    let src = "[3TEAMS]\nAME;A\nOPA;B\n[3PLAYERS-H]\n0;9;;;;;;;;SILVA;Ana\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\n*9F#\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E1002");
    assert!(err.message.contains("'F'"));
    assert_eq!(err.line, 9);
}

#[test]
fn touch_code_missing_quality_is_e1006() {
    let src = "[3TEAMS]\nAME;A\nOPA;B\n[3PLAYERS-H]\n0;9;;;;;;;;SILVA;Ana\n[3PLAYERS-V]\n0;7;;;;;;;;COSTA;Mia\n[3SCOUT]\n*9AH\n";
    let err = parse_str(src).unwrap_err();
    assert_eq!(err.code, "E1006");
    assert_eq!(err.kind, ParseErrorKind::Parse);
    assert_eq!(err.context.as_deref(), Some("*9AH"));
}

#[test]
fn content_outside_section_is_e1007() {
    let err = parse_str("stray line\n").unwrap_err();
    assert_eq!(err.code, "E1007");
    assert_eq!(err.kind, ParseErrorKind::Parse);
    assert_eq!(err.line, 1);
}

#[test]
fn non_canonical_quality_parses_as_other() {
    let src = MINIMAL.replace("*9SH#", "*9SH~");
    let m = parse_str(&src).unwrap();
    assert_eq!(m.events[0].quality, Quality::Other('~'));
}

#[test]
fn tempo_letter_is_optional() {
    let with_tempo = parse_str(&MINIMAL.replace("*9SH#", "*9AQ-")).unwrap();
    assert_eq!(with_tempo.events[0].skill, Skill::Attack);
    assert_eq!(with_tempo.events[0].quality, Quality::Negative);

    let without = parse_str(&MINIMAL.replace("*9SH#", "*9A-")).unwrap();
    assert_eq!(without.events[0].skill, Skill::Attack);
    assert_eq!(without.events[0].quality, Quality::Negative);
}

#[test]
fn visitor_mark_resolves_visitor_roster() {
    let src = MINIMAL.replace("*9SH#", "a7R+");
    let m = parse_str(&src).unwrap();
    let e = &m.events[0];
    assert_eq!(e.player_id, "V07");
    assert_eq!(e.side, TeamSide::Visitor);
    assert_eq!(e.skill, Skill::Reception);
    assert_eq!(e.quality, Quality::Positive);
}

#[test]
fn same_shirt_number_on_both_teams_resolves_by_side() {
    let src = "\
[3TEAMS]
AME;A
OPA;B
[3PLAYERS-H]
0;9;;;;;;;;SILVA;Ana
[3PLAYERS-V]
0;9;;;;;;;;COSTA;Mia
[3SCOUT]
*9AH#
a9D-
";
    let m = parse_str(src).unwrap();
    assert_eq!(m.events[0].player_id, "H09");
    assert_eq!(m.events[1].player_id, "V09");
}

#[test]
fn non_touch_codes_are_skipped() {
    let src = "\
[3TEAMS]
AME;A
OPA;B
[3PLAYERS-H]
0;9;;;;;;;;SILVA;Ana
[3PLAYERS-V]
0;7;;;;;;;;COSTA;Mia
[3SCOUT]
*z5
*c02:11
aT
*9SH#
";
    let m = parse_str(src).unwrap();
    assert_eq!(m.events.len(), 1);
}

#[test]
fn points_and_set_markers_track_context() {
    let src = "\
[3TEAMS]
AME;A
OPA;B
[3PLAYERS-H]
0;9;;;;;;;;SILVA;Ana
[3PLAYERS-V]
0;7;;;;;;;;COSTA;Mia
[3SCOUT]
*9SH#
*p
a7R-
ap
*9S=
**1set
*9SH+
";
    let m = parse_str(src).unwrap();
    assert_eq!(m.events.len(), 4);

    // first serve scouted at 0:0 in set 1
    assert_eq!(m.events[0].set_number, 1);
    assert_eq!((m.events[0].home_score, m.events[0].visitor_score), (0, 0));

    // reception after a home point
    assert_eq!((m.events[1].home_score, m.events[1].visitor_score), (1, 0));

    // error serve after a visitor point
    assert_eq!((m.events[2].home_score, m.events[2].visitor_score), (1, 1));

    // the set marker resets the score and advances the set
    assert_eq!(m.events[3].set_number, 2);
    assert_eq!((m.events[3].home_score, m.events[3].visitor_score), (0, 0));
}

#[test]
fn explicit_point_score_overrides_running_score() {
    let src = "\
[3TEAMS]
AME;A
OPA;B
[3PLAYERS-H]
0;9;;;;;;;;SILVA;Ana
[3PLAYERS-V]
0;7;;;;;;;;COSTA;Mia
[3SCOUT]
*p17:12
*9SH#
";
    let m = parse_str(src).unwrap();
    assert_eq!((m.events[0].home_score, m.events[0].visitor_score), (17, 12));
}

#[test]
fn malformed_point_score_keeps_running_score() {
    let src = "\
[3TEAMS]
AME;A
OPA;B
[3PLAYERS-H]
0;9;;;;;;;;SILVA;Ana
[3PLAYERS-V]
0;7;;;;;;;;COSTA;Mia
[3SCOUT]
*pxx:yy
*9SH#
";
    let m = parse_str(src).unwrap();
    // the malformed suffix degrades to a plain home point
    assert_eq!((m.events[0].home_score, m.events[0].visitor_score), (1, 0));
}

#[test]
fn unknown_sections_are_skipped() {
    let src = "\
[3DATAVOLLEYSCOUT]
FILEFORMAT: 2.0
[3TEAMS]
AME;A
OPA;B
[3ATTACKCOMBINATION]
X5;Quick behind
[3PLAYERS-H]
0;9;;;;;;;;SILVA;Ana
[3PLAYERS-V]
0;7;;;;;;;;COSTA;Mia
[3SCOUT]
*9SH#
";
    let m = parse_str(src).unwrap();
    assert_eq!(m.events.len(), 1);
}

#[test]
fn match_meta_is_optional_and_lenient() {
    let src = "\
[3MATCH]
2025-10-04;2025/26;Regional U17
[3TEAMS]
AME;A
OPA;B
[3PLAYERS-H]
0;9;;;;;;;;SILVA;Ana
[3PLAYERS-V]
0;7;;;;;;;;COSTA;Mia
[3SCOUT]
*9SH#
";
    let m = parse_str(src).unwrap();
    assert_eq!(m.meta.date.as_deref(), Some("2025-10-04"));
    assert_eq!(m.meta.season.as_deref(), Some("2025/26"));
    assert_eq!(m.meta.competition.as_deref(), Some("Regional U17"));

    let bare = parse_str(MINIMAL).unwrap();
    assert_eq!(bare.meta, dvw_schema::MatchMeta::default());
}

#[test]
fn two_digit_shirt_numbers_parse() {
    let src = "\
[3TEAMS]
AME;A
OPA;B
[3PLAYERS-H]
0;12;;;;;;;;SILVA;Ana
[3PLAYERS-V]
0;7;;;;;;;;COSTA;Mia
[3SCOUT]
*12BH#
";
    let m = parse_str(src).unwrap();
    assert_eq!(m.events[0].player_id, "H12");
    assert_eq!(m.events[0].skill, Skill::Block);
}

#[test]
fn three_digit_shirt_number_is_e1003() {
    let src = MINIMAL.replace("*9SH#", "*123SH#");
    let err = parse_str(&src).unwrap_err();
    assert_eq!(err.code, "E1003");
    assert_eq!(err.kind, ParseErrorKind::Parse);
}

#[test]
fn parse_missing_file_is_e2001() {
    let missing = std::env::temp_dir().join(format!(
        "dvw_parser_missing_{}.dvw",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&missing);
    let err = parse_file(&missing).unwrap_err();
    assert_eq!(err.code, "E2001");
    assert_eq!(err.kind, ParseErrorKind::Io);
    assert_eq!(err.line, 0);
    assert!(err.file.is_some());
}
