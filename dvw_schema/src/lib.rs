use serde::{Deserialize, Serialize};

/// Stable within one parsed match: team prefix (`H`/`V`) plus the
/// zero-padded shirt number, e.g. `H09`.
pub type PlayerId = String;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSide {
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "visitor")]
    Visitor,
}

impl TeamSide {
    pub fn prefix(self) -> char {
        match self {
            TeamSide::Home => 'H',
            TeamSide::Visitor => 'V',
        }
    }

    pub fn player_id(self, number: u8) -> PlayerId {
        format!("{}{:02}", self.prefix(), number)
    }
}

/// The six scouted volleyball skills, in scoreboard order.
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Skill {
    #[serde(rename = "serve")]
    Serve,
    #[serde(rename = "reception")]
    Reception,
    #[serde(rename = "set")]
    Set,
    #[serde(rename = "attack")]
    Attack,
    #[serde(rename = "block")]
    Block,
    #[serde(rename = "dig")]
    Dig,
}

impl Skill {
    pub const ALL: [Skill; 6] = [
        Skill::Serve,
        Skill::Reception,
        Skill::Set,
        Skill::Attack,
        Skill::Block,
        Skill::Dig,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Skill::Serve => "serve",
            Skill::Reception => "reception",
            Skill::Set => "set",
            Skill::Attack => "attack",
            Skill::Block => "block",
            Skill::Dig => "dig",
        }
    }
}

/// Outcome rating of a single touch, the `# + ! - / =` scale from best to
/// error. Symbols outside the scale survive as `Other` so analyst shorthand
/// is never silently dropped.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "char", into = "char")]
pub enum Quality {
    Perfect,
    Positive,
    Exclamation,
    Negative,
    Poor,
    Error,
    Other(char),
}

impl Quality {
    pub const CANONICAL: [Quality; 6] = [
        Quality::Perfect,
        Quality::Positive,
        Quality::Exclamation,
        Quality::Negative,
        Quality::Poor,
        Quality::Error,
    ];

    pub fn symbol(self) -> char {
        match self {
            Quality::Perfect => '#',
            Quality::Positive => '+',
            Quality::Exclamation => '!',
            Quality::Negative => '-',
            Quality::Poor => '/',
            Quality::Error => '=',
            Quality::Other(c) => c,
        }
    }

    pub fn is_canonical(self) -> bool {
        !matches!(self, Quality::Other(_))
    }
}

impl From<char> for Quality {
    fn from(c: char) -> Self {
        match c {
            '#' => Quality::Perfect,
            '+' => Quality::Positive,
            '!' => Quality::Exclamation,
            '-' => Quality::Negative,
            '/' => Quality::Poor,
            '=' => Quality::Error,
            other => Quality::Other(other),
        }
    }
}

impl From<Quality> for char {
    fn from(q: Quality) -> Self {
        q.symbol()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub number: u8,
    pub first_name: String,
    pub last_name: String,
}

impl Player {
    pub fn new(side: TeamSide, number: u8, first_name: String, last_name: String) -> Self {
        Player {
            id: side.player_id(number),
            number,
            first_name,
            last_name,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Team {
    pub code: String,
    pub name: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct MatchMeta {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub competition: Option<String>,
}

/// One scouted touch. `set_number` and the running score are context carried
/// along from the scout log; the aggregator only reads the routing fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TouchEvent {
    pub player_id: PlayerId,
    pub side: TeamSide,
    pub number: u8,
    pub skill: Skill,
    pub quality: Quality,
    pub set_number: u8,
    pub home_score: u8,
    pub visitor_score: u8,
}

/// One complete, finished contest. Built once by the parser and never
/// mutated afterward.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Match {
    #[serde(default)]
    pub meta: MatchMeta,
    pub home: Team,
    pub visitor: Team,
    pub events: Vec<TouchEvent>,
}

impl Match {
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Visitor => &self.visitor,
        }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.home
            .players
            .iter()
            .chain(self.visitor.players.iter())
            .find(|p| p.id == id)
    }
}
