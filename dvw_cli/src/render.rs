use dvw_schema::{Match, TeamSide};
use dvw_stats::{MatchReport, PlayerMatchStats, QualityDistribution};

pub fn print_report(report: &MatchReport) {
    print_side(report, TeamSide::Home);
    println!();
    print_side(report, TeamSide::Visitor);
}

fn print_side(report: &MatchReport, side: TeamSide) {
    let totals = match side {
        TeamSide::Home => &report.home,
        TeamSide::Visitor => &report.visitor,
    };
    println!("{} ({})", totals.name, totals.code);
    println!(" No Player               Skill        #   +   !   -   /   = Tot   Pos%    Eff");
    println!("--- -------------------- ---------- --- --- --- --- --- --- --- ------ ------");

    for player in report.players.iter().filter(|p| p.side == side) {
        print_player(player);
    }

    for (skill, dist) in &totals.by_skill {
        println!(
            "    {:20} {:10} {}",
            "team total",
            skill.name(),
            dist_cells(dist)
        );
    }
}

fn print_player(player: &PlayerMatchStats) {
    let mut first = true;
    for (skill, dist) in &player.by_skill {
        if first {
            println!(
                "{:>3} {:20} {:10} {}",
                player.number,
                truncate(&player.name, 20),
                skill.name(),
                dist_cells(dist)
            );
            first = false;
        } else {
            println!("    {:20} {:10} {}", "", skill.name(), dist_cells(dist));
        }
    }
}

fn dist_cells(dist: &QualityDistribution) -> String {
    format!(
        "{:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>3} {:>6} {:>6}",
        dist.perfect,
        dist.positive,
        dist.exclamation,
        dist.negative,
        dist.poor,
        dist.error,
        dist.total,
        pct(dist.positive_rate()),
        signed(dist.efficiency()),
    )
}

fn pct(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.1}%", r * 100.0),
        None => "-".to_string(),
    }
}

fn signed(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{r:+.2}"),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}

pub fn print_summary(m: &Match) {
    if let Some(date) = &m.meta.date {
        println!("date={date}");
    }
    if let Some(season) = &m.meta.season {
        println!("season={season}");
    }
    if let Some(competition) = &m.meta.competition {
        println!("competition={competition}");
    }
    println!("home={} ({} players)", m.home.name, m.home.players.len());
    println!(
        "visitor={} ({} players)",
        m.visitor.name,
        m.visitor.players.len()
    );
    let sets = m.events.iter().map(|e| e.set_number).max().unwrap_or(0);
    println!("sets={sets}");
    println!("touches={}", m.events.len());
}
