use colored::*;
use riftpedia::analysis::champion_stats::ChampionStats;
use riftpedia::analysis::stats::{cs_per_minute, format_duration, kda};
use riftpedia::analysis::{AggregateStats, MatchBreakdown, TeamBreakdown};
use riftpedia::api::models::{ChampionInfo, ItemInfo};
use riftpedia::history::lookup::position_label;
use riftpedia::MatchSummary;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    date: String,
    queue: String,
    champion: String,
    result: String,
    kda: String,
    cs: String,
    damage: String,
    vision: String,
    spells: String,
    keystone: String,
    duration: String,
}

#[derive(Tabled)]
struct ChampionStatsRow {
    champion: String,
    games: String,
    wins: String,
    win_rate: String,
}

#[derive(Tabled)]
struct ScoreboardRow {
    player: String,
    champion: String,
    position: String,
    kda: String,
    damage: String,
    gold: String,
    cs: String,
    vision: String,
    carry: String,
}

#[derive(Tabled)]
struct ChampionRow {
    key: String,
    name: String,
    title: String,
    tags: String,
}

#[derive(Tabled)]
struct ItemRow {
    id: String,
    name: String,
    gold: String,
    description: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_profile(riot_id: &str, level: i64, rank: &str) {
    println!("\n{}", format!("🎮 {}", riot_id).bold().cyan());
    println!("   Level {}  •  {}", level, rank.bold());
}

fn win_rate_color(text: String, win_rate: f64) -> ColoredString {
    if win_rate >= 50.0 {
        text.green()
    } else if win_rate >= 40.0 {
        text.yellow()
    } else if win_rate >= 30.0 {
        text.truecolor(255, 165, 0)
    } else {
        text.red()
    }
}

pub fn display_match_history(matches: &[MatchSummary]) {
    println!(
        "\n{}",
        format!("📊 MATCH HISTORY (Last {} Games)", matches.len()).bold().cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());

    if matches.is_empty() {
        println!("{}", "No matches to show".yellow());
        return;
    }

    let rows: Vec<MatchRow> = matches
        .iter()
        .enumerate()
        .map(|(idx, m)| MatchRow {
            number: format!("{}", idx + 1),
            date: m.created_at.format("%Y-%m-%d %H:%M").to_string(),
            queue: m.queue_kind.label().to_string(),
            champion: m.champion_played.clone(),
            result: if m.is_win {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            },
            kda: format!("{}/{}/{} ({:.2})", m.kills, m.deaths, m.assists, kda(m)),
            cs: format!("{} ({:.1}/m)", m.creep_score, cs_per_minute(m)),
            damage: m.damage_to_champions.to_string(),
            vision: m.vision_score.map(|v| v.to_string()).unwrap_or_default(),
            spells: m.summoner_ability_names.join(" + "),
            keystone: m
                .primary_keystone_rune
                .as_ref()
                .map(|r| r.name.clone())
                .unwrap_or_default(),
            duration: format_duration(m.duration_seconds),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_aggregate(stats: &AggregateStats) {
    println!("{}", "Summary".bold().yellow());

    match stats.win_rate {
        Some(wr) => {
            let losses = stats.matches - stats.wins;
            let line = format!("{:.1}% Win Rate  •  Last {} games", wr, stats.matches);
            println!(
                "  {} W / {} L  {}",
                stats.wins.to_string().green(),
                losses.to_string().red(),
                win_rate_color(line, wr)
            );
        }
        None => println!("  No games to rate"),
    }

    if let Some((champion, wins)) = &stats.most_winning_champion {
        println!("  Most wins:   {} ({})", champion.bold(), wins);
    }
    if let Some((champion, games)) = &stats.most_played_champion {
        println!("  Most played: {} ({} games)", champion.bold(), games);
    }
    println!();
}

pub fn display_champion_stats(stats: &[ChampionStats]) {
    if stats.is_empty() {
        return;
    }

    let rows: Vec<ChampionStatsRow> = stats
        .iter()
        .map(|s| ChampionStatsRow {
            champion: s.name.clone(),
            games: s.games.to_string(),
            wins: s.wins.to_string(),
            win_rate: win_rate_color(format!("{:.1}%", s.win_rate()), s.win_rate()).to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_match_breakdown(breakdown: &MatchBreakdown) {
    println!(
        "\n{}  {}",
        breakdown.queue_name.bold().cyan(),
        format_duration(breakdown.duration_seconds)
    );
    println!("{}\n", "=".repeat(80).cyan());

    for (idx, team) in breakdown.teams.iter().enumerate() {
        display_team(idx + 1, team);
    }
}

fn display_team(number: usize, team: &TeamBreakdown) {
    let header = format!(
        "Team {}  {}  Turrets {}  Dragons {}  Barons {}",
        number,
        if team.win { "VICTORY" } else { "DEFEAT" },
        team.tower_kills,
        team.dragon_kills,
        team.baron_kills
    );
    if team.win {
        println!("{}", header.bold().blue());
    } else {
        println!("{}", header.bold().red());
    }

    let rows: Vec<ScoreboardRow> = team
        .carry_scores()
        .into_iter()
        .map(|(p, carry)| ScoreboardRow {
            player: p.name.clone(),
            champion: format!("{} (lvl {})", p.champion_name, p.champ_level),
            position: position_label(&p.position),
            kda: format!("{}/{}/{} ({:.2})", p.kills, p.deaths, p.assists, kda(p)),
            damage: p.damage_to_champions.to_string(),
            gold: p.gold_earned.to_string(),
            cs: p.creep_score.to_string(),
            vision: p.vision_score.to_string(),
            carry: format!("{:.0}%", carry),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_champions(champions: &[ChampionInfo]) {
    let rows: Vec<ChampionRow> = champions
        .iter()
        .map(|c| ChampionRow {
            key: c.key.clone(),
            name: c.name.clone(),
            title: c.title.clone(),
            tags: c.tags.join(", "),
        })
        .collect();

    println!("\n{}", format!("🛡️ {} champions", rows.len()).bold().cyan());
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_items(items: &[(String, ItemInfo)]) {
    let rows: Vec<ItemRow> = items
        .iter()
        .map(|(id, item)| ItemRow {
            id: id.clone(),
            name: item.name.clone(),
            gold: item.gold.total.to_string(),
            description: item.plaintext.clone(),
        })
        .collect();

    println!("\n{}", format!("🗡️ {} items", rows.len()).bold().cyan());
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
