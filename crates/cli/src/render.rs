// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of bracket views and roster previews.

use bracketcraft_api::{BracketView, MatchInfo, RosterPreview, RosterRowStatus, RoundInfo};

fn match_line(m: &MatchInfo) -> String {
    let pairing = format!("{} vs {}", m.slot_a, m.slot_b);
    let detail: String = match (m.status.as_str(), &m.winner, m.score_a.zip(m.score_b)) {
        ("Completed", Some(winner), Some((a, b))) => format!("{a}-{b}, winner {winner}"),
        ("Completed", Some(winner), None) => format!("bye, {winner} advances"),
        ("Completed", None, _) => String::from("void"),
        ("ReadyToPlay", _, _) => String::from("ready"),
        _ => String::from("pending"),
    };
    format!("    {:<8} {pairing}  [{detail}]", m.match_id)
}

fn push_side(lines: &mut Vec<String>, title: &str, rounds: &[RoundInfo]) {
    if rounds.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(String::from(title));
    for round in rounds {
        lines.push(format!("  Round {}", round.index + 1));
        lines.extend(round.matches.iter().map(match_line));
    }
}

/// Renders a bracket as indented text, one match per line.
#[must_use]
pub fn bracket_text(view: &BracketView) -> String {
    let summary = &view.tournament;
    let mut lines: Vec<String> = vec![format!(
        "{} (T{}, {}) - {}",
        summary.name, summary.tournament_id, summary.mode, summary.lifecycle
    )];
    if let Some(organizer) = &summary.organizer {
        lines.push(format!("Organized by {organizer}"));
    }

    lines.push(String::new());
    lines.push(String::from("Seeds"));
    for seed in &view.seeds {
        lines.push(format!(
            "  {:>3}. {:<12} {}",
            seed.seed.unwrap_or_default(),
            seed.participant_id,
            seed.display_name
        ));
    }

    push_side(&mut lines, "Winners bracket", &view.winners);
    push_side(&mut lines, "Losers bracket", &view.losers);
    push_side(&mut lines, "Grand final", &view.finals);

    lines.push(String::new());
    let Some(champion) = &view.champion else {
        lines.push(String::from("Champion: undecided"));
        return lines.join("\n");
    };
    lines.push(format!(
        "Champion: {} ({})",
        champion.display_name, champion.participant_id
    ));
    lines.push(String::from("Standings"));
    for placement in &view.placements {
        lines.push(format!(
            "  {:>3}. {}",
            placement.rank,
            placement.participants.join(", ")
        ));
    }

    lines.join("\n")
}

/// Renders a roster preview with one line per row and its problems.
#[must_use]
pub fn roster_preview_text(preview: &RosterPreview) -> String {
    let mut lines: Vec<String> = vec![format!(
        "{} rows: {} valid, {} invalid",
        preview.total_rows, preview.valid_count, preview.invalid_count
    )];
    for row in &preview.rows {
        let id: &str = row.participant_id.as_deref().unwrap_or("-");
        match row.status {
            RosterRowStatus::Valid => lines.push(format!(
                "  row {:>3}  ok       {id} ({})",
                row.row_number,
                row.display_name.as_deref().unwrap_or_default()
            )),
            RosterRowStatus::Invalid => lines.push(format!(
                "  row {:>3}  invalid  {id}: {}",
                row.row_number,
                row.errors.join("; ")
            )),
        }
    }
    lines.join("\n")
}
