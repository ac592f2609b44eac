use crate::{
    models::{Branch, ScoredItem},
    services::weights::{
        ScoreWeights, ThinkerWeight, ANTI_INDICATOR_PENALTY, SCORE_WEIGHTS, THINKER_WEIGHTS,
    },
};

use super::{score_marker, Tier};

const RULE_WIDTH: usize = 70;

/// Formats minutes as `45m`, `2h` or `1h 30m`
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}h", hours)
    }
}

fn branch_label(branch: &Branch) -> &'static str {
    match branch {
        Branch::Empire => "[EMPIRE]",
        _ => "[MAIN]",
    }
}

/// Renders ranked results as a console listing
pub fn render_recommendations(results: &[ScoredItem]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("\n🎬 CONTENT RECOMMENDATIONS\n\n");
    out.push_str(&rule);
    out.push('\n');

    if results.is_empty() {
        out.push_str("\nNo content matches your criteria.\n\n");
        return out;
    }

    for scored in results {
        let item = &scored.item;
        let score = scored.calculated_score;

        out.push_str(&format!("\n{} {}\n", score_marker(score), item.title));
        out.push_str(&format!(
            "   {} {} • {} • Score: {}\n",
            branch_label(&item.branch),
            item.creator,
            format_duration(item.duration),
            score
        ));
        out.push_str(&format!(
            "   {} | Tags: {}\n",
            item.kind.to_uppercase(),
            item.tags.join(", ")
        ));
        if let Some(notes) = item.notes.as_deref().filter(|n| !n.is_empty()) {
            out.push_str(&format!("   💭 {}\n", notes));
        }
        out.push_str(&format!("   🔗 {}\n", item.url));
    }

    out.push_str(&format!(
        "\n{}\n\nFound {} recommendations\n\n",
        rule,
        results.len()
    ));
    out
}

pub fn render_top_picks_heading(min_score: i64) -> String {
    format!("\n📊 TOP RECOMMENDATIONS (Score {}+)\n", min_score)
}

/// Explains the scoring model using the reference weight tables
pub fn render_algorithm() -> String {
    render_algorithm_with(&THINKER_WEIGHTS, &SCORE_WEIGHTS)
}

fn percent(weight: f64) -> String {
    format!("{:>3}%", (weight * 100.0).round() as i64)
}

fn render_algorithm_with(thinkers: &[ThinkerWeight], weights: &ScoreWeights) -> String {
    let mut out = String::new();

    out.push_str("\nRECOMMENDATION ALGORITHM\n");
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\nTHINKER WEIGHTS:\n");
    for thinker in thinkers {
        out.push_str(&format!(
            "  • {:<18} {}  → {}\n",
            thinker.label,
            percent(thinker.weight),
            thinker.themes
        ));
    }

    out.push_str("\nSCORING WEIGHTS:\n");
    let components = [
        ("Thinker Match", weights.thinker_match, "Alignment with weighted thinkers"),
        ("Depth Score", weights.depth_score, "Life purpose, leadership, philosophy"),
        ("Production Quality", weights.production_quality, "Audio, editing, research"),
        ("Format Score", weights.format_score, "Duration penalties for business content"),
    ];
    for (name, weight, about) in components {
        out.push_str(&format!("  • {:<18} {}  → {}\n", name, percent(weight), about));
    }

    out.push_str(&format!(
        "\nFORMULA:\n  Score = (ThinkerMatch × {:.2})\n        + (DepthScore × {:.2})\n        + (ProductionQuality × {:.2})\n        + (FormatScore × {:.2})\n        - ({} × AntiIndicators)\n",
        weights.thinker_match,
        weights.depth_score,
        weights.production_quality,
        weights.format_score,
        ANTI_INDICATOR_PENALTY
    ));

    out.push_str(
        "\nEMPIRE BRANCH RULE:\n  Business/tech content over 30 min gets penalized:\n    • 30 min or less: 100 points\n    • 31-45 min: 75 points\n    • 46-60 min: 50 points\n    • over 60 min: 25 points\n",
    );

    out.push_str("\nTHRESHOLDS:\n");
    for tier in Tier::ALL {
        out.push_str(&format!(
            "  • {:<7} {} → {}\n",
            format!("{}:", tier.range()),
            tier.label(),
            tier.description()
        ));
    }

    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out
}
