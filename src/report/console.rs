//! Console reporting.
//!
//! Renders per-site reports and the end-of-batch summary to stdout with
//! `colored`. Log lines go to stderr via `env_logger`, so redirecting
//! stdout captures just the reports.

use colored::*;
use strum::IntoEnumIterator;

use crate::engine::{AnalysisResult, Category, LeadPriority, Tier};

const BAR_WIDTH: usize = 20;

/// Prints the full report for one graded site.
///
/// Layout: URL header, total score with tier, lead verdict block, the
/// per-category score table, strengths, issues, and improvement
/// opportunities. Sections with nothing to say are omitted.
pub fn print_site_report(result: &AnalysisResult) {
    let tier = result.classification;

    println!();
    println!("{}", "─".repeat(64).dimmed());
    println!("  {}", result.url.bold());
    println!(
        "  Total: {} ({})  {} in {:.2}s",
        tier_colored(&format!("{}/100", result.total_score), tier),
        tier_colored(tier.as_str(), tier),
        format!("HTTP {}", result.status_code).dimmed(),
        result.load_time,
    );
    println!();

    let lead = &result.lead_quality_score;
    println!("  Lead:  {}", priority_colored(lead.priority));
    println!("         {}", lead.reason);
    println!("         Estimated work: {}", lead.estimated_work.as_str());
    println!();

    for category in Category::iter() {
        if let Some(cat) = result.categories.get(&category) {
            println!(
                "  {:<14} {:>3}/{:<3} {}",
                category.key(),
                cat.score,
                cat.max_score,
                score_bar(cat.score, cat.max_score)
            );
        }
    }

    let strengths: Vec<(Category, &String)> = result
        .categories
        .values()
        .flat_map(|c| c.strengths.iter().map(move |s| (c.category, s)))
        .collect();
    if !strengths.is_empty() {
        println!();
        println!("  Strengths:");
        for (category, strength) in strengths {
            println!(
                "    {} {} {}",
                "+".green(),
                format!("[{}]", category.key()).dimmed(),
                strength
            );
        }
    }

    let issues: Vec<(Category, &String)> = result
        .categories
        .values()
        .flat_map(|c| c.issues.iter().map(move |i| (c.category, i)))
        .collect();
    if !issues.is_empty() {
        println!();
        println!("  Issues:");
        for (category, issue) in issues {
            println!(
                "    {} {} {}",
                "-".red(),
                format!("[{}]", category.key()).dimmed(),
                issue
            );
        }
    }

    if !result.improvement_opportunities.is_empty() {
        println!();
        println!("  Improvement opportunities:");
        for (category, suggestions) in &result.improvement_opportunities {
            for suggestion in suggestions {
                println!(
                    "    {} {} {}",
                    "*".yellow(),
                    format!("[{}]", category.key()).dimmed(),
                    suggestion
                );
            }
        }
    }
}

/// Prints the end-of-batch summary.
///
/// # Arguments
///
/// * `results` - Every successfully graded site, in completion order
/// * `failed` - Number of URLs that failed before the engine ran
/// * `elapsed_seconds` - Wall-clock duration of the batch
pub fn print_batch_summary(results: &[AnalysisResult], failed: usize, elapsed_seconds: f64) {
    let graded = results.len();
    let attempted = graded + failed;
    let rate = if elapsed_seconds > 0.0 {
        attempted as f64 / elapsed_seconds
    } else {
        0.0
    };

    println!();
    println!("{}", "═".repeat(64).dimmed());
    println!(
        "  Batch complete: {} attempted, {} graded, {} failed in {:.1}s (~{:.2} sites/sec)",
        attempted, graded, failed, elapsed_seconds, rate
    );

    if graded >= 2 {
        // max_by_key takes the later duplicate, min_by_key the earlier
        if let (Some(best), Some(worst)) = (
            results.iter().max_by_key(|r| r.total_score),
            results.iter().min_by_key(|r| r.total_score),
        ) {
            println!(
                "  Best:  {} ({}/100 {})",
                best.url,
                best.total_score,
                best.classification.as_str()
            );
            println!(
                "  Worst: {} ({}/100 {})",
                worst.url,
                worst.total_score,
                worst.classification.as_str()
            );
        }
    }

    if graded > 0 {
        let count = |p: LeadPriority| {
            results
                .iter()
                .filter(|r| r.lead_quality_score.priority == p)
                .count()
        };
        println!(
            "  Leads: {} high-priority, {} potential, {} maintenance, {} low-priority",
            count(LeadPriority::High),
            count(LeadPriority::Potential),
            count(LeadPriority::Maintenance),
            count(LeadPriority::Low)
        );
    }
}

fn tier_colored(text: &str, tier: Tier) -> ColoredString {
    match tier {
        Tier::Excellent => text.green().bold(),
        Tier::Good => text.cyan().bold(),
        Tier::Average => text.yellow().bold(),
        Tier::Outdated | Tier::Poor => text.red().bold(),
    }
}

fn priority_colored(priority: LeadPriority) -> ColoredString {
    match priority {
        LeadPriority::High => priority.as_str().red().bold(),
        LeadPriority::Potential => priority.as_str().yellow().bold(),
        LeadPriority::Maintenance => priority.as_str().cyan(),
        LeadPriority::Low => priority.as_str().green(),
    }
}

fn score_bar(score: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (score as usize * BAR_WIDTH) / max as usize
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar_widths() {
        assert_eq!(score_bar(10, 10), "█".repeat(20));
        assert_eq!(score_bar(0, 10), "░".repeat(20));
        // Half-earned fills half the bar
        let half = score_bar(5, 10);
        assert_eq!(half.chars().filter(|&c| c == '█').count(), 10);
        assert_eq!(half.chars().count(), 20);
    }

    #[test]
    fn test_score_bar_zero_ceiling_does_not_divide_by_zero() {
        assert_eq!(score_bar(0, 0), "░".repeat(20));
    }

    #[test]
    fn test_bar_never_overflows_width() {
        for score in 0..=25 {
            let bar = score_bar(score, 25);
            assert_eq!(bar.chars().count(), 20, "score {score} broke the width");
        }
    }
}
