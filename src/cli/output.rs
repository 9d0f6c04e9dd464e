//! Output formatting and progress bars for CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for a run of simulated games
pub fn create_game_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a share of `total` as a percentage
pub fn format_rate(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_are_percentages_of_the_total() {
        assert_eq!(format_rate(1, 4), "25.0%");
        assert_eq!(format_rate(2, 3), "66.7%");
        assert_eq!(format_rate(0, 0), "0.0%");
    }

    #[test]
    fn progress_bar_counts_games() {
        let pb = create_game_progress(10).unwrap();
        assert_eq!(pb.length(), Some(10));
    }
}
