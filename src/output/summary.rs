use crate::report::{DaySnapshot, SimulationReport};

/// Print one day's catalog state as a table to stdout
pub fn print_day(snapshot: &DaySnapshot) {
    println!("┌──────────────────────────────────────────────────────────────┐");
    println!("│ Day {:<57} │", snapshot.day);
    println!("├──────────────────────────────────────────┬─────────┬─────────┤");
    println!("│ NAME                                     │ DAYS    │ QUALITY │");
    println!("├──────────────────────────────────────────┼─────────┼─────────┤");

    for item in &snapshot.items {
        println!(
            "│ {:<40} │ {:>7} │ {:>7} │",
            truncate(&item.name, 40),
            item.sell_in,
            item.quality
        );
    }

    println!("└──────────────────────────────────────────┴─────────┴─────────┘");
    println!();
}

/// Print a closing line after a full run
pub fn print_footer(report: &SimulationReport) {
    println!(
        "Simulated {} day(s) across {} item(s).",
        report.days,
        report
            .snapshots
            .first()
            .map(|s| s.items.len())
            .unwrap_or(0)
    );
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

/// Format a day snapshot as a plain string (for testing)
pub fn format_day(snapshot: &DaySnapshot) -> String {
    let mut output = String::new();

    output.push_str(&format!("Day {}\n", snapshot.day));
    for item in &snapshot.items {
        output.push_str(&format!(
            "{}, {}, {}\n",
            item.name, item.sell_in, item.quality
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ItemState;

    fn snapshot() -> DaySnapshot {
        DaySnapshot {
            day: 2,
            items: vec![
                ItemState {
                    name: "Aged Brie".to_string(),
                    sell_in: 0,
                    quality: 2,
                },
                ItemState {
                    name: "Conjured Mana Cake".to_string(),
                    sell_in: 1,
                    quality: 2,
                },
            ],
        }
    }

    #[test]
    fn test_format_day() {
        let output = format_day(&snapshot());

        assert!(output.contains("Day 2"));
        assert!(output.contains("Aged Brie, 0, 2"));
        assert!(output.contains("Conjured Mana Cake, 1, 2"));
    }

    #[test]
    fn test_format_day_empty() {
        let empty = DaySnapshot {
            day: 0,
            items: vec![],
        };
        assert_eq!(format_day(&empty), "Day 0\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }
}
