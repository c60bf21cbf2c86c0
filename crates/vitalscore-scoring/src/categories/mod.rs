//! Per-section scorers. Each module exposes a free `score` function over its
//! own questionnaire section and a unit struct implementing [`crate::Category`].

pub mod activity;
pub mod eating;
pub mod family;
pub mod mental;
pub mod sedentary;
pub mod sleep;

/// Labels for the 0–4 "how often" items.
pub(crate) const FREQUENCY: [&str; 5] = ["Never", "Rarely", "Sometimes", "Often", "Almost always"];

/// Labels for the 0–4 "time per day" items.
pub(crate) const DAILY_TIME: [&str; 5] = [
    "Never",
    "Less than 1 hr/day",
    "1-2 hr/day",
    "2-3 hr/day",
    "More than 3 hr/day",
];

/// `"Name: Label (n)"` for on-scale values, `"Name: n"` otherwise.
pub(crate) fn item_line(name: &str, value: f64, labels: &[&str; 5]) -> String {
    let index = value as usize;
    if value.fract() == 0.0 && value >= 0.0 && index < labels.len() {
        format!("{name}: {} ({index})", labels[index])
    } else {
        format!("{name}: {value}")
    }
}

/// Count of items at or above the "Sometimes" level.
pub(crate) fn flagged_items(items: &[f64]) -> usize {
    items.iter().filter(|&&v| v >= 2.0).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_lines_use_labels_for_whole_values() {
        assert_eq!(item_line("Fruits", 3.0, &FREQUENCY), "Fruits: Often (3)");
        assert_eq!(item_line("TV", 4.0, &DAILY_TIME), "TV: More than 3 hr/day (4)");
        assert_eq!(item_line("Fruits", 2.5, &FREQUENCY), "Fruits: 2.5");
        assert_eq!(item_line("Fruits", 7.0, &FREQUENCY), "Fruits: 7");
        assert_eq!(item_line("Fruits", -1.0, &FREQUENCY), "Fruits: -1");
    }

    #[test]
    fn flagged_items_counts_two_and_above() {
        assert_eq!(flagged_items(&[0.0, 1.0, 2.0, 3.0, 4.0]), 3);
        assert_eq!(flagged_items(&[]), 0);
    }
}
