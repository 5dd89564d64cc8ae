//! Detection records.

use serde::{Deserialize, Serialize};

use crate::catalog::{AlertLevel, PatternRecord};
use crate::matching::MatchSet;

/// Outcome of searching one catalog pattern in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// Pattern text as written in the catalog, not normalized
    pub pattern: String,

    /// Category label of the pattern
    pub category: String,

    /// Severity of the pattern
    pub alert_level: AlertLevel,

    /// Alert message of the pattern
    pub alert_message: String,

    /// Ascending match positions in the normalized text
    pub positions: MatchSet,

    /// Whether at least one match was found
    pub found: bool,

    /// Number of matches
    pub match_count: usize,
}

/// Shapes a pattern's metadata and its match positions into a [`DetectionRecord`].
pub fn report(metadata: &PatternRecord, positions: MatchSet) -> DetectionRecord {
    DetectionRecord {
        pattern: metadata.pattern.clone(),
        category: metadata.category.clone(),
        alert_level: metadata.alert_level,
        alert_message: metadata.alert_message.clone(),
        found: !positions.is_empty(),
        match_count: positions.len(),
        positions,
    }
}

/// Number of detections per alert level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertTally {
    /// Detections with a high alert level
    pub high: usize,
    /// Detections with a medium alert level
    pub medium: usize,
    /// Detections with a low alert level
    pub low: usize,
}

impl AlertTally {
    /// Counts one detection at `level`.
    pub fn record(&mut self, level: AlertLevel) {
        match level {
            AlertLevel::High => self.high += 1,
            AlertLevel::Medium => self.medium += 1,
            AlertLevel::Low => self.low += 1,
        }
    }

    /// Count for `level`.
    pub fn get(&self, level: AlertLevel) -> usize {
        match level {
            AlertLevel::High => self.high,
            AlertLevel::Medium => self.medium,
            AlertLevel::Low => self.low,
        }
    }
}

impl<'a> FromIterator<&'a DetectionRecord> for AlertTally {
    fn from_iter<I: IntoIterator<Item = &'a DetectionRecord>>(iter: I) -> Self {
        let mut tally = AlertTally::default();
        for record in iter {
            tally.record(record.alert_level);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_keeps_original_pattern_text() {
        let metadata = PatternRecord::new("No Funciona", "producto", AlertLevel::High, "Falla");
        let record = report(&metadata, vec![4, 20]);

        assert_eq!(record.pattern, "No Funciona");
        assert_eq!(record.category, "producto");
        assert_eq!(record.alert_level, AlertLevel::High);
        assert_eq!(record.alert_message, "Falla");
        assert_eq!(record.positions, vec![4, 20]);
        assert!(record.found);
        assert_eq!(record.match_count, 2);
    }

    #[test]
    fn test_report_empty_positions() {
        let metadata = PatternRecord::new("demora", "servicio", AlertLevel::Low, "");
        let record = report(&metadata, Vec::new());

        assert!(!record.found);
        assert_eq!(record.match_count, 0);
    }

    #[test]
    fn test_alert_tally() {
        let records: Vec<DetectionRecord> = [AlertLevel::High, AlertLevel::Low, AlertLevel::High]
            .into_iter()
            .map(|level| report(&PatternRecord::new("p", "c", level, ""), vec![0]))
            .collect();

        let tally: AlertTally = records.iter().collect();
        assert_eq!(tally.get(AlertLevel::High), 2);
        assert_eq!(tally.get(AlertLevel::Medium), 0);
        assert_eq!(tally.get(AlertLevel::Low), 1);
    }
}
