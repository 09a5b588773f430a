//! Timeline output structures for compound-interest projections

use serde::{Deserialize, Serialize};

/// Balance snapshot at the end of one compounding period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Elapsed periods (months) since the start
    pub period: u32,

    /// Balance after the contribution and interest of this period
    pub balance: f64,

    /// Initial capital plus every contribution made so far
    pub total_contributions: f64,

    /// Interest earned so far (balance - contributions)
    pub total_interest: f64,
}

/// Complete compound-interest projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_interest: f64,

    /// One entry per simulated month, in order
    pub timeline: Vec<TimelineEntry>,
}

impl CompoundInterestResult {
    /// Result for a projection that has not run any month yet
    pub fn new(initial_capital: f64) -> Self {
        Self {
            final_balance: initial_capital,
            total_contributions: initial_capital,
            total_interest: 0.0,
            timeline: Vec::new(),
        }
    }

    /// Record a month and refresh the running totals
    pub fn add_entry(&mut self, entry: TimelineEntry) {
        self.final_balance = entry.balance;
        self.total_contributions = entry.total_contributions;
        self.total_interest = entry.total_interest;
        self.timeline.push(entry);
    }

    /// Entries at every twelfth month (month % 12 == 0)
    pub fn yearly(&self) -> Vec<TimelineEntry> {
        sample_yearly(&self.timeline)
    }

    /// Interest as a percentage of the final balance
    pub fn interest_share(&self) -> f64 {
        if self.final_balance == 0.0 {
            0.0
        } else {
            self.total_interest / self.final_balance * 100.0
        }
    }
}

/// Keep only the entries that close a year (month % 12 == 0)
pub fn sample_yearly(timeline: &[TimelineEntry]) -> Vec<TimelineEntry> {
    timeline
        .iter()
        .filter(|e| e.period > 0 && e.period % 12 == 0)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(period: u32) -> TimelineEntry {
        TimelineEntry {
            period,
            balance: 100.0 + period as f64,
            total_contributions: 100.0,
            total_interest: period as f64,
        }
    }

    #[test]
    fn test_sample_yearly() {
        let timeline: Vec<_> = (1..=30).map(entry).collect();
        let yearly = sample_yearly(&timeline);
        let periods: Vec<u32> = yearly.iter().map(|e| e.period).collect();
        assert_eq!(periods, vec![12, 24]);
    }

    #[test]
    fn test_add_entry_updates_totals() {
        let mut result = CompoundInterestResult::new(100.0);
        assert_eq!(result.final_balance, 100.0);
        result.add_entry(entry(1));
        assert_eq!(result.final_balance, 101.0);
        assert_eq!(result.total_interest, 1.0);
        assert_eq!(result.timeline.len(), 1);
    }

    #[test]
    fn test_interest_share_zero_balance() {
        let result = CompoundInterestResult::new(0.0);
        assert_eq!(result.interest_share(), 0.0);
    }
}
