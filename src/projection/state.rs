//! Running state of a compound-interest projection

use super::timeline::TimelineEntry;

/// Balance and totals at a point in the projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current month (0 before the first month runs)
    pub month: u32,

    pub balance: f64,

    /// Initial capital plus contributions to date
    pub total_contributions: f64,
}

impl ProjectionState {
    pub fn from_initial(initial_capital: f64) -> Self {
        Self {
            month: 0,
            balance: initial_capital,
            total_contributions: initial_capital,
        }
    }

    /// Run one month: contribution first, then interest on the whole balance
    pub fn advance_month(&mut self, contribution: f64, monthly_rate: f64) {
        self.month += 1;

        self.balance += contribution;
        self.total_contributions += contribution;

        let interest = self.balance * monthly_rate;
        self.balance += interest;
    }

    /// Interest accumulated so far
    pub fn total_interest(&self) -> f64 {
        self.balance - self.total_contributions
    }

    pub fn snapshot(&self) -> TimelineEntry {
        TimelineEntry {
            period: self.month,
            balance: self.balance,
            total_contributions: self.total_contributions,
            total_interest: self.total_interest(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_earns_interest_same_month() {
        let mut state = ProjectionState::from_initial(1000.0);
        state.advance_month(100.0, 0.01);

        assert_eq!(state.month, 1);
        assert!((state.balance - 1111.0).abs() < 1e-9);
        assert_eq!(state.total_contributions, 1100.0);
        assert!((state.total_interest() - 11.0).abs() < 1e-9);
    }
}
