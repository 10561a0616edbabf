//! Time arithmetic shared by the contribution tracker, the investment
//! sub-ledger and the withdrawal state machine. All inputs are block
//! timestamps in seconds; a timestamp earlier than its reference counts as
//! zero elapsed time.

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Contribution cycle and interest month: 30 days
pub const CYCLE_LENGTH: u64 = 30 * SECONDS_PER_DAY;

/// Investment lock window: 90 days
pub const LOCK_PERIOD: u64 = 90 * SECONDS_PER_DAY;

/// Monthly rates are expressed in thousandths (15 = 1.5%)
pub const RATE_DENOMINATOR: u64 = 1_000;

pub const PERCENT_DENOMINATOR: u64 = 100;

pub const BPS_DENOMINATOR: u64 = 10_000;

/// Minimum balance to invest, as a multiple of the fixed contribution
pub const INVESTMENT_THRESHOLD_MULTIPLIER: u64 = 2;

pub fn elapsed(since: u64, now: u64) -> u64 {
    now.saturating_sub(since)
}

/// Whole contribution cycles elapsed since the last contribution.
pub fn missed_cycles(last_contribution: u64, now: u64) -> u64 {
    elapsed(last_contribution, now) / CYCLE_LENGTH
}

/// Number of contributions owed by a deposit made at `now`.
pub fn contributions_due(last_contribution: u64, now: u64) -> u64 {
    missed_cycles(last_contribution, now).saturating_add(1)
}

/// Whole interest months elapsed since the investment started.
pub fn months_elapsed(start: u64, now: u64) -> u64 {
    elapsed(start, now) / CYCLE_LENGTH
}

pub fn lock_elapsed(start: u64, now: u64) -> bool {
    elapsed(start, now) >= LOCK_PERIOD
}

pub fn lock_remaining(start: u64, now: u64) -> u64 {
    LOCK_PERIOD.saturating_sub(elapsed(start, now))
}

/// First month boundary strictly after `now`.
pub fn next_interest_due(start: u64, now: u64) -> u64 {
    let months = months_elapsed(start, now).saturating_add(1);
    start.saturating_add(months.saturating_mul(CYCLE_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: u64 = 1_700_000_000;

    #[test]
    fn missed_cycles_counts_whole_periods() {
        assert_eq!(missed_cycles(T0, T0), 0);
        assert_eq!(missed_cycles(T0, T0 + CYCLE_LENGTH - 1), 0);
        assert_eq!(missed_cycles(T0, T0 + CYCLE_LENGTH), 1);
        assert_eq!(missed_cycles(T0, T0 + 3 * CYCLE_LENGTH + 5), 3);
    }

    #[test]
    fn first_deposit_owes_one_contribution() {
        assert_eq!(contributions_due(T0, T0), 1);
        assert_eq!(contributions_due(T0, T0 + 61 * SECONDS_PER_DAY), 3);
    }

    #[test]
    fn clock_behind_reference_is_zero_elapsed() {
        assert_eq!(elapsed(T0, T0 - 10), 0);
        assert_eq!(months_elapsed(T0, T0 - 10), 0);
        assert!(!lock_elapsed(T0, T0 - 10));
    }

    #[test]
    fn lock_window_boundary() {
        assert!(!lock_elapsed(T0, T0 + LOCK_PERIOD - 1));
        assert!(lock_elapsed(T0, T0 + LOCK_PERIOD));
        assert_eq!(lock_remaining(T0, T0), LOCK_PERIOD);
        assert_eq!(lock_remaining(T0, T0 + 10 * SECONDS_PER_DAY), 80 * SECONDS_PER_DAY);
        assert_eq!(lock_remaining(T0, T0 + LOCK_PERIOD + 1), 0);
    }

    #[test]
    fn next_interest_due_advances_by_month() {
        assert_eq!(next_interest_due(T0, T0), T0 + CYCLE_LENGTH);
        assert_eq!(next_interest_due(T0, T0 + CYCLE_LENGTH), T0 + 2 * CYCLE_LENGTH);
        assert_eq!(next_interest_due(T0, T0 + 45 * SECONDS_PER_DAY), T0 + 2 * CYCLE_LENGTH);
    }
}
