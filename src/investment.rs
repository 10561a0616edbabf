multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_INVESTED, ERR_INSUFFICIENT_BALANCE_TO_INVEST, ERR_NOT_INVESTED};
use crate::events;
use crate::schedule::{self, INVESTMENT_THRESHOLD_MULTIPLIER, RATE_DENOMINATOR};
use crate::storage;
use crate::types::{InvestmentPosition, Participant, TransactionKind};

#[multiversx_sc::module]
pub trait InvestmentModule: storage::StorageModule + events::EventsModule {
    // ========================================================
    // ENDPOINT: invest
    // Locks the caller's entire liquid balance for the lock window.
    // ========================================================

    #[endpoint(invest)]
    fn invest(&self) {
        self.require_active();
        let caller = self.blockchain().get_caller();
        let participant = self.require_participant(&caller);

        require!(!participant.investment.invested, ERR_ALREADY_INVESTED);

        let threshold = &self.fixed_contribution().get() * INVESTMENT_THRESHOLD_MULTIPLIER;
        require!(
            participant.balance > 0u64 && participant.balance >= threshold,
            ERR_INSUFFICIENT_BALANCE_TO_INVEST
        );

        let now = self.blockchain().get_block_timestamp();
        let principal = participant.balance.clone();
        let position = InvestmentPosition {
            invested: true,
            invested_amount: principal.clone(),
            start_timestamp: now,
            next_interest_due: schedule::next_interest_due(now, now),
            accrued_interest: BigUint::zero(),
        };
        let next_interest_due = position.next_interest_due;

        self.store_participant(&Participant {
            balance: BigUint::zero(),
            investment: position,
            ..participant
        });

        self.log_transaction(&caller, TransactionKind::Invest, &principal, &BigUint::zero(), now);
        self.invest_event(&caller, &principal, now, next_interest_due);
    }

    // ========================================================
    // ENDPOINT: accrueInterest
    // Records the lazily computed interest on the position. Never
    // compounds and never moves funds.
    // ========================================================

    #[endpoint(accrueInterest)]
    fn accrue_interest(&self) {
        self.require_active();
        let caller = self.blockchain().get_caller();
        let participant = self.require_participant(&caller);
        require!(participant.investment.invested, ERR_NOT_INVESTED);

        let now = self.blockchain().get_block_timestamp();
        let accrued_interest = self.interest_earned(&participant.investment, now);
        let start = participant.investment.start_timestamp;

        self.store_participant(&Participant {
            investment: InvestmentPosition {
                next_interest_due: schedule::next_interest_due(start, now),
                accrued_interest: accrued_interest.clone(),
                ..participant.investment.clone()
            },
            ..participant
        });

        self.interest_accrued_event(&caller, now, &accrued_interest);
    }

    // ========================================================
    // INTERNAL: interest math
    // ========================================================

    /// principal * monthly_rate * months_elapsed / 1000, truncated.
    fn interest_earned(&self, position: &InvestmentPosition<Self::Api>, now: u64) -> BigUint {
        if !position.invested {
            return BigUint::zero();
        }

        let months = schedule::months_elapsed(position.start_timestamp, now);
        let rate = self.monthly_interest_rate().get();
        (&position.invested_amount * rate * months) / RATE_DENOMINATOR
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(checkInterestEarned)]
    fn check_interest_earned(&self, address: ManagedAddress) -> BigUint {
        let participant = self.require_participant(&address);
        let now = self.blockchain().get_block_timestamp();
        self.interest_earned(&participant.investment, now)
    }

    #[view(getTimeRemainingToUnlock)]
    fn get_time_remaining_to_unlock(&self, address: ManagedAddress) -> u64 {
        let participant = self.require_participant(&address);
        if !participant.investment.invested {
            return 0;
        }

        let now = self.blockchain().get_block_timestamp();
        schedule::lock_remaining(participant.investment.start_timestamp, now)
    }
}
