multiversx_sc::imports!();

use crate::errors::ERR_BELOW_REQUIRED_CONTRIBUTION;
use crate::schedule;
use crate::storage;
use crate::types::Participant;

#[multiversx_sc::module]
pub trait ContributionModule: storage::StorageModule {
    /// fixed_contribution * (missed_cycles + 1)
    fn required_contribution(&self, participant: &Participant<Self::Api>, now: u64) -> BigUint {
        let due = schedule::contributions_due(participant.last_contribution_timestamp, now);
        &self.fixed_contribution().get() * due
    }

    /// Validates a settlement-token deposit against the schedule and returns
    /// the credited record with the schedule reset to `now`.
    fn apply_contribution(
        &self,
        participant: Participant<Self::Api>,
        amount: &BigUint,
        now: u64,
    ) -> Participant<Self::Api> {
        let required = self.required_contribution(&participant, now);
        require!(amount >= &required, ERR_BELOW_REQUIRED_CONTRIBUTION);

        Participant {
            balance: &participant.balance + amount,
            missed_contributions: 0,
            last_contribution_timestamp: now,
            ..participant
        }
    }

    #[view(getMissedContributions)]
    fn get_missed_contributions(&self, address: ManagedAddress) -> u64 {
        let participant = self.require_participant(&address);
        let now = self.blockchain().get_block_timestamp();
        schedule::missed_cycles(participant.last_contribution_timestamp, now)
    }

    #[view(getRequiredContribution)]
    fn get_required_contribution(&self, address: ManagedAddress) -> BigUint {
        let participant = self.require_participant(&address);
        let now = self.blockchain().get_block_timestamp();
        self.required_contribution(&participant, now)
    }
}
