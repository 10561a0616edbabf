multiversx_sc::imports!();

use crate::errors::{ERR_NOT_PARTICIPANT, ERR_PAUSED};
use crate::types::{Participant, TransactionKind, TransactionRecord};

#[multiversx_sc::module]
pub trait StorageModule {
    // ========================================================
    // Registry access
    // ========================================================

    fn require_active(&self) {
        require!(self.active().get(), ERR_PAUSED);
    }

    fn require_participant(&self, address: &ManagedAddress) -> Participant<Self::Api> {
        require!(self.participants().contains(address), ERR_NOT_PARTICIPANT);
        self.participant(address).get()
    }

    /// Replaces the whole record; callers build the new value first.
    fn store_participant(&self, participant: &Participant<Self::Api>) {
        self.participant(&participant.address).set(participant);
    }

    fn log_transaction(
        &self,
        address: &ManagedAddress,
        kind: TransactionKind,
        amount: &BigUint,
        fee: &BigUint,
        timestamp: u64,
    ) {
        self.transaction_log(address).push(&TransactionRecord {
            kind,
            amount: amount.clone(),
            fee: fee.clone(),
            timestamp,
        });
    }

    fn total_participants(&self) -> u64 {
        self.participants().len() as u64
    }

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("settlementToken")]
    fn settlement_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("fixedContribution")]
    fn fixed_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("monthlyInterestRate")]
    fn monthly_interest_rate(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("withdrawalFeePercentage")]
    fn withdrawal_fee_percentage(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("emergencyFeePercentage")]
    fn emergency_fee_percentage(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("slippageToleranceBps")]
    fn slippage_tolerance_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("supportedAssets")]
    fn supported_assets(&self) -> MapMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper("active")]
    fn active(&self) -> SingleValueMapper<bool>;

    // ── Vault totals ──

    #[storage_mapper("totalSavings")]
    fn total_savings(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("collectedFees")]
    fn collected_fees(&self) -> SingleValueMapper<BigUint>;

    // ── Participants ──

    #[storage_mapper("participants")]
    fn participants(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("participant")]
    fn participant(&self, address: &ManagedAddress) -> SingleValueMapper<Participant<Self::Api>>;

    #[storage_mapper("transactionLog")]
    fn transaction_log(&self, address: &ManagedAddress) -> VecMapper<TransactionRecord<Self::Api>>;

    // ── Withdrawal approvals, keyed by the target's current cycle ──

    #[storage_mapper("withdrawalCycle")]
    fn withdrawal_cycle(&self, target: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("approvers")]
    fn approvers(&self, target: &ManagedAddress, cycle: u64) -> UnorderedSetMapper<ManagedAddress>;
}
