multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Participant operations ──

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] timestamp: u64,
        credited: &BigUint,
    );

    #[event("invest")]
    fn invest_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] timestamp: u64,
        next_interest_due: u64,
    );

    #[event("interestAccrued")]
    fn interest_accrued_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] timestamp: u64,
        accrued_interest: &BigUint,
    );

    #[event("withdrawalApproved")]
    fn withdrawal_approved_event(
        &self,
        #[indexed] target: &ManagedAddress,
        #[indexed] approver: &ManagedAddress,
        #[indexed] cycle: u64,
        #[indexed] timestamp: u64,
        approval_count: u64,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] fee: &BigUint,
        timestamp: u64,
    );

    #[event("maturityWithdraw")]
    fn maturity_withdraw_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] principal: &BigUint,
        #[indexed] interest: &BigUint,
        timestamp: u64,
    );

    #[event("emergencyWithdraw")]
    fn emergency_withdraw_event(
        &self,
        #[indexed] participant: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] fee: &BigUint,
        timestamp: u64,
    );

    // ── Administration ──

    #[event("participantRegistered")]
    fn participant_registered_event(&self, #[indexed] participant: &ManagedAddress, timestamp: u64);

    #[event("fixedContributionUpdated")]
    fn fixed_contribution_updated_event(&self, #[indexed] old: &BigUint, new: &BigUint);

    #[event("withdrawalFeeUpdated")]
    fn withdrawal_fee_updated_event(&self, #[indexed] old: u64, new: u64);

    #[event("emergencyFeeUpdated")]
    fn emergency_fee_updated_event(&self, #[indexed] old: u64, new: u64);

    #[event("interestRateUpdated")]
    fn interest_rate_updated_event(&self, #[indexed] old: u64, new: u64);

    #[event("slippageToleranceUpdated")]
    fn slippage_tolerance_updated_event(&self, #[indexed] old: u64, new: u64);

    #[event("supportedAssetAdded")]
    fn supported_asset_added_event(&self, #[indexed] token: &TokenIdentifier, pair: &ManagedAddress);

    #[event("supportedAssetRemoved")]
    fn supported_asset_removed_event(&self, #[indexed] token: &TokenIdentifier);

    #[event("paused")]
    fn paused_event(&self, #[indexed] timestamp: u64);

    #[event("activated")]
    fn activated_event(&self, #[indexed] timestamp: u64);

    #[event("reserveFunded")]
    fn reserve_funded_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);

    #[event("feesClaimed")]
    fn fees_claimed_event(&self, #[indexed] receiver: &ManagedAddress, amount: &BigUint);
}
