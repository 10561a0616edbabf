multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_REGISTERED, ERR_INVALID_ADDRESS, ERR_INVALID_FEE, ERR_INVALID_PAIR,
    ERR_INVALID_SLIPPAGE, ERR_INVALID_TOKEN, ERR_NO_FEES, ERR_UNSUPPORTED_ASSET, ERR_ZERO_AMOUNT,
};
use crate::events;
use crate::schedule::{BPS_DENOMINATOR, PERCENT_DENOMINATOR};
use crate::storage;
use crate::types::{InvestmentPosition, Participant};

#[multiversx_sc::module]
pub trait AdminModule: storage::StorageModule + events::EventsModule {
    // ========================================================
    // Registry
    // ========================================================

    #[only_owner]
    #[endpoint(registerParticipant)]
    fn register_participant(&self, address: ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
        require!(!self.participants().contains(&address), ERR_ALREADY_REGISTERED);

        let now = self.blockchain().get_block_timestamp();
        self.participants().insert(address.clone());
        self.store_participant(&Participant {
            address: address.clone(),
            balance: BigUint::zero(),
            missed_contributions: 0,
            last_contribution_timestamp: now,
            total_interest_earned: BigUint::zero(),
            last_withdrawal_timestamp: 0,
            investment: InvestmentPosition::empty(),
        });

        self.participant_registered_event(&address, now);
    }

    // ========================================================
    // Parameters
    // ========================================================

    #[only_owner]
    #[endpoint(setFixedContribution)]
    fn set_fixed_contribution(&self, amount: BigUint) {
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        let old = self.fixed_contribution().replace(amount.clone());
        self.fixed_contribution_updated_event(&old, &amount);
    }

    #[only_owner]
    #[endpoint(setWithdrawalFee)]
    fn set_withdrawal_fee(&self, percentage: u64) {
        require!(percentage <= PERCENT_DENOMINATOR, ERR_INVALID_FEE);
        let old = self.withdrawal_fee_percentage().replace(percentage);
        self.withdrawal_fee_updated_event(old, percentage);
    }

    #[only_owner]
    #[endpoint(setEmergencyWithdrawalFee)]
    fn set_emergency_withdrawal_fee(&self, percentage: u64) {
        require!(percentage <= PERCENT_DENOMINATOR, ERR_INVALID_FEE);
        let old = self.emergency_fee_percentage().replace(percentage);
        self.emergency_fee_updated_event(old, percentage);
    }

    /// Monthly rate in thousandths (15 = 1.5%)
    #[only_owner]
    #[endpoint(setInterestRate)]
    fn set_interest_rate(&self, rate: u64) {
        let old = self.monthly_interest_rate().replace(rate);
        self.interest_rate_updated_event(old, rate);
    }

    #[only_owner]
    #[endpoint(setSlippageTolerance)]
    fn set_slippage_tolerance(&self, bps: u64) {
        require!(bps < BPS_DENOMINATOR, ERR_INVALID_SLIPPAGE);
        let old = self.slippage_tolerance_bps().replace(bps);
        self.slippage_tolerance_updated_event(old, bps);
    }

    #[only_owner]
    #[endpoint(addSupportedAsset)]
    fn add_supported_asset(&self, token: TokenIdentifier, pair: ManagedAddress) {
        require!(token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(token != self.settlement_token().get(), ERR_INVALID_TOKEN);
        require!(!pair.is_zero(), ERR_INVALID_PAIR);

        self.supported_assets().insert(token.clone(), pair.clone());
        self.supported_asset_added_event(&token, &pair);
    }

    #[only_owner]
    #[endpoint(removeSupportedAsset)]
    fn remove_supported_asset(&self, token: TokenIdentifier) {
        require!(
            self.supported_assets().remove(&token).is_some(),
            ERR_UNSUPPORTED_ASSET
        );
        self.supported_asset_removed_event(&token);
    }

    // ========================================================
    // Lifecycle
    // ========================================================

    #[only_owner]
    #[endpoint(pause)]
    fn pause(&self) {
        self.active().set(false);
        self.paused_event(self.blockchain().get_block_timestamp());
    }

    #[only_owner]
    #[endpoint(activate)]
    fn activate(&self) {
        self.active().set(true);
        self.activated_event(self.blockchain().get_block_timestamp());
    }

    // ========================================================
    // Treasury
    // ========================================================

    /// Tops up the liquidity that interest payouts are drawn from.
    #[only_owner]
    #[payable("*")]
    #[endpoint(fundReserve)]
    fn fund_reserve(&self) {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.settlement_token().get(),
            ERR_UNSUPPORTED_ASSET
        );
        require!(payment.amount > 0u64, ERR_ZERO_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.reserve_funded_event(&caller, &payment.amount);
    }

    #[only_owner]
    #[endpoint(claimFees)]
    fn claim_fees(&self) {
        let fees = self.collected_fees().take();
        require!(fees > 0u64, ERR_NO_FEES);

        let owner = self.blockchain().get_caller();
        self.send()
            .direct_esdt(&owner, &self.settlement_token().get(), 0, &fees);
        self.fees_claimed_event(&owner, &fees);
    }
}
