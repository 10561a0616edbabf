#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod approval;
pub mod contribution;
pub mod errors;
pub mod events;
pub mod exchange;
pub mod investment;
pub mod pair_proxy;
pub mod schedule;
pub mod storage;
pub mod types;

use errors::{
    ERR_EXCHANGE_FAILED, ERR_INSUFFICIENT_LIQUIDITY, ERR_INVALID_FEE, ERR_INVALID_SLIPPAGE,
    ERR_INVALID_TOKEN, ERR_LOCK_ELAPSED, ERR_LOCK_NOT_ELAPSED, ERR_NOTHING_TO_WITHDRAW,
    ERR_ZERO_AMOUNT,
};
use schedule::{BPS_DENOMINATOR, PERCENT_DENOMINATOR};
use types::{InvestmentPosition, Participant, TransactionKind, TransactionRecord, VaultConfig};

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait SavingsVault:
    storage::StorageModule
    + events::EventsModule
    + contribution::ContributionModule
    + exchange::ExchangeModule
    + investment::InvestmentModule
    + approval::ApprovalModule
    + admin::AdminModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        settlement_token: TokenIdentifier,
        fixed_contribution: BigUint,
        monthly_interest_rate: u64,
        withdrawal_fee_percentage: u64,
        emergency_fee_percentage: u64,
        slippage_tolerance_bps: u64,
    ) {
        require!(settlement_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);
        require!(fixed_contribution > 0u64, ERR_ZERO_AMOUNT);
        require!(withdrawal_fee_percentage <= PERCENT_DENOMINATOR, ERR_INVALID_FEE);
        require!(emergency_fee_percentage <= PERCENT_DENOMINATOR, ERR_INVALID_FEE);
        require!(slippage_tolerance_bps < BPS_DENOMINATOR, ERR_INVALID_SLIPPAGE);

        self.settlement_token().set(&settlement_token);
        self.fixed_contribution().set(&fixed_contribution);
        self.monthly_interest_rate().set(monthly_interest_rate);
        self.withdrawal_fee_percentage().set(withdrawal_fee_percentage);
        self.emergency_fee_percentage().set(emergency_fee_percentage);
        self.slippage_tolerance_bps().set(slippage_tolerance_bps);
        self.total_savings().set(BigUint::zero());
        self.collected_fees().set(BigUint::zero());
        self.active().set(true);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Settlement token is checked against the contribution
    // schedule; supported assets are swapped first.
    // ========================================================

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        self.require_active();
        let payment = self.call_value().single_esdt();
        require!(payment.amount > 0u64, ERR_ZERO_AMOUNT);

        let caller = self.blockchain().get_caller();
        let participant = self.require_participant(&caller);
        let now = self.blockchain().get_block_timestamp();

        let (updated, credited, kind) = if payment.token_identifier == self.settlement_token().get()
        {
            let updated = self.apply_contribution(participant, &payment.amount, now);
            (updated, payment.amount.clone(), TransactionKind::Deposit)
        } else {
            let credited = self.swap_to_settlement(&payment);
            require!(credited > 0u64, ERR_EXCHANGE_FAILED);
            let updated = Participant {
                balance: &participant.balance + &credited,
                ..participant
            };
            (updated, credited, TransactionKind::ExchangeDeposit)
        };

        self.store_participant(&updated);
        self.total_savings().update(|total| *total += &credited);

        self.log_transaction(&caller, kind, &credited, &BigUint::zero(), now);
        self.deposit_event(&caller, &payment.token_identifier, &payment.amount, now, &credited);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Liquid participants withdraw their balance minus the fee;
    // invested participants withdraw principal + interest once the
    // lock window has passed. Both need every other participant's
    // approval for the current cycle.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.require_active();
        let caller = self.blockchain().get_caller();
        let participant = self.require_participant(&caller);
        let now = self.blockchain().get_block_timestamp();

        if participant.investment.invested {
            self.withdraw_matured(participant, now);
        } else {
            self.withdraw_liquid(participant, now);
        }
    }

    fn withdraw_liquid(&self, participant: Participant<Self::Api>, now: u64) {
        self.require_quorum(&participant.address);
        require!(participant.balance > 0u64, ERR_NOTHING_TO_WITHDRAW);

        let withdrawn = participant.balance.clone();
        let fee = self.fee_for(&withdrawn, self.withdrawal_fee_percentage().get());
        let payout = &withdrawn - &fee;
        self.require_backed(&BigUint::zero());

        let address = participant.address.clone();
        self.store_participant(&Participant {
            balance: BigUint::zero(),
            last_withdrawal_timestamp: now,
            ..participant
        });
        self.total_savings().update(|total| *total -= &withdrawn);
        self.collected_fees().update(|fees| *fees += &fee);
        self.reset_approvals(&address);
        self.log_transaction(&address, TransactionKind::Withdrawal, &payout, &fee, now);

        self.send_settlement(&address, &payout);
        self.withdraw_event(&address, &payout, &fee, now);
    }

    fn withdraw_matured(&self, participant: Participant<Self::Api>, now: u64) {
        let position = &participant.investment;
        require!(
            schedule::lock_elapsed(position.start_timestamp, now),
            ERR_LOCK_NOT_ELAPSED
        );
        self.require_quorum(&participant.address);

        let principal = position.invested_amount.clone();
        let interest = self.interest_earned(position, now);
        let payout = &principal + &interest;
        self.require_backed(&interest);

        let address = participant.address.clone();
        self.store_participant(&Participant {
            total_interest_earned: &participant.total_interest_earned + &interest,
            last_withdrawal_timestamp: now,
            investment: InvestmentPosition::empty(),
            ..participant
        });
        self.total_savings().update(|total| *total -= &principal);
        self.reset_approvals(&address);
        self.log_transaction(
            &address,
            TransactionKind::MaturityWithdrawal,
            &payout,
            &BigUint::zero(),
            now,
        );

        self.send_settlement(&address, &payout);
        self.maturity_withdraw_event(&address, &principal, &interest, now);
    }

    // ========================================================
    // ENDPOINT: emergencyWithdraw
    // Bypasses approvals at the emergency fee. Invested funds can
    // only leave this way while still inside the lock window.
    // Stays available while the vault is paused.
    // ========================================================

    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self) {
        let caller = self.blockchain().get_caller();
        let participant = self.require_participant(&caller);
        let now = self.blockchain().get_block_timestamp();
        let fee_percentage = self.emergency_fee_percentage().get();

        let (updated, withdrawn, interest) = if participant.investment.invested {
            let position = &participant.investment;
            require!(
                !schedule::lock_elapsed(position.start_timestamp, now),
                ERR_LOCK_ELAPSED
            );
            require!(position.invested_amount > 0u64, ERR_NOTHING_TO_WITHDRAW);

            let principal = position.invested_amount.clone();
            let interest = self.interest_earned(position, now);
            let updated = Participant {
                total_interest_earned: &participant.total_interest_earned + &interest,
                last_withdrawal_timestamp: now,
                investment: InvestmentPosition::empty(),
                ..participant
            };
            (updated, principal, interest)
        } else {
            require!(participant.balance > 0u64, ERR_NOTHING_TO_WITHDRAW);

            let balance = participant.balance.clone();
            let updated = Participant {
                balance: BigUint::zero(),
                last_withdrawal_timestamp: now,
                ..participant
            };
            (updated, balance, BigUint::zero())
        };

        self.require_backed(&interest);
        let gross = &withdrawn + &interest;
        let fee = self.fee_for(&gross, fee_percentage);
        let payout = &gross - &fee;

        self.store_participant(&updated);
        self.total_savings().update(|total| *total -= &withdrawn);
        self.collected_fees().update(|fees| *fees += &fee);
        self.log_transaction(&caller, TransactionKind::EmergencyWithdrawal, &payout, &fee, now);

        self.send_settlement(&caller, &payout);
        self.emergency_withdraw_event(&caller, &payout, &fee, now);
    }

    // ========================================================
    // INTERNAL: payouts
    // ========================================================

    /// amount * percentage / 100, truncated
    fn fee_for(&self, amount: &BigUint, percentage: u64) -> BigUint {
        (amount * percentage) / PERCENT_DENOMINATOR
    }

    fn settlement_held(&self) -> BigUint {
        let token = EgldOrEsdtTokenIdentifier::esdt(self.settlement_token().get());
        self.blockchain().get_sc_balance(&token, 0)
    }

    /// Savings and collected fees are owed; only the rest can pay interest.
    fn interest_reserve(&self) -> BigUint {
        let held = self.settlement_held();
        let owed = self.total_savings().get() + self.collected_fees().get();
        if held > owed {
            held - owed
        } else {
            BigUint::zero()
        }
    }

    fn require_backed(&self, interest: &BigUint) {
        let owed = self.total_savings().get() + self.collected_fees().get();
        require!(
            self.settlement_held() >= owed + interest,
            ERR_INSUFFICIENT_LIQUIDITY
        );
    }

    /// Called only after every storage write of the operation.
    fn send_settlement(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        self.send()
            .direct_esdt(to, &self.settlement_token().get(), 0, amount);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getBalance)]
    fn get_balance(&self, address: ManagedAddress) -> BigUint {
        self.require_participant(&address).balance
    }

    /// Returns the stored record with the missed-cycle count as of now.
    #[view(getParticipant)]
    fn get_participant(&self, address: ManagedAddress) -> Participant<Self::Api> {
        let participant = self.require_participant(&address);
        let now = self.blockchain().get_block_timestamp();
        Participant {
            missed_contributions: schedule::missed_cycles(
                participant.last_contribution_timestamp,
                now,
            ),
            ..participant
        }
    }

    #[view(getParticipants)]
    fn get_participants(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let start = from as usize;
        let end = start.saturating_add(count as usize);

        for (idx, address) in self.participants().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(address);
            }
        }
        result
    }

    #[view(getTransactionLog)]
    fn get_transaction_log(
        &self,
        address: ManagedAddress,
    ) -> MultiValueEncoded<TransactionRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for record in self.transaction_log(&address).iter() {
            result.push(record);
        }
        result
    }

    #[view(getTotalSavings)]
    fn get_total_savings(&self) -> BigUint {
        self.total_savings().get()
    }

    #[view(getInterestReserve)]
    fn get_interest_reserve(&self) -> BigUint {
        self.interest_reserve()
    }

    #[view(isActive)]
    fn is_active(&self) -> bool {
        self.active().get()
    }

    #[view(getVaultConfig)]
    fn get_vault_config(&self) -> VaultConfig<Self::Api> {
        VaultConfig {
            settlement_token: self.settlement_token().get(),
            fixed_contribution: self.fixed_contribution().get(),
            monthly_interest_rate: self.monthly_interest_rate().get(),
            withdrawal_fee_percentage: self.withdrawal_fee_percentage().get(),
            emergency_fee_percentage: self.emergency_fee_percentage().get(),
            slippage_tolerance_bps: self.slippage_tolerance_bps().get(),
            total_participants: self.total_participants(),
            total_savings: self.total_savings().get(),
            collected_fees: self.collected_fees().get(),
            active: self.active().get(),
        }
    }
}
