multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Investment Position — lock/accrual state embedded per participant
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct InvestmentPosition<M: ManagedTypeApi> {
    pub invested: bool,
    /// Principal locked at `invest` time (always the whole liquid balance)
    pub invested_amount: BigUint<M>,
    pub start_timestamp: u64,
    pub next_interest_due: u64,
    /// Snapshot of lazily computed interest as of the last `accrueInterest` call
    pub accrued_interest: BigUint<M>,
}

impl<M: ManagedTypeApi> InvestmentPosition<M> {
    pub fn empty() -> Self {
        InvestmentPosition {
            invested: false,
            invested_amount: BigUint::zero(),
            start_timestamp: 0,
            next_interest_due: 0,
            accrued_interest: BigUint::zero(),
        }
    }
}

// ============================================================
// Participant — one ledger record per registered address
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Participant<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    /// Liquid balance in settlement-asset units
    pub balance: BigUint<M>,
    /// Stored as 0 after each contribution. `getParticipant` and
    /// `getMissedContributions` derive the live count from the timestamp.
    pub missed_contributions: u64,
    pub last_contribution_timestamp: u64,
    /// Lifetime interest paid out through maturity or emergency withdrawals
    pub total_interest_earned: BigUint<M>,
    /// 0 until the first successful withdrawal
    pub last_withdrawal_timestamp: u64,
    pub investment: InvestmentPosition<M>,
}

// ============================================================
// Transaction Log — append-only audit trail
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum TransactionKind {
    Deposit,
    ExchangeDeposit,
    Invest,
    Withdrawal,
    MaturityWithdrawal,
    EmergencyWithdrawal,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct TransactionRecord<M: ManagedTypeApi> {
    pub kind: TransactionKind,
    pub amount: BigUint<M>,
    pub fee: BigUint<M>,
    pub timestamp: u64,
}

// ============================================================
// Vault Config — read-only snapshot of the global parameters
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VaultConfig<M: ManagedTypeApi> {
    pub settlement_token: TokenIdentifier<M>,
    pub fixed_contribution: BigUint<M>,
    /// Monthly return in thousandths (15 = 1.5%)
    pub monthly_interest_rate: u64,
    pub withdrawal_fee_percentage: u64,
    pub emergency_fee_percentage: u64,
    pub slippage_tolerance_bps: u64,
    pub total_participants: u64,
    pub total_savings: BigUint<M>,
    pub collected_fees: BigUint<M>,
    pub active: bool,
}
