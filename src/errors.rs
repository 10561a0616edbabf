pub const ERR_PAUSED: &str = "Vault is paused";
pub const ERR_NOT_PARTICIPANT: &str = "Caller is not a registered participant";
pub const ERR_TARGET_NOT_PARTICIPANT: &str = "Target is not a registered participant";
pub const ERR_INVALID_ADDRESS: &str = "Invalid participant address";
pub const ERR_ALREADY_REGISTERED: &str = "Participant already registered";

pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_UNSUPPORTED_ASSET: &str = "Unsupported asset";
pub const ERR_BELOW_REQUIRED_CONTRIBUTION: &str = "Deposit below required contribution";
pub const ERR_EXCHANGE_FAILED: &str = "Exchange returned insufficient settlement amount";

pub const ERR_ALREADY_INVESTED: &str = "Already invested";
pub const ERR_NOT_INVESTED: &str = "No active investment";
pub const ERR_INSUFFICIENT_BALANCE_TO_INVEST: &str = "Balance below investment threshold";

pub const ERR_SELF_APPROVAL: &str = "Cannot approve own withdrawal";
pub const ERR_ALREADY_APPROVED: &str = "Withdrawal already approved by caller";
pub const ERR_QUORUM_NOT_MET: &str = "Not enough approvals to withdraw";

pub const ERR_NOTHING_TO_WITHDRAW: &str = "Nothing to withdraw";
pub const ERR_LOCK_NOT_ELAPSED: &str = "Investment lock period has not elapsed";
pub const ERR_LOCK_ELAPSED: &str = "Lock period elapsed, use withdraw";
pub const ERR_INSUFFICIENT_LIQUIDITY: &str = "Insufficient vault liquidity";

pub const ERR_INVALID_FEE: &str = "Fee percentage must be between 0 and 100";
pub const ERR_INVALID_SLIPPAGE: &str = "Slippage tolerance must be below 10000 basis points";
pub const ERR_INVALID_TOKEN: &str = "Invalid token identifier";
pub const ERR_INVALID_PAIR: &str = "Invalid exchange pair address";
pub const ERR_NO_FEES: &str = "No fees to claim";
