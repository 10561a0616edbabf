multiversx_sc::imports!();

use crate::errors::{ERR_EXCHANGE_FAILED, ERR_UNSUPPORTED_ASSET};
use crate::pair_proxy::PairProxy;
use crate::schedule::BPS_DENOMINATOR;
use crate::storage;

#[multiversx_sc::module]
pub trait ExchangeModule: storage::StorageModule {
    /// Swaps a supported non-primary payment into the settlement token and
    /// returns the settlement amount actually received.
    fn swap_to_settlement(&self, payment: &EsdtTokenPayment<Self::Api>) -> BigUint {
        let pair = match self.supported_assets().get(&payment.token_identifier) {
            Some(pair) => pair,
            None => sc_panic!(ERR_UNSUPPORTED_ASSET),
        };
        let settlement_token = self.settlement_token().get();

        let quote: BigUint = self
            .tx()
            .to(&pair)
            .typed(PairProxy)
            .get_amount_out(payment.token_identifier.clone(), payment.amount.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();

        let min_amount_out = self.min_amount_out(&quote);
        require!(min_amount_out > 0u64, ERR_EXCHANGE_FAILED);

        let received: EsdtTokenPayment<Self::Api> = self
            .tx()
            .to(&pair)
            .typed(PairProxy)
            .swap_tokens_fixed_input(settlement_token.clone(), min_amount_out.clone())
            .single_esdt(&payment.token_identifier, 0, &payment.amount)
            .returns(ReturnsResult)
            .sync_call();

        require!(
            received.token_identifier == settlement_token && received.amount >= min_amount_out,
            ERR_EXCHANGE_FAILED
        );

        received.amount
    }

    /// quote * (10_000 - slippage_bps) / 10_000
    fn min_amount_out(&self, quote: &BigUint) -> BigUint {
        let slippage = self.slippage_tolerance_bps().get();
        (quote * (BPS_DENOMINATOR - slippage)) / BPS_DENOMINATOR
    }

    #[view(isSupportedAsset)]
    fn is_supported_asset(&self, token: TokenIdentifier) -> bool {
        token == self.settlement_token().get() || self.supported_assets().contains_key(&token)
    }
}
