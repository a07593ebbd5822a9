multiversx_sc::imports!();

use crate::errors::{ERR_GUILD_BANK_INSUFFICIENT, ERR_NO_SHARES_OUTSTANDING};

// ============================================================
// Guild Bank — treasury custody ledger
//
// The contract account holds every token physically. This
// module tracks the part of that balance owned by the guild
// treasury, as opposed to tributes and deposits still in
// escrow. Payouts are internal functions, never endpoints:
// only the guild engine itself can move treasury funds.
// ============================================================

#[multiversx_sc::module]
pub trait GuildBankModule {
    fn deposit_to_guild_bank(&self, token: &TokenIdentifier, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        self.guild_bank_balance(token)
            .update(|balance| *balance += amount);
    }

    /// Pays `floor(balance * shares_to_burn / total_shares)` of every
    /// listed token to `receiver`. The whole list is paid out.
    fn pay_proportional(
        &self,
        receiver: &ManagedAddress,
        shares_to_burn: &BigUint,
        total_shares: &BigUint,
        tokens: &ManagedVec<TokenIdentifier>,
    ) {
        require!(*total_shares > 0u64, ERR_NO_SHARES_OUTSTANDING);

        for token in tokens.iter() {
            let balance_mapper = self.guild_bank_balance(&token);
            let amount = &(&balance_mapper.get() * shares_to_burn) / total_shares;
            if amount == 0u64 {
                continue;
            }

            balance_mapper.update(|balance| *balance -= &amount);
            self.send().direct_esdt(receiver, &token, 0, &amount);
            self.withdrawal_event(receiver, &token, &amount);
        }
    }

    fn pay_fixed(&self, token: &TokenIdentifier, receiver: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }

        let balance_mapper = self.guild_bank_balance(token);
        require!(
            balance_mapper.get() >= *amount,
            ERR_GUILD_BANK_INSUFFICIENT
        );

        balance_mapper.update(|balance| *balance -= amount);
        self.send().direct_esdt(receiver, token, 0, amount);
        self.withdrawal_event(receiver, token, amount);
    }

    #[view(getGuildBankBalance)]
    fn get_guild_bank_balance(&self, token: TokenIdentifier) -> BigUint {
        self.guild_bank_balance(&token).get()
    }

    #[event("withdrawal")]
    fn withdrawal_event(
        &self,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );

    #[storage_mapper("guildBankBalance")]
    fn guild_bank_balance(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;
}
