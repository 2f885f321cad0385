use soroban_sdk::{token::TokenClient, Address, Env};

/// Move `amount` of `token` from `from` to `to`. A declined transfer traps
/// the host and rolls back the whole invocation, so callers never observe a
/// partially applied operation.
pub fn transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: &i128) {
    TokenClient::new(env, token).transfer(from, to, amount);
}
