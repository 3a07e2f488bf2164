use soroban_sdk::{token, Address, Env};

/// Move a donor's payment into the contract
pub fn collect(env: &Env, token_address: &Address, from: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, token_address);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Single transfer out of the contract to `recipient`
pub fn pay_out(env: &Env, token_address: &Address, recipient: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }

    let token_client = token::TokenClient::new(env, token_address);
    token_client.transfer(&env.current_contract_address(), recipient, &amount);
}

/// Everything the contract holds across all campaigns
pub fn pooled_balance(env: &Env, token_address: &Address) -> i128 {
    let token_client = token::TokenClient::new(env, token_address);
    token_client.balance(&env.current_contract_address())
}
