#![no_std]

multiversx_sc_wasm_adapter::allocator!();
multiversx_sc_wasm_adapter::panic_handler!();

multiversx_sc_wasm_adapter::endpoints! {
    noticeboard
    (
        init => init
        upgrade => upgrade
        setup => setup
        userOptIn => user_opt_in
        createValidatorAd => create_validator_ad
        setValidatorAdMandatory => set_validator_ad_mandatory
        setValidatorAdExtra => set_validator_ad_extra
        endValidatorAd => end_validator_ad
        valWithdrawEarnings => val_withdraw_earnings
        createDelegatorContract => create_delegator_contract
        depositKeys => deposit_keys
        confirmKeys => confirm_keys
        keysNotGenerated => keys_not_generated
        keysNotConfirmed => keys_not_confirmed
        endExpiredOrBreachedDelegatorContract => end_expired_or_breached_delegator_contract
        endActiveDelegatorContract => end_active_delegator_contract
        withdrawBalance => withdraw_balance
        withdrawDeposit => withdraw_deposit
        getConfig => get_config
        getUserInfo => get_user_info
        getValidators => get_validators
        getBlockedAmount => get_blocked_amount
    )
}

multiversx_sc_wasm_adapter::async_callback_empty! {}
