#![no_std]

multiversx_sc_wasm_adapter::allocator!();
multiversx_sc_wasm_adapter::panic_handler!();

multiversx_sc_wasm_adapter::endpoints! {
    validator_ad
    (
        init => init
        upgrade => upgrade
        setMandatory => set_mandatory
        setExtra => set_extra
        endValidatorAd => end_validator_ad
        withdrawEarnings => withdraw_earnings
        createDelegatorContract => create_delegator_contract
        depositKeys => deposit_keys
        confirmKeys => confirm_keys
        keysNotGenerated => keys_not_generated
        keysNotConfirmed => keys_not_confirmed
        endDelegatorContract => end_delegator_contract
        getManager => get_manager
        getStatus => get_status
        getDelegators => get_delegators
    )
}

multiversx_sc_wasm_adapter::async_callback_empty! {}
