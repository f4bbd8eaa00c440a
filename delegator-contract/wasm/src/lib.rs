#![no_std]

multiversx_sc_wasm_adapter::allocator!();
multiversx_sc_wasm_adapter::panic_handler!();

multiversx_sc_wasm_adapter::endpoints! {
    delegator_contract
    (
        init => init
        upgrade => upgrade
        setMandatory => set_mandatory
        setExtra => set_extra
        depositKeys => deposit_keys
        confirmKeys => confirm_keys
        keysNotGenerated => keys_not_generated
        keysNotConfirmed => keys_not_confirmed
        endContract => end_contract
        stakeLimitBreach => stake_limit_breach
        deregBreach => dereg_breach
        getContractState => get_contract_state
        getRoundEnd => get_round_end
        isBreached => is_breached
        getDelegator => get_delegator
    )
}

multiversx_sc_wasm_adapter::async_callback_empty! {}
