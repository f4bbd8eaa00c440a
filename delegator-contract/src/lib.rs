#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

mod validator_ad_proxy;

use shared_types::{
    DelegatorContractState, KeyRegInfo, ValConfigExtra, ValConfigMan,
};
use validator_ad_proxy::ValidatorAdProxy;

pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_CLOSED: &str = "ERR_CLOSED";
pub const ERR_KEYS_ALREADY_DEPOSITED: &str = "ERR_KEYS_ALREADY_DEPOSITED";
pub const ERR_KEYS_NOT_DEPOSITED: &str = "ERR_KEYS_NOT_DEPOSITED";
pub const ERR_KEYS_ALREADY_CONFIRMED: &str = "ERR_KEYS_ALREADY_CONFIRMED";
pub const ERR_KEYS_NOT_CONFIRMED: &str = "ERR_KEYS_NOT_CONFIRMED";
pub const ERR_ZERO_KEY_MATERIAL: &str = "ERR_ZERO_KEY_MATERIAL";
pub const ERR_NOT_DEREG_PAYLOAD: &str = "ERR_NOT_DEREG_PAYLOAD";
pub const ERR_ROUND_START_MISMATCH: &str = "ERR_ROUND_START_MISMATCH";
pub const ERR_ROUND_END_MISMATCH: &str = "ERR_ROUND_END_MISMATCH";
pub const ERR_SEL_KEY_MISMATCH: &str = "ERR_SEL_KEY_MISMATCH";
pub const ERR_VOTE_KEY_MISMATCH: &str = "ERR_VOTE_KEY_MISMATCH";
pub const ERR_STATE_PROOF_KEY_MISMATCH: &str = "ERR_STATE_PROOF_KEY_MISMATCH";
pub const ERR_KEY_DILUTION_MISMATCH: &str = "ERR_KEY_DILUTION_MISMATCH";
pub const ERR_CONFIRM_FOR_FUTURE: &str = "ERR_CONFIRM_FOR_FUTURE";
pub const ERR_OPERATIONAL_FEE_MISMATCH: &str = "ERR_OPERATIONAL_FEE_MISMATCH";
pub const ERR_SETUP_WINDOW_OPEN: &str = "ERR_SETUP_WINDOW_OPEN";
pub const ERR_CONFIRMATION_WINDOW_OPEN: &str = "ERR_CONFIRMATION_WINDOW_OPEN";
pub const ERR_ALREADY_BREACHED: &str = "ERR_ALREADY_BREACHED";
pub const ERR_BREACH_COOLDOWN: &str = "ERR_BREACH_COOLDOWN";
pub const ERR_BALANCE_WITHIN_LIMITS: &str = "ERR_BALANCE_WITHIN_LIMITS";
pub const ERR_OUTSIDE_VALIDITY: &str = "ERR_OUTSIDE_VALIDITY";

/// Agreement between a delegator and a validator under which the validator
/// participates in consensus on the delegator's behalf, for an agreed fee and
/// over an agreed window of rounds. Deployed and driven exclusively by the
/// validator ad that created it; the ad's address is captured at init and
/// acts as the admin for every privileged endpoint.
///
/// Instances cannot be deleted, so every terminal settlement latches `closed`
/// and the contract refuses all further state changes.
#[multiversx_sc::contract]
pub trait DelegatorContract {
    #[init]
    fn init(
        &self,
        noticeboard: ManagedAddress,
        delegator: ManagedAddress,
        round_start: u64,
        round_end: u64,
    ) {
        let validator_ad = self.blockchain().get_caller();

        self.noticeboard().set(&noticeboard);
        self.validator_ad().set(&validator_ad);
        self.delegator().set(&delegator);
        self.round_start().set(round_start);
        self.round_end().set(round_end);
        self.config_man().set(ValConfigMan::zeroed());
        self.config_extra().set(ValConfigExtra::zeroed());
        self.key_reg().set(KeyRegInfo::zeroed());

        // Breach cooldown is measured from contract start until the first
        // breach is recorded.
        self.last_breach_round().set(round_start);

        self.contract_created_event(&validator_ad, &delegator, round_start, round_end);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Stores the mandatory terms agreed at creation time. Called by the
    /// validator ad right after deployment; the ad passes a snapshot of its
    /// own terms, so later ad edits never affect this contract.
    #[endpoint(setMandatory)]
    fn set_mandatory(&self, config: ValConfigMan<Self::Api>) {
        self.require_validator_ad();
        self.require_open();
        self.config_man().set(config);
    }

    #[endpoint(setExtra)]
    fn set_extra(&self, config: ValConfigExtra<Self::Api>) {
        self.require_validator_ad();
        self.require_open();
        self.config_extra().set(config);
    }

    /// Records the participation keys the validator generated for the
    /// delegator. One-shot; the key material must be non-zero and its
    /// validity window must equal the agreed contract window.
    ///
    /// Returns the agreed setup fee the validator becomes eligible for once
    /// the keys are confirmed. No value moves here.
    #[endpoint(depositKeys)]
    fn deposit_keys(&self, key_reg: KeyRegInfo<Self::Api>) -> BigUint {
        self.require_validator_ad();
        self.require_open();
        require!(!self.part_keys_deposited().get(), ERR_KEYS_ALREADY_DEPOSITED);
        require!(!key_reg.is_dereg(), ERR_ZERO_KEY_MATERIAL);
        require!(
            key_reg.round_start == self.round_start().get(),
            ERR_ROUND_START_MISMATCH
        );
        require!(
            key_reg.round_end == self.round_end().get(),
            ERR_ROUND_END_MISMATCH
        );

        self.key_reg().set(&key_reg);
        self.part_keys_deposited().set(true);

        self.keys_deposited_event(&self.delegator().get(), self.blockchain().get_block_nonce());

        self.config_man().get().fee_setup
    }

    /// Confirms the deposited keys on behalf of the delegator. The caller
    /// (the validator ad, forwarding for the noticeboard) re-supplies the
    /// full key material, which must match the deposit field for field; the
    /// operational fee paid upstream must cover the whole agreed window.
    ///
    /// Returns the setup fee the validator has now earned.
    #[endpoint(confirmKeys)]
    fn confirm_keys(
        &self,
        fee_operation_paid: BigUint,
        key_reg: KeyRegInfo<Self::Api>,
    ) -> BigUint {
        self.require_validator_ad();
        self.require_open();
        require!(self.part_keys_deposited().get(), ERR_KEYS_NOT_DEPOSITED);
        require!(!self.keys_confirmed().get(), ERR_KEYS_ALREADY_CONFIRMED);

        let round_start = self.round_start().get();
        let round_end = self.round_end().get();
        let current_round = self.blockchain().get_block_nonce();

        // Consensus participation cannot be confirmed before the window has
        // started.
        require!(round_start < current_round, ERR_CONFIRM_FOR_FUTURE);

        let deposited = self.key_reg().get();
        require!(key_reg.sel_key == deposited.sel_key, ERR_SEL_KEY_MISMATCH);
        require!(key_reg.vote_key == deposited.vote_key, ERR_VOTE_KEY_MISMATCH);
        require!(
            key_reg.state_proof_key == deposited.state_proof_key,
            ERR_STATE_PROOF_KEY_MISMATCH
        );
        require!(
            key_reg.vote_key_dilution == deposited.vote_key_dilution,
            ERR_KEY_DILUTION_MISMATCH
        );
        require!(key_reg.round_start == round_start, ERR_ROUND_START_MISMATCH);
        require!(key_reg.round_end == round_end, ERR_ROUND_END_MISMATCH);

        let config = self.config_man().get();
        let fee_operation_due = &config.fee_round * (round_end - round_start);
        require!(fee_operation_paid == fee_operation_due, ERR_OPERATIONAL_FEE_MISMATCH);

        self.keys_confirmed().set(true);

        self.keys_confirmed_event(&self.delegator().get(), current_round);

        config.fee_setup
    }

    /// Settles the agreement when the validator failed to generate keys
    /// within the agreed setup window. Terminal.
    ///
    /// Returns (deposit, setup fee), both refundable to the delegator.
    #[endpoint(keysNotGenerated)]
    fn keys_not_generated(&self) -> MultiValue2<BigUint, BigUint> {
        self.require_validator_ad();
        self.require_open();
        require!(!self.part_keys_deposited().get(), ERR_KEYS_ALREADY_DEPOSITED);

        let config = self.config_man().get();
        require!(
            self.blockchain().get_block_nonce() > self.round_start().get() + config.setup_rounds,
            ERR_SETUP_WINDOW_OPEN
        );

        self.close(b"keys_not_generated");

        (config.deposit, config.fee_setup).into()
    }

    /// Settles the agreement when the delegator failed to confirm the keys
    /// within the agreed confirmation window. Terminal.
    ///
    /// Returns (deposit, setup fee); the deposit goes back to the delegator,
    /// the setup fee is split as earned since the keys were delivered.
    #[endpoint(keysNotConfirmed)]
    fn keys_not_confirmed(&self) -> MultiValue2<BigUint, BigUint> {
        self.require_validator_ad();
        self.require_open();
        require!(!self.keys_confirmed().get(), ERR_KEYS_ALREADY_CONFIRMED);

        let config = self.config_man().get();
        require!(
            self.blockchain().get_block_nonce()
                > self.round_start().get() + config.setup_rounds + config.confirmation_rounds,
            ERR_CONFIRMATION_WINDOW_OPEN
        );

        self.close(b"keys_not_confirmed");

        (config.deposit, config.fee_setup).into()
    }

    /// Settles a confirmed agreement, either at expiry or prematurely.
    /// Terminal.
    ///
    /// Returns (deposit, refund of unused operational fee, earned operational
    /// fee). If the contract was breached the deposit is forfeited into the
    /// validator's earnings.
    #[endpoint(endContract)]
    fn end_contract(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        self.require_validator_ad();
        self.require_open();
        require!(self.part_keys_deposited().get(), ERR_KEYS_NOT_DEPOSITED);
        require!(self.keys_confirmed().get(), ERR_KEYS_NOT_CONFIRMED);

        let round_start = self.round_start().get();
        let round_end = self.round_end().get();
        let current_round = self.blockchain().get_block_nonce();

        let rounds_remain = if current_round > round_end {
            0
        } else {
            round_end - current_round
        };

        let config = self.config_man().get();
        let mut deposit = config.deposit;
        let refund = &config.fee_round * rounds_remain;
        let mut earned = &config.fee_round * (round_end - round_start - rounds_remain);

        if self.contract_breached().get() {
            earned += &deposit;
            deposit = BigUint::zero();
        }

        self.close(b"ended");

        (deposit, refund, earned).into()
    }

    /// Records a breach of the agreed balance limits on the delegator's
    /// account. Open to anyone, since the evidence is the live account
    /// balance. Latches `contract_breached` once the agreed count is hit.
    #[endpoint(stakeLimitBreach)]
    fn stake_limit_breach(&self) -> bool {
        self.require_open();
        require!(!self.contract_breached().get(), ERR_ALREADY_BREACHED);
        require!(self.keys_confirmed().get(), ERR_KEYS_NOT_CONFIRMED);

        let config = self.config_man().get();
        let current_round = self.blockchain().get_block_nonce();

        require!(
            self.last_breach_round().get() + config.breach_rounds < current_round,
            ERR_BREACH_COOLDOWN
        );

        let balance = self.blockchain().get_balance(&self.delegator().get());
        require!(
            balance > config.max_amt || balance < config.min_amt,
            ERR_BALANCE_WITHIN_LIMITS
        );

        require!(
            self.round_start().get() < current_round && current_round < self.round_end().get(),
            ERR_OUTSIDE_VALIDITY
        );

        let num_breach = self.num_breach().get() + 1;
        let breached = num_breach >= config.max_breach;
        self.num_breach().set(num_breach);
        self.contract_breached().set(breached);
        self.last_breach_round().set(current_round);

        self.breach_recorded_event(&self.delegator().get(), num_breach, breached, current_round);

        breached
    }

    /// Marks the contract breached because the delegator deregistered their
    /// participation keys mid-agreement. Only the validator ad's manager may
    /// call this, and must present the all-zero key payload of a
    /// deregistration as evidence.
    #[endpoint(deregBreach)]
    fn dereg_breach(&self, key_reg: KeyRegInfo<Self::Api>) -> bool {
        self.require_open();
        require!(!self.contract_breached().get(), ERR_ALREADY_BREACHED);
        require!(self.keys_confirmed().get(), ERR_KEYS_NOT_CONFIRMED);
        require!(key_reg.is_dereg(), ERR_NOT_DEREG_PAYLOAD);

        let manager = self
            .tx()
            .to(self.validator_ad().get())
            .typed(ValidatorAdProxy)
            .get_manager()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(self.blockchain().get_caller() == manager, ERR_UNAUTHORIZED);

        self.contract_breached().set(true);

        self.breach_recorded_event(
            &self.delegator().get(),
            self.num_breach().get(),
            true,
            self.blockchain().get_block_nonce(),
        );

        true
    }

    // ----- views -----

    #[view(getContractState)]
    fn get_contract_state(&self) -> DelegatorContractState<Self::Api> {
        DelegatorContractState {
            noticeboard: self.noticeboard().get(),
            validator_ad: self.validator_ad().get(),
            delegator: self.delegator().get(),
            config_man: self.config_man().get(),
            config_extra: self.config_extra().get(),
            round_start: self.round_start().get(),
            round_end: self.round_end().get(),
            part_keys_deposited: self.part_keys_deposited().get(),
            keys_confirmed: self.keys_confirmed().get(),
            num_breach: self.num_breach().get(),
            last_breach_round: self.last_breach_round().get(),
            contract_breached: self.contract_breached().get(),
            closed: self.closed().get(),
        }
    }

    #[view(getRoundEnd)]
    fn get_round_end(&self) -> u64 {
        self.round_end().get()
    }

    #[view(isBreached)]
    fn is_breached(&self) -> bool {
        self.contract_breached().get()
    }

    #[view(getDelegator)]
    fn get_delegator(&self) -> ManagedAddress {
        self.delegator().get()
    }

    // ----- helpers -----

    fn require_validator_ad(&self) {
        require!(
            self.blockchain().get_caller() == self.validator_ad().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_open(&self) {
        require!(!self.closed().get(), ERR_CLOSED);
    }

    fn close(&self, reason: &[u8]) {
        self.closed().set(true);
        self.contract_closed_event(
            &self.delegator().get(),
            &ManagedBuffer::from(reason),
            self.blockchain().get_block_nonce(),
        );
    }

    // ----- events -----

    #[event("contractCreated")]
    fn contract_created_event(
        &self,
        #[indexed] validator_ad: &ManagedAddress,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] round_start: u64,
        round_end: u64,
    );

    #[event("keysDeposited")]
    fn keys_deposited_event(&self, #[indexed] delegator: &ManagedAddress, round: u64);

    #[event("keysConfirmed")]
    fn keys_confirmed_event(&self, #[indexed] delegator: &ManagedAddress, round: u64);

    #[event("breachRecorded")]
    fn breach_recorded_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] num_breach: u64,
        #[indexed] contract_breached: bool,
        round: u64,
    );

    #[event("contractClosed")]
    fn contract_closed_event(
        &self,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] reason: &ManagedBuffer,
        round: u64,
    );

    // ----- storage -----

    #[storage_mapper("noticeboard")]
    fn noticeboard(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("validatorAd")]
    fn validator_ad(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("delegator")]
    fn delegator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("configMan")]
    fn config_man(&self) -> SingleValueMapper<ValConfigMan<Self::Api>>;

    #[storage_mapper("configExtra")]
    fn config_extra(&self) -> SingleValueMapper<ValConfigExtra<Self::Api>>;

    #[storage_mapper("roundStart")]
    fn round_start(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("roundEnd")]
    fn round_end(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("keyReg")]
    fn key_reg(&self) -> SingleValueMapper<KeyRegInfo<Self::Api>>;

    #[storage_mapper("partKeysDeposited")]
    fn part_keys_deposited(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("keysConfirmed")]
    fn keys_confirmed(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("numBreach")]
    fn num_breach(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("lastBreachRound")]
    fn last_breach_round(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("contractBreached")]
    fn contract_breached(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("closed")]
    fn closed(&self) -> SingleValueMapper<bool>;
}
