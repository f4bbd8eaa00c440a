#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

mod delegator_contract_proxy;
mod validator_ad_proxy;

use delegator_contract_proxy::DelegatorContractProxy;
use shared_types::{
    KeyRegInfo, NoticeboardConfig, UserInfo, ValConfigExtra, ValConfigMan,
    EARN_FACTOR_DENOMINATOR, MAX_DEL_CNT, MAX_VAL_CNT, RESERVE_DELEGATOR_CONTRACT_CREATION,
    RESERVE_VALIDATOR_AD_CREATION, RESERVE_VALIDATOR_REGISTRY_CREATION,
};
use validator_ad_proxy::ValidatorAdProxy;

pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_NOT_LIVE: &str = "ERR_NOT_LIVE";
pub const ERR_ALREADY_LIVE: &str = "ERR_ALREADY_LIVE";
pub const ERR_ROLE_ACTIVE: &str = "ERR_ROLE_ACTIVE";
pub const ERR_NOT_VALIDATOR: &str = "ERR_NOT_VALIDATOR";
pub const ERR_NOT_DELEGATOR: &str = "ERR_NOT_DELEGATOR";
pub const ERR_REGISTRY_FULL: &str = "ERR_REGISTRY_FULL";
pub const ERR_NOT_IN_REGISTRY: &str = "ERR_NOT_IN_REGISTRY";
pub const ERR_DEPOSIT_TOO_LOW: &str = "ERR_DEPOSIT_TOO_LOW";
pub const ERR_DEPOSIT_RATIO: &str = "ERR_DEPOSIT_RATIO";
pub const ERR_INVALID_EARN_FACTOR: &str = "ERR_INVALID_EARN_FACTOR";
pub const ERR_PAYMENT_MISMATCH: &str = "ERR_PAYMENT_MISMATCH";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "ERR_NOTHING_TO_WITHDRAW";
pub const ERR_CONTRACT_STILL_ACTIVE: &str = "ERR_CONTRACT_STILL_ACTIVE";
pub const ERR_NOT_DEREG_PAYLOAD: &str = "ERR_NOT_DEREG_PAYLOAD";
pub const ERR_INVALID_LIMITS: &str = "ERR_INVALID_LIMITS";
pub const ERR_DEPOSIT_BELOW_PLATFORM_MIN: &str = "ERR_DEPOSIT_BELOW_PLATFORM_MIN";

/// Platform singleton of the consensus-delegation marketplace. Validators
/// post ads offering to run nodes; delegators conclude per-agreement
/// contracts with a chosen validator. All EGLD of the platform is escrowed
/// here; `blocked_amt` tracks the part that belongs to users (deposits,
/// balances, undistributed fees) and can never be touched by the platform.
///
/// Each account holds at most one role at a time: validator (owns an ad) or
/// delegator (party to one contract). The role is freed at settlement,
/// after which the account can withdraw its deposit and balance.
#[multiversx_sc::contract]
pub trait Noticeboard {
    #[init]
    fn init(&self) {
        let owner = self.blockchain().get_caller();
        self.owner().set(owner);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Configures the platform and opens it for business. Owner only, once.
    /// The attached payment is the permanent storage reserve for the
    /// validator registry.
    #[payable("EGLD")]
    #[endpoint(setup)]
    fn setup(
        &self,
        deposit_val_min: BigUint,
        deposit_del_min: BigUint,
        val_earn_factor: u64,
        validator_ad_template: ManagedAddress,
        delegator_template: ManagedAddress,
        manager: ManagedAddress,
    ) {
        require!(!self.live().get(), ERR_ALREADY_LIVE);
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_UNAUTHORIZED
        );

        // A validator's deposit must be able to cover the deposit of each
        // delegator it can take on.
        require!(
            &deposit_del_min * (MAX_DEL_CNT as u64) <= deposit_val_min,
            ERR_DEPOSIT_RATIO
        );
        require!(
            val_earn_factor > 0 && val_earn_factor < EARN_FACTOR_DENOMINATOR,
            ERR_INVALID_EARN_FACTOR
        );

        let payment = self.call_value().egld_value().clone_value();
        require!(
            payment == BigUint::from(RESERVE_VALIDATOR_REGISTRY_CREATION),
            ERR_PAYMENT_MISMATCH
        );

        self.deposit_val_min().set(deposit_val_min);
        self.deposit_del_min().set(deposit_del_min);
        self.val_earn_factor().set(val_earn_factor);
        self.validator_ad_template().set(validator_ad_template);
        self.delegator_template().set(delegator_template);
        self.manager().set(manager);

        let mut registry = ManagedVec::new();
        for _ in 0..MAX_VAL_CNT {
            registry.push(ManagedAddress::zero());
        }
        self.validators().set(registry);

        self.live().set(true);

        self.platform_setup_event(val_earn_factor);
    }

    /// Registers the caller's account with the platform with a blank ledger
    /// entry. Refused once the account holds a role or funds.
    #[endpoint(userOptIn)]
    fn user_opt_in(&self) {
        let caller = self.blockchain().get_caller();
        let mapper = self.user_info(&caller);
        if !mapper.is_empty() {
            let user = mapper.get();
            require!(
                user.is_free() && user.deposit == 0u64 && user.balance == 0u64,
                ERR_ROLE_ACTIVE
            );
        }
        mapper.set(UserInfo::zeroed());

        self.user_opted_in_event(&caller);
    }

    // ----- validator ad management -----

    /// Posts a new validator ad for the caller. The payment covers the
    /// validator's deposit plus the ad's storage reserve; the reserve is
    /// credited back to the validator when the ad ends. Returns the new
    /// ad's address.
    #[payable("EGLD")]
    #[endpoint(createValidatorAd)]
    fn create_validator_ad(&self) -> ManagedAddress {
        require!(self.live().get(), ERR_NOT_LIVE);

        let caller = self.blockchain().get_caller();
        let mut user = self.user_or_default(&caller);
        require!(user.is_free(), ERR_ROLE_ACTIVE);

        let payment = self.call_value().egld_value().clone_value();
        let reserve = BigUint::from(RESERVE_VALIDATOR_AD_CREATION);
        require!(payment > reserve, ERR_PAYMENT_MISMATCH);
        let deposit = &payment - &reserve;
        require!(deposit >= self.deposit_val_min().get(), ERR_DEPOSIT_TOO_LOW);

        let val_ad = self
            .tx()
            .raw_deploy()
            .from_source(self.validator_ad_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .argument(&caller)
            .argument(&self.val_earn_factor().get())
            .argument(&deposit)
            .argument(&self.delegator_template().get())
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.registry_add(&val_ad);

        user.val_ad = val_ad.clone();
        user.deposit = deposit;
        self.user_info(&caller).set(user);

        self.blocked_amt().update(|b| *b += &payment);

        self.validator_ad_created_event(&val_ad, &caller);

        val_ad
    }

    /// Updates the caller's ad terms and operational settings. The agreed
    /// per-delegator deposit must cover the platform's delegator minimum so
    /// every future contract satisfies it.
    #[endpoint(setValidatorAdMandatory)]
    fn set_validator_ad_mandatory(
        &self,
        config: ValConfigMan<Self::Api>,
        live: bool,
        manager: ManagedAddress,
        max_del_cnt: u64,
    ) {
        let caller = self.blockchain().get_caller();
        let user = self.require_validator(&caller);
        self.require_deposit_sufficient(&user);

        require!(config.min_amt < config.max_amt, ERR_INVALID_LIMITS);
        require!(
            config.deposit >= self.deposit_del_min().get(),
            ERR_DEPOSIT_BELOW_PLATFORM_MIN
        );

        self.tx()
            .to(&user.val_ad)
            .typed(ValidatorAdProxy)
            .set_mandatory(config, live, manager, max_del_cnt)
            .sync_call();
    }

    #[endpoint(setValidatorAdExtra)]
    fn set_validator_ad_extra(&self, config: ValConfigExtra<Self::Api>) {
        let caller = self.blockchain().get_caller();
        let user = self.require_validator(&caller);
        self.require_deposit_sufficient(&user);

        self.tx()
            .to(&user.val_ad)
            .typed(ValidatorAdProxy)
            .set_extra(config)
            .sync_call();
    }

    /// Retires the caller's ad. The ad refuses while delegator contracts
    /// are active. Remaining earnings and the ad's storage reserve are
    /// credited to the caller's withdrawable balance and the role is freed.
    #[endpoint(endValidatorAd)]
    fn end_validator_ad(&self) {
        let caller = self.blockchain().get_caller();
        let mut user = self.require_validator(&caller);

        let earnings = self
            .tx()
            .to(&user.val_ad)
            .typed(ValidatorAdProxy)
            .end_validator_ad()
            .returns(ReturnsResult)
            .sync_call();

        self.registry_remove(&user.val_ad);

        user.balance += earnings + BigUint::from(RESERVE_VALIDATOR_AD_CREATION);
        user.val_ad = ManagedAddress::zero();
        self.user_info(&caller).set(&user);

        self.validator_ad_ended_event(&caller);
    }

    /// Pays out the validator's accrued earnings directly to the caller.
    #[endpoint(valWithdrawEarnings)]
    fn val_withdraw_earnings(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let user = self.require_validator(&caller);

        let earnings = self
            .tx()
            .to(&user.val_ad)
            .typed(ValidatorAdProxy)
            .withdraw_earnings()
            .returns(ReturnsResult)
            .sync_call();
        require!(earnings > 0u64, ERR_NOTHING_TO_WITHDRAW);

        self.blocked_amt().update(|b| *b -= &earnings);
        self.send().direct_egld(&caller, &earnings);

        self.earnings_withdrawn_event(&caller, &earnings);

        earnings
    }

    // ----- delegator contract management -----

    /// Concludes a contract between the caller and the chosen validator ad.
    /// The payment covers the agreed deposit, the setup fee, and the
    /// contract's storage reserve; the sub-amounts are explicit so the ad
    /// can re-validate each against its terms. Returns the new contract's
    /// address.
    #[payable("EGLD")]
    #[endpoint(createDelegatorContract)]
    fn create_delegator_contract(
        &self,
        val_ad: ManagedAddress,
        deposit_amount: BigUint,
        fee_setup_amount: BigUint,
        round_start: u64,
        round_end: u64,
    ) -> ManagedAddress {
        require!(self.live().get(), ERR_NOT_LIVE);

        let caller = self.blockchain().get_caller();
        let mut user = self.user_or_default(&caller);
        require!(user.is_free(), ERR_ROLE_ACTIVE);

        self.require_in_registry(&val_ad);

        let payment = self.call_value().egld_value().clone_value();
        require!(
            payment
                == &deposit_amount
                    + &fee_setup_amount
                    + BigUint::from(RESERVE_DELEGATOR_CONTRACT_CREATION),
            ERR_PAYMENT_MISMATCH
        );

        let del_contract = self
            .tx()
            .to(&val_ad)
            .typed(ValidatorAdProxy)
            .create_delegator_contract(
                deposit_amount.clone(),
                fee_setup_amount,
                caller.clone(),
                round_start,
                round_end,
            )
            .returns(ReturnsResult)
            .sync_call();

        user.val_ad = val_ad;
        user.del_contract = del_contract.clone();
        user.deposit = deposit_amount;
        self.user_info(&caller).set(user);

        self.blocked_amt().update(|b| *b += &payment);

        self.delegator_contract_created_event(&del_contract, &caller);

        del_contract
    }

    /// Submits the participation keys the validator's manager generated for
    /// the given delegator. The original caller is passed through to the ad,
    /// which enforces it is the manager. No value moves until confirmation.
    #[endpoint(depositKeys)]
    fn deposit_keys(&self, del_acc: ManagedAddress, key_reg: KeyRegInfo<Self::Api>) {
        let user = self.require_delegator(&del_acc);
        let caller = self.blockchain().get_caller();

        let _fee_setup = self
            .tx()
            .to(&user.val_ad)
            .typed(ValidatorAdProxy)
            .deposit_keys(caller, user.del_contract.clone(), key_reg)
            .returns(ReturnsResult)
            .sync_call();

        self.keys_deposited_event(&del_acc);
    }

    /// Confirms the deposited keys. Caller is the delegator; the payment is
    /// the operational fee for the whole agreed window and the key material
    /// must match what the validator deposited. The setup fee is split here:
    /// the platform's share unblocks, the validator's share stays accrued in
    /// the ad.
    #[payable("EGLD")]
    #[endpoint(confirmKeys)]
    fn confirm_keys(&self, key_reg: KeyRegInfo<Self::Api>) {
        let caller = self.blockchain().get_caller();
        let user = self.require_delegator(&caller);

        let fee_operation = self.call_value().egld_value().clone_value();

        let platform_share = self
            .tx()
            .to(&user.val_ad)
            .typed(ValidatorAdProxy)
            .confirm_keys(user.del_contract.clone(), fee_operation.clone(), key_reg)
            .returns(ReturnsResult)
            .sync_call();

        self.blocked_amt().update(|b| {
            *b -= &platform_share;
            *b += &fee_operation;
        });

        self.keys_confirmed_event(&caller);
    }

    /// Settles a contract whose keys were never generated in time. The
    /// delegator gets the setup fee and the storage reserve back as balance
    /// and is freed; the deposit stays withdrawable. Open to anyone since
    /// the delegator contract itself verifies the missed window.
    #[endpoint(keysNotGenerated)]
    fn keys_not_generated(&self, del_acc: ManagedAddress) {
        let mut user = self.require_delegator(&del_acc);

        let (_deposit, fee_setup) = self
            .tx()
            .to(&user.val_ad)
            .typed(ValidatorAdProxy)
            .keys_not_generated(user.del_contract.clone())
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        user.balance += fee_setup + BigUint::from(RESERVE_DELEGATOR_CONTRACT_CREATION);
        self.free_user(&del_acc, &mut user);

        self.contract_settled_event(&del_acc, &ManagedBuffer::from(&b"keys_not_generated"[..]));
    }

    /// Settles a contract whose keys were generated but never confirmed.
    /// The setup fee counts as earned by the validator and the platform;
    /// the delegator gets back the deposit and the storage reserve.
    #[endpoint(keysNotConfirmed)]
    fn keys_not_confirmed(&self, del_acc: ManagedAddress) {
        let mut user = self.require_delegator(&del_acc);

        let (_deposit, platform_share) = self
            .tx()
            .to(&user.val_ad)
            .typed(ValidatorAdProxy)
            .keys_not_confirmed(user.del_contract.clone())
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        self.blocked_amt().update(|b| *b -= &platform_share);

        user.balance += BigUint::from(RESERVE_DELEGATOR_CONTRACT_CREATION);
        self.free_user(&del_acc, &mut user);

        self.contract_settled_event(&del_acc, &ManagedBuffer::from(&b"keys_not_confirmed"[..]));
    }

    /// Settles a contract that has expired or was breached. Open to anyone;
    /// the contract's own state is the evidence.
    #[endpoint(endExpiredOrBreachedDelegatorContract)]
    fn end_expired_or_breached_delegator_contract(&self, del_acc: ManagedAddress) {
        let user = self.require_delegator(&del_acc);

        let round_end = self
            .tx()
            .to(&user.del_contract)
            .typed(DelegatorContractProxy)
            .get_round_end()
            .returns(ReturnsResult)
            .sync_call_readonly();
        let breached = self
            .tx()
            .to(&user.del_contract)
            .typed(DelegatorContractProxy)
            .is_breached()
            .returns(ReturnsResult)
            .sync_call_readonly();

        require!(
            round_end < self.blockchain().get_block_nonce() || breached,
            ERR_CONTRACT_STILL_ACTIVE
        );

        self.settle_delegator_contract(&del_acc);
    }

    /// Lets the delegator withdraw from their contract early. Requires the
    /// all-zero key payload of a deregistration as evidence the keys are
    /// being retired; the unused operational fee is refunded.
    #[endpoint(endActiveDelegatorContract)]
    fn end_active_delegator_contract(&self, key_reg: KeyRegInfo<Self::Api>) {
        let caller = self.blockchain().get_caller();
        self.require_delegator(&caller);
        require!(key_reg.is_dereg(), ERR_NOT_DEREG_PAYLOAD);

        self.settle_delegator_contract(&caller);
    }

    // ----- withdrawals -----

    /// Pays out the caller's accumulated balance (refunds, returned
    /// reserves, credited earnings).
    #[endpoint(withdrawBalance)]
    fn withdraw_balance(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let mut user = self.user_or_default(&caller);

        let balance = user.balance.clone();
        require!(balance > 0u64, ERR_NOTHING_TO_WITHDRAW);

        self.blocked_amt().update(|b| *b -= &balance);
        user.balance = BigUint::zero();
        self.user_info(&caller).set(user);

        self.send().direct_egld(&caller, &balance);

        self.balance_withdrawn_event(&caller, &balance);

        balance
    }

    /// Pays out the caller's deposit. Only possible once the account holds
    /// no role, so an active agreement can never lose its collateral.
    #[endpoint(withdrawDeposit)]
    fn withdraw_deposit(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        let mut user = self.user_or_default(&caller);
        require!(user.is_free(), ERR_ROLE_ACTIVE);

        let deposit = user.deposit.clone();
        require!(deposit > 0u64, ERR_NOTHING_TO_WITHDRAW);

        self.blocked_amt().update(|b| *b -= &deposit);
        user.deposit = BigUint::zero();
        self.user_info(&caller).set(user);

        self.send().direct_egld(&caller, &deposit);

        self.deposit_withdrawn_event(&caller, &deposit);

        deposit
    }

    // ----- views -----

    #[view(getConfig)]
    fn get_config(&self) -> NoticeboardConfig<Self::Api> {
        NoticeboardConfig {
            owner: self.owner().get(),
            manager: self.manager().get(),
            validator_ad_template: self.validator_ad_template().get(),
            delegator_template: self.delegator_template().get(),
            deposit_val_min: self.deposit_val_min().get(),
            deposit_del_min: self.deposit_del_min().get(),
            val_earn_factor: self.val_earn_factor().get(),
            live: self.live().get(),
            blocked_amt: self.blocked_amt().get(),
        }
    }

    #[view(getUserInfo)]
    fn get_user_info(&self, user: ManagedAddress) -> UserInfo<Self::Api> {
        self.user_or_default(&user)
    }

    #[view(getValidators)]
    fn get_validators(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let registry = self.validators().get();
        for slot in registry.iter() {
            let addr = slot.clone_value();
            if !addr.is_zero() {
                result.push(addr);
            }
        }
        result
    }

    #[view(getBlockedAmount)]
    fn get_blocked_amount(&self) -> BigUint {
        self.blocked_amt().get()
    }

    // ----- helpers -----

    /// Settles via the ad, re-labels the returned amounts in the ledger,
    /// and frees the delegator's role.
    fn settle_delegator_contract(&self, del_acc: &ManagedAddress) {
        let mut user = self.require_delegator(del_acc);

        let (deposit, refund, platform_share) = self
            .tx()
            .to(&user.val_ad)
            .typed(ValidatorAdProxy)
            .end_delegator_contract(user.del_contract.clone())
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        self.blocked_amt().update(|b| *b -= &platform_share);

        user.balance += refund + BigUint::from(RESERVE_DELEGATOR_CONTRACT_CREATION);
        // The deposit may have been forfeited to the validator mid-contract.
        user.deposit = deposit;
        self.free_user(del_acc, &mut user);

        self.contract_settled_event(del_acc, &ManagedBuffer::from(&b"ended"[..]));
    }

    fn free_user(&self, addr: &ManagedAddress, user: &mut UserInfo<Self::Api>) {
        user.val_ad = ManagedAddress::zero();
        user.del_contract = ManagedAddress::zero();
        self.user_info(addr).set(&*user);
    }

    fn user_or_default(&self, addr: &ManagedAddress) -> UserInfo<Self::Api> {
        let mapper = self.user_info(addr);
        if mapper.is_empty() {
            UserInfo::zeroed()
        } else {
            mapper.get()
        }
    }

    fn require_validator(&self, addr: &ManagedAddress) -> UserInfo<Self::Api> {
        let user = self.user_or_default(addr);
        require!(
            !user.val_ad.is_zero() && user.del_contract.is_zero(),
            ERR_NOT_VALIDATOR
        );
        user
    }

    fn require_delegator(&self, addr: &ManagedAddress) -> UserInfo<Self::Api> {
        let user = self.user_or_default(addr);
        require!(
            !user.val_ad.is_zero() && !user.del_contract.is_zero(),
            ERR_NOT_DELEGATOR
        );
        user
    }

    fn require_deposit_sufficient(&self, user: &UserInfo<Self::Api>) {
        require!(
            user.deposit >= self.deposit_val_min().get(),
            ERR_DEPOSIT_TOO_LOW
        );
    }

    fn require_in_registry(&self, val_ad: &ManagedAddress) {
        let mut found = false;
        let registry = self.validators().get();
        for slot in registry.iter() {
            if slot.clone_value() == *val_ad {
                found = true;
                break;
            }
        }
        require!(found, ERR_NOT_IN_REGISTRY);
    }

    fn registry_add(&self, val_ad: &ManagedAddress) {
        let registry = self.validators().get();
        let mut rebuilt = ManagedVec::new();
        let mut added = false;
        for slot in registry.iter() {
            let addr = slot.clone_value();
            if !added && addr.is_zero() {
                rebuilt.push(val_ad.clone());
                added = true;
            } else {
                rebuilt.push(addr);
            }
        }
        require!(added, ERR_REGISTRY_FULL);
        self.validators().set(rebuilt);
    }

    fn registry_remove(&self, val_ad: &ManagedAddress) {
        let registry = self.validators().get();
        let mut rebuilt = ManagedVec::new();
        let mut removed = false;
        for slot in registry.iter() {
            let addr = slot.clone_value();
            if !removed && addr == *val_ad {
                rebuilt.push(ManagedAddress::zero());
                removed = true;
            } else {
                rebuilt.push(addr);
            }
        }
        require!(removed, ERR_NOT_IN_REGISTRY);
        self.validators().set(rebuilt);
    }

    // ----- events -----

    #[event("platformSetup")]
    fn platform_setup_event(&self, #[indexed] val_earn_factor: u64);

    #[event("userOptedIn")]
    fn user_opted_in_event(&self, #[indexed] user: &ManagedAddress);

    #[event("validatorAdCreated")]
    fn validator_ad_created_event(
        &self,
        #[indexed] val_ad: &ManagedAddress,
        #[indexed] owner: &ManagedAddress,
    );

    #[event("validatorAdEnded")]
    fn validator_ad_ended_event(&self, #[indexed] owner: &ManagedAddress);

    #[event("delegatorContractCreated")]
    fn delegator_contract_created_event(
        &self,
        #[indexed] del_contract: &ManagedAddress,
        #[indexed] delegator: &ManagedAddress,
    );

    #[event("keysDeposited")]
    fn keys_deposited_event(&self, #[indexed] delegator: &ManagedAddress);

    #[event("keysConfirmed")]
    fn keys_confirmed_event(&self, #[indexed] delegator: &ManagedAddress);

    #[event("contractSettled")]
    fn contract_settled_event(&self, #[indexed] delegator: &ManagedAddress, reason: &ManagedBuffer);

    #[event("earningsWithdrawn")]
    fn earnings_withdrawn_event(&self, #[indexed] validator: &ManagedAddress, amount: &BigUint);

    #[event("balanceWithdrawn")]
    fn balance_withdrawn_event(&self, #[indexed] user: &ManagedAddress, amount: &BigUint);

    #[event("depositWithdrawn")]
    fn deposit_withdrawn_event(&self, #[indexed] user: &ManagedAddress, amount: &BigUint);

    // ----- storage -----

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("manager")]
    fn manager(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("validatorAdTemplate")]
    fn validator_ad_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("delegatorTemplate")]
    fn delegator_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("depositValMin")]
    fn deposit_val_min(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("depositDelMin")]
    fn deposit_del_min(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("valEarnFactor")]
    fn val_earn_factor(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("live")]
    fn live(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("blockedAmt")]
    fn blocked_amt(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("validators")]
    fn validators(&self) -> SingleValueMapper<ManagedVec<ManagedAddress>>;

    #[storage_mapper("userInfo")]
    fn user_info(&self, user: &ManagedAddress) -> SingleValueMapper<UserInfo<Self::Api>>;
}
