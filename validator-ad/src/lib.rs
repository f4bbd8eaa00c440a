#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

mod delegator_contract_proxy;

use delegator_contract_proxy::DelegatorContractProxy;
use shared_types::{
    KeyRegInfo, ValConfigExtra, ValConfigMan, ValidatorAdStatus, EARN_FACTOR_DENOMINATOR,
    MAX_DEL_CNT,
};

pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_CLOSED: &str = "ERR_CLOSED";
pub const ERR_NOT_LIVE: &str = "ERR_NOT_LIVE";
pub const ERR_ROSTER_FULL: &str = "ERR_ROSTER_FULL";
pub const ERR_ROSTER_NOT_EMPTY: &str = "ERR_ROSTER_NOT_EMPTY";
pub const ERR_NOT_IN_ROSTER: &str = "ERR_NOT_IN_ROSTER";
pub const ERR_INVALID_WINDOW: &str = "ERR_INVALID_WINDOW";
pub const ERR_START_IN_PAST: &str = "ERR_START_IN_PAST";
pub const ERR_START_TOO_LATE: &str = "ERR_START_TOO_LATE";
pub const ERR_DEPOSIT_MISMATCH: &str = "ERR_DEPOSIT_MISMATCH";
pub const ERR_SETUP_FEE_MISMATCH: &str = "ERR_SETUP_FEE_MISMATCH";
pub const ERR_MAX_DEL_CNT_TOO_HIGH: &str = "ERR_MAX_DEL_CNT_TOO_HIGH";
pub const ERR_NOT_MANAGER: &str = "ERR_NOT_MANAGER";

/// A validator's standing offer to run consensus nodes for delegators. One
/// instance per validator, deployed by the noticeboard from a template; the
/// noticeboard's address is captured at init and every endpoint except the
/// views requires it as caller.
///
/// The ad holds a fixed-capacity roster of the delegator contracts it has
/// deployed. Each roster slot is an address; the zero address marks a free
/// slot. Delegator-facing calls are forwarded to the named child only if the
/// child is present in the roster.
///
/// No EGLD flows through this contract. All value stays escrowed in the
/// noticeboard; the ad only accounts the validator's accrued earnings and
/// reports platform shares back to its caller.
#[multiversx_sc::contract]
pub trait ValidatorAd {
    #[init]
    fn init(
        &self,
        owner: ManagedAddress,
        earn_factor: u64,
        deposit: BigUint,
        delegator_template: ManagedAddress,
    ) {
        let noticeboard = self.blockchain().get_caller();

        self.noticeboard().set(&noticeboard);
        self.owner().set(&owner);
        self.earn_factor().set(earn_factor);
        self.deposit().set(&deposit);
        self.delegator_template().set(&delegator_template);
        self.config_man().set(ValConfigMan::zeroed());
        self.config_extra().set(ValConfigExtra::zeroed());
        self.max_del_cnt().set(MAX_DEL_CNT as u64);

        let mut roster = ManagedVec::new();
        for _ in 0..MAX_DEL_CNT {
            roster.push(ManagedAddress::zero());
        }
        self.del_contracts().set(roster);

        self.ad_created_event(&owner, earn_factor);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Sets the mandatory terms offered to future delegators, the manager
    /// account allowed to operate the nodes, whether the ad accepts new
    /// delegators, and the delegator capacity (bounded by the reserved
    /// roster size). Existing delegator contracts keep their own snapshot.
    #[endpoint(setMandatory)]
    fn set_mandatory(
        &self,
        config: ValConfigMan<Self::Api>,
        live: bool,
        manager: ManagedAddress,
        max_del_cnt: u64,
    ) {
        self.require_noticeboard();
        self.require_open();
        require!(max_del_cnt <= MAX_DEL_CNT as u64, ERR_MAX_DEL_CNT_TOO_HIGH);

        self.max_del_cnt().set(max_del_cnt);
        self.config_man().set(config);
        self.live().set(live);
        self.manager().set(manager);
    }

    #[endpoint(setExtra)]
    fn set_extra(&self, config: ValConfigExtra<Self::Api>) {
        self.require_noticeboard();
        self.require_open();
        self.config_extra().set(config);
    }

    /// Retires the ad. Refused while any delegator contract is still on the
    /// roster. Terminal; returns the validator's remaining earnings for the
    /// noticeboard to pay out.
    #[endpoint(endValidatorAd)]
    fn end_validator_ad(&self) -> BigUint {
        self.require_noticeboard();
        self.require_open();
        require!(self.roster_empty(), ERR_ROSTER_NOT_EMPTY);

        self.closed().set(true);
        let earnings = self.earnings().get();
        self.earnings().clear();

        self.ad_ended_event(&self.owner().get(), &earnings);

        earnings
    }

    /// Zeroes the validator's accrued earnings and returns the amount for
    /// the noticeboard to pay out.
    #[endpoint(withdrawEarnings)]
    fn withdraw_earnings(&self) -> BigUint {
        self.require_noticeboard();
        self.require_open();

        let earnings = self.earnings().get();
        self.earnings().clear();

        self.earnings_withdrawn_event(&self.owner().get(), &earnings);

        earnings
    }

    /// Deploys a delegator contract from the template, snapshots the current
    /// terms into it, and takes a roster slot. The sub-amounts the delegator
    /// paid to the noticeboard are re-validated here against the ad's own
    /// terms. Returns the new contract's address.
    #[endpoint(createDelegatorContract)]
    fn create_delegator_contract(
        &self,
        deposit_paid: BigUint,
        fee_setup_paid: BigUint,
        delegator: ManagedAddress,
        round_start: u64,
        round_end: u64,
    ) -> ManagedAddress {
        self.require_noticeboard();
        self.require_open();
        require!(self.live().get(), ERR_NOT_LIVE);
        require!(self.del_cnt().get() < self.max_del_cnt().get(), ERR_ROSTER_FULL);

        let current_round = self.blockchain().get_block_nonce();
        let config = self.config_man().get();
        require!(round_start < round_end, ERR_INVALID_WINDOW);
        require!(round_start >= current_round, ERR_START_IN_PAST);
        require!(
            round_start <= current_round + config.setup_rounds,
            ERR_START_TOO_LATE
        );

        require!(deposit_paid == config.deposit, ERR_DEPOSIT_MISMATCH);
        require!(fee_setup_paid == config.fee_setup, ERR_SETUP_FEE_MISMATCH);

        let del_contract = self
            .tx()
            .raw_deploy()
            .from_source(self.delegator_template().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .argument(&self.noticeboard().get())
            .argument(&delegator)
            .argument(&round_start)
            .argument(&round_end)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.tx()
            .to(&del_contract)
            .typed(DelegatorContractProxy)
            .set_mandatory(config)
            .sync_call();

        self.tx()
            .to(&del_contract)
            .typed(DelegatorContractProxy)
            .set_extra(self.config_extra().get())
            .sync_call();

        self.roster_add(&del_contract);

        self.delegator_contract_created_event(&del_contract, &delegator, round_start, round_end);

        del_contract
    }

    /// Forwards the manager's freshly generated participation keys to the
    /// named delegator contract. The noticeboard passes through the original
    /// caller, which must be the ad's manager. Returns the setup fee the
    /// validator will earn on confirmation; no value moves yet.
    #[endpoint(depositKeys)]
    fn deposit_keys(
        &self,
        caller: ManagedAddress,
        del_contract: ManagedAddress,
        key_reg: KeyRegInfo<Self::Api>,
    ) -> BigUint {
        self.require_noticeboard();
        self.require_open();
        require!(caller == self.manager().get(), ERR_NOT_MANAGER);
        self.require_in_roster(&del_contract);

        self.tx()
            .to(&del_contract)
            .typed(DelegatorContractProxy)
            .deposit_keys(key_reg)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Forwards the delegator's key confirmation. The setup fee becomes
    /// earned here; the validator's share accrues to its earnings and the
    /// platform's share is returned to the noticeboard.
    #[endpoint(confirmKeys)]
    fn confirm_keys(
        &self,
        del_contract: ManagedAddress,
        fee_operation_paid: BigUint,
        key_reg: KeyRegInfo<Self::Api>,
    ) -> BigUint {
        self.require_noticeboard();
        self.require_open();
        self.require_in_roster(&del_contract);

        let fee_setup = self
            .tx()
            .to(&del_contract)
            .typed(DelegatorContractProxy)
            .confirm_keys(fee_operation_paid, key_reg)
            .returns(ReturnsResult)
            .sync_call();

        let earned = self.val_earning(&fee_setup);
        self.earnings().update(|e| *e += &earned);

        &fee_setup - &earned
    }

    /// Settles a contract whose keys were never generated and frees its
    /// roster slot. Nothing was earned; returns (deposit, setup fee), both
    /// refundable to the delegator.
    #[endpoint(keysNotGenerated)]
    fn keys_not_generated(&self, del_contract: ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        self.require_noticeboard();
        self.require_open();
        self.require_in_roster(&del_contract);

        let (deposit, fee_setup) = self
            .tx()
            .to(&del_contract)
            .typed(DelegatorContractProxy)
            .keys_not_generated()
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        self.roster_remove(&del_contract);
        self.delegator_contract_removed_event(&del_contract);

        (deposit, fee_setup).into()
    }

    /// Settles a contract whose keys were generated but never confirmed and
    /// frees its roster slot. The setup fee counts as earned; the
    /// validator's share accrues here. Returns (deposit, platform share of
    /// the setup fee).
    #[endpoint(keysNotConfirmed)]
    fn keys_not_confirmed(&self, del_contract: ManagedAddress) -> MultiValue2<BigUint, BigUint> {
        self.require_noticeboard();
        self.require_open();
        self.require_in_roster(&del_contract);

        let (deposit, fee_setup) = self
            .tx()
            .to(&del_contract)
            .typed(DelegatorContractProxy)
            .keys_not_confirmed()
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        let earned = self.val_earning(&fee_setup);
        self.earnings().update(|e| *e += &earned);

        self.roster_remove(&del_contract);
        self.delegator_contract_removed_event(&del_contract);

        (deposit, &fee_setup - &earned).into()
    }

    /// Settles a confirmed contract and frees its roster slot. The
    /// validator's share of the earned operational fee accrues here; a
    /// forfeited deposit arrives folded into the earned amount. Returns
    /// (deposit, operational-fee refund, platform share of earnings).
    #[endpoint(endDelegatorContract)]
    fn end_delegator_contract(
        &self,
        del_contract: ManagedAddress,
    ) -> MultiValue3<BigUint, BigUint, BigUint> {
        self.require_noticeboard();
        self.require_open();
        self.require_in_roster(&del_contract);

        let (deposit, refund, earnings) = self
            .tx()
            .to(&del_contract)
            .typed(DelegatorContractProxy)
            .end_contract()
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        let earned = self.val_earning(&earnings);
        self.earnings().update(|e| *e += &earned);

        self.roster_remove(&del_contract);
        self.delegator_contract_removed_event(&del_contract);

        (deposit, refund, &earnings - &earned).into()
    }

    // ----- views -----

    #[view(getManager)]
    fn get_manager(&self) -> ManagedAddress {
        self.manager().get()
    }

    #[view(getStatus)]
    fn get_status(&self) -> ValidatorAdStatus<Self::Api> {
        ValidatorAdStatus {
            noticeboard: self.noticeboard().get(),
            owner: self.owner().get(),
            manager: self.manager().get(),
            config_man: self.config_man().get(),
            config_extra: self.config_extra().get(),
            deposit: self.deposit().get(),
            live: self.live().get(),
            closed: self.closed().get(),
            del_cnt: self.del_cnt().get(),
            max_del_cnt: self.max_del_cnt().get(),
            earn_factor: self.earn_factor().get(),
            earnings: self.earnings().get(),
        }
    }

    #[view(getDelegators)]
    fn get_delegators(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let roster = self.del_contracts().get();
        for slot in roster.iter() {
            let addr = slot.clone_value();
            if !addr.is_zero() {
                result.push(addr);
            }
        }
        result
    }

    // ----- helpers -----

    fn require_noticeboard(&self) {
        require!(
            self.blockchain().get_caller() == self.noticeboard().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_open(&self) {
        require!(!self.closed().get(), ERR_CLOSED);
    }

    fn require_in_roster(&self, del_contract: &ManagedAddress) {
        let mut found = false;
        let roster = self.del_contracts().get();
        for slot in roster.iter() {
            if slot.clone_value() == *del_contract {
                found = true;
                break;
            }
        }
        require!(found, ERR_NOT_IN_ROSTER);
    }

    /// Writes the address into the first free roster slot.
    fn roster_add(&self, del_contract: &ManagedAddress) {
        let roster = self.del_contracts().get();
        let mut rebuilt = ManagedVec::new();
        let mut added = false;
        for slot in roster.iter() {
            let addr = slot.clone_value();
            if !added && addr.is_zero() {
                rebuilt.push(del_contract.clone());
                added = true;
            } else {
                rebuilt.push(addr);
            }
        }
        require!(added, ERR_ROSTER_FULL);
        self.del_contracts().set(rebuilt);
        self.del_cnt().update(|c| *c += 1);
    }

    /// Frees the roster slot holding the address.
    fn roster_remove(&self, del_contract: &ManagedAddress) {
        let roster = self.del_contracts().get();
        let mut rebuilt = ManagedVec::new();
        let mut removed = false;
        for slot in roster.iter() {
            let addr = slot.clone_value();
            if !removed && addr == *del_contract {
                rebuilt.push(ManagedAddress::zero());
                removed = true;
            } else {
                rebuilt.push(addr);
            }
        }
        require!(removed, ERR_NOT_IN_ROSTER);
        self.del_contracts().set(rebuilt);
        self.del_cnt().update(|c| *c -= 1);
    }

    fn roster_empty(&self) -> bool {
        let roster = self.del_contracts().get();
        for slot in roster.iter() {
            if !slot.clone_value().is_zero() {
                return false;
            }
        }
        true
    }

    /// The validator's share of an earned amount, truncating. The platform
    /// keeps the remainder.
    fn val_earning(&self, total: &BigUint) -> BigUint {
        total * self.earn_factor().get() / EARN_FACTOR_DENOMINATOR
    }

    // ----- events -----

    #[event("adCreated")]
    fn ad_created_event(&self, #[indexed] owner: &ManagedAddress, earn_factor: u64);

    #[event("adEnded")]
    fn ad_ended_event(&self, #[indexed] owner: &ManagedAddress, earnings: &BigUint);

    #[event("earningsWithdrawn")]
    fn earnings_withdrawn_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    #[event("delegatorContractCreated")]
    fn delegator_contract_created_event(
        &self,
        #[indexed] del_contract: &ManagedAddress,
        #[indexed] delegator: &ManagedAddress,
        #[indexed] round_start: u64,
        round_end: u64,
    );

    #[event("delegatorContractRemoved")]
    fn delegator_contract_removed_event(&self, #[indexed] del_contract: &ManagedAddress);

    // ----- storage -----

    #[storage_mapper("noticeboard")]
    fn noticeboard(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("manager")]
    fn manager(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("delegatorTemplate")]
    fn delegator_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("configMan")]
    fn config_man(&self) -> SingleValueMapper<ValConfigMan<Self::Api>>;

    #[storage_mapper("configExtra")]
    fn config_extra(&self) -> SingleValueMapper<ValConfigExtra<Self::Api>>;

    #[storage_mapper("deposit")]
    fn deposit(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("live")]
    fn live(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("closed")]
    fn closed(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("delCnt")]
    fn del_cnt(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("maxDelCnt")]
    fn max_del_cnt(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("earnFactor")]
    fn earn_factor(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("earnings")]
    fn earnings(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("delContracts")]
    fn del_contracts(&self) -> SingleValueMapper<ManagedVec<ManagedAddress>>;
}
