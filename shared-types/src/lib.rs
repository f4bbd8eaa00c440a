#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Hard cap on active delegator contracts per validator ad. The roster is a
/// fixed array of this many slots; a zero address marks a free slot.
pub const MAX_DEL_CNT: usize = 4;

/// Capacity of the platform-wide validator registry.
pub const MAX_VAL_CNT: usize = 100;

/// Denominator of the validator earn factor. `earn_factor` is the
/// validator's percentage share of fees, in [0, 100].
pub const EARN_FACTOR_DENOMINATOR: u64 = 100;

/// Storage reserve escrowed per validator ad, returned when the ad ends.
pub const RESERVE_VALIDATOR_AD_CREATION: u64 = 899_500;

/// Storage reserve escrowed per delegator contract, returned at settlement.
pub const RESERVE_DELEGATOR_CONTRACT_CREATION: u64 = 785_000;

/// One-time storage reserve for the validator registry, paid at setup.
pub const RESERVE_VALIDATOR_REGISTRY_CREATION: u64 = 2_500 + 400 * (8 * MAX_VAL_CNT as u64 + 8);

pub const SEL_KEY_LEN: usize = 32;
pub const VOTE_KEY_LEN: usize = 32;
pub const STATE_PROOF_KEY_LEN: usize = 64;
pub const VAL_NAME_LEN: usize = 30;
pub const VAL_LINK_LEN: usize = 70;

/// Selection key generated for the delegator.
pub type SelKey<M> = ManagedByteArray<M, SEL_KEY_LEN>;
/// Vote key generated for the delegator.
pub type VoteKey<M> = ManagedByteArray<M, VOTE_KEY_LEN>;
/// State proof key generated for the delegator.
pub type StateProofKey<M> = ManagedByteArray<M, STATE_PROOF_KEY_LEN>;

/// Display name of a validator, fixed width.
pub type ValName<M> = ManagedByteArray<M, VAL_NAME_LEN>;
/// Info link of a validator (without scheme prefix), fixed width.
pub type ValLink<M> = ManagedByteArray<M, VAL_LINK_LEN>;

/// Mandatory terms of a validator ad. Copied by value into each delegator
/// contract at creation; later ad edits do not affect existing contracts.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ValConfigMan<M: ManagedTypeApi> {
    /// Category of the hardware the node runs on.
    pub hw_cat: u64,
    /// Minimum balance the delegator must keep in their account.
    pub min_amt: BigUint<M>,
    /// Maximum balance the delegator may keep in their account.
    pub max_amt: BigUint<M>,
    /// Fee charged for setting up the node, i.e. generating the keys.
    pub fee_setup: BigUint<M>,
    /// Fee charged for operation, per round.
    pub fee_round: BigUint<M>,
    /// Deposit the delegator escrows with the noticeboard.
    pub deposit: BigUint<M>,
    /// Rounds within which the validator promises to generate the keys.
    pub setup_rounds: u64,
    /// Rounds the validator is willing to wait for key confirmation.
    pub confirmation_rounds: u64,
    /// Number of breaches after which the contract counts as breached.
    pub max_breach: u64,
    /// Minimum rounds between two breaches to count them as separate events.
    pub breach_rounds: u64,
    /// Guaranteed node uptime promised by the validator.
    pub uptime_gar: u64,
}

impl<M: ManagedTypeApi> ValConfigMan<M> {
    pub fn zeroed() -> Self {
        ValConfigMan {
            hw_cat: 0,
            min_amt: BigUint::zero(),
            max_amt: BigUint::zero(),
            fee_setup: BigUint::zero(),
            fee_round: BigUint::zero(),
            deposit: BigUint::zero(),
            setup_rounds: 0,
            confirmation_rounds: 0,
            max_breach: 0,
            breach_rounds: 0,
            uptime_gar: 0,
        }
    }
}

/// Informational part of a validator ad. No invariants beyond fixed width.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ValConfigExtra<M: ManagedTypeApi> {
    pub name: ValName<M>,
    pub link: ValLink<M>,
}

impl<M: ManagedTypeApi> ValConfigExtra<M> {
    pub fn zeroed() -> Self {
        ValConfigExtra {
            name: ManagedByteArray::new_from_bytes(&[0u8; VAL_NAME_LEN]),
            link: ManagedByteArray::new_from_bytes(&[0u8; VAL_LINK_LEN]),
        }
    }
}

/// Consensus participation key material together with the validity window it
/// was generated for. An all-zero value is the deregistration shape.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct KeyRegInfo<M: ManagedTypeApi> {
    pub sel_key: SelKey<M>,
    pub vote_key: VoteKey<M>,
    pub state_proof_key: StateProofKey<M>,
    pub vote_key_dilution: u64,
    pub round_start: u64,
    pub round_end: u64,
}

impl<M: ManagedTypeApi> KeyRegInfo<M> {
    pub fn zeroed() -> Self {
        KeyRegInfo {
            sel_key: ManagedByteArray::new_from_bytes(&[0u8; SEL_KEY_LEN]),
            vote_key: ManagedByteArray::new_from_bytes(&[0u8; VOTE_KEY_LEN]),
            state_proof_key: ManagedByteArray::new_from_bytes(&[0u8; STATE_PROOF_KEY_LEN]),
            vote_key_dilution: 0,
            round_start: 0,
            round_end: 0,
        }
    }

    /// True if every field is zero, i.e. the payload describes a key
    /// deregistration rather than a registration.
    pub fn is_dereg(&self) -> bool {
        self.sel_key == SelKey::new_from_bytes(&[0u8; SEL_KEY_LEN])
            && self.vote_key == VoteKey::new_from_bytes(&[0u8; VOTE_KEY_LEN])
            && self.state_proof_key
                == StateProofKey::new_from_bytes(&[0u8; STATE_PROOF_KEY_LEN])
            && self.vote_key_dilution == 0
            && self.round_start == 0
            && self.round_end == 0
    }
}

/// Full observable state of a delegator contract, for views and off-chain
/// monitoring.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct DelegatorContractState<M: ManagedTypeApi> {
    pub noticeboard: ManagedAddress<M>,
    pub validator_ad: ManagedAddress<M>,
    pub delegator: ManagedAddress<M>,
    pub config_man: ValConfigMan<M>,
    pub config_extra: ValConfigExtra<M>,
    pub round_start: u64,
    pub round_end: u64,
    pub part_keys_deposited: bool,
    pub keys_confirmed: bool,
    pub num_breach: u64,
    pub last_breach_round: u64,
    pub contract_breached: bool,
    pub closed: bool,
}

/// Observable status of a validator ad.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ValidatorAdStatus<M: ManagedTypeApi> {
    pub noticeboard: ManagedAddress<M>,
    pub owner: ManagedAddress<M>,
    pub manager: ManagedAddress<M>,
    pub config_man: ValConfigMan<M>,
    pub config_extra: ValConfigExtra<M>,
    pub deposit: BigUint<M>,
    pub live: bool,
    pub closed: bool,
    pub del_cnt: u64,
    pub max_del_cnt: u64,
    pub earn_factor: u64,
    pub earnings: BigUint<M>,
}

/// Platform-level configuration of the noticeboard.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct NoticeboardConfig<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub manager: ManagedAddress<M>,
    pub validator_ad_template: ManagedAddress<M>,
    pub delegator_template: ManagedAddress<M>,
    pub deposit_val_min: BigUint<M>,
    pub deposit_del_min: BigUint<M>,
    pub val_earn_factor: u64,
    pub live: bool,
    pub blocked_amt: BigUint<M>,
}

/// Per-account ledger entry of the noticeboard. An account is exactly one of
/// unassigned, validator (val_ad set), or delegator (del_contract set).
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct UserInfo<M: ManagedTypeApi> {
    pub val_ad: ManagedAddress<M>,
    pub del_contract: ManagedAddress<M>,
    pub deposit: BigUint<M>,
    pub balance: BigUint<M>,
}

impl<M: ManagedTypeApi> UserInfo<M> {
    pub fn zeroed() -> Self {
        UserInfo {
            val_ad: ManagedAddress::zero(),
            del_contract: ManagedAddress::zero(),
            deposit: BigUint::zero(),
            balance: BigUint::zero(),
        }
    }

    /// Account holds neither role and can take on a new one.
    pub fn is_free(&self) -> bool {
        self.val_ad.is_zero() && self.del_contract.is_zero()
    }
}
