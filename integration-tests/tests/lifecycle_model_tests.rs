use multiversx_sc_scenario::api::DebugApi;

const EARN_FACTOR_DENOMINATOR: u64 = 100;
const MAX_DEL_CNT: usize = 4;
const MAX_VAL_CNT: usize = 100;

type DelegatorContractObj = delegator_contract::ContractObj<DebugApi>;
type ValidatorAdObj = validator_ad::ContractObj<DebugApi>;
type NoticeboardObj = noticeboard::ContractObj<DebugApi>;

/// Validator's truncating share of an earned amount; the platform keeps the
/// remainder.
fn val_earning(total: u128, earn_factor: u64) -> u128 {
    total * earn_factor as u128 / EARN_FACTOR_DENOMINATOR as u128
}

/// Settlement arithmetic of a confirmed contract: (deposit returned, unused
/// operational fee, operational fee earned by the validator side).
fn settle(
    fee_round: u128,
    round_start: u64,
    round_end: u64,
    current_round: u64,
    deposit: u128,
    breached: bool,
) -> (u128, u128, u128) {
    let rounds_remain = if current_round > round_end {
        0
    } else {
        round_end - current_round
    };
    let refund = fee_round * rounds_remain as u128;
    let mut earned = fee_round * (round_end - round_start - rounds_remain) as u128;
    let mut deposit_out = deposit;
    if breached {
        earned += deposit_out;
        deposit_out = 0;
    }
    (deposit_out, refund, earned)
}

fn roster_add(roster: &mut [u64], id: u64) -> bool {
    for slot in roster.iter_mut() {
        if *slot == 0 {
            *slot = id;
            return true;
        }
    }
    false
}

fn roster_remove(roster: &mut [u64], id: u64) -> bool {
    for slot in roster.iter_mut() {
        if *slot == id {
            *slot = 0;
            return true;
        }
    }
    false
}

#[test]
fn contract_objects_build() {
    let _: fn() -> DelegatorContractObj = delegator_contract::contract_obj;
    let _: fn() -> ValidatorAdObj = validator_ad::contract_obj;
    let _: fn() -> NoticeboardObj = noticeboard::contract_obj;
}

#[test]
fn revenue_split_sums_to_total() {
    for factor in 1..EARN_FACTOR_DENOMINATOR {
        for total in [0u128, 1, 99, 100, 101, 1_000_000, u64::MAX as u128] {
            let validator = val_earning(total, factor);
            let platform = total - validator;
            assert_eq!(validator + platform, total);
            assert!(validator <= total);
        }
    }
}

#[test]
fn revenue_split_truncates_toward_platform() {
    // 101 * 25 / 100 = 25 with remainder 25/100 kept by the platform.
    assert_eq!(val_earning(101, 25), 25);
    assert_eq!(101 - val_earning(101, 25), 76);
}

#[test]
fn premature_end_refund_and_earnings() {
    // 99-round window, ended 49 rounds in: 50 rounds refunded, 49 earned.
    let fee_round = 10u128;
    let (deposit, refund, earned) = settle(fee_round, 100, 199, 149, 1_000, false);
    assert_eq!(refund, fee_round * 50);
    assert_eq!(earned, fee_round * 49);
    assert_eq!(deposit, 1_000);
    // Refund plus earnings always reconstruct the operational fee paid.
    assert_eq!(refund + earned, fee_round * 99);
}

#[test]
fn expired_end_refunds_nothing() {
    let fee_round = 7u128;
    let (deposit, refund, earned) = settle(fee_round, 100, 199, 250, 500, false);
    assert_eq!(refund, 0);
    assert_eq!(earned, fee_round * 99);
    assert_eq!(deposit, 500);
}

#[test]
fn breached_end_forfeits_deposit() {
    let fee_round = 10u128;
    let (deposit, refund, earned) = settle(fee_round, 100, 199, 149, 1_000, true);
    assert_eq!(deposit, 0);
    assert_eq!(earned, fee_round * 49 + 1_000);
    // Total value leaving the settlement is unchanged by the forfeiture.
    assert_eq!(deposit + refund + earned, 1_000 + fee_round * 99);
}

#[test]
fn keys_not_generated_full_refund() {
    // Nothing was earned; the delegator recovers deposit and setup fee.
    let deposit = 1_000u128;
    let fee_setup = 200u128;
    let refundable = deposit + fee_setup;
    assert_eq!(refundable, 1_200);
}

#[test]
fn keys_not_confirmed_splits_setup_fee() {
    let fee_setup = 200u128;
    let earn_factor = 70u64;
    let validator = val_earning(fee_setup, earn_factor);
    let platform = fee_setup - validator;
    assert_eq!(validator, 140);
    assert_eq!(platform, 60);
}

#[test]
fn setup_fee_split_applied_once() {
    // The fee is split at confirmation; depositing keys moves nothing.
    let fee_setup = 333u128;
    let earn_factor = 50u64;
    let mut validator_earnings = 0u128;
    let mut platform_released = 0u128;

    // depositKeys: informational only.
    // confirmKeys:
    validator_earnings += val_earning(fee_setup, earn_factor);
    platform_released += fee_setup - val_earning(fee_setup, earn_factor);

    assert_eq!(validator_earnings + platform_released, fee_setup);
}

#[test]
fn blocked_amount_conservation_full_lifecycle() {
    // Mirror of the escrow ledger across a full successful agreement.
    let earn_factor = 70u64;
    let val_deposit = 10_000u128;
    let ad_reserve = 899_500u128;
    let del_reserve = 785_000u128;
    let del_deposit = 1_000u128;
    let fee_setup = 200u128;
    let fee_round = 10u128;
    let rounds = 99u64;
    let fee_operation = fee_round * rounds as u128;

    let mut blocked = 0u128;

    // createValidatorAd
    blocked += val_deposit + ad_reserve;
    // createDelegatorContract
    blocked += del_deposit + fee_setup + del_reserve;
    // confirmKeys: platform share of setup fee unblocks, operational fee in
    let platform_setup = fee_setup - val_earning(fee_setup, earn_factor);
    blocked -= platform_setup;
    blocked += fee_operation;
    // end at expiry: nothing refunded, platform share of earnings unblocks
    let (deposit_out, refund, earned) = settle(fee_round, 100, 100 + rounds, 300, del_deposit, false);
    let platform_earned = earned - val_earning(earned, earn_factor);
    blocked -= platform_earned;

    // What users can still take out of the escrow:
    let delegator_claims = deposit_out + refund + del_reserve;
    let validator_claims =
        val_deposit + ad_reserve + val_earning(fee_setup, earn_factor) + val_earning(earned, earn_factor);
    assert_eq!(blocked, delegator_claims + validator_claims);
}

#[test]
fn breach_counting_latches_at_max() {
    let max_breach = 3u64;
    let mut num_breach = 0u64;
    let mut breached = false;
    for _ in 0..max_breach {
        assert!(!breached);
        num_breach += 1;
        breached = num_breach >= max_breach;
    }
    assert!(breached);
    assert_eq!(num_breach, max_breach);
}

#[test]
fn breach_cooldown_window() {
    let breach_rounds = 100u64;
    let last_breach_round = 1_000u64;
    assert!(!(last_breach_round + breach_rounds < 1_050)); // too soon
    assert!(last_breach_round + breach_rounds < 1_101); // allowed
}

#[test]
fn breach_only_inside_validity_window() {
    let round_start = 100u64;
    let round_end = 200u64;
    for (round, ok) in [(100, false), (101, true), (199, true), (200, false)] {
        assert_eq!(round_start < round && round < round_end, ok);
    }
}

#[test]
fn monotonic_latches() {
    // deposited -> confirmed -> closed never reverts.
    let mut part_keys_deposited = false;
    let mut keys_confirmed = false;
    let mut closed = false;

    part_keys_deposited = true;
    assert!(part_keys_deposited && !keys_confirmed && !closed);
    keys_confirmed = true;
    assert!(part_keys_deposited && keys_confirmed && !closed);
    closed = true;
    assert!(part_keys_deposited && keys_confirmed && closed);
}

#[test]
fn double_deposit_rejected() {
    let mut part_keys_deposited = false;
    assert!(!part_keys_deposited);
    part_keys_deposited = true;
    // A second deposit attempt fails the !part_keys_deposited gate.
    assert!(part_keys_deposited);
}

#[test]
fn roster_capacity_and_reuse() {
    let mut roster = [0u64; MAX_DEL_CNT];
    for id in 1..=MAX_DEL_CNT as u64 {
        assert!(roster_add(&mut roster, id));
    }
    assert!(!roster_add(&mut roster, 5));
    assert!(roster_remove(&mut roster, 2));
    assert!(roster_add(&mut roster, 5));
    assert!(!roster_remove(&mut roster, 2));
}

#[test]
fn registry_capacity() {
    let mut registry = vec![0u64; MAX_VAL_CNT];
    for id in 1..=MAX_VAL_CNT as u64 {
        assert!(roster_add(&mut registry, id));
    }
    assert!(!roster_add(&mut registry, MAX_VAL_CNT as u64 + 1));
}

#[test]
fn validator_deposit_covers_delegators() {
    let deposit_del_min = 1_000u128;
    let deposit_val_min = 4_000u128;
    assert!(deposit_del_min * MAX_DEL_CNT as u128 <= deposit_val_min);
    assert!(!(1_001u128 * MAX_DEL_CNT as u128 <= deposit_val_min));
}

#[test]
fn earn_factor_bounds() {
    for factor in [0u64, 100, 150] {
        assert!(!(factor > 0 && factor < 100));
    }
    for factor in [1u64, 50, 99] {
        assert!(factor > 0 && factor < 100);
    }
}

#[test]
fn contract_start_window() {
    let setup_rounds = 20u64;
    let current = 1_000u64;
    for (round_start, round_end, ok) in [
        (1_000u64, 1_100u64, true),
        (1_020, 1_100, true),
        (1_021, 1_100, false), // starts too late
        (999, 1_100, false),   // starts in the past
        (1_010, 1_010, false), // empty window
    ] {
        let valid = round_start < round_end
            && round_start >= current
            && round_start <= current + setup_rounds;
        assert_eq!(valid, ok);
    }
}

#[test]
fn role_exclusivity() {
    // (val_ad set, del_contract set) -> role
    let is_validator = |val: bool, del: bool| val && !del;
    let is_delegator = |val: bool, del: bool| val && del;
    let is_free = |val: bool, del: bool| !val && !del;

    assert!(is_free(false, false));
    assert!(is_validator(true, false));
    assert!(is_delegator(true, true));
    // Never more than one role at once.
    for val in [false, true] {
        for del in [false, true] {
            let roles = [
                is_free(val, del),
                is_validator(val, del),
                is_delegator(val, del),
            ];
            assert!(roles.iter().filter(|r| **r).count() <= 1);
        }
    }
}

#[test]
fn operational_fee_covers_whole_window() {
    let fee_round = 10u128;
    let round_start = 100u64;
    let round_end = 199u64;
    let due = fee_round * (round_end - round_start) as u128;
    assert_eq!(due, 990);
    assert_ne!(due, 980); // underpayment rejected
}

#[test]
fn dereg_payload_is_all_zero() {
    let sel_key = [0u8; 32];
    let vote_key = [0u8; 32];
    let state_proof_key = [0u8; 64];
    let (dilution, start, end) = (0u64, 0u64, 0u64);
    let is_dereg = sel_key.iter().all(|b| *b == 0)
        && vote_key.iter().all(|b| *b == 0)
        && state_proof_key.iter().all(|b| *b == 0)
        && dilution == 0
        && start == 0
        && end == 0;
    assert!(is_dereg);

    let mut vote_key_set = vote_key;
    vote_key_set[0] = 1;
    assert!(!vote_key_set.iter().all(|b| *b == 0));
}
