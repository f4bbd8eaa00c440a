use multiversx_sc::proxy_imports::*;
use shared_types::{KeyRegInfo, ValConfigExtra, ValConfigMan};

pub struct ValidatorAdProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ValidatorAdProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ValidatorAdProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ValidatorAdProxyMethods { wrapped_tx: tx }
    }
}

pub struct ValidatorAdProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ValidatorAdProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_mandatory<
        Arg0: ProxyArg<ValConfigMan<Env::Api>>,
        Arg1: ProxyArg<bool>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<u64>,
    >(
        self,
        config: Arg0,
        live: Arg1,
        manager: Arg2,
        max_del_cnt: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMandatory")
            .argument(&config)
            .argument(&live)
            .argument(&manager)
            .argument(&max_del_cnt)
            .original_result()
    }

    pub fn set_extra<Arg0: ProxyArg<ValConfigExtra<Env::Api>>>(
        self,
        config: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setExtra")
            .argument(&config)
            .original_result()
    }

    pub fn end_validator_ad(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("endValidatorAd")
            .original_result()
    }

    pub fn withdraw_earnings(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawEarnings")
            .original_result()
    }

    pub fn create_delegator_contract<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        deposit_paid: Arg0,
        fee_setup_paid: Arg1,
        delegator: Arg2,
        round_start: Arg3,
        round_end: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createDelegatorContract")
            .argument(&deposit_paid)
            .argument(&fee_setup_paid)
            .argument(&delegator)
            .argument(&round_start)
            .argument(&round_end)
            .original_result()
    }

    pub fn deposit_keys<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<KeyRegInfo<Env::Api>>,
    >(
        self,
        caller: Arg0,
        del_contract: Arg1,
        key_reg: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("depositKeys")
            .argument(&caller)
            .argument(&del_contract)
            .argument(&key_reg)
            .original_result()
    }

    pub fn confirm_keys<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<KeyRegInfo<Env::Api>>,
    >(
        self,
        del_contract: Arg0,
        fee_operation_paid: Arg1,
        key_reg: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("confirmKeys")
            .argument(&del_contract)
            .argument(&fee_operation_paid)
            .argument(&key_reg)
            .original_result()
    }

    pub fn keys_not_generated<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        del_contract: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("keysNotGenerated")
            .argument(&del_contract)
            .original_result()
    }

    pub fn keys_not_confirmed<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        del_contract: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("keysNotConfirmed")
            .argument(&del_contract)
            .original_result()
    }

    pub fn end_delegator_contract<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        del_contract: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue3<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("endDelegatorContract")
            .argument(&del_contract)
            .original_result()
    }
}
