use multiversx_sc::proxy_imports::*;
use shared_types::{KeyRegInfo, ValConfigExtra, ValConfigMan};

pub struct DelegatorContractProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DelegatorContractProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DelegatorContractProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DelegatorContractProxyMethods { wrapped_tx: tx }
    }
}

pub struct DelegatorContractProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> DelegatorContractProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_mandatory<Arg0: ProxyArg<ValConfigMan<Env::Api>>>(
        self,
        config: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMandatory")
            .argument(&config)
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

    pub fn deposit_keys<Arg0: ProxyArg<KeyRegInfo<Env::Api>>>(
        self,
        key_reg: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("depositKeys")
            .argument(&key_reg)
            .original_result()
    }

    pub fn confirm_keys<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<KeyRegInfo<Env::Api>>,
    >(
        self,
        fee_operation_paid: Arg0,
        key_reg: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("confirmKeys")
            .argument(&fee_operation_paid)
            .argument(&key_reg)
            .original_result()
    }

    pub fn keys_not_generated(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("keysNotGenerated")
            .original_result()
    }

    pub fn keys_not_confirmed(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("keysNotConfirmed")
            .original_result()
    }

    pub fn end_contract(
        self,
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
            .raw_call("endContract")
            .original_result()
    }
}
