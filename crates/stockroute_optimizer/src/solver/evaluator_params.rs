use super::leg_billing::LegBilling;

#[derive(Debug, Clone, Default)]
pub struct EvaluatorParams {
    pub billing: LegBilling,
}
