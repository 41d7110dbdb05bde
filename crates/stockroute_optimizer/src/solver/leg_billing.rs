use std::{fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which legs of a route are charged `carried weight x distance`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LegBilling {
    /// Every leg, including the ones between two sources.
    #[default]
    EveryLeg,
    /// Only the final leg into the sink.
    DeliveryLegOnly,
}

impl LegBilling {
    #[inline]
    pub fn charges(self, into_sink: bool) -> bool {
        match self {
            LegBilling::EveryLeg => true,
            LegBilling::DeliveryLegOnly => into_sink,
        }
    }
}

impl FromStr for LegBilling {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "every-leg" => Ok(LegBilling::EveryLeg),
            "delivery-leg-only" => Ok(LegBilling::DeliveryLegOnly),
            _ => Err(format!(
                "Invalid leg billing {value}, expected every-leg or delivery-leg-only"
            )),
        }
    }
}

impl fmt::Display for LegBilling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegBilling::EveryLeg => write!(f, "every-leg"),
            LegBilling::DeliveryLegOnly => write!(f, "delivery-leg-only"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("every-leg".parse::<LegBilling>(), Ok(LegBilling::EveryLeg));
        assert_eq!(
            "delivery-leg-only".parse::<LegBilling>(),
            Ok(LegBilling::DeliveryLegOnly)
        );
        assert!("sometimes".parse::<LegBilling>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for billing in [LegBilling::EveryLeg, LegBilling::DeliveryLegOnly] {
            assert_eq!(billing.to_string().parse::<LegBilling>(), Ok(billing));
        }
    }
}
