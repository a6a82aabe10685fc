use serde_json::Value;

use crate::enums::PredictionClass;

/// Probability and class pulled out of a raw prediction response.
///
/// The response itself is shown verbatim; this is only used for the short
/// summary line. The class is read from `pred_class`, then `class`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionOutcome {
    pub proba: Option<f64>,
    pub class: Option<PredictionClass>,
}

impl PredictionOutcome {
    #[must_use]
    pub fn from_raw(raw: &Value) -> Self {
        let proba = raw.get("proba").and_then(Value::as_f64);
        let class = raw
            .get("pred_class")
            .or_else(|| raw.get("class"))
            .and_then(Value::as_i64);
        Self {
            proba,
            class: PredictionClass::from_raw(class),
        }
    }
}
