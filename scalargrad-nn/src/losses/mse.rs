// scalargrad-nn/src/losses/mse.rs

use crate::error::NnError;
use scalargrad_core::Value;
use std::str::FromStr;

/// Specifies the reduction applied to the per-sample squared errors:
/// 'mean' | 'sum'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = NnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(NnError::UnsupportedReduction(s.to_string())),
        }
    }
}

/// Mean Squared Error between predictions and targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds `reduce((pred_i - target_i)^2)` on the predictions' graph.
    ///
    /// # Errors
    /// `InputSizeMismatch` if the slices differ in length, `EmptyInput` if
    /// both are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[f64]) -> Result<Value, NnError> {
        if predictions.len() != targets.len() {
            return Err(NnError::InputSizeMismatch {
                module: "MseLoss".to_string(),
                expected: predictions.len(),
                actual: targets.len(),
            });
        }

        let mut squared = predictions
            .iter()
            .zip(targets)
            .map(|(pred, &target)| pred.try_sub(target)?.pow(2.0));
        let first = squared
            .next()
            .ok_or_else(|| NnError::EmptyInput("MseLoss".to_string()))??;
        let total = squared.try_fold(first, |acc, sq| acc.try_add(sq?))?;

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => Ok(total.try_div(predictions.len() as f64)?),
        }
    }
}

/// Shorthand for `MseLoss::new(reduction).calculate(predictions, targets)`.
pub fn mse_loss(
    predictions: &[Value],
    targets: &[f64],
    reduction: Reduction,
) -> Result<Value, NnError> {
    MseLoss::new(reduction).calculate(predictions, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
