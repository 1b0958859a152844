use lustre_common::ModelError;
use serde::Deserialize;

/// Ordinary least squares style regressor: `intercept + Σ coefficient·x`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearRegressor {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl LinearRegressor {
    pub(super) fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.coefficients.len() != n_features {
            return Err(format!(
                "linear model has {} coefficients for {} features",
                self.coefficients.len(),
                n_features
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("linear model contains non-finite weights".to_string());
        }
        Ok(())
    }

    pub(super) fn evaluate(&self, row: &[f64]) -> Result<f64, ModelError> {
        if row.len() != self.coefficients.len() {
            return Err(ModelError::Backend(format!(
                "expected {} inputs, got {}",
                self.coefficients.len(),
                row.len()
            )));
        }
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(row)
            .map(|(coefficient, value)| coefficient * value)
            .sum();
        Ok(self.intercept + dot)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        let model = LinearRegressor {
            intercept: 10.0,
            coefficients: vec![2.0, -1.0, 0.5],
        };
        assert_eq!(model.evaluate(&[1.0, 4.0, 8.0]).unwrap(), 10.0 + 2.0 - 4.0 + 4.0);
    }

    #[test]
    fn test_validate_counts_coefficients() {
        let model = LinearRegressor {
            intercept: 0.0,
            coefficients: vec![1.0; 3],
        };
        assert!(model.validate(3).is_ok());
        assert!(model.validate(4).is_err());
    }

    #[test]
    fn test_validate_rejects_nan_weights() {
        let model = LinearRegressor {
            intercept: f64::NAN,
            coefficients: vec![1.0],
        };
        assert!(model.validate(1).is_err());
    }

    #[test]
    fn test_evaluate_rejects_wrong_width() {
        let model = LinearRegressor {
            intercept: 0.0,
            coefficients: vec![1.0, 1.0],
        };
        assert!(matches!(
            model.evaluate(&[1.0]),
            Err(ModelError::Backend(_))
        ));
    }
}
