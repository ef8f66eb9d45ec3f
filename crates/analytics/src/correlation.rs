use crate::error::AnalyticsError;
use core_types::HourlyRecord;
use serde::{Deserialize, Serialize};

/// The observed fields that participate in the correlation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationField {
    Consumption,
    Price,
    Temperature,
}

impl CorrelationField {
    pub const ALL: [CorrelationField; 3] = [
        CorrelationField::Consumption,
        CorrelationField::Price,
        CorrelationField::Temperature,
    ];

    fn index(self) -> usize {
        match self {
            CorrelationField::Consumption => 0,
            CorrelationField::Price => 1,
            CorrelationField::Temperature => 2,
        }
    }

    fn extract(self, record: &HourlyRecord) -> f64 {
        match self {
            CorrelationField::Consumption => record.consumption_kwh,
            CorrelationField::Price => record.price_cents_per_kwh,
            CorrelationField::Temperature => record.temperature_c,
        }
    }
}

/// Pairwise Pearson correlation between consumption, price, and temperature.
///
/// Symmetric by construction, with `Some(1.0)` on the diagonal. Every entry
/// involving a constant (zero-variance) column is `None` — including that
/// column's own diagonal — because correlation against a constant is
/// undefined, and reporting `0` there would fabricate a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    entries: [[Option<f64>; 3]; 3],
}

impl CorrelationMatrix {
    /// Computes the matrix over the filtered subset.
    ///
    /// Correlation needs at least two samples; fewer yield
    /// [`AnalyticsError::UndefinedCorrelation`], which the report assembler
    /// converts into an absent matrix rather than aborting the report.
    pub fn compute(subset: &[HourlyRecord]) -> Result<Self, AnalyticsError> {
        if subset.len() < 2 {
            return Err(AnalyticsError::UndefinedCorrelation {
                samples: subset.len(),
            });
        }

        let n = subset.len() as f64;

        let mut columns: [Vec<f64>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for field in CorrelationField::ALL {
            columns[field.index()] = subset.iter().map(|r| field.extract(r)).collect();
        }

        // A constant column is detected by direct comparison, not by testing
        // the computed variance against zero, so mean-rounding noise cannot
        // turn an undefined correlation into a garbage value.
        let constant: [bool; 3] =
            std::array::from_fn(|i| columns[i].iter().all(|&v| v == columns[i][0]));
        let means: [f64; 3] =
            std::array::from_fn(|i| columns[i].iter().sum::<f64>() / n);
        let variances: [f64; 3] = std::array::from_fn(|i| {
            columns[i].iter().map(|v| (v - means[i]) * (v - means[i])).sum()
        });

        let mut entries = [[None; 3]; 3];
        for i in 0..3 {
            if !constant[i] {
                entries[i][i] = Some(1.0);
            }
            for j in (i + 1)..3 {
                if constant[i] || constant[j] {
                    continue;
                }
                let covariance: f64 = columns[i]
                    .iter()
                    .zip(&columns[j])
                    .map(|(a, b)| (a - means[i]) * (b - means[j]))
                    .sum();
                let r = covariance / (variances[i] * variances[j]).sqrt();
                entries[i][j] = Some(r);
                entries[j][i] = Some(r);
            }
        }

        Ok(Self { entries })
    }

    /// The correlation between two fields, or `None` when it is undefined
    /// for this subset.
    pub fn get(&self, a: CorrelationField, b: CorrelationField) -> Option<f64> {
        self.entries[a.index()][b.index()]
    }
}
