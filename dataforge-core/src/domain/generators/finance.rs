// dataforge-core/src/domain/generators/finance.rs

use crate::domain::dataset::{ColumnSpec, Dataset, SemanticType, TableBuilder, Value};
use crate::domain::dimensions::{DEPARTMENTS, REGIONS};
use crate::domain::error::DomainError;
use crate::domain::generators::{
    categorical_n, date_values, ratio_or_zero, seeded_rng, sequence_ids, uniform_n,
    DomainGenerator, GeneratorContext,
};
use crate::domain::sampling::round_to;
use chrono::Datelike;
use rand::Rng;

const CATEGORIES: &[&str] = &[
    "Revenue",
    "COGS",
    "Operating Expenses",
    "Marketing",
    "R&D",
    "Administrative",
    "Depreciation",
    "Interest",
];
const SUB_CATEGORIES: &[&str] = &[
    "Salaries",
    "Materials",
    "Utilities",
    "Rent",
    "Software",
    "Travel",
    "Equipment",
    "Services",
    "Other",
];
const COST_CENTERS: &[&str] = &["CC-100", "CC-200", "CC-300", "CC-400", "CC-500"];
const FISCAL_YEARS: &[i64] = &[2022, 2023, 2024];

/// Budget vs actual ledger lines. The quarter column comes from an
/// independently sampled date, not from the row's own `date` column, so
/// the two are uncorrelated.
#[derive(Debug)]
pub struct FinanceGenerator;

impl DomainGenerator for FinanceGenerator {
    fn tag(&self) -> &'static str {
        "finance"
    }

    fn title(&self) -> &'static str {
        "Finance"
    }

    fn output_file(&self) -> &'static str {
        "finance/finance_data.csv"
    }

    fn default_rows(&self) -> usize {
        2000
    }

    fn generate(&self, n: usize, ctx: &GeneratorContext) -> Result<Dataset, DomainError> {
        let mut rng = seeded_rng(ctx.seed, self.tag());
        let col = |name, ty| ColumnSpec::new(name, ty);
        use SemanticType::{Categorical, Date, Float, Integer, Text};

        let mut t = TableBuilder::new(self.tag(), n);
        t.sampled(col("transaction_id", Text), sequence_ids("FIN", 6, n))?;
        t.sampled(col("date", Date), date_values(ctx.window.sample_n(n, &mut rng)))?;
        t.sampled(col("region", Categorical), categorical_n(&mut rng, REGIONS, n))?;
        t.sampled(
            col("department", Categorical),
            categorical_n(&mut rng, DEPARTMENTS, n),
        )?;
        t.sampled(
            col("category", Categorical),
            categorical_n(&mut rng, CATEGORIES, n),
        )?;
        t.sampled(
            col("sub_category", Categorical),
            categorical_n(&mut rng, SUB_CATEGORIES, n),
        )?;
        t.sampled(
            col("cost_center", Categorical),
            categorical_n(&mut rng, COST_CENTERS, n),
        )?;
        t.sampled(
            col("budget_amount", Float),
            uniform_n(&mut rng, 10_000.0, 500_000.0, 2, n),
        )?;
        t.sampled(
            col("actual_amount", Float),
            uniform_n(&mut rng, 8_000.0, 550_000.0, 2, n),
        )?;
        t.sampled(
            col("forecast_amount", Float),
            uniform_n(&mut rng, 9_000.0, 520_000.0, 2, n),
        )?;
        t.sampled(
            col("quarter", Categorical),
            ctx.window
                .sample_n(n, &mut rng)
                .into_iter()
                .map(|d| Value::Text(format!("Q{}", (d.month() - 1) / 3 + 1)))
                .collect(),
        )?;
        t.sampled(
            col("fiscal_year", Integer),
            (0..n)
                .map(|_| Value::Int(FISCAL_YEARS[rng.random_range(0..FISCAL_YEARS.len())]))
                .collect(),
        )?;

        t.derive(col("variance", Float), |r| {
            Ok(Value::Float(r.f64("actual_amount")? - r.f64("budget_amount")?))
        })?;
        t.derive(col("variance_percent", Float), |r| {
            let pct = 100.0 * ratio_or_zero(r.f64("variance")?, r.f64("budget_amount")?);
            Ok(Value::Float(round_to(pct, 2)))
        })?;
        t.derive(col("forecast_accuracy", Float), |r| {
            Ok(Value::Float(forecast_accuracy(
                r.f64("actual_amount")?,
                r.f64("forecast_amount")?,
            )))
        })?;

        Ok(t.finish())
    }
}

/// 100 minus the absolute percentage miss. Defined as 0.0 when actual is
/// exactly zero rather than dividing through.
fn forecast_accuracy(actual: f64, forecast: f64) -> f64 {
    if actual == 0.0 {
        return 0.0;
    }
    let miss = 100.0 * ((actual - forecast) / actual).abs();
    round_to(100.0 - miss, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generators::tests::test_context;

    #[test]
    fn test_schema() {
        let ds = FinanceGenerator.generate(3, &test_context(42)).unwrap();
        assert_eq!(ds.column_count(), 15);
        assert_eq!(ds.headers().last(), Some(&"forecast_accuracy"));
    }

    #[test]
    fn test_variance_formulas() {
        let ds = FinanceGenerator.generate(300, &test_context(42)).unwrap();
        for i in 0..ds.row_count() {
            let f = |name: &str| match ds.column(name).unwrap()[i] {
                Value::Float(v) => v,
                _ => panic!("float column expected"),
            };
            assert_eq!(f("variance"), f("actual_amount") - f("budget_amount"));
            assert_eq!(
                f("variance_percent"),
                round_to(100.0 * f("variance") / f("budget_amount"), 2)
            );
            let expected = round_to(
                100.0 - (100.0 * (f("actual_amount") - f("forecast_amount")) / f("actual_amount")).abs(),
                2,
            );
            assert_eq!(f("forecast_accuracy"), expected, "row {i}");
        }
    }

    #[test]
    fn test_forecast_accuracy_zero_actual_is_defined() {
        // Sampled amounts never hit zero, so the sentinel is pinned here.
        assert_eq!(forecast_accuracy(0.0, 12_345.0), 0.0);
        assert_eq!(forecast_accuracy(100.0, 100.0), 100.0);
        assert_eq!(forecast_accuracy(200.0, 100.0), 50.0);
        // Symmetric miss: over-forecast and under-forecast score alike.
        assert_eq!(forecast_accuracy(100.0, 150.0), forecast_accuracy(100.0, 50.0));
    }

    #[test]
    fn test_quarter_values() {
        let ds = FinanceGenerator.generate(300, &test_context(42)).unwrap();
        for v in ds.column("quarter").unwrap() {
            assert!(matches!(v.to_string().as_str(), "Q1" | "Q2" | "Q3" | "Q4"));
        }
        for v in ds.column("fiscal_year").unwrap() {
            let Value::Int(y) = v else { panic!("fiscal_year must be an integer") };
            assert!(FISCAL_YEARS.contains(y));
        }
    }
}
