// dataforge-core/src/domain/generators/public_impact.rs

use crate::domain::dataset::{ColumnSpec, Dataset, SemanticType, TableBuilder, Value};
use crate::domain::dimensions::{COUNTRIES, REGIONS};
use crate::domain::error::DomainError;
use crate::domain::generators::{
    categorical_n, date_values, int_range_n, ratio_or_zero, seeded_rng, sequence_ids,
    uniform_n, DomainGenerator, GeneratorContext,
};
use crate::domain::sampling::{round_to, WeightedChoice};

const CATEGORIES: &[&str] = &[
    "Housing",
    "Climate",
    "Health",
    "Education",
    "Employment",
    "Infrastructure",
];
const INDICATORS: &[&str] = &[
    "Air Quality Index",
    "Housing Affordability Index",
    "Unemployment Rate",
    "Life Expectancy",
    "CO2 Emissions",
    "Renewable Energy %",
    "Hospital Beds per 1000",
    "School Enrollment Rate",
    "Income Inequality",
    "Access to Clean Water",
];
const TRENDS: &[&str] = &["Improving", "Stable", "Declining"];
const TREND_WEIGHTS: &[f64] = &[0.4, 0.35, 0.25];
const PRIORITIES: &[&str] = &["Low", "Medium", "High", "Critical"];
const PRIORITY_WEIGHTS: &[f64] = &[0.2, 0.4, 0.3, 0.1];

/// Public-sector indicator tracking (housing, climate, health, ...),
/// with progress ratios derived against targets and budgets.
#[derive(Debug)]
pub struct PublicImpactGenerator;

impl DomainGenerator for PublicImpactGenerator {
    fn tag(&self) -> &'static str {
        "public_impact"
    }

    fn title(&self) -> &'static str {
        "Public Impact"
    }

    fn output_file(&self) -> &'static str {
        "public_impact/public_impact_data.csv"
    }

    fn default_rows(&self) -> usize {
        1500
    }

    fn generate(&self, n: usize, ctx: &GeneratorContext) -> Result<Dataset, DomainError> {
        let mut rng = seeded_rng(ctx.seed, self.tag());
        let col = |name, ty| ColumnSpec::new(name, ty);
        use SemanticType::{Categorical, Date, Float, Integer, Text};

        let trends = WeightedChoice::new("trend_direction", TRENDS, TREND_WEIGHTS)?;
        let priorities = WeightedChoice::new("priority_level", PRIORITIES, PRIORITY_WEIGHTS)?;

        let mut t = TableBuilder::new(self.tag(), n);
        t.sampled(col("record_id", Text), sequence_ids("PUB", 5, n))?;
        t.sampled(col("date", Date), date_values(ctx.window.sample_n(n, &mut rng)))?;
        t.sampled(col("region", Categorical), categorical_n(&mut rng, REGIONS, n))?;
        t.sampled(col("country", Categorical), categorical_n(&mut rng, COUNTRIES, n))?;
        t.sampled(
            col("category", Categorical),
            categorical_n(&mut rng, CATEGORIES, n),
        )?;
        t.sampled(
            col("indicator", Categorical),
            categorical_n(&mut rng, INDICATORS, n),
        )?;
        t.sampled(col("value", Float), uniform_n(&mut rng, 10.0, 100.0, 2, n))?;
        t.sampled(
            col("target_value", Float),
            uniform_n(&mut rng, 50.0, 100.0, 2, n),
        )?;
        t.sampled(
            col("previous_year_value", Float),
            uniform_n(&mut rng, 10.0, 95.0, 2, n),
        )?;
        t.sampled(
            col("population_affected", Integer),
            int_range_n(&mut rng, 10_000, 10_000_000, n),
        )?;
        t.sampled(
            col("budget_allocated", Float),
            uniform_n(&mut rng, 100_000.0, 50_000_000.0, 2, n),
        )?;
        t.sampled(
            col("budget_spent", Float),
            uniform_n(&mut rng, 80_000.0, 48_000_000.0, 2, n),
        )?;
        t.sampled(
            col("projects_completed", Integer),
            int_range_n(&mut rng, 0, 100, n),
        )?;
        t.sampled(
            col("projects_in_progress", Integer),
            int_range_n(&mut rng, 0, 50, n),
        )?;
        t.sampled(
            col("satisfaction_rating", Float),
            uniform_n(&mut rng, 1.0, 5.0, 1, n),
        )?;
        t.sampled(
            col("trend_direction", Categorical),
            trends.sample_n(n, &mut rng).into_iter().map(Value::text).collect(),
        )?;
        t.sampled(
            col("priority_level", Categorical),
            priorities
                .sample_n(n, &mut rng)
                .into_iter()
                .map(Value::text)
                .collect(),
        )?;

        t.derive(col("year_over_year_change", Float), |r| {
            let prev = r.f64("previous_year_value")?;
            let pct = 100.0 * ratio_or_zero(r.f64("value")? - prev, prev);
            Ok(Value::Float(round_to(pct, 2)))
        })?;
        t.derive(col("target_achievement", Float), |r| {
            let pct = 100.0 * ratio_or_zero(r.f64("value")?, r.f64("target_value")?);
            Ok(Value::Float(round_to(pct, 2)))
        })?;
        t.derive(col("budget_utilization", Float), |r| {
            let pct = 100.0 * ratio_or_zero(r.f64("budget_spent")?, r.f64("budget_allocated")?);
            Ok(Value::Float(round_to(pct, 2)))
        })?;

        Ok(t.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generators::tests::test_context;

    #[test]
    fn test_schema() {
        let ds = PublicImpactGenerator.generate(3, &test_context(42)).unwrap();
        assert_eq!(ds.column_count(), 20);
        assert_eq!(ds.headers()[0], "record_id");
        assert_eq!(ds.headers().last(), Some(&"budget_utilization"));
    }

    #[test]
    fn test_progress_ratio_formulas() {
        let ds = PublicImpactGenerator.generate(300, &test_context(42)).unwrap();
        for i in 0..ds.row_count() {
            let f = |name: &str| match ds.column(name).unwrap()[i] {
                Value::Float(v) => v,
                _ => panic!("float column expected"),
            };
            assert_eq!(
                f("year_over_year_change"),
                round_to(
                    100.0 * (f("value") - f("previous_year_value")) / f("previous_year_value"),
                    2
                )
            );
            assert_eq!(
                f("target_achievement"),
                round_to(100.0 * f("value") / f("target_value"), 2)
            );
            assert_eq!(
                f("budget_utilization"),
                round_to(100.0 * f("budget_spent") / f("budget_allocated"), 2)
            );
        }
    }
}
