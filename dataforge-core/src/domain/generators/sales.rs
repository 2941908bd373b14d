// dataforge-core/src/domain/generators/sales.rs

use rand::Rng;

use crate::domain::dataset::{ColumnSpec, Dataset, SemanticType, TableBuilder, Value};
use crate::domain::dimensions::{COUNTRIES, REGIONS};
use crate::domain::error::DomainError;
use crate::domain::generators::{
    categorical_n, date_values, int_range_n, ratio_or_zero, reference_ids, seeded_rng,
    sequence_ids, uniform_n, DomainGenerator, GeneratorContext,
};
use crate::domain::sampling::{round_to, WeightedChoice};

const PRODUCTS: &[&str] = &[
    "Product A",
    "Product B",
    "Product C",
    "Product D",
    "Product E",
    "Enterprise Suite",
    "Basic Plan",
    "Premium Plan",
];
const SEGMENTS: &[&str] = &["Enterprise", "SMB", "Startup", "Individual", "Government"];
const SEGMENT_WEIGHTS: &[f64] = &[0.15, 0.35, 0.25, 0.2, 0.05];
const CHANNELS: &[&str] = &["Direct", "Partner", "Online", "Retail"];
const DISCOUNTS: &[i64] = &[0, 5, 10, 15, 20, 25];
const DISCOUNT_WEIGHTS: &[f64] = &[0.4, 0.2, 0.15, 0.1, 0.1, 0.05];

/// Sales transactions with customer-value metrics. Derived: revenue,
/// cost (revenue times a per-row sampled multiplier), profit and
/// profit_margin.
#[derive(Debug)]
pub struct SalesGenerator;

impl DomainGenerator for SalesGenerator {
    fn tag(&self) -> &'static str {
        "sales"
    }

    fn title(&self) -> &'static str {
        "Sales"
    }

    fn output_file(&self) -> &'static str {
        "sales/sales_data.csv"
    }

    fn default_rows(&self) -> usize {
        5000
    }

    fn generate(&self, n: usize, ctx: &GeneratorContext) -> Result<Dataset, DomainError> {
        let mut rng = seeded_rng(ctx.seed, self.tag());
        let col = |name, ty| ColumnSpec::new(name, ty);
        use SemanticType::{Categorical, Date, Float, Integer, Text};

        let segments = WeightedChoice::new("customer_segment", SEGMENTS, SEGMENT_WEIGHTS)?;
        let discounts = WeightedChoice::new("discount_percent", DISCOUNTS, DISCOUNT_WEIGHTS)?;

        let mut t = TableBuilder::new(self.tag(), n);
        t.sampled(col("transaction_id", Text), sequence_ids("TXN", 6, n))?;
        t.sampled(col("date", Date), date_values(ctx.window.sample_n(n, &mut rng)))?;
        t.sampled(col("region", Categorical), categorical_n(&mut rng, REGIONS, n))?;
        t.sampled(col("country", Categorical), categorical_n(&mut rng, COUNTRIES, n))?;
        t.sampled(
            col("customer_id", Text),
            reference_ids(&mut rng, "CUST", 4, 1000, n),
        )?;
        t.sampled(
            col("customer_segment", Categorical),
            segments
                .sample_n(n, &mut rng)
                .into_iter()
                .map(Value::text)
                .collect(),
        )?;
        t.sampled(col("product", Categorical), categorical_n(&mut rng, PRODUCTS, n))?;
        t.sampled(
            col("sales_channel", Categorical),
            categorical_n(&mut rng, CHANNELS, n),
        )?;
        t.sampled(col("quantity", Integer), int_range_n(&mut rng, 1, 50, n))?;
        t.sampled(
            col("unit_price", Float),
            uniform_n(&mut rng, 50.0, 5000.0, 2, n),
        )?;
        t.sampled(
            col("discount_percent", Integer),
            discounts
                .sample_n(n, &mut rng)
                .into_iter()
                .map(Value::Int)
                .collect(),
        )?;
        t.sampled(
            col("customer_lifetime_value", Float),
            uniform_n(&mut rng, 500.0, 50_000.0, 2, n),
        )?;
        t.sampled(col("recency_days", Integer), int_range_n(&mut rng, 1, 365, n))?;
        t.sampled(col("frequency", Integer), int_range_n(&mut rng, 1, 50, n))?;
        t.sampled(
            col("monetary_value", Float),
            uniform_n(&mut rng, 100.0, 25_000.0, 2, n),
        )?;
        t.sampled(
            col("satisfaction_score", Float),
            uniform_n(&mut rng, 1.0, 5.0, 1, n),
        )?;
        t.sampled(col("nps_score", Integer), int_range_n(&mut rng, -100, 101, n))?;

        // Cost multiplier is a sampled input too; it just never becomes a
        // column of its own.
        let cost_ratios: Vec<f64> = (0..n).map(|_| rng.random_range(0.4..0.7)).collect();

        t.derive(col("revenue", Float), |r| {
            let gross = r.f64("quantity")? * r.f64("unit_price")?;
            let discount = r.f64("discount_percent")? / 100.0;
            Ok(Value::Float(round_to(gross * (1.0 - discount), 2)))
        })?;
        t.derive(col("cost", Float), |r| {
            Ok(Value::Float(round_to(
                r.f64("revenue")? * cost_ratios[r.index()],
                2,
            )))
        })?;
        t.derive(col("profit", Float), |r| {
            Ok(Value::Float(r.f64("revenue")? - r.f64("cost")?))
        })?;
        t.derive(col("profit_margin", Float), |r| {
            let margin = 100.0 * ratio_or_zero(r.f64("profit")?, r.f64("revenue")?);
            Ok(Value::Float(round_to(margin, 2)))
        })?;

        Ok(t.finish())
    }
}
