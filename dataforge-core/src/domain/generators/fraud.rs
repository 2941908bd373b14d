// dataforge-core/src/domain/generators/fraud.rs

use rand::Rng;

use crate::domain::dataset::{ColumnSpec, Dataset, SemanticType, TableBuilder, Value};
use crate::domain::dimensions::{COUNTRIES, REGIONS};
use crate::domain::error::DomainError;
use crate::domain::generators::{
    categorical_n, date_values, int_range_n, reference_ids, seeded_rng, sequence_ids,
    uniform_n, DomainGenerator, GeneratorContext,
};
use crate::domain::sampling::{exponential, round_to, WeightedChoice};

const TRANSACTION_TYPES: &[&str] = &[
    "Purchase",
    "Refund",
    "Transfer",
    "Withdrawal",
    "Deposit",
    "Payment",
];
const MERCHANT_CATEGORIES: &[&str] = &[
    "Retail",
    "Online",
    "Travel",
    "Entertainment",
    "Utilities",
    "Healthcare",
    "Gas Station",
    "Restaurant",
];
const DEVICE_TYPES: &[&str] = &["Desktop", "Mobile", "Tablet", "POS", "ATM"];
const WEEKEND_WEIGHTS: &[f64] = &[0.7, 0.3];
const NIGHT_WEIGHTS: &[f64] = &[0.75, 0.25];
const INTERNATIONAL_WEIGHTS: &[f64] = &[0.85, 0.15];
// Independent random fraud label, on top of the score threshold.
const RANDOM_FRAUD_RATE: f64 = 0.03;

/// Card-transaction stream with a weighted risk score. The fraud label
/// is a logical OR of two independent signals: the score threshold and
/// a 3% random flip. Both can fire; neither is collapsed into the other.
#[derive(Debug)]
pub struct FraudGenerator;

impl DomainGenerator for FraudGenerator {
    fn tag(&self) -> &'static str {
        "fraud"
    }

    fn title(&self) -> &'static str {
        "Fraud"
    }

    fn output_file(&self) -> &'static str {
        "fraud/fraud_data.csv"
    }

    fn default_rows(&self) -> usize {
        4000
    }

    fn generate(&self, n: usize, ctx: &GeneratorContext) -> Result<Dataset, DomainError> {
        let mut rng = seeded_rng(ctx.seed, self.tag());
        let col = |name, ty| ColumnSpec::new(name, ty);
        use SemanticType::{Categorical, Date, Float, Integer, Text};

        let weekend = WeightedChoice::new("is_weekend", &[0_i64, 1], WEEKEND_WEIGHTS)?;
        let night = WeightedChoice::new("is_night", &[0_i64, 1], NIGHT_WEIGHTS)?;
        let international =
            WeightedChoice::new("is_international", &[0_i64, 1], INTERNATIONAL_WEIGHTS)?;

        let mut t = TableBuilder::new(self.tag(), n);
        t.sampled(col("transaction_id", Text), sequence_ids("FRD", 6, n))?;
        t.sampled(col("date", Date), date_values(ctx.window.sample_n(n, &mut rng)))?;
        t.sampled(col("region", Categorical), categorical_n(&mut rng, REGIONS, n))?;
        t.sampled(col("country", Categorical), categorical_n(&mut rng, COUNTRIES, n))?;
        t.sampled(
            col("customer_id", Text),
            reference_ids(&mut rng, "CUST", 4, 2000, n),
        )?;
        t.sampled(
            col("transaction_type", Categorical),
            categorical_n(&mut rng, TRANSACTION_TYPES, n),
        )?;
        t.sampled(
            col("merchant_category", Categorical),
            categorical_n(&mut rng, MERCHANT_CATEGORIES, n),
        )?;
        t.sampled(
            col("amount", Float),
            (0..n)
                .map(|_| Value::Float(exponential(&mut rng, 500.0, 2)))
                .collect(),
        )?;
        t.sampled(
            col("device_type", Categorical),
            categorical_n(&mut rng, DEVICE_TYPES, n),
        )?;
        t.sampled(
            col("ip_risk_score", Float),
            uniform_n(&mut rng, 0.0, 100.0, 1, n),
        )?;
        t.sampled(col("velocity_24h", Integer), int_range_n(&mut rng, 1, 50, n))?;
        t.sampled(
            col("distance_from_home", Integer),
            int_range_n(&mut rng, 0, 5000, n),
        )?;
        t.sampled(
            col("time_since_last_txn_minutes", Integer),
            int_range_n(&mut rng, 1, 10_080, n),
        )?;
        t.sampled(
            col("failed_attempts", Integer),
            int_range_n(&mut rng, 0, 10, n),
        )?;
        t.sampled(
            col("is_weekend", Integer),
            weekend.sample_n(n, &mut rng).into_iter().map(Value::Int).collect(),
        )?;
        t.sampled(
            col("is_night", Integer),
            night.sample_n(n, &mut rng).into_iter().map(Value::Int).collect(),
        )?;
        t.sampled(
            col("is_international", Integer),
            international
                .sample_n(n, &mut rng)
                .into_iter()
                .map(Value::Int)
                .collect(),
        )?;

        // The random component of the label is sampled, not derived.
        let random_flags: Vec<bool> = (0..n)
            .map(|_| rng.random_bool(RANDOM_FRAUD_RATE))
            .collect();

        t.derive(col("fraud_risk_score", Float), |r| {
            let weighted = r.f64("ip_risk_score")? * 0.3
                + (r.f64("velocity_24h")? / 50.0 * 100.0) * 0.2
                + (r.f64("distance_from_home")? / 5000.0 * 100.0) * 0.15
                + (r.f64("failed_attempts")? / 10.0 * 100.0) * 0.15
                + r.f64("is_night")? * 20.0
                + r.f64("is_international")? * 30.0;
            Ok(Value::Float(round_to(weighted / 2.0, 1).clamp(0.0, 100.0)))
        })?;
        t.derive(col("is_fraud", Integer), |r| {
            let by_score = r.f64("fraud_risk_score")? > 70.0;
            let by_chance = random_flags[r.index()];
            Ok(Value::Int(i64::from(by_score || by_chance)))
        })?;
        t.derive(col("is_anomaly", Integer), |r| {
            Ok(Value::Int(i64::from(r.f64("fraud_risk_score")? > 50.0)))
        })?;

        Ok(t.finish())
    }
}
