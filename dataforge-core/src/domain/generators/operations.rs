// dataforge-core/src/domain/generators/operations.rs

use crate::domain::dataset::{ColumnSpec, Dataset, SemanticType, TableBuilder, Value};
use crate::domain::dimensions::REGIONS;
use crate::domain::error::DomainError;
use crate::domain::generators::{
    categorical_n, date_values, int_range_n, ratio_or_zero, seeded_rng, sequence_ids,
    uniform_n, DomainGenerator, GeneratorContext,
};
use crate::domain::sampling::{round_to, WeightedChoice};

const SERVICE_TYPES: &[&str] = &[
    "Outpatient",
    "Inpatient",
    "Emergency",
    "Surgery",
    "Diagnostic",
    "Therapy",
    "Consultation",
];
// Operations uses its own department pool, not the company-wide one.
const OPS_DEPARTMENTS: &[&str] = &[
    "Emergency",
    "Radiology",
    "Surgery",
    "ICU",
    "Pharmacy",
    "Lab",
    "Administration",
    "Outpatient",
];
const PRIORITIES: &[&str] = &["Low", "Medium", "High", "Critical"];
const PRIORITY_WEIGHTS: &[f64] = &[0.3, 0.4, 0.2, 0.1];
const BOTTLENECK_WEIGHTS: &[f64] = &[0.85, 0.15];

/// Healthcare-style case flow: wait plus service time, with an
/// efficiency score derived from the split.
#[derive(Debug)]
pub struct OperationsGenerator;

impl DomainGenerator for OperationsGenerator {
    fn tag(&self) -> &'static str {
        "operations"
    }

    fn title(&self) -> &'static str {
        "Operations"
    }

    fn output_file(&self) -> &'static str {
        "healthcare/operations_data.csv"
    }

    fn default_rows(&self) -> usize {
        3000
    }

    fn generate(&self, n: usize, ctx: &GeneratorContext) -> Result<Dataset, DomainError> {
        let mut rng = seeded_rng(ctx.seed, self.tag());
        let col = |name, ty| ColumnSpec::new(name, ty);
        use SemanticType::{Categorical, Date, Float, Integer, Text};

        let priorities = WeightedChoice::new("priority", PRIORITIES, PRIORITY_WEIGHTS)?;
        let bottleneck = WeightedChoice::new("bottleneck_flag", &[0_i64, 1], BOTTLENECK_WEIGHTS)?;

        let mut t = TableBuilder::new(self.tag(), n);
        t.sampled(col("case_id", Text), sequence_ids("CASE", 6, n))?;
        t.sampled(col("date", Date), date_values(ctx.window.sample_n(n, &mut rng)))?;
        t.sampled(col("region", Categorical), categorical_n(&mut rng, REGIONS, n))?;
        t.sampled(
            col("department", Categorical),
            categorical_n(&mut rng, OPS_DEPARTMENTS, n),
        )?;
        t.sampled(
            col("service_type", Categorical),
            categorical_n(&mut rng, SERVICE_TYPES, n),
        )?;
        t.sampled(
            col("priority", Categorical),
            priorities
                .sample_n(n, &mut rng)
                .into_iter()
                .map(Value::text)
                .collect(),
        )?;
        t.sampled(
            col("wait_time_minutes", Integer),
            int_range_n(&mut rng, 5, 240, n),
        )?;
        t.sampled(
            col("service_time_minutes", Integer),
            int_range_n(&mut rng, 15, 480, n),
        )?;
        t.sampled(col("throughput", Integer), int_range_n(&mut rng, 1, 100, n))?;
        t.sampled(
            col("capacity_utilization", Float),
            uniform_n(&mut rng, 0.4, 1.0, 2, n),
        )?;
        t.sampled(col("staff_count", Integer), int_range_n(&mut rng, 2, 20, n))?;
        t.sampled(
            col("patient_volume", Integer),
            int_range_n(&mut rng, 10, 500, n),
        )?;
        t.sampled(
            col("satisfaction_score", Float),
            uniform_n(&mut rng, 1.0, 5.0, 1, n),
        )?;
        t.sampled(
            col("cost_per_case", Float),
            uniform_n(&mut rng, 100.0, 10_000.0, 2, n),
        )?;
        t.sampled(
            col("readmission_rate", Float),
            uniform_n(&mut rng, 0.0, 0.2, 3, n),
        )?;
        t.sampled(
            col("bottleneck_flag", Integer),
            bottleneck
                .sample_n(n, &mut rng)
                .into_iter()
                .map(Value::Int)
                .collect(),
        )?;

        t.derive(col("total_time_minutes", Integer), |r| {
            Ok(Value::Int(
                r.i64("wait_time_minutes")? + r.i64("service_time_minutes")?,
            ))
        })?;
        t.derive(col("efficiency_score", Float), |r| {
            let pct = 100.0
                * ratio_or_zero(r.f64("service_time_minutes")?, r.f64("total_time_minutes")?);
            Ok(Value::Float(round_to(pct, 2)))
        })?;

        Ok(t.finish())
    }
}
