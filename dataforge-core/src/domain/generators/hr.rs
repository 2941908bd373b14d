// dataforge-core/src/domain/generators/hr.rs

use crate::domain::dataset::{ColumnSpec, Dataset, SemanticType, TableBuilder, Value};
use crate::domain::dimensions::{DEPARTMENTS, REGIONS};
use crate::domain::error::DomainError;
use crate::domain::generators::{
    categorical_n, date_values, int_range_n, seeded_rng, sequence_ids, uniform_n,
    DomainGenerator, GeneratorContext,
};
use crate::domain::sampling::{round_to, WeightedChoice};

const JOB_TITLES: &[&str] = &[
    "Analyst",
    "Senior Analyst",
    "Manager",
    "Senior Manager",
    "Director",
    "VP",
    "Engineer",
    "Senior Engineer",
    "Specialist",
    "Coordinator",
];
const GENDERS: &[&str] = &["Male", "Female", "Non-Binary"];
const GENDER_WEIGHTS: &[f64] = &[0.48, 0.48, 0.04];
const ETHNICITIES: &[&str] = &["White", "Black", "Hispanic", "Asian", "Mixed", "Other"];
const ETHNICITY_WEIGHTS: &[f64] = &[0.45, 0.15, 0.18, 0.12, 0.07, 0.03];
const EDUCATION: &[&str] = &["High School", "Associate", "Bachelor", "Master", "PhD"];
const EDUCATION_WEIGHTS: &[f64] = &[0.1, 0.15, 0.45, 0.25, 0.05];
// Uniform over the repeated list, i.e. Active weighted 4/6.
const EMPLOYMENT_STATUS: &[&str] = &[
    "Active",
    "Active",
    "Active",
    "Active",
    "Terminated",
    "On Leave",
];
const PROMOTION_WEIGHTS: &[f64] = &[0.75, 0.25];

/// Employee roster. Hire dates come from the longer hiring window;
/// tenure is measured against the end of the main reporting window.
#[derive(Debug)]
pub struct HrGenerator;

impl DomainGenerator for HrGenerator {
    fn tag(&self) -> &'static str {
        "hr"
    }

    fn title(&self) -> &'static str {
        "HR"
    }

    fn output_file(&self) -> &'static str {
        "hr/hr_data.csv"
    }

    fn default_rows(&self) -> usize {
        1500
    }

    fn generate(&self, n: usize, ctx: &GeneratorContext) -> Result<Dataset, DomainError> {
        let mut rng = seeded_rng(ctx.seed, self.tag());
        let col = |name, ty| ColumnSpec::new(name, ty);
        use SemanticType::{Categorical, Date, Float, Integer, Text};

        let genders = WeightedChoice::new("gender", GENDERS, GENDER_WEIGHTS)?;
        let ethnicities = WeightedChoice::new("ethnicity", ETHNICITIES, ETHNICITY_WEIGHTS)?;
        let education = WeightedChoice::new("education", EDUCATION, EDUCATION_WEIGHTS)?;
        let promotions = WeightedChoice::new("promotion_last_3_years", &[0_i64, 1], PROMOTION_WEIGHTS)?;

        let reference_end = ctx.window.end;

        let mut t = TableBuilder::new(self.tag(), n);
        t.sampled(col("employee_id", Text), sequence_ids("EMP", 5, n))?;
        t.sampled(
            col("department", Categorical),
            categorical_n(&mut rng, DEPARTMENTS, n),
        )?;
        t.sampled(col("region", Categorical), categorical_n(&mut rng, REGIONS, n))?;
        t.sampled(
            col("job_title", Categorical),
            categorical_n(&mut rng, JOB_TITLES, n),
        )?;
        t.sampled(
            col("hire_date", Date),
            date_values(ctx.hire_window.sample_n(n, &mut rng)),
        )?;
        t.sampled(
            col("gender", Categorical),
            genders.sample_n(n, &mut rng).into_iter().map(Value::text).collect(),
        )?;
        t.sampled(
            col("ethnicity", Categorical),
            ethnicities
                .sample_n(n, &mut rng)
                .into_iter()
                .map(Value::text)
                .collect(),
        )?;
        t.sampled(col("age", Integer), int_range_n(&mut rng, 22, 65, n))?;
        t.sampled(
            col("education", Categorical),
            education
                .sample_n(n, &mut rng)
                .into_iter()
                .map(Value::text)
                .collect(),
        )?;
        t.sampled(
            col("salary", Float),
            uniform_n(&mut rng, 40_000.0, 200_000.0, 2, n),
        )?;
        t.sampled(
            col("performance_rating", Float),
            uniform_n(&mut rng, 1.0, 5.0, 1, n),
        )?;
        t.sampled(
            col("satisfaction_score", Float),
            uniform_n(&mut rng, 1.0, 5.0, 1, n),
        )?;
        t.sampled(
            col("engagement_score", Float),
            uniform_n(&mut rng, 1.0, 100.0, 0, n),
        )?;
        t.sampled(col("training_hours", Integer), int_range_n(&mut rng, 0, 200, n))?;
        t.sampled(
            col("promotion_last_3_years", Integer),
            promotions
                .sample_n(n, &mut rng)
                .into_iter()
                .map(Value::Int)
                .collect(),
        )?;
        t.sampled(
            col("employment_status", Categorical),
            categorical_n(&mut rng, EMPLOYMENT_STATUS, n),
        )?;
        t.sampled(
            col("time_to_hire_days", Integer),
            int_range_n(&mut rng, 14, 120, n),
        )?;
        t.sampled(
            col("turnover_risk", Float),
            uniform_n(&mut rng, 0.0, 1.0, 2, n),
        )?;

        t.derive(col("tenure_years", Float), move |r| {
            let days = (reference_end - r.date("hire_date")?).num_days();
            let years = (days as f64 / 365.0).max(0.0);
            Ok(Value::Float(round_to(years, 1)))
        })?;

        Ok(t.finish())
    }
}
