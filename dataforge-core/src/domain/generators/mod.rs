// dataforge-core/src/domain/generators/mod.rs
//
// One generator per business domain. Each one owns an independently
// seeded random stream derived from the root seed plus its domain tag,
// so generators are order-independent and safely parallelizable: the
// row count or invocation order of one domain never changes another's
// output.

pub mod finance;
pub mod fraud;
pub mod hr;
pub mod operations;
pub mod public_impact;
pub mod sales;
pub mod supply_chain;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::dataset::{Dataset, Value};
use crate::domain::dates::DateWindow;
use crate::domain::error::DomainError;
use crate::domain::sampling::uniform;

pub use finance::FinanceGenerator;
pub use fraud::FraudGenerator;
pub use hr::HrGenerator;
pub use operations::OperationsGenerator;
pub use public_impact::PublicImpactGenerator;
pub use sales::SalesGenerator;
pub use supply_chain::SupplyChainGenerator;

/// Run-level inputs shared by all generators. The hire window only
/// matters to HR, which samples hiring dates over a longer horizon.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext {
    pub seed: u64,
    pub window: DateWindow,
    pub hire_window: DateWindow,
}

/// Contract shared by the seven domain generators: a fixed schema, `n`
/// rows, sampled columns first, derived columns strictly after, no I/O.
pub trait DomainGenerator: Send + Sync + std::fmt::Debug {
    /// Stable lowercase tag, also the seed-derivation key.
    fn tag(&self) -> &'static str;

    /// Human-facing name for logs and reports.
    fn title(&self) -> &'static str;

    /// Output path relative to the run's data directory.
    fn output_file(&self) -> &'static str;

    fn default_rows(&self) -> usize;

    fn generate(&self, n: usize, ctx: &GeneratorContext) -> Result<Dataset, DomainError>;
}

/// The seven generators in their fixed registration order.
pub fn standard_generators() -> Vec<Box<dyn DomainGenerator>> {
    vec![
        Box::new(SalesGenerator),
        Box::new(HrGenerator),
        Box::new(FinanceGenerator),
        Box::new(OperationsGenerator),
        Box::new(SupplyChainGenerator),
        Box::new(FraudGenerator),
        Box::new(PublicImpactGenerator),
    ]
}

/// FNV-1a over the domain tag, xored into the root seed. Gives every
/// domain its own deterministic stream (strategy: per-component seeds
/// instead of one shared global stream).
pub fn domain_seed(root_seed: u64, tag: &str) -> u64 {
    let mut hash = root_seed ^ 0xcbf2_9ce4_8422_2325;
    for byte in tag.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

pub(crate) fn seeded_rng(root_seed: u64, tag: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(domain_seed(root_seed, tag))
}

/// Zero denominators resolve to 0.0 instead of inf/NaN. Uniform policy
/// for every derived ratio (profit_margin, forecast_accuracy, ...).
pub(crate) fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

// --- COLUMN-VECTOR HELPERS ---
// Small shorthands so each generator reads close to its schema table.

/// `PREFIX-000001 .. PREFIX-00000n`: monotonically increasing, zero
/// padded, unique within one dataset.
pub(crate) fn sequence_ids(prefix: &str, width: usize, n: usize) -> Vec<Value> {
    (1..=n)
        .map(|i| Value::Text(format!("{prefix}-{i:0width$}")))
        .collect()
}

/// Random reference ids (`CUST-0042`): not unique, not consistent
/// across datasets.
pub(crate) fn reference_ids(
    rng: &mut impl Rng,
    prefix: &str,
    width: usize,
    max: i64,
    n: usize,
) -> Vec<Value> {
    (0..n)
        .map(|_| {
            let i = rng.random_range(1..=max);
            Value::Text(format!("{prefix}-{i:0width$}"))
        })
        .collect()
}

pub(crate) fn categorical_n(rng: &mut impl Rng, pool: &[&str], n: usize) -> Vec<Value> {
    (0..n)
        .map(|_| Value::text(pool[rng.random_range(0..pool.len())]))
        .collect()
}

/// Integer draws over the half-open range `[lo, hi)`.
pub(crate) fn int_range_n(rng: &mut impl Rng, lo: i64, hi: i64, n: usize) -> Vec<Value> {
    (0..n).map(|_| Value::Int(rng.random_range(lo..hi))).collect()
}

pub(crate) fn uniform_n(
    rng: &mut impl Rng,
    lo: f64,
    hi: f64,
    decimals: u32,
    n: usize,
) -> Vec<Value> {
    (0..n)
        .map(|_| Value::Float(uniform(rng, lo, hi, decimals)))
        .collect()
}

pub(crate) fn date_values(dates: Vec<chrono::NaiveDate>) -> Vec<Value> {
    dates.into_iter().map(Value::Date).collect()
}

pub(crate) fn text_values<T: Into<String>>(values: Vec<T>) -> Vec<Value> {
    values.into_iter().map(Value::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    pub(crate) fn test_context(seed: u64) -> GeneratorContext {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        GeneratorContext {
            seed,
            window: DateWindow::new(d(2022, 1, 1), d(2024, 12, 31)).unwrap(),
            hire_window: DateWindow::new(d(2015, 1, 1), d(2024, 12, 31)).unwrap(),
        }
    }

    #[test]
    fn test_domain_seed_varies_by_tag() {
        assert_ne!(domain_seed(42, "sales"), domain_seed(42, "fraud"));
        assert_eq!(domain_seed(42, "sales"), domain_seed(42, "sales"));
    }

    #[test]
    fn test_sequence_ids_padded_and_unique() {
        let ids = sequence_ids("TXN", 6, 3);
        assert_eq!(ids[0], Value::text("TXN-000001"));
        assert_eq!(ids[2], Value::text("TXN-000003"));
    }

    #[test]
    fn test_ratio_or_zero_guards_zero_denominator() {
        assert_eq!(ratio_or_zero(10.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(10.0, 4.0), 2.5);
    }

    /// Every generator must yield its declared schema for n = 0 and 1,
    /// and identical output across two runs with the same seed.
    #[test]
    fn test_all_generators_schema_and_determinism() {
        let ctx = test_context(42);
        for generator in standard_generators() {
            for n in [0_usize, 1] {
                let ds = generator.generate(n, &ctx).unwrap();
                assert_eq!(ds.row_count(), n, "{} rows", generator.tag());
                assert!(ds.column_count() > 0, "{} columns", generator.tag());
            }
            let a = generator.generate(25, &ctx).unwrap();
            let b = generator.generate(25, &ctx).unwrap();
            assert_eq!(a, b, "{} not deterministic", generator.tag());
        }
    }

    /// Per-domain streams: another domain's row count (or whether it ran
    /// at all) never changes this domain's output.
    #[test]
    fn test_domains_are_independent() {
        let ctx = test_context(42);

        let _ = FraudGenerator.generate(10, &ctx).unwrap();
        let sales_after_small_fraud = SalesGenerator.generate(50, &ctx).unwrap();

        let _ = FraudGenerator.generate(999, &ctx).unwrap();
        let sales_after_large_fraud = SalesGenerator.generate(50, &ctx).unwrap();

        assert_eq!(sales_after_small_fraud, sales_after_large_fraud);
    }

    /// Changing the root seed must change the data (sanity check that
    /// the seed actually feeds the streams).
    #[test]
    fn test_seed_changes_output() {
        let sales = SalesGenerator;
        let a = sales.generate(50, &test_context(42)).unwrap();
        let b = sales.generate(50, &test_context(43)).unwrap();
        assert_ne!(a, b);
    }
}
