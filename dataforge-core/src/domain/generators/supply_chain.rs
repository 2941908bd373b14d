// dataforge-core/src/domain/generators/supply_chain.rs

use crate::domain::dataset::{ColumnSpec, Dataset, SemanticType, TableBuilder, Value};
use crate::domain::dimensions::REGIONS;
use crate::domain::error::DomainError;
use crate::domain::generators::{
    categorical_n, date_values, int_range_n, ratio_or_zero, seeded_rng, sequence_ids,
    uniform_n, DomainGenerator, GeneratorContext,
};
use crate::domain::sampling::{round_to, WeightedChoice};
use rand::Rng;

const PRODUCTS: &[&str] = &[
    "Raw Material A",
    "Raw Material B",
    "Component X",
    "Component Y",
    "Finished Good 1",
    "Finished Good 2",
    "Packaging",
    "Equipment",
];
const WAREHOUSES: &[&str] = &["WH-North", "WH-South", "WH-East", "WH-West", "WH-Central"];
const RISK_LEVELS: &[&str] = &["Low", "Medium", "High", "Critical"];
const RISK_WEIGHTS: &[f64] = &[0.5, 0.3, 0.15, 0.05];
const SUPPLIER_COUNT: i64 = 50;

/// Inventory positions across suppliers and warehouses, with supply
/// coverage and shortage indicators derived from the sampled levels.
#[derive(Debug)]
pub struct SupplyChainGenerator;

impl DomainGenerator for SupplyChainGenerator {
    fn tag(&self) -> &'static str {
        "supply_chain"
    }

    fn title(&self) -> &'static str {
        "Supply Chain"
    }

    fn output_file(&self) -> &'static str {
        "supply_chain/supply_chain_data.csv"
    }

    fn default_rows(&self) -> usize {
        2500
    }

    fn generate(&self, n: usize, ctx: &GeneratorContext) -> Result<Dataset, DomainError> {
        let mut rng = seeded_rng(ctx.seed, self.tag());
        let col = |name, ty| ColumnSpec::new(name, ty);
        use SemanticType::{Categorical, Date, Float, Integer, Text};

        let risk = WeightedChoice::new("risk_level", RISK_LEVELS, RISK_WEIGHTS)?;

        let mut t = TableBuilder::new(self.tag(), n);
        t.sampled(col("inventory_id", Text), sequence_ids("INV", 6, n))?;
        t.sampled(col("date", Date), date_values(ctx.window.sample_n(n, &mut rng)))?;
        t.sampled(col("region", Categorical), categorical_n(&mut rng, REGIONS, n))?;
        t.sampled(col("product", Categorical), categorical_n(&mut rng, PRODUCTS, n))?;
        t.sampled(
            col("supplier", Categorical),
            (0..n)
                .map(|_| {
                    let i = rng.random_range(1..=SUPPLIER_COUNT);
                    Value::Text(format!("Supplier-{i:03}"))
                })
                .collect(),
        )?;
        t.sampled(
            col("warehouse", Categorical),
            categorical_n(&mut rng, WAREHOUSES, n),
        )?;
        t.sampled(
            col("inventory_level", Integer),
            int_range_n(&mut rng, 0, 10_000, n),
        )?;
        t.sampled(
            col("reorder_point", Integer),
            int_range_n(&mut rng, 100, 2000, n),
        )?;
        t.sampled(
            col("demand_forecast", Integer),
            int_range_n(&mut rng, 50, 5000, n),
        )?;
        t.sampled(col("lead_time_days", Integer), int_range_n(&mut rng, 1, 60, n))?;
        t.sampled(
            col("supplier_delay_days", Integer),
            int_range_n(&mut rng, 0, 30, n),
        )?;
        t.sampled(
            col("order_quantity", Integer),
            int_range_n(&mut rng, 100, 5000, n),
        )?;
        t.sampled(col("unit_cost", Float), uniform_n(&mut rng, 1.0, 500.0, 2, n))?;
        t.sampled(
            col("holding_cost", Float),
            uniform_n(&mut rng, 0.5, 10.0, 2, n),
        )?;
        t.sampled(
            col("stockout_count", Integer),
            int_range_n(&mut rng, 0, 20, n),
        )?;
        t.sampled(
            col("supplier_rating", Float),
            uniform_n(&mut rng, 1.0, 5.0, 1, n),
        )?;
        t.sampled(
            col("risk_level", Categorical),
            risk.sample_n(n, &mut rng).into_iter().map(Value::text).collect(),
        )?;
        t.sampled(
            col("on_time_delivery_rate", Float),
            uniform_n(&mut rng, 0.7, 1.0, 2, n),
        )?;

        t.derive(col("inventory_value", Float), |r| {
            Ok(Value::Float(round_to(
                r.f64("inventory_level")? * r.f64("unit_cost")?,
                2,
            )))
        })?;
        t.derive(col("days_of_supply", Float), |r| {
            let daily_demand = r.f64("demand_forecast")? / 30.0;
            Ok(Value::Float(round_to(
                ratio_or_zero(r.f64("inventory_level")?, daily_demand),
                1,
            )))
        })?;
        t.derive(col("shortage_risk", Integer), |r| {
            let short = r.i64("inventory_level")? < r.i64("reorder_point")?;
            Ok(Value::Int(i64::from(short)))
        })?;

        Ok(t.finish())
    }
}
