// Manufacturer batch-planning instances
//
// A manufacturer sets component batch levels (first stage), then produces
// two products whose component usage must stay within the batched supply.
// Product prices are uncertain in the two-stage variant: each scenario
// overrides the selling prices, and component costs are folded into the
// per-unit margins.

use crate::application::builder;
use crate::domain::{LinearExpr, Model, ModelError, Objective, RelOp, Scenario, ScenarioSet, Sense, VarId};

/// Scenario parameters overriding the product selling prices
pub const PRICE_A: &str = "price_a";
pub const PRICE_B: &str = "price_b";

#[derive(Debug, Clone)]
pub struct ManufacturerParams {
    /// Component C1/C2 units consumed per unit of product A
    pub comp_req_a: [f64; 2],
    /// Component C1/C2 units consumed per unit of product B
    pub comp_req_b: [f64; 2],
    pub comp_cost: [f64; 2],
    pub capacity_cost: [f64; 2],
    pub current_capacity: [f64; 2],
    pub capacity_limit: f64,
    /// Component units produced per batch
    pub batch_size: [f64; 2],
    pub demand_a: f64,
    pub demand_b: f64,
    pub price_a: f64,
    pub price_b: f64,
}

impl Default for ManufacturerParams {
    fn default() -> Self {
        Self {
            comp_req_a: [6.0, 8.0],
            comp_req_b: [10.0, 5.0],
            comp_cost: [0.4, 1.2],
            capacity_cost: [150.0, 180.0],
            current_capacity: [40.0, 20.0],
            capacity_limit: 120.0,
            batch_size: [60.0, 90.0],
            demand_a: 500.0,
            demand_b: 200.0,
            price_a: 50.0,
            price_b: 60.0,
        }
    }
}

impl ManufacturerParams {
    /// Per-unit margin of product A at a given selling price
    fn margin_a(&self, price: f64) -> f64 {
        price - self.comp_req_a[0] * self.comp_cost[0] - self.comp_req_a[1] * self.comp_cost[1]
    }

    fn margin_b(&self, price: f64) -> f64 {
        price - self.comp_req_b[0] * self.comp_cost[0] - self.comp_req_b[1] * self.comp_cost[1]
    }
}

/// Build the manufacturer model over an arbitrary scenario set
///
/// Component batch levels are first-stage; per-scenario production is
/// recourse bounded by demand and by the batched component supply. The
/// objective maximizes expected profit.
pub fn build(params: &ManufacturerParams, scenarios: &ScenarioSet) -> Result<Model, ModelError> {
    let mut model = Model::new("manufacturer");

    let batches_c1 = model.continuous("batches_c1")?;
    let batches_c2 = model.continuous("batches_c2")?;
    builder::capacity(
        &mut model,
        "batch_capacity",
        &[batches_c1, batches_c2],
        params.capacity_limit,
    );
    builder::minimum_level(&mut model, "c1_floor", batches_c1, params.current_capacity[0]);
    builder::minimum_level(&mut model, "c2_floor", batches_c2, params.current_capacity[1]);

    let mut first_stage = LinearExpr::new();
    first_stage.add_term(batches_c1, -params.capacity_cost[0]);
    first_stage.add_term(batches_c2, -params.capacity_cost[1]);

    let mut recourse = Vec::with_capacity(scenarios.len());
    for scenario in scenarios.iter() {
        let tag = scenario.label();
        let units_a = model.continuous(format!("units_a_{tag}"))?;
        let units_b = model.continuous(format!("units_b_{tag}"))?;

        builder::demand_limit(&mut model, format!("demand_a_{tag}"), units_a, params.demand_a);
        builder::demand_limit(&mut model, format!("demand_b_{tag}"), units_b, params.demand_b);
        component_usage(
            &mut model,
            format!("c1_usage_{tag}"),
            &[(units_a, params.comp_req_a[0]), (units_b, params.comp_req_b[0])],
            params.batch_size[0],
            batches_c1,
        );
        component_usage(
            &mut model,
            format!("c2_usage_{tag}"),
            &[(units_a, params.comp_req_a[1]), (units_b, params.comp_req_b[1])],
            params.batch_size[1],
            batches_c2,
        );

        let margin_a = params.margin_a(scenario.value_or(PRICE_A, params.price_a));
        let margin_b = params.margin_b(scenario.value_or(PRICE_B, params.price_b));
        let mut profit = LinearExpr::new();
        profit.add_term(units_a, margin_a);
        profit.add_term(units_b, margin_b);
        recourse.push(profit);
    }

    let mut per_scenario = recourse.into_iter();
    let objective = builder::compose(Sense::Maximize, first_stage, scenarios, |_| {
        per_scenario.next().unwrap_or_default()
    });
    model.set_objective(objective);
    Ok(model)
}

/// Component usage row: total consumption stays within the batched supply
fn component_usage(
    model: &mut Model,
    name: String,
    uses: &[(VarId, f64)],
    batch_size: f64,
    batches: VarId,
) {
    let mut expr = LinearExpr::new();
    for &(var, rate) in uses {
        expr.add_term(var, rate);
    }
    expr.add_term(batches, -batch_size);
    model.constrain(name, expr, RelOp::LessOrEqual, 0.0);
}

/// Deterministic instance at the book prices
pub fn deterministic() -> Result<Model, ModelError> {
    build(&ManufacturerParams::default(), &ScenarioSet::deterministic())
}

/// Two-stage instance under three price scenarios
pub fn two_stage() -> Result<Model, ModelError> {
    let scenarios = ScenarioSet::build(vec![
        Scenario::new("s1", 0.3).with(PRICE_A, 70.0).with(PRICE_B, 50.0),
        Scenario::new("s2", 0.4).with(PRICE_A, 50.0).with(PRICE_B, 60.0),
        Scenario::new("s3", 0.3).with(PRICE_A, 30.0).with(PRICE_B, 70.0),
    ])?;
    build(&ManufacturerParams::default(), &scenarios)
}

/// Capacity-expansion variant: explicit expansion variables, component batch
/// counts paying the per-batch component cost, and production capped by the
/// expanded capacity
pub fn expansion() -> Result<Model, ModelError> {
    let params = ManufacturerParams::default();
    let mut model = Model::new("manufacturer_expansion");

    let units_a = model.continuous("units_a")?;
    let units_b = model.continuous("units_b")?;
    let expand_c1 = model.continuous("expand_c1")?;
    let expand_c2 = model.continuous("expand_c2")?;
    let comp_c1 = model.continuous("comp_c1")?;
    let comp_c2 = model.continuous("comp_c2")?;

    builder::demand_limit(&mut model, "demand_a", units_a, params.demand_a);
    builder::demand_limit(&mut model, "demand_b", units_b, params.demand_b);

    // comp <= batch_size * (expansion + current_capacity)
    for (i, (comp, expand)) in [(comp_c1, expand_c1), (comp_c2, expand_c2)]
        .into_iter()
        .enumerate()
    {
        let mut expr = LinearExpr::term(comp, 1.0);
        expr.add_term(expand, -params.batch_size[i]);
        model.constrain(
            format!("c{}_production_cap", i + 1),
            expr,
            RelOp::LessOrEqual,
            params.batch_size[i] * params.current_capacity[i],
        );
    }

    // Production limited by available components
    let mut avail_a = LinearExpr::term(units_a, 1.0);
    avail_a.add_term(comp_c1, -params.comp_req_a[0]);
    avail_a.add_term(comp_c2, -params.comp_req_a[1]);
    model.constrain("a_components", avail_a, RelOp::LessOrEqual, 0.0);

    let mut avail_b = LinearExpr::term(units_b, 1.0);
    avail_b.add_term(comp_c1, -params.comp_req_b[0]);
    avail_b.add_term(comp_c2, -params.comp_req_b[1]);
    model.constrain("b_components", avail_b, RelOp::LessOrEqual, 0.0);

    let mut expr = LinearExpr::new();
    expr.add_term(units_a, params.price_a);
    expr.add_term(units_b, params.price_b);
    expr.add_term(expand_c1, -params.capacity_cost[0]);
    expr.add_term(expand_c2, -params.capacity_cost[1]);
    expr.add_term(comp_c1, -params.comp_cost[0]);
    expr.add_term(comp_c2, -params.comp_cost[1]);
    model.set_objective(Objective {
        sense: Sense::Maximize,
        expr,
    });
    Ok(model)
}
