// Constraint templates and objective composition
//
// The recurring constraint shapes of the resource-allocation problems are
// defined once here and instantiated per scenario by the callers, so a
// deterministic model and an n-scenario stochastic model are the same code
// path at different scenario-set cardinalities.

use crate::domain::{
    LinearExpr, Model, Objective, RelOp, Scenario, ScenarioSet, Sense, VarId,
};

/// Capacity constraint: the allocation variables sum to at most `capacity`
///
/// Scenario-independent; add it once per model.
pub fn capacity(model: &mut Model, name: impl Into<String>, vars: &[VarId], capacity: f64) {
    let mut expr = LinearExpr::new();
    for &var in vars {
        expr.add_term(var, 1.0);
    }
    model.constrain(name, expr, RelOp::LessOrEqual, capacity);
}

/// Recourse balance: `yield_factor * alloc + purchase - sale >= requirement`
///
/// Production scaled by the realized yield, plus any purchased make-up
/// quantity, minus any quantity sold elsewhere, must cover a fixed
/// requirement. Instantiated once per (resource, scenario) pair.
pub fn recourse_balance(
    model: &mut Model,
    name: impl Into<String>,
    yield_factor: f64,
    alloc: VarId,
    purchase: Option<VarId>,
    sale: Option<VarId>,
    requirement: f64,
) {
    let mut expr = LinearExpr::term(alloc, yield_factor);
    if let Some(purchase) = purchase {
        expr.add_term(purchase, 1.0);
    }
    if let Some(sale) = sale {
        expr.add_term(sale, -1.0);
    }
    model.constrain(name, expr, RelOp::GreaterOrEqual, requirement);
}

/// Tiered sales cap: sales across all price tiers stay within the realized
/// yield, and the top tier is additionally capped by an external quota
pub fn tiered_sales_cap(
    model: &mut Model,
    name: impl Into<String>,
    tiers: &[VarId],
    yield_factor: f64,
    alloc: VarId,
    top_tier: VarId,
    quota: f64,
) {
    let name = name.into();
    let mut expr = LinearExpr::new();
    for &tier in tiers {
        expr.add_term(tier, 1.0);
    }
    expr.add_term(alloc, -yield_factor);
    model.constrain(format!("{name}_yield"), expr, RelOp::LessOrEqual, 0.0);
    model.constrain(
        format!("{name}_quota"),
        LinearExpr::term(top_tier, 1.0),
        RelOp::LessOrEqual,
        quota,
    );
}

/// Demand cap: a production or sales variable stays within fixed demand
pub fn demand_limit(model: &mut Model, name: impl Into<String>, var: VarId, demand: f64) {
    model.constrain(name, LinearExpr::term(var, 1.0), RelOp::LessOrEqual, demand);
}

/// Requirement floor: a variable must reach at least `minimum`
pub fn minimum_level(model: &mut Model, name: impl Into<String>, var: VarId, minimum: f64) {
    model.constrain(
        name,
        LinearExpr::term(var, 1.0),
        RelOp::GreaterOrEqual,
        minimum,
    );
}

/// Compose the single objective of a two-stage program
///
/// `first_stage` is evaluated once; `per_scenario` supplies the recourse
/// expression of each scenario, which enters the objective weighted by that
/// scenario's probability:
///
/// `first_stage + Σ_s p(s) * per_scenario(s)`
///
/// For a single-scenario set this reduces exactly to the deterministic
/// objective. The sign of every term follows from the declared sense alone;
/// callers express costs and revenues directly.
pub fn compose(
    sense: Sense,
    first_stage: LinearExpr,
    scenarios: &ScenarioSet,
    mut per_scenario: impl FnMut(&Scenario) -> LinearExpr,
) -> Objective {
    let mut expr = first_stage;
    for scenario in scenarios.iter() {
        expr += per_scenario(scenario) * scenario.probability();
    }
    Objective { sense, expr }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Scenario;

    #[test]
    fn capacity_sums_allocations() {
        let mut model = Model::new("t");
        let x1 = model.continuous("x1").unwrap();
        let x2 = model.continuous("x2").unwrap();
        capacity(&mut model, "land", &[x1, x2], 500.0);

        let c = &model.constraints()[0];
        assert_eq!(c.expr.coefficient(x1), 1.0);
        assert_eq!(c.expr.coefficient(x2), 1.0);
        assert_eq!(c.op, RelOp::LessOrEqual);
        assert_eq!(c.rhs, 500.0);
    }

    #[test]
    fn recourse_balance_matches_template() {
        let mut model = Model::new("t");
        let acres = model.continuous("acres").unwrap();
        let bought = model.continuous("bought").unwrap();
        let sold = model.continuous("sold").unwrap();
        recourse_balance(
            &mut model,
            "wheat_low",
            2.0,
            acres,
            Some(bought),
            Some(sold),
            200.0,
        );

        let c = &model.constraints()[0];
        assert_eq!(c.expr.coefficient(acres), 2.0);
        assert_eq!(c.expr.coefficient(bought), 1.0);
        assert_eq!(c.expr.coefficient(sold), -1.0);
        assert_eq!(c.op, RelOp::GreaterOrEqual);
        assert_eq!(c.rhs, 200.0);
    }

    #[test]
    fn tiered_sales_cap_emits_yield_and_quota_rows() {
        let mut model = Model::new("t");
        let acres = model.continuous("acres").unwrap();
        let high = model.continuous("high").unwrap();
        let low = model.continuous("low").unwrap();
        tiered_sales_cap(&mut model, "beet", &[high, low], 20.0, acres, high, 6000.0);

        assert_eq!(model.constraints().len(), 2);
        let yield_row = &model.constraints()[0];
        assert_eq!(yield_row.expr.coefficient(high), 1.0);
        assert_eq!(yield_row.expr.coefficient(low), 1.0);
        assert_eq!(yield_row.expr.coefficient(acres), -20.0);
        assert_eq!(yield_row.rhs, 0.0);
        let quota_row = &model.constraints()[1];
        assert_eq!(quota_row.expr.coefficient(high), 1.0);
        assert_eq!(quota_row.rhs, 6000.0);
    }

    #[test]
    fn single_scenario_compose_collapses_to_deterministic() {
        let mut model = Model::new("t");
        let x = model.continuous("x").unwrap();
        let y = model.continuous("y").unwrap();

        let first_stage = LinearExpr::term(x, -150.0);
        let recourse = |_: &Scenario| LinearExpr::term(y, 170.0);

        let stochastic = compose(
            Sense::Maximize,
            first_stage.clone(),
            &ScenarioSet::deterministic(),
            recourse,
        );
        let deterministic = Objective {
            sense: Sense::Maximize,
            expr: first_stage + recourse(&Scenario::new("base", 1.0)),
        };
        assert_eq!(stochastic, deterministic);
    }

    #[test]
    fn compose_weights_recourse_by_probability() {
        let mut model = Model::new("t");
        let x = model.continuous("x").unwrap();
        let y = model.continuous("y").unwrap();

        let set = ScenarioSet::build(vec![
            Scenario::new("low", 0.25).with("price", 10.0),
            Scenario::new("high", 0.75).with("price", 30.0),
        ])
        .unwrap();

        let objective = compose(
            Sense::Maximize,
            LinearExpr::term(x, -5.0),
            &set,
            |s| LinearExpr::term(y, s.value_or("price", 0.0)),
        );

        assert_eq!(objective.expr.coefficient(x), -5.0);
        assert_eq!(objective.expr.coefficient(y), 0.25 * 10.0 + 0.75 * 30.0);
    }
}
