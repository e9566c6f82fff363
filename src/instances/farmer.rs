// Farmer land-allocation instances
//
// A farmer splits a fixed amount of land between wheat, corn, and sugar
// beets. Wheat and corn have minimum requirements that can be covered by
// buying at a markup; beets sell at a high price up to a quota and at a low
// price beyond it. Yields are uncertain: each scenario carries a yield
// multiplier applied to the average per-acre yields.

use crate::application::builder;
use crate::domain::{LinearExpr, Model, ModelError, Scenario, ScenarioSet, Sense};

/// Scenario parameter scaling all per-acre yields
pub const YIELD_MULTIPLIER: &str = "yield_multiplier";

#[derive(Debug, Clone)]
pub struct FarmerParams {
    pub total_land: f64,
    pub required_wheat: f64,
    pub required_corn: f64,
    pub plant_cost_wheat: f64,
    pub plant_cost_corn: f64,
    pub plant_cost_beet: f64,
    pub sell_price_wheat: f64,
    pub sell_price_corn: f64,
    /// Purchase price factor over the selling price
    pub purchase_markup: f64,
    pub beet_price_high: f64,
    pub beet_price_low: f64,
    pub beet_quota: f64,
    /// Average tons per acre
    pub yield_wheat: f64,
    pub yield_corn: f64,
    pub yield_beet: f64,
}

impl Default for FarmerParams {
    fn default() -> Self {
        Self {
            total_land: 500.0,
            required_wheat: 200.0,
            required_corn: 240.0,
            plant_cost_wheat: 150.0,
            plant_cost_corn: 230.0,
            plant_cost_beet: 260.0,
            sell_price_wheat: 170.0,
            sell_price_corn: 150.0,
            purchase_markup: 1.4,
            beet_price_high: 36.0,
            beet_price_low: 10.0,
            beet_quota: 6000.0,
            yield_wheat: 2.5,
            yield_corn: 3.0,
            yield_beet: 20.0,
        }
    }
}

/// Build the farmer model over an arbitrary scenario set
///
/// Land allocation is first-stage; per-scenario sales and purchases are
/// recourse. The objective maximizes expected profit.
pub fn build(params: &FarmerParams, scenarios: &ScenarioSet) -> Result<Model, ModelError> {
    let mut model = Model::new("farmer");

    let acres_wheat = model.continuous("acres_wheat")?;
    let acres_corn = model.continuous("acres_corn")?;
    let acres_beet = model.continuous("acres_beet")?;
    builder::capacity(
        &mut model,
        "land",
        &[acres_wheat, acres_corn, acres_beet],
        params.total_land,
    );

    let mut first_stage = LinearExpr::new();
    first_stage.add_term(acres_wheat, -params.plant_cost_wheat);
    first_stage.add_term(acres_corn, -params.plant_cost_corn);
    first_stage.add_term(acres_beet, -params.plant_cost_beet);

    let buy_price_wheat = params.purchase_markup * params.sell_price_wheat;
    let buy_price_corn = params.purchase_markup * params.sell_price_corn;

    let mut recourse = Vec::with_capacity(scenarios.len());
    for scenario in scenarios.iter() {
        let multiplier = scenario.value_or(YIELD_MULTIPLIER, 1.0);
        let tag = scenario.label();

        let wheat_sold = model.continuous(format!("wheat_sold_{tag}"))?;
        let wheat_bought = model.continuous(format!("wheat_bought_{tag}"))?;
        let corn_sold = model.continuous(format!("corn_sold_{tag}"))?;
        let corn_bought = model.continuous(format!("corn_bought_{tag}"))?;
        let beet_high = model.continuous(format!("beet_sold_high_{tag}"))?;
        let beet_low = model.continuous(format!("beet_sold_low_{tag}"))?;

        builder::recourse_balance(
            &mut model,
            format!("wheat_requirement_{tag}"),
            multiplier * params.yield_wheat,
            acres_wheat,
            Some(wheat_bought),
            Some(wheat_sold),
            params.required_wheat,
        );
        builder::recourse_balance(
            &mut model,
            format!("corn_requirement_{tag}"),
            multiplier * params.yield_corn,
            acres_corn,
            Some(corn_bought),
            Some(corn_sold),
            params.required_corn,
        );
        builder::tiered_sales_cap(
            &mut model,
            format!("beet_sales_{tag}"),
            &[beet_high, beet_low],
            multiplier * params.yield_beet,
            acres_beet,
            beet_high,
            params.beet_quota,
        );

        let mut profit = LinearExpr::new();
        profit.add_term(wheat_sold, params.sell_price_wheat);
        profit.add_term(wheat_bought, -buy_price_wheat);
        profit.add_term(corn_sold, params.sell_price_corn);
        profit.add_term(corn_bought, -buy_price_corn);
        profit.add_term(beet_high, params.beet_price_high);
        profit.add_term(beet_low, params.beet_price_low);
        recourse.push(profit);
    }

    let mut per_scenario = recourse.into_iter();
    let objective = builder::compose(Sense::Maximize, first_stage, scenarios, |_| {
        per_scenario.next().unwrap_or_default()
    });
    model.set_objective(objective);
    Ok(model)
}

/// Two-stage instance: yield multipliers 0.8 / 1.0 / 1.2, each with
/// probability one third
pub fn two_stage() -> Result<Model, ModelError> {
    let third = 1.0 / 3.0;
    let scenarios = ScenarioSet::build(vec![
        Scenario::new("low", third).with(YIELD_MULTIPLIER, 0.8),
        Scenario::new("avg", third),
        Scenario::new("high", third).with(YIELD_MULTIPLIER, 1.2),
    ])?;
    build(&FarmerParams::default(), &scenarios)
}

/// Deterministic instance at a fixed yield multiplier (1.2 reproduces the
/// good-weather planning exercise)
pub fn deterministic(multiplier: f64) -> Result<Model, ModelError> {
    let scenarios = ScenarioSet::build(vec![
        Scenario::new("base", 1.0).with(YIELD_MULTIPLIER, multiplier)
    ])?;
    build(&FarmerParams::default(), &scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RelOp;

    fn coeff(model: &Model, var: &str) -> f64 {
        let id = model
            .registry()
            .iter()
            .find(|(_, v)| v.name == var)
            .map(|(id, _)| id)
            .unwrap();
        model.objective().unwrap().expr.coefficient(id)
    }

    #[test]
    fn two_stage_objective_matches_weighted_reconstruction() {
        let model = two_stage().unwrap();
        let third = 1.0 / 3.0;

        // First-stage planting costs enter once, unweighted
        assert!((coeff(&model, "acres_wheat") - -150.0).abs() < 1e-12);
        assert!((coeff(&model, "acres_corn") - -230.0).abs() < 1e-12);
        assert!((coeff(&model, "acres_beet") - -260.0).abs() < 1e-12);

        // Recourse terms are probability-weighted per scenario
        for tag in ["low", "avg", "high"] {
            assert!((coeff(&model, &format!("wheat_sold_{tag}")) - third * 170.0).abs() < 1e-12);
            assert!(
                (coeff(&model, &format!("wheat_bought_{tag}")) - -third * 1.4 * 170.0).abs()
                    < 1e-12
            );
            assert!((coeff(&model, &format!("corn_sold_{tag}")) - third * 150.0).abs() < 1e-12);
            assert!(
                (coeff(&model, &format!("beet_sold_high_{tag}")) - third * 36.0).abs() < 1e-12
            );
            assert!((coeff(&model, &format!("beet_sold_low_{tag}")) - third * 10.0).abs() < 1e-12);
        }
    }

    #[test]
    fn deterministic_collapse_matches_single_scenario_objective() {
        let model = deterministic(1.0).unwrap();
        // With probability one the recourse terms enter unweighted
        assert!((coeff(&model, "wheat_sold_base") - 170.0).abs() < 1e-12);
        assert!((coeff(&model, "wheat_bought_base") - -238.0).abs() < 1e-12);
        assert!((coeff(&model, "acres_wheat") - -150.0).abs() < 1e-12);
    }

    #[test]
    fn explicit_multiplier_of_one_equals_the_plain_deterministic_set() {
        let params = FarmerParams::default();
        let plain = build(&params, &ScenarioSet::deterministic()).unwrap();
        let explicit = deterministic(1.0).unwrap();
        assert_eq!(
            plain.objective().unwrap().expr,
            explicit.objective().unwrap().expr
        );
    }

    #[test]
    fn yield_multiplier_scales_balance_and_cap_rows() {
        let model = deterministic(1.2).unwrap();
        let acres_wheat = model
            .registry()
            .iter()
            .find(|(_, v)| v.name == "acres_wheat")
            .map(|(id, _)| id)
            .unwrap();
        let balance = model
            .constraints()
            .iter()
            .find(|c| c.name == "wheat_requirement_base")
            .unwrap();
        assert_eq!(balance.op, RelOp::GreaterOrEqual);
        assert!((balance.expr.coefficient(acres_wheat) - 3.0).abs() < 1e-12);
        assert_eq!(balance.rhs, 200.0);
    }

    #[test]
    fn constraint_count_scales_with_scenarios() {
        let model = two_stage().unwrap();
        // 1 land row + 3 scenarios x (2 balances + yield cap + quota)
        assert_eq!(model.constraints().len(), 1 + 3 * 4);
    }
}
