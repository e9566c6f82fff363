// End-to-end solves against the default backend

use stochopt::instances::{farmer, manufacturer};
use stochopt::{
    LinearExpr, Model, Objective, RelOp, Sense, SolveStatus, SolverBackend, SolverFactory,
};

/// minimize 150 x1 + 230 x2, x1 + x2 <= 500, x1 >= 200, x2 >= 240
fn small_instance() -> Model {
    let mut model = Model::new("small");
    let x1 = model.continuous("x1").unwrap();
    let x2 = model.continuous("x2").unwrap();
    model.constrain(
        "capacity",
        LinearExpr::term(x1, 1.0) + LinearExpr::term(x2, 1.0),
        RelOp::LessOrEqual,
        500.0,
    );
    model.constrain(
        "x1_floor",
        LinearExpr::term(x1, 1.0),
        RelOp::GreaterOrEqual,
        200.0,
    );
    model.constrain(
        "x2_floor",
        LinearExpr::term(x2, 1.0),
        RelOp::GreaterOrEqual,
        240.0,
    );
    model.set_objective(Objective {
        sense: Sense::Minimize,
        expr: LinearExpr::term(x1, 150.0) + LinearExpr::term(x2, 230.0),
    });
    model
}

#[test]
fn round_trip_on_the_small_instance() {
    let model = small_instance();
    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let result = solver.solve(&model).unwrap();

    assert_eq!(result.status, SolveStatus::Optimal);
    let objective = result.objective_value.unwrap();
    assert!((objective - 85200.0).abs() < 1e-6);
    assert!((result.variable_values["x1"] - 200.0).abs() < 1e-6);
    assert!((result.variable_values["x2"] - 240.0).abs() < 1e-6);
}

#[test]
fn over_constrained_instance_is_infeasible_with_no_solution_data() {
    let mut model = small_instance();
    let x1 = model
        .registry()
        .iter()
        .find(|(_, v)| v.name == "x1")
        .map(|(id, _)| id)
        .unwrap();
    let x2 = model
        .registry()
        .iter()
        .find(|(_, v)| v.name == "x2")
        .map(|(id, _)| id)
        .unwrap();
    model.constrain(
        "tight",
        LinearExpr::term(x1, 1.0) + LinearExpr::term(x2, 1.0),
        RelOp::LessOrEqual,
        100.0,
    );

    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let result = solver.solve(&model).unwrap();

    assert_eq!(result.status, SolveStatus::Infeasible);
    assert!(result.objective_value.is_none());
    assert!(result.variable_values.is_empty());
}

#[test]
fn unbounded_instance_is_reported_as_data() {
    let mut model = Model::new("unbounded");
    let x = model.continuous("x").unwrap();
    model.set_objective(Objective {
        sense: Sense::Maximize,
        expr: LinearExpr::term(x, 1.0),
    });

    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let result = solver.solve(&model).unwrap();

    assert_eq!(result.status, SolveStatus::Unbounded);
    assert!(result.objective_value.is_none());
}

#[test]
fn solving_twice_is_idempotent() {
    let model = small_instance();
    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let first = solver.solve(&model).unwrap();
    let second = solver.solve(&model).unwrap();
    assert_eq!(first, second);
}

#[test]
fn farmer_deterministic_average_yields() {
    let model = farmer::deterministic(1.0).unwrap();
    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let result = solver.solve(&model).unwrap();

    assert_eq!(result.status, SolveStatus::Optimal);
    // Known optimum: 120 acres wheat, 80 corn, 300 beets, profit 118600
    assert!((result.objective_value.unwrap() - 118_600.0).abs() < 1e-3);
    assert!((result.variable_values["acres_beet"] - 300.0).abs() < 1e-6);
}

#[test]
fn farmer_deterministic_good_weather() {
    let model = farmer::deterministic(1.2).unwrap();
    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let result = solver.solve(&model).unwrap();

    assert_eq!(result.status, SolveStatus::Optimal);
    assert!((result.objective_value.unwrap() - 167_666.666_666).abs() < 1e-3);
}

#[test]
fn farmer_two_stage_expected_profit() {
    let model = farmer::two_stage().unwrap();
    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let result = solver.solve(&model).unwrap();

    assert_eq!(result.status, SolveStatus::Optimal);
    // Known optimum of the three-scenario farmer problem
    assert!((result.objective_value.unwrap() - 108_390.0).abs() < 1e-3);
    assert!((result.variable_values["acres_wheat"] - 170.0).abs() < 1e-4);
    assert!((result.variable_values["acres_corn"] - 80.0).abs() < 1e-4);
    assert!((result.variable_values["acres_beet"] - 250.0).abs() < 1e-4);
}

#[test]
fn manufacturer_deterministic_profit() {
    let model = manufacturer::deterministic().unwrap();
    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let result = solver.solve(&model).unwrap();

    assert_eq!(result.status, SolveStatus::Optimal);
    // b is maxed at 200, a fills the remaining batch capacity at 400
    assert!((result.objective_value.unwrap() - 5_800.0).abs() < 1e-3);
    assert!((result.variable_values["units_a_base"] - 400.0).abs() < 1e-4);
    assert!((result.variable_values["units_b_base"] - 200.0).abs() < 1e-4);
}

#[test]
fn manufacturer_expansion_profit() {
    let model = manufacturer::expansion().unwrap();
    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let result = solver.solve(&model).unwrap();

    assert_eq!(result.status, SolveStatus::Optimal);
    // Demand is fully served from existing capacity; only component costs
    // are incurred: 50*500 + 60*200 - 0.4 * (500/6)
    assert!((result.objective_value.unwrap() - 36_966.666_666).abs() < 1e-3);
}

#[test]
fn manufacturer_two_stage_solves_to_optimality() {
    let model = manufacturer::two_stage().unwrap();
    let solver = SolverFactory::create(SolverBackend::Auto).unwrap();
    let result = solver.solve(&model).unwrap();

    assert_eq!(result.status, SolveStatus::Optimal);
    let value = result.objective_value.unwrap();
    assert!(value > 0.0);
    // First-stage batch levels respect the shared limit and floors
    let c1 = result.variable_values["batches_c1"];
    let c2 = result.variable_values["batches_c2"];
    assert!(c1 >= 40.0 - 1e-6 && c2 >= 20.0 - 1e-6);
    assert!(c1 + c2 <= 120.0 + 1e-6);
}
