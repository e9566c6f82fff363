// microlp solver adapter
//
// Pure-Rust backend, always compiled in. Translates the domain model into
// good_lp's representation and maps the resolution outcome back into the
// closed SolveResult status set.

use std::collections::BTreeMap;

use good_lp::{
    solvers::microlp, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolution, SolverModel, Variable as GoodLpVariable,
};

use crate::domain::{
    Model, RelOp, Sense, SolveResult, SolveStatus, SolverError, SolverService, VarDomain,
};

pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for MicrolpSolver {
    fn solve(&self, model: &Model) -> crate::domain::solver_service::Result<SolveResult> {
        self.validate(model)?;
        let objective = model
            .objective()
            .ok_or_else(|| SolverError::InvalidModel("missing objective".to_string()))?;

        // Declare variables
        let mut vars = variables!();
        let mut handles: Vec<GoodLpVariable> = Vec::with_capacity(model.num_variables());
        for (_, def) in model.registry().iter() {
            let mut definition = variable().min(def.lower).name(def.name.clone());
            if let Some(upper) = def.upper {
                definition = definition.max(upper);
            }
            if def.domain == VarDomain::Integer {
                definition = definition.integer();
            }
            handles.push(vars.add(definition));
        }

        // Objective; the constant term is reapplied when reading the value back
        let mut obj_expr: Expression = 0.into();
        for (var, coeff) in objective.expr.terms() {
            obj_expr += coeff * handles[var.index()];
        }
        let mut lp = match objective.sense {
            Sense::Minimize => vars.minimise(obj_expr),
            Sense::Maximize => vars.maximise(obj_expr),
        }
        .using(microlp::microlp);

        // Constraints, with expression constants folded into the rhs
        for constraint in model.constraints() {
            let mut lhs: Expression = 0.into();
            for (var, coeff) in constraint.expr.terms() {
                lhs += coeff * handles[var.index()];
            }
            let rhs = constraint.rhs - constraint.expr.constant_term();
            lp = match constraint.op {
                RelOp::LessOrEqual => lp.with(lhs.leq(rhs)),
                RelOp::Equal => lp.with(lhs.eq(rhs)),
                RelOp::GreaterOrEqual => lp.with(lhs.geq(rhs)),
            };
        }

        // Terminal solve, invoked exactly once
        match lp.solve() {
            Ok(solution) => {
                let mut by_id = vec![0.0; model.num_variables()];
                let mut values = BTreeMap::new();
                for (id, def) in model.registry().iter() {
                    let value = solution.value(handles[id.index()]);
                    by_id[id.index()] = value;
                    values.insert(def.name.clone(), value);
                }
                let objective_value = objective.expr.eval(|v| by_id[v.index()]);
                Ok(SolveResult::optimal(objective_value, values))
            }
            Err(ResolutionError::Infeasible) => Ok(SolveResult::terminal(
                SolveStatus::Infeasible,
                "no solution satisfies all constraints",
            )),
            Err(ResolutionError::Unbounded) => Ok(SolveResult::terminal(
                SolveStatus::Unbounded,
                "the objective can improve indefinitely",
            )),
            Err(other) => Ok(SolveResult::terminal(
                SolveStatus::Abnormal,
                format!("{other}"),
            )),
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }

    fn supports_mip(&self) -> bool {
        false
    }
}
