// Model: variable registry, constraints, objective, and solve results

use std::collections::{BTreeMap, HashMap};

use super::expr::{LinearExpr, VarId};
use super::value_objects::{RelOp, Sense, SolveStatus, VarDomain};

/// Errors raised while building a model or scenario set
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("variable '{0}' is already declared in this model")]
    DuplicateName(String),

    #[error("variable '{name}': lower bound {lower} exceeds upper bound {upper}")]
    InvalidBounds {
        name: String,
        lower: f64,
        upper: f64,
    },

    #[error("invalid scenario probabilities: {0}")]
    Probability(String),
}

/// Decision variable definition, immutable once declared
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub domain: VarDomain,
    pub lower: f64,
    pub upper: Option<f64>,
}

/// Creates and tracks the decision variables of one model
///
/// Variables are owned exclusively by the registry; expressions and
/// constraints refer to them by [`VarId`] only.
#[derive(Debug, Default)]
pub struct VariableRegistry {
    variables: Vec<Variable>,
    by_name: HashMap<String, VarId>,
}

impl VariableRegistry {
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        domain: VarDomain,
        lower: f64,
        upper: Option<f64>,
    ) -> Result<VarId, ModelError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(ModelError::DuplicateName(name));
        }
        if let Some(upper) = upper {
            if lower > upper {
                return Err(ModelError::InvalidBounds { name, lower, upper });
            }
        }
        let id = VarId(self.variables.len());
        self.by_name.insert(name.clone(), id);
        self.variables.push(Variable {
            name,
            domain,
            lower,
            upper,
        });
        Ok(id)
    }

    pub fn get(&self, id: VarId) -> &Variable {
        &self.variables[id.index()]
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, &Variable)> {
        self.variables.iter().enumerate().map(|(i, v)| (VarId(i), v))
    }
}

/// Linear constraint: expression, relational sense, right-hand side
///
/// Immutable once added to a model.
#[derive(Debug, Clone)]
pub struct Constraint {
    pub name: String,
    pub expr: LinearExpr,
    pub op: RelOp,
    pub rhs: f64,
}

/// The single objective of a model
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub sense: Sense,
    pub expr: LinearExpr,
}

/// A complete optimization problem
///
/// Owns its variable registry, constraint set, and objective. Built by a
/// single owner, then handed to a solver; solving never mutates the model.
#[derive(Debug, Default)]
pub struct Model {
    pub name: String,
    registry: VariableRegistry,
    constraints: Vec<Constraint>,
    objective: Option<Objective>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declare a continuous variable with default bounds [0, ∞)
    pub fn continuous(&mut self, name: impl Into<String>) -> Result<VarId, ModelError> {
        self.registry.declare(name, VarDomain::Continuous, 0.0, None)
    }

    /// Declare an integer variable with default bounds [0, ∞)
    pub fn integer(&mut self, name: impl Into<String>) -> Result<VarId, ModelError> {
        self.registry.declare(name, VarDomain::Integer, 0.0, None)
    }

    /// Declare a variable with explicit domain and bounds
    pub fn declare(
        &mut self,
        name: impl Into<String>,
        domain: VarDomain,
        lower: f64,
        upper: Option<f64>,
    ) -> Result<VarId, ModelError> {
        self.registry.declare(name, domain, lower, upper)
    }

    /// Add a constraint; it takes effect for every subsequent solve
    pub fn constrain(&mut self, name: impl Into<String>, expr: LinearExpr, op: RelOp, rhs: f64) {
        self.constraints.push(Constraint {
            name: name.into(),
            expr,
            op,
            rhs,
        });
    }

    /// Set the objective, discarding any previous one
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = Some(objective);
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    pub fn num_variables(&self) -> usize {
        self.registry.len()
    }

    pub fn has_integer_variables(&self) -> bool {
        self.registry
            .iter()
            .any(|(_, v)| v.domain == VarDomain::Integer)
    }
}

/// Outcome of one solve: a terminal status plus, on optimality, the
/// objective value and every variable's resolved value keyed by name
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub status: SolveStatus,
    pub objective_value: Option<f64>,
    pub variable_values: BTreeMap<String, f64>,
    pub message: String,
}

impl SolveResult {
    pub fn optimal(objective_value: f64, variable_values: BTreeMap<String, f64>) -> Self {
        Self {
            status: SolveStatus::Optimal,
            objective_value: Some(objective_value),
            variable_values,
            message: "Optimal solution found".to_string(),
        }
    }

    /// Result for any non-optimal terminal status; carries no solution data
    pub fn terminal(status: SolveStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            objective_value: None,
            variable_values: BTreeMap::new(),
            message: message.into(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}
