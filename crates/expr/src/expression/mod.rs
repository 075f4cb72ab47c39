// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::{Error, operation::Operation};

mod constant;

pub use constant::ConstantExpression;

/// One node of a generated query's expression tree. `Constant` and `Column`
/// are terminal values; `Call` applies an operation to argument
/// sub-expressions. Trees are built bottom-up by the generator and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
	Constant(ConstantExpression),

	Column(ColumnExpression),

	Call(CallExpression),
}

impl Expression {
	pub fn is_leaf(&self) -> bool {
		!matches!(self, Expression::Call(_))
	}

	/// Tests whether this node satisfies the predicate. With
	/// `check_recursively`, every node of every argument subtree is
	/// tested as well, returning on the first hit.
	pub fn matches<P>(&self, predicate: &P, check_recursively: bool) -> bool
	where
		P: Fn(&Expression) -> bool,
	{
		if predicate(self) {
			return true;
		}

		if check_recursively {
			if let Expression::Call(call) = self {
				return call.args.iter().any(|arg| arg.matches(predicate, true));
			}
		}

		false
	}

	pub fn render_sql(&self) -> crate::Result<String> {
		match self {
			Expression::Constant(constant) => Ok(constant.to_string()),
			Expression::Column(ColumnExpression(name)) => Ok(name.clone()),
			Expression::Call(call) => call.render_sql(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnExpression(pub String);

impl Display for ColumnExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
	pub operation: Operation,
	pub args: Vec<Expression>,
}

impl CallExpression {
	pub fn render_sql(&self) -> crate::Result<String> {
		match &self.operation {
			Operation::Function(function) => {
				let args = self
					.args
					.iter()
					.map(|arg| arg.render_sql())
					.collect::<crate::Result<Vec<_>>>()?
					.join(", ");
				Ok(format!("{}({})", function.name(), args))
			}
			Operation::Operator(operator) => {
				if operator.arity() != self.args.len() {
					return Err(Error::OperatorArityMismatch {
						pattern: operator.pattern().to_string(),
						expected: operator.arity(),
						found: self.args.len(),
					});
				}

				// interleave pattern pieces with rendered arguments
				let mut pieces = operator.pattern().split('$');
				let mut rendered = pieces.next().unwrap_or("").to_string();
				for arg in &self.args {
					rendered.push_str(&arg.render_sql()?);
					rendered.push_str(pieces.next().unwrap_or(""));
				}
				Ok(format!("({rendered})"))
			}
		}
	}
}
