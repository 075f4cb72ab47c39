// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// The callable identity attached to a call expression: a function invoked
/// by name or an operator applied through its symbolic pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
	Function(DbFunction),

	Operator(DbOperator),
}

/// A database function, identified by its lower-case name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbFunction {
	name: String,
}

impl DbFunction {
	/// The name is lower-cased on construction; matchers compare against
	/// the stored form.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into().to_lowercase(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl Display for DbFunction {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

/// A database operator, identified by its symbolic pattern. Each `$`
/// placeholder consumes one argument, e.g. `$ + $` or `NOT $`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbOperator {
	pattern: String,
}

impl DbOperator {
	pub fn new(pattern: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
		}
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Number of arguments the pattern consumes.
	pub fn arity(&self) -> usize {
		self.pattern.matches('$').count()
	}
}

impl Display for DbOperator {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.pattern)
	}
}
