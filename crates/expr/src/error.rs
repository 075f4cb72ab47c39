// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("operator pattern {pattern:?} consumes {expected} arguments, got {found}")]
	OperatorArityMismatch {
		pattern: String,
		expected: usize,
		found: usize,
	},

	#[error("query template has no select expressions")]
	EmptySelectList,
}
