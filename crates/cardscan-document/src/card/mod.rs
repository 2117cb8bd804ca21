// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Card module — labelled text fields and record assembly.

pub mod extractor;
pub mod fields;

pub use extractor::{CardExtractor, CardRecord};
pub use fields::FieldParser;
