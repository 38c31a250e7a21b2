// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! Every function returns domain values; raw rows never leave this module.

pub mod audit;
pub mod company;
pub mod product;
pub mod purchase;
pub mod whitelist;
