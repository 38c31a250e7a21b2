// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::settings::AdmissionSettings;
use crate::types::Product;

/// Total amount due for a product, plus the locker when included.
///
/// Amounts are whole won.
#[must_use]
pub const fn quote_total(settings: &AdmissionSettings, product: &Product, include_locker: bool) -> u64 {
    let base = settings.categories.get(product.category).price;
    if include_locker {
        base.saturating_add(settings.locker.price)
    } else {
        base
    }
}
