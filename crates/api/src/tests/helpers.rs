// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::Backoffice;

/// Returns a back office loaded with the demo dataset.
pub fn demo_backoffice() -> Backoffice {
    Backoffice::with_demo_data()
}
