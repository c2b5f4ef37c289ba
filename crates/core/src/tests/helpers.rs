// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainState;
use crate::seed::demo_state;
use marketdesk_audit::Actor;
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("int-usr1"), String::from("Alice Johnson"))
}

/// Returns the fixed anchor date every test builds its demo state on.
pub const fn anchor_date() -> Date {
    date!(2024 - 07 - 15)
}

/// Returns a transition timestamp on the anchor date.
pub const fn anchor_time() -> OffsetDateTime {
    datetime!(2024-07-15 12:00 UTC)
}

pub fn demo() -> DomainState {
    demo_state(anchor_date())
}
