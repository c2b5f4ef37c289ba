// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier synthesis for records created through the façade.
//!
//! Ids follow the `<prefix><millis>-<suffix>` shape: the creation
//! timestamp in Unix milliseconds plus a short random tail so that two
//! records created within the same millisecond stay distinct.

use num_traits::cast::ToPrimitive;
use time::OffsetDateTime;

pub(crate) fn synthesize_id(prefix: &str, now: OffsetDateTime) -> String {
    let raw_millis: i128 = now.unix_timestamp_nanos() / 1_000_000;
    let millis: u64 = raw_millis.to_u64().unwrap_or_else(|| {
        tracing::warn!("Clock reading {} unusable for id synthesis", raw_millis);
        0
    });
    let suffix: u16 = rand::random::<u16>();
    format!("{prefix}{millis}-{suffix:04x}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_id_carries_prefix_and_millisecond_timestamp() {
        let id: String = synthesize_id("coup-", datetime!(2026-01-01 00:00 UTC));
        assert!(id.starts_with("coup-1767225600000-"));
    }

    #[test]
    fn test_id_ends_with_four_hex_digits() {
        let id: String = synthesize_id("ipr", datetime!(2026-01-01 00:00 UTC));
        let suffix: &str = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
