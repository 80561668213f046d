// Handlers are split by access tier:
// public (no token) and protected (token middleware in front).
pub mod protected;
pub mod public;

use crate::validation::coerce::parse_int_prefix;

/// Path ids read their leading integer: "2abc" is talker 2, "abc" matches nothing
pub(crate) fn parse_talker_id(raw: &str) -> Option<i64> {
    parse_int_prefix(raw)
}
