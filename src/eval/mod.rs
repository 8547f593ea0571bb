/// Numeric engine: domain-classified table lookups feeding a cluster of
/// mutually recursive special-function approximations.
///
/// Call flow:
/// ```text
///   fun ─► grs ─► rrz ─► qrz ─► srs ─► srz ─► t / u ─► interpolate
/// ```
/// Failures travel back up the same path; `rrz` recovers from domain
/// errors, `fun` recovers from missing table files, nothing else does.
pub mod compose;
pub mod lookup;
pub mod special;
