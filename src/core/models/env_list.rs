use std::collections::HashMap;

/// Mapping from variable name to value.
///
/// Used both for raw environment snapshots and for the decoded
/// `{prefix}VARIABLES` payload.
pub type EnvList = HashMap<String, String>;
