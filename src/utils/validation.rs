use validator::Validate;

/// Runs derive-based validation and turns a failure into a local
/// precondition error, before any backend request is made.
pub fn validate<T: Validate>(val: &T) -> crate::error::Result<()> {
    val.validate().map_err(crate::error::Error::from)
}
