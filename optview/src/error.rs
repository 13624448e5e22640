pub type Result<T> = std::result::Result<T, Error>;

/// Terminal parse failures. The first error halts classification of the
/// current token; callers are expected to stop stepping once one is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("option did not receive its required value")]
    NoValue,

    #[error("no value required for option")]
    NotRequired,

    #[error("specified option does not exist")]
    NotOption,

    #[error("option(s) are not within the defined limits")]
    OptionRange,

    #[error("operand(s) are not within the defined limits")]
    OperandRange,
}
