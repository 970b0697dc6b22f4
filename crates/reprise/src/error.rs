use thiserror::Error;

/// A malformed or nondeterministic suite definition.
///
/// Each variant is fatal to the execution scope in which it is detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CaseError {
    /// A case was registered without a name.
    #[error("case name must not be empty")]
    EmptyName,

    /// The same name was registered twice at one nesting level.
    #[error("duplicate test case {name:?}")]
    Duplicate {
        /// The offending case name.
        name: String,
    },

    /// More cases were registered at a nesting level than its first run recorded.
    #[error("unexpected extra case {name:?}; expected only {expected} case(s)")]
    UnexpectedExtra {
        /// The offending case name.
        name: String,
        /// The number of cases recorded by the first run.
        expected: usize,
    },

    /// A case registered at some index differs from the one first recorded there.
    #[error("case name at index {index} changed; first {recorded:?} then {name:?}")]
    Renamed {
        /// Position of the case among its siblings.
        index: usize,
        /// The name recorded by the first run.
        recorded: String,
        /// The name registered now.
        name: String,
    },

    /// The body of a case registered fewer nested cases than previously recorded.
    #[error("missing test case callbacks in {name:?}; expected {expected} but got {actual}")]
    MissingCallbacks {
        /// The case whose body fell short.
        name: String,
        /// The number of nested cases recorded by the first run.
        expected: usize,
        /// The number of nested cases registered now.
        actual: usize,
    },

    /// A case was registered for a scope that is not running a suite.
    #[error("attempted to register case {name:?} for terminated test {scope:?}")]
    TerminatedContext {
        /// The offending case name.
        name: String,
        /// The name of the scope used for the registration.
        scope: String,
    },
}
