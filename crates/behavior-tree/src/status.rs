//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Real-time Semantics
///
/// Nodes are ticked once per simulation frame. Work that spans several frames
/// (walking toward a point, fleeing) reports [`Status::Running`] until it
/// resolves, and the enclosing composites resume at that node next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be carried out.
    Failure,

    /// The behavior has not resolved yet; tick it again next frame.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` once the behavior resolved either way.
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }
}

impl From<bool> for Status {
    /// Maps a predicate result onto `Success`/`Failure`.
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
