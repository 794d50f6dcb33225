/// Outcome of a single compile or leak check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    /// Returns 0 on success and 1 on failure, so that codes sum to a failure count.
    pub fn code(self) -> usize {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<bool> for Status {
    fn from(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }
}
