// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while assembling a [`Ripple`](crate::Ripple).

use core::fmt;

/// Error returned by [`RippleBuilder::build`](crate::RippleBuilder::build) when a
/// required collaborator was never supplied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RippleError {
    /// No [`HostElement`](crate::HostElement) was provided.
    MissingHost,
    /// No [`Animator`](crate::Animator) was provided.
    MissingAnimator,
    /// No [`Scheduler`](crate::Scheduler) was provided.
    MissingScheduler,
}

impl fmt::Display for RippleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Self::MissingHost => "host element",
            Self::MissingAnimator => "animator",
            Self::MissingScheduler => "scheduler",
        };
        write!(f, "ripple cannot be initialized without a {what}")
    }
}

impl core::error::Error for RippleError {}
