//! Fixed defaults for hull verification and animation (internal).
//!
//! Policy
//! - The algorithm itself is tolerance-free: it compares slopes and squared
//!   distances exactly. Only the verification predicates in `util` need slack.

use std::time::Duration;

/// Slack for containment/convexity/minimality checks, relative to the
/// magnitude of the cross products involved.
pub(crate) const CHECK_EPS: f64 = 1e-9;

/// Pause after each drawing call when a `ViewCtx` animates.
pub(crate) const PAUSE: Duration = Duration::from_millis(250);

/// Halves at or below this size are solved on the calling thread.
#[cfg(feature = "parallel")]
pub(crate) const PAR_MIN_LEN: usize = 4096;
