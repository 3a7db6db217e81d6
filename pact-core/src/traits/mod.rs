//! Boundary contracts with excluded collaborators.
//!
//! The engine consumes and produces plain data; these traits are the
//! only seams through which anything else reaches it. Persistence stays
//! entirely outside: callers hand in consistent snapshots and persist
//! the derived values the engine returns.

mod clock;
mod feed_sink;
mod trust_source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use feed_sink::{FeedSink, MemoryFeedSink, NullFeedSink};
pub use trust_source::{StaticTrust, TrustSource};
