//! Rate limiting for contact submissions using token bucket algorithm.

use axum::Router;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Seconds after which one submission of the quota is replenished.
const REPLENISH_SECONDS: u64 = 10;
/// Submissions a single client may send back to back.
const BURST_SIZE: u32 = 5;

/// Applies the per-client submission limit to `router`.
///
/// # Limits
///
/// - **Burst**: 5 submissions
/// - **Rate**: one more submission every 10 seconds
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// - `behind_proxy = false` - client IP from the socket peer address
/// - `behind_proxy = true` - client IP from `X-Forwarded-For` / `X-Real-IP` /
///   `Forwarded`, falling back to the peer address
pub fn limit(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        let config = GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(REPLENISH_SECONDS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("non-zero rate limit quota");

        router.layer(GovernorLayer::new(Arc::new(config)))
    } else {
        let config = GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(REPLENISH_SECONDS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("non-zero rate limit quota");

        router.layer(GovernorLayer::new(Arc::new(config)))
    }
}
