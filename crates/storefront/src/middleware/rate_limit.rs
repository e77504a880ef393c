//! Rate limiting middleware using governor and `tower_governor`.
//!
//! Provides configurable rate limiters for different endpoint categories:
//! - `auth_rate_limiter`: Strict limits for authentication endpoints (~10/min)
//! - `api_rate_limiter`: Relaxed limits for cart and other API endpoints (~100/min)

use std::net::IpAddr;
use std::sync::Arc;

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

/// Custom key extractor that checks Cloudflare's `CF-Connecting-IP` header first,
/// then falls back to standard proxy headers.
#[derive(Clone, Copy)]
pub struct CloudflareIpKeyExtractor;

impl tower_governor::key_extractor::KeyExtractor for CloudflareIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        let headers = req.headers();

        // Try CF-Connecting-IP first (Cloudflare's real client IP)
        if let Some(ip) = headers
            .get("cf-connecting-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Try X-Forwarded-For (first IP in the chain)
        if let Some(ip) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.split(',').next())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Try X-Real-IP
        if let Some(ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        // Try Fly-Client-IP (Fly.io's header)
        if let Some(ip) = headers
            .get("fly-client-ip")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<IpAddr>().ok())
        {
            return Ok(ip);
        }

        Err(GovernorError::UnableToExtractKey)
    }
}

/// Rate limiter layer type for Axum.
///
/// Uses `CloudflareIpKeyExtractor` to get the real client IP from Cloudflare
/// and Fly.io proxy headers.
pub type RateLimiterLayer =
    GovernorLayer<CloudflareIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create rate limiter for auth endpoints: ~10 requests per minute per IP.
///
/// Configuration: 1 request every 6 seconds (replenish), burst of 5.
/// This slows down brute force attacks on login/registration endpoints.
#[must_use]
pub fn auth_rate_limiter() -> RateLimiterLayer {
    rate_limiter(6, 5)
}

/// Create rate limiter for cart and account APIs: ~100 requests per minute per IP.
///
/// Configuration: 1 request per second (replenish), burst of 50. Generous
/// enough for HTMX-driven pages that fire several fragment requests at once.
#[must_use]
pub fn api_rate_limiter() -> RateLimiterLayer {
    rate_limiter(1, 50)
}

/// Build a per-IP limiter replenishing one request every `per_second` seconds
/// with the given burst capacity.
///
/// # Panics
///
/// Panics if either argument is zero. Both call sites pass positive
/// constants, which `GovernorConfigBuilder` always accepts.
fn rate_limiter(per_second: u64, burst_size: u32) -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(CloudflareIpKeyExtractor)
        .per_second(per_second)
        .burst_size(burst_size)
        .finish()
        .expect("positive per_second and burst_size form a valid governor config");
    GovernorLayer::new(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use tower_governor::key_extractor::KeyExtractor;

    use super::*;

    fn request_with(headers: &[(&str, &str)]) -> Request<()> {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap_or_default()
    }

    #[test]
    fn test_prefers_cloudflare_header() {
        let req = request_with(&[
            ("cf-connecting-ip", "203.0.113.7"),
            ("x-forwarded-for", "198.51.100.1, 10.0.0.1"),
        ]);
        let key = CloudflareIpKeyExtractor.extract(&req);
        assert_eq!(key.ok(), "203.0.113.7".parse().ok());
    }

    #[test]
    fn test_takes_first_forwarded_ip() {
        let req = request_with(&[("x-forwarded-for", "198.51.100.1, 10.0.0.1")]);
        let key = CloudflareIpKeyExtractor.extract(&req);
        assert_eq!(key.ok(), "198.51.100.1".parse().ok());
    }

    #[test]
    fn test_no_headers_is_an_error() {
        let req = request_with(&[]);
        assert!(CloudflareIpKeyExtractor.extract(&req).is_err());
    }
}
