//! Client address extractor.

use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

/// Best-effort caller IP: first `X-Forwarded-For` hop when it parses as an
/// IP address, then the socket peer address, then `"unknown"`.
///
/// The value is always a canonical IP literal (at most 45 characters), so it
/// fits the `audit_user_ip` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

impl<S: Send + Sync> FromRequestParts<S> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|v| v.trim().parse::<IpAddr>().ok());

        if let Some(ip) = forwarded {
            return Ok(ClientIp(ip.to_string()));
        }

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(ClientIp(peer.unwrap_or_else(|| "unknown".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(request: Request<()>) -> String {
        let (mut parts, _) = request.into_parts();
        let ClientIp(ip) = ClientIp::from_request_parts(&mut parts, &()).await.unwrap();
        ip
    }

    #[tokio::test]
    async fn forwarded_header_wins() {
        let request = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await, "203.0.113.7");
    }

    #[tokio::test]
    async fn forwarded_ipv6_is_accepted() {
        let request = Request::builder()
            .header("x-forwarded-for", "2001:db8::1")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await, "2001:db8::1");
    }

    #[tokio::test]
    async fn non_ip_forwarded_value_falls_back_to_peer() {
        let mut request = Request::builder()
            .header("x-forwarded-for", "i-am-not-an-ip")
            .body(())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 1, 2, 3], 40000))));
        assert_eq!(extract(request).await, "10.1.2.3");
    }

    #[tokio::test]
    async fn overlong_forwarded_value_is_ignored() {
        let request = Request::builder()
            .header("x-forwarded-for", "x".repeat(46))
            .body(())
            .unwrap();
        assert_eq!(extract(request).await, "unknown");
    }

    #[tokio::test]
    async fn falls_back_to_peer_address() {
        let mut request = Request::builder().body(()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 168, 1, 20], 51000))));
        assert_eq!(extract(request).await, "192.168.1.20");
    }

    #[tokio::test]
    async fn unknown_without_any_source() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await, "unknown");
    }
}
