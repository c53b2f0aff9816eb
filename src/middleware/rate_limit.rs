// src/middleware/rate_limit.rs
// DOCUMENTATION: Per-client request limiting
// PURPOSE: Bound requests per IP over a fixed window before they reach a handler

use crate::errors::GatewayError;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{web, Error, ResponseError};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Requests counted for one client since `started`
#[derive(Clone, Copy, Debug)]
struct Window {
    started: Instant,
    count: u32,
}

impl Window {
    fn new(started: Instant) -> Self {
        Self { started, count: 0 }
    }

    fn is_expired(&self, now: Instant, length: Duration) -> bool {
        now.duration_since(self.started) >= length
    }
}

/// Fixed-window counter per client IP, shared by all workers
/// DOCUMENTATION: A client's window opens on its first request and admits at
/// most `max_requests` until `window` has elapsed, then starts over.
pub struct ClientRateLimiter {
    clients: Mutex<HashMap<IpAddr, Window>>,
    max_requests: u32,
    window: Duration,
}

impl ClientRateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
            max_requests: max_requests.max(1),
            window,
        }
    }

    /// Count one request for `client`; false when over the limit
    pub async fn check(&self, client: IpAddr) -> bool {
        self.check_at(client, Instant::now()).await
    }

    async fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut clients = self.clients.lock().await;
        let window = clients.entry(client).or_insert_with(|| Window::new(now));

        if window.is_expired(now, self.window) {
            *window = Window::new(now);
        }

        if window.count >= self.max_requests {
            return false;
        }
        window.count += 1;
        true
    }

    /// Drop clients whose window has elapsed
    pub async fn cleanup(&self) {
        self.cleanup_at(Instant::now()).await;
    }

    async fn cleanup_at(&self, now: Instant) {
        let mut clients = self.clients.lock().await;
        let before = clients.len();
        clients.retain(|_, window| !window.is_expired(now, self.window));
        let after = clients.len();

        if before > after {
            log::debug!(
                "Rate limiter cleanup: removed {} idle clients ({} remaining)",
                before - after,
                after
            );
        }
    }
}

/// Start background cleanup task
/// DOCUMENTATION: Periodically prunes idle client windows
pub fn start_cleanup_task(limiter: Arc<ClientRateLimiter>, interval_seconds: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));

        loop {
            interval.tick().await;
            limiter.cleanup().await;
        }
    });
}

/// Socket peer address; forwarding headers are client-controlled and ignored
fn client_ip(req: &ServiceRequest) -> IpAddr {
    req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Rate limit middleware, registered on the /api scope
pub async fn rate_limit<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    if let Some(limiter) = req.app_data::<web::Data<ClientRateLimiter>>() {
        let client = client_ip(&req);
        if !limiter.check(client).await {
            log::warn!("Rate limit exceeded for {}", client);
            let response = GatewayError::RateLimitExceeded.error_response();
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}
