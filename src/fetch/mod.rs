use std::{num::NonZeroU32, sync::OnceLock, time::Duration};

use chrono::{Local, NaiveDate};
use governor::{
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::InMemoryState,
};
use reqwest::Client;
use tracing::{instrument, Level};
use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_PORTAL_URL: &str = "https://opera4u.operaunitn.cloud/";

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Which price list a menu page shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Price {
    Standard,
    Reduced,
}

impl Price {
    const fn code(self) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Reduced => 2,
        }
    }
}

pub fn make_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .gzip(true)
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(From::from)
}

static RATE_LIMIT: u32 = 5;
static DELAY_JITTER: u64 = 1;
static RATE_LIMITER: OnceLock<
    governor::RateLimiter<
        governor::state::NotKeyed,
        InMemoryState,
        QuantaClock,
        NoOpMiddleware<QuantaInstant>,
    >,
> = OnceLock::new();

async fn wait_turn() {
    let rate_limiter = RATE_LIMITER.get_or_init(|| {
        governor::RateLimiter::direct(governor::Quota::per_second(
            NonZeroU32::new(RATE_LIMIT).unwrap_or(NonZeroU32::MIN),
        ))
    });
    let jitter = governor::Jitter::new(Duration::ZERO, Duration::from_millis(DELAY_JITTER * 100));
    rate_limiter.until_ready_with_jitter(jitter).await;
}

/// The canteen portal. Requests go out one at a time over a single client, so
/// a client carrying a logged-in session can be handed in and reused.
#[derive(Debug, Clone)]
pub struct Portal {
    client: Client,
    base: Url,
}

impl Portal {
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        Ok(Self::with_client(make_client(timeout)?, base))
    }

    /// `base` is treated as a directory: a missing trailing `/` is added so
    /// joined paths land below it.
    pub fn with_client(client: Client, mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { client, base }
    }

    pub fn menu_url(&self, date: NaiveDate, price: Price) -> Result<Url> {
        let path = format!("menu/{}/0/{}/2", local_midnight(date)?, price.code());
        self.join(&path)
    }

    pub fn reservations_url(&self, canteen: u32) -> Result<Url> {
        self.join(&format!("prenota_tavolo/0/{canteen}"))
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::config_error(&format!("bad portal url {}: {e}", self.base)))
    }

    #[instrument(skip(self, date), fields(date = %date.format("%d/%m/%Y")), level = Level::TRACE)]
    pub async fn menu_page(&self, date: NaiveDate, price: Price) -> Result<String> {
        let url = self.menu_url(date, price)?;
        self.get(url).await
    }

    #[instrument(skip(self), level = Level::TRACE)]
    pub async fn reservations_page(&self, canteen: u32) -> Result<String> {
        let url = self.reservations_url(canteen)?;
        self.get(url).await
    }

    async fn get(&self, url: Url) -> Result<String> {
        wait_turn().await;
        let start = std::time::Instant::now();
        let res = self.client.get(url.clone()).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }
        let text = res.text().await?;
        log::trace!("Got {url} in \t {:?}", start.elapsed());
        Ok(text)
    }
}

/// Unix timestamp of local midnight at the start of `date`.
fn local_midnight(date: NaiveDate) -> Result<i64> {
    date.and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
        .map(|t| t.timestamp())
        .ok_or_else(|| Error::config_error(&format!("{date} has no local midnight")))
}

pub fn week_iter(start: NaiveDate, count: u32) -> impl Iterator<Item = NaiveDate> {
    (0..i64::from(count)).map(move |x| start + chrono::Duration::weeks(x))
}
