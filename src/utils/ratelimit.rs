use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use lazy_static::lazy_static;
use serenity::model::id::UserId;
use tokio::sync::Mutex;

lazy_static! {
    static ref COMMAND_COOLDOWNS: Mutex<CooldownTracker> = Mutex::new(CooldownTracker::new(COOLDOWN_SECONDS));

    // Global rate limiting: request timestamps (ms) inside the sliding window
    static ref GLOBAL_REQUESTS: Mutex<Vec<u64>> = Mutex::new(Vec::new());
}

const COOLDOWN_SECONDS: u64 = 5;
const GLOBAL_RATE_LIMIT: usize = 50;  // requests per second
const RATE_WINDOW_MS: u64 = 1000;

/// Per-user, per-command cooldowns
pub struct CooldownTracker {
    cooldown_secs: u64,
    last_used: HashMap<(UserId, String), u64>,
    // When we last warned about a cooldown, to avoid message spam
    last_warned: HashMap<(UserId, String), u64>,
}

impl CooldownTracker {
    pub fn new(cooldown_secs: u64) -> Self {
        Self {
            cooldown_secs,
            last_used: HashMap::new(),
            last_warned: HashMap::new(),
        }
    }

    /// `Ok(())` records the use; `Err((remaining_secs, should_warn))` while cooling down.
    /// `should_warn` is true only for the first rejected attempt per cooldown period.
    pub fn check(&mut self, user_id: UserId, command: &str, now: u64) -> Result<(), (u64, bool)> {
        let key = (user_id, command.to_string());
        let cooldown = self.cooldown_secs;

        // Expired entries carry no state
        self.last_used.retain(|_, &mut used| now.saturating_sub(used) < cooldown);
        self.last_warned.retain(|_, &mut warned| now.saturating_sub(warned) < cooldown);

        if let Some(&last_time) = self.last_used.get(&key) {
            let elapsed = now.saturating_sub(last_time);
            if elapsed < self.cooldown_secs {
                let should_warn = self
                    .last_warned
                    .get(&key)
                    .map_or(true, |&warned| warned < last_time);
                if should_warn {
                    self.last_warned.insert(key, now);
                }
                return Err((self.cooldown_secs - elapsed, should_warn));
            }
        }

        self.last_used.insert(key, now);
        Ok(())
    }
}

/// Check the shared cooldown table for `command`
pub async fn check_cooldown(user_id: UserId, command: &str) -> Result<(), (u64, bool)> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    COMMAND_COOLDOWNS.lock().await.check(user_id, command, now)
}

/// Check global rate limit (50 requests per second across all users)
/// Returns Ok(()) if under limit, Err(remaining_ms) if rate limit exceeded
pub async fn check_global_rate_limit() -> Result<(), u64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    let mut requests = GLOBAL_REQUESTS.lock().await;
    record_in_window(&mut requests, now, GLOBAL_RATE_LIMIT)
}

fn record_in_window(requests: &mut Vec<u64>, now: u64, limit: usize) -> Result<(), u64> {
    let window_start = now.saturating_sub(RATE_WINDOW_MS);
    requests.retain(|&timestamp| timestamp > window_start);

    if requests.len() >= limit {
        let oldest_leaves_at = requests[0] + RATE_WINDOW_MS;
        Err(oldest_leaves_at.saturating_sub(now))
    } else {
        requests.push(now);
        Ok(())
    }
}

pub fn get_cooldown_seconds() -> u64 {
    COOLDOWN_SECONDS
}
