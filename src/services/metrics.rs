use lazy_static::lazy_static;
use prometheus::{register_counter_vec, register_gauge, CounterVec, Gauge};

lazy_static! {
    pub static ref LOGINS_COUNTER: CounterVec = register_counter_vec!(
        "api_wechat_logins_total",
        "WeChat login attempts by outcome",
        &["status"]
    ).unwrap();

    pub static ref ANNOUNCEMENT_CHANGES_COUNTER: CounterVec = register_counter_vec!(
        "api_announcement_changes_total",
        "Administrative announcement mutations by operation",
        &["op"]
    ).unwrap();

    pub static ref ANNOUNCEMENTS_GAUGE: Gauge = register_gauge!(
        "api_announcements_stored",
        "Announcements currently held in memory"
    ).unwrap();
}

pub fn record_login(status: &str) {
    LOGINS_COUNTER.with_label_values(&[status]).inc();
}

pub fn record_announcement_change(op: &str, stored: usize) {
    ANNOUNCEMENT_CHANGES_COUNTER.with_label_values(&[op]).inc();
    ANNOUNCEMENTS_GAUGE.set(stored as f64);
}
