//! Имитация задержки сети для показа состояний загрузки

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Runs `f` once after `ms`. The timer belongs to the current reactive owner
/// and is cancelled when that owner is disposed (component unmount).
pub fn scoped_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let timeout = StoredValue::new_local(Some(Timeout::new(ms, f)));
    on_cleanup(move || {
        // drop of a pending Timeout clears it
        let _ = timeout.try_update_value(Option::take);
    });
}

pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}
