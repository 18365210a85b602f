use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle, WindowListenerHandle};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use std::time::Duration;

pub(crate) type TimerSlot = StoredValue<Option<TimeoutHandle>>;
pub(crate) type ListenerSlot = StoredValue<Vec<WindowListenerHandle>, LocalStorage>;

pub(crate) fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Clears whatever timer `slot` holds and schedules `cb` in its place.
pub(crate) fn restart_timer(slot: TimerSlot, delay: Duration, cb: impl FnOnce() + 'static) {
    cancel_timer(slot);
    match set_timeout_with_handle(cb, delay) {
        Ok(handle) => slot.set_value(Some(handle)),
        Err(e) => log::warn!("failed to schedule timer {e:?}"),
    }
}

pub(crate) fn cancel_timer(slot: TimerSlot) {
    if let Some(handle) = slot.try_update_value(Option::take).flatten() {
        handle.clear();
    }
}

pub(crate) fn release_listeners(slot: ListenerSlot) {
    for handle in slot.try_update_value(std::mem::take).unwrap_or_default() {
        handle.remove();
    }
}
