#[cfg(target_arch = "wasm32")]
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

// Hooks exposed by the inline loader in index.html as `window.__CARTELA_BOOT`.
#[cfg(target_arch = "wasm32")]
const BOOT_GLOBAL: &str = "__CARTELA_BOOT";

#[cfg(target_arch = "wasm32")]
thread_local! {
    static READY_SENT: Cell<bool> = Cell::new(false);
}

#[cfg(target_arch = "wasm32")]
fn call(method: &str, args: &[JsValue]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(boot) = Reflect::get(&window, &JsValue::from_str(BOOT_GLOBAL)) else {
        return;
    };
    if boot.is_null() || boot.is_undefined() {
        return;
    }
    let Ok(value) = Reflect::get(&boot, &JsValue::from_str(method)) else {
        return;
    };
    let Ok(func) = value.dyn_into::<Function>() else {
        return;
    };
    let array = js_sys::Array::new();
    for arg in args {
        array.push(arg);
    }
    let _ = func.apply(&boot, &array);
}

pub(crate) fn set_phase(label: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        call("setPhase", &[JsValue::from_str(label)]);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = label;
}

pub(crate) fn ready() {
    #[cfg(target_arch = "wasm32")]
    {
        let already_sent = READY_SENT.with(|flag| flag.replace(true));
        if already_sent {
            return;
        }
        call("ready", &[]);
    }
}
