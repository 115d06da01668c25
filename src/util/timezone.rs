//! Client timezone lookup for the `x-timezone` request header.

/// IANA timezone of the browser, `None` outside one.
#[must_use]
pub fn client_timezone() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let options =
            js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
                .resolved_options();
        js_sys::Reflect::get(&options, &wasm_bindgen::JsValue::from_str("timeZone"))
            .ok()
            .and_then(|value| value.as_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
