mod bindable;
mod dom;
mod reference;

pub mod counter;

pub use bindable::Bindable;
pub use dom::{button, div, h1, p, span, AttrValue, Attributes, Element, Fragment, Location};
pub use reference::{Reference, Subscription};

use wasm_bindgen::prelude::*;
use web_sys::window;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Configure the panic hook to log to console.error
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let window = window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");
    let body = document.body().expect("body to exist");

    let app = counter::app(&document)?;
    app.mount(&Location::parent(&body));

    // The app's handlers and bindings live for the page lifetime.
    std::mem::forget(app);

    Ok(())
}
