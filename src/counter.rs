use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::{
    dom::{button, div, Attributes, Fragment},
    reference::Reference,
};

/// The example counter application: a `div` whose text tracks a [`Reference`], and a button that
/// increments it. The display updates through the binding, so the click handler only has to touch
/// the reference.
pub fn app(document: &Document) -> Result<Fragment, JsValue> {
    let count = Reference::new(0usize);

    let count_element = div(
        document,
        Attributes::new().with_bound("textContent", &count),
    )?;

    let increment_button = button(
        document,
        Attributes::new()
            .with_text("textContent", "increment")
            .with_handler("onclick", {
                let count = count.clone();
                move |_event| count.update(|count| count + 1)
            }),
    )?;

    Ok(Fragment::new()
        .with_element(count_element)
        .with_element(increment_button))
}
