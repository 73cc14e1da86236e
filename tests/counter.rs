#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element as WsElement, HtmlElement};

use refwire::{counter, div, Attributes, Location, Reference};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .expect("no global `window` exists")
        .document()
        .expect("should have a document on window")
}

#[wasm_bindgen_test]
fn assigns_attributes_as_properties() {
    let document = document();

    let element = div(
        &document,
        Attributes::new()
            .with_text("textContent", "hello")
            .with_number("tabIndex", 3.0)
            .with_bool("hidden", true),
    )
    .expect("to create element");

    assert_eq!(element.node().text_content().as_deref(), Some("hello"));
    assert_eq!(
        Reflect::get(element.node(), &"tabIndex".into())
            .expect("to read property")
            .as_f64(),
        Some(3.0)
    );
    assert_eq!(
        Reflect::get(element.node(), &"hidden".into())
            .expect("to read property")
            .as_bool(),
        Some(true)
    );

    // Values land on object properties, not HTML attributes.
    let raw = element
        .node()
        .dyn_ref::<WsElement>()
        .expect("node to be an element");
    assert!(!raw.has_attribute("textContent"));
}

#[wasm_bindgen_test]
fn bound_property_tracks_reference() {
    let document = document();

    let count = Reference::new(3usize);
    let element = div(&document, Attributes::new().with_bound("textContent", &count))
        .expect("to create element");

    assert_eq!(element.node().text_content().as_deref(), Some("3"));

    count.set(4);
    assert_eq!(element.node().text_content().as_deref(), Some("4"));
}

#[wasm_bindgen_test]
fn detach_cancels_bindings() {
    let document = document();
    let body = document.body().expect("body to exist");

    let count = Reference::new(3usize);
    let mut element = div(&document, Attributes::new().with_bound("textContent", &count))
        .expect("to create element");

    element.mount(&Location::parent(&body));
    element.detach();

    count.set(9);
    assert_eq!(element.node().text_content().as_deref(), Some("3"));
}

#[wasm_bindgen_test]
fn counter_increments_on_click() {
    let document = document();
    let body = document.body().expect("body to exist");

    let mut app = counter::app(&document).expect("to build app");
    app.mount(&Location::parent(&body));

    let elements = app.elements();
    assert_eq!(elements[0].node().text_content().as_deref(), Some("0"));

    let increment_button = elements[1]
        .node()
        .clone()
        .dyn_into::<HtmlElement>()
        .expect("button to be an html element");
    assert_eq!(increment_button.text_content().as_deref(), Some("increment"));

    increment_button.click();
    assert_eq!(elements[0].node().text_content().as_deref(), Some("1"));

    increment_button.click();
    assert_eq!(elements[0].node().text_content().as_deref(), Some("2"));

    app.detach();
}
