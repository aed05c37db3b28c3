//! Phone mask applied on every `input` event.

use web_sys::HtmlInputElement;
use widgets::phone::format_phone;

use super::dom;
use crate::error::BindError;

pub fn attach(input: HtmlInputElement) -> Result<(), BindError> {
    let field = input.clone();
    dom::listen(&input, "input", move |_| {
        if let Some(formatted) = format_phone(&field.value()) {
            field.set_value(&formatted);
        }
    })
}
