//! Form Enhancements
//!
//! Inline validation feedback, required-field progress and submit loading state.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ValidityState};

use crate::context::UiContext;
use crate::dom;
use crate::models::ValidityFlags;
use crate::validation::{progress_percent, required_progress, validation_message, RequiredField};

const FIELD_SELECTOR: &str = "input, select, textarea";
const ERROR_CLASS: &str = "field-error";

fn flags(validity: ValidityState) -> ValidityFlags {
    ValidityFlags {
        valid: validity.valid(),
        value_missing: validity.value_missing(),
        type_mismatch: validity.type_mismatch(),
        pattern_mismatch: validity.pattern_mismatch(),
        too_short: validity.too_short(),
        too_long: validity.too_long(),
    }
}

/// Constraint state of a form control, `None` for anything else
fn read_validity(field: &Element) -> Option<ValidityFlags> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some(flags(input.validity()));
    }
    if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        return Some(flags(select.validity()));
    }
    field.dyn_ref::<HtmlTextAreaElement>().map(|area| flags(area.validity()))
}

/// `.field-error` inside the group, created on first use
fn error_element(group: &Element) -> Result<Element, JsValue> {
    if let Some(existing) = group.query_selector(&format!(".{}", ERROR_CLASS))? {
        return Ok(existing);
    }
    let doc = dom::document().ok_or_else(|| JsValue::from_str("no document"))?;
    let error = doc.create_element("div")?;
    error.set_class_name(ERROR_CLASS);
    group.append_child(&error)?;
    Ok(error)
}

fn show_feedback(ctx: UiContext, field: &Element, message: Option<&'static str>) -> Result<(), JsValue> {
    let valid = message.is_none();
    field.set_attribute("aria-invalid", if valid { "false" } else { "true" })?;

    let Some(group) = field.closest(".form-group")? else {
        return Ok(());
    };
    dom::set_class(&group, "is-valid", valid)?;
    dom::set_class(&group, "is-invalid", !valid)?;

    // Valid fields without an error element need nothing created
    if valid && group.query_selector(&format!(".{}", ERROR_CLASS))?.is_none() {
        return Ok(());
    }
    let error = error_element(&group)?;
    error.set_text_content(message);
    if let Some(message) = message {
        ctx.announce(message);
    }
    Ok(())
}

/// Run browser constraint validation on `field` and show the result
pub fn validate_field(ctx: UiContext, field: &Element) -> bool {
    let Some(flags) = read_validity(field) else {
        return true;
    };
    let message = validation_message(flags);
    if let Err(e) = show_feedback(ctx, field, message) {
        log::warn!("Could not show validation feedback: {:?}", e);
    }
    message.is_none()
}

fn required_field(field: &Element) -> RequiredField {
    let name = field.get_attribute("name").filter(|name| !name.is_empty());
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return RequiredField { input_type: input.type_(), name, checked: input.checked(), value: input.value() };
    }
    let (input_type, value) = if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        ("select", select.value())
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        ("textarea", area.value())
    } else {
        ("other", String::new())
    };
    RequiredField { input_type: input_type.to_string(), name, checked: false, value }
}

/// Names of radio groups in the form with a checked radio
fn checked_radio_names(form: &Element) -> Vec<String> {
    dom::query_all_in(form, "input[type=\"radio\"]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .filter(|radio| radio.checked())
        .map(|radio| radio.name())
        .collect()
}

fn update_progress(form: &Element, indicator: &Element) -> Result<(), JsValue> {
    let checked_names = checked_radio_names(form);
    let fields: Vec<RequiredField> = dom::query_all_in(form, "[required]")
        .iter()
        .map(required_field)
        .map(|mut field| {
            // `required` on one radio makes the whole group required
            if field.input_type == "radio" {
                field.checked |= field.name.as_ref().is_some_and(|name| checked_names.contains(name));
            }
            field
        })
        .collect();
    let (filled, total) = required_progress(&fields);
    let percent = progress_percent(filled, total);

    let label = format!("{}%", percent);
    if let Some(bar) = indicator.dyn_ref::<HtmlElement>() {
        bar.style().set_property("width", &label)?;
    }
    indicator.set_attribute("aria-valuenow", &percent.to_string())?;
    indicator.set_text_content(Some(label.as_str()));
    Ok(())
}

fn init_progress() -> Result<(), JsValue> {
    for indicator in dom::query_all("[data-progress-for]") {
        let Some(form) = indicator.get_attribute("data-progress-for").and_then(|id| dom::by_id(&id)) else {
            continue;
        };
        update_progress(&form, &indicator)?;

        for event in ["input", "change"] {
            let form_ref = form.clone();
            let indicator = indicator.clone();
            dom::listen(&form, event, move |_| {
                if let Err(e) = update_progress(&form_ref, &indicator) {
                    log::warn!("Progress update failed: {:?}", e);
                }
            })?;
        }
    }
    Ok(())
}

fn bind_field(ctx: UiContext, field: &Element) -> Result<(), JsValue> {
    let target = field.clone();
    dom::listen(field, "focus", move |_| {
        if let Some(parent) = target.parent_element() {
            let _ = dom::set_class(&parent, "focused", true);
        }
    })?;

    let target = field.clone();
    dom::listen(field, "blur", move |_| {
        if let Some(parent) = target.parent_element() {
            let _ = dom::set_class(&parent, "focused", false);
        }
        validate_field(ctx, &target);
    })?;

    let target = field.clone();
    dom::listen(field, "input", move |_| {
        if target.has_attribute("required") {
            validate_field(ctx, &target);
        }
    })?;
    Ok(())
}

fn bind_submit(ctx: UiContext, form: &Element) -> Result<(), JsValue> {
    let form_ref = form.clone();
    let fallback_ms = ctx.config.submit_fallback_ms;
    dom::listen(form, "submit", move |_| {
        let button = form_ref
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let Some(button) = button else {
            return;
        };
        let _ = button.class_list().add_1("loading");
        button.set_disabled(true);

        Timeout::new(fallback_ms, move || {
            let _ = button.class_list().remove_1("loading");
            button.set_disabled(false);
        })
        .forget();
    })
}

pub fn init(ctx: UiContext) -> Result<(), JsValue> {
    let forms = dom::query_all("form");
    for form in &forms {
        for field in dom::query_all_in(form, FIELD_SELECTOR) {
            bind_field(ctx, &field)?;
        }
        bind_submit(ctx, form)?;
    }
    init_progress()?;
    log::debug!("Enhanced {} form(s)", forms.len());
    Ok(())
}
