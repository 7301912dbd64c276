use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_attribute = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_attribute, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_attribute:?}"
    );
}

#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str) -> ElementRef<'a> {
    form.select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""))
}

/// Assert the form has a required input called `name` of type `type_`.
#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = must_get_input(form, name);
    let input_type = input.value().attr("type").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    assert_form_input(form, name, type_);

    let input = must_get_input(form, name);
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_value, value,
        "want input with value \"{value}\", got {input_value:?}"
    );
}

/// Assert the input `name` carries the attribute `attribute="value"`, e.g. `min="0"`.
#[track_caller]
pub(crate) fn assert_input_attribute(
    form: &ElementRef<'_>,
    name: &str,
    attribute: &str,
    value: &str,
) {
    let input = must_get_input(form, name);
    let got = input.value().attr(attribute);

    assert_eq!(
        got,
        Some(value),
        "want input {name} with {attribute}=\"{value}\", got {got:?}"
    );
}

/// Assert the form has a required select called `name` and return the
/// `(value, text)` pairs of its options.
#[track_caller]
pub(crate) fn get_select_options(form: &ElementRef<'_>, name: &str) -> Vec<(String, String)> {
    let select = form
        .select(&Selector::parse("select").unwrap())
        .find(|select| select.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No select found with name \"{name}\""));

    assert!(
        select.value().attr("required").is_some(),
        "want select with name {name} to have the required attribute but got none"
    );

    select
        .select(&Selector::parse("option").unwrap())
        .map(|option| {
            (
                option.value().attr("value").unwrap_or_default().to_owned(),
                option.text().collect::<String>().trim().to_owned(),
            )
        })
        .collect()
}

/// The value of the option that is marked `selected` in the select called `name`.
#[track_caller]
pub(crate) fn get_selected_option(form: &ElementRef<'_>, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!("select[name={name}] option[selected]")).unwrap();

    form.select(&selector)
        .next()
        .and_then(|option| option.value().attr("value"))
        .map(str::to_owned)
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button[type=submit]").unwrap())
        .next()
        .expect("No submit button found");

    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}

/// Assert the error shown under the field `name` reads `want_error_message`.
#[track_caller]
pub(crate) fn assert_field_error_message(
    form: &ElementRef<'_>,
    name: &str,
    want_error_message: &str,
) {
    let selector = Selector::parse(&format!("p#{name}-error")).unwrap();
    let error_message = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No error message found for {name}"))
        .text()
        .collect::<Vec<_>>()
        .join("");
    let got_error_message = error_message.trim();

    assert_eq!(want_error_message, got_error_message);
}

#[track_caller]
pub(crate) fn assert_no_field_error_message(form: &ElementRef<'_>, name: &str) {
    let selector = Selector::parse(&format!("p#{name}-error")).unwrap();

    assert!(
        form.select(&selector).next().is_none(),
        "want no error message for {name}"
    );
}
