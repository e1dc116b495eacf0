use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use shared::{max_length, ContactField, ContactRequest, FORM_NAME, FORM_NAME_FIELD, HONEYPOT_FIELD};
use crate::{config::CONFIG, styles::*};

struct FieldSpec {
    field: ContactField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const INPUT_FIELDS: [FieldSpec; 5] = [
    FieldSpec { field: ContactField::Name, label: "Your Name*", input_type: "text", placeholder: "John Doe" },
    FieldSpec { field: ContactField::Email, label: "Email Address*", input_type: "email", placeholder: "john@company.com" },
    FieldSpec { field: ContactField::Company, label: "Company", input_type: "text", placeholder: "Your Company" },
    FieldSpec { field: ContactField::Phone, label: "Phone Number", input_type: "tel", placeholder: "+1 (555) 123-4567" },
    FieldSpec { field: ContactField::PreferredDate, label: "Preferred Demo Date", input_type: "date", placeholder: "" },
];

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub section_ref: NodeRef,
    pub contact: ContactRequest,
    pub thank_you: Option<String>,
    pub on_input: Callback<(ContactField, String)>,
    /// Receives the honeypot input's value.
    pub on_submit: Callback<String>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    html! {
        <section id="contact" ref={props.section_ref.clone()} class={combine_classes(SECTION, "bg-white")}>
            <div class="max-w-3xl mx-auto">
                <div class={SECTION_HEADER}>
                    <h2 class={HEADING_LG}>{"Schedule Your Demo"}</h2>
                    <p class="text-xl text-gray-600">
                        {format!("Learn how {} can help your business engage and retain customers through our innovative platform.", CONFIG.brand_name)}
                    </p>
                </div>

                {match &props.thank_you {
                    Some(message) => html! { <ThankYou message={message.clone()} /> },
                    None => html! {
                        <ContactForm
                            contact={props.contact.clone()}
                            on_input={props.on_input.clone()}
                            on_submit={props.on_submit.clone()}
                        />
                    },
                }}

                <div class="mt-8 text-center text-gray-500 text-sm">
                    <p>
                        {"By submitting this form, you agree to our "}
                        <a href="#" class="text-orange-500 hover:underline">{"Privacy Policy"}</a>
                        {" and "}
                        <a href="#" class="text-orange-500 hover:underline">{"Terms of Service"}</a>
                        {"."}
                    </p>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ThankYouProps {
    message: String,
}

#[function_component(ThankYou)]
fn thank_you(props: &ThankYouProps) -> Html {
    html! {
        <div class={PANEL_SUCCESS} role="status">
            <div class="mx-auto mb-4 text-5xl text-green-500">{"✓"}</div>
            <h3 class={combine_classes(HEADING_MD, "text-green-800")}>{"Thank You!"}</h3>
            <p class="text-green-700 mb-4">
                {"Your demo request has been submitted successfully. We'll contact you shortly."}
            </p>
            <p class={TEXT_MUTED}>{&props.message}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactFormProps {
    contact: ContactRequest,
    on_input: Callback<(ContactField, String)>,
    on_submit: Callback<String>,
}

#[function_component(ContactForm)]
fn contact_form(props: &ContactFormProps) -> Html {
    let honeypot = use_node_ref();

    let onsubmit = {
        let honeypot = honeypot.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = honeypot.cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            on_submit.emit(value);
        })
    };

    let on_message = props.on_input.reform(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        (ContactField::Message, textarea.value())
    });

    html! {
        <div class={PANEL_FORM}>
            <div class="mb-6 pb-6 border-b border-gray-200">
                <div class="flex items-center text-gray-600 mb-2">
                    <span>{"Your request will be sent to "}<strong>{CONFIG.contact_email}</strong></span>
                </div>
                <p class={TEXT_BODY}>
                    {"Fill out the form below to schedule a personalized demo of our engagement platform."}
                </p>
            </div>

            <form {onsubmit} name={FORM_NAME} data-netlify="true" netlify-honeypot={HONEYPOT_FIELD}>
                <input type="hidden" name={FORM_NAME_FIELD} value={FORM_NAME} />
                <p class="hidden">
                    <label>{"Don’t fill this out: "}<input name={HONEYPOT_FIELD} ref={honeypot} /></label>
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {for INPUT_FIELDS.iter().map(|spec| html! {
                        <TextField
                            field={spec.field}
                            label={spec.label}
                            input_type={spec.input_type}
                            placeholder={spec.placeholder}
                            value={props.contact.get(spec.field).to_string()}
                            on_input={props.on_input.clone()}
                        />
                    })}
                </div>
                <div class="mt-6">
                    <label class={LABEL}>{"Additional Information or Questions"}</label>
                    <textarea
                        name={ContactField::Message.name()}
                        value={props.contact.message.clone()}
                        oninput={on_message}
                        rows="4"
                        maxlength={max_length(ContactField::Message).to_string()}
                        placeholder="Tell us a bit about your current loyalty program or any specific questions you have."
                        class={INPUT_BASE}
                    />
                </div>
                <div class="mt-8 text-center">
                    <button type="submit" class={button(BUTTON_PRIMARY)}>{"Request Demo"}</button>
                    <p class="mt-4 text-sm text-gray-500">{"We'll respond to your request within 24 business hours."}</p>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    field: ContactField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    on_input: Callback<(ContactField, String)>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let field = props.field;
    let oninput = props.on_input.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    });

    html! {
        <div>
            <label class={LABEL}>{props.label}</label>
            <input
                type={props.input_type}
                name={field.name()}
                value={props.value.clone()}
                {oninput}
                placeholder={props.placeholder}
                required={field.is_required()}
                maxlength={max_length(field).to_string()}
                class={INPUT_BASE}
            />
        </div>
    }
}
