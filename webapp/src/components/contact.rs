use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::warn;

use crate::common::dom;
use site::{
    SiteConfig,
    form::{self, Field, Phase, SubmitOutcome},
};

fn label_for(field: &Field) -> &str {
    match field {
        Field::Name => "Nome",
        Field::Email => "E-mail",
        Field::Subject => "Assunto",
        Field::Message => "Mensagem",
        Field::Other(name) => name,
    }
}

fn input_type(field: &Field) -> &'static str {
    match field {
        Field::Email => "email",
        _ => "text",
    }
}

#[component]
pub fn ContactForm() -> Element {
    let contact = use_context::<SiteConfig>().contact;
    let delay = contact.submit_delay_ms;
    let mut form = use_signal(|| form::ContactForm::new(&contact.fields));

    use_effect(move || {
        if form.read().phase() == Phase::Sent {
            if let Err(err) = dom::scroll_into_view("form-success") {
                warn!("failed to reveal confirmation: {err:#}");
            }
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        if form.with_mut(|f| f.submit()) != SubmitOutcome::Scheduled {
            return;
        }

        // there is no backend yet; pretend the message went out after a short delay.
        // the task belongs to this component and is dropped with it
        spawn(async move {
            TimeoutFuture::new(delay).await;
            form.with_mut(|f| f.complete_submission());
        });
    };

    rsx! {
        ContactFormView { form, onsubmit }
    }
}

#[component]
fn ContactFormView(form: Signal<form::ContactForm>, onsubmit: EventHandler<FormEvent>) -> Element {
    let (phase, names) = {
        let form = form.read();
        let names: Vec<String> = form.fields().map(|field| field.as_str().to_owned()).collect();
        (form.phase(), names)
    };
    let sent = phase == Phase::Sent;

    rsx! {
        form {
            id: "contact-form",
            class: "contact-form",
            "novalidate": "true",
            style: if sent { "display: none;" } else { "display: grid;" },
            onsubmit: move |evt| onsubmit.call(evt),

            for name in names {
                ContactField { form, name }
            }

            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: phase != Phase::Editing,
                "Enviar Mensagem"
            }
        }

        div {
            id: "form-success",
            class: "form-success",
            style: if sent { "display: block;" } else { "display: none;" },
            h3 { "Mensagem enviada com sucesso!" }
            p { "Obrigado pelo contato. Retornaremos em breve." }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ContactFieldProps {
    form: Signal<form::ContactForm>,
    name: String,
}

#[component]
fn ContactField(props: ContactFieldProps) -> Element {
    let mut form = props.form;
    let name = props.name;
    let field = Field::from(name.as_str());

    let (value, error, border) = {
        let form = form.read();
        (
            form.value(&name).to_owned(),
            form.error_text(&name),
            form.border_color(&name),
        )
    };

    let edited = name.clone();
    let oninput = move |evt: FormEvent| form.with_mut(|f| f.edit(&edited, evt.value()));

    let blurred = name.clone();
    let onblur = move |_: FocusEvent| {
        form.with_mut(|f| f.blur(&blurred));
    };

    rsx! {
        div { class: "form-group",
            label { r#for: "{name}", "{label_for(&field)}" }

            if field == Field::Message {
                textarea {
                    id: "{name}",
                    name: "{name}",
                    value: "{value}",
                    style: "border-color: {border};",
                    oninput: oninput,
                    onblur: onblur,
                }
            } else {
                input {
                    id: "{name}",
                    name: "{name}",
                    r#type: input_type(&field),
                    value: "{value}",
                    style: "border-color: {border};",
                    oninput: oninput,
                    onblur: onblur,
                }
            }

            span { id: "{field.error_slot()}", class: "error-message", "{error}" }
        }
    }
}
