use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::Page, constant::SITE_NAME, model::error::ApiError, model::load::use_deferred,
    },
    model::{
        api::MessageDto,
        user::{RegisterFormDto, RegisterUserDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{get_register_form, register_user};

/// Fetches what the page needs before its first render.
async fn load_register_form() -> Result<RegisterFormDto, ApiError> {
    #[cfg(feature = "web")]
    {
        get_register_form().await
    }

    #[cfg(not(feature = "web"))]
    {
        Ok(RegisterFormDto::default())
    }
}

async fn submit_registration(dto: RegisterUserDto) -> Result<MessageDto, ApiError> {
    #[cfg(feature = "web")]
    {
        register_user(dto).await
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = dto;
        Err(ApiError {
            status: 503,
            message: "Registration is only available in the browser".to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
enum SubmitStatus {
    Success(String),
    Error(String),
}

#[component]
pub fn Register() -> Element {
    let form = use_deferred(load_register_form)?;

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "card bg-base-200 w-full max-w-md",
                div {
                    class: "card-body",
                    h2 {
                        class: "card-title",
                        "Create your account"
                    }
                    RegisterForm { form }
                }
            }
        }
    }
}

#[component]
fn RegisterForm(form: RegisterFormDto) -> Element {
    let mut username = use_signal(String::new);
    let mut email_address = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(|| None::<SubmitStatus>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let dto = RegisterUserDto {
            username: username().trim().to_string(),
            email_address: email_address().trim().to_string(),
            password: password(),
        };

        if let Err(err) = dto.validate(&form) {
            status.set(Some(SubmitStatus::Error(err.to_string())));
            return;
        }

        submitting.set(true);
        spawn(async move {
            match submit_registration(dto).await {
                Ok(response) => {
                    username.set(String::new());
                    email_address.set(String::new());
                    password.set(String::new());
                    status.set(Some(SubmitStatus::Success(response.message)));
                }
                Err(err) => {
                    tracing::error!("Failed to register user: {}", err);
                    status.set(Some(SubmitStatus::Error(err.message)));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "flex flex-col gap-4",
            onsubmit: on_submit,
            label {
                class: "form-control w-full",
                span { class: "label-text", "Username" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    name: "username",
                    maxlength: "{form.username_max_length}",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
            }
            label {
                class: "form-control w-full",
                span { class: "label-text", "Email address" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "email",
                    name: "email_address",
                    maxlength: "{form.email_address_max_length}",
                    value: "{email_address}",
                    oninput: move |evt| email_address.set(evt.value()),
                }
            }
            label {
                class: "form-control w-full",
                span { class: "label-text", "Password" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "password",
                    name: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            match status() {
                Some(SubmitStatus::Success(message)) => rsx! {
                    p { class: "text-success", "{message}" }
                },
                Some(SubmitStatus::Error(message)) => rsx! {
                    p { class: "text-error", "{message}" }
                },
                None => rsx! {},
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                if submitting() { "Registering..." } else { "Register" }
            }
        }
    }
}
