use std::collections::HashMap;
use std::rc::Rc;

use shared::contact::ContactForm;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Clone)]
pub struct FormState {
    pub form: ContactForm,
    pub errors: Rc<HashMap<&'static str, &'static str>>,
    pub set_field: Callback<(ContactField, String)>,
    /// Validates and reports: `Ok` with the trimmed form or `Err` with field errors.
    pub validate: Callback<(), Result<ContactForm, ()>>,
    pub reset: Callback<()>,
}

impl FormState {
    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(field.key()).copied()
    }
}

#[hook]
pub fn use_form_state() -> FormState {
    let form = use_state(ContactForm::default);
    let errors = use_state(|| Rc::new(HashMap::new()));

    let set_field = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            let mut next = (*form).clone();
            match field {
                ContactField::Name => next.name = value,
                ContactField::Email => next.email = value,
                ContactField::Message => next.message = value,
            }
            // Clear the field's error once it is edited.
            if errors.contains_key(field.key()) {
                let mut remaining = (**errors).clone();
                remaining.remove(field.key());
                errors.set(Rc::new(remaining));
            }
            form.set(next);
        })
    };

    let validate = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |_| {
            let messages = form.field_messages();
            let valid = messages.is_empty();
            errors.set(Rc::new(messages));
            if valid { Ok(form.normalized()) } else { Err(()) }
        })
    };

    let reset = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |_| {
            form.set(ContactForm::default());
            errors.set(Rc::new(HashMap::new()));
        })
    };

    FormState {
        form: (*form).clone(),
        errors: (*errors).clone(),
        set_field,
        validate,
        reset,
    }
}
