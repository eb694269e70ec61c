use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

#[derive(Clone, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: String,
    pub message: String,
}

#[derive(Clone, Default, PartialEq)]
pub struct LeadFormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub license_type: Option<String>,
}

impl LeadFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.company.is_none()
            && self.license_type.is_none()
    }
}

// Same shape the signup form accepts: non-whitespace local part and
// domain, with at least one dot after the '@'.
pub(crate) fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    let (tld, host) = match (domain_parts.next(), domain_parts.next()) {
        (Some(tld), Some(host)) => (tld, host),
        _ => return false,
    };
    !tld.is_empty()
        && !host.is_empty()
        && !domain.chars().any(char::is_whitespace)
}

pub(crate) fn validate(form: &LeadForm) -> LeadFormErrors {
    let mut errors = LeadFormErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if form.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(form.email.trim()) {
        errors.email = Some("Please enter a valid email".to_string());
    }

    if form.company.trim().is_empty() {
        errors.company = Some("Company is required".to_string());
    }

    if form.license_type.is_empty() {
        errors.license_type = Some("Please select a license type".to_string());
    }

    errors
}

#[function_component(LeadCaptureForm)]
pub fn lead_capture_form() -> Html {
    let form = use_state(LeadForm::default);
    let errors = use_state(LeadFormErrors::default);
    let submitted = use_state(|| false);

    let on_name_input = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
            if errors.name.is_some() {
                let mut next = (*errors).clone();
                next.name = None;
                errors.set(next);
            }
        })
    };

    let on_email_input = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
            if errors.email.is_some() {
                let mut next = (*errors).clone();
                next.email = None;
                errors.set(next);
            }
        })
    };

    let on_company_input = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.company = input.value();
            form.set(next);
            if errors.company.is_some() {
                let mut next = (*errors).clone();
                next.company = None;
                errors.set(next);
            }
        })
    };

    let on_license_change = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.license_type = select.value();
            form.set(next);
            if errors.license_type.is_some() {
                let mut next = (*errors).clone();
                next.license_type = None;
                errors.set(next);
            }
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = textarea.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let result = validate(&form);
            if !result.is_empty() {
                errors.set(result);
                return;
            }

            // No backend endpoint yet; a real integration plugs in here.
            errors.set(LeadFormErrors::default());
            form.set(LeadForm::default());
            submitted.set(true);

            let submitted = submitted.clone();
            Timeout::new(4_000, move || {
                submitted.set(false);
            })
            .forget();
        })
    };

    let field_class = |error: &Option<String>| {
        if error.is_some() {
            "form-input invalid"
        } else {
            "form-input"
        }
    };

    html! {
        <form class="lead-form" onsubmit={on_submit}>
            {
                if *submitted {
                    html! {
                        <div class="success-message">
                            {"Thanks! Your request has been received. We'll get back to you with a valuation shortly."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="form-row">
                <div class="form-group">
                    <label for="lead-name">{"Full Name "}<span class="required-mark">{"*"}</span></label>
                    <input
                        id="lead-name"
                        type="text"
                        class={field_class(&errors.name)}
                        placeholder="Your full name"
                        value={form.name.clone()}
                        oninput={on_name_input}
                    />
                    {
                        if let Some(message) = errors.name.as_ref() {
                            html! { <div class="field-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="form-group">
                    <label for="lead-email">{"Email "}<span class="required-mark">{"*"}</span></label>
                    <input
                        id="lead-email"
                        type="email"
                        class={field_class(&errors.email)}
                        placeholder="Your email address"
                        value={form.email.clone()}
                        oninput={on_email_input}
                    />
                    {
                        if let Some(message) = errors.email.as_ref() {
                            html! { <div class="field-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="lead-company">{"Company "}<span class="required-mark">{"*"}</span></label>
                    <input
                        id="lead-company"
                        type="text"
                        class={field_class(&errors.company)}
                        placeholder="Your company name"
                        value={form.company.clone()}
                        oninput={on_company_input}
                    />
                    {
                        if let Some(message) = errors.company.as_ref() {
                            html! { <div class="field-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="form-group">
                    <label for="lead-license">{"License Type "}<span class="required-mark">{"*"}</span></label>
                    <select
                        id="lead-license"
                        class={field_class(&errors.license_type)}
                        value={form.license_type.clone()}
                        onchange={on_license_change}
                    >
                        <option value="" selected={form.license_type.is_empty()}>{"Select license type"}</option>
                        <option value="enterprise" selected={form.license_type == "enterprise"}>{"Enterprise Software"}</option>
                        <option value="productivity" selected={form.license_type == "productivity"}>{"Productivity Suite"}</option>
                        <option value="design" selected={form.license_type == "design"}>{"Design & Creative"}</option>
                        <option value="development" selected={form.license_type == "development"}>{"Development Tools"}</option>
                        <option value="security" selected={form.license_type == "security"}>{"Security & Infrastructure"}</option>
                        <option value="other" selected={form.license_type == "other"}>{"Other"}</option>
                    </select>
                    {
                        if let Some(message) = errors.license_type.as_ref() {
                            html! { <div class="field-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="form-group">
                <label for="lead-message">{"Message"}</label>
                <textarea
                    id="lead-message"
                    class="form-input"
                    rows="4"
                    placeholder="Tell us more about your licenses"
                    value={form.message.clone()}
                    oninput={on_message_input}
                />
            </div>
            <div class="form-submit">
                <button type="submit" class="submit-button">{"Submit Request"}</button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> LeadForm {
        LeadForm {
            name: "Jane Smith".to_string(),
            email: "jane@acme.com".to_string(),
            company: "Acme Corp".to_string(),
            license_type: "enterprise".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn valid_form_passes() {
        let errors = validate(&valid_form());
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = validate(&LeadForm::default());
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.company.is_some());
        assert!(errors.license_type.is_some());
    }

    #[test]
    fn missing_name_flags_only_name() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        let errors = validate(&form);
        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.company.is_none());
        assert!(errors.license_type.is_none());
    }

    #[test]
    fn malformed_email_flags_only_email() {
        for bad in ["jane", "jane@acme", "@acme.com", "jane@.com", "ja ne@acme.com", "jane@acme .com"] {
            let mut form = valid_form();
            form.email = bad.to_string();
            let errors = validate(&form);
            assert!(errors.email.is_some(), "expected error for {bad:?}");
            assert!(errors.name.is_none());
            assert!(errors.company.is_none());
            assert!(errors.license_type.is_none());
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn unselected_license_type_is_an_error() {
        let mut form = valid_form();
        form.license_type = String::new();
        let errors = validate(&form);
        assert!(errors.license_type.is_some());
        assert!(!errors.is_empty());
    }
}
