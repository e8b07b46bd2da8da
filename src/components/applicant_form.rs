//! Applicant form component: the four required text fields.

use leptos::*;

use crate::types::ApplicantForm;

#[component]
pub fn ApplicantFormCard(
    form: ReadSignal<ApplicantForm>,
    set_form: WriteSignal<ApplicantForm>,
) -> impl IntoView {
    view! {
        <div class="form-card" id="applicantForm">
            <input
                type="text"
                name="name"
                class="form-input"
                placeholder="Full name"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| f.name = value);
                }
            />
            <input
                type="email"
                name="email"
                class="form-input"
                placeholder="Email"
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| f.email = value);
                }
            />
            <input
                type="text"
                name="role"
                class="form-input"
                placeholder="Target role"
                prop:value=move || form.with(|f| f.role.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| f.role = value);
                }
            />
            <input
                type="text"
                name="skills"
                class="form-input"
                placeholder="Skills (comma-separated)"
                prop:value=move || form.with(|f| f.skills.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_form.update(|f| f.skills = value);
                }
            />
        </div>
    }
}
